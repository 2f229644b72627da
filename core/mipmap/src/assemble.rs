use crate::error::Result;
use crate::types::{MipmapChain, MipmapLevel};
use pixels::has_translucency;

/// Packages a normalized RGBA base image as a single-level chain.
///
/// Smaller levels are left to the codec. Dimensions are expected to have
/// been validated already and are not checked again here; only the buffer
/// length is, since a mismatch means the normalization step misbehaved.
pub fn build(width: u32, height: u32, rgba: Vec<u8>) -> Result<MipmapChain> {
    let level = MipmapLevel::from_rgba(width, height, rgba)?;
    let has_transparency = has_translucency(level.data().as_bytes());
    Ok(MipmapChain::new(vec![level], has_transparency))
}
