use crate::codec::{Codec, InitializedCodec};
use crate::error::{BridgeError, Result, Stage};
use crate::host::PixelSource;
use mipmap::MipmapChain;
use pixels::{ChannelLayout, PixelBuffer};
use std::path::Path;

/// Validates, normalizes and packages a raw editor buffer as a single-level
/// RGBA chain, without touching the codec.
pub fn prepare(width: u32, height: u32, layout: ChannelLayout, raw: Vec<u8>) -> Result<MipmapChain> {
    pixels::check_dimensions(width, height).map_err(|source| BridgeError::Calling {
        stage: Stage::Validate,
        source,
    })?;
    normalize_and_build(width, height, layout, raw)
}

fn normalize_and_build(
    width: u32,
    height: u32,
    layout: ChannelLayout,
    raw: Vec<u8>,
) -> Result<MipmapChain> {
    let buffer = PixelBuffer::new(width, height, layout, raw)
        .map_err(BridgeError::pixels(Stage::Normalize))?;
    let rgba = pixels::expand(buffer).map_err(BridgeError::pixels(Stage::Normalize))?;
    mipmap::build(width, height, rgba.into_bytes()).map_err(BridgeError::chain(Stage::Assemble))
}

pub struct ExportBridge<'c, C> {
    codec: &'c InitializedCodec<C>,
}

impl<'c, C: Codec> ExportBridge<'c, C> {
    pub fn new(codec: &'c InitializedCodec<C>) -> Self {
        Self { codec }
    }

    /// Writes the drawable behind `source` to `path` as a PAA texture.
    ///
    /// Nothing is read from `source` unless both dimensions are powers of two
    /// and the channel count is one the format can carry.
    pub fn export<S: PixelSource + ?Sized>(&self, path: &Path, source: &mut S) -> Result<()> {
        let (width, height) = (source.width(), source.height());
        let calling = |err| BridgeError::Calling {
            stage: Stage::Validate,
            source: err,
        };
        pixels::check_dimensions(width, height).map_err(calling)?;
        let layout = ChannelLayout::try_from(source.channel_count()).map_err(calling)?;

        log::debug!("Reading {}x{} {:?} drawable for {:?}", width, height, layout, path);
        let raw = source.read(width, height, layout);
        let chain = normalize_and_build(width, height, layout, raw)?;

        let chain = self
            .codec
            .calculate_mipmaps_and_tags(chain)
            .map_err(BridgeError::Export)?;
        log::debug!("Encoding {} mip levels to {:?}", chain.len(), path);
        self.codec.encode(path, &chain).map_err(BridgeError::Export)?;

        log::info!("Exported {:?} ({}x{})", path, width, height);
        Ok(())
    }
}
