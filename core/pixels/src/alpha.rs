//! Conversion between the 3-channel layout the editor may expose and the
//! 4-channel layout PAA mipmaps always store.
//!
//! Both directions keep pixel order and pixel count; only the channel width
//! changes. The stride is checked before any indexing, so a buffer that
//! breaks the `width * height * channels` contract is reported instead of
//! being read past its end.

use crate::buffer::{ChannelLayout, PixelBuffer};
use crate::error::{PixelError, Result};

pub const OPAQUE_ALPHA: u8 = 255;

fn pixels<const N: usize>(data: &[u8]) -> Result<&[[u8; N]]>
where
    [u8; N]: bytemuck::Pod,
{
    bytemuck::try_cast_slice(data).map_err(|_| PixelError::MisalignedStride {
        len: data.len(),
        stride: N,
    })
}

/// Drops the alpha byte of every RGBA pixel.
pub fn strip_alpha(rgba: &[u8]) -> Result<Vec<u8>> {
    let src = pixels::<4>(rgba)?;
    let mut out = Vec::with_capacity(src.len() * 3);
    for &[r, g, b, _] in src {
        out.extend_from_slice(&[r, g, b]);
    }
    Ok(out)
}

/// Appends a fully opaque alpha byte to every RGB pixel.
pub fn expand_alpha(rgb: &[u8]) -> Result<Vec<u8>> {
    let src = pixels::<3>(rgb)?;
    let mut out = Vec::with_capacity(src.len() * 4);
    for &[r, g, b] in src {
        out.extend_from_slice(&[r, g, b, OPAQUE_ALPHA]);
    }
    Ok(out)
}

/// Whether any pixel of an RGBA plane is not fully opaque.
pub fn has_translucency(rgba: &[u8]) -> bool {
    rgba.chunks_exact(4).any(|px| px[3] != OPAQUE_ALPHA)
}

/// RGBA -> RGB. RGB input is returned as is.
pub fn strip(buf: PixelBuffer) -> Result<PixelBuffer> {
    match buf.layout() {
        ChannelLayout::Rgb => Ok(buf),
        ChannelLayout::Rgba => {
            let (width, height) = (buf.width(), buf.height());
            let data = strip_alpha(buf.as_bytes())?;
            PixelBuffer::new(width, height, ChannelLayout::Rgb, data)
        }
    }
}

/// RGB -> RGBA with opaque alpha. RGBA input is returned as is.
pub fn expand(buf: PixelBuffer) -> Result<PixelBuffer> {
    match buf.layout() {
        ChannelLayout::Rgba => Ok(buf),
        ChannelLayout::Rgb => {
            let (width, height) = (buf.width(), buf.height());
            let data = expand_alpha(buf.as_bytes())?;
            PixelBuffer::new(width, height, ChannelLayout::Rgba, data)
        }
    }
}

pub fn to_layout(buf: PixelBuffer, layout: ChannelLayout) -> Result<PixelBuffer> {
    match layout {
        ChannelLayout::Rgb => strip(buf),
        ChannelLayout::Rgba => expand(buf),
    }
}
