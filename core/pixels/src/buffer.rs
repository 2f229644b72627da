use crate::error::{PixelError, Result};

/// Byte layout of one pixel. Channel order is always red, green, blue, then alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    Rgb,
    Rgba,
}

impl ChannelLayout {
    pub const fn channels(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::Rgba)
    }

    pub const fn from_has_alpha(has_alpha: bool) -> Self {
        if has_alpha {
            ChannelLayout::Rgba
        } else {
            ChannelLayout::Rgb
        }
    }
}

impl TryFrom<u32> for ChannelLayout {
    type Error = PixelError;

    fn try_from(channels: u32) -> Result<Self> {
        match channels {
            3 => Ok(ChannelLayout::Rgb),
            4 => Ok(ChannelLayout::Rgba),
            n => Err(PixelError::UnsupportedChannelCount(n)),
        }
    }
}

/// Byte count of a `width` x `height` plane in `layout`.
pub fn expected_len(width: u32, height: u32, layout: ChannelLayout) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(layout.channels()))
        .ok_or(PixelError::Overflow { width, height })
}

/// One tightly packed image plane.
///
/// The length always equals `width * height * channels`; transforms consume
/// the buffer and hand back a new one instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, layout: ChannelLayout, data: Vec<u8>) -> Result<Self> {
        let expected = expected_len(width, height, layout)?;
        if data.len() != expected {
            return Err(PixelError::LengthMismatch {
                width,
                height,
                channels: layout.channels(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn channel_count(&self) -> usize {
        self.layout.channels()
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / self.layout.channels()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
