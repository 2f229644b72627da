use crate::error::{MipmapError, Result};
use pixels::{ChannelLayout, PixelBuffer};

/// One resolution tier of a texture. Data is always RGBA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipmapLevel {
    width: u32,
    height: u32,
    data: PixelBuffer,
}

impl MipmapLevel {
    pub fn new(width: u32, height: u32, data: PixelBuffer) -> Result<Self> {
        if data.layout() != ChannelLayout::Rgba {
            return Err(MipmapError::NotRgba(data.channel_count()));
        }
        if data.width() != width || data.height() != height {
            return Err(MipmapError::DimensionMismatch {
                level_width: width,
                level_height: height,
                data_width: data.width(),
                data_height: data.height(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let data = PixelBuffer::new(width, height, ChannelLayout::Rgba, rgba)?;
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &PixelBuffer {
        &self.data
    }

    pub fn into_data(self) -> PixelBuffer {
        self.data
    }

    /// Byte count of the level; always equal to `data().len()`.
    pub fn data_length(&self) -> usize {
        self.data.len()
    }
}

/// Ordered levels of one texture, level 0 being full resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipmapChain {
    levels: Vec<MipmapLevel>,
    has_transparency: bool,
}

impl MipmapChain {
    pub fn new(levels: Vec<MipmapLevel>, has_transparency: bool) -> Self {
        Self {
            levels,
            has_transparency,
        }
    }

    pub fn levels(&self) -> &[MipmapLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn has_transparency(&self) -> bool {
        self.has_transparency
    }

    pub fn set_has_transparency(&mut self, has_transparency: bool) {
        self.has_transparency = has_transparency;
    }

    pub fn base(&self) -> Result<&MipmapLevel> {
        self.levels.first().ok_or(MipmapError::EmptyChain)
    }

    pub fn into_base(self) -> Result<MipmapLevel> {
        self.levels.into_iter().next().ok_or(MipmapError::EmptyChain)
    }

    /// Appends the next (smaller) level. Used by codecs filling in the chain.
    pub fn push(&mut self, level: MipmapLevel) {
        self.levels.push(level);
    }
}
