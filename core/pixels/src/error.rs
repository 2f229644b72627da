use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PixelError {
    #[error("Dimensions have to be a power of two (2^n), got {width}x{height}")]
    NotPowerOfTwo { width: u32, height: u32 },
    #[error("Unsupported channel count {0}: expected 3 (RGB) or 4 (RGBA)")]
    UnsupportedChannelCount(u32),
    #[error(
        "Buffer length mismatch: {width}x{height}x{channels} needs {expected} bytes, got {actual}"
    )]
    LengthMismatch {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Buffer length {len} is not a multiple of the {stride}-byte pixel stride")]
    MisalignedStride { len: usize, stride: usize },
    #[error("Dimensions {width}x{height} overflow the addressable buffer size")]
    Overflow { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, PixelError>;
