use pixels::PixelError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MipmapError {
    #[error("Pixel error: {0}")]
    Pixel(#[from] PixelError),
    #[error("Mipmap chain has no levels")]
    EmptyChain,
    #[error("Mipmap level must hold RGBA data, got {0} channels")]
    NotRgba(usize),
    #[error("Mipmap level is {level_width}x{level_height} but its data is {data_width}x{data_height}")]
    DimensionMismatch {
        level_width: u32,
        level_height: u32,
        data_width: u32,
        data_height: u32,
    },
}

pub type Result<T> = std::result::Result<T, MipmapError>;
