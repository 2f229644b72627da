use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Unknown image: {0}")]
    UnknownImage(usize),
    #[error("Image {0} has no layers")]
    NoLayers(usize),
}

pub type Result<T> = std::result::Result<T, HostError>;
