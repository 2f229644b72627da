use pixels::{ChannelLayout, PixelBuffer};
use std::error::Error as StdError;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The editor could not materialise an imported image.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct HostWriteError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl HostWriteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A drawable the editor is exporting.
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Bytes per pixel of the editor's native representation.
    fn channel_count(&self) -> u32;

    /// Tightly packed 8-bit pixels in `layout`. Expected to hold exactly
    /// `width * height * layout.channels()` bytes.
    fn read(&mut self, width: u32, height: u32, layout: ChannelLayout) -> Vec<u8>;
}

/// The editor side of an import.
///
/// `create` allocates an image with one layer of the requested depth; the
/// handle is opaque to the bridge, which only passes it back to `write` or
/// `discard`.
pub trait PixelSink {
    type Handle;

    fn create(
        &mut self,
        name: &str,
        width: u32,
        height: u32,
        layout: ChannelLayout,
    ) -> Result<Self::Handle, HostWriteError>;

    fn write(&mut self, handle: &Self::Handle, pixels: PixelBuffer) -> Result<(), HostWriteError>;

    /// Throws away a partially built image.
    fn discard(&mut self, handle: Self::Handle);
}
