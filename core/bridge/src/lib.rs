pub mod codec;
pub mod error;
pub mod export;
pub mod host;
pub mod import;

pub use codec::{Codec, CodecError, InitializedCodec};
pub use error::{BridgeError, ErrorKind, Result, Stage};
pub use export::{ExportBridge, prepare};
pub use host::{HostWriteError, PixelSink, PixelSource};
pub use import::{ImportBridge, ImportedImage};
