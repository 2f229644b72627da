//! An in-memory editor host on top of the `image` crate.
//!
//! Documents hold a stack of named layers, imports go through the
//! [`PixelSink`](paa_bridge::PixelSink) impl on [`ImageHost`] and exports read
//! the first layer through [`LayerSource`].

pub mod document;
pub mod error;
pub mod host;
pub mod source;

pub use document::{Document, Layer};
pub use error::{HostError, Result};
pub use host::{ImageHost, ImageId};
pub use source::LayerSource;
