//! Seam to the PAA encoder/decoder.
//!
//! The on-disk container (magic, taggs, LZO/LZSS/DXT payloads) lives entirely
//! behind [`Codec`]; the bridges only ever see the in-memory [`MipmapChain`].

use mipmap::MipmapChain;
use std::error::Error as StdError;
use std::ops::Deref;
use std::path::Path;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Error, Debug)]
#[error("{message}")]
pub struct CodecError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl CodecError {
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

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(err.to_string(), err)
    }
}

pub trait Codec {
    /// One-time setup, run by [`InitializedCodec::new`] before any pipeline call.
    fn initialize(&self) -> Result<(), CodecError> {
        Ok(())
    }

    fn decode(&self, path: &Path) -> Result<MipmapChain, CodecError>;

    /// Fills in the smaller mip levels and the format taggs of a chain that
    /// holds only its base level.
    fn calculate_mipmaps_and_tags(&self, chain: MipmapChain) -> Result<MipmapChain, CodecError>;

    fn encode(&self, path: &Path, chain: &MipmapChain) -> Result<(), CodecError>;
}

impl<C: Codec + ?Sized> Codec for &C {
    fn initialize(&self) -> Result<(), CodecError> {
        (**self).initialize()
    }

    fn decode(&self, path: &Path) -> Result<MipmapChain, CodecError> {
        (**self).decode(path)
    }

    fn calculate_mipmaps_and_tags(&self, chain: MipmapChain) -> Result<MipmapChain, CodecError> {
        (**self).calculate_mipmaps_and_tags(chain)
    }

    fn encode(&self, path: &Path, chain: &MipmapChain) -> Result<(), CodecError> {
        (**self).encode(path, chain)
    }
}

/// A codec whose [`Codec::initialize`] has run.
///
/// Create one per process and lend it to the bridges; they borrow it and
/// never take ownership.
#[derive(Debug)]
pub struct InitializedCodec<C> {
    codec: C,
}

impl<C: Codec> InitializedCodec<C> {
    pub fn new(codec: C) -> Result<Self, CodecError> {
        codec.initialize()?;
        log::debug!("PAA codec initialized");
        Ok(Self { codec })
    }

    pub fn into_inner(self) -> C {
        self.codec
    }
}

impl<C> Deref for InitializedCodec<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.codec
    }
}
