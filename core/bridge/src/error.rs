use crate::codec::CodecError;
use crate::host::HostWriteError;
use mipmap::MipmapError;
use pixels::PixelError;
use std::fmt;
use thiserror::Error;

/// Pipeline step that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Normalize,
    Assemble,
    Codec,
    HostWrite,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Validate => "validate",
            Stage::Normalize => "normalize",
            Stage::Assemble => "assemble",
            Stage::Codec => "codec",
            Stage::HostWrite => "host-write",
        })
    }
}

/// Failure class, independent of where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller handed in something that can never be exported.
    Calling,
    Import,
    Export,
    HostWrite,
    /// A buffer or chain broke its own length/shape contract.
    CorruptData,
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("{stage}: Error during PAA export: {source}")]
    Calling { stage: Stage, source: PixelError },
    #[error("codec: Exception during PAA import: {0}")]
    Import(#[source] CodecError),
    #[error("codec: Exception during PAA export: {0}")]
    Export(#[source] CodecError),
    #[error("host-write: {0}")]
    HostWrite(#[source] HostWriteError),
    #[error("{stage}: corrupt pixel data: {source}")]
    CorruptPixels { stage: Stage, source: PixelError },
    #[error("{stage}: corrupt mipmap chain: {source}")]
    CorruptChain { stage: Stage, source: MipmapError },
}

impl BridgeError {
    pub fn stage(&self) -> Stage {
        match self {
            BridgeError::Calling { stage, .. }
            | BridgeError::CorruptPixels { stage, .. }
            | BridgeError::CorruptChain { stage, .. } => *stage,
            BridgeError::Import(_) | BridgeError::Export(_) => Stage::Codec,
            BridgeError::HostWrite(_) => Stage::HostWrite,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::Calling { .. } => ErrorKind::Calling,
            BridgeError::Import(_) => ErrorKind::Import,
            BridgeError::Export(_) => ErrorKind::Export,
            BridgeError::HostWrite(_) => ErrorKind::HostWrite,
            BridgeError::CorruptPixels { .. } | BridgeError::CorruptChain { .. } => {
                ErrorKind::CorruptData
            }
        }
    }

    pub(crate) fn pixels(stage: Stage) -> impl FnOnce(PixelError) -> Self {
        move |source| BridgeError::CorruptPixels { stage, source }
    }

    pub(crate) fn chain(stage: Stage) -> impl FnOnce(MipmapError) -> Self {
        move |source| BridgeError::CorruptChain { stage, source }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
