pub mod assemble;
pub mod error;
pub mod types;

pub use assemble::build;
pub use error::{MipmapError, Result};
pub use types::{MipmapChain, MipmapLevel};
