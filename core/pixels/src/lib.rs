pub mod alpha;
pub mod buffer;
pub mod error;
pub mod validate;

pub use alpha::{OPAQUE_ALPHA, expand, expand_alpha, has_translucency, strip, strip_alpha, to_layout};
pub use buffer::{ChannelLayout, PixelBuffer, expected_len};
pub use error::{PixelError, Result};
pub use validate::{check_dimensions, is_power_of_two};
