use crate::error::{PixelError, Result};

/// True iff `x` is 2^n for some n >= 0. Zero is rejected.
pub const fn is_power_of_two(x: u32) -> bool {
    x != 0 && (x & (x - 1)) == 0
}

/// Width and height are checked independently; non-square textures are fine.
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if !is_power_of_two(width) || !is_power_of_two(height) {
        return Err(PixelError::NotPowerOfTwo { width, height });
    }
    Ok(())
}
