//! Uniform quantizer.
//!
//! Splits the 0-255 range into `count - 1` equal steps. An input is first
//! scaled down to its step index and then scaled back up, so the outputs
//! are exactly `count` values spread from 0 to 255.
//!
//! Both steps use exact integer floor division, so a few (count, value)
//! pairs differ by a level or two from a floating-point rescale.

use crate::{PosterizeError, Result, MAX_LEVELS, MIN_LEVELS};

/// A validated level count for the uniform quantizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Levels {
    count: u16,
}

impl Levels {
    /// Create a quantizer with `count` output levels (2-256).
    pub fn new(count: u16) -> Result<Self> {
        if !(MIN_LEVELS..=MAX_LEVELS).contains(&count) {
            return Err(PosterizeError::InvalidLevels(count as i64));
        }
        log::debug!("uniform quantizer with {} levels", count);
        Ok(Self { count })
    }

    /// Number of distinct output levels.
    #[inline]
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Map one intensity to its level.
    #[inline]
    pub fn map(&self, v: u8) -> u8 {
        let steps = u32::from(self.count) - 1;
        let q = u32::from(v) * steps / 255;
        (q * 255 / steps) as u8
    }

    /// All output levels in ascending order.
    pub fn outputs(&self) -> Vec<u8> {
        let steps = u32::from(self.count) - 1;
        (0..=steps).map(|q| (q * 255 / steps) as u8).collect()
    }
}
