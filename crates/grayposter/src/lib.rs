//! # grayposter
//!
//! Grayscale posterization: reduce an image to a small set of gray levels.
//!
//! ## Features
//!
//! - **Levels**: uniform quantizer with 2-256 evenly spaced output levels
//! - **Buckets**: user-chosen output values, with evenly spaced or
//!   user-supplied bucket breakpoints
//!
//! Every mapping compiles to a 256-entry [`Lut`], so applying it costs one
//! table lookup per pixel.
//!
//! ## Quick Start
//!
//! ### Uniform levels
//!
//! ```ignore
//! use grayposter::{posterize_file, Levels, Mapping};
//!
//! let mapping = Mapping::Levels(Levels::new(4)?);
//! posterize_file("photo.jpg", "poster.png", &mapping)?;
//! ```
//!
//! ### Value buckets
//!
//! ```ignore
//! use grayposter::{BucketMap, Mapping};
//!
//! // 0..50 -> 10, 50..150 -> 128, 150..=255 -> 240
//! let buckets = BucketMap::new(&[10, 128, 240], Some(&[50, 150]))?;
//! let lut = Mapping::Buckets(buckets).lut();
//! assert_eq!(lut.get(149), 128);
//! ```

use thiserror::Error;

pub mod buckets;
pub mod gradient;
pub mod gray;
pub mod io;
pub mod levels;
pub mod list;
pub mod lut;
pub mod preview;

pub use buckets::BucketMap;
pub use gray::to_gray;
pub use io::{load_gray, posterize_file, save_gray, PosterizeReport};
pub use levels::Levels;
pub use list::{parse_levels, ValueList};
pub use lut::{posterize, Lut, Mapping};

pub use image;

/// Errors that can occur while building a mapping or posterizing a file.
#[derive(Debug, Error)]
pub enum PosterizeError {
    /// Level count outside the supported range
    #[error("levels must be between 2 and 256, got {0}")]
    InvalidLevels(i64),

    /// Bucket mode needs at least one target value
    #[error("at least one output value is required")]
    EmptyValues,

    /// A list item or level count that is not an integer
    #[error("invalid integer: {0:?}")]
    InvalidNumber(String),

    /// A list item outside 0-255
    #[error("value {0} is outside the range 0-255")]
    ValueOutOfRange(i64),

    /// Breakpoints are interior edges and must lie strictly between 0 and 255
    #[error("breakpoint {0} must be strictly between 0 and 255")]
    BreakpointOutOfRange(u8),

    /// Distinct breakpoints must number one less than the distinct values
    #[error("expected {expected} distinct breakpoints for the given values, got {actual}")]
    BreakpointCountMismatch { expected: usize, actual: usize },

    /// Decoding or encoding failed
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Result type for posterization operations.
pub type Result<T> = core::result::Result<T, PosterizeError>;

/// Fewest output levels the uniform quantizer accepts.
pub const MIN_LEVELS: u16 = 2;
/// Most output levels the uniform quantizer accepts.
pub const MAX_LEVELS: u16 = 256;
