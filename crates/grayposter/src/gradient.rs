//! Helpers for the clickable intensity strip.

use image::{GrayImage, Luma};

/// A horizontal black-to-white ramp.
pub fn ramp(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, _| Luma([value_at(x as f32, width as f32)]))
}

/// Intensity under position `x` on a strip `width` wide.
///
/// The strip is divided into 256 equal cells; positions outside the strip
/// clamp to the nearest end.
pub fn value_at(x: f32, width: f32) -> u8 {
    if width.is_nan() || x.is_nan() || width <= 0.0 || x <= 0.0 {
        return 0;
    }
    let cell = (x / width * 256.0).floor();
    cell.min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_ends() {
        assert_eq!(value_at(0.0, 512.0), 0);
        assert_eq!(value_at(-5.0, 512.0), 0);
        assert_eq!(value_at(511.9, 512.0), 255);
        assert_eq!(value_at(512.0, 512.0), 255);
        assert_eq!(value_at(900.0, 512.0), 255);
    }

    #[test]
    fn test_value_at_cells() {
        assert_eq!(value_at(2.0, 512.0), 1);
        assert_eq!(value_at(256.0, 512.0), 128);
        assert_eq!(value_at(10.0, 0.0), 0);
    }

    #[test]
    fn test_ramp_is_monotonic() {
        let strip = ramp(256, 2);
        for x in 0..256u32 {
            assert_eq!(strip.get_pixel(x, 1).0[0], x as u8);
        }
    }
}
