//! Grayscale conversion using ITU-R 601-2 luma weights.

use image::{DynamicImage, GrayImage, Luma};

// 0.299, 0.587, 0.114 in 16.16 fixed point; they sum to exactly 1 << 16.
const WEIGHT_R: u32 = 19595;
const WEIGHT_G: u32 = 38470;
const WEIGHT_B: u32 = 7471;

/// Luma of one sRGB pixel.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let l = u32::from(r) * WEIGHT_R + u32::from(g) * WEIGHT_G + u32::from(b) * WEIGHT_B;
    ((l + 0x8000) >> 16) as u8
}

/// Convert any decoded image to single-channel 8-bit grayscale.
///
/// 8-bit gray images are returned as-is; alpha is dropped.
pub fn to_gray(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        DynamicImage::ImageLumaA8(gray_alpha) => {
            GrayImage::from_fn(gray_alpha.width(), gray_alpha.height(), |x, y| {
                Luma([gray_alpha.get_pixel(x, y).0[0]])
            })
        }
        other => {
            let rgb = other.to_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                Luma([luma(r, g, b)])
            })
        }
    }
}
