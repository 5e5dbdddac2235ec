use image::{imageops, GrayImage};

/// Shrink `img` so neither side exceeds `max_side`, keeping the aspect ratio.
///
/// Images that already fit are returned unchanged.
pub fn downscale(img: &GrayImage, max_side: u32) -> GrayImage {
    let (w, h) = img.dimensions();
    let max_side = max_side.max(1);
    if w <= max_side && h <= max_side {
        return img.clone();
    }

    let scale = max_side as f64 / w.max(h) as f64;
    let new_w = ((w as f64 * scale).round() as u32).max(1);
    let new_h = ((h as f64 * scale).round() as u32).max(1);
    imageops::thumbnail(img, new_w, new_h)
}
