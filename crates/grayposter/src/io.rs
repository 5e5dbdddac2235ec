//! File pipeline: decode, convert to gray, map, encode.

use std::path::Path;

use image::GrayImage;

use crate::{gray::to_gray, Mapping, Result};

/// Summary of a finished [`posterize_file`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PosterizeReport {
    pub width: u32,
    pub height: u32,
    /// Distinct intensities present in the written image
    pub distinct_levels: usize,
}

/// Open an image file and convert it to 8-bit grayscale.
pub fn load_gray(path: impl AsRef<Path>) -> Result<GrayImage> {
    let path = path.as_ref();
    let img = image::open(path)?;
    log::debug!(
        "loaded '{}' ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(to_gray(&img))
}

/// Write a grayscale image; the format follows the file extension.
pub fn save_gray(path: impl AsRef<Path>, img: &GrayImage) -> Result<()> {
    let path = path.as_ref();
    img.save(path)?;
    log::debug!("saved '{}'", path.display());
    Ok(())
}

/// Posterize `input` with `mapping` and write the result to `output`.
pub fn posterize_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    mapping: &Mapping,
) -> Result<PosterizeReport> {
    let mut img = load_gray(input)?;
    let lut = mapping.lut();
    lut.apply_in_place(&mut img);
    save_gray(output, &img)?;

    let mut seen = [false; 256];
    for &px in img.iter() {
        seen[px as usize] = true;
    }

    Ok(PosterizeReport {
        width: img.width(),
        height: img.height(),
        distinct_levels: seen.iter().filter(|&&s| s).count(),
    })
}
