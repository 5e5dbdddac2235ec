use image::{DynamicImage, GrayImage};

use crate::{gray::to_gray, BucketMap, Levels};

/// The two ways of choosing output intensities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mapping {
    /// Uniform quantizer
    Levels(Levels),
    /// User-chosen values per bucket
    Buckets(BucketMap),
}

impl Mapping {
    /// Compile the mapping into a lookup table.
    pub fn lut(&self) -> Lut {
        match self {
            Mapping::Levels(levels) => Lut::from_fn(|v| levels.map(v)),
            Mapping::Buckets(buckets) => Lut::from_fn(|v| buckets.map(v)),
        }
    }
}

impl From<Levels> for Mapping {
    fn from(levels: Levels) -> Self {
        Mapping::Levels(levels)
    }
}

impl From<BucketMap> for Mapping {
    fn from(buckets: BucketMap) -> Self {
        Mapping::Buckets(buckets)
    }
}

/// 256-entry intensity lookup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lut {
    table: [u8; 256],
}

impl Lut {
    /// Build a table by evaluating `f` for every intensity.
    pub fn from_fn(mut f: impl FnMut(u8) -> u8) -> Self {
        let mut table = [0u8; 256];
        for (v, slot) in table.iter_mut().enumerate() {
            *slot = f(v as u8);
        }
        Self { table }
    }

    #[inline]
    pub fn get(&self, v: u8) -> u8 {
        self.table[v as usize]
    }

    /// Sorted distinct output intensities.
    pub fn distinct_outputs(&self) -> Vec<u8> {
        let mut used = [false; 256];
        for &out in &self.table {
            used[out as usize] = true;
        }
        (0..=255u8).filter(|&v| used[v as usize]).collect()
    }

    /// Map every pixel of `img` into a new image.
    pub fn apply(&self, img: &GrayImage) -> GrayImage {
        let mut out = img.clone();
        self.apply_in_place(&mut out);
        out
    }

    pub fn apply_in_place(&self, img: &mut GrayImage) {
        for px in img.iter_mut() {
            *px = self.table[*px as usize];
        }
    }
}

/// Convert `image` to grayscale and map it through `mapping`.
pub fn posterize(image: &DynamicImage, mapping: &Mapping) -> GrayImage {
    let mut gray = to_gray(image);
    mapping.lut().apply_in_place(&mut gray);
    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_identity_table() {
        let lut = Lut::from_fn(|v| v);
        assert_eq!(lut.distinct_outputs().len(), 256);
        assert_eq!(lut.get(77), 77);
    }

    #[test]
    fn test_apply_maps_every_pixel() {
        let img = GrayImage::from_fn(16, 16, |x, y| Luma([(y * 16 + x) as u8]));
        let lut = Mapping::from(Levels::new(2).unwrap()).lut();
        let out = lut.apply(&img);

        assert_eq!(out.dimensions(), (16, 16));
        assert_eq!(out.get_pixel(0, 0).0[0], 0);
        assert_eq!(out.get_pixel(14, 15).0[0], 0);
        assert_eq!(out.get_pixel(15, 15).0[0], 255);
    }

    #[test]
    fn test_bucket_lut_outputs_are_values() {
        let buckets = BucketMap::new(&[30, 90, 200], None).unwrap();
        let lut = Mapping::from(buckets).lut();
        assert_eq!(lut.distinct_outputs(), vec![30, 90, 200]);
    }

    #[test]
    fn test_posterize_rgb_input() {
        let rgb = image::RgbImage::from_pixel(3, 2, image::Rgb([255, 255, 255]));
        let out = posterize(
            &DynamicImage::ImageRgb8(rgb),
            &Mapping::from(BucketMap::new(&[5, 250], None).unwrap()),
        );
        assert!(out.pixels().all(|p| p.0[0] == 250));
    }
}
