use std::path::{Path, PathBuf};

use grayposter::image::GrayImage;
use grayposter::{gradient, load_gray, preview::downscale, Mapping};
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};

/// Longest side of the cached preview source.
const PREVIEW_SIDE: u32 = 480;

/// Downscaled copy of the current input image.
#[derive(Default)]
pub struct PreviewSource {
    path: Option<PathBuf>,
    image: Option<GrayImage>,
    error: Option<String>,
}

impl PreviewSource {
    /// Point the preview at `path`, reloading only when it changed.
    ///
    /// Paths that are empty or not an existing file clear the preview.
    pub fn set_path(&mut self, path: &str) -> grayposter::Result<()> {
        let path = Path::new(path.trim());
        if self.path.as_deref() == Some(path) {
            return Ok(());
        }

        self.path = None;
        self.image = None;
        self.error = None;
        if path.as_os_str().is_empty() || !path.is_file() {
            return Ok(());
        }

        let image = load_gray(path).inspect_err(|e| {
            self.error = Some(format!("Failed to load preview: {e}"));
        })?;
        log::debug!(
            "preview source '{}' ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.image = Some(downscale(&image, PREVIEW_SIDE));
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn image(&self) -> Option<&GrayImage> {
        self.image.as_ref()
    }

    /// Why the last path could not be previewed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

pub fn to_slint_image(img: &GrayImage) -> Image {
    let rgb: Vec<u8> = img.iter().flat_map(|&v| [v, v, v]).collect();
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&rgb, img.width(), img.height());
    Image::from_rgb8(buffer)
}

/// The plain 0-255 ramp behind the clickable strip.
pub fn gradient_strip() -> Image {
    to_slint_image(&gradient::ramp(256, 1))
}

/// The ramp after `mapping`, showing where each bucket begins.
pub fn mapped_strip(mapping: &Mapping) -> Image {
    to_slint_image(&mapping.lut().apply(&gradient::ramp(256, 1)))
}

pub fn posterized(source: &PreviewSource, mapping: &Mapping) -> Image {
    match source.image() {
        Some(img) => to_slint_image(&mapping.lut().apply(img)),
        None => Image::default(),
    }
}
