//! Native file pickers and message boxes.

use std::path::PathBuf;

use native_dialog::{DialogBuilder, MessageLevel};

use crate::form::with_default_extension;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

fn picked(result: Result<Option<PathBuf>, native_dialog::Error>, what: &str) -> Option<PathBuf> {
    match result {
        Ok(path) => path,
        Err(e) => {
            log::warn!("{what} failed: {e}");
            show_error(&format!("{what} failed. Reason: {e}"));
            None
        }
    }
}

pub fn pick_input() -> Option<PathBuf> {
    let result = DialogBuilder::file()
        .set_title("Select Input Image")
        .add_filter("Image Files", IMAGE_EXTENSIONS)
        .open_single_file()
        .show();

    picked(result, "Choose input file")
}

pub fn pick_output(current: &str) -> Option<PathBuf> {
    let mut dialog = DialogBuilder::file()
        .set_title("Select Output Image")
        .add_filter("JPEG", &["jpg", "jpeg"])
        .add_filter("PNG", &["png"])
        .add_filter("BMP", &["bmp"]);

    let current = PathBuf::from(current.trim());
    if let Some(name) = current.file_name().and_then(|n| n.to_str()) {
        dialog = dialog.set_filename(name);
    }

    let result = dialog.save_single_file().show();
    picked(result, "Choose output file").map(with_default_extension)
}

pub fn show_error(text: &str) {
    let result = DialogBuilder::message()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_text(text)
        .alert()
        .show();

    if let Err(e) = result {
        log::error!("{text} (message box failed: {e})");
    }
}

pub fn show_info(title: &str, text: &str) {
    let result = DialogBuilder::message()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_text(text)
        .alert()
        .show();

    if let Err(e) = result {
        log::warn!("message box failed: {e}");
    }
}
