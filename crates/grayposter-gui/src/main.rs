//! grayposter-gui - Desktop front end for grayscale posterization
//!
//! File pickers, live previews, and a clickable gradient strip on top of
//! the `grayposter` library.

#![windows_subsystem = "windows"]

slint::include_modules!();

mod dialogs;
mod form;
mod preview;

use std::cell::RefCell;
use std::rc::Rc;

use form::Form;
use grayposter::{gradient, posterize_file};
use preview::PreviewSource;
use slint::{ComponentHandle, Image};

fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{style}{}{style:#} {} {}] {}",
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn read_form(ui: &AppWindow) -> Form {
    Form {
        input: ui.get_input_path().into(),
        output: ui.get_output_path().into(),
        mode_index: ui.get_mode_index(),
        levels: ui.get_levels_text().into(),
        values: ui.get_values_text().into(),
        breakpoints: ui.get_breakpoints_text().into(),
    }
}

/// Recompute the mapped strip and the posterized preview.
fn refresh_preview(ui: &AppWindow, source: &PreviewSource) {
    match read_form(ui).mapping() {
        Ok(mapping) => {
            ui.set_mapped_gradient(preview::mapped_strip(&mapping));
            ui.set_posterized_preview(preview::posterized(source, &mapping));
            ui.set_preview_status(source.error().unwrap_or_default().into());
        }
        Err(e) => {
            ui.set_mapped_gradient(Image::default());
            ui.set_posterized_preview(Image::default());
            ui.set_preview_status(e.to_string().into());
        }
    }
}

/// Reload the preview source after the input path changed.
fn reload_source(ui: &AppWindow, source: &mut PreviewSource) {
    if let Err(e) = source.set_path(&ui.get_input_path()) {
        log::warn!("Failed to load preview: {e}");
    }

    let original = source.image().map(preview::to_slint_image).unwrap_or_default();
    ui.set_original_preview(original);
}

fn process(ui: &AppWindow) {
    let job = match read_form(ui).job() {
        Ok(job) => job,
        Err(e) => {
            dialogs::show_error(&e.to_string());
            return;
        }
    };

    log::info!(
        "Posterizing '{}' -> '{}'",
        job.input.display(),
        job.output.display()
    );

    match posterize_file(&job.input, &job.output, &job.mapping) {
        Ok(report) => {
            log::info!(
                "Wrote {}x{} image with {} gray levels",
                report.width,
                report.height,
                report.distinct_levels
            );
            dialogs::show_info(
                "Success",
                &format!("Posterized image saved to:\n{}", job.output.display()),
            );
        }
        Err(e) => dialogs::show_error(&e.to_string()),
    }
}

fn main() -> Result<(), slint::PlatformError> {
    init_logger();

    let ui = AppWindow::new()?;
    let source = Rc::new(RefCell::new(PreviewSource::default()));

    ui.set_gradient(preview::gradient_strip());
    refresh_preview(&ui, &source.borrow());

    ui.on_browse_input({
        let ui_weak = ui.as_weak();
        let source = source.clone();
        move || {
            let Some(ui) = ui_weak.upgrade() else { return };
            if let Some(path) = dialogs::pick_input() {
                ui.set_input_path(path.to_string_lossy().as_ref().into());
                reload_source(&ui, &mut source.borrow_mut());
                refresh_preview(&ui, &source.borrow());
            }
        }
    });

    ui.on_browse_output({
        let ui_weak = ui.as_weak();
        move || {
            let Some(ui) = ui_weak.upgrade() else { return };
            if let Some(path) = dialogs::pick_output(&ui.get_output_path()) {
                ui.set_output_path(path.to_string_lossy().as_ref().into());
            }
        }
    });

    ui.on_input_edited({
        let ui_weak = ui.as_weak();
        let source = source.clone();
        move || {
            let Some(ui) = ui_weak.upgrade() else { return };
            reload_source(&ui, &mut source.borrow_mut());
            refresh_preview(&ui, &source.borrow());
        }
    });

    ui.on_parameters_changed({
        let ui_weak = ui.as_weak();
        let source = source.clone();
        move || {
            let Some(ui) = ui_weak.upgrade() else { return };
            refresh_preview(&ui, &source.borrow());
        }
    });

    ui.on_gradient_clicked({
        let ui_weak = ui.as_weak();
        let source = source.clone();
        move |x, width| {
            let Some(ui) = ui_weak.upgrade() else { return };
            let value = gradient::value_at(x, width);
            log::debug!("gradient pick {value}");
            ui.set_values_text(form::append_value(&ui.get_values_text(), value).into());
            refresh_preview(&ui, &source.borrow());
        }
    });

    ui.on_process({
        let ui_weak = ui.as_weak();
        move || {
            let Some(ui) = ui_weak.upgrade() else { return };
            process(&ui);
        }
    });

    ui.run()
}
