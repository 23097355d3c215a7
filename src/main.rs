#![warn(clippy::all)]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    use conway_canvas::{App, Config};
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();
    log::info!(
        "Starting viewer with a {}x{} field",
        Config::FIELD_WIDTH,
        Config::FIELD_HEIGHT
    );

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )
}

// The browser build is driven from JavaScript through the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
