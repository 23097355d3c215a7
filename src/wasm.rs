use crate::{Cell, Universe};
use log::{Level, Log, Metadata, Record};
use std::panic::PanicInfo;
use wasm_bindgen::prelude::*;
use web_sys::console;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    std::panic::set_hook(Box::new(panic_hook));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::Level::Info.to_level_filter());
    }
}

/// The field as seen from JavaScript.
///
/// `cells()` and `alive_neighbours()` point into wasm memory at
/// `width * height` bytes each; the views stay valid until the next call
/// that mutates the field.
#[wasm_bindgen(js_name = Universe)]
pub struct WasmUniverse {
    inner: Universe,
}

#[wasm_bindgen(js_class = Universe)]
impl WasmUniverse {
    pub fn new(width: u32, height: u32) -> Result<WasmUniverse, JsError> {
        let inner = Universe::try_new(width, height).map_err(to_js_error)?;
        log::info!("Universe {}x{} created", width, height);
        Ok(Self { inner })
    }

    pub fn random(
        width: u32,
        height: u32,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<WasmUniverse, JsError> {
        let inner = Universe::random(width, height, seed, fill_rate).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn generation(&self) -> u64 {
        self.inner.generation()
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    pub fn toggle_cell(&mut self, row: u32, column: u32) {
        self.inner.toggle_cell(row, column);
    }

    pub fn cells(&self) -> *const Cell {
        self.inner.cells().as_ptr()
    }

    pub fn alive_neighbours(&self) -> *const u8 {
        self.inner.alive_neighbours().as_ptr()
    }

    pub fn render(&self) -> String {
        self.inner.render()
    }
}

fn to_js_error(err: anyhow::Error) -> JsError {
    JsError::new(&format!("{err:#}"))
}

fn panic_hook(info: &PanicInfo) {
    console::error_1(&info.to_string().into());
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger {};

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log = match record.level() {
                Level::Error => console::error_1,
                Level::Warn => console::warn_1,
                Level::Info => console::info_1,
                Level::Debug => console::log_1,
                Level::Trace => console::debug_1,
            };
            log(&format!("{}", record.args()).into());
        }
    }

    fn flush(&self) {}
}
