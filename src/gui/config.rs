use crate::Universe;
use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FIELD_WIDTH: u32 = Universe::DEFAULT_WIDTH;
    pub const FIELD_HEIGHT: u32 = Universe::DEFAULT_HEIGHT;
    pub const SEED: u64 = 42;
    pub const FILL_RATE: f64 = 0.3;
    pub const MAX_FPS: f64 = 30.;

    /// Side of a cell in pixels, without the grid line.
    pub const CELL_SIZE: f32 = 5.;
    pub const GRID_COLOR: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);
    pub const DEAD_COLOR: Color32 = Color32::WHITE;
    /// Alive with fewer than 2 neighbours.
    pub const ALIVE_SPARSE_COLOR: Color32 = Color32::from_rgb(0x00, 0x00, 0xFF);
    /// Alive with 2 or 3 neighbours.
    pub const ALIVE_STABLE_COLOR: Color32 = Color32::from_rgb(0x00, 0xFF, 0x00);
    /// Alive with more than 3 neighbours.
    pub const ALIVE_CROWDED_COLOR: Color32 = Color32::from_rgb(0xFF, 0x80, 0x00);

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 400.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;
}
