use super::Config;
use crate::Cell;
use eframe::egui::Color32;

/// Colour bucket of a cell on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Dead,
    /// Alive, fewer than 2 neighbours.
    Sparse,
    /// Alive, 2 or 3 neighbours.
    Stable,
    /// Alive, more than 3 neighbours.
    Crowded,
}

impl Shade {
    pub fn of(cell: Cell, alive_neighbours: u8) -> Self {
        match (cell, alive_neighbours) {
            (Cell::Dead, _) => Self::Dead,
            (Cell::Alive, 0..=1) => Self::Sparse,
            (Cell::Alive, 2..=3) => Self::Stable,
            (Cell::Alive, _) => Self::Crowded,
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::Dead => Config::DEAD_COLOR,
            Self::Sparse => Config::ALIVE_SPARSE_COLOR,
            Self::Stable => Config::ALIVE_STABLE_COLOR,
            Self::Crowded => Config::ALIVE_CROWDED_COLOR,
        }
    }
}

pub fn cell_color(cell: Cell, alive_neighbours: u8) -> Color32 {
    Shade::of(cell, alive_neighbours).color()
}
