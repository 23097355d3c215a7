//! Pixel geometry of the field: every cell is a `CELL_SIZE` square with a
//! one pixel grid line on each side.

use super::Config;
use eframe::egui::{vec2, Vec2};

const PITCH: f32 = Config::CELL_SIZE + 1.;

/// `(CELL_SIZE + 1) * dimension + 1` pixels along each axis.
pub fn canvas_size(width: u32, height: u32) -> Vec2 {
    vec2(PITCH * width as f32 + 1., PITCH * height as f32 + 1.)
}

/// Offset of the `i`-th grid line from the canvas origin.
pub fn grid_line(i: u32) -> f32 {
    i as f32 * PITCH
}

/// Offset of the top left pixel of a cell from the canvas origin.
pub fn cell_origin(row: u32, column: u32) -> Vec2 {
    vec2(column as f32 * PITCH + 1., row as f32 * PITCH + 1.)
}

/// Cell under a point given relative to the canvas origin.
pub fn cell_at(offset: Vec2, width: u32, height: u32) -> Option<(u32, u32)> {
    if offset.x < 0. || offset.y < 0. {
        return None;
    }
    let (row, column) = ((offset.y / PITCH) as u32, (offset.x / PITCH) as u32);
    (row < height && column < width).then_some((row, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size() {
        assert_eq!(canvas_size(64, 32), vec2(385., 193.));
        assert_eq!(canvas_size(1, 1), vec2(7., 7.));
    }

    #[test]
    fn test_cell_lookup_inverts_origin() {
        for (row, column) in [(0, 0), (3, 7), (31, 63)] {
            let inside = cell_origin(row, column) + vec2(2., 2.);
            assert_eq!(cell_at(inside, 64, 32), Some((row, column)));
        }
        assert_eq!(cell_at(vec2(-1., 3.), 64, 32), None);
        assert_eq!(cell_at(canvas_size(64, 32), 64, 32), None);
    }
}
