use super::Cell;
use anyhow::{anyhow, ensure, Result};
use std::fmt;

/// Conway's Game of Life on a `width x height` torus.
///
/// Alongside the cells the engine keeps, for every cell, the number of live
/// cells in its Moore neighbourhood. Both buffers are row-major
/// (`row * width + column`), have length `width * height` and always
/// describe the same generation.
#[derive(Clone, Debug)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    cells_next: Vec<Cell>,
    alive_neighbours: Vec<u8>,
    generation: u64,
}

impl Universe {
    pub const DEFAULT_WIDTH: u32 = 64;
    pub const DEFAULT_HEIGHT: u32 = 64;

    /// Creates a field with a fixed deterministic pattern:
    /// cell `i` is alive iff `i % 2 == 0 || i % 7 == 0`.
    ///
    /// # Panics
    ///
    /// If `width` or `height` is zero, or the field does not fit in memory
    /// addressing. Use [`Universe::try_new`] to get an error instead.
    pub fn new(width: u32, height: u32) -> Self {
        match Self::try_new(width, height) {
            Ok(universe) => universe,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let size = checked_size(width, height)?;
        let cells = (0..size)
            .map(|i| Cell::from(i % 2 == 0 || i % 7 == 0))
            .collect();
        Self::from_cells(width, height, cells)
    }

    /// Creates a field filled with dead cells.
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        let size = checked_size(width, height)?;
        Self::from_cells(width, height, vec![Cell::Dead; size])
    }

    /// Creates a field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// `fill_rate` - probability of a cell being alive, in `[0, 1]`
    pub fn random(width: u32, height: u32, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};

        ensure!(
            (0.0..=1.0).contains(&fill_rate),
            "Fill rate {} is outside of [0, 1]",
            fill_rate
        );
        let size = checked_size(width, height)?;
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let cells = (0..size)
            .map(|_| Cell::from(rng.gen_bool(fill_rate)))
            .collect();
        Self::from_cells(width, height, cells)
    }

    /// Creates a field from row-major cells.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Result<Self> {
        let size = checked_size(width, height)?;
        ensure!(
            cells.len() == size,
            "Expected {} cells for a {}x{} field, got {}",
            size,
            width,
            height,
            cells.len()
        );

        let mut universe = Self {
            width,
            height,
            cells,
            cells_next: vec![Cell::Dead; size],
            alive_neighbours: vec![0; size],
            generation: 0,
        };
        universe.count_all_neighbours();
        log::debug!(
            "Created {}x{} universe with population {}",
            width,
            height,
            universe.population()
        );
        Ok(universe)
    }

    /// Parses an RLE pattern into a field of the size declared in its header.
    pub fn from_rle(data: &[u8]) -> Result<Self> {
        let (width, height, cells) = crate::parse_rle(data)?;
        Self::from_cells(width, height, cells)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of completed ticks.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cells of the current generation, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Live-neighbour count of every cell of the current generation,
    /// indexed like [`Universe::cells`].
    pub fn alive_neighbours(&self) -> &[u8] {
        &self.alive_neighbours
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates are taken modulo the field size.
    pub fn get_cell(&self, row: u32, column: u32) -> Cell {
        self.cells[self.wrapped_index(row, column)]
    }

    /// Coordinates are taken modulo the field size.
    pub fn neighbours_of(&self, row: u32, column: u32) -> u8 {
        self.alive_neighbours[self.wrapped_index(row, column)]
    }

    /// Sets a cell and patches the neighbour counts around it.
    ///
    /// Coordinates are taken modulo the field size.
    pub fn set_cell(&mut self, row: u32, column: u32, state: Cell) {
        let (row, column) = (row % self.height, column % self.width);
        let idx = self.get_index(row, column);
        if self.cells[idx] == state {
            return;
        }
        self.cells[idx] = state;
        for n in self.neighbour_indices(row, column) {
            if state.is_alive() {
                self.alive_neighbours[n] += 1;
            } else {
                self.alive_neighbours[n] -= 1;
            }
        }
    }

    pub fn toggle_cell(&mut self, row: u32, column: u32) {
        let state = self.get_cell(row, column).toggled();
        self.set_cell(row, column, state);
    }

    /// Advances the field by one generation.
    pub fn tick(&mut self) {
        for ((next, &cell), &neibs) in self
            .cells_next
            .iter_mut()
            .zip(self.cells.iter())
            .zip(self.alive_neighbours.iter())
        {
            *next = cell.next(neibs);
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells);
        self.count_all_neighbours();
        self.generation += 1;
        log::trace!("Generation {}", self.generation);
    }

    /// Advances the field by `n` generations.
    pub fn update(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Text picture of the field, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn get_index(&self, row: u32, column: u32) -> usize {
        row as usize * self.width as usize + column as usize
    }

    fn wrapped_index(&self, row: u32, column: u32) -> usize {
        self.get_index(row % self.height, column % self.width)
    }

    /// Indices of the 8 toroidal neighbours. On fields narrower than 3 cells
    /// the same index may appear several times.
    fn neighbour_indices(&self, row: u32, column: u32) -> [usize; 8] {
        let (w, h) = (self.width, self.height);
        let r1 = if row == 0 { h - 1 } else { row - 1 };
        let r2 = if row == h - 1 { 0 } else { row + 1 };
        let c1 = if column == 0 { w - 1 } else { column - 1 };
        let c2 = if column == w - 1 { 0 } else { column + 1 };
        [
            self.get_index(r1, c1),
            self.get_index(r1, column),
            self.get_index(r1, c2),
            self.get_index(row, c1),
            self.get_index(row, c2),
            self.get_index(r2, c1),
            self.get_index(r2, column),
            self.get_index(r2, c2),
        ]
    }

    fn count_neibs(&self, row: u32, column: u32) -> u8 {
        self.neighbour_indices(row, column)
            .iter()
            .map(|&i| self.cells[i] as u8)
            .sum()
    }

    fn count_all_neighbours(&mut self) {
        for row in 0..self.height {
            for column in 0..self.width {
                let neibs = self.count_neibs(row, column);
                let idx = self.get_index(row, column);
                self.alive_neighbours[idx] = neibs;
            }
        }
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

// `cells_next` is scratch space and `alive_neighbours` follows from `cells`.
impl PartialEq for Universe {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.generation == other.generation
            && self.cells == other.cells
    }
}

impl Eq for Universe {}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                let symbol = if cell == Cell::Dead { '◻' } else { '◼' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn checked_size(width: u32, height: u32) -> Result<usize> {
    ensure!(
        width > 0 && height > 0,
        "Field dimensions must be positive, got {}x{}",
        width,
        height
    );
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| anyhow!("Field {}x{} is too large", width, height))
}
