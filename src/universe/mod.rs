mod cell;
mod engine;
mod tests;

pub use cell::Cell;
pub use engine::Universe;
