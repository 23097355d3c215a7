#![warn(clippy::all)]

#[cfg(not(target_arch = "wasm32"))]
mod gui;
mod universe;
mod utils;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use gui::{App, Config};
pub use universe::{Cell, Universe};
pub use utils::{parse_rle, NiceInt};
