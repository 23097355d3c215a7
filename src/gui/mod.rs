mod app;
mod canvas;
mod config;
mod draw;
mod fps_limit;
mod palette;

pub use app::App;
pub use config::Config;
use fps_limit::FpsLimiter;
