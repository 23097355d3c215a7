use super::{Config, FpsLimiter};
use crate::Universe;
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin};
use std::time::Instant;

pub struct App {
    pub(super) universe: Universe, // Conway's GoL field with neighbour counts.
    pub(super) is_paused: bool,    // Flag indicating whether the simulation is paused.
    pub(super) pause_after_updates: bool, // Flag indicating whether to pause after a certain number of updates.
    pub(super) updates_before_pause: u64, // Number of updates left before stopping.
    pub(super) do_one_step: bool,         // Do one step and pause.
    pub(super) ticks_per_frame: u64,      // Number of generations per frame.
    pub(super) last_update_duration: f64, // Duration of the last life update in seconds.
    pub(super) fps_limiter: FpsLimiter,   // Limits the frame rate to a certain value.

    pub(super) seed: u64,
    pub(super) fill_rate: f64,
    pub(super) max_fps: f64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            universe: Universe::new(Config::FIELD_WIDTH, Config::FIELD_HEIGHT),
            is_paused: false,
            pause_after_updates: false,
            updates_before_pause: 0,
            do_one_step: false,
            ticks_per_frame: 1,
            last_update_duration: 0.,
            fps_limiter: FpsLimiter::default(),
            seed: Config::SEED,
            fill_rate: Config::FILL_RATE,
            max_fps: Config::MAX_FPS,
        }
    }

    /// Restores the deterministic starting pattern.
    pub fn reset_field(&mut self) {
        self.universe = Universe::new(Config::FIELD_WIDTH, Config::FIELD_HEIGHT);
        self.is_paused = true;
        self.pause_after_updates = false;
        self.updates_before_pause = 0;
        self.do_one_step = false;
        self.last_update_duration = 0.;
        log::info!("Field reset to the default pattern");
    }

    pub fn randomize_field(&mut self) {
        match Universe::random(
            Config::FIELD_WIDTH,
            Config::FIELD_HEIGHT,
            Some(self.seed),
            self.fill_rate,
        ) {
            Ok(universe) => {
                log::info!(
                    "Field randomized with seed {} and fill rate {:.2}",
                    self.seed,
                    self.fill_rate
                );
                self.universe = universe;
                self.last_update_duration = 0.;
            }
            Err(err) => log::error!("Failed to randomize the field: {err:#}"),
        }
    }

    pub fn reset_appearance(&mut self) {
        self.max_fps = Config::MAX_FPS;
        self.ticks_per_frame = 1;
    }

    fn update_engine(&mut self) {
        if self.pause_after_updates && self.updates_before_pause == 0 {
            self.is_paused = true;
            self.do_one_step = false;
        }
        if self.is_paused && !self.do_one_step {
            return;
        }

        let timer = Instant::now();
        self.universe.update(self.ticks_per_frame);
        self.last_update_duration = timer.elapsed().as_secs_f64();

        if self.pause_after_updates {
            self.updates_before_pause -= 1;
        }
        self.do_one_step = false;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                self.draw(ui);

                self.update_engine();
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
