use super::{canvas, palette::cell_color, App, Config};
use crate::NiceInt;
use eframe::egui::{
    pos2, Button, DragValue, Painter, Rect, RichText, Sense, Slider, Stroke, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        let next_step = ui.add_enabled(self.is_paused, |ui: &mut Ui| {
            ui.horizontal(|ui| {
                ui.checkbox(
                    &mut self.pause_after_updates,
                    Self::new_text("Pause after "),
                );
                ui.add_enabled(self.pause_after_updates, |ui: &mut Ui| {
                    ui.add(DragValue::new(&mut self.updates_before_pause));
                    ui.label(Self::new_text(" updates"))
                });
            });

            ui.add(Self::new_button("Next step"))
        });
        if next_step.clicked() {
            self.do_one_step = true;
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Generations per frame: "));
            ui.add(DragValue::new(&mut self.ticks_per_frame).range(1..=64));
        });

        ui.add_space(Config::WIDGET_GAP);

        if ui.add(Self::new_button("Reset field")).clicked() {
            self.reset_field();
        }

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Randomize")).clicked() {
                self.randomize_field();
            }
            ui.label(Self::new_text("seed: "));
            ui.add(DragValue::new(&mut self.seed));
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Fill rate: "));
            ui.add(Slider::new(&mut self.fill_rate, 0.0..=1.0));
        });
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=240.0).logarithmic(true));
        });

        if ui.add(Self::new_button("Reset config")).clicked() {
            self.reset_appearance();
        }
    }

    fn draw_stats(&self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "Generation: {}\nPopulation: {}\nField: {}x{}\nLast field update: {:.3} ms",
            NiceInt::from(self.universe.generation()),
            NiceInt::from(self.universe.population()),
            self.universe.width(),
            self.universe.height(),
            self.last_update_duration * 1e3
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                });
            });

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_appearance_controls(ui);

                    ui.add_space(Config::WIDGET_GAP);

                    self.draw_stats(ui);
                });
            });
        });
    }

    fn paint_grid(&self, painter: &Painter, origin: Vec2) {
        let (w, h) = (self.universe.width(), self.universe.height());
        let size = canvas::canvas_size(w, h);
        let stroke = Stroke::new(1., Config::GRID_COLOR);

        // vertical lines
        for i in 0..=w {
            let x = origin.x + canvas::grid_line(i) + 0.5;
            painter.line_segment([pos2(x, origin.y), pos2(x, origin.y + size.y)], stroke);
        }
        // horizontal lines
        for j in 0..=h {
            let y = origin.y + canvas::grid_line(j) + 0.5;
            painter.line_segment([pos2(origin.x, y), pos2(origin.x + size.x, y)], stroke);
        }
    }

    fn paint_cells(&self, painter: &Painter, origin: Vec2) {
        let w = self.universe.width() as usize;
        let cell_size = Vec2::splat(Config::CELL_SIZE);
        let cells = self.universe.cells();
        let neighbours = self.universe.alive_neighbours();
        for (idx, (&cell, &n)) in cells.iter().zip(neighbours.iter()).enumerate() {
            let (row, column) = ((idx / w) as u32, (idx % w) as u32);
            let min = (origin + canvas::cell_origin(row, column)).to_pos2();
            painter.rect_filled(Rect::from_min_size(min, cell_size), 0., cell_color(cell, n));
        }
    }

    fn draw_gol_field(&mut self, ui: &mut Ui) {
        let (w, h) = (self.universe.width(), self.universe.height());
        let (response, painter) = ui.allocate_painter(canvas::canvas_size(w, h), Sense::click());
        let origin = response.rect.min.to_vec2();

        self.paint_grid(&painter, origin);
        self.paint_cells(&painter, origin);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((row, column)) = canvas::cell_at(pos.to_vec2() - origin, w, h) {
                    self.universe.toggle_cell(row, column);
                }
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal_top(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::WIDGET_GAP);

            self.draw_gol_field(ui);
        });
    }
}
