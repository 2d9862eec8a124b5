use egui_plot::{Legend, LineStyle};

use crate::{app::components::color32, surface::PlotSurface};

use super::logic::{chance_line, plot_lines};

impl super::Plotter {
    pub fn render(&mut self, surface: &PlotSurface, ui: &mut egui::Ui) {
        let settings = surface.settings();

        ui.vertical_centered(|ui| ui.heading(&settings.title));

        let lines = plot_lines(surface);
        self.curve_plot_ids.drain();

        let frame = egui::Frame::none().fill(color32(settings.background));
        frame.show(ui, |ui| {
            let response = egui_plot::Plot::new(("plot", surface.kind().short_name()))
                .x_axis_label(settings.x_label.as_str())
                .y_axis_label(settings.y_label.as_str())
                .show_grid(settings.grid)
                .show_background(false)
                .include_x(0.0)
                .include_x(1.0)
                .include_y(0.0)
                .include_y(1.0)
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    if let Some(diagonal) = chance_line(surface.kind()) {
                        plot_ui.line(
                            egui_plot::Line::new(diagonal)
                                .color(egui::Color32::GRAY)
                                .style(LineStyle::dashed_loose()),
                        );
                    }
                    for line in lines {
                        let egui_id = egui::Id::new(("curve", line.id));
                        let width = if self.hovered == Some(line.id) {
                            2.5
                        } else {
                            1.5
                        };
                        plot_ui.line(
                            egui_plot::Line::new(line.points)
                                .color(color32(line.color))
                                .width(width)
                                .name(line.name)
                                .id(egui_id),
                        );
                        self.curve_plot_ids.insert(egui_id, line.id);
                    }
                    plot_ui.pointer_coordinate().map(|p| [p.x, p.y])
                });

            self.pointer = response.inner;
            self.hovered = response
                .hovered_plot_item
                .and_then(|id| self.curve_plot_ids.get(&id))
                .copied();
        });
    }
}
