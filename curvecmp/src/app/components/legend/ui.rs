use egui::RichText;

use crate::{app::components::color32, notify::PanelRequest};

impl super::Legend {
    /// Draw the legend and return what the user asked the surface to do.
    pub fn render(&mut self, ui: &mut egui::Ui) -> Vec<PanelRequest> {
        let mut requests = Vec::new();

        ui.heading(format!("{} curves", self.kind.short_name()));
        ui.separator();

        let mut isolate = None;
        egui::ScrollArea::vertical()
            .id_salt(("legend", self.kind.short_name()))
            .max_height(ui.available_height() * 0.6)
            .show(ui, |ui| {
                if self.entries.is_empty() {
                    ui.label("No curves, open a .roc or .pr file.");
                }
                for (position, entry) in self.entries.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        if ui.checkbox(&mut entry.visible, "").changed() {
                            requests.push(PanelRequest::SetVisible {
                                position,
                                visible: entry.visible,
                            });
                        }

                        let mut rgb: [u8; 3] = entry.color.into();
                        if ui.color_edit_button_srgb(&mut rgb).changed() {
                            entry.color = rgb.into();
                            requests.push(PanelRequest::Recolor {
                                id: entry.id,
                                color: entry.color,
                            });
                        }

                        let name_edit = egui::TextEdit::singleline(&mut entry.name_buffer)
                            .text_color(color32(entry.color))
                            .desired_width(140.0);
                        let response = ui.add(name_edit);
                        if response.lost_focus() {
                            let name = entry.name_buffer.trim().to_owned();
                            if name.is_empty() {
                                entry.name_buffer = entry.name.clone();
                            } else if name != entry.name {
                                entry.name = name.clone();
                                requests.push(PanelRequest::Rename { position, name });
                            }
                        }

                        ui.label(format!("{:.3}", entry.score));

                        if ui
                            .small_button("only")
                            .on_hover_text("Hide every other curve")
                            .clicked()
                        {
                            isolate = Some(position);
                        }
                        if ui
                            .small_button("x")
                            .on_hover_text("Remove from plot")
                            .clicked()
                        {
                            requests.push(PanelRequest::Delete(entry.id));
                        }
                    });
                }
            });
        if let Some(position) = isolate {
            self.isolate_local(position);
            requests.push(PanelRequest::Isolate(position));
        }

        ui.horizontal(|ui| {
            if ui.button("Clear plot").clicked() {
                requests.push(PanelRequest::Clear);
            }
        });

        ui.separator();
        self.auc_lookup(ui, &mut requests);
        ui.separator();
        self.plot_settings(ui, &mut requests);

        requests
    }

    fn auc_lookup(&mut self, ui: &mut egui::Ui, requests: &mut Vec<PanelRequest>) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.auc_query)
                    .hint_text("curve name")
                    .desired_width(120.0),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (ui.button("Score").clicked() || submitted) && !self.auc_query.trim().is_empty() {
                self.auc_answer = None;
                requests.push(PanelRequest::ColorAucLookup(
                    self.auc_query.trim().to_owned(),
                ));
            }
        });
        if let Some(answer) = &self.auc_answer {
            ui.label(
                RichText::new(format!("{}: {:.3}", answer.name, answer.score))
                    .color(color32(answer.color)),
            );
        }
    }

    fn plot_settings(&mut self, ui: &mut egui::Ui, requests: &mut Vec<PanelRequest>) {
        egui::CollapsingHeader::new("Plot settings")
            .id_salt(("plot_settings", self.kind.short_name()))
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new(("plot_settings_grid", self.kind.short_name()))
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("Title");
                        if ui
                            .text_edit_singleline(&mut self.settings.title)
                            .lost_focus()
                        {
                            requests.push(PanelRequest::PlotTitle(self.settings.title.clone()));
                        }
                        ui.end_row();

                        ui.label("X axis");
                        let x_done = ui
                            .text_edit_singleline(&mut self.settings.x_label)
                            .lost_focus();
                        ui.end_row();
                        ui.label("Y axis");
                        let y_done = ui
                            .text_edit_singleline(&mut self.settings.y_label)
                            .lost_focus();
                        ui.end_row();
                        if x_done || y_done {
                            requests.push(PanelRequest::AxisLabels {
                                x: self.settings.x_label.clone(),
                                y: self.settings.y_label.clone(),
                            });
                        }

                        ui.label("Grid");
                        if ui.checkbox(&mut self.settings.grid, "").changed() {
                            requests.push(PanelRequest::Grid(self.settings.grid));
                        }
                        ui.end_row();

                        ui.label("Background");
                        let mut rgb: [u8; 3] = self.settings.background.into();
                        if ui.color_edit_button_srgb(&mut rgb).changed() {
                            self.settings.background = rgb.into();
                            requests.push(PanelRequest::Background(self.settings.background));
                        }
                        ui.end_row();
                    });
            });
    }
}
