mod logic;
mod ui;

use std::collections::HashMap;

use crate::{curves::CurveId, surface::PlotSettings};

pub struct Plotter {
    /// egui ids of the drawn lines, used to tell which curve is hovered.
    curve_plot_ids: HashMap<egui::Id, CurveId>,
    hovered: Option<CurveId>,
    /// Pointer position in plot coordinates, shown in the status bar.
    pointer: Option<[f64; 2]>,
}

impl Plotter {
    pub fn new() -> Self {
        Self {
            curve_plot_ids: HashMap::with_capacity(10),
            hovered: None,
            pointer: None,
        }
    }

    pub fn hovered(&self) -> Option<CurveId> {
        self.hovered
    }

    /// Pointer position labelled with the current axis titles.
    pub fn status_text(&self, settings: &PlotSettings) -> Option<String> {
        self.pointer
            .map(|pointer| logic::format_pointer(&settings.x_label, &settings.y_label, pointer))
    }
}
