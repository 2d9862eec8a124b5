mod logic;
mod ui;

use std::sync::mpsc::Receiver;

use crate::{
    curves::{CurveId, CurveKind, Rgb},
    notify::{EventFilter, SurfaceEvent},
    surface::{PlotSettings, PlotSurface},
};

/// Side panel listing the attached curves of one plot.
///
/// The legend keeps its own copy of what is on the plot, fed by the
/// surface notifications. Edits are applied locally right away and sent
/// to the surface as requests.
pub struct Legend {
    kind: CurveKind,
    events: Receiver<SurfaceEvent>,
    entries: Vec<LegendEntry>,
    settings: PlotSettings,
    auc_query: String,
    auc_answer: Option<AucAnswer>,
}

/// One row of the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub id: CurveId,
    pub name: String,
    pub color: Rgb,
    pub score: f64,
    pub visible: bool,
    // Edited text, committed as a rename on focus loss.
    name_buffer: String,
}

#[derive(Debug, Clone, PartialEq)]
struct AucAnswer {
    name: String,
    color: Rgb,
    score: f64,
}

impl LegendEntry {
    fn new(id: CurveId, name: String, color: Rgb, score: f64) -> Self {
        Self {
            id,
            name_buffer: name.clone(),
            name,
            color,
            score,
            visible: true,
        }
    }
}

impl Legend {
    pub fn new(kind: CurveKind, surface: &mut PlotSurface) -> Self {
        let events = surface.subscribe(EventFilter::all());
        let mut legend = Self {
            kind,
            events,
            entries: Vec::new(),
            settings: surface.settings().clone(),
            auc_query: String::new(),
            auc_answer: None,
        };
        legend.resync(surface);
        legend
    }

    /// Rows in draw order.
    #[cfg(test)]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}
