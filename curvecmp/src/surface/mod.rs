mod logic;

use crate::{
    curves::{CurveKind, CurveRegistry, Rgb},
    notify::Notifier,
};

/// One plot: its curves, its look and the panel notifications.
///
/// Every mutating operation raises the redraw flag, which the renderer
/// consumes with [`PlotSurface::take_redraw`] in the same frame.
#[derive(Debug)]
pub struct PlotSurface {
    kind: CurveKind,
    registry: CurveRegistry,
    settings: PlotSettings,
    notifier: Notifier,
    request_redraw: Option<()>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotSettings {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub background: Rgb,
    pub grid: bool,
}

impl PlotSettings {
    pub fn for_kind(kind: CurveKind) -> Self {
        let (x_label, y_label) = kind.default_axis_labels();
        Self {
            title: kind.default_title().to_owned(),
            x_label: x_label.to_owned(),
            y_label: y_label.to_owned(),
            background: Rgb(185, 213, 248),
            grid: true,
        }
    }
}

impl PlotSurface {
    pub fn new(kind: CurveKind, registry: CurveRegistry) -> Self {
        Self {
            kind,
            registry,
            settings: PlotSettings::for_kind(kind),
            notifier: Notifier::new(),
            request_redraw: None,
        }
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn registry(&self) -> &CurveRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &PlotSettings {
        &self.settings
    }
}
