use crate::{
    curves::{CurveId, CurveKind, Rgb},
    surface::PlotSurface,
};

/// Data of one line as it goes to the plot.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PlotLine {
    pub id: CurveId,
    pub name: String,
    pub color: Rgb,
    pub points: Vec<[f64; 2]>,
}

/// Visible curves in draw order.
pub(super) fn plot_lines(surface: &PlotSurface) -> Vec<PlotLine> {
    surface
        .registry()
        .attached()
        .into_iter()
        .filter(|curve| curve.is_visible())
        .map(|curve| PlotLine {
            id: curve.id(),
            name: curve.name().to_owned(),
            color: curve.color(),
            points: curve.points().iter().map(|&p| p.into()).collect(),
        })
        .collect()
}

/// Reference line of a classifier that guesses, only meaningful for ROC.
pub(super) fn chance_line(kind: CurveKind) -> Option<Vec<[f64; 2]>> {
    match kind {
        CurveKind::Roc => Some(vec![[0.0, 0.0], [1.0, 1.0]]),
        CurveKind::Pr => None,
    }
}

/// Status bar text for a pointer position.
pub(super) fn format_pointer(x_label: &str, y_label: &str, [x, y]: [f64; 2]) -> String {
    format!("{x_label}: {x:.3}  {y_label}: {y:.3}")
}
