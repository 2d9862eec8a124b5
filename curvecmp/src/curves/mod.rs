mod logic;
mod palette;

use std::{
    collections::{HashMap, VecDeque},
    path::Path,
    sync::Arc,
};

use curve_source::{DataSource, Point};

pub use logic::DetachReport;
pub use palette::{Palette, Rgb};

/// Stable identity of a curve, never reused within a registry.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CurveId(pub(crate) usize);

impl From<CurveId> for usize {
    fn from(val: CurveId) -> Self {
        val.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Roc,
    Pr,
}

impl CurveKind {
    /// Decide the kind from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("roc") {
            Some(CurveKind::Roc)
        } else if ext.eq_ignore_ascii_case("pr") {
            Some(CurveKind::Pr)
        } else {
            None
        }
    }

    pub fn default_score(&self) -> f64 {
        match self {
            CurveKind::Roc => 1.0,
            CurveKind::Pr => 0.7,
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            CurveKind::Roc => "ROC curve comparison",
            CurveKind::Pr => "PR curve comparison",
        }
    }

    /// Default (x, y) axis labels.
    pub fn default_axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            CurveKind::Roc => ("False Positive Rate", "True Positive Rate"),
            CurveKind::Pr => ("Recall", "Precision"),
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            CurveKind::Roc => "ROC",
            CurveKind::Pr => "PR",
        }
    }
}

/// A named, colored series of points backed by one file.
#[derive(Debug)]
pub struct Curve {
    id: CurveId,
    name: String,
    color: Rgb,
    kind: CurveKind,
    score: f64,
    position: usize,
    attached: bool,
    visible: bool,
    source: DataSource,
    points: Arc<[Point]>,
}

impl Curve {
    pub fn id(&self) -> CurveId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Draw-order index, only defined while the curve is attached.
    pub fn position(&self) -> Option<usize> {
        self.attached.then_some(self.position)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attached and checked in the legend.
    pub fn is_visible(&self) -> bool {
        self.attached && self.visible
    }

    pub fn path(&self) -> &Path {
        self.source.path()
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn points(&self) -> &Arc<[Point]> {
        &self.points
    }
}

/// What `add_curve` did with the requested path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new curve was registered.
    Created(CurveId),
    /// A detached curve for the path was put back on the plot.
    Reattached(CurveId),
    /// The path is already on the plot, nothing changed.
    AlreadyAttached(CurveId),
}

impl AddOutcome {
    pub fn id(&self) -> CurveId {
        match self {
            AddOutcome::Created(id) | AddOutcome::Reattached(id) | AddOutcome::AlreadyAttached(id) => {
                *id
            }
        }
    }

    /// False for `AlreadyAttached`.
    pub fn changed(&self) -> bool {
        !matches!(self, AddOutcome::AlreadyAttached(_))
    }
}

/// How long detached curves are kept around for re-attaching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Keep every detached curve until it is purged explicitly.
    #[default]
    KeepAll,
    /// Keep at most n detached curves, purging the least recently detached.
    KeepAtMost(usize),
}

/// Owns every curve of one plot, attached or not.
#[derive(Debug)]
pub struct CurveRegistry {
    curves: HashMap<CurveId, Curve>,
    next_id: CurveId,
    // Number of curves ever created, drives the default names.
    created: usize,
    palette: Palette,
    retention: RetentionPolicy,
    // Least recently detached first.
    detach_order: VecDeque<CurveId>,
}

impl CurveRegistry {
    pub fn new(palette: Palette) -> Self {
        Self {
            curves: HashMap::with_capacity(10),
            next_id: CurveId::default(),
            created: 0,
            palette,
            retention: RetentionPolicy::default(),
            detach_order: VecDeque::new(),
        }
    }

    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::new(Palette::standard())
    }
}
