//! Notification contract between a [`PlotSurface`](crate::surface::PlotSurface)
//! and the panel/legend next to it.
//!
//! The surface sends [`SurfaceEvent`]s to every subscriber whose
//! [`EventFilter`] matches; the panel talks back with [`PanelRequest`]s.
//! Subscriptions are made once when the UI is put together. Events are sent
//! synchronously, in the order the registry was mutated.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::curves::{CurveId, CurveKind, Rgb};

// ---------------------------------------------------------------------------
//
//
// EventKind
//
//
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// A curve was put on the plot (new or re-attached).
    pub const CURVE_ATTACHED: Self = Self(1 << 0);
    /// A curve was taken off the plot.
    pub const CURVE_DETACHED: Self = Self(1 << 1);
    /// Every curve was taken off the plot at once.
    pub const PLOT_CLEARED: Self = Self(1 << 2);
    /// A detached curve was forgotten.
    pub const CURVE_PURGED: Self = Self(1 << 3);
    /// Answer to [`PanelRequest::ColorAucLookup`].
    pub const COLOR_AUC: Self = Self(1 << 4);

    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
//
//
// Surface to panel
//
//
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    CurveAttached {
        id: CurveId,
        name: String,
        color: Rgb,
        score: f64,
    },
    CurveDetached {
        id: CurveId,
        name: String,
    },
    PlotCleared,
    CurvePurged {
        id: CurveId,
        name: String,
    },
    ColorAucResponse {
        name: String,
        color: Rgb,
        score: f64,
    },
}

impl SurfaceEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            SurfaceEvent::CurveAttached { .. } => EventKind::CURVE_ATTACHED,
            SurfaceEvent::CurveDetached { .. } => EventKind::CURVE_DETACHED,
            SurfaceEvent::PlotCleared => EventKind::PLOT_CLEARED,
            SurfaceEvent::CurvePurged { .. } => EventKind::CURVE_PURGED,
            SurfaceEvent::ColorAucResponse { .. } => EventKind::COLOR_AUC,
        }
    }
}

// ---------------------------------------------------------------------------
//
//
// Panel to surface
//
//
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum PanelRequest {
    AddCurve {
        path: PathBuf,
        kind: CurveKind,
        score: f64,
    },
    Delete(CurveId),
    Rename {
        position: usize,
        name: String,
    },
    Recolor {
        id: CurveId,
        color: Rgb,
    },
    Isolate(usize),
    SetVisible {
        position: usize,
        visible: bool,
    },
    Clear,
    ColorAucLookup(String),
    Background(Rgb),
    PlotTitle(String),
    AxisLabels {
        x: String,
        y: String,
    },
    Grid(bool),
}

// ---------------------------------------------------------------------------
//
//
// Subscriptions
//
//
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    pub fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub fn matches(&self, event: &SurfaceEvent) -> bool {
        self.mask.intersects(event.kind())
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug)]
struct Subscriber {
    filter: EventFilter,
    sender: Sender<SurfaceEvent>,
}

/// Fan-out of surface events to the subscribed panels.
#[derive(Debug, Default)]
pub struct Notifier {
    subscribers: Vec<Subscriber>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, filter: EventFilter) -> Receiver<SurfaceEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    /// Send `event` to every matching subscriber. Subscribers whose receiver
    /// is gone are dropped.
    pub fn emit(&mut self, event: SurfaceEvent) {
        log::debug!("emit {:?}", event);
        self.subscribers.retain(|sub| {
            !sub.filter.matches(&event) || sub.sender.send(event.clone()).is_ok()
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
