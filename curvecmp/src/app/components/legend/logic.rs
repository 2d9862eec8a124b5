use std::sync::mpsc::TryRecvError;

use crate::{notify::SurfaceEvent, surface::PlotSurface};

use super::{AucAnswer, Legend, LegendEntry};

impl super::Legend {
    /// Apply pending surface notifications. Returns true if anything changed.
    pub fn try_update(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.apply(event);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("{} surface is gone", self.kind.short_name());
                    break;
                }
            }
        }
        changed
    }

    fn apply(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::CurveAttached {
                id,
                name,
                color,
                score,
            } => {
                if self.entries.iter().any(|entry| entry.id == id) {
                    log::warn!("legend already lists curve '{name}'");
                    return;
                }
                self.entries.push(LegendEntry::new(id, name, color, score));
            }
            SurfaceEvent::CurveDetached { id, .. } => {
                self.entries.retain(|entry| entry.id != id);
            }
            SurfaceEvent::PlotCleared => self.entries.clear(),
            SurfaceEvent::CurvePurged { name, .. } => {
                log::debug!("curve '{name}' can no longer be re-attached");
            }
            SurfaceEvent::ColorAucResponse { name, color, score } => {
                self.auc_answer = Some(AucAnswer { name, color, score });
            }
        }
    }

    /// Rebuild the rows and settings from the surface, dropping local edits
    /// the surface did not accept.
    pub fn resync(&mut self, surface: &PlotSurface) {
        // Whatever is still queued is already reflected by the surface.
        while self.events.try_recv().is_ok() {}
        self.entries = surface
            .registry()
            .attached()
            .into_iter()
            .map(|curve| {
                let mut entry = LegendEntry::new(
                    curve.id(),
                    curve.name().to_owned(),
                    curve.color(),
                    curve.score(),
                );
                entry.visible = curve.is_visible();
                entry
            })
            .collect();
        self.settings = surface.settings().clone();
    }

    pub(super) fn isolate_local(&mut self, position: usize) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.visible = i == position;
        }
    }
}
