use std::{path::PathBuf, sync::mpsc::Receiver};

use curve_source::DataSource;

use crate::{
    curves::{AddOutcome, Curve, CurveId, CurveKind, Rgb},
    error::{CurveError, CurveResult, Target},
    notify::{EventFilter, PanelRequest, SurfaceEvent},
};

use super::PlotSurface;

impl PlotSurface {
    pub fn subscribe(&mut self, filter: EventFilter) -> Receiver<SurfaceEvent> {
        self.notifier.subscribe(filter)
    }

    /// Apply a request coming from the panel.
    pub fn handle(&mut self, request: PanelRequest) -> CurveResult<()> {
        log::debug!("panel request {:?}", request);
        match request {
            PanelRequest::AddCurve { path, kind, score } => {
                self.add_curve(path, kind, score)?;
            }
            PanelRequest::Delete(id) => self.delete_curve(id)?,
            PanelRequest::Rename { position, name } => self.rename(position, &name)?,
            PanelRequest::Recolor { id, color } => self.recolor(id, color)?,
            PanelRequest::Isolate(position) => self.isolate(position)?,
            PanelRequest::SetVisible { position, visible } => {
                self.set_visible(position, visible)?
            }
            PanelRequest::Clear => self.clear(),
            PanelRequest::ColorAucLookup(name) => {
                self.color_auc(&name)?;
            }
            PanelRequest::Background(color) => self.set_background(color),
            PanelRequest::PlotTitle(title) => self.set_title(&title),
            PanelRequest::AxisLabels { x, y } => self.set_axis_labels(&x, &y),
            PanelRequest::Grid(enabled) => self.set_grid(enabled),
        }
        Ok(())
    }

    pub fn add_curve(
        &mut self,
        path: impl Into<PathBuf>,
        kind: CurveKind,
        score: f64,
    ) -> CurveResult<AddOutcome> {
        self.add_source(DataSource::new(path), kind, score)
    }

    /// Attach a curve whose source may have been loaded on another thread.
    pub fn add_source(
        &mut self,
        source: DataSource,
        kind: CurveKind,
        score: f64,
    ) -> CurveResult<AddOutcome> {
        let outcome = self.registry.add_source(source, kind, score)?;
        if outcome.changed() {
            if let Some(curve) = self.registry.get(outcome.id()) {
                let event = SurfaceEvent::CurveAttached {
                    id: curve.id(),
                    name: curve.name().to_owned(),
                    color: curve.color(),
                    score: curve.score(),
                };
                self.notifier.emit(event);
            }
            self.request_redraw();
        }
        Ok(outcome)
    }

    pub fn delete_curve(&mut self, id: CurveId) -> CurveResult<()> {
        let report = self.registry.delete_curve(id)?;
        let name = self
            .registry
            .get(id)
            .map(|curve| curve.name().to_owned())
            .or_else(|| {
                report
                    .purged
                    .iter()
                    .find(|curve| curve.id() == id)
                    .map(|curve| curve.name().to_owned())
            })
            .unwrap_or_default();
        self.notifier.emit(SurfaceEvent::CurveDetached { id, name });
        self.emit_purged(report.purged);
        self.request_redraw();
        Ok(())
    }

    /// Delete by draw-order position, as the legend addresses curves.
    pub fn delete_at(&mut self, position: usize) -> CurveResult<()> {
        let id = self
            .registry
            .id_at(position)
            .ok_or(CurveError::NotFound(Target::Position(position)))?;
        self.delete_curve(id)
    }

    pub fn recolor(&mut self, id: CurveId, color: Rgb) -> CurveResult<()> {
        self.registry.recolor(id, color)?;
        self.request_redraw();
        Ok(())
    }

    pub fn rename(&mut self, position: usize, name: &str) -> CurveResult<()> {
        self.registry.rename(position, name)?;
        self.request_redraw();
        Ok(())
    }

    pub fn isolate(&mut self, position: usize) -> CurveResult<()> {
        self.registry.isolate(position)?;
        self.request_redraw();
        Ok(())
    }

    pub fn set_visible(&mut self, position: usize, visible: bool) -> CurveResult<()> {
        self.registry.set_visible(position, visible)?;
        self.request_redraw();
        Ok(())
    }

    pub fn clear(&mut self) {
        let report = self.registry.clear_all();
        self.notifier.emit(SurfaceEvent::PlotCleared);
        self.emit_purged(report.purged);
        self.request_redraw();
    }

    /// Answer a legend query for the attached curve `name`.
    pub fn color_auc(&mut self, name: &str) -> CurveResult<(Rgb, f64)> {
        let (color, score) = self.registry.lookup_by_name(name)?;
        self.notifier.emit(SurfaceEvent::ColorAucResponse {
            name: name.to_owned(),
            color,
            score,
        });
        Ok((color, score))
    }

    pub fn purge_detached(&mut self) -> usize {
        let purged = self.registry.purge_detached();
        let count = purged.len();
        self.emit_purged(purged);
        count
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.settings.background = color;
        self.request_redraw();
    }

    pub fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.settings.title);
        self.request_redraw();
    }

    pub fn set_axis_labels(&mut self, x_label: &str, y_label: &str) {
        x_label.clone_into(&mut self.settings.x_label);
        y_label.clone_into(&mut self.settings.y_label);
        self.request_redraw();
    }

    pub fn set_grid(&mut self, enabled: bool) {
        self.settings.grid = enabled;
        self.request_redraw();
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }

    /// True once after each batch of mutations.
    pub fn take_redraw(&mut self) -> bool {
        self.request_redraw.take().is_some()
    }

    fn emit_purged(&mut self, purged: Vec<Curve>) {
        for curve in purged {
            self.notifier.emit(SurfaceEvent::CurvePurged {
                id: curve.id(),
                name: curve.name().to_owned(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{
        curves::{CurveRegistry, Palette, RetentionPolicy},
        notify::EventKind,
    };

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn write_roc(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"0.0\t0.0\n0.5\t0.8\n1.0\t1.0\n").unwrap();
        path
    }

    fn surface() -> PlotSurface {
        init();
        PlotSurface::new(CurveKind::Roc, CurveRegistry::new(Palette::standard()))
    }

    #[test]
    fn test_add_notifies_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface();
        let rx = surface.subscribe(EventFilter::all());
        let path = write_roc(&dir, "a.roc");

        let id = surface.add_curve(&path, CurveKind::Roc, 0.93).unwrap().id();
        assert!(surface.take_redraw());
        assert_eq!(
            rx.try_recv().unwrap(),
            SurfaceEvent::CurveAttached {
                id,
                name: "curve_1".into(),
                color: Palette::standard().colors()[0],
                score: 0.93,
            }
        );

        // Already attached: no event, no redraw.
        let outcome = surface.add_curve(&path, CurveKind::Roc, 0.93).unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyAttached(id));
        assert!(rx.try_recv().is_err());
        assert!(!surface.take_redraw());
    }

    #[test]
    fn test_failed_add_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface();
        let rx = surface.subscribe(EventFilter::all());
        let err = surface
            .add_curve(dir.path().join("nope.roc"), CurveKind::Roc, 1.0)
            .unwrap_err();
        assert!(matches!(err, CurveError::Parse(_)));
        assert!(rx.try_recv().is_err());
        assert!(!surface.take_redraw());
        assert!(surface.registry().is_empty());
    }

    #[test]
    fn test_delete_and_reattach_events() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface();
        let rx = surface.subscribe(EventFilter::only(
            EventKind::CURVE_ATTACHED | EventKind::CURVE_DETACHED,
        ));
        let path = write_roc(&dir, "a.roc");
        let id = surface.add_curve(&path, CurveKind::Roc, 1.0).unwrap().id();
        surface.delete_at(0).unwrap();
        surface.add_curve(&path, CurveKind::Roc, 1.0).unwrap();

        let events: Vec<SurfaceEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            SurfaceEvent::CurveDetached {
                id,
                name: "curve_1".into()
            }
        );
        assert!(matches!(
            &events[2],
            SurfaceEvent::CurveAttached { id: reattached, .. } if *reattached == id
        ));
        assert!(matches!(
            surface.delete_at(1),
            Err(CurveError::NotFound(Target::Position(1)))
        ));
    }

    #[test]
    fn test_handle_routes_requests() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface();
        let rx = surface.subscribe(EventFilter::only(EventKind::COLOR_AUC));
        for name in ["a.roc", "b.roc"] {
            surface
                .handle(PanelRequest::AddCurve {
                    path: write_roc(&dir, name),
                    kind: CurveKind::Roc,
                    score: 0.8,
                })
                .unwrap();
        }
        let first = surface.registry().id_at(0).unwrap();

        surface
            .handle(PanelRequest::Recolor {
                id: first,
                color: Rgb(1, 2, 3),
            })
            .unwrap();
        surface
            .handle(PanelRequest::Rename {
                position: 0,
                name: "model A".into(),
            })
            .unwrap();
        surface
            .handle(PanelRequest::ColorAucLookup("model A".into()))
            .unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            SurfaceEvent::ColorAucResponse {
                name: "model A".into(),
                color: Rgb(1, 2, 3),
                score: 0.8,
            }
        );

        surface.handle(PanelRequest::Isolate(1)).unwrap();
        let visible: Vec<bool> = surface
            .registry()
            .attached()
            .iter()
            .map(|c| c.is_visible())
            .collect();
        assert_eq!(visible, vec![false, true]);

        surface.handle(PanelRequest::Delete(first)).unwrap();
        assert_eq!(surface.registry().attached_count(), 1);

        surface.handle(PanelRequest::Clear).unwrap();
        assert_eq!(surface.registry().attached_count(), 0);
        assert_eq!(surface.registry().len(), 2);

        assert!(surface
            .handle(PanelRequest::ColorAucLookup("model A".into()))
            .is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_settings_requests() {
        let mut surface = surface();
        assert_eq!(surface.settings().x_label, "False Positive Rate");
        surface.handle(PanelRequest::Grid(false)).unwrap();
        surface
            .handle(PanelRequest::PlotTitle("Models".into()))
            .unwrap();
        surface
            .handle(PanelRequest::AxisLabels {
                x: "FPR".into(),
                y: "TPR".into(),
            })
            .unwrap();
        surface
            .handle(PanelRequest::Background(Rgb::WHITE))
            .unwrap();
        let settings = surface.settings();
        assert!(!settings.grid);
        assert_eq!(settings.title, "Models");
        assert_eq!((settings.x_label.as_str(), settings.y_label.as_str()), ("FPR", "TPR"));
        assert_eq!(settings.background, Rgb::WHITE);
        assert!(surface.take_redraw());
        assert!(!surface.take_redraw());
    }

    #[test]
    fn test_purge_events() {
        let dir = tempfile::tempdir().unwrap();
        init();
        let registry = CurveRegistry::default().with_retention(RetentionPolicy::KeepAtMost(0));
        let mut surface = PlotSurface::new(CurveKind::Pr, registry);
        let rx = surface.subscribe(EventFilter::only(
            EventKind::CURVE_DETACHED | EventKind::CURVE_PURGED,
        ));
        let id = surface
            .add_curve(write_roc(&dir, "a.pr"), CurveKind::Pr, 0.7)
            .unwrap()
            .id();
        surface.delete_curve(id).unwrap();
        let events: Vec<SurfaceEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                SurfaceEvent::CurveDetached {
                    id,
                    name: "curve_1".into()
                },
                SurfaceEvent::CurvePurged {
                    id,
                    name: "curve_1".into()
                },
            ]
        );
        assert!(surface.registry().is_empty());
        assert_eq!(surface.purge_detached(), 0);
    }
}
