use std::path::{Path, PathBuf};

use curve_source::{canonical_path, DataSource};

use crate::error::{CurveError, CurveResult, Target};

use super::{AddOutcome, Curve, CurveId, CurveKind, CurveRegistry, Palette, RetentionPolicy, Rgb};

/// Result of detaching one or more curves.
#[derive(Debug, Default)]
pub struct DetachReport {
    /// Detached curves, in their former draw order.
    pub detached: Vec<CurveId>,
    /// Curves dropped by the retention policy as a consequence.
    pub purged: Vec<Curve>,
}

impl CurveRegistry {
    /// Put the curve backed by `path` on the plot, reading the file if the
    /// path is new to the registry.
    pub fn add_curve(
        &mut self,
        path: impl Into<PathBuf>,
        kind: CurveKind,
        score: f64,
    ) -> CurveResult<AddOutcome> {
        self.add_source(DataSource::new(path), kind, score)
    }

    /// Same as [`CurveRegistry::add_curve`] for a source that may already be
    /// loaded. If the path is registered, `source` is dropped unused.
    ///
    /// Nothing is registered (and no id, name or color is used up) when the
    /// file cannot be parsed.
    pub fn add_source(
        &mut self,
        source: DataSource,
        kind: CurveKind,
        score: f64,
    ) -> CurveResult<AddOutcome> {
        let position = self.attached_count();
        if let Some(curve) = self
            .curves
            .values_mut()
            .find(|curve| curve.source.path() == source.path())
        {
            if curve.attached {
                log::debug!("curve '{}' is already attached", curve.name);
                return Ok(AddOutcome::AlreadyAttached(curve.id));
            }
            curve.attached = true;
            curve.visible = true;
            curve.position = position;
            let id = curve.id;
            log::debug!("reattached curve '{}' at position {position}", curve.name);
            self.detach_order.retain(|detached| *detached != id);
            return Ok(AddOutcome::Reattached(id));
        }

        let points = source.load()?;
        let id = self.next_id();
        let name = self.generate_name();
        let color = self.palette.next_color();
        log::debug!(
            "created curve '{name}' ({} points, color {color}) from {:?}",
            points.len(),
            source.path()
        );
        self.curves.insert(
            id,
            Curve {
                id,
                name,
                color,
                kind,
                score,
                position,
                attached: true,
                visible: true,
                source,
                points,
            },
        );
        Ok(AddOutcome::Created(id))
    }

    /// Take the curve off the plot. It stays registered for re-attaching
    /// until the retention policy or an explicit purge drops it.
    pub fn delete_curve(&mut self, id: CurveId) -> CurveResult<DetachReport> {
        let curve = self
            .curves
            .get_mut(&id)
            .ok_or(CurveError::NotFound(Target::Id(id)))?;
        if !curve.attached {
            return Err(CurveError::NotAttached(id));
        }
        let former = curve.position;
        curve.attached = false;
        curve.visible = false;
        log::debug!("detached curve '{}' from position {former}", curve.name);

        for other in self
            .curves
            .values_mut()
            .filter(|other| other.attached && other.position > former)
        {
            other.position -= 1;
        }
        self.detach_order.push_back(id);
        Ok(DetachReport {
            detached: vec![id],
            purged: self.enforce_retention(),
        })
    }

    /// Show only the curve at `position`, hide every other attached curve.
    pub fn isolate(&mut self, position: usize) -> CurveResult<()> {
        self.id_at(position)
            .ok_or(CurveError::NotFound(Target::Position(position)))?;
        for curve in self.curves.values_mut().filter(|curve| curve.attached) {
            curve.visible = curve.position == position;
        }
        Ok(())
    }

    /// Check or uncheck a single curve in the legend.
    pub fn set_visible(&mut self, position: usize, visible: bool) -> CurveResult<()> {
        let curve = self
            .attached_at_mut(position)
            .ok_or(CurveError::NotFound(Target::Position(position)))?;
        curve.visible = visible;
        Ok(())
    }

    /// Detach every attached curve in one pass.
    pub fn clear_all(&mut self) -> DetachReport {
        let mut detached: Vec<(usize, CurveId)> = self
            .curves
            .values_mut()
            .filter(|curve| curve.attached)
            .map(|curve| {
                curve.attached = false;
                curve.visible = false;
                (curve.position, curve.id)
            })
            .collect();
        detached.sort_unstable();
        let detached: Vec<CurveId> = detached.into_iter().map(|(_, id)| id).collect();
        log::debug!("cleared {} curves", detached.len());
        self.detach_order.extend(detached.iter().copied());
        DetachReport {
            detached,
            purged: self.enforce_retention(),
        }
    }

    pub fn recolor(&mut self, id: CurveId, color: Rgb) -> CurveResult<()> {
        let curve = self
            .curves
            .get_mut(&id)
            .ok_or(CurveError::NotFound(Target::Id(id)))?;
        log::debug!("recolor '{}': {} -> {color}", curve.name, curve.color);
        curve.color = color;
        Ok(())
    }

    /// Rename the attached curve at `position`. Names stay unique across the
    /// whole registry, detached curves included.
    pub fn rename(&mut self, position: usize, name: &str) -> CurveResult<()> {
        let id = self
            .id_at(position)
            .ok_or(CurveError::NotFound(Target::Position(position)))?;
        if self
            .curves
            .values()
            .any(|curve| curve.id != id && curve.name == name)
        {
            return Err(CurveError::DuplicateName(name.to_owned()));
        }
        if let Some(curve) = self.curves.get_mut(&id) {
            log::debug!("rename '{}' -> '{name}'", curve.name);
            curve.name = name.to_owned();
        }
        Ok(())
    }

    /// Color and score of the attached curve called `name`.
    pub fn lookup_by_name(&self, name: &str) -> CurveResult<(Rgb, f64)> {
        self.curves
            .values()
            .find(|curve| curve.attached && curve.name == name)
            .map(|curve| (curve.color, curve.score))
            .ok_or_else(|| CurveError::NotFound(Target::Name(name.to_owned())))
    }

    /// Forget a detached curve and drop its data.
    pub fn purge(&mut self, id: CurveId) -> CurveResult<Curve> {
        match self.curves.get(&id) {
            None => return Err(CurveError::NotFound(Target::Id(id))),
            Some(curve) if curve.attached => return Err(CurveError::StillAttached(id)),
            Some(_) => (),
        }
        self.detach_order.retain(|detached| *detached != id);
        self.curves
            .remove(&id)
            .ok_or(CurveError::NotFound(Target::Id(id)))
    }

    /// Forget every detached curve.
    pub fn purge_detached(&mut self) -> Vec<Curve> {
        self.detach_order
            .drain(..)
            .filter_map(|id| self.curves.remove(&id))
            .collect()
    }

    pub fn set_retention(&mut self, retention: RetentionPolicy) -> Vec<Curve> {
        self.retention = retention;
        self.enforce_retention()
    }

    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    fn enforce_retention(&mut self) -> Vec<Curve> {
        let RetentionPolicy::KeepAtMost(limit) = self.retention else {
            return Vec::new();
        };
        let mut purged = Vec::new();
        while self.detach_order.len() > limit {
            let Some(id) = self.detach_order.pop_front() else {
                break;
            };
            if let Some(curve) = self.curves.remove(&id) {
                log::debug!("retention limit {limit} reached, purging '{}'", curve.name);
                purged.push(curve);
            }
        }
        purged
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn get(&self, id: CurveId) -> Option<&Curve> {
        self.curves.get(&id)
    }

    pub fn curve_at(&self, position: usize) -> Option<&Curve> {
        self.curves
            .values()
            .find(|curve| curve.attached && curve.position == position)
    }

    pub fn id_at(&self, position: usize) -> Option<CurveId> {
        self.curve_at(position).map(|curve| curve.id)
    }

    /// Lookup by backing file; `path` may be spelled differently from the
    /// one the curve was added with.
    pub fn find_by_path(&self, path: &Path) -> Option<&Curve> {
        let path = canonical_path(path.to_path_buf());
        self.curves.values().find(|curve| curve.path() == path)
    }

    /// Attached curves in draw order.
    pub fn attached(&self) -> Vec<&Curve> {
        let mut attached: Vec<&Curve> = self.curves.values().filter(|c| c.attached).collect();
        attached.sort_unstable_by_key(|curve| curve.position);
        attached
    }

    /// Every registered curve, in creation order.
    pub fn curves(&self) -> Vec<&Curve> {
        let mut curves: Vec<&Curve> = self.curves.values().collect();
        curves.sort_unstable_by_key(|curve| curve.id);
        curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn attached_count(&self) -> usize {
        self.curves.values().filter(|curve| curve.attached).count()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn attached_at_mut(&mut self, position: usize) -> Option<&mut Curve> {
        self.curves
            .values_mut()
            .find(|curve| curve.attached && curve.position == position)
    }

    fn next_id(&mut self) -> CurveId {
        let id = self.next_id;
        self.next_id.0 += 1;
        id
    }

    // `curve_<n>` with n counting created curves; skips names taken by a rename.
    fn generate_name(&mut self) -> String {
        loop {
            self.created += 1;
            let name = format!("curve_{}", self.created);
            if !self.curves.values().any(|curve| curve.name == name) {
                return name;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            init();
            Self {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        fn file(&self, name: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(content.as_bytes()).unwrap();
            path
        }

        fn roc(&self, name: &str) -> PathBuf {
            self.file(name, "0.0\t0.0\n0.5\t0.8\n1.0\t1.0\n\n")
        }
    }

    fn positions(registry: &CurveRegistry) -> Vec<(CurveId, usize)> {
        registry
            .attached()
            .iter()
            .map(|curve| (curve.id(), curve.position().unwrap()))
            .collect()
    }

    fn assert_contiguous(registry: &CurveRegistry) {
        for (expected, curve) in registry.attached().iter().enumerate() {
            assert_eq!(curve.position(), Some(expected));
        }
    }

    #[test]
    fn test_scenario_add_readd_delete_reattach() {
        let fx = Fixture::new();
        let path = fx.roc("a.roc");
        let mut registry = CurveRegistry::default();

        let outcome = registry.add_curve(&path, CurveKind::Roc, 1.0).unwrap();
        let AddOutcome::Created(id) = outcome else {
            panic!("expected a new curve, got {outcome:?}");
        };
        let curve = registry.get(id).unwrap();
        let points: Vec<[f64; 2]> = curve.points().iter().map(|pt| (*pt).into()).collect();
        assert_eq!(points, vec![[0.0, 0.0], [0.5, 0.8], [1.0, 1.0]]);
        assert_eq!(curve.name(), "curve_1");
        assert_eq!(curve.position(), Some(0));
        let color = curve.color();

        let again = registry.add_curve(&path, CurveKind::Roc, 1.0).unwrap();
        assert_eq!(again, AddOutcome::AlreadyAttached(id));
        assert_eq!(registry.len(), 1);

        registry.delete_curve(id).unwrap();
        assert_eq!(registry.attached_count(), 0);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(id).unwrap().position().is_none());

        let back = registry.add_curve(&path, CurveKind::Roc, 1.0).unwrap();
        assert_eq!(back, AddOutcome::Reattached(id));
        let curve = registry.get(id).unwrap();
        assert_eq!(curve.color(), color);
        assert_eq!(curve.name(), "curve_1");
        assert!(curve.is_visible());
    }

    #[test]
    fn test_duplicate_add_changes_nothing() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        let a = fx.roc("a.roc");
        let b = fx.roc("b.roc");
        registry.add_curve(&a, CurveKind::Roc, 1.0).unwrap();
        registry.add_curve(&b, CurveKind::Roc, 1.0).unwrap();
        let before: Vec<_> = registry
            .curves()
            .iter()
            .map(|c| (c.id(), c.color(), c.position()))
            .collect();
        let cursor = registry.palette().cursor();

        registry.add_curve(&b, CurveKind::Roc, 0.3).unwrap();

        let after: Vec<_> = registry
            .curves()
            .iter()
            .map(|c| (c.id(), c.color(), c.position()))
            .collect();
        assert_eq!(before, after);
        assert_eq!(registry.palette().cursor(), cursor);
    }

    #[test]
    fn test_same_file_under_another_path_is_one_curve() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        let a = fx.roc("a.roc");
        std::fs::create_dir(fx.dir.path().join("sub")).unwrap();
        let detour = fx.dir.path().join("sub").join("..").join("a.roc");

        let first = registry.add_curve(&a, CurveKind::Roc, 1.0).unwrap();
        let second = registry.add_curve(&detour, CurveKind::Roc, 1.0).unwrap();
        assert_eq!(second, AddOutcome::AlreadyAttached(first.id()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find_by_path(&detour).map(|c| c.id()), Some(first.id()));

        registry.delete_curve(first.id()).unwrap();
        let third = registry.add_curve(&detour, CurveKind::Roc, 1.0).unwrap();
        assert_eq!(third, AddOutcome::Reattached(first.id()));
    }

    #[test]
    fn test_failed_load_registers_nothing() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        let bad = fx.file("bad.roc", "0.0\t0.0\n0.5\n");
        let err = registry.add_curve(&bad, CurveKind::Roc, 1.0).unwrap_err();
        assert!(matches!(err, CurveError::Parse(_)));
        assert!(registry.is_empty());
        assert_eq!(registry.palette().cursor(), 0);

        let missing = fx.dir.path().join("missing.roc");
        let err = registry.add_curve(missing, CurveKind::Roc, 1.0).unwrap_err();
        assert!(matches!(err, CurveError::Parse(_)));

        let good = fx.roc("good.roc");
        let id = registry.add_curve(good, CurveKind::Roc, 1.0).unwrap().id();
        assert_eq!(registry.get(id).unwrap().name(), "curve_1");
        assert_eq!(usize::from(id), 0);
    }

    #[test]
    fn test_delete_shifts_later_positions() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        let ids: Vec<CurveId> = (0..5)
            .map(|i| {
                let path = fx.roc(&format!("{i}.roc"));
                registry.add_curve(path, CurveKind::Roc, 1.0).unwrap().id()
            })
            .collect();

        registry.delete_curve(ids[2]).unwrap();
        assert_eq!(
            positions(&registry),
            vec![(ids[0], 0), (ids[1], 1), (ids[3], 2), (ids[4], 3)]
        );

        // Further adds and removes keep the sequence contiguous.
        let extra = registry
            .add_curve(fx.roc("extra.roc"), CurveKind::Roc, 1.0)
            .unwrap()
            .id();
        assert_eq!(registry.get(extra).unwrap().position(), Some(4));
        registry.delete_curve(ids[0]).unwrap();
        assert_contiguous(&registry);
        assert_eq!(registry.get(ids[1]).unwrap().position(), Some(0));
        assert_eq!(registry.get(extra).unwrap().position(), Some(3));

        // Reattached curves go to the end of the draw order.
        registry
            .add_curve(fx.dir.path().join("2.roc"), CurveKind::Roc, 1.0)
            .unwrap();
        assert_eq!(registry.get(ids[2]).unwrap().position(), Some(4));
        assert_contiguous(&registry);
    }

    #[test]
    fn test_delete_errors() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        let id = registry
            .add_curve(fx.roc("a.roc"), CurveKind::Roc, 1.0)
            .unwrap()
            .id();
        registry.delete_curve(id).unwrap();
        assert!(matches!(
            registry.delete_curve(id),
            Err(CurveError::NotAttached(_))
        ));
        assert!(matches!(
            registry.delete_curve(CurveId(42)),
            Err(CurveError::NotFound(Target::Id(CurveId(42))))
        ));
    }

    #[test]
    fn test_isolate_leaves_one_visible() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        for i in 0..4 {
            registry
                .add_curve(fx.roc(&format!("{i}.roc")), CurveKind::Roc, 1.0)
                .unwrap();
        }
        registry.set_visible(1, false).unwrap();
        registry.set_visible(3, false).unwrap();

        registry.isolate(1).unwrap();
        let visible: Vec<usize> = registry
            .attached()
            .iter()
            .filter(|c| c.is_visible())
            .filter_map(|c| c.position())
            .collect();
        assert_eq!(visible, vec![1]);
        assert_eq!(registry.attached_count(), 4);
        assert_contiguous(&registry);

        assert!(matches!(
            registry.isolate(4),
            Err(CurveError::NotFound(Target::Position(4)))
        ));
    }

    #[test]
    fn test_palette_cycles_over_creations() {
        let fx = Fixture::new();
        let palette = Palette::new(vec![Rgb(1, 0, 0), Rgb(0, 1, 0), Rgb(0, 0, 1)]).unwrap();
        let mut registry = CurveRegistry::new(palette.clone());
        let colors: Vec<Rgb> = (0..7)
            .map(|i| {
                let id = registry
                    .add_curve(fx.roc(&format!("{i}.pr")), CurveKind::Pr, 0.7)
                    .unwrap()
                    .id();
                registry.get(id).unwrap().color()
            })
            .collect();
        let expected: Vec<Rgb> = (0..7).map(|i| palette.colors()[i % 3]).collect();
        assert_eq!(colors, expected);
    }

    #[test]
    fn test_shared_palette_between_registries() {
        let fx = Fixture::new();
        let palette = Palette::standard();
        let mut roc = CurveRegistry::new(palette.clone());
        let mut pr = CurveRegistry::new(palette.clone());
        let a = roc.add_curve(fx.roc("a.roc"), CurveKind::Roc, 1.0).unwrap().id();
        let b = pr.add_curve(fx.roc("b.pr"), CurveKind::Pr, 0.7).unwrap().id();
        assert_eq!(roc.get(a).unwrap().color(), palette.colors()[0]);
        assert_eq!(pr.get(b).unwrap().color(), palette.colors()[1]);
    }

    #[test]
    fn test_clear_all_detaches_everything() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        let ids: Vec<CurveId> = (0..3)
            .map(|i| {
                registry
                    .add_curve(fx.roc(&format!("{i}.roc")), CurveKind::Roc, 1.0)
                    .unwrap()
                    .id()
            })
            .collect();
        let report = registry.clear_all();
        assert_eq!(report.detached, ids);
        assert!(report.purged.is_empty());
        assert_eq!(registry.attached_count(), 0);
        assert_eq!(registry.len(), 3);
        assert!(registry.attached().is_empty());

        let back = registry
            .add_curve(fx.dir.path().join("1.roc"), CurveKind::Roc, 1.0)
            .unwrap();
        assert_eq!(back, AddOutcome::Reattached(ids[1]));
        assert_eq!(registry.get(ids[1]).unwrap().position(), Some(0));
    }

    #[test]
    fn test_recolor_and_rename() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        let a = registry.add_curve(fx.roc("a.roc"), CurveKind::Roc, 0.9).unwrap().id();
        registry.add_curve(fx.roc("b.roc"), CurveKind::Roc, 0.8).unwrap();

        registry.recolor(a, Rgb(10, 20, 30)).unwrap();
        registry.rename(0, "baseline").unwrap();
        assert_eq!(registry.lookup_by_name("baseline").unwrap(), (Rgb(10, 20, 30), 0.9));

        assert!(matches!(
            registry.rename(1, "baseline"),
            Err(CurveError::DuplicateName(_))
        ));
        // Renaming a curve to its own name is fine.
        registry.rename(0, "baseline").unwrap();
        assert!(matches!(
            registry.rename(7, "x"),
            Err(CurveError::NotFound(Target::Position(7)))
        ));
        assert!(matches!(
            registry.recolor(CurveId(7), Rgb::BLACK),
            Err(CurveError::NotFound(Target::Id(CurveId(7))))
        ));
    }

    #[test]
    fn test_generated_name_skips_renamed() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        registry.add_curve(fx.roc("a.roc"), CurveKind::Roc, 1.0).unwrap();
        registry.rename(0, "curve_2").unwrap();
        let id = registry.add_curve(fx.roc("b.roc"), CurveKind::Roc, 1.0).unwrap().id();
        assert_eq!(registry.get(id).unwrap().name(), "curve_3");
    }

    #[test]
    fn test_lookup_only_attached() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        let id = registry.add_curve(fx.roc("a.roc"), CurveKind::Roc, 0.5).unwrap().id();
        assert!(registry.lookup_by_name("curve_1").is_ok());
        registry.delete_curve(id).unwrap();
        assert!(matches!(
            registry.lookup_by_name("curve_1"),
            Err(CurveError::NotFound(Target::Name(_)))
        ));
    }

    #[test]
    fn test_keep_all_never_purges() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        for i in 0..20 {
            let id = registry
                .add_curve(fx.roc(&format!("{i}.roc")), CurveKind::Roc, 1.0)
                .unwrap()
                .id();
            assert!(registry.delete_curve(id).unwrap().purged.is_empty());
        }
        assert_eq!(registry.len(), 20);
    }

    #[test]
    fn test_retention_limit_purges_oldest_detached() {
        let fx = Fixture::new();
        let mut registry =
            CurveRegistry::default().with_retention(RetentionPolicy::KeepAtMost(2));
        let ids: Vec<CurveId> = (0..4)
            .map(|i| {
                registry
                    .add_curve(fx.roc(&format!("{i}.roc")), CurveKind::Roc, 1.0)
                    .unwrap()
                    .id()
            })
            .collect();
        registry.delete_curve(ids[1]).unwrap();
        registry.delete_curve(ids[3]).unwrap();
        let report = registry.delete_curve(ids[0]).unwrap();
        let purged: Vec<CurveId> = report.purged.iter().map(|c| c.id()).collect();
        assert_eq!(purged, vec![ids[1]]);
        assert!(registry.get(ids[1]).is_none());

        // A purged path comes back as a brand new curve.
        let outcome = registry
            .add_curve(fx.dir.path().join("1.roc"), CurveKind::Roc, 1.0)
            .unwrap();
        let AddOutcome::Created(new_id) = outcome else {
            panic!("expected a new curve, got {outcome:?}");
        };
        assert!(new_id > ids[3]);
        assert_eq!(registry.get(new_id).unwrap().name(), "curve_5");
    }

    #[test]
    fn test_reattach_refreshes_retention_order() {
        let fx = Fixture::new();
        let mut registry =
            CurveRegistry::default().with_retention(RetentionPolicy::KeepAtMost(1));
        let a = registry.add_curve(fx.roc("a.roc"), CurveKind::Roc, 1.0).unwrap().id();
        let b = registry.add_curve(fx.roc("b.roc"), CurveKind::Roc, 1.0).unwrap().id();
        registry.delete_curve(a).unwrap();
        registry.add_curve(fx.dir.path().join("a.roc"), CurveKind::Roc, 1.0).unwrap();
        let report = registry.delete_curve(b).unwrap();
        assert!(report.purged.is_empty());
        assert!(registry.get(a).is_some());
    }

    #[test]
    fn test_explicit_purge() {
        let fx = Fixture::new();
        let mut registry = CurveRegistry::default();
        let a = registry.add_curve(fx.roc("a.roc"), CurveKind::Roc, 1.0).unwrap().id();
        let b = registry.add_curve(fx.roc("b.roc"), CurveKind::Roc, 1.0).unwrap().id();
        let c = registry.add_curve(fx.roc("c.roc"), CurveKind::Roc, 1.0).unwrap().id();
        assert!(matches!(registry.purge(a), Err(CurveError::StillAttached(_))));

        registry.delete_curve(a).unwrap();
        let purged = registry.purge(a).unwrap();
        assert_eq!(purged.id(), a);
        assert!(matches!(registry.purge(a), Err(CurveError::NotFound(_))));

        registry.delete_curve(b).unwrap();
        registry.delete_curve(c).unwrap();
        assert_eq!(registry.purge_detached().len(), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_curve_kind_from_extension() {
        assert_eq!(CurveKind::from_path(Path::new("x/a.ROC")), Some(CurveKind::Roc));
        assert_eq!(CurveKind::from_path(Path::new("a.pr")), Some(CurveKind::Pr));
        assert_eq!(CurveKind::from_path(Path::new("a.txt")), None);
        assert_eq!(CurveKind::from_path(Path::new("roc")), None);
    }
}
