use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use crate::{parse_points, ParseError, Point};

/// A coordinate file that is read on first access.
///
/// The parsed points are cached behind a `OnceLock`, so a source loaded on a
/// worker thread can be moved to the UI thread and read there without
/// further synchronisation. A failed load leaves the cache empty.
#[derive(Debug)]
pub struct DataSource {
    path: PathBuf,
    cache: OnceLock<Arc<[Point]>>,
}

impl DataSource {
    /// The path is made canonical when the file exists, so two spellings
    /// of the same file give equal [`DataSource::path`]s.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: canonical_path(path.into()),
            cache: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Cached points, without touching the file.
    pub fn cached(&self) -> Option<&Arc<[Point]>> {
        self.cache.get()
    }

    /// Return the points of the file, reading it only on the first call.
    pub fn load(&self) -> Result<Arc<[Point]>, ParseError> {
        if let Some(points) = self.cache.get() {
            return Ok(Arc::clone(points));
        }
        log::debug!("reading points from {:?}", self.path);
        let file = File::open(&self.path).map_err(|source| ParseError::Open {
            path: self.path.clone(),
            source,
        })?;
        let points: Arc<[Point]> = parse_points(BufReader::new(file))?.into();
        log::debug!("read {} points from {:?}", points.len(), self.path);
        Ok(Arc::clone(self.cache.get_or_init(|| points)))
    }
}

/// Absolute path with symlinks and `..` resolved, or `path` itself if the
/// file cannot be resolved (e.g. it does not exist yet).
pub fn canonical_path(path: PathBuf) -> PathBuf {
    std::fs::canonicalize(&path).unwrap_or(path)
}
