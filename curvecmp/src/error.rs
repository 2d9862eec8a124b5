use std::path::PathBuf;

use curve_source::ParseError;
use thiserror::Error;

use crate::curves::CurveId;

pub type CurveResult<T> = Result<T, CurveError>;

/// Errors reported by the curve registry and the plot surface.
#[derive(Debug, Error)]
pub enum CurveError {
    /// The backing file could not be read or has the wrong format.
    #[error("unable to load curve data: {0}")]
    Parse(#[from] ParseError),

    /// No curve matches the given id, position or name.
    #[error("no curve with {0}")]
    NotFound(Target),

    #[error("curve {0:?} is not attached")]
    NotAttached(CurveId),

    /// Only detached curves can be purged.
    #[error("curve {0:?} is still attached")]
    StillAttached(CurveId),

    #[error("name '{0}' is already used by another curve")]
    DuplicateName(String),

    /// The file extension is neither `.roc` nor `.pr`.
    #[error("unknown curve kind for {0:?}")]
    UnknownKind(PathBuf),
}

/// How an operation addressed a curve.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Id(CurveId),
    Position(usize),
    Name(String),
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Id(id) => write!(f, "id {}", id.0),
            Target::Position(pos) => write!(f, "position {pos}"),
            Target::Name(name) => write!(f, "name '{name}'"),
        }
    }
}
