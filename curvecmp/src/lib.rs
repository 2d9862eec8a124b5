#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod backend_state;
pub mod curves;
pub mod error;
pub mod notify;
pub mod surface;

pub use app::config::Config;
pub use app::EguiApp;
pub use backend_state::BackendAppState;
pub use curves::{AddOutcome, Curve, CurveId, CurveKind, CurveRegistry, Palette, RetentionPolicy, Rgb};
pub use error::{CurveError, CurveResult};
pub use surface::{PlotSettings, PlotSurface};
