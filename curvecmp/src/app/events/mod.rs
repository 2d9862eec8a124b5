use std::{path::PathBuf, sync::mpsc::TryRecvError, thread::JoinHandle};

use app_core::{
    backend::{BackendEventLoop, BackendLink, LinkReceiver},
    event::{AppEvent, EventState},
    string_error::ErrorStringExt,
    BACKEND_HUNG_UP_MSG,
};
use curve_source::{DataSource, ParseError};
use derive_new::new;

use super::{DynRequestSender, EguiApp};
use crate::{curves::CurveKind, error::CurveError, notify::PanelRequest, BackendAppState};

// ---------------------------------------------------------------------------
//
//
// EventQueue
//
//
// ---------------------------------------------------------------------------

/// The EventQueue stores events that are processed each iteration
/// of the application GUI event loop.
///
/// Events are applied in the order they were queued. An event that is still
/// busy holds back everything queued after it.
pub struct EventQueue<EguiApp> {
    /// Stores events for later processing.
    queue: Vec<Box<dyn AppEvent<App = EguiApp>>>,
}

impl<EguiApp> EventQueue<EguiApp> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = EguiApp>>) {
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Apply `events` front to back until one of them is busy. The busy event
/// and all events behind it are returned in their original order, together
/// with the number of events that finished.
fn apply_in_order<App>(
    events: Vec<Box<dyn AppEvent<App = App>>>,
    app: &mut App,
) -> (Vec<Box<dyn AppEvent<App = App>>>, usize) {
    let mut finished = 0;
    let mut events = events.into_iter();
    while let Some(mut event) = events.next() {
        match event.apply(app) {
            Ok(EventState::Finished) => finished += 1,
            Ok(EventState::Busy) => {
                let mut pending = vec![event];
                pending.extend(events.by_ref());
                return (pending, finished);
            }
            Err(err) => {
                log::error!("event failed: {}", err)
            }
        }
    }
    (Vec::new(), finished)
}

impl EguiApp {
    pub fn run_events(&mut self) {
        let events = std::mem::take(&mut self.event_queue.queue);
        let (mut pending, finished) = apply_in_order(events, self);
        if finished > 0 {
            self.request_redraw();
        }
        // Events queued while applying go behind the held back ones.
        pending.append(&mut self.event_queue.queue);
        self.event_queue.queue = pending;
    }
}

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

/// Waits for the open dialog and queues a [`LoadCurve`] per picked file.
#[derive(new)]
pub struct OpenFileRequested {
    thread_handle: Option<JoinHandle<Option<Vec<PathBuf>>>>,
}

/// Puts the curve stored at `path` on the plot matching its extension.
///
/// New files are read on the backend thread; files the registry already
/// knows are re-attached right away.
#[derive(new)]
pub struct LoadCurve {
    path: PathBuf,
    #[new(default)]
    pending: Option<LinkReceiver<Result<DataSource, ParseError>>>,
}

/// Forwards a legend request to the surface of the given plot.
#[derive(new)]
pub struct SurfaceRequest {
    kind: CurveKind,
    request: PanelRequest,
}

#[derive(new)]
pub struct SwitchPlot {}

/// Forgets the detached curves of both plots.
#[derive(new)]
pub struct PurgeDetached {}

// ---------------------------------------------------------------------------
//
//
// apply()
//
//
// ---------------------------------------------------------------------------

impl AppEvent for OpenFileRequested {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(handle) = self.thread_handle.take_if(|handle| handle.is_finished()) {
            match handle.join() {
                Ok(Some(paths)) => {
                    for path in paths {
                        app.event_queue.queue_event(Box::new(LoadCurve::new(path)));
                    }
                }
                Ok(None) => (),
                Err(err) => {
                    log::error!("open dialog failed: {:?}", err)
                }
            };
            Ok(EventState::Finished)
        } else {
            Ok(EventState::Busy)
        }
    }
}

impl AppEvent for LoadCurve {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let Some(kind) = CurveKind::from_path(&self.path) else {
            return Err(CurveError::UnknownKind(self.path.clone()).to_string());
        };
        let score = app.config.default_score(kind);

        let Some(rx) = &self.pending else {
            if app.surface(kind).registry().find_by_path(&self.path).is_some() {
                // Known file: re-attach or ignore, no I/O needed.
                app.surface_mut(kind)
                    .add_curve(self.path.clone(), kind, score)
                    .err_to_string("unable to attach curve")?;
                return Ok(EventState::Finished);
            }
            self.pending = Some(load_source(&self.path, &mut app.request_tx));
            return Ok(EventState::Busy);
        };

        match rx.try_recv() {
            Ok(Ok(source)) => {
                app.surface_mut(kind)
                    .add_source(source, kind, score)
                    .err_to_string("unable to attach curve")?;
                Ok(EventState::Finished)
            }
            Ok(Err(err)) => Err(format!("unable to load {:?}: {err}", self.path)),
            Err(TryRecvError::Empty) => Ok(EventState::Busy),
            Err(TryRecvError::Disconnected) => Err(BACKEND_HUNG_UP_MSG.to_string()),
        }
    }
}

impl AppEvent for SurfaceRequest {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let (surface, legend) = app.view_mut(self.kind);
        if let Err(err) = surface.handle(self.request.clone()) {
            // The legend may have applied the change optimistically.
            legend.resync(surface);
            return Err(format!("{:?} failed: {err}", self.request));
        }
        Ok(EventState::Finished)
    }
}

impl AppEvent for SwitchPlot {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.current = match app.current {
            CurveKind::Roc => CurveKind::Pr,
            CurveKind::Pr => CurveKind::Roc,
        };
        log::debug!("showing {} plot", app.current.short_name());
        Ok(EventState::Finished)
    }
}

impl AppEvent for PurgeDetached {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let purged = app.surface_mut(CurveKind::Roc).purge_detached()
            + app.surface_mut(CurveKind::Pr).purge_detached();
        log::debug!("purged {purged} detached curves");
        Ok(EventState::Finished)
    }
}

fn load_source(
    path: &std::path::Path,
    request_tx: &mut DynRequestSender,
) -> LinkReceiver<Result<DataSource, ParseError>> {
    let path = path.to_owned();
    let (rx, linker) = BackendLink::new(
        &format!("load curve data from file {:?}", path),
        move |b: &mut BackendEventLoop<BackendAppState>| -> Result<DataSource, ParseError> {
            let source = DataSource::new(path.as_path());
            source.load().map_err(|err| {
                log::error!("{}", err);
                err
            })?;
            log::debug!("{} files read so far", b.state.record_read());
            Ok(source)
        },
    );
    if request_tx.send(Box::new(linker)).is_err() {
        log::error!("{}", BACKEND_HUNG_UP_MSG);
    }
    rx
}
