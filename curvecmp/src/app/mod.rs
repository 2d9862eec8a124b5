mod components;
pub mod config;
mod events;

use std::{path::PathBuf, sync::mpsc::Sender, thread::JoinHandle};

use app_core::backend::BackendRequest;

use self::components::{Legend, Plotter};
use crate::{
    curves::{CurveKind, CurveRegistry, Palette},
    surface::PlotSurface,
    BackendAppState,
};
use config::Config;
use events::{EventQueue, LoadCurve, OpenFileRequested, PurgeDetached, SurfaceRequest, SwitchPlot};

pub type DynRequestSender = Sender<Box<dyn BackendRequest<BackendAppState>>>;

pub struct EguiApp {
    config: Config,
    backend_thread_handle: Option<JoinHandle<()>>,
    request_tx: DynRequestSender,
    roc: View,
    pr: View,
    plotter: Plotter,
    current: CurveKind,
    shortcuts_modal_open: bool,
    event_queue: EventQueue<Self>,
    request_redraw: Option<()>,
}

/// A plot and the legend listening to it.
struct View {
    surface: PlotSurface,
    legend: Legend,
}

impl View {
    fn new(kind: CurveKind, palette: &Palette, config: &Config) -> Self {
        let registry = CurveRegistry::new(palette.clone()).with_retention(config.retention);
        let mut surface = PlotSurface::new(kind, registry);
        surface.set_grid(config.grid);
        surface.set_background(config.background);
        let legend = Legend::new(kind, &mut surface);
        Self { surface, legend }
    }
}

impl EguiApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: Config,
        request_tx: DynRequestSender,
        backend_thread_handle: JoinHandle<()>,
        initial_files: Vec<PathBuf>,
    ) -> Self {
        // Both plots draw colors from the same sequence.
        let palette = Palette::standard();
        let mut app = Self {
            roc: View::new(CurveKind::Roc, &palette, &config),
            pr: View::new(CurveKind::Pr, &palette, &config),
            current: config.start_plot,
            config,
            backend_thread_handle: Some(backend_thread_handle),
            request_tx,
            plotter: Plotter::new(),
            shortcuts_modal_open: false,
            event_queue: EventQueue::<Self>::new(),
            request_redraw: None,
        };
        for path in initial_files {
            app.event_queue.queue_event(Box::new(LoadCurve::new(path)));
        }
        app
    }

    fn view(&self, kind: CurveKind) -> &View {
        match kind {
            CurveKind::Roc => &self.roc,
            CurveKind::Pr => &self.pr,
        }
    }

    fn view_mut_inner(&mut self, kind: CurveKind) -> &mut View {
        match kind {
            CurveKind::Roc => &mut self.roc,
            CurveKind::Pr => &mut self.pr,
        }
    }

    pub(crate) fn surface(&self, kind: CurveKind) -> &PlotSurface {
        &self.view(kind).surface
    }

    pub(crate) fn surface_mut(&mut self, kind: CurveKind) -> &mut PlotSurface {
        &mut self.view_mut_inner(kind).surface
    }

    pub(crate) fn view_mut(&mut self, kind: CurveKind) -> (&mut PlotSurface, &mut Legend) {
        let view = self.view_mut_inner(kind);
        (&mut view.surface, &mut view.legend)
    }

    fn update_state(&mut self) {
        self.run_events();
        for kind in [CurveKind::Roc, CurveKind::Pr] {
            let (surface, legend) = self.view_mut(kind);
            let legend_changed = legend.try_update();
            if surface.take_redraw() || legend_changed {
                self.request_redraw();
            }
        }
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }

    fn open_files(&mut self) {
        log::debug!("open dialog to select curve files");
        let start_dir = self.config.open_path.clone();
        let handle = std::thread::spawn(move || {
            rfd::FileDialog::new()
                .set_directory(start_dir)
                .add_filter("Curves", &["roc", "pr", "ROC", "PR"])
                .add_filter("ROC curves", &["roc", "ROC"])
                .add_filter("PR curves", &["pr", "PR"])
                .pick_files()
        });
        let event = OpenFileRequested::new(Some(handle));
        self.event_queue.queue_event(Box::new(event));
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state();

        if self.request_redraw.take().is_some() {
            ctx.request_repaint();
        }
        // Keep polling while files are loading on the backend.
        if !self.event_queue.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        let mut should_quit = false;

        // Handle keyboard input.
        ctx.input(|i| {
            if i.key_pressed(egui::Key::F1) {
                self.shortcuts_modal_open = !self.shortcuts_modal_open;
            }
            if i.key_pressed(egui::Key::F3) {
                self.event_queue.queue_event(Box::new(SwitchPlot::new()));
            }
            if i.key_pressed(egui::Key::F10) {
                should_quit = true;
            }
        });
        // The dialog is opened outside of `ctx.input`, which holds a lock.
        if ctx.input(|i| i.key_pressed(egui::Key::O) && i.modifiers.ctrl) {
            self.open_files();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_shortcut_modal(ctx);
            self.menu(ui, ctx);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });

        let current = self.current;
        let requests = egui::SidePanel::right("legend")
            .min_width(280.0)
            .show(ctx, |ui| self.view_mut_inner(current).legend.render(ui))
            .inner;
        for request in requests {
            let event = SurfaceRequest::new(current, request);
            self.event_queue.queue_event(Box::new(event));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let view = match current {
                CurveKind::Roc => &self.roc,
                CurveKind::Pr => &self.pr,
            };
            self.plotter.render(&view.surface, ui);
        });

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(handle) = self.backend_thread_handle.take() {
            app_core::backend::request_stop(&self.request_tx, handle);
        }
    }
}

impl EguiApp {
    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open (Ctrl+O)").clicked() {
                    self.open_files();
                    ui.close_menu();
                }
                if ui.button("Purge detached curves").clicked() {
                    self.event_queue.queue_event(Box::new(PurgeDetached::new()));
                    ui.close_menu();
                }
                if ui.button("Quit (F10)").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Plot", |ui| {
                for kind in [CurveKind::Roc, CurveKind::Pr] {
                    let label = format!("{} curves", kind.short_name());
                    if ui.selectable_label(self.current == kind, label).clicked() && self.current != kind {
                        self.event_queue.queue_event(Box::new(SwitchPlot::new()));
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui.button("Clear").clicked() {
                    let event = SurfaceRequest::new(self.current, crate::notify::PanelRequest::Clear);
                    self.event_queue.queue_event(Box::new(event));
                    ui.close_menu();
                }
            });

            ui.toggle_value(&mut self.shortcuts_modal_open, "Help (F1)");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let registry = self.surface(self.current).registry();
            ui.label(format!(
                "{}: {} on plot, {} known",
                self.current.short_name(),
                registry.attached_count(),
                registry.len()
            ));
            if let Some(name) = self
                .plotter
                .hovered()
                .and_then(|id| registry.get(id))
                .map(|curve| curve.name())
            {
                ui.separator();
                ui.label(name);
            }
            if let Some(text) = self.plotter.status_text(self.surface(self.current).settings()) {
                ui.separator();
                ui.label(text);
            }
        });
    }

    fn render_shortcut_modal(&mut self, ctx: &egui::Context) {
        if self.shortcuts_modal_open
            && egui::Modal::new("shortcut_modal".into())
                .show(ctx, |ui| {
                    ui.heading("Keyboard Shortcuts");
                    ui.separator();
                    ui.label("CTRL + O = Open Curve Files");
                    ui.separator();
                    ui.label("F1 = Show Keyboard Shortcuts");
                    ui.separator();
                    ui.label("F3 = Switch Between ROC and PR");
                    ui.separator();
                    ui.label("F10 = Quit App");
                    ui.separator();
                    ui.label("Files ending in .roc go to the ROC plot, .pr to the PR plot.");
                })
                .should_close()
        {
            self.shortcuts_modal_open = false;
        };
    }
}
