//! Interactive 2D solar-system viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation
//! [`Session`] and implements [`eframe::App`] to render and control it
//! through an egui UI.

use crate::settings::{Settings, ViewSettings};
use eframe::App;
use glam::DVec2;
use log::{error, info};
use sim_core::{Config, Session, loader, scale};
use std::path::{Path, PathBuf};

/// Simulated seconds per wall-clock second for a speed slider value.
///
/// The slider spans `[-10, 10]`, so the speed ranges from `e^-5` to
/// `e^15`.
pub fn speed_to_real(slider: f64) -> f64 {
    (5.0 + slider).exp()
}

/// Maps a body color name to an egui color. Unknown names are white.
pub fn body_color(name: &str) -> egui::Color32 {
    use egui::Color32;
    match name {
        "red" => Color32::RED,
        "green" => Color32::GREEN,
        "blue" => Color32::BLUE,
        "yellow" => Color32::YELLOW,
        "orange" => Color32::from_rgb(255, 165, 0),
        "brown" => Color32::BROWN,
        "purple" => Color32::PURPLE,
        "cyan" => Color32::from_rgb(0, 255, 255),
        "magenta" => Color32::from_rgb(255, 0, 255),
        "gray" | "grey" => Color32::GRAY,
        "black" => Color32::BLACK,
        _ => Color32::WHITE,
    }
}

/// Converts a simulation-space position to screen-space.
///
/// Positions are scaled by `scale` pixels per unit around the center of
/// `rect`. The y-axis is flipped so that positive y goes up.
pub fn world_to_screen(p: DVec2, scale: f64, rect: egui::Rect) -> egui::Pos2 {
    let center = rect.center();
    egui::pos2(
        center.x + (p.x * scale) as f32,
        center.y - (p.y * scale) as f32,
    )
}

/// Main application state for the interactive viewer.
///
/// ### Fields
/// - `session` - Loaded system, or `None` until a file loads successfully.
/// - `physics` - Physics configuration handed to every new session.
/// - `view` - Window and directory settings.
/// - `files` - Initial-condition files found in `view.systems_dir`.
/// - `selected` - File the Load button reads.
/// - `running` - Whether the simulation advances each frame.
/// - `speed` - Speed slider position, see [`speed_to_real`].
/// - `last_frame_time` - egui time of the previous frame.
/// - `needs_rescale` - Fit the scale to the drawing area on the next frame.
/// - `status` - Last load error, shown in the status bar.
pub struct Viewer {
    session: Option<Session>,
    physics: Config,
    view: ViewSettings,

    files: Vec<PathBuf>,
    selected: Option<PathBuf>,

    running: bool,
    speed: f64,

    last_frame_time: Option<f64>,
    needs_rescale: bool,
    status: Option<String>,
}

impl Viewer {
    /// Creates a viewer, lists the systems directory and loads `file`
    /// (or the first listed file when `file` is `None`).
    pub fn new(settings: Settings, file: Option<PathBuf>) -> Self {
        let mut viewer = Self {
            session: None,
            physics: settings.physics,
            speed: settings.view.speed,
            view: settings.view,
            files: Vec::new(),
            selected: None,
            running: true,
            last_frame_time: None,
            needs_rescale: false,
            status: None,
        };

        viewer.refresh_files();
        viewer.selected = file.or_else(|| viewer.files.first().cloned());
        viewer.load_selected();
        viewer
    }

    /// Re-reads the list of files in the systems directory.
    fn refresh_files(&mut self) {
        match loader::list_systems(&self.view.systems_dir) {
            Ok(files) => self.files = files,
            Err(e) => {
                error!("cannot list {}: {e}", self.view.systems_dir.display());
                self.files.clear();
                self.status = Some(format!("{}: {e}", self.view.systems_dir.display()));
            }
        }
    }

    /// Loads the selected file into a fresh session, resetting the clock.
    ///
    /// A failed load keeps the previous session and reports the error in
    /// the status bar.
    fn load_selected(&mut self) {
        let Some(path) = self.selected.clone() else {
            return;
        };

        match Session::load(&path, self.physics) {
            Ok(session) => {
                info!("loaded {}", path.display());
                self.session = Some(session);
                self.needs_rescale = true;
                self.status = None;
            }
            Err(e) => {
                error!("failed to load {}: {e}", path.display());
                self.status = Some(format!("{}: {e}", path.display()));
            }
        }
    }

    /// Advances the simulation by the wall-clock time since the previous
    /// frame, multiplied by the current speed.
    fn advance(&mut self, now: f64) {
        let wall_dt = self.last_frame_time.map_or(0.0, |last| now - last);
        self.last_frame_time = Some(now);

        if !self.running {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.step(wall_dt * speed_to_real(self.speed));
        }
    }

    fn timer_text(&self) -> String {
        let t = self.session.as_ref().map_or(0.0, Session::time);
        format!("{} seconds passed", t as i64)
    }

    fn file_label(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }

    /// Builds the top panel (run controls, speed slider, timer).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("▶ Play").clicked() {
                    self.running = true;
                }
                if ui.button("⏸ Pause").clicked() {
                    self.running = false;
                }
                if ui.button("Load a file").clicked() {
                    self.load_selected();
                }
                if ui.button("Fit").clicked() {
                    self.needs_rescale = true;
                }
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.speed, -10.0..=10.0).text("Simulation speed"));

                ui.separator();
                ui.label(self.timer_text());
            });
        });
    }

    /// Builds the bottom status bar (file, body count, energy, errors).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(msg) = &self.status {
                    ui.colored_label(egui::Color32::LIGHT_RED, msg);
                    ui.separator();
                }
                if let Some(session) = &self.session {
                    if let Some(src) = session.source() {
                        ui.label(Self::file_label(src));
                    }
                    ui.label(format!("bodies = {}", session.bodies().len()));
                    if !session.skipped().is_empty() {
                        ui.label(format!("skipped lines = {}", session.skipped().len()));
                    }
                    ui.label(format!("scale = {:.3e} px/unit", session.scale()));
                    ui.label(format!("KE = {:.4e}", session.kinetic_energy()));
                    ui.label(format!("PE = {:.4e}", session.potential_energy()));
                    ui.label(format!("energy = {:.4e}", session.total_energy()));
                }
            });
        });
    }

    /// Builds the left panel listing the available initial-condition files.
    fn ui_files_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("files_panel")
            .resizable(true)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.heading("Systems");
                if ui.button("Refresh").clicked() {
                    self.refresh_files();
                }
                ui.separator();

                let mut clicked = None;
                for path in &self.files {
                    let is_selected = self.selected.as_deref() == Some(path.as_path());
                    if ui
                        .selectable_label(is_selected, Self::file_label(path))
                        .clicked()
                    {
                        clicked = Some(path.clone());
                    }
                }
                if clicked.is_some() {
                    self.selected = clicked;
                }
            });
    }

    /// Builds the central panel where bodies are drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let painter = ui.painter_at(rect);

                let Some(session) = self.session.as_mut() else {
                    return;
                };

                if self.needs_rescale {
                    session.rescale(scale::target_extent(
                        rect.width() as f64,
                        rect.height() as f64,
                    ));
                    self.needs_rescale = false;
                }

                let px_per_unit = session.scale();
                for body in session.bodies() {
                    let p = world_to_screen(body.pos, px_per_unit, rect);
                    let r = (body.radius as f32).max(1.0);
                    painter.circle_filled(p, r, body_color(&body.color));
                }
            });
    }
}

impl App for Viewer {
    /// eframe callback: advances the simulation, then builds all panels.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.advance(now);

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_files_panel(ctx);
        self.ui_central_panel(ctx);

        ctx.request_repaint_after(std::time::Duration::from_secs_f64(self.view.frame_period));
    }
}
