//! Interactive ambient particle field viewer built with eframe/egui.
//!
//! This module defines [`FieldView`], which owns the simulation state
//! (field, configuration, pointer) and implements [`eframe::App`] to
//! render and control the field through an egui UI.

use eframe::App;
use field_core::{
    config::Config,
    particle::ParticleField,
    phases,
    render::{self, RenderFrame},
    types::Extent,
};
use glam::Vec2;

/// Glow tone of the field: warm yellow, alpha supplied per dot/link.
fn glow(alpha: f32) -> egui::Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(255, 204, 68, a)
}

/// Near-black backdrop the glow reads against.
const BACKDROP: egui::Color32 = egui::Color32::from_rgb(10, 10, 14);

/// Width of connection lines.
const LINK_WIDTH: f32 = 0.5;

/// Main application state for the interactive viewer.
///
/// [`FieldView`] glues together:
/// - The simulation core: [`ParticleField`], [`Config`].
/// - The two inbound ports of the field: pointer position (central panel
///   hover) and viewport size (central panel rect).
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The per-frame update is:
/// 1. Detect a resize of the canvas rect; respawn the field if it changed.
/// 2. Snapshot the pointer position for this frame.
/// 3. If `running`, advance the simulation one step.
/// 4. Build the frame geometry and paint it.
pub struct FieldView {
    field: ParticleField,
    cfg: Config,

    rng: rand::rngs::ThreadRng,

    /// Extent the current field was spawned for.
    extent: Extent,
    /// Pointer position in field coordinates, if inside the canvas.
    pointer: Option<Vec2>,

    running: bool,
    /// Link count of the last painted frame (for the status bar).
    last_link_count: usize,
}

impl FieldView {
    /// Creates a new viewer with a default configuration.
    ///
    /// The field starts at a zero extent and is respawned on the first
    /// frame, once the real canvas size is known. The animation starts
    /// running immediately.
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let cfg = Config::default();
        let extent = Extent::new(0.0, 0.0);
        let field = ParticleField::spawn(extent, &cfg, &mut rng);

        Self {
            field,
            cfg,
            rng,
            extent,
            pointer: None,
            running: true,
            last_link_count: 0,
        }
    }

    /// Discards the field and spawns a fresh one for the given extent.
    ///
    /// This is the resize path: the whole set is rebuilt at the new
    /// dimensions, per the session lifecycle of the field.
    fn respawn(&mut self, extent: Extent) {
        self.extent = extent;
        self.field = ParticleField::spawn(extent, &self.cfg, &mut self.rng);
        self.last_link_count = 0;
    }

    /// Advances the simulation by a single frame.
    fn step_once(&mut self) {
        phases::advance(&mut self.field, self.extent, self.pointer, &self.cfg);
    }

    /// Converts a field-space position to screen-space.
    ///
    /// Field coordinates are the canvas-local pixel coordinates, so this
    /// is a pure offset by the canvas origin.
    fn field_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
    }

    /// Converts a screen-space position back to field-space.
    ///
    /// Inverse of [`FieldView::field_to_screen`].
    fn screen_to_field(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, respawn).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.step_once();
                }

                if ui.button("Respawn").clicked() {
                    self.respawn(self.extent);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("particles:");
                    ui.add(
                        egui::DragValue::new(&mut self.cfg.count)
                            .range(0..=2000)
                            .speed(1.0),
                    );
                });
            });
        });
    }

    /// Builds the bottom status bar (counts and pointer position).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.pointer {
                    Some(p) => ui.label(format!("pointer = ({:.0}, {:.0})", p.x, p.y)),
                    None => ui.label("pointer = outside"),
                };
                ui.separator();
                ui.label(format!("links = {}", self.last_link_count));
                ui.label(format!("particles = {}", self.field.len()));
            });
        });
    }

    /// Builds the right-hand configuration panel for field parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Pointer attraction");
                Self::labeled_drag_f32(
                    ui,
                    "attraction_radius:",
                    &mut self.cfg.attraction_radius,
                    0.0..=1000.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "attraction_scale:",
                    &mut self.cfg.attraction_scale,
                    1000.0..=1_000_000.0,
                    500.0,
                );
                Self::labeled_drag_f32(ui, "damping:", &mut self.cfg.damping, 0.9..=1.0, 0.0001);

                ui.separator();
                ui.label("Pulse");
                Self::labeled_drag_f32(
                    ui,
                    "pulse_step:",
                    &mut self.cfg.pulse_step,
                    0.0..=0.01,
                    0.0001,
                );
                Self::labeled_drag_f32(
                    ui,
                    "pulse_band:",
                    &mut self.cfg.pulse_band,
                    0.0..=0.5,
                    0.01,
                );

                ui.separator();
                ui.label("Proximity glow");
                Self::labeled_drag_f32(
                    ui,
                    "proximity_radius:",
                    &mut self.cfg.proximity_radius,
                    0.0..=500.0,
                    1.0,
                );

                ui.separator();
                ui.label("Connections");
                Self::labeled_drag_f32(
                    ui,
                    "connection_radius:",
                    &mut self.cfg.connection_radius,
                    0.0..=300.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "connection_alpha:",
                    &mut self.cfg.connection_alpha,
                    0.0..=1.0,
                    0.01,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                }
            });
    }

    /// Paints one frame of dots and links onto the canvas painter.
    ///
    /// Links go first so dots sit on top of their connections.
    fn paint_frame(&self, painter: &egui::Painter, rect: egui::Rect, frame: &RenderFrame) {
        for link in &frame.links {
            painter.line_segment(
                [
                    self.field_to_screen(link.a, rect),
                    self.field_to_screen(link.b, rect),
                ],
                egui::Stroke::new(LINK_WIDTH, glow(link.alpha)),
            );
        }

        for dot in &frame.dots {
            painter.circle_filled(self.field_to_screen(dot.pos, rect), dot.radius, glow(dot.alpha));
        }
    }

    /// Builds the central canvas where the field is simulated and drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKDROP))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                // Resize port: a changed canvas rect discards the field and
                // respawns it at the new dimensions. The old field never
                // renders against the new rect within the same frame.
                let extent = Extent::new(rect.width(), rect.height());
                if extent != self.extent || self.field.len() != self.cfg.count {
                    self.respawn(extent);
                }

                // Pointer port: one snapshot per frame, None outside the canvas.
                self.pointer = response.hover_pos().map(|p| self.screen_to_field(p, rect));

                // Degenerate canvas: skip the frame's work entirely.
                if extent.is_empty() {
                    return;
                }

                if self.running {
                    self.step_once();
                }

                let frame = render::build_frame(&self.field, self.pointer, &self.cfg);
                self.last_link_count = frame.links.len();
                self.paint_frame(&painter, rect, &frame);

                if self.running {
                    ctx.request_repaint();
                }
            });
    }
}

impl App for FieldView {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
