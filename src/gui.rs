//! Native GUI using egui
//!
//! Column checkboxes on the left, the three chart panels stacked in the centre,
//! mouse point readout at the bottom. All state lives in the controller; this
//! module only forwards input and paints the panel scenes.

use eframe::egui;
use egui::{Color32, RichText};
use egui_plot::{HLine, Legend, Line, Plot, PlotBounds, PlotPoints, PlotTransform, Points, VLine};
use tracing::{error, info};

use crate::config::Config;
use crate::controller::SelectionController;
use crate::crosshair::ViewTransform;
use crate::error::MapError;
use crate::panel::Panel;
use crate::render::PanelScene;

const CROSSHAIR_COLOR: Color32 = Color32::from_rgb(200, 200, 100);
const PANEL_MARGIN: f32 = 4.0;

/// Run the native GUI viewer
pub fn run_viewer(config: Config, controller: SelectionController) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Panel Plotter"),
        ..Default::default()
    };

    eframe::run_native(
        "Panel Plotter",
        options,
        Box::new(|cc| Ok(Box::new(PlotterApp::new(cc, config, controller)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

/// egui_plot's transform seen through the crosshair seam
struct PlotView<'a>(&'a PlotTransform);

impl ViewTransform for PlotView<'_> {
    fn screen_to_data(&self, screen: [f32; 2]) -> Result<[f64; 2], MapError> {
        let pos = egui::pos2(screen[0], screen[1]);
        if !self.0.frame().contains(pos) {
            return Err(MapError::OutsideScene);
        }
        let value = self.0.value_from_position(pos);
        Ok([value.x, value.y])
    }
}

struct PlotterApp {
    config: Config,
    controller: SelectionController,
    status: String,
}

impl PlotterApp {
    fn new(cc: &eframe::CreationContext<'_>, config: Config, controller: SelectionController) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            config,
            controller,
            status: "No data loaded".to_string(),
        }
    }

    fn load_data(&mut self) {
        info!("Load requested for {:?}", self.config.dataset_path);
        self.status = match self.controller.load_data() {
            Ok(true) => match self.controller.dataset() {
                Some(data) => format!(
                    "Loaded {} rows, {} columns at {}",
                    data.len(),
                    self.controller.checkboxes().len(),
                    data.loaded_at().format("%H:%M:%S")
                ),
                None => String::new(),
            },
            // Missing file: stay in the pre-load state
            Ok(false) => self.status.clone(),
            Err(e) => {
                error!("Failed to load dataset: {}", e);
                format!("Load failed: {}", e)
            }
        };
    }

    fn columns_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Columns");
        ui.separator();

        if ui.button("Load data").clicked() {
            self.load_data();
        }
        ui.label(self.status.as_str());
        ui.separator();

        let mut toggled: Vec<(String, bool)> = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for cb in self.controller.checkboxes() {
                let mut checked = cb.checked;
                let color = match self.controller.colors().get(cb.column()) {
                    Some([r, g, b]) => Color32::from_rgb(r, g, b),
                    None => Color32::DARK_GRAY,
                };
                ui.horizontal(|ui| {
                    ui.colored_label(color, "●");
                    if ui.checkbox(&mut checked, cb.label.as_str()).changed() {
                        toggled.push((cb.id.clone(), checked));
                    }
                });
            }
        });

        for (id, checked) in toggled {
            self.controller.set_checked(&id, checked);
            self.controller.on_checkbox_changed();
        }
    }

    fn chart_panel(&mut self, ui: &mut egui::Ui, panel: Panel, height: f32) {
        let reset = self.controller.scene_mut(panel).take_reset_bounds();
        let scene = self.controller.scene(panel);
        let focused = self.controller.focused() == panel;

        let [r, g, b] = panel.tint();
        let frame = egui::Frame::none()
            .fill(Color32::from_rgb(r, g, b))
            .inner_margin(PANEL_MARGIN)
            .stroke(if focused {
                egui::Stroke::new(2.0, Color32::WHITE)
            } else {
                egui::Stroke::NONE
            });

        let response = frame
            .show(ui, |ui| {
                let mut plot = Plot::new(("chart_panel", panel.index()))
                    .height(height - 2.0 * PANEL_MARGIN)
                    .show_grid(scene.show_grid)
                    .allow_double_click_reset(false);
                if scene.show_legend {
                    plot = plot.legend(Legend::default());
                }
                if let Some(label) = scene.x_label {
                    plot = plot.x_axis_label(label);
                }

                plot.show(ui, |plot_ui| paint_scene(plot_ui, scene, reset))
            })
            .inner;

        if response.response.clicked() {
            self.controller.on_panel_clicked(panel);
        }
        if let Some(pos) = response.response.hover_pos() {
            self.controller
                .on_pointer_move(panel, [pos.x, pos.y], &PlotView(&response.transform));
        }
    }
}

fn paint_scene(plot_ui: &mut egui_plot::PlotUi, scene: &PanelScene, reset: bool) {
    if reset {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [scene.x_range[0], scene.y_range[0]],
            [scene.x_range[1], scene.y_range[1]],
        ));
    }

    for series in &scene.series {
        let [r, g, b] = series.color;
        let color = Color32::from_rgb(r, g, b);
        plot_ui.line(
            Line::new(PlotPoints::from(series.points.clone()))
                .color(color)
                .name(&series.name),
        );
        plot_ui.points(
            Points::new(PlotPoints::from(series.points.clone()))
                .radius(series.marker_radius)
                .color(color)
                .name(&series.name),
        );
    }

    if let Some(crosshair) = scene.crosshair {
        plot_ui.vline(VLine::new(crosshair.x).color(CROSSHAIR_COLOR));
        plot_ui.hline(HLine::new(crosshair.y).color(CROSSHAIR_COLOR));
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("columns_panel")
            .min_width(200.0)
            .show(ctx, |ui| self.columns_panel(ui));

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Mouse Point:");
                ui.label(RichText::new(self.controller.status_readout()).color(Color32::RED));
                ui.separator();
                let focused = self.controller.focused();
                let plotted = self.controller.remembered(focused).map_or(0, |s| s.len());
                ui.label(format!("Focused: {} ({} series)", focused, plotted));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let spacing = ui.spacing().item_spacing.y;
            let height = ((ui.available_height() - 2.0 * spacing) / 3.0).max(60.0);
            let enabled = self.controller.panels_enabled();

            for panel in Panel::ALL {
                ui.add_enabled_ui(enabled, |ui| self.chart_panel(ui, panel, height));
            }
        });
    }
}
