//! Series renderer
//!
//! egui is immediate mode, so "drawing" a panel means rebuilding its retained
//! `PanelScene`. The GUI paints whatever scene each panel currently holds.

use rand::Rng;
use tracing::debug;

use crate::color::{ColorAllocator, Rgb};
use crate::crosshair::Crosshair;
use crate::dataset::Series;

pub const MARKER_RADIUS: f32 = 1.0;
pub const X_AXIS_LABEL: &str = "Frames";

/// One line + marker series as it will be painted
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Rgb,
    pub marker_radius: f32,
}

/// Retained content of one chart panel
#[derive(Debug, Clone, Default)]
pub struct PanelScene {
    pub series: Vec<DrawnSeries>,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    pub show_grid: bool,
    pub show_legend: bool,
    pub x_label: Option<&'static str>,
    pub crosshair: Option<Crosshair>,
    reset_bounds: bool,
}

impl PanelScene {
    /// Whether the plot bounds should be snapped back to the axis ranges.
    /// Reading the flag clears it.
    pub fn take_reset_bounds(&mut self) -> bool {
        std::mem::take(&mut self.reset_bounds)
    }
}

/// Replace the scene content with `selection`, axes fixed to `[0, x_extent] x [0, y_extent]`
pub fn render<R: Rng>(
    scene: &mut PanelScene,
    selection: &[Series],
    x_extent: f64,
    y_extent: f64,
    colors: &mut ColorAllocator<R>,
) {
    clear(scene);

    scene.x_range = [0.0, x_extent];
    scene.y_range = [0.0, y_extent];
    scene.show_grid = true;
    scene.show_legend = true;
    scene.x_label = Some(X_AXIS_LABEL);
    scene.reset_bounds = true;

    for series in selection {
        scene.series.push(DrawnSeries {
            name: series.name.clone(),
            points: aligned_points(&series.values),
            color: colors.color_for(&series.name),
            marker_radius: MARKER_RADIUS,
        });
    }

    scene.crosshair = Some(Crosshair::default());
    debug!(
        "Rendered {} series on [0, {}] x [0, {}]",
        scene.series.len(),
        x_extent,
        y_extent
    );
}

/// Remove every series and the crosshair. Axis ranges are kept.
pub fn clear(scene: &mut PanelScene) {
    scene.series.clear();
    scene.crosshair = None;
}

/// Duplicate the first value so the line starts at x = 0
fn aligned_points(values: &[f64]) -> Vec<[f64; 2]> {
    let Some(first) = values.first() else {
        return Vec::new();
    };
    std::iter::once(*first)
        .chain(values.iter().copied())
        .enumerate()
        .map(|(x, y)| [x as f64, y])
        .collect()
}
