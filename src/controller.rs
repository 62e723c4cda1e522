//! Selection controller
//!
//! Owns the dataset, the checkbox set, focus state, per-panel remembered
//! selections and the panel scenes. The GUI translates egui input into calls on
//! this type; nothing here knows about egui.

use std::collections::{HashMap, HashSet};
use tracing::{debug, info, trace, warn};

use crate::color::ColorAllocator;
use crate::crosshair::{self, MousePoint, ViewTransform};
use crate::dataset::{Dataset, DatasetSource, Series};
use crate::error::LoadError;
use crate::focus::FocusModel;
use crate::panel::Panel;
use crate::render::{self, PanelScene};

const CHECKBOX_PREFIX: &str = "check_box_";

/// Series last drawn on a panel
pub type Selection = Vec<Series>;

/// One checkbox per dataset column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

impl Checkbox {
    fn for_column(column: &str) -> Self {
        Self {
            id: format!("{CHECKBOX_PREFIX}{column}"),
            label: column.to_string(),
            checked: false,
        }
    }

    /// Column name recovered from the identifier
    pub fn column(&self) -> &str {
        self.id.strip_prefix(CHECKBOX_PREFIX).unwrap_or(&self.id)
    }
}

pub struct SelectionController {
    source: DatasetSource,
    y_extent: f64,
    dataset: Option<Dataset>,
    checkboxes: Vec<Checkbox>,
    focus: FocusModel,
    remembered: HashMap<Panel, Selection>,
    scenes: [PanelScene; 3],
    colors: ColorAllocator,
    panels_enabled: bool,
    x_extent: f64,
    mouse_point: MousePoint,
}

impl SelectionController {
    pub fn new(source: DatasetSource, y_extent: f64, colors: ColorAllocator) -> Self {
        Self {
            source,
            y_extent,
            dataset: None,
            checkboxes: Vec::new(),
            focus: FocusModel::new(),
            remembered: HashMap::new(),
            scenes: Default::default(),
            colors,
            panels_enabled: false,
            x_extent: 0.0,
            mouse_point: MousePoint::default(),
        }
    }

    /// Read the dataset and rebuild the checkbox set.
    ///
    /// Returns `Ok(false)` without touching any state when the file is absent.
    pub fn load_data(&mut self) -> Result<bool, LoadError> {
        let Some(dataset) = Dataset::load(&self.source)? else {
            warn!("Dataset {:?} does not exist, load skipped", self.source.path);
            return Ok(false);
        };

        for scene in self.scenes.iter_mut() {
            render::clear(scene);
        }

        self.checkboxes = dataset.columns().map(Checkbox::for_column).collect();
        self.x_extent = dataset.len() as f64;
        self.dataset = Some(dataset);
        self.panels_enabled = true;

        info!(
            "Dataset ready: {} columns, x extent {}, y extent {}",
            self.checkboxes.len(),
            self.x_extent,
            self.y_extent
        );
        Ok(true)
    }

    /// Re-scan every checkbox and redraw the focused panel
    pub fn on_checkbox_changed(&mut self) {
        let names: Vec<String> = self
            .checkboxes
            .iter()
            .filter(|cb| cb.checked)
            .map(|cb| cb.column().to_string())
            .collect();
        let selection = self.resolve(&names);
        let panel = self.focus.current();

        if self.focus.is_transition() {
            // Mid-resync: show it, but leave the remembered selections alone
            self.draw(panel, &selection);
        } else if selection.is_empty() {
            debug!("Nothing selected, clearing {}", panel);
            render::clear(&mut self.scenes[panel.index()]);
            self.remembered.insert(panel, Selection::new());
        } else {
            self.draw(panel, &selection);
            self.remembered.insert(panel, selection);
        }
    }

    /// Sync the checkboxes to the focused panel's remembered selection
    pub fn update_graphs_checkboxes(&mut self) {
        for cb in self.checkboxes.iter_mut() {
            cb.checked = false;
        }

        let panel = self.focus.current();
        match self.remembered.get(&panel) {
            Some(selection) => {
                let names: HashSet<&str> = selection.iter().map(|s| s.name.as_str()).collect();
                for cb in self.checkboxes.iter_mut() {
                    cb.checked = names.contains(cb.column());
                }
                // Re-clicking the focused panel must leave its scene alone
                if self.focus.is_transition() || !self.shows_checked(panel) {
                    self.on_checkbox_changed();
                }
            }
            None => {
                debug!("{} has no selection yet, initializing", panel);
                self.draw(panel, &[]);
                self.remembered.insert(panel, Selection::new());
            }
        }

        self.focus.settle();
    }

    pub fn on_panel_clicked(&mut self, panel: Panel) {
        if !self.panels_enabled {
            trace!("Ignoring click on disabled {}", panel);
            return;
        }
        if panel != self.focus.current() {
            info!("Focus moved from {} to {}", self.focus.current(), panel);
        }
        self.focus.focus(panel);
        self.update_graphs_checkboxes();
    }

    /// Track the pointer over `panel`. Moves over unfocused panels are ignored.
    pub fn on_pointer_move(
        &mut self,
        panel: Panel,
        screen: [f32; 2],
        transform: &dyn ViewTransform,
    ) -> Option<MousePoint> {
        if !self.panels_enabled || panel != self.focus.current() {
            return None;
        }

        let scene = &mut self.scenes[panel.index()];
        match crosshair::on_pointer_move(scene, screen, transform, self.x_extent, self.y_extent) {
            Ok(point) => {
                if point.in_range(self.x_extent, self.y_extent) {
                    self.mouse_point = point;
                }
                Some(point)
            }
            Err(e) => {
                trace!("Pointer on {} not mapped: {}", panel, e);
                None
            }
        }
    }

    /// Toggle a checkbox by id. The caller follows up with `on_checkbox_changed`.
    pub fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(cb) = self.checkboxes.iter_mut().find(|cb| cb.id == id) {
            cb.checked = checked;
        }
    }

    pub fn checkboxes(&self) -> &[Checkbox] {
        &self.checkboxes
    }

    pub fn scene(&self, panel: Panel) -> &PanelScene {
        &self.scenes[panel.index()]
    }

    pub fn scene_mut(&mut self, panel: Panel) -> &mut PanelScene {
        &mut self.scenes[panel.index()]
    }

    pub fn remembered(&self, panel: Panel) -> Option<&Selection> {
        self.remembered.get(&panel)
    }

    pub fn focused(&self) -> Panel {
        self.focus.current()
    }

    pub fn panels_enabled(&self) -> bool {
        self.panels_enabled
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn colors(&self) -> &ColorAllocator {
        &self.colors
    }

    pub fn status_readout(&self) -> String {
        self.mouse_point.readout()
    }

    /// Whether `panel` already displays exactly the checked series
    fn shows_checked(&self, panel: Panel) -> bool {
        let scene = &self.scenes[panel.index()];
        let checked = self
            .checkboxes
            .iter()
            .filter(|cb| cb.checked)
            .map(|cb| cb.column());
        scene.crosshair.is_some() && scene.series.iter().map(|s| s.name.as_str()).eq(checked)
    }

    fn draw(&mut self, panel: Panel, selection: &[Series]) {
        render::render(
            &mut self.scenes[panel.index()],
            selection,
            self.x_extent,
            self.y_extent,
            &mut self.colors,
        );
    }

    /// Look up series by name, skipping names the current dataset lacks
    fn resolve(&self, names: &[String]) -> Selection {
        let Some(dataset) = &self.dataset else {
            return Selection::new();
        };
        names
            .iter()
            .filter_map(|name| {
                let series = dataset.series(name);
                if series.is_none() {
                    debug!("Series '{}' is not in the current dataset", name);
                }
                series.cloned()
            })
            .collect()
    }
}
