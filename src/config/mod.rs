use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_MAX_VERTICES, DEFAULT_STROKE_WIDTH, MIN_MAX_VERTICES};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// A named swatch in the toolbar palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    /// sRGB components in 0..=1
    pub rgb: [f32; 3],
}

impl PaletteColor {
    fn new(name: &str, rgb: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            rgb,
        }
    }

    pub fn color(&self) -> Color {
        srgb_color(self.rgb)
    }
}

fn default_max_vertices() -> usize {
    DEFAULT_MAX_VERTICES
}

fn default_stroke_width() -> f32 {
    DEFAULT_STROKE_WIDTH
}

fn default_stroke_color() -> [f32; 3] {
    [1.0, 0.0, 0.0]
}

fn default_palette() -> Vec<PaletteColor> {
    vec![
        PaletteColor::new("Red", [1.0, 0.0, 0.0]),
        PaletteColor::new("Blue", [0.0, 0.0, 1.0]),
        PaletteColor::new("Green", [0.0, 0.8, 0.0]),
        PaletteColor::new("Yellow", [1.0, 1.0, 0.0]),
        PaletteColor::new("Black", [0.0, 0.0, 0.0]),
        PaletteColor::new("White", [1.0, 1.0, 1.0]),
        PaletteColor::new("Orange", [1.0, 0.5, 0.0]),
        PaletteColor::new("Purple", [0.5, 0.0, 0.5]),
    ]
}

/// Sketch configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchConfigData {
    /// Committed vertices at which a polyline finalizes on its own
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,

    /// Gizmo line width in pixels
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,

    /// sRGB color for new polylines (last palette pick is remembered)
    #[serde(default = "default_stroke_color")]
    pub stroke_color: [f32; 3],

    #[serde(default = "default_palette")]
    pub palette: Vec<PaletteColor>,

    /// Maximum undo depth, unbounded when absent
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for SketchConfigData {
    fn default() -> Self {
        Self {
            max_vertices: default_max_vertices(),
            stroke_width: default_stroke_width(),
            stroke_color: default_stroke_color(),
            palette: default_palette(),
            history_limit: None,
        }
    }
}

impl SketchConfigData {
    /// Vertex cap, never below [`MIN_MAX_VERTICES`]
    pub fn max_vertices(&self) -> usize {
        self.max_vertices.max(MIN_MAX_VERTICES)
    }

    pub fn stroke_color(&self) -> Color {
        srgb_color(self.stroke_color)
    }
}

pub fn srgb_color(rgb: [f32; 3]) -> Color {
    Color::srgb(rgb[0], rgb[1], rgb[2])
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct SketchConfig {
    /// The persisted configuration data
    pub data: SketchConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            data: SketchConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to remember the stroke color picked in the toolbar
#[derive(Message)]
pub struct SetStrokeColorRequest {
    pub rgb: [f32; 3],
}

/// Parse config JSON. Returns the reason on failure so the caller can fall
/// back to defaults and tell the user.
fn parse_config(json: &str) -> Result<SketchConfigData, String> {
    serde_json::from_str(json).map_err(|e| format!("Configuration file was corrupted: {}", e))
}

/// Load configuration from disk. The second value is set if the file existed
/// but could not be used.
fn load_config(config_path: &Path) -> (SketchConfigData, Option<String>) {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return (SketchConfigData::default(), None);
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => match parse_config(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", config_path);
                (data, None)
            }
            Err(reason) => {
                warn!("Failed to parse config file: {}", reason);
                (SketchConfigData::default(), Some(reason))
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                SketchConfigData::default(),
                Some(format!("Could not read configuration file: {}", e)),
            )
        }
    }
}

/// Save configuration to disk
fn save_config(config: &SketchConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<SketchConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    if let Err(e) = crate::paths::ensure_directories() {
        warn!("Failed to create config directories: {}", e);
    }

    let (data, reset_reason) = load_config(&config.config_path);
    config.data = data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<SketchConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to remember the last picked stroke color
fn set_stroke_color_system(
    mut events: MessageReader<SetStrokeColorRequest>,
    mut config: ResMut<SketchConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.stroke_color != event.rgb {
            config.data.stroke_color = event.rgb;
            config.dirty = true;
            save_events.write(SaveConfigRequest);
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SketchConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<SetStrokeColorRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    set_stroke_color_system.run_if(on_message::<SetStrokeColorRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
