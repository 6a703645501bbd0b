//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HWIRE_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use hyperwire_math::{GeometryError, PlaneAngles};
use hyperwire_render::ProjectionConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Projection parameters
    #[serde(default)]
    pub projection: ProjectionSettings,
    /// Which polytope to display, and at what size
    #[serde(default)]
    pub shape: ShapeSettings,
    /// Per-frame animation settings
    #[serde(default)]
    pub animation: AnimationSettings,
    /// Terminal viewport settings
    #[serde(default)]
    pub viewport: ViewportSettings,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionSettings::default(),
            shape: ShapeSettings::default(),
            animation: AnimationSettings::default(),
            viewport: ViewportSettings::default(),
            debug: DebugSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HWIRE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HWIRE_PROJECTION__CAMERA_4D_DISTANCE=8.0 -> projection.camera_4d_distance = 8.0
        figment = figment.merge(Env::prefixed("HWIRE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Projection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    /// Distance from the 4D viewer to the projection hyperplane
    pub camera_4d_distance: f32,
    /// Distance from the 3D viewer to the screen plane
    pub camera_3d_distance: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            camera_4d_distance: 5.0,
            camera_3d_distance: 5.0,
        }
    }
}

impl ProjectionSettings {
    /// Convert into the validated core type
    pub fn to_projection_config(&self) -> Result<ProjectionConfig, GeometryError> {
        ProjectionConfig::new(self.camera_4d_distance, self.camera_3d_distance)
    }
}

/// Which polytope to display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    /// One of "hypercube", "simplex", "sixteen-cell"
    pub primitive: String,
    /// Linear scale of the polytope
    pub size: f32,
    /// Starting position [x, y, z, w]
    pub position: [f32; 4],
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            primitive: "hypercube".to_string(),
            size: 2.0,
            position: [0.0, 0.0, 0.0, 0.0],
        }
    }
}

/// Per-frame animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Number of frames to run (0 = run until interrupted)
    pub frames: u32,
    /// Delay between frames in milliseconds
    pub frame_delay_ms: u64,
    /// Per-plane rotation increments per frame (radians)
    pub spin: PlaneAngles,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_delay_ms: 33,
            spin: PlaneAngles { xy: 0.02, zw: 0.015, ..PlaneAngles::ZERO },
        }
    }
}

/// Terminal viewport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Viewport width in character cells
    pub width: usize,
    /// Viewport height in character cells
    pub height: usize,
    /// World units to character-cell scale factor
    pub scale: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 96,
            height: 44,
            scale: 14.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log per-frame segment/skip statistics
    pub frame_stats: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            frame_stats: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
