//! Configuration for the qcat binary.
//!
//! Sources, highest precedence first:
//! 1. Command-line flags
//! 2. Environment variables (`QCAT_` prefix)
//! 3. YAML configuration file
//! 4. Default values (θ = π/2, φ = π/4, scale 0.15, terminal renderer)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use qcat_scene::geometry::DEFAULT_SCALE;
use qcat_scene::mesh::{DEFAULT_RESOLUTION, MAX_RESOLUTION};
use qcat_scene::render::{MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use qcat_scene::{MapperConfig, SceneStyle};
use qcat_sim::RotationParameters;
use tracing::warn;

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QcatConfig {
    /// Gate angles.
    pub rotation: RotationParameters,

    /// Bloch mapping options
    pub mapper: MapperConfig,

    /// Decorative solid
    pub solid: SolidConfig,

    /// Sphere mesh and presentation
    pub scene: SceneConfig,

    /// Renderer selection and view
    pub render: RenderConfig,
}

/// Decorative solid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidConfig {
    /// Scale factor applied to every part offset
    #[serde(default = "default_scale")]
    pub scale: f64,
}

/// Scene settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Samples per parameter of the sphere grid
    #[serde(default = "default_mesh_resolution")]
    pub mesh_resolution: usize,

    #[serde(flatten)]
    pub style: SceneStyle,
}

/// Which renderer draws the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RendererKind {
    /// Character-cell projection on stdout.
    #[default]
    Terminal,
    /// JSON scene document.
    Json,
}

impl FromStr for RendererKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "term" | "tty" => Ok(RendererKind::Terminal),
            "json" => Ok(RendererKind::Json),
            other => Err(format!(
                "unknown renderer '{other}' (expected terminal or json)"
            )),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererKind::Terminal => f.write_str("terminal"),
            RendererKind::Json => f.write_str("json"),
        }
    }
}

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub renderer: RendererKind,

    /// Output file for the JSON renderer; stdout if absent
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Camera azimuth in degrees
    #[serde(default = "default_azimuth")]
    pub azimuth_deg: f64,

    /// Camera elevation in degrees
    #[serde(default = "default_elevation")]
    pub elevation_deg: f64,

    /// Terminal grid width in characters
    #[serde(default = "default_width")]
    pub width: usize,

    /// Terminal grid height in characters
    #[serde(default = "default_height")]
    pub height: usize,

    /// Colorize terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Wait for Enter after drawing
    #[serde(default)]
    pub hold: bool,
}

/// Largest accepted solid scale; the sphere itself spans 1.
const MAX_SCALE: f64 = 100.0;

// Default value functions
fn default_scale() -> f64 {
    DEFAULT_SCALE
}

fn default_mesh_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_azimuth() -> f64 {
    -60.0
}

fn default_elevation() -> f64 {
    30.0
}

fn default_width() -> usize {
    72
}

fn default_height() -> usize {
    36
}

fn default_true() -> bool {
    true
}

impl Default for SolidConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mesh_resolution: default_mesh_resolution(),
            style: SceneStyle::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            renderer: RendererKind::default(),
            output: None,
            azimuth_deg: default_azimuth(),
            elevation_deg: default_elevation(),
            width: default_width(),
            height: default_height(),
            color: true,
            hold: false,
        }
    }
}

impl QcatConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;

        serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// File (if given) or defaults, then environment overrides.
    ///
    /// Not validated; call [`QcatConfig::validate`] after applying flags.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply `QCAT_*` overrides from an arbitrary lookup.
    ///
    /// Recognized keys: `QCAT_THETA`, `QCAT_PHI`, `QCAT_SCALE`,
    /// `QCAT_RENDERER`, `QCAT_OUTPUT`. Unparsable values are logged and
    /// ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse_into<T: FromStr>(key: &str, raw: Option<String>, slot: &mut T) {
            if let Some(raw) = raw {
                match raw.trim().parse() {
                    Ok(val) => *slot = val,
                    Err(_) => warn!(key, value = %raw, "ignoring unparsable environment override"),
                }
            }
        }

        parse_into("QCAT_THETA", lookup("QCAT_THETA"), &mut self.rotation.theta);
        parse_into("QCAT_PHI", lookup("QCAT_PHI"), &mut self.rotation.phi);
        parse_into("QCAT_SCALE", lookup("QCAT_SCALE"), &mut self.solid.scale);
        parse_into(
            "QCAT_RENDERER",
            lookup("QCAT_RENDERER"),
            &mut self.render.renderer,
        );
        if let Some(output) = lookup("QCAT_OUTPUT") {
            self.render.output = Some(PathBuf::from(output));
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rotation
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if !(self.solid.scale.is_finite() && self.solid.scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "solid.scale must be a positive finite number, got {}",
                self.solid.scale
            )));
        }
        if self.solid.scale > MAX_SCALE {
            return Err(ConfigError::Invalid(format!(
                "solid.scale must be at most {MAX_SCALE}, got {}",
                self.solid.scale
            )));
        }

        if !(2..=MAX_RESOLUTION).contains(&self.scene.mesh_resolution) {
            return Err(ConfigError::Invalid(format!(
                "scene.mesh_resolution must be between 2 and {MAX_RESOLUTION}, got {}",
                self.scene.mesh_resolution
            )));
        }

        let bound = self.scene.style.axis_bound;
        if !(bound.is_finite() && bound > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "scene.axis_bound must be a positive finite number, got {bound}"
            )));
        }

        for (name, alpha) in [
            ("sphere", self.scene.style.sphere.alpha),
            ("solid", self.scene.style.solid.alpha),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ConfigError::Invalid(format!(
                    "scene.{name}.alpha must be in [0, 1], got {alpha}"
                )));
            }
        }

        let render = &self.render;
        if !(render.azimuth_deg.is_finite() && render.elevation_deg.is_finite()) {
            return Err(ConfigError::Invalid(
                "render camera angles must be finite".to_string(),
            ));
        }
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&render.width)
            || !(MIN_HEIGHT..=MAX_HEIGHT).contains(&render.height)
        {
            return Err(ConfigError::Invalid(format!(
                "render size must be between {MIN_WIDTH}x{MIN_HEIGHT} and {MAX_WIDTH}x{MAX_HEIGHT}, got {}x{}",
                render.width, render.height
            )));
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
