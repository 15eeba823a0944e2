use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::controls::ControlSettings;
use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "hellfighter.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hellfighter".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Where the cube textures are read from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub dir: PathBuf,
    pub diffuse: String,
    pub specular: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("res"),
            diffuse: "container2.png".to_string(),
            specular: "container2_specular.png".to_string(),
        }
    }
}

impl AssetConfig {
    pub fn diffuse_path(&self) -> PathBuf {
        self.dir.join(&self.diffuse)
    }

    pub fn specular_path(&self) -> PathBuf {
        self.dir.join(&self.specular)
    }
}

/// Application configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub controls: ControlSettings,
    pub assets: AssetConfig,
    pub debug_overlay: bool,
}

impl AppConfig {
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&source)
    }

    /// Load from `path` if given, else from [`DEFAULT_CONFIG_FILE`] when it
    /// exists, else fall back to defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load(path)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                log::info!("Loading config from {}", DEFAULT_CONFIG_FILE);
                Self::load(DEFAULT_CONFIG_FILE)
            }
            None => {
                log::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        let controls = &self.controls;
        for (name, value) in [
            ("move_speed", controls.move_speed),
            ("mouse_sensitivity", controls.mouse_sensitivity),
            ("zoom_step", controls.zoom_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "controls.{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
