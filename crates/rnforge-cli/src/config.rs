//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`RNFORGE_*`, `__` as section separator)
//! 3. Config file (`--config`, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Project identity overrides.
    pub project: ProjectConfig,
    /// Asset pipeline defaults.
    pub assets: AssetsConfig,
    /// External resize tool selection.
    pub resize: ResizeConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// iOS target name; `None` derives it from the project directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Icon source image, relative to the project root.
    pub icon_source: PathBuf,
    /// Splash source image, relative to the project root.
    pub splash_source: PathBuf,
    /// Default platform selection: `android`, `ios`, or `all`.
    pub platforms: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizeConfig {
    /// `auto` probes the PATH; otherwise `sips`, `magick`, or `convert`.
    pub tool: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig { app_name: None },
            assets: AssetsConfig {
                icon_source: PathBuf::from("src/assets/images/logo.png"),
                splash_source: PathBuf::from("src/assets/branding/splash.png"),
                platforms: "all".into(),
            },
            resize: ResizeConfig {
                tool: "auto".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via `--config`
    /// (or `None` to use the default location).  A missing default file is
    /// fine; a missing explicit file is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone()).required(true)),
            None => builder.add_source(config::File::from(Self::config_path()).required(false)),
        };

        let merged = builder
            .add_source(config::Environment::with_prefix("RNFORGE").separator("__"))
            .build()?;

        Ok(merged.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.rnforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "rnforge", "rnforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".rnforge.toml"))
    }

    /// Read a dotted key, for `rnforge config get`.
    pub fn get_value(&self, key: &str) -> CliResult<String> {
        match key {
            "project.app_name" => Ok(self.project.app_name.clone().unwrap_or_default()),
            "assets.icon_source" => Ok(self.assets.icon_source.display().to_string()),
            "assets.splash_source" => Ok(self.assets.splash_source.display().to_string()),
            "assets.platforms" => Ok(self.assets.platforms.clone()),
            "resize.tool" => Ok(self.resize.tool.clone()),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            _ => Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            }),
        }
    }

    /// Update a dotted key, for `rnforge config set`.
    pub fn set_value(&mut self, key: &str, value: &str) -> CliResult<()> {
        match key {
            "project.app_name" => {
                self.project.app_name = (!value.is_empty()).then(|| value.to_owned());
            }
            "assets.icon_source" => self.assets.icon_source = PathBuf::from(value),
            "assets.splash_source" => self.assets.splash_source = PathBuf::from(value),
            "assets.platforms" => {
                // Validate before storing; the core parser is the authority.
                value
                    .parse::<rnforge_core::domain::PlatformSelection>()
                    .map_err(|e| CliError::ConfigError {
                        message: e.to_string(),
                        source: None,
                    })?;
                self.assets.platforms = value.to_owned();
            }
            "resize.tool" => {
                if !["auto", "sips", "magick", "convert"].contains(&value) {
                    return Err(CliError::ConfigError {
                        message: format!("Unknown resize tool: '{value}'"),
                        source: None,
                    });
                }
                self.resize.tool = value.to_owned();
            }
            "output.no_color" => {
                self.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                    message: format!("Expected true/false, got '{value}'"),
                    source: None,
                })?;
            }
            "output.format" => self.output.format = value.to_owned(),
            _ => {
                return Err(CliError::ConfigError {
                    message: format!("Unknown config key: '{key}'"),
                    source: None,
                });
            }
        }
        Ok(())
    }
}
