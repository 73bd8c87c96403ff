//! Configuration management for resume-tui.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Qualifier/organization/application triple used for platform directories
pub const APP_DIRS: (&str, &str, &str) = ("com", "resume-tui", "resume-tui");

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(working_dir: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.resume-tui.toml in the working directory)
        if let Some(dir) = working_dir {
            let project_config = dir.join(".resume-tui.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/resume-tui/config.toml)
        if let Some(dirs) = project_dirs() {
            let user_config = dirs.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (RESUME_TUI__*)
        builder = builder.add_source(
            Environment::with_prefix("RESUME_TUI")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Load configuration with default settings only
    pub fn load_defaults() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.refresh_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "ui.refresh_rate_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(cmd) = &self.export.print_command {
            if cmd.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "export.print_command must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Directory holding the durable store, if one can be resolved
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.storage
            .data_dir
            .clone()
            .or_else(|| project_dirs().map(|d| d.data_dir().to_path_buf()))
    }

    /// Directory print documents are written to
    pub fn export_dir(&self) -> Option<PathBuf> {
        if self.export.directory.is_absolute() {
            return Some(self.export.directory.clone());
        }
        self.data_dir().map(|d| d.join(&self.export.directory))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    let (qualifier, organization, application) = APP_DIRS;
    directories::ProjectDirs::from(qualifier, organization, application)
}

/// Durable store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Print/export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Where print documents are written (relative to the data directory)
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
    /// Delay before the print command is invoked
    #[serde(default = "default_print_delay_ms")]
    pub print_delay_ms: u64,
    /// Keep the document after the print command exits
    #[serde(default = "default_keep_file")]
    pub keep_file: bool,
    /// Command receiving the document path; platform opener when unset
    #[serde(default)]
    pub print_command: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            print_delay_ms: default_print_delay_ms(),
            keep_file: default_keep_file(),
            print_command: None,
        }
    }
}

fn default_export_directory() -> PathBuf {
    PathBuf::from("exports")
}

fn default_print_delay_ms() -> u64 {
    250
}

fn default_keep_file() -> bool {
    true
}

/// Appearance configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Fallback used when no theme has been chosen explicitly
    #[serde(default)]
    pub system_theme: SystemThemeSource,
}

/// Where the system color-scheme preference comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemThemeSource {
    /// Ask the desktop environment
    #[default]
    Auto,
    Light,
    Dark,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI refresh rate in milliseconds
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
    /// Enable vim-style navigation (j/k)
    #[serde(default = "default_vim_navigation")]
    pub vim_navigation: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
            vim_navigation: default_vim_navigation(),
        }
    }
}

fn default_refresh_rate_ms() -> u64 {
    100
}

fn default_vim_navigation() -> bool {
    true
}
