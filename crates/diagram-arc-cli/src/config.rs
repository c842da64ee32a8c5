//! Configuration for the diagram arc checker.
//!
//! [`AppConfig`] is deserialized from TOML and controls how strictly records
//! are checked beyond the rules every [`DiagramArc`] already enforces.
//!
//! ```toml
//! [validation]
//! strict_colors = true
//! require_center = false
//! allow_empty_names = true
//! ```
//!
//! Configuration files are searched in this order:
//! 1. Explicit path if provided
//! 2. Local project directory (`diagram-arc/config.toml`)
//! 3. Platform-specific config directory
//! 4. Default config if none found

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use diagram_arc::{DiagramArc, ValidationError};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level checker configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Validation policy section.
    #[serde(default)]
    validation: ValidationConfig,
}

impl AppConfig {
    pub fn new(validation: ValidationConfig) -> Self {
        Self { validation }
    }

    /// Returns the validation policy.
    pub fn validation(&self) -> &ValidationConfig {
        &self.validation
    }
}

/// Extra checks applied to arcs that are already valid on their own.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Reject colors that are not CSS colors.
    #[serde(default)]
    strict_colors: bool,

    /// Reject arcs that do not give both `x` and `y`.
    #[serde(default)]
    require_center: bool,

    /// Accept arcs whose name is the empty string.
    #[serde(default = "default_allow_empty_names")]
    allow_empty_names: bool,
}

fn default_allow_empty_names() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_colors: false,
            require_center: false,
            allow_empty_names: default_allow_empty_names(),
        }
    }
}

impl ValidationConfig {
    /// Creates a new [`ValidationConfig`].
    ///
    /// # Arguments
    ///
    /// * `strict_colors` - Reject colors that are not CSS colors.
    /// * `require_center` - Reject arcs without both center coordinates.
    /// * `allow_empty_names` - Accept arcs with an empty name.
    pub fn new(strict_colors: bool, require_center: bool, allow_empty_names: bool) -> Self {
        Self {
            strict_colors,
            require_center,
            allow_empty_names,
        }
    }

    pub fn strict_colors(&self) -> bool {
        self.strict_colors
    }

    pub fn require_center(&self) -> bool {
        self.require_center
    }

    pub fn allow_empty_names(&self) -> bool {
        self.allow_empty_names
    }

    /// Applies the policy to an arc.
    ///
    /// Policy violations reuse [`ValidationError`]: a missing center
    /// coordinate or a refused empty name reads as a missing field.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, checked in the order name, center, color.
    pub fn check(&self, arc: &DiagramArc) -> Result<(), ValidationError> {
        if !self.allow_empty_names && arc.name().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        if self.require_center {
            if arc.x().is_none() {
                return Err(ValidationError::MissingField("x"));
            }
            if arc.y().is_none() {
                return Err(ValidationError::MissingField("y"));
            }
        }

        if self.strict_colors {
            arc.parse_color()?;
        }

        Ok(())
    }
}

/// Find and load configuration from the search locations.
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("diagram-arc/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "diagram-arc", "diagram-arc") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}
