//! Application configuration
//!
//! Layered as CLI > environment > config file > defaults. The environment
//! layer is handled by clap (`env = ...`), so by the time overrides reach
//! [`AppConfig::apply_overrides`] they already carry it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::errors::DomainError;
use crate::utils::logging::parse_level;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "framecut.toml";

/// Keys the interaction loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    pub quit: char,
    pub jump: char,
    pub mark: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: 'q',
            jump: 'f',
            mark: 's',
        }
    }
}

/// Configuration fixed at startup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Transcoder binary
    pub tool: String,
    /// Directory outputs and the cut script are written to
    pub output_dir: PathBuf,
    /// Cut script file name inside `output_dir`
    pub script_name: String,
    /// Stream copy in clip mode
    pub stream_copy: bool,
    pub verbose: bool,
    pub log_level: String,
    /// Width of the ASCII preview in columns
    pub preview_width: u16,
    pub keys: KeyBindings,

    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tool: "ffmpeg".to_string(),
            output_dir: PathBuf::from("output"),
            script_name: "onescripttocutthemall.sh".to_string(),
            stream_copy: false,
            verbose: false,
            log_level: "info".to_string(),
            preview_width: 80,
            keys: KeyBindings::default(),
            source: None,
        }
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tool: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    /// Flags only ever switch a setting on
    pub stream_copy: bool,
    pub verbose: bool,
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to parse TOML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigFail(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_toml_str(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load from an explicit file, else `framecut.toml` if present, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, DomainError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command-line and environment overrides, then re-validate
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> Result<(), DomainError> {
        if let Some(tool) = overrides.tool {
            self.tool = tool;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        self.stream_copy |= overrides.stream_copy;
        self.verbose |= overrides.verbose;
        self.validate()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tool.trim().is_empty() {
            return Err(DomainError::ConfigFail("tool cannot be empty".to_string()));
        }
        if self.script_name.trim().is_empty() {
            return Err(DomainError::ConfigFail(
                "script_name cannot be empty".to_string(),
            ));
        }
        if self.preview_width < 8 {
            return Err(DomainError::ConfigFail(format!(
                "preview_width must be at least 8, got {}",
                self.preview_width
            )));
        }
        parse_level(&self.log_level)?;

        let keys = [self.keys.quit, self.keys.jump, self.keys.mark];
        if keys.iter().collect::<HashSet<_>>().len() != keys.len() {
            return Err(DomainError::ConfigFail(format!(
                "Key bindings must be distinct: quit={} jump={} mark={}",
                self.keys.quit, self.keys.jump, self.keys.mark
            )));
        }

        Ok(())
    }

    /// Location of the cut script
    pub fn script_path(&self) -> PathBuf {
        self.output_dir.join(&self.script_name)
    }
}
