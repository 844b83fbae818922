use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::shared::errors::{CommandError, CommandResult};

/// Largest display precision accepted in settings
pub const MAX_DISPLAY_PRECISION: usize = 17;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterSettings {
    pub preferences: UserPreferences,
    pub display: DisplaySettings,
}

/// Selection a fresh or reset session starts from; unset by default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub default_category: Option<String>,
    pub default_from_unit: Option<String>,
    pub default_to_unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Decimal places the shell uses for the result banner
    pub precision: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

impl ConverterSettings {
    pub fn get_settings_path() -> CommandResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| CommandError::SystemIO("Failed to determine config directory".to_string()))
    }

    /// Load from the platform config directory
    pub fn load() -> CommandResult<Self> {
        Self::load_from(&Self::get_settings_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    pub fn load_from(path: &Path) -> CommandResult<Self> {
        if !path.exists() {
            tracing::debug!("[ConverterSettings] No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CommandError::SystemIO(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| CommandError::InvalidInput(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        tracing::info!("[ConverterSettings] Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the shell cannot use
    pub fn validate(&self) -> CommandResult<()> {
        if self.display.precision > MAX_DISPLAY_PRECISION {
            return Err(CommandError::InvalidInput(format!(
                "Display precision {} exceeds the maximum of {}",
                self.display.precision, MAX_DISPLAY_PRECISION
            )));
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> CommandResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CommandError::SystemIO(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content)
            .map_err(|e| CommandError::SystemIO(format!("Failed to write settings file: {}", e)))
    }
}
