use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::browser::{BadBrowser, BrowserCorrections};
use super::correction::CoordinatesCorrection;
use super::metrics::LayoutMetrics;
use crate::geometry::LatchOrientation;

/// Popup placement settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Orientation used when a popup doesn't specify one
    pub latch_orientation: LatchOrientation,
    /// Static offsets between reported bounds and the visual touch point
    pub coordinates_correction: CoordinatesCorrection,
    /// Browser whose viewport height needs compensating
    pub bad_browser: BadBrowser,
    /// Height compensation per known browser
    pub browser_corrections: BrowserCorrections,
    /// Latch and margin dimensions
    pub metrics: LayoutMetrics,
}

impl Settings {
    /// Get the path to the YAML settings file
    pub fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("latch-popup").join("settings.yaml"))
    }

    /// Get the path to the legacy JSON settings file
    fn legacy_json_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("latch-popup").join("settings.json"))
    }

    /// Load settings from disk (YAML format, with JSON migration)
    pub fn load() -> Self {
        let mut settings = Self::load_raw();
        settings.sanitize();
        settings
    }

    /// Load raw settings without sanitization
    fn load_raw() -> Self {
        if let Some(yaml_path) = Self::file_path() {
            if let Ok(contents) = std::fs::read_to_string(&yaml_path) {
                match Self::from_yaml(&contents) {
                    Ok(settings) => return settings,
                    Err(e) => log::warn!("Ignoring invalid settings file {:?}: {}", yaml_path, e),
                }
            }
        }

        if let Some(json_path) = Self::legacy_json_path() {
            if let Ok(contents) = std::fs::read_to_string(&json_path) {
                match serde_json::from_str::<Settings>(&contents) {
                    Ok(settings) => {
                        if settings.save().is_ok() {
                            match std::fs::remove_file(&json_path) {
                                Ok(()) => log::info!("Migrated settings from JSON to YAML format"),
                                Err(e) => log::warn!(
                                    "Failed to remove legacy settings file {:?}: {}",
                                    json_path,
                                    e
                                ),
                            }
                        }
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring invalid settings file {:?}: {}", json_path, e),
                }
            }
        }

        Self::default()
    }

    /// Parse settings from YAML text without touching the disk
    pub fn from_yaml(contents: &str) -> Result<Self, String> {
        serde_yml::from_str(contents).map_err(|e| format!("Failed to parse settings: {}", e))
    }

    /// Serialize settings to YAML text
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yml::to_string(self).map_err(|e| format!("Failed to serialize: {}", e))
    }

    /// Save settings to disk (YAML format)
    pub fn save(&self) -> Result<(), String> {
        let path = Self::file_path().ok_or("Could not determine config directory")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let contents = self.to_yaml()?;

        std::fs::write(&path, contents).map_err(|e| format!("Failed to write settings: {}", e))
    }

    /// Clean up any invalid state
    pub fn sanitize(&mut self) {
        self.coordinates_correction.sanitize();
        self.browser_corrections.sanitize();
        self.metrics.sanitize();
    }
}
