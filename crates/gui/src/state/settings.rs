//! Application settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors reading or writing the settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Floor plan display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSettings {
    /// Margin kept around the room when auto-fitting (pixels per side)
    pub fit_padding: f32,
    /// Grid step in meters
    pub grid_step: f64,
    /// Grid half-extent in meters
    pub grid_extent: f64,
    /// Zoom factor per wheel notch
    pub zoom_factor: f64,
    /// Pixels per meter limits
    pub min_scale: f64,
    pub max_scale: f64,
    pub show_compass: bool,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            fit_padding: 100.0,
            grid_step: 0.5,
            grid_extent: 20.0,
            zoom_factor: 1.1,
            min_scale: 5.0,
            max_scale: 500.0,
            show_compass: true,
        }
    }
}

/// 3D viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Background color (RGB)
    pub background_color: [u8; 3],
    /// Grid line color (RGBA)
    pub grid_color: [u8; 4],
    /// Selection box color (RGB)
    pub selection_color: [u8; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Camera movement below this is not announced to the other view
    pub sync_threshold: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [236, 232, 224],
            grid_color: [150, 145, 135, 120],
            selection_color: [59, 130, 246],
            fov_degrees: 50.0,
            sync_threshold: 0.01,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum retained snapshots, 0 = unbounded
    pub limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { limit: 100 }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub font_size: f32,
    pub show_status_bar: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            show_status_bar: true,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub plan: PlanSettings,
    pub viewport: ViewportSettings,
    pub history: HistorySettings,
    pub ui: UiSettings,
}

impl AppSettings {
    fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "roomcraft", "roomcraft")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the config dir, or defaults if missing/unreadable
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save settings to the config dir
    pub fn save(&self) {
        let Some(path) = Self::default_path() else {
            return;
        };
        match self.save_to(&path) {
            Ok(()) => tracing::info!("Settings saved to {}", path.display()),
            Err(e) => tracing::error!("Failed to save settings: {e}"),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert_eq!(s.plan.fit_padding, 100.0);
        assert_eq!(s.plan.grid_step, 0.5);
        assert_eq!(s.viewport.fov_degrees, 50.0);
        assert_eq!(s.history.limit, 100);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");
        let mut s = AppSettings::default();
        s.plan.zoom_factor = 1.25;
        s.ui.show_status_bar = false;
        s.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap(), s);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"plan":{"grid_step":0.25}}"#).unwrap();
        let s = AppSettings::load_from(&path).unwrap();
        assert_eq!(s.plan.grid_step, 0.25);
        assert_eq!(s.plan.fit_padding, 100.0);
        assert_eq!(s.history, HistorySettings::default());
    }

    #[test]
    fn test_bad_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "nope").unwrap();
        assert!(matches!(AppSettings::load_from(&path), Err(SettingsError::Json(_))));
    }
}
