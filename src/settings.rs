//! Game settings and preferences
//!
//! Loaded from a JSON file. Any key left out keeps its default, so a file
//! holding just `{"tuning": {"damping": 0.3}}` is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::SAMPLE_HZ;
use crate::sim::{MovementMode, Tuning};

/// Why settings could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("setting {field} = {value} out of range ({expected})")]
    Invalid {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode to start in; `Unselected` shows the menu
    pub mode: MovementMode,
    /// Movement, collision and respawn numbers
    pub tuning: Tuning,
    /// Motion sample rate (Hz)
    pub sample_hz: f32,

    // === Audio ===
    /// Hit sound asset path (None = silent hits)
    pub hit_sound: Option<String>,
    /// Master volume (0.0 - 1.0)
    pub volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: MovementMode::Unselected,
            tuning: Tuning::default(),
            sample_hz: SAMPLE_HZ,
            hit_sound: None,
            volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Read settings, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err} - using default settings");
                Self::default()
            }
        }
    }

    /// Reject numbers the simulation cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let t = &self.tuning;
        let checks: [(&'static str, f32, bool, &'static str); 8] = [
            ("tuning.damping", t.damping, t.damping > 0.0 && t.damping < 1.0, "0 < x < 1"),
            ("tuning.sensitivity", t.sensitivity, t.sensitivity > 0.0, "x > 0"),
            ("tuning.cat_size", t.cat_size, t.cat_size > 0.0, "x > 0"),
            ("tuning.laser_radius", t.laser_radius, t.laser_radius > 0.0, "x > 0"),
            ("tuning.spawn_margin", t.spawn_margin, t.spawn_margin >= 0.0, "x >= 0"),
            ("tuning.respawn_delay", t.respawn_delay, t.respawn_delay >= 0.0, "x >= 0"),
            ("sample_hz", self.sample_hz, self.sample_hz > 0.0, "x > 0"),
            ("volume", self.volume, (0.0..=1.0).contains(&self.volume), "0 <= x <= 1"),
        ];

        for (field, value, ok, expected) in checks {
            // NaN fails every comparison above, so it lands here too
            if !ok {
                return Err(SettingsError::Invalid {
                    field,
                    value,
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Seconds between motion samples
    pub fn sample_dt(&self) -> f32 {
        1.0 / self.sample_hz
    }
}
