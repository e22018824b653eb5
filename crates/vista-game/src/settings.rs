//! Game settings container.
//!
//! Settings are plain data with defaults for every field, so a settings file
//! only needs to mention what it changes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use vista_engine::camera::TargetResolution;
use vista_engine::logging::LoggingConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// World-unit extent as written in settings files.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl From<Extent> for TargetResolution {
    fn from(e: Extent) -> Self {
        TargetResolution::new(e.width, e.height)
    }
}

/// Layer the y = 0 ground plane belongs to.
pub const GROUND_PLANE_LAYER: u32 = 0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Multiplier applied to raw zoom input.
    pub zoom_attune: f32,
    /// Smoothed zoom below this magnitude is ignored.
    pub zoom_cutoff: f32,

    /// Player movement speed in world units per second.
    pub player_speed: f32,

    pub target_resolution: Extent,
    pub zoom_speed: f32,
    pub follow_player: bool,
    /// Camera height above the ground plane.
    pub camera_height: f32,

    /// Bitmask of layers pointer picking may hit; bit `n` is layer `n`.
    pub ground_layer: u32,

    pub dev_ui_visible: bool,

    /// `env_logger` filter string; `RUST_LOG` applies when unset.
    pub log_filter: Option<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            zoom_attune: 0.6,
            zoom_cutoff: 0.1,
            player_speed: 1.0,
            target_resolution: Extent { width: 4.0, height: 4.0 },
            zoom_speed: 0.1,
            follow_player: true,
            camera_height: 10.0,
            ground_layer: u32::MAX,
            dev_ui_visible: false,
            log_filter: None,
        }
    }
}

impl GameSettings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_json_str(&text)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason: &str| SettingsError::Invalid {
            field,
            reason: reason.to_string(),
        };

        if !TargetResolution::from(self.target_resolution).is_valid() {
            return Err(invalid("target_resolution", "width and height must be positive"));
        }
        if !(self.zoom_speed > 0.0 && self.zoom_speed.is_finite()) {
            return Err(invalid("zoom_speed", "must be positive and finite"));
        }
        if !(self.player_speed >= 0.0 && self.player_speed.is_finite()) {
            return Err(invalid("player_speed", "must be finite and not negative"));
        }
        if !(self.zoom_cutoff >= 0.0 && self.zoom_cutoff.is_finite()) {
            return Err(invalid("zoom_cutoff", "must be finite and not negative"));
        }
        if !self.zoom_attune.is_finite() {
            return Err(invalid("zoom_attune", "must be finite"));
        }
        if !self.camera_height.is_finite() {
            return Err(invalid("camera_height", "must be finite"));
        }
        Ok(())
    }

    /// Whether pointer picking may hit the ground plane.
    pub fn picks_ground_plane(&self) -> bool {
        self.ground_layer & (1 << GROUND_PLANE_LAYER) != 0
    }

    pub fn logging_config(&self) -> LoggingConfig {
        match &self.log_filter {
            Some(filter) => LoggingConfig::with_filter(filter.clone()),
            None => LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let s = GameSettings::from_json_str("{}").unwrap();
        assert_eq!(s, GameSettings::default());
        assert_eq!(s.zoom_attune, 0.6);
        assert_eq!(s.zoom_cutoff, 0.1);
    }

    #[test]
    fn partial_override() {
        let s = GameSettings::from_json_str(
            r#"{"player_speed": 3.5, "target_resolution": {"width": 16, "height": 9}}"#,
        )
        .unwrap();
        assert_eq!(s.player_speed, 3.5);
        assert_eq!(TargetResolution::from(s.target_resolution), TargetResolution::new(16.0, 9.0));
        assert_eq!(s.zoom_speed, 0.1);
    }

    #[test]
    fn zero_target_is_rejected() {
        let err = GameSettings::from_json_str(r#"{"target_resolution": {"width": 0, "height": 9}}"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "target_resolution", .. }));
    }

    #[test]
    fn negative_cutoff_is_rejected() {
        let err = GameSettings::from_json_str(r#"{"zoom_cutoff": -1}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "zoom_cutoff", .. }));
    }

    #[test]
    fn out_of_range_speeds_are_rejected() {
        // Literals beyond f32 range deserialize to infinity.
        let err = GameSettings::from_json_str(r#"{"zoom_speed": 1e39}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "zoom_speed", .. }));

        let err = GameSettings::from_json_str(r#"{"player_speed": 1e39}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "player_speed", .. }));

        let err = GameSettings::from_json_str(r#"{"zoom_cutoff": 1e39}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "zoom_cutoff", .. }));
    }

    #[test]
    fn ground_layer_defaults_to_all_layers() {
        let s = GameSettings::default();
        assert_eq!(s.ground_layer, u32::MAX);
        assert!(s.picks_ground_plane());
    }

    #[test]
    fn ground_layer_without_ground_bit_disables_picking() {
        let s = GameSettings::from_json_str(r#"{"ground_layer": 4}"#).unwrap();
        assert_eq!(s.ground_layer, 4);
        assert!(!s.picks_ground_plane());

        let s = GameSettings::from_json_str(r#"{"ground_layer": 5}"#).unwrap();
        assert!(s.picks_ground_plane());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = GameSettings::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = GameSettings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(format!("{err:#}").contains("settings.json"));
    }

    #[test]
    fn log_filter_feeds_logging_config() {
        let s = GameSettings::from_json_str(r#"{"log_filter": "vista_game=debug"}"#).unwrap();
        assert_eq!(s.logging_config().env_filter.as_deref(), Some("vista_game=debug"));
    }
}
