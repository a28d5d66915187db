//! Game settings
//!
//! Physics constants plus the orchestrator's own knobs. Every field has a
//! default, so JSON overrides only need the fields they change. Persisted in
//! LocalStorage on the web build.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::PhysicsParams;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsParams,

    /// Where the ball sits after a reset
    pub start_position: Vec3,
    /// Power after a reset (0-100)
    pub default_power: f32,
    /// Power change per power-up/down input
    pub power_step: f32,
    /// Ball nudge per move input
    pub move_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            start_position: Vec3::from_array(BALL_START),
            default_power: DEFAULT_POWER,
            power_step: POWER_STEP,
            move_speed: MOVE_SPEED,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let p = &self.physics;
        if p.ball_radius <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "physics.ball_radius",
                reason: "must be positive",
            });
        }
        if p.rim_tube_radius <= 0.0 || p.rim_tube_radius >= p.rim_radius {
            return Err(SettingsError::Invalid {
                field: "physics.rim_tube_radius",
                reason: "must be positive and smaller than rim_radius",
            });
        }
        if p.ball_radius >= p.rim_inner_edge() {
            return Err(SettingsError::Invalid {
                field: "physics.ball_radius",
                reason: "must be smaller than the rim opening",
            });
        }
        if !(0.0..=MAX_POWER).contains(&self.default_power) {
            return Err(SettingsError::Invalid {
                field: "default_power",
                reason: "must be within 0-100",
            });
        }
        Ok(())
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "hoop_shot_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        match storage {
            Some(storage) => {
                self.write_with(|key, json| storage.set_item(key, json));
            }
            None => log::warn!("Settings not saved: LocalStorage unavailable"),
        }
    }

    /// Serialize and hand the JSON to `set_item`; returns whether it was stored
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn write_with<E: std::fmt::Debug>(
        &self,
        set_item: impl FnOnce(&str, &str) -> Result<(), E>,
    ) -> bool {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Settings not saved: {}", e);
                return false;
            }
        };
        match set_item(Self::STORAGE_KEY, &json) {
            Ok(()) => {
                log::info!("Settings saved");
                true
            }
            Err(e) => {
                log::warn!("Settings not saved: {:?}", e);
                false
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_override_nested_physics() {
        let settings =
            Settings::from_json(r#"{"physics": {"ground_friction": 0.8}, "power_step": 10}"#)
                .unwrap();
        assert!((settings.physics.ground_friction - 0.8).abs() < 1e-6);
        assert!((settings.physics.gravity + 19.6).abs() < 1e-5);
        assert_eq!(settings.power_step, 10.0);
        assert_eq!(settings.default_power, 50.0);
    }

    #[test]
    fn test_round_trip_json() {
        let mut settings = Settings::default();
        settings.start_position = Vec3::new(-5.0, 2.0, 3.0);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{"physics": {"rim_tube_radius": 1.0}}"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "physics.rim_tube_radius",
                ..
            }
        ));

        let err = Settings::from_json(r#"{"default_power": 150}"#).unwrap_err();
        assert!(err.to_string().contains("default_power"));
    }

    #[test]
    fn test_storage_failure_is_reported() {
        let settings = Settings::default();

        let mut stored = None;
        assert!(settings.write_with(|key, json| {
            stored = Some((key.to_string(), json.to_string()));
            Ok::<(), ()>(())
        }));
        let (key, json) = stored.unwrap();
        assert_eq!(key, "hoop_shot_settings");
        assert_eq!(Settings::from_json(&json).unwrap(), settings);

        // e.g. quota exceeded
        assert!(!settings.write_with(|_, _| Err("QuotaExceededError")));
    }

    #[test]
    fn test_ball_must_fit_through_rim() {
        // Inner edge is 0.7 - 0.1
        let err = Settings::from_json(r#"{"physics": {"ball_radius": 0.7}}"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "physics.ball_radius",
                ..
            }
        ));
        assert!(Settings::from_json(r#"{"physics": {"ball_radius": 0.55}}"#).is_ok());
    }
}
