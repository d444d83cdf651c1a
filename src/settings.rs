//! Game settings and preferences
//!
//! Persisted as JSON next to the high score file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Arena;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen size the level is laid out in
    pub arena_width: f32,
    pub arena_height: f32,

    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle effects (dust, bursts)
    pub particles: bool,

    /// Fetch game-over commentary from the remote provider
    pub commentary: bool,
    /// Environment variable holding the commentary credential
    pub api_key_env: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            quality: QualityPreset::Medium,
            particles: true,
            commentary: true,
            api_key_env: "API_KEY".to_string(),
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Override the quality preset by name. Unknown names leave it unchanged.
    pub fn apply_quality_override(&mut self, name: &str) -> bool {
        match QualityPreset::parse(name) {
            Some(preset) => {
                self.quality = preset;
                log::info!("Quality override: {}", preset.as_str());
                true
            }
            None => {
                log::warn!(
                    "Unknown quality preset '{}', keeping {}",
                    name,
                    self.quality.as_str()
                );
                false
            }
        }
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> crate::error::Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_cap() {
        assert_eq!(Settings::from_preset(QualityPreset::Low).max_particles(), 100);
        let mut settings = Settings::from_preset(QualityPreset::High);
        assert_eq!(settings.max_particles(), 2000);
        settings.particles = false;
        assert_eq!(settings.max_particles(), 0);
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!(QualityPreset::parse("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::parse("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }

    #[test]
    fn test_quality_override() {
        let mut settings = Settings::default();
        assert!(settings.apply_quality_override("high"));
        assert_eq!(settings.quality, QualityPreset::High);
        assert_eq!(settings.max_particles(), 2000);

        assert!(!settings.apply_quality_override("ultra"));
        assert_eq!(settings.quality, QualityPreset::High);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("street_striker_no_such_settings.json");
        let _ = fs::remove_file(&path);
        let settings = Settings::load(&path);
        assert_eq!(settings.arena(), Arena::new(800.0, 600.0));
        assert_eq!(settings.api_key_env, "API_KEY");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = std::env::temp_dir().join("street_striker_partial_settings.json");
        fs::write(&path, r#"{ "arena_width": 1024.0, "quality": "Low" }"#).unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.arena_width, 1024.0);
        assert_eq!(settings.arena_height, 600.0);
        assert_eq!(settings.quality, QualityPreset::Low);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("street_striker_saved_settings.json");
        let mut settings = Settings::default();
        settings.commentary = false;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert!(!loaded.commentary);
        let _ = fs::remove_file(&path);
    }
}
