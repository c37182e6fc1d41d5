// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings are optional. When `VIDSHELF_CONFIG` names a YAML or JSON file
//! it is loaded at startup, otherwise built-in defaults apply.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "VIDSHELF_CONFIG";

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial window size (width, height)
    pub window_size: [f32; 2],
    /// Minimum window size (width, height)
    pub min_window_size: [f32; 2],
    /// Extensions offered by the file picker filter (without the dot)
    pub video_extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: [1024.0, 720.0],
            min_window_size: [640.0, 480.0],
            video_extensions: ["mp4", "mkv", "webm", "mov", "avi", "m4v"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML or JSON file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Self::from_yaml(&text),
            Some("json") => Self::from_json(&text),
            _ => bail!("Unsupported settings file extension: {:?}", extension),
        }
    }

    /// Load the file named by [`CONFIG_ENV`], falling back to defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };

        let path = std::path::PathBuf::from(path);
        match Self::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::error!("Failed to load settings, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("parsing YAML settings")
    }

    fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing JSON settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("video_extensions: [mp4, ogv]\n").unwrap();
        assert_eq!(settings.video_extensions, vec!["mp4", "ogv"]);
        assert_eq!(settings.window_size, Settings::default().window_size);
    }

    #[test]
    fn test_json_settings() {
        let settings = Settings::from_json(r#"{"window_size": [800.0, 600.0]}"#).unwrap();
        assert_eq!(settings.window_size, [800.0, 600.0]);
        assert_eq!(settings.min_window_size, [640.0, 480.0]);
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let path = std::env::temp_dir().join("vidshelf-settings-test.toml");
        std::fs::write(&path, "window_size = [1, 2]").unwrap();
        assert!(Settings::load(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join("vidshelf-does-not-exist.yaml");
        assert!(Settings::load(&path).is_err());
    }
}
