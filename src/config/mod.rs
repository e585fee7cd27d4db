//! Typed application configuration (`config/config.json`)
//!
//! The installer writes this file with defaults on first install; the editor
//! and the cloud-setup helper mutate it afterwards. Saves go through the
//! atomic-replace primitive so a crash never leaves a half-written config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError};
use crate::file_ops;

/// Google Cloud settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleCloudConfig {
    pub project_id: String,
    pub region: String,
    pub model_name: String,
}

impl Default for GoogleCloudConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            region: "us-central1".to_string(),
            model_name: "gemini-pro".to_string(),
        }
    }
}

/// Editor preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub theme: String,
    pub font_family: String,
    pub font_size: u32,
    pub tab_size: u32,
    pub auto_save: bool,
    /// Delay in milliseconds before an auto-save fires
    pub auto_save_delay: u32,
    pub show_line_numbers: bool,
    pub word_wrap: bool,
    pub syntax_highlighting: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            font_family: "Consolas".to_string(),
            font_size: 12,
            tab_size: 4,
            auto_save: true,
            auto_save_delay: 5000,
            show_line_numbers: true,
            word_wrap: false,
            syntax_highlighting: true,
        }
    }
}

/// AI behavior parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub max_context_length: u32,
    pub completion_delay_ms: u32,
    pub enable_streaming: bool,
    pub temperature: f64,
    pub max_tokens: u32,
    pub auto_complete: bool,
    pub chat_history_limit: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            max_context_length: 2048,
            completion_delay_ms: 500,
            enable_streaming: true,
            temperature: 0.7,
            max_tokens: 1024,
            auto_complete: true,
            chat_history_limit: 50,
        }
    }
}

/// Root configuration record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub google_cloud: GoogleCloudConfig,
    pub editor: EditorConfig,
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SetupError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| SetupError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| SetupError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Save configuration with an atomic replace (tmp + rename)
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        file_ops::atomic_replace(path, &format!("{content}\n"))
    }

    /// Rendered default configuration, used as the install-time template
    pub fn default_template() -> Result<String> {
        let content = serde_json::to_string_pretty(&Self::default())?;
        Ok(format!("{content}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_editor_contract() {
        let config = AppConfig::default();
        assert_eq!(config.google_cloud.region, "us-central1");
        assert_eq!(config.google_cloud.model_name, "gemini-pro");
        assert!(config.google_cloud.project_id.is_empty());
        assert_eq!(config.editor.theme, "dark");
        assert_eq!(config.editor.font_size, 12);
        assert_eq!(config.ai.max_tokens, 1024);
        assert!((config.ai.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config/config.json");

        let mut config = AppConfig::default();
        config.google_cloud.project_id = "my-project-42".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.google_cloud.project_id, "my-project-42");
        assert_eq!(loaded.editor.tab_size, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = AppConfig::load(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SetupError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_unparseable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, SetupError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"google_cloud": {"project_id": "p1"}}"#).unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.google_cloud.project_id, "p1");
        assert_eq!(config.google_cloud.region, "us-central1");
        assert_eq!(config.editor.theme, "dark");
    }

    #[test]
    fn test_default_template_is_valid_json() {
        let template = AppConfig::default_template().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&template).unwrap();
        assert!(parsed.get("google_cloud").is_some());
        assert!(parsed.get("editor").is_some());
        assert!(parsed.get("ai").is_some());
    }
}
