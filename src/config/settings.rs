//! Editor-wide configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base editor script filename under the configured directory
const REDACTOR_JS: &str = "/redactor.js";
/// Base editor stylesheet filename under the configured directory
const REDACTOR_CSS: &str = "/redactor.css";

/// Current settings format version
pub const SETTINGS_VERSION: u32 = 1;

/// Process-wide editor configuration.
///
/// Set once at application startup and read on every render call; the
/// renderer never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Version of the settings format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Path to the Redactor sources under the web root, without a leading
    /// slash (e.g. `js/admin/redactor`). `None` means no directory is
    /// configured and asset paths cannot be resolved.
    #[serde(default)]
    pub redactor_dir: Option<String>,
    /// Allow-list of plugins installed under `<redactor_dir>/plugins/`
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Filesystem path the public web directory is served from
    #[serde(default)]
    pub web_root: PathBuf,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            redactor_dir: None,
            plugins: Vec::new(),
            web_root: PathBuf::new(),
        }
    }
}

impl EditorSettings {
    /// Load settings from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the settings file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "redactor-form", "redactor-form")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("settings.json"))
    }

    /// Load settings from a specific file path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to a specific file path
    pub fn save_to_path(&self, path: &PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Web path of the base editor script, when a directory is configured
    pub fn base_script_path(&self) -> Option<String> {
        self.redactor_dir
            .as_ref()
            .map(|dir| format!("/{dir}{REDACTOR_JS}"))
    }

    /// Web path of the base editor stylesheet, when a directory is configured
    pub fn base_stylesheet_path(&self) -> Option<String> {
        self.redactor_dir
            .as_ref()
            .map(|dir| format!("/{dir}{REDACTOR_CSS}"))
    }

    /// Web path of a plugin's script, when a directory is configured
    pub fn plugin_script_path(&self, plugin: &str) -> Option<String> {
        self.redactor_dir
            .as_ref()
            .map(|dir| format!("/{dir}/plugins/{plugin}.js"))
    }

    /// Web path of a plugin's stylesheet, when a directory is configured
    pub fn plugin_stylesheet_path(&self, plugin: &str) -> Option<String> {
        self.redactor_dir
            .as_ref()
            .map(|dir| format!("/{dir}/plugins/{plugin}.css"))
    }

    /// Resolve a web path against the filesystem web root
    pub fn fs_path(&self, web_path: &str) -> PathBuf {
        self.web_root.join(web_path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> EditorSettings {
        EditorSettings {
            redactor_dir: Some("js/admin/redactor".to_string()),
            plugins: vec!["clips".to_string()],
            web_root: PathBuf::from("/var/www/web"),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_paths() {
        let settings = settings();
        assert_eq!(
            settings.base_script_path().as_deref(),
            Some("/js/admin/redactor/redactor.js")
        );
        assert_eq!(
            settings.base_stylesheet_path().as_deref(),
            Some("/js/admin/redactor/redactor.css")
        );
    }

    #[test]
    fn test_plugin_paths() {
        let settings = settings();
        assert_eq!(
            settings.plugin_script_path("clips").as_deref(),
            Some("/js/admin/redactor/plugins/clips.js")
        );
        assert_eq!(
            settings.plugin_stylesheet_path("clips").as_deref(),
            Some("/js/admin/redactor/plugins/clips.css")
        );
    }

    #[test]
    fn test_paths_are_none_without_directory() {
        let settings = EditorSettings::default();
        assert!(settings.base_script_path().is_none());
        assert!(settings.base_stylesheet_path().is_none());
        assert!(settings.plugin_script_path("clips").is_none());
    }

    #[test]
    fn test_fs_path_strips_leading_slash() {
        let settings = settings();
        assert_eq!(
            settings.fs_path("/js/admin/redactor/redactor.js"),
            PathBuf::from("/var/www/web/js/admin/redactor/redactor.js")
        );
    }

    #[test]
    fn test_disk_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = settings();
        settings.save_to_path(&path).unwrap();
        let loaded = EditorSettings::load_from_path(&path).unwrap();

        assert_eq!(loaded.redactor_dir, settings.redactor_dir);
        assert_eq!(loaded.plugins, settings.plugins);
        assert_eq!(loaded.web_root, settings.web_root);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let loaded: EditorSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded.version, SETTINGS_VERSION);
        assert!(loaded.redactor_dir.is_none());
        assert!(loaded.plugins.is_empty());
    }
}
