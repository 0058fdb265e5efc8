use crate::error::{FolioError, Result};
use crate::model::CollectionKind;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_PROJECTS_FILE: &str = "projects-file";
pub const KEY_TIMELINE_FILE: &str = "timeline-file";
pub const KEY_THEME: &str = "theme";

/// Configuration for folio, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolioConfig {
    /// Projects JSON file; defaults to `projects.json` in the data directory
    #[serde(default)]
    pub projects_file: Option<PathBuf>,

    /// Timeline JSON file; defaults to `timeline.json` in the data directory
    #[serde(default)]
    pub timeline_file: Option<PathBuf>,

    /// Saved theme preference. Kept as the raw string so a stale value never
    /// breaks loading; see [`ThemeMode::resolve`].
    #[serde(default)]
    pub theme: Option<String>,
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FolioConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Like [`FolioConfig::load`], but an unreadable or malformed file yields
    /// defaults and a warning, so `folio config` can still overwrite it.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref();
        match Self::load(config_dir) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    path = %config_dir.join(CONFIG_FILENAME).display(),
                    error = %e,
                    "ignoring unreadable config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn file_for(&self, kind: CollectionKind) -> Option<&PathBuf> {
        match kind {
            CollectionKind::Projects => self.projects_file.as_ref(),
            CollectionKind::Timeline => self.timeline_file.as_ref(),
        }
    }

    pub fn theme_mode(&self, system_prefers_dark: bool) -> ThemeMode {
        ThemeMode::resolve(self.theme.as_deref(), system_prefers_dark)
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme = Some(mode.as_str().to_string());
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string());
        match key {
            KEY_PROJECTS_FILE => Ok(path(&self.projects_file)),
            KEY_TIMELINE_FILE => Ok(path(&self.timeline_file)),
            KEY_THEME => Ok(self.theme.clone()),
            other => Err(FolioError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Sets a key. An empty value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let path = || (!value.is_empty()).then(|| PathBuf::from(value));
        match key {
            KEY_PROJECTS_FILE => self.projects_file = path(),
            KEY_TIMELINE_FILE => self.timeline_file = path(),
            KEY_THEME if value.is_empty() => self.theme = None,
            KEY_THEME => {
                let mode: ThemeMode = value.parse().map_err(FolioError::Config)?;
                self.set_theme(mode);
            }
            other => {
                return Err(FolioError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    /// All known keys with their current values (`-` when unset).
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        [KEY_PROJECTS_FILE, KEY_TIMELINE_FILE, KEY_THEME]
            .into_iter()
            .map(|key| {
                let value = self.get(key).ok().flatten().unwrap_or_else(|| "-".into());
                (key, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        assert!(FolioConfig::load(dir.path()).is_err());
        assert_eq!(FolioConfig::load_or_default(dir.path()), FolioConfig::default());
    }

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.projects_file, None);
        assert_eq!(config.theme_mode(true), ThemeMode::Dark);
        assert_eq!(config.theme_mode(false), ThemeMode::Light);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = FolioConfig::default();
        config.set(KEY_PROJECTS_FILE, "/srv/site/projects.json").unwrap();
        config.set(KEY_THEME, "dark").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded.file_for(CollectionKind::Projects),
            Some(&PathBuf::from("/srv/site/projects.json"))
        );
        assert_eq!(loaded.theme_mode(false), ThemeMode::Dark);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FolioConfig = serde_json::from_str(r#"{"theme": "sepia"}"#).unwrap();
        assert_eq!(config.timeline_file, None);
        assert_eq!(config.theme_mode(true), ThemeMode::Dark);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_theme() {
        let mut config = FolioConfig::default();
        assert!(matches!(
            config.set("colour", "x"),
            Err(FolioError::Config(_))
        ));
        assert!(matches!(
            config.set(KEY_THEME, "auto"),
            Err(FolioError::Config(_))
        ));
        assert_eq!(config.theme, None);
    }

    #[test]
    fn test_empty_value_clears() {
        let mut config = FolioConfig::default();
        config.set(KEY_TIMELINE_FILE, "career.json").unwrap();
        config.set(KEY_TIMELINE_FILE, "").unwrap();
        assert_eq!(config.timeline_file, None);
    }

    #[test]
    fn test_list_all_shows_every_key() {
        let mut config = FolioConfig::default();
        config.set(KEY_THEME, "light").unwrap();
        let listed = config.list_all();
        assert_eq!(
            listed,
            vec![
                (KEY_PROJECTS_FILE, "-".to_string()),
                (KEY_TIMELINE_FILE, "-".to_string()),
                (KEY_THEME, "light".to_string()),
            ]
        );
    }
}
