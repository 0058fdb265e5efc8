//! Light/dark preference.
//!
//! A saved choice wins when it is exactly `"light"` or `"dark"`; anything else
//! (missing, stale, hand-edited) defers to the system preference.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Self {
        match saved.and_then(Self::from_saved) {
            Some(mode) => mode,
            None if system_prefers_dark => ThemeMode::Dark,
            None => ThemeMode::Light,
        }
    }

    fn from_saved(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ThemeMode::Light => "☀️",
            ThemeMode::Dark => "🌙",
        }
    }

    /// Label for the control that switches away from this mode.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to dark theme",
            ThemeMode::Dark => "Switch to light theme",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_saved(s.trim())
            .ok_or_else(|| format!("Invalid theme '{}': expected light or dark", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_value_wins_over_system() {
        assert_eq!(ThemeMode::resolve(Some("light"), true), ThemeMode::Light);
        assert_eq!(ThemeMode::resolve(Some("dark"), false), ThemeMode::Dark);
    }

    #[test]
    fn unknown_or_missing_saved_value_uses_system() {
        assert_eq!(ThemeMode::resolve(None, true), ThemeMode::Dark);
        assert_eq!(ThemeMode::resolve(None, false), ThemeMode::Light);
        assert_eq!(ThemeMode::resolve(Some("Dark"), false), ThemeMode::Light);
        assert_eq!(ThemeMode::resolve(Some("sepia"), true), ThemeMode::Dark);
    }

    #[test]
    fn toggle_flips_and_labels_follow() {
        let mode = ThemeMode::Light.toggled();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.icon(), "🌙");
        assert_eq!(mode.toggle_label(), "Switch to light theme");
        assert_eq!(mode.toggled(), ThemeMode::Light);
    }

    #[test]
    fn parses_only_known_modes() {
        assert_eq!(" dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("auto".parse::<ThemeMode>().is_err());
    }
}
