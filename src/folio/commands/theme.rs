use crate::commands::{CmdMessage, CmdResult, FolioPaths};
use crate::config::FolioConfig;
use crate::error::Result;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(ThemeMode),
}

/// Shows or changes the saved theme. Changes are written to the config so
/// they survive the next run; showing never writes.
pub fn run(paths: &FolioPaths, action: ThemeAction, system_prefers_dark: bool) -> Result<CmdResult> {
    let mut config = FolioConfig::load_or_default(&paths.config_dir);
    let current = config.theme_mode(system_prefers_dark);

    let next = match action {
        ThemeAction::Show => {
            let mut result = CmdResult::default().with_theme(current);
            result.add_message(CmdMessage::info(format!(
                "{} {} theme ({})",
                current.icon(),
                current,
                current.toggle_label()
            )));
            return Ok(result);
        }
        ThemeAction::Toggle => current.toggled(),
        ThemeAction::Set(mode) => mode,
    };

    config.set_theme(next);
    config.save(&paths.config_dir)?;

    let mut result = CmdResult::default().with_theme(next);
    result.add_message(CmdMessage::success(format!(
        "{} Theme set to {}",
        next.icon(),
        next
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(dir: &std::path::Path) -> FolioPaths {
        FolioPaths {
            config_dir: dir.to_path_buf(),
            data_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn show_uses_system_preference_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(dir.path()), ThemeAction::Show, true).unwrap();
        assert_eq!(result.theme, Some(ThemeMode::Dark));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let p = paths(dir.path());

        let result = run(&p, ThemeAction::Toggle, false).unwrap();
        assert_eq!(result.theme, Some(ThemeMode::Dark));

        // The saved choice now wins over the system preference.
        let result = run(&p, ThemeAction::Show, false).unwrap();
        assert_eq!(result.theme, Some(ThemeMode::Dark));

        let result = run(&p, ThemeAction::Toggle, false).unwrap();
        assert_eq!(result.theme, Some(ThemeMode::Light));
    }

    #[test]
    fn set_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let p = paths(dir.path());
        run(&p, ThemeAction::Set(ThemeMode::Light), true).unwrap();
        let config = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(config.theme.as_deref(), Some("light"));
    }
}
