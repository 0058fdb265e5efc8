//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! folio operation, whichever UI is driving it.
//!
//! The facade dispatches to `commands/*.rs`, normalizes raw inputs (tag names,
//! skill keys, theme words) and returns `Result<CmdResult>`. It does no I/O of
//! its own and never formats output.
//!
//! `FolioApi<S: ItemSource>` is generic over where collections come from:
//! `FolioApi<FileSource>` in the CLI, `FolioApi<InMemorySource>` in tests.
//!
//! Tests here only check dispatch. Behaviour is tested in the command modules.

use crate::commands;
use crate::contact::ContactForm;
use crate::error::{FolioError, Result};
use crate::model::CollectionKind;
use crate::store::ItemSource;
use crate::theme::ThemeMode;

pub use crate::commands::browse::BrowseOptions;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::theme::ThemeAction;
pub use crate::commands::{
    CmdMessage, CmdResult, FolioPaths, MessageLevel, SessionStep, WidgetView,
};

pub struct FolioApi<S: ItemSource> {
    source: S,
    paths: FolioPaths,
}

impl<S: ItemSource> FolioApi<S> {
    pub fn new(source: S, paths: FolioPaths) -> Self {
        Self { source, paths }
    }

    /// Renders one widget after applying the given selection, filter and preview.
    pub fn browse(&self, kind: CollectionKind, options: &BrowseOptions) -> Result<CmdResult> {
        commands::browse::run(&self.source, kind, options)
    }

    pub fn tags(&self, kind: CollectionKind) -> Result<CmdResult> {
        commands::tags::run(&self.source, kind)
    }

    pub fn session(&self, kind: CollectionKind, script: &str) -> Result<CmdResult> {
        commands::session::run(&self.source, kind, script)
    }

    pub fn skills(&self, key: Option<&str>) -> Result<CmdResult> {
        commands::skills::run(key.map(str::trim).filter(|k| !k.is_empty()))
    }

    /// `word` is `None` to show the theme, `"toggle"`, or a theme name.
    pub fn theme(&self, word: Option<&str>, system_prefers_dark: bool) -> Result<CmdResult> {
        let action = parse_theme_action(word)?;
        commands::theme::run(&self.paths, action, system_prefers_dark)
    }

    pub fn contact(&self, form: &ContactForm) -> Result<CmdResult> {
        commands::contact::run(form)
    }

    /// The address behind a contact link. `text` is the link's visible text,
    /// used when `href` is not a `mailto:` link.
    pub fn email(&self, href: &str, text: Option<&str>) -> Result<CmdResult> {
        commands::email::run(href, text.unwrap_or_default())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

fn parse_theme_action(word: Option<&str>) -> Result<ThemeAction> {
    match word.map(str::trim) {
        None | Some("") => Ok(ThemeAction::Show),
        Some("toggle") => Ok(ThemeAction::Toggle),
        Some(other) => other
            .parse::<ThemeMode>()
            .map(ThemeAction::Set)
            .map_err(FolioError::Api),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillArea;
    use crate::store::memory::fixtures;

    fn api(dir: &std::path::Path) -> FolioApi<crate::store::memory::InMemorySource> {
        FolioApi::new(
            fixtures::portfolio(),
            FolioPaths {
                config_dir: dir.to_path_buf(),
                data_dir: dir.to_path_buf(),
            },
        )
    }

    #[test]
    fn browse_dispatches_with_options() {
        let dir = tempfile::tempdir().unwrap();
        let options = BrowseOptions {
            tag: Some("Web".into()),
            ..Default::default()
        };
        let result = api(dir.path())
            .browse(CollectionKind::Projects, &options)
            .unwrap();
        let view = result.view.unwrap();
        assert_eq!(view.kind, CollectionKind::Projects);
        assert_eq!(view.state.visible_items.len(), 1);
    }

    #[test]
    fn tags_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path()).tags(CollectionKind::Projects).unwrap();
        assert_eq!(result.tags[0], "All");
    }

    #[test]
    fn session_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path())
            .session(CollectionKind::Timeline, "view\nnext")
            .unwrap();
        assert_eq!(result.steps.len(), 2);
    }

    #[test]
    fn blank_skill_key_lists_everything() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path()).skills(Some("  ")).unwrap();
        assert_eq!(result.skills.len(), SkillArea::all().len());
    }

    #[test]
    fn email_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path())
            .email("mailto:me@example.com", None)
            .unwrap();
        assert_eq!(result.email.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn theme_words_are_parsed() {
        assert_eq!(parse_theme_action(None).unwrap(), ThemeAction::Show);
        assert_eq!(
            parse_theme_action(Some("toggle")).unwrap(),
            ThemeAction::Toggle
        );
        assert_eq!(
            parse_theme_action(Some("dark")).unwrap(),
            ThemeAction::Set(ThemeMode::Dark)
        );
        assert!(matches!(
            parse_theme_action(Some("sepia")),
            Err(FolioError::Api(_))
        ));
    }

    #[test]
    fn theme_dispatch_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path()).theme(Some("light"), true).unwrap();
        assert_eq!(result.theme, Some(ThemeMode::Light));
        assert!(dir.path().join("config.json").exists());
    }
}
