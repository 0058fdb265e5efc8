use crate::config::FolioConfig;
use crate::contact::Submission;
use crate::engine::ViewState;
use crate::filter::FilterState;
use crate::model::CollectionKind;
use crate::skills::{SkillArea, SkillPanel};
use crate::theme::ThemeMode;
use std::path::PathBuf;

pub mod browse;
pub mod config;
pub mod contact;
pub mod email;
pub mod helpers;
pub mod session;
pub mod skills;
pub mod tags;
pub mod theme;

#[derive(Debug, Clone)]
pub struct FolioPaths {
    /// Where `config.json` lives
    pub config_dir: PathBuf,
    /// Where `projects.json` and `timeline.json` are looked up by default
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One widget's render state together with the filter that produced it.
#[derive(Debug, Clone)]
pub struct WidgetView {
    pub kind: CollectionKind,
    pub filter: FilterState,
    pub state: ViewState,
}

/// The view after one scripted event.
#[derive(Debug, Clone)]
pub struct SessionStep {
    pub label: String,
    pub view: WidgetView,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub view: Option<WidgetView>,
    pub steps: Vec<SessionStep>,
    pub tags: Vec<String>,
    pub skills: Vec<(SkillArea, SkillPanel)>,
    pub submission: Option<Submission>,
    pub email: Option<String>,
    pub theme: Option<ThemeMode>,
    pub config: Option<FolioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self, view: WidgetView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_skills(mut self, skills: Vec<(SkillArea, SkillPanel)>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = Some(config);
        self
    }
}
