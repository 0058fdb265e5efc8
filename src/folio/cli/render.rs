//! # Rendering
//!
//! Turns `CmdResult` payloads into terminal text through the templates in
//! [`super::templates`] and the palettes in [`super::styles`].
//!
//! Layout (column widths, truncation, selection markers) is computed here so
//! templates only pick styles and place values.

use super::styles::{names, palette_for};
use super::templates::{
    CONFIG_TEMPLATE, SESSION_TEMPLATE, SKILLS_TEMPLATE, TAGS_TEMPLATE, VIEW_TEMPLATE,
};
use colored::Colorize;
use folio::api::{CmdMessage, MessageLevel, SessionStep, WidgetView};
use folio::config::FolioConfig;
use folio::model::{CollectionKind, Item};
use folio::skills::{SkillArea, SkillPanel};
use folio::theme::ThemeMode;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const META_WIDTH: usize = 28;
pub const SELECTED_MARKER: &str = "▸";
const PROJECT_CARD_KIND: &str = "Project";

#[derive(Serialize)]
struct TagChip {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct RowData {
    marker: &'static str,
    title: String,
    padding: String,
    meta: String,
    style: &'static str,
}

#[derive(Serialize)]
struct CardData {
    kind: String,
    title: String,
    period: String,
    description: String,
    highlights: Vec<String>,
    link: Option<String>,
}

#[derive(Serialize)]
struct ViewData {
    heading: &'static str,
    tags: Vec<TagChip>,
    search: String,
    empty: bool,
    empty_message: String,
    rows: Vec<RowData>,
    card: Option<CardData>,
}

#[derive(Serialize)]
struct StepData {
    label: String,
    body: String,
}

#[derive(Serialize)]
struct SkillData {
    key: &'static str,
    heading: &'static str,
    summary: &'static str,
    highlights: &'static [&'static str],
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(mode: ThemeMode, use_color: bool) -> Self {
        let palette = palette_for(mode);
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string());
            palette.apply(&name, &text, use_color)
        });

        for (name, source) in [
            ("view", VIEW_TEMPLATE),
            ("session", SESSION_TEMPLATE),
            ("tags", TAGS_TEMPLATE),
            ("skills", SKILLS_TEMPLATE),
            ("config", CONFIG_TEMPLATE),
        ] {
            if let Err(e) = env.add_template(name, source) {
                tracing::error!(template = name, error = %e, "invalid template");
            }
        }

        Self { env }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn view(&self, view: &WidgetView) -> String {
        self.render("view", &view_data(view))
    }

    pub fn session(&self, steps: &[SessionStep]) -> String {
        let steps: Vec<StepData> = steps
            .iter()
            .map(|step| StepData {
                label: format!("» {}", step.label),
                body: self.view(&step.view),
            })
            .collect();
        self.render("session", &serde_json::json!({ "steps": steps }))
    }

    pub fn tags(&self, tags: &[String]) -> String {
        self.render("tags", &serde_json::json!({ "tags": tags }))
    }

    pub fn skills(&self, skills: &[(SkillArea, SkillPanel)]) -> String {
        let skills: Vec<SkillData> = skills
            .iter()
            .map(|(area, panel)| SkillData {
                key: area.key(),
                heading: panel.heading,
                summary: panel.summary,
                highlights: panel.highlights,
            })
            .collect();
        self.render("skills", &serde_json::json!({ "skills": skills }))
    }

    pub fn config(&self, config: &FolioConfig) -> String {
        let entries: Vec<ConfigEntry> = config
            .list_all()
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect();
        self.render("config", &serde_json::json!({ "entries": entries }))
    }
}

fn view_data(view: &WidgetView) -> ViewData {
    let state = &view.state;
    let active = view.filter.active_tag.as_str();

    let mut tags: Vec<TagChip> = state
        .available_tags
        .iter()
        .map(|tag| tag_chip(tag, tag == active))
        .collect();
    if !state.available_tags.iter().any(|tag| tag == active) {
        tags.push(tag_chip(active, true));
    }

    let rows = state
        .visible_items
        .iter()
        .map(|item| row_data(item, view.kind, state.is_selected(item)))
        .collect();

    ViewData {
        heading: heading(view.kind),
        tags,
        search: view.filter.search_term().to_string(),
        empty: state.visible_items.is_empty(),
        empty_message: format!("No {} to show.", view.kind),
        rows,
        card: state
            .selected_item
            .as_ref()
            .map(|item| card_data(item, view.kind)),
    }
}

fn heading(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Projects => "Projects",
        CollectionKind::Timeline => "Timeline",
    }
}

fn tag_chip(tag: &str, active: bool) -> TagChip {
    if active {
        TagChip {
            text: format!("[{}]", tag),
            style: names::TAG_ACTIVE,
        }
    } else {
        TagChip {
            text: tag.to_string(),
            style: names::TAG,
        }
    }
}

fn row_data(item: &Item, kind: CollectionKind, selected: bool) -> RowData {
    let meta = match kind {
        CollectionKind::Projects => item.tags().join(", "),
        CollectionKind::Timeline => {
            let card = item.detail_card();
            format!("{} {}", card.kind, card.period).trim().to_string()
        }
    };
    let meta = truncate_to_width(&meta, META_WIDTH);

    // marker, space before the title, space before the meta column
    let available = LINE_WIDTH.saturating_sub(SELECTED_MARKER.width() + 2 + META_WIDTH);
    let title = truncate_to_width(item.title(), available);
    let padding = " ".repeat(available.saturating_sub(title.width()));

    RowData {
        marker: if selected { SELECTED_MARKER } else { " " },
        title,
        padding,
        meta,
        style: if selected {
            names::SELECTED
        } else {
            names::REGULAR
        },
    }
}

fn card_data(item: &Item, kind: CollectionKind) -> CardData {
    let card = item.detail_card();
    CardData {
        kind: match kind {
            CollectionKind::Projects => PROJECT_CARD_KIND.to_string(),
            CollectionKind::Timeline => card.kind,
        },
        title: card.title,
        period: card.period,
        description: card.description,
        highlights: item.highlights().to_vec(),
        link: item.link().map(str::to_string),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}
