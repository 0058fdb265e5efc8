//! # Input Events
//!
//! The view layer's side of the input boundary: raw user actions, one per
//! line, translated into engine calls.
//!
//! ```text
//! # narrow to Rust projects, then look around
//! tag Rust
//! search  ledger
//! select pipeline
//! preview storefront
//! leave
//! next
//! prev
//! view
//! ```
//!
//! `search` with no text clears the search. Blank lines and `#` comments are
//! skipped.

use crate::engine::{Direction, SelectionEngine, ViewState};
use crate::error::{FolioError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Tag(String),
    Search(String),
    Select(String),
    Preview(String),
    Leave,
    Move(Direction),
    View,
}

impl Event {
    /// Parses one non-comment line. `None` for blank lines and comments.
    pub fn parse_line(line: &str) -> std::result::Result<Option<Self>, String> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (verb, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        let needs_arg = |event: fn(String) -> Event| {
            if arg.is_empty() {
                Err(format!("'{}' needs an argument", verb))
            } else {
                Ok(event(arg.to_string()))
            }
        };

        let event = match verb {
            "tag" | "filter" => needs_arg(Event::Tag)?,
            "search" => Event::Search(arg.to_string()),
            "select" | "click" => needs_arg(Event::Select)?,
            "preview" | "hover" | "focus" => needs_arg(Event::Preview)?,
            "leave" | "blur" => Event::Leave,
            "next" | "down" => Event::Move(Direction::Next),
            "prev" | "previous" | "up" => Event::Move(Direction::Previous),
            "view" => Event::View,
            other => return Err(format!("unknown event '{}'", other)),
        };
        Ok(Some(event))
    }

    pub fn label(&self) -> String {
        match self {
            Event::Tag(tag) => format!("tag {}", tag),
            Event::Search(term) if term.is_empty() => "search (cleared)".to_string(),
            Event::Search(term) => format!("search {}", term),
            Event::Select(id) => format!("select {}", id),
            Event::Preview(id) => format!("preview {}", id),
            Event::Leave => "leave".to_string(),
            Event::Move(Direction::Next) => "next".to_string(),
            Event::Move(Direction::Previous) => "prev".to_string(),
            Event::View => "view".to_string(),
        }
    }
}

/// Parses a whole script. Errors carry the 1-based line number.
pub fn parse_script(script: &str) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        match Event::parse_line(line) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {}
            Err(message) => {
                return Err(FolioError::Event {
                    line: idx + 1,
                    message,
                })
            }
        }
    }
    Ok(events)
}

/// Drives one engine with a stream of events.
pub struct Session {
    engine: SelectionEngine,
}

impl Session {
    pub fn new(engine: SelectionEngine) -> Self {
        Self { engine }
    }

    /// Applies the event and returns what the widget shows afterwards.
    /// A preview shows the previewed item; everything else shows the pin.
    pub fn apply(&mut self, event: &Event) -> ViewState {
        match event {
            Event::Tag(tag) => self.engine.set_tag_filter(tag),
            Event::Search(term) => self.engine.set_search_term(term),
            Event::Select(id) => self.engine.select_item(id),
            Event::Preview(id) => return self.engine.preview_item(id),
            Event::Move(direction) => self.engine.move_selection(*direction),
            Event::Leave | Event::View => {}
        }
        self.engine.compute_view()
    }

    pub fn run<'a>(
        &'a mut self,
        events: &'a [Event],
    ) -> impl Iterator<Item = (&'a Event, ViewState)> + 'a {
        events.iter().map(move |event| (event, self.apply(event)))
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }
}
