//! # Selection/Filter Engine
//!
//! One [`SelectionEngine`] backs one widget (the project grid, the timeline).
//! It owns the collection, the [`FilterState`] and the pinned selection, and
//! nothing else touches them.
//!
//! ## Selection Resolution
//!
//! After every collection or filter change the pin is re-resolved:
//!
//! 1. The pinned item is still visible: it stays selected.
//! 2. Otherwise the first visible item is selected **and adopted** as the new
//!    pin, so flipping a filter back and forth keeps showing the item the user
//!    is currently looking at.
//! 3. Nothing is visible: nothing is selected and the pin is left alone. An
//!    empty visible set carries no information about the pin, and widening the
//!    filter again can bring the pinned item back.
//!
//! [`SelectionEngine::select_item`] pins unconditionally, even an id that is
//! filtered out. Until a later filter change resolves it, such a pin simply
//! leaves no item displayed as active.
//!
//! ## Previews
//!
//! Hover and focus previews go through [`SelectionEngine::preview_item`], which
//! returns a view without touching the pin. Leaving the preview is just another
//! call to [`SelectionEngine::compute_view`].
//!
//! No operation here can fail: unknown tags, empty searches, empty collections
//! and out-of-range navigation are all ordinary states.

use crate::filter::{FilterState, TagFilter};
use crate::model::Item;
use crate::tags::available_tags;
use serde::Serialize;
use tracing::debug;

/// Everything the view layer needs to paint one widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub visible_items: Vec<Item>,
    pub selected_item: Option<Item>,
    pub available_tags: Vec<String>,
}

impl ViewState {
    pub fn is_selected(&self, item: &Item) -> bool {
        self.selected_item
            .as_ref()
            .is_some_and(|selected| selected.id() == item.id())
    }
}

/// Keyboard navigation direction within the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug)]
pub struct SelectionEngine {
    items: Vec<Item>,
    tags: Vec<String>,
    filter: FilterState,
    pinned_id: Option<String>,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            tags: available_tags(&[]),
            filter: FilterState::default(),
            pinned_id: None,
        }
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let mut engine = Self::new();
        engine.set_collection(items);
        engine
    }

    /// Replaces the collection wholesale. An empty list is a valid collection.
    pub fn set_collection(&mut self, items: Vec<Item>) {
        debug!(count = items.len(), "collection replaced");
        self.tags = available_tags(&items);
        self.items = items;
        self.resolve_selection();
    }

    /// Sets the active tag. Tags absent from the collection just match nothing.
    pub fn set_tag_filter(&mut self, tag: &str) {
        self.filter.active_tag = TagFilter::resolve(tag, &self.tags);
        debug!(tag = %self.filter.active_tag, "tag filter changed");
        self.resolve_selection();
    }

    /// Stores the trimmed, lower-cased search term.
    pub fn set_search_term(&mut self, raw: &str) {
        self.filter.set_search(raw);
        debug!(term = self.filter.search_term(), "search term changed");
        self.resolve_selection();
    }

    /// Pins `id` as the explicit user choice, visible or not.
    pub fn select_item(&mut self, id: &str) {
        debug!(id, "item pinned");
        self.pinned_id = Some(id.to_string());
    }

    /// Moves the pin one step within the visible list, clamped at both ends.
    pub fn move_selection(&mut self, direction: Direction) {
        let visible = self.visible();
        let Some(current) = self.selected_in(&visible) else {
            return;
        };
        let Some(position) = visible.iter().position(|item| item.id() == current.id()) else {
            return;
        };

        let next = match direction {
            Direction::Previous => position.saturating_sub(1),
            Direction::Next => (position + 1).min(visible.len() - 1),
        };
        if next != position {
            let id = visible[next].id().to_string();
            debug!(from = current.id(), to = %id, "selection moved");
            self.pinned_id = Some(id);
        }
    }

    /// The view as if `id` were selected. The pin is not modified; if `id` is
    /// not visible the regular selection is shown instead.
    pub fn preview_item(&self, id: &str) -> ViewState {
        let visible = self.visible();
        let selected = visible
            .iter()
            .find(|item| item.id() == id)
            .copied()
            .or_else(|| self.selected_in(&visible))
            .cloned();
        self.build_view(visible, selected)
    }

    /// The current view. Pure: repeated calls return identical results.
    pub fn compute_view(&self) -> ViewState {
        let visible = self.visible();
        let selected = self.selected_in(&visible).cloned();
        self.build_view(visible, selected)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn pinned_id(&self) -> Option<&str> {
        self.pinned_id.as_deref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn visible(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// A pin that is set but filtered out selects nothing; no pin at all
    /// falls back to the first visible item.
    fn selected_in<'a>(&self, visible: &[&'a Item]) -> Option<&'a Item> {
        match self.pinned_id.as_deref() {
            Some(id) => visible.iter().find(|item| item.id() == id).copied(),
            None => visible.first().copied(),
        }
    }

    fn resolve_selection(&mut self) {
        let visible = self.visible();
        let Some(first) = visible.first() else {
            return;
        };

        let pinned_visible = self
            .pinned_id
            .as_deref()
            .is_some_and(|id| visible.iter().any(|item| item.id() == id));
        if pinned_visible {
            return;
        }

        let fallback = first.id().to_string();
        debug!(
            previous = ?self.pinned_id,
            adopted = %fallback,
            "pin not visible, adopting first visible item"
        );
        self.pinned_id = Some(fallback);
    }

    fn build_view(&self, visible: Vec<&Item>, selected_item: Option<Item>) -> ViewState {
        ViewState {
            visible_items: visible.into_iter().cloned().collect(),
            selected_item,
            available_tags: self.tags.clone(),
        }
    }
}
