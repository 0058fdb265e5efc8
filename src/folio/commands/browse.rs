use crate::commands::helpers::{engine_for, widget_view};
use crate::commands::{CmdMessage, CmdResult, WidgetView};
use crate::error::Result;
use crate::model::CollectionKind;
use crate::store::ItemSource;

/// User input for one render of a widget. Applied in the order a user would
/// produce it: pick an item, then narrow the list, then hover.
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    pub select: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub preview: Option<String>,
}

pub fn run<S: ItemSource>(
    source: &S,
    kind: CollectionKind,
    options: &BrowseOptions,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut engine = engine_for(source, kind, &mut result);

    if let Some(id) = &options.select {
        if !engine.items().iter().any(|item| item.id() == id) {
            result.add_message(CmdMessage::warning(format!(
                "No {} entry with id '{}'.",
                kind, id
            )));
        }
        engine.select_item(id);
    }
    if let Some(tag) = &options.tag {
        engine.set_tag_filter(tag);
    }
    if let Some(term) = &options.search {
        engine.set_search_term(term);
    }

    let view = match &options.preview {
        Some(id) => WidgetView {
            kind,
            filter: engine.filter().clone(),
            state: engine.preview_item(id),
        },
        None => widget_view(&engine, kind),
    };

    if view.state.visible_items.is_empty() && !engine.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} match the current filter.",
            kind
        )));
    }

    Ok(result.with_view(view))
}
