use crate::commands::{CmdMessage, CmdResult, WidgetView};
use crate::engine::SelectionEngine;
use crate::model::{CollectionKind, Item};
use crate::store::ItemSource;
use tracing::warn;

/// Loads a collection, turning any failure into an empty one plus a warning
/// on `result`. The engine never sees load errors.
pub fn load_collection<S: ItemSource>(
    source: &S,
    kind: CollectionKind,
    result: &mut CmdResult,
) -> Vec<Item> {
    match source.load(kind) {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, location = %source.describe(kind), "could not load {}", kind);
            result.add_message(CmdMessage::warning(format!(
                "Could not load {} from {}.",
                kind,
                source.describe(kind)
            )));
            Vec::new()
        }
    }
}

pub fn engine_for<S: ItemSource>(
    source: &S,
    kind: CollectionKind,
    result: &mut CmdResult,
) -> SelectionEngine {
    SelectionEngine::with_items(load_collection(source, kind, result))
}

pub fn widget_view(engine: &SelectionEngine, kind: CollectionKind) -> WidgetView {
    WidgetView {
        kind,
        filter: engine.filter().clone(),
        state: engine.compute_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::{fixtures, InMemorySource};

    #[test]
    fn loads_items_without_messages() {
        let mut result = CmdResult::default();
        let items = load_collection(&fixtures::portfolio(), CollectionKind::Projects, &mut result);
        assert_eq!(items.len(), 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn failed_load_becomes_empty_collection_with_warning() {
        let source = InMemorySource::new().with_document(CollectionKind::Projects, "[{oops");
        let mut result = CmdResult::default();
        let engine = engine_for(&source, CollectionKind::Projects, &mut result);

        assert!(engine.is_empty());
        let view = engine.compute_view();
        assert_eq!(view.selected_item, None);
        assert_eq!(view.available_tags, vec!["All"]);

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0]
            .content
            .contains("Could not load projects"));
    }
}
