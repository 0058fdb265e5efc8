use super::ItemSource;
use crate::error::{FolioError, Result};
use crate::loader;
use crate::model::{CollectionKind, Item};
use std::collections::HashMap;

/// Holds raw JSON per collection so tests go through the same parsing path
/// as files do.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    documents: HashMap<CollectionKind, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, kind: CollectionKind, json: impl Into<String>) -> Self {
        self.documents.insert(kind, json.into());
        self
    }
}

impl ItemSource for InMemorySource {
    fn load(&self, kind: CollectionKind) -> Result<Vec<Item>> {
        let json = self.documents.get(&kind).ok_or_else(|| {
            FolioError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no {} document", kind),
            ))
        })?;
        loader::parse(kind, json)
    }

    fn describe(&self, kind: CollectionKind) -> String {
        format!("memory:{}", kind)
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub const PROJECTS: &str = r#"[
        {"id": "ledger", "title": "Ledger", "tags": ["Rust", "CLI"],
         "description": "Plain-text accounting backend"},
        {"id": "storefront", "title": "Storefront", "tags": ["TypeScript", "Web"],
         "description": "Headless shop frontend"},
        {"id": "pipeline", "title": "Pipeline", "tags": ["Rust", "Data"],
         "description": "Streaming ETL jobs", "highlights": ["Backfills 2TB nightly"]}
    ]"#;

    pub const TIMELINE: &str = r#"[
        {"id": "acme", "title": "Senior Engineer, Acme", "type": "work",
         "period": "2022 - now", "description": "Platform team lead"},
        {"id": "initech", "title": "Engineer, Initech", "type": "work",
         "period": "2019 - 2022", "description": "Billing services"},
        {"id": "uni", "title": "BSc Computer Science", "type": "education",
         "period": "2015 - 2019", "description": "Distributed systems thesis"}
    ]"#;

    pub fn portfolio() -> InMemorySource {
        InMemorySource::new()
            .with_document(CollectionKind::Projects, PROJECTS)
            .with_document(CollectionKind::Timeline, TIMELINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_registered_documents() {
        let source = fixtures::portfolio();
        assert_eq!(source.load(CollectionKind::Projects).unwrap().len(), 3);
        assert_eq!(source.load(CollectionKind::Timeline).unwrap().len(), 3);
    }

    #[test]
    fn missing_document_is_not_found() {
        let source = InMemorySource::new();
        assert!(matches!(
            source.load(CollectionKind::Projects),
            Err(FolioError::Io(_))
        ));
    }
}
