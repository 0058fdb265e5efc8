use super::ItemSource;
use crate::error::Result;
use crate::loader;
use crate::model::{CollectionKind, Item};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct FileSource {
    data_dir: PathBuf,
    projects_file: Option<PathBuf>,
    timeline_file: Option<PathBuf>,
}

impl FileSource {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            projects_file: None,
            timeline_file: None,
        }
    }

    pub fn with_file(mut self, kind: CollectionKind, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            match kind {
                CollectionKind::Projects => self.projects_file = path,
                CollectionKind::Timeline => self.timeline_file = path,
            }
        }
        self
    }

    /// Explicit files are used as given; otherwise the default file name in
    /// the data directory.
    pub fn path_for(&self, kind: CollectionKind) -> PathBuf {
        let explicit = match kind {
            CollectionKind::Projects => &self.projects_file,
            CollectionKind::Timeline => &self.timeline_file,
        };
        explicit
            .clone()
            .unwrap_or_else(|| self.data_dir.join(kind.default_file_name()))
    }
}

impl ItemSource for FileSource {
    fn load(&self, kind: CollectionKind) -> Result<Vec<Item>> {
        let path = self.path_for(kind);
        debug!(path = %path.display(), %kind, "loading collection");
        let content = fs::read_to_string(&path)?;
        loader::parse(kind, &content)
    }

    fn describe(&self, kind: CollectionKind) -> String {
        self.path_for(kind).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_default_file_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("projects.json"),
            r#"[{"title": "Ledger", "tags": ["Rust"]}]"#,
        )
        .unwrap();

        let source = FileSource::new(dir.path().to_path_buf());
        let items = source.load(CollectionKind::Projects).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), "ledger");
    }

    #[test]
    fn explicit_file_overrides_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("career.json");
        fs::write(
            &custom,
            r#"[{"title": "Acme", "type": "work", "period": "2020"}]"#,
        )
        .unwrap();

        let source = FileSource::new(PathBuf::from("/nonexistent"))
            .with_file(CollectionKind::Timeline, Some(custom.clone()));
        assert_eq!(source.path_for(CollectionKind::Timeline), custom);
        assert_eq!(source.load(CollectionKind::Timeline).unwrap().len(), 1);
        assert_eq!(
            source.path_for(CollectionKind::Projects),
            PathBuf::from("/nonexistent/projects.json")
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().to_path_buf());
        let err = source.load(CollectionKind::Projects).unwrap_err();
        assert!(matches!(err, crate::error::FolioError::Io(_)));
    }
}
