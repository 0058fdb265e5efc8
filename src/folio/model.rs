use serde::{Deserialize, Serialize};

/// Which widget a collection feeds. Each kind gets its own engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKind {
    Projects,
    Timeline,
}

impl CollectionKind {
    pub fn noun(&self) -> &'static str {
        match self {
            CollectionKind::Projects => "projects",
            CollectionKind::Timeline => "timeline",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            CollectionKind::Projects => "projects.json",
            CollectionKind::Timeline => "timeline.json",
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

impl std::str::FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "projects" | "project" => Ok(CollectionKind::Projects),
            "timeline" => Ok(CollectionKind::Timeline),
            other => Err(format!("Unknown collection: {}", other)),
        }
    }
}

/// A displayable entry: a project card or a timeline entry.
///
/// Fields are read through accessors and set only by the builder methods,
/// which rebuild `searchable_text` whenever an indexed field changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: String,
    title: String,
    tags: Vec<String>,
    description: String,
    highlights: Vec<String>,
    link: Option<String>,
    /// Timeline only: the single category used by the timeline filter.
    group_key: Option<String>,
    /// Timeline only: display payload handed back verbatim on selection.
    period: Option<String>,
    #[serde(skip)]
    searchable_text: String,
}

impl Item {
    pub fn project(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        let mut item = Self {
            id: id.into(),
            title: title.into(),
            tags: normalize_tags(tags),
            description: String::new(),
            highlights: Vec::new(),
            link: None,
            group_key: None,
            period: None,
            searchable_text: String::new(),
        };
        item.reindex();
        item
    }

    pub fn timeline(
        id: impl Into<String>,
        title: impl Into<String>,
        group_key: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        let group_key = group_key.into();
        let mut item = Self::project(id, title, Vec::new());
        item.group_key = if group_key.trim().is_empty() {
            None
        } else {
            Some(group_key)
        };
        item.period = Some(period.into());
        item.reindex();
        item
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = normalize_tags(tags);
        self.reindex();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self.reindex();
        self
    }

    pub fn with_highlights(mut self, highlights: Vec<String>) -> Self {
        self.highlights = highlights;
        self.reindex();
        self
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn group_key(&self) -> Option<&str> {
        self.group_key.as_deref()
    }

    pub fn period(&self) -> Option<&str> {
        self.period.as_deref()
    }

    /// Lower-cased haystack used by the search predicate.
    pub fn searchable_text(&self) -> &str {
        &self.searchable_text
    }

    /// Tags followed by the group key, without duplicates.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        let group = self
            .group_key
            .as_deref()
            .filter(|g| !self.tags.iter().any(|t| t == g));
        self.tags.iter().map(String::as_str).chain(group)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.tags.iter().any(|t| t == label) || self.group_key.as_deref() == Some(label)
    }

    pub fn detail_card(&self) -> DetailCard {
        DetailCard {
            kind: self
                .group_key
                .clone()
                .unwrap_or_else(|| DEFAULT_DETAIL_KIND.to_string()),
            title: self.title.clone(),
            period: self.period.clone().unwrap_or_default(),
            description: self.description.clone(),
        }
    }

    fn reindex(&mut self) {
        let mut parts: Vec<&str> = vec![self.title.as_str()];
        parts.extend(self.tags.iter().map(String::as_str));
        if let Some(group) = &self.group_key {
            parts.push(group);
        }
        if let Some(period) = &self.period {
            parts.push(period);
        }
        parts.push(&self.description);
        parts.extend(self.highlights.iter().map(String::as_str));

        self.searchable_text = parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
    }
}

const DEFAULT_DETAIL_KIND: &str = "Timeline";

/// The detail panel shown for the selected timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailCard {
    pub kind: String,
    pub title: String,
    pub period: String,
    pub description: String,
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}
