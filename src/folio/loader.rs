//! JSON records for the two collections and their mapping to [`Item`]s.
//!
//! Projects:
//!
//! ```json
//! [{ "title": "Ledger", "tags": ["Rust", "CLI"], "description": "...",
//!    "highlights": ["..."], "link": "https://...", "id": "optional" }]
//! ```
//!
//! Timeline:
//!
//! ```json
//! [{ "title": "Engineer at Acme", "type": "work", "period": "2021 - 2023",
//!    "description": "...", "id": "optional" }]
//! ```
//!
//! Records without an `id` get one derived from the title.

use crate::error::Result;
use crate::model::{CollectionKind, Item};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub fn parse(kind: CollectionKind, json: &str) -> Result<Vec<Item>> {
    match kind {
        CollectionKind::Projects => parse_projects(json),
        CollectionKind::Timeline => parse_timeline(json),
    }
}

pub fn parse_projects(json: &str) -> Result<Vec<Item>> {
    let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
    let mut ids = IdAllocator::default();

    Ok(records
        .into_iter()
        .map(|r| {
            let id = ids.assign(r.id.as_deref(), &r.title);
            Item::project(id, r.title, r.tags)
                .with_description(r.description)
                .with_highlights(r.highlights)
                .with_link(r.link.or(r.repo))
        })
        .collect())
}

pub fn parse_timeline(json: &str) -> Result<Vec<Item>> {
    let records: Vec<TimelineRecord> = serde_json::from_str(json)?;
    let mut ids = IdAllocator::default();

    Ok(records
        .into_iter()
        .map(|r| {
            let id = ids.assign(r.id.as_deref(), &r.title);
            Item::timeline(id, r.title, r.kind, r.period)
                .with_tags(r.tags)
                .with_description(r.description)
        })
        .collect())
}

/// Hands out ids that are unique within one collection.
#[derive(Default)]
struct IdAllocator {
    taken: HashSet<String>,
}

impl IdAllocator {
    fn assign(&mut self, explicit: Option<&str>, title: &str) -> String {
        let base = match explicit.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => slugify(title),
        };

        let mut candidate = base.clone();
        let mut n = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{}-{}", base, n);
            n += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Lower-case ASCII alphanumerics joined by single hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("item");
    }
    slug
}
