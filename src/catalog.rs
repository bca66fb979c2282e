use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// One catalog entry from the scraped courses.json. The scraper emits more
/// fields than the UI needs; unknown ones are ignored on load.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRecord {
    pub course: String,
    pub catalog_number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub num_credits: String,
    #[serde(default)]
    pub description: String,
}

/// Display text for a record, e.g. "CS 202". Used both for suggestion
/// matching and as the default block label.
pub fn display_text(record: &CourseRecord) -> String {
    format!("{} {}", record.course, record.catalog_number)
}

/// The static course catalog, loaded once and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CourseRecord>,
}

impl Catalog {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read catalog file {}", path.display()))?;
        let records: Vec<CourseRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("parse catalog file {}", path.display()))?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }
}

/// Returns up to `limit` records, in catalog order, whose display text
/// contains `query` as a case-insensitive substring. An empty or
/// all-whitespace query clears the suggestions rather than matching
/// everything.
pub fn suggest<'a>(query: &str, records: &'a [CourseRecord], limit: usize) -> Vec<&'a CourseRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| display_text(r).to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}
