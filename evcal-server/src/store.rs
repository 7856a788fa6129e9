//! The flat-file JSON document holding the event list.
//!
//! One document, one top-level `events` array. Writes replace the document
//! wholesale: the persisted list after a write equals exactly the list
//! passed in, never the union of old and new content.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use evcal_core::Event;

#[derive(Serialize, Deserialize)]
struct Document {
    events: Vec<Event>,
}

/// Handle to the events document on disk.
#[derive(Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: PathBuf) -> Self {
        DocumentStore { path }
    }

    /// Read the full event list. A document that has never been written
    /// reads as an empty list.
    pub fn read_events(&self) -> Result<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let document: Document = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        Ok(document.events)
    }

    /// Replace the stored event list with `events` (atomic write).
    pub fn replace_events(&self, events: Vec<Event>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&Document { events })?;

        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, content).with_context(|| format!("Failed to write {}", temp.display()))?;
        fs::rename(&temp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use evcal_core::Category;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_in(dir: &TempDir) -> DocumentStore {
        DocumentStore::new(dir.path().join("events.json"))
    }

    fn event(id: &str, title: &str) -> Event {
        let mut event = Event::new(title, day(2024, 5, 1), day(2024, 5, 3), Category::Meeting);
        event.id = Some(id.to_string());
        event
    }

    #[test]
    fn an_unwritten_document_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).read_events().unwrap(), vec![]);
    }

    #[test]
    fn replace_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let events = vec![event("0", "Trip"), event("1", "Sports day")];

        store.replace_events(events.clone()).unwrap();
        assert_eq!(store.read_events().unwrap(), events);
    }

    #[test]
    fn replace_overwrites_rather_than_appends() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .replace_events(vec![event("0", "Trip"), event("1", "Sports day")])
            .unwrap();
        store.replace_events(vec![event("2", "Concert")]).unwrap();

        assert_eq!(store.read_events().unwrap(), vec![event("2", "Concert")]);
    }

    #[test]
    fn rewriting_what_was_read_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.replace_events(vec![event("0", "Trip")]).unwrap();

        let before = fs::read_to_string(dir.path().join("events.json")).unwrap();
        let fetched = store.read_events().unwrap();
        store.replace_events(fetched).unwrap();
        let after = fs::read_to_string(dir.path().join("events.json")).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn document_layout_is_a_single_events_array() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.replace_events(vec![event("0", "Trip")]).unwrap();

        let content = fs::read_to_string(dir.path().join("events.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["events"].as_array().unwrap().len(), 1);
    }
}
