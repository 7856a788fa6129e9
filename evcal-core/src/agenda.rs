//! The in-memory event list and its mutation rules.
//!
//! `Agenda` is the single owner of a session's events. It assigns ids,
//! keeps insertion order, and guarantees that edits and removals never
//! disturb the positions of the other events. Persistence is the caller's
//! concern: after each successful mutation the caller writes the full list
//! out wholesale.

use crate::error::{EvcalError, EvcalResult};
use crate::event::Event;

/// The ordered event list for one session.
#[derive(Debug, Default)]
pub struct Agenda {
    events: Vec<Event>,
}

impl Agenda {
    /// An empty agenda.
    pub fn new() -> Self {
        Agenda { events: Vec::new() }
    }

    /// Build an agenda from a previously persisted list, preserving order.
    pub fn from_events(events: Vec<Event>) -> Self {
        Agenda { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up an event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id.as_deref() == Some(id))
    }

    /// The id the next inserted event will receive: one past the highest
    /// numeric id in the list. Missing and non-numeric ids are ignored.
    ///
    /// Recomputed from the list on every call rather than carried as a
    /// separate counter, so it cannot drift from the data.
    pub fn next_id(&self) -> u64 {
        self.events
            .iter()
            .filter_map(|e| e.id.as_deref())
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .map_or(0, |highest| highest + 1)
    }

    /// Insert a drafted event at the end of the list, assigning it a fresh
    /// id. Returns the assigned id.
    ///
    /// Drafts whose start date lies after their end date are rejected and
    /// the list is untouched.
    pub fn insert(&mut self, mut event: Event) -> EvcalResult<String> {
        if event.start > event.end {
            return Err(EvcalError::InvalidDateRange {
                start: event.start,
                end: event.end,
            });
        }

        let id = self.next_id().to_string();
        event.id = Some(id.clone());
        self.events.push(event);
        Ok(id)
    }

    /// Replace the event with the given id in place.
    ///
    /// The replacement's id is forced to `id`, whatever the caller put
    /// there, so an edit can never re-key an event. Position and list
    /// length are unchanged. The date range is not re-validated here:
    /// `start <= end` is a creation-time invariant only.
    pub fn update(&mut self, id: &str, mut replacement: Event) -> EvcalResult<()> {
        let Some(slot) = self.events.iter_mut().find(|e| e.id.as_deref() == Some(id)) else {
            return Err(EvcalError::EventNotFound(id.to_string()));
        };

        replacement.id = Some(id.to_string());
        *slot = replacement;
        Ok(())
    }

    /// Remove the event with the given id, returning it. The remaining
    /// events keep their relative order.
    pub fn remove(&mut self, id: &str) -> EvcalResult<Event> {
        let Some(index) = self.events.iter().position(|e| e.id.as_deref() == Some(id)) else {
            return Err(EvcalError::EventNotFound(id.to_string()));
        };

        Ok(self.events.remove(index))
    }
}
