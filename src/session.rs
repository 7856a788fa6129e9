//! Session state driving the agenda and its persistence.
//!
//! The session owns the in-memory event list for one CLI invocation. Every
//! successful mutation is followed by a wholesale write of the full list to
//! the server. A failed write is reported on stderr and the in-memory
//! change is kept; the store catches up on the next successful write.

use evcal_core::{Agenda, Event, EvcalResult};

use crate::client::Client;

pub struct Session {
    client: Client,
    agenda: Agenda,
}

impl Session {
    /// Load the persisted events into a fresh session.
    ///
    /// A failed fetch degrades to an empty agenda: the session still works,
    /// it just starts blank. No retry.
    pub async fn load(client: Client) -> Self {
        let agenda = match client.fetch_events().await {
            Ok(events) => Agenda::from_events(events),
            Err(err) => {
                eprintln!("warning: could not load events: {err:#}");
                Agenda::new()
            }
        };

        Session { client, agenda }
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    /// Insert a drafted event and persist; returns the assigned id.
    pub async fn add(&mut self, draft: Event) -> EvcalResult<String> {
        let id = self.agenda.insert(draft)?;
        self.persist().await;
        Ok(id)
    }

    /// Replace an existing event and persist.
    pub async fn edit(&mut self, id: &str, replacement: Event) -> EvcalResult<()> {
        self.agenda.update(id, replacement)?;
        self.persist().await;
        Ok(())
    }

    /// Remove an event and persist; returns the removed event.
    pub async fn delete(&mut self, id: &str) -> EvcalResult<Event> {
        let removed = self.agenda.remove(id)?;
        self.persist().await;
        Ok(removed)
    }

    async fn persist(&self) {
        if let Err(err) = self.client.submit_events(self.agenda.events()).await {
            eprintln!("warning: failed to persist events: {err:#}");
        }
    }
}
