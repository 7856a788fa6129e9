use anyhow::Result;

use crate::settings::ServerConfig;
use crate::store::DocumentStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: DocumentStore,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let store = DocumentStore::new(config.data_path());

        // Verify the events document can be read at startup
        store.read_events()?;

        Ok(AppState { store })
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }
}
