//! Persisted assistant configuration: backend URL, user id and chat id.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` builds one `ConfigStore`, wraps it in an `RwSignal` and
//! provides it as context; pages read it for display and mutate it only
//! through `RwSignal::update`. The chat endpoint consumed by the assistant
//! backend integration is `ConfigStore::api_url`.
//!
//! PERSISTENCE
//! ===========
//! The full `{ baseUrl, userId, chatId }` triple is written as JSON under
//! `STORAGE_KEY` after every update. On load only `baseUrl` and `userId` are
//! read back; the chat id is always regenerated so each page load starts a
//! new assistant session.
//!
//! ERROR HANDLING
//! ==============
//! Malformed persisted data is logged and replaced by defaults. Callers see
//! which path was taken through `LoadOutcome`, never an error.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::util::clock::{Clock, SystemClock};
use crate::util::storage::{self, BrowserStorage, KeyValueStore, StorageError};

/// Local storage key holding the persisted configuration.
pub const STORAGE_KEY: &str = "milk-tea-config";

/// Backend address used until the user configures one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:10008";

/// Path of the assistant chat endpoint, appended to the base URL.
pub const API_PATH: &str = "/api/assistant/chat";

/// Current configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    pub base_url: String,
    pub user_id: String,
    pub chat_id: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_id: String::new(),
            chat_id: String::new(),
        }
    }
}

impl ConfigState {
    /// Chat endpoint derived from the current base URL.
    pub fn api_url(&self) -> String {
        format!("{}{API_PATH}", self.base_url)
    }
}

/// Partial update: `None` fields leave the current value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub base_url: Option<String>,
    pub user_id: Option<String>,
    pub chat_id: Option<String>,
}

impl ConfigUpdate {
    #[must_use]
    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = Some(value.into());
        self
    }

    #[must_use]
    pub fn user_id(mut self, value: impl Into<String>) -> Self {
        self.user_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn chat_id(mut self, value: impl Into<String>) -> Self {
        self.chat_id = Some(value.into());
        self
    }
}

/// How `ConfigStore::load` obtained `base_url` and `user_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A persisted configuration was found and applied.
    Loaded,
    /// Nothing usable was persisted; in-memory defaults were kept.
    Defaulted(DefaultReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefaultReason {
    Absent,
    Malformed(String),
}

/// Shape read back from storage. `chatId` is intentionally not part of it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedConfig {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

/// Configuration state plus the storage and clock it is bound to.
#[derive(Clone, Debug)]
pub struct ConfigStore<S = BrowserStorage, C = SystemClock> {
    state: ConfigState,
    storage: S,
    clock: C,
}

impl ConfigStore {
    /// Store backed by `localStorage` and the browser clock.
    pub fn browser() -> Self {
        Self::new(BrowserStorage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ConfigStore<S, C> {
    /// Create a store holding default values. Nothing is read or written
    /// until `load` or `update` is called.
    pub fn new(storage: S, clock: C) -> Self {
        Self { state: ConfigState::default(), storage, clock }
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    pub fn base_url(&self) -> &str {
        &self.state.base_url
    }

    pub fn user_id(&self) -> &str {
        &self.state.user_id
    }

    pub fn chat_id(&self) -> &str {
        &self.state.chat_id
    }

    pub fn api_url(&self) -> String {
        self.state.api_url()
    }

    /// Apply the fields present in `update`, then persist the full triple.
    ///
    /// The base URL is stored verbatim; a bad value only shows up when it is
    /// used for a request.
    pub fn update(&mut self, update: ConfigUpdate) {
        let ConfigUpdate { base_url, user_id, chat_id } = update;
        if let Some(base_url) = base_url {
            self.state.base_url = base_url;
        }
        if let Some(user_id) = user_id {
            self.state.user_id = user_id;
        }
        if let Some(chat_id) = chat_id {
            self.state.chat_id = chat_id;
        }
        self.persist();
    }

    /// Save the settings form drafts in one update.
    ///
    /// Drafts are trimmed. A blank chat id draft means "generate one", so the
    /// stored chat id is never empty after a save.
    pub fn apply_settings(&mut self, base_url: &str, user_id: &str, chat_id_draft: &str) {
        let update = ConfigUpdate::default().base_url(base_url.trim()).user_id(user_id.trim());
        let chat_id = chat_id_draft.trim();
        if chat_id.is_empty() {
            self.update(update);
            self.generate_new_chat_id();
        } else {
            self.update(update.chat_id(chat_id));
        }
    }

    /// Restore `base_url` and `user_id` from storage and start a new chat id.
    pub fn load(&mut self) -> LoadOutcome {
        let outcome = match storage::load_json::<_, serde_json::Value>(&self.storage, STORAGE_KEY) {
            None => LoadOutcome::Defaulted(DefaultReason::Absent),
            Some(parsed) => match parsed.map_err(|e| e.to_string()).and_then(decode_persisted) {
                Ok(saved) => {
                    self.state.base_url = non_empty(saved.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
                    self.state.user_id = non_empty(saved.user_id).unwrap_or_default();
                    self.state.chat_id.clear();
                    LoadOutcome::Loaded
                }
                Err(reason) => {
                    log::error!("failed to load config: {reason}");
                    LoadOutcome::Defaulted(DefaultReason::Malformed(reason))
                }
            },
        };

        self.generate_new_chat_id();
        outcome
    }

    /// Replace the chat id with the current millisecond timestamp and persist.
    pub fn generate_new_chat_id(&mut self) -> &str {
        let chat_id = self.clock.now_millis().to_string();
        self.update(ConfigUpdate::default().chat_id(chat_id));
        &self.state.chat_id
    }

    /// Start-of-session entry point; same behavior as `generate_new_chat_id`.
    pub fn initialize_chat_id(&mut self) -> &str {
        self.generate_new_chat_id()
    }

    fn persist(&self) {
        match storage::save_json(&self.storage, STORAGE_KEY, &self.state) {
            Ok(()) => {}
            Err(StorageError::Unavailable) => log::debug!("config not persisted: storage unavailable"),
            Err(e) => log::warn!("failed to persist config: {e}"),
        }
    }
}

fn decode_persisted(value: serde_json::Value) -> Result<PersistedConfig, String> {
    if !value.is_object() {
        return Err("expected a JSON object".to_owned());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
