//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::store::{AccountStore, ProfileStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Registered accounts
    accounts: AccountStore,

    /// Registered platform handles per user
    profiles: ProfileStore,

    /// Shared HTTP client for upstream platform calls
    http: reqwest::Client,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state with empty stores
    pub fn new(http: reqwest::Client, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                accounts: AccountStore::new(),
                profiles: ProfileStore::new(),
                http,
                config,
            }),
        }
    }

    /// Get a reference to the account store
    pub fn accounts(&self) -> &AccountStore {
        &self.inner.accounts
    }

    /// Get a reference to the profile store
    pub fn profiles(&self) -> &ProfileStore {
        &self.inner.profiles
    }

    /// Get a reference to the shared HTTP client
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
