// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Carbon-Tracker core: client-side state and API plumbing for the
//! carbon footprint tracker.
//!
//! This crate provides the reactive stores that hold the tracker's
//! client-side state, the data records shared with the backend, and a
//! thin JSON client over the backend API.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

use client::ApiClient;
use config::{Config, ConfigError};
use models::{User, UserActivity};
use store::Store;

/// Shared application context.
///
/// Owns one explicitly constructed store per piece of client state, so
/// state lifetime follows the context rather than living in module-level
/// globals. Each `new` gives fresh, independent stores.
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
    /// Logged user activities
    pub activities: Store<Vec<UserActivity>>,
    /// Running carbon total (kg CO2e)
    pub total_carbon: Store<f64>,
    /// Authenticated user, `None` when signed out
    pub current_user: Store<Option<User>>,
}

impl AppContext {
    /// Build a context from the given configuration.
    pub fn new(config: Config) -> Self {
        let api = ApiClient::from_config(&config);
        tracing::info!(base_url = %config.api_base_url, "Application context initialized");

        Self {
            config,
            api,
            activities: Store::new(Vec::new()),
            total_carbon: Store::new(0.0),
            current_user: Store::new(None),
        }
    }

    /// Build a context with configuration taken from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(Config::from_env()?))
    }
}
