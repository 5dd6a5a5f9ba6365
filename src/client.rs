// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the carbon-tracker backend API.
//!
//! Handles:
//! - Generic JSON GET/POST against the configured base URL
//! - Typed wrappers for the activity and factor endpoints
//!
//! Deliberately thin: no retry, no timeout, no auth header injection.
//! Every failure surfaces to the caller as an [`AppError`].

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{CarbonFactors, UserActivity};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Backend API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Generic GET request with JSON response.
    ///
    /// `path` must start with `/`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Generic POST request with a JSON body and JSON response.
    ///
    /// `path` must start with `/`.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Fetch the carbon-factor reference table.
    pub async fn fetch_factors(&self) -> Result<CarbonFactors> {
        self.get("/api/factors").await
    }

    /// List the logged activities.
    pub async fn list_activities(&self) -> Result<Vec<UserActivity>> {
        self.get("/api/activities").await
    }

    /// Log a new activity; the backend echoes the stored record.
    pub async fn create_activity(&self, activity: &UserActivity) -> Result<UserActivity> {
        self.post("/api/activities", activity).await
    }

    /// Fetch the running carbon total.
    pub async fn fetch_total(&self) -> Result<CarbonTotal> {
        self.get("/api/carbon/total").await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "API request failed");
            return Err(AppError::Api(format!("HTTP {}: {}", status, body)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Response body of `/api/carbon/total`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonTotal {
    pub total: f64,
}
