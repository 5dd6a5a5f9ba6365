// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::config::ConfigError;

/// Application error type.
///
/// Network-layer failures are split by where they happened: the request
/// never completing (`Network`), the backend answering with a non-2xx
/// status (`Api`), or a 2xx body that is not the expected JSON
/// (`Decode`). None of these are retried at this layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, AppError>;
