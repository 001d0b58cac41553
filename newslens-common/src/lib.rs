//! Common types and utilities shared across Newslens crates.
//!
//! This crate defines the shared error taxonomy and the observability helpers
//! used throughout the Newslens workspace. It is intentionally lightweight so
//! that every crate can depend on it without heavy transitive costs.
//!
//! # Overview
//!
//! - [`NewslensError`] and [`Result`]: shared error handling
//! - [`observability`]: centralised tracing/logging initialisation
use serde::{Deserialize, Serialize};

pub mod observability;

/// Error types used across the Newslens pipeline.
///
/// Every variant is absorbed into a well-formed default value at a pipeline
/// boundary; none of them escapes the orchestrator to its caller.
#[derive(thiserror::Error, Debug)]
pub enum NewslensError {
    /// Both the primary and the fallback model call failed.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// The model replied, but the payload could not be decoded.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// The article text source failed (bad URL, network, non-success status).
    #[error("article fetch failed: {0}")]
    Fetch(String),

    /// Configuration was incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenient alias for results that use [`NewslensError`].
pub type Result<T> = std::result::Result<T, NewslensError>;

/// Identifier of a generative model as the backend knows it (e.g. `gpt-4o`).
///
/// Kept as a plain string wrapper: the pipeline treats model names as opaque
/// routing keys and never inspects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(pub String);

impl ModelId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModelId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
