//! Model integration for the Newslens pipeline.
//!
//! This crate exposes the [`traits::ChatBackend`] interface, the concrete
//! OpenAI-compatible client, the per-task instruction templates, and the
//! [`invoker::ModelInvoker`] that implements the primary→fallback call
//! strategy.
//!
//! # Examples
//! ```no_run
//! use newslens_llm::{invoker::ModelInvoker, openai::OpenAiClient, prompts::TaskKind};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> newslens_common::Result<()> {
//! let backend = OpenAiClient::new("sk-...".into(), "https://api.openai.com/v1".into())
//!     .map_err(|e| newslens_common::NewslensError::Config(e.to_string()))?;
//! let invoker = ModelInvoker::new(Arc::new(backend), "gpt-4o".into(), "gpt-3.5-turbo".into());
//!
//! let task = TaskKind::Analyze;
//! let raw = invoker.invoke(&task.prompt("article body"), task.temperature()).await?;
//! # Ok(())
//! # }
//! ```
pub mod invoker;
pub mod openai;
pub mod prompts;
pub mod traits;

/// Default model routing for the editorial tasks.
pub const DEFAULT_PRIMARY_MODEL: &str = "gpt-4o";
pub const DEFAULT_FALLBACK_MODEL: &str = "gpt-3.5-turbo";
