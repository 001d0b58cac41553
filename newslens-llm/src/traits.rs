use async_trait::async_trait;

/// Failures a chat backend can surface to the invoker.
///
/// The invoker does not distinguish between variants — any failure triggers
/// the single fallback hop — but the variant keeps logs diagnosable.
#[derive(thiserror::Error, Debug)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("rate limit exceeded")]
    RateLimit,
}

/// An opaque text-completion backend.
///
/// The pipeline treats this as a black box: a named model, a prompt, and a
/// sampling temperature in; raw text or a failure out. Implementations hold
/// no per-call state.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Complete `prompt` with the named model.
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, ChatError>;

    /// Check whether the backend is reachable at all.
    async fn health_check(&self) -> Result<bool, ChatError>;
}
