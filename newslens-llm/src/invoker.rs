use crate::traits::ChatBackend;
use newslens_common::{ModelId, NewslensError, Result};
use std::sync::Arc;

/// Two-tier model invocation: primary once, fallback once, then give up.
///
/// This is the only retry policy in the pipeline. There is no backoff and no
/// multi-attempt loop; a failure of both models surfaces as
/// [`NewslensError::ModelUnavailable`] for the calling wrapper to convert
/// into its safe default. No state is retained between invocations.
pub struct ModelInvoker {
    backend: Arc<dyn ChatBackend>,
    primary_model: ModelId,
    fallback_model: ModelId,
}

impl ModelInvoker {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        primary_model: ModelId,
        fallback_model: ModelId,
    ) -> Self {
        Self {
            backend,
            primary_model,
            fallback_model,
        }
    }

    /// Run `prompt` against the primary model, retrying once on the fallback.
    pub async fn invoke(&self, prompt: &str, temperature: f32) -> Result<String> {
        let primary_err = match self
            .backend
            .complete(self.primary_model.as_str(), prompt, temperature)
            .await
        {
            Ok(text) => return Ok(text),
            Err(err) => err,
        };

        tracing::warn!(
            model = %self.primary_model,
            fallback = %self.fallback_model,
            error = %primary_err,
            "primary model failed, retrying with fallback"
        );

        self.backend
            .complete(self.fallback_model.as_str(), prompt, temperature)
            .await
            .map_err(|fallback_err| {
                tracing::warn!(
                    model = %self.fallback_model,
                    error = %fallback_err,
                    "fallback model failed"
                );
                NewslensError::ModelUnavailable(format!(
                    "{} failed ({primary_err}); {} failed ({fallback_err})",
                    self.primary_model, self.fallback_model
                ))
            })
    }
}
