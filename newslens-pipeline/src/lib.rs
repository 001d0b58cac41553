//! Orchestration of the editorial analysis use cases.
//!
//! [`AnalysisPipeline`] composes prompts, the two-tier model invoker, and the
//! text algorithms into the three entry points the web layer calls: a single
//! article audit, a two-article comparison, and a rewrite with a visual diff.
//! Sub-calls run sequentially and share no mutable state; every failure is
//! absorbed into a use-case-specific default before a result leaves this
//! crate, so callers never see an error.

use newslens_analysis::{
    diff_words, normalize, normalize_bullets, parse_headlines, render_diff, AnalysisResult, Markup,
};
use newslens_common::{ModelId, NewslensError};
use newslens_llm::invoker::ModelInvoker;
use newslens_llm::openai::OpenAiClient;
use newslens_llm::prompts::TaskKind;
use serde::Serialize;
use std::sync::Arc;

const HEADLINE_UNAVAILABLE: &str = "Unavailable";
const FACT_CHECK_UNAVAILABLE: &str = "Fact-checking failed or not available.";
const BIAS_UNAVAILABLE: &str = "Framing analysis unavailable.";
const TONE_UNAVAILABLE: &str = "Tone perception analysis unavailable.";
const REWRITE_FAILED: &str = "Rewrite failed due to API error.";

/// Full audit of a single article.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub analysis: AnalysisResult,
    pub headline: String,
    pub headline_variants: String,
    pub fact_check: Vec<Markup>,
    pub bias_framing: Vec<Markup>,
    pub tone_effect: Vec<Markup>,
}

/// Rewrite of an article with before/after analyses and a rendered diff.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    pub original_analysis: AnalysisResult,
    pub rewritten_analysis: AnalysisResult,
    pub rewritten_text: String,
    pub diff: Markup,
}

/// The editorial analysis pipeline.
///
/// Holds only the model invoker; each entry point is pure with respect to its
/// input text, and identical inputs trigger independent model calls.
pub struct AnalysisPipeline {
    invoker: ModelInvoker,
}

impl AnalysisPipeline {
    pub fn new(invoker: ModelInvoker) -> Self {
        Self { invoker }
    }

    /// Wire the pipeline against an OpenAI-compatible endpoint.
    ///
    /// This is the startup path: settings come from the loaded configuration
    /// exactly once and are never mutated afterwards.
    pub fn openai(
        api_key: String,
        endpoint: String,
        primary_model: ModelId,
        fallback_model: ModelId,
    ) -> newslens_common::Result<Self> {
        let backend = OpenAiClient::new(api_key, endpoint)
            .map_err(|e| NewslensError::Config(format!("chat backend init failed: {e}")))?;
        Ok(Self::new(ModelInvoker::new(
            Arc::new(backend),
            primary_model,
            fallback_model,
        )))
    }

    /// Audit one article: analysis, headline suggestions, and the three
    /// bullet critiques.
    pub async fn audit(&self, article_text: &str) -> AuditReport {
        let analysis = self.analyze(article_text).await;
        let (headline, headline_variants) = self.suggest_headlines(article_text).await;
        let fact_check = self
            .bullet_critique(TaskKind::FactCheck, article_text, FACT_CHECK_UNAVAILABLE)
            .await;
        let bias_framing = self
            .bullet_critique(TaskKind::BiasFraming, article_text, BIAS_UNAVAILABLE)
            .await;
        let tone_effect = self
            .bullet_critique(TaskKind::ToneEffect, article_text, TONE_UNAVAILABLE)
            .await;

        AuditReport {
            analysis,
            headline,
            headline_variants,
            fact_check,
            bias_framing,
            tone_effect,
        }
    }

    /// Analyze two articles side by side, order preserved.
    ///
    /// An empty (unfetchable) input is omitted from the result rather than
    /// padded with an error entry.
    pub async fn compare(&self, first: &str, second: &str) -> Vec<AnalysisResult> {
        let mut entries = Vec::with_capacity(2);
        for text in [first, second] {
            if text.trim().is_empty() {
                tracing::warn!("skipping empty article in comparison");
                continue;
            }
            entries.push(self.analyze(text).await);
        }
        entries
    }

    /// Rewrite an article and report both analyses plus the word-level diff.
    pub async fn rewrite(&self, article_text: &str) -> RewriteReport {
        let rewritten_text = self.rewrite_text(article_text).await;
        let original_analysis = self.analyze(article_text).await;
        let rewritten_analysis = self.analyze(&rewritten_text).await;
        let diff = render_diff(&diff_words(article_text, &rewritten_text));

        RewriteReport {
            original_analysis,
            rewritten_analysis,
            rewritten_text,
            diff,
        }
    }

    /// Run the analyze task and shape the reply. Unavailable models collapse
    /// to the fixed error result, same as an unparseable reply.
    pub async fn analyze(&self, article_text: &str) -> AnalysisResult {
        match self.run_task(TaskKind::Analyze, article_text).await {
            Ok(raw) => normalize(&raw),
            Err(err) => {
                tracing::warn!(error = %err, "analysis unavailable, using error result");
                AnalysisResult::error_result()
            }
        }
    }

    /// Suggest a headline and A/B variants.
    pub async fn suggest_headlines(&self, article_text: &str) -> (String, String) {
        match self.run_task(TaskKind::Headline, article_text).await {
            Ok(raw) => parse_headlines(&raw),
            Err(err) => {
                tracing::warn!(error = %err, "headline suggestion unavailable");
                (
                    HEADLINE_UNAVAILABLE.to_string(),
                    HEADLINE_UNAVAILABLE.to_string(),
                )
            }
        }
    }

    /// Produce the rewritten article text, or the fixed failure notice.
    pub async fn rewrite_text(&self, article_text: &str) -> String {
        match self.run_task(TaskKind::Rewrite, article_text).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "rewrite unavailable");
                REWRITE_FAILED.to_string()
            }
        }
    }

    async fn bullet_critique(
        &self,
        task: TaskKind,
        article_text: &str,
        unavailable: &str,
    ) -> Vec<Markup> {
        match self.run_task(task, article_text).await {
            Ok(raw) => normalize_bullets(&raw),
            Err(err) => {
                tracing::warn!(error = %err, ?task, "critique unavailable");
                vec![Markup::from_plain(unavailable)]
            }
        }
    }

    async fn run_task(
        &self,
        task: TaskKind,
        article_text: &str,
    ) -> newslens_common::Result<String> {
        self.invoker
            .invoke(&task.prompt(article_text), task.temperature())
            .await
    }
}
