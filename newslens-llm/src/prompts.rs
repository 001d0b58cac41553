//! Instruction templates for the editorial sub-tasks.
//!
//! Each task renders a fixed template with the article body interpolated
//! verbatim at a single point. The article text is trusted input from the
//! fetch/paste boundary, so no escaping happens here. Pure string
//! construction; no error conditions.

/// The editorial sub-tasks the pipeline can ask a model to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Analyze,
    Rewrite,
    Headline,
    FactCheck,
    BiasFraming,
    ToneEffect,
}

impl TaskKind {
    /// Sampling temperature for this task. Headlines get the most latitude,
    /// fact-checking the least.
    pub fn temperature(&self) -> f32 {
        match self {
            TaskKind::Headline => 0.6,
            TaskKind::FactCheck => 0.4,
            _ => 0.5,
        }
    }

    /// Render the task instruction with the article body embedded.
    pub fn prompt(&self, article_text: &str) -> String {
        match self {
            TaskKind::Analyze => format!(
                r#"You are a news media analyst. Analyze the following news article and return a JSON object with the following structure:

{{
  "summary": "...",  // a 3-line summary
  "perspective_label": "Pro-government | Critical | Sympathetic | Neutral | Corporate-friendly | Public-interest | Sensational",
  "tone": "Neutral | Angry | Fearful | Hopeful",
  "emotion_score": {{"anger": 0.0, "joy": 0.0, "fear": 0.0, "surprise": 0.0}},
  "rewritten": "..."  // Suggest a more neutral and balanced rewrite without changing the core facts.
}}

Even if the article appears objective, assign the most likely perspective_label based on its framing, tone, and language.

Article:
{article_text}"#
            ),
            TaskKind::Rewrite => format!(
                r#"You are an editor helping improve clarity and engagement in news reporting.
Rewrite the article below to make it clearer and concise so that readers are more engrossed in reading the whole article.
Analyze the current tone and improve it. Also improve perspective and emotional balance.

Return only the rewritten article text.

Original Article:
{article_text}"#
            ),
            TaskKind::Headline => format!(
                r#"You're an editorial headline expert. Given the article content below, suggest:
1. One improved, engaging headline that is clear and professional (not clickbait)
2. Two A/B testing headline variants

Article:
{article_text}

Respond with:
Headline: ...
Variants: ..."#
            ),
            TaskKind::FactCheck => format!(
                r#"You are a fact-checking assistant. Extract key factual claims from this article and verify them against known public facts.
Return brief results in the form of claim and verification pairs for display.

Respond in points without bullets.

Article:
{article_text}"#
            ),
            TaskKind::BiasFraming => format!(
                r#"You are a media framing analyst.

Analyze the framing and bias in the article below. Return a brief summary of:
1. Framing style used (e.g. sympathetic, critical, neutral, sensational)
2. How different groups (public, corporate, political, regional) may perceive it
3. Suggestions to make the framing more balanced or neutral if needed

Respond in 3 points in different lines without bullets.

Article:
{article_text}"#
            ),
            TaskKind::ToneEffect => format!(
                r#"You're a tone and communication strategist.

Analyze the article tone and return:
1. Summary of the tone's effect on readers
2. Which demographics it may attract or alienate
3. Suggestions to fine-tune the tone to reach a broader or intended audience

Respond in 3 points in different lines without bullets.

Article:
{article_text}"#
            ),
        }
    }
}
