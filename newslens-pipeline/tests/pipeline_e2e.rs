mod common;

use newslens_config::NewslensConfigLoader;
use newslens_pipeline::AnalysisPipeline;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE: &str = "The council slammed the reckless new levy on Monday.";

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Wire a pipeline against the mock server the way the application does it:
/// load config, build the backend, hand the invoker to the pipeline.
fn pipeline_for(server: &MockServer) -> AnalysisPipeline {
    let config = NewslensConfigLoader::new()
        .with_yaml_str(&format!(
            "llm:\n  api_key: \"test-key\"\n  endpoint: \"{}\"",
            server.uri()
        ))
        .load()
        .expect("test config loads");

    AnalysisPipeline::openai(
        config.llm.api_key,
        config.llm.endpoint,
        config.llm.primary_model.as_str().into(),
        config.llm.fallback_model.as_str().into(),
    )
    .expect("pipeline wires up")
}

/// Route one task to a canned reply by a distinctive phrase of its prompt.
async fn mount_task(server: &MockServer, phrase: &str, reply: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains(phrase))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn audit_assembles_all_sections() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    let analysis_reply = format!(
        "```json\n{}\n```",
        json!({
            "summary": "Council approves levy.",
            "perspective_label": "Critical",
            "tone": "Angry",
            "emotion_score": {"anger": 0.7, "joy": 0.0, "fear": 0.2, "surprise": 0.1},
            "rewritten": "The council approved a new levy on Monday."
        })
    );
    mount_task(&server, "news media analyst", &analysis_reply).await;
    mount_task(
        &server,
        "editorial headline expert",
        "Headline: Council approves new levy\nVariants: Levy passes  Council votes yes",
    )
    .await;
    mount_task(
        &server,
        "fact-checking assistant",
        "- **Claim**: levy approved Monday\n- **Verification**: confirmed by minutes",
    )
    .await;
    mount_task(
        &server,
        "media framing analyst",
        "Framing style: critical\nPublic perception varies\nUse neutral verbs",
    )
    .await;
    mount_task(
        &server,
        "communication strategist",
        "The tone alienates officials\n\nYounger readers may disengage",
    )
    .await;

    let report = pipeline_for(&server).audit(ARTICLE).await;

    assert_eq!(report.analysis.summary, "Council approves levy.");
    assert_eq!(report.analysis.tone, "Angry");
    assert_eq!(report.analysis.tone_color, "danger");
    assert_eq!(report.headline, "Council approves new levy");
    assert_eq!(report.headline_variants, "Levy passes  Council votes yes");

    let fact_lines: Vec<String> = report.fact_check.iter().map(|m| m.to_string()).collect();
    assert_eq!(fact_lines[0], "<strong>Claim</strong>: levy approved Monday");
    assert_eq!(report.bias_framing.len(), 3);
    assert_eq!(report.tone_effect.len(), 2);
}

#[tokio::test]
async fn audit_survives_a_dead_backend() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    // Every call fails on both models.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let report = pipeline_for(&server).audit(ARTICLE).await;

    assert_eq!(report.analysis.summary, "Could not process article.");
    assert_eq!(report.analysis.tone_color, "secondary");
    assert!(report.analysis.emotion_score.values().all(|v| *v == 0.0));
    assert_eq!(report.headline, "Unavailable");
    assert_eq!(report.headline_variants, "Unavailable");
    assert_eq!(
        report.fact_check[0].to_string(),
        "Fact-checking failed or not available."
    );
    assert_eq!(
        report.bias_framing[0].to_string(),
        "Framing analysis unavailable."
    );
    assert_eq!(
        report.tone_effect[0].to_string(),
        "Tone perception analysis unavailable."
    );
}

#[tokio::test]
async fn compare_omits_the_empty_input() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    let reply = json!({"summary": "Only one side.", "tone": "Neutral"}).to_string();
    mount_task(&server, "news media analyst", &reply).await;

    let entries = pipeline_for(&server).compare(ARTICLE, "   ").await;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].summary, "Only one side.");
    assert_eq!(entries[0].tone_color, "secondary");
}

#[tokio::test]
async fn compare_preserves_input_order() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    let reply = json!({"summary": "Same shape."}).to_string();
    mount_task(&server, "news media analyst", &reply).await;

    let entries = pipeline_for(&server)
        .compare("first article text", "second article text")
        .await;
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn rewrite_reports_both_analyses_and_a_diff() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    mount_task(
        &server,
        "editor helping improve clarity",
        "The council criticized the new levy on Monday.",
    )
    .await;
    let analysis_reply = json!({
        "summary": "Levy coverage.",
        "tone": "Neutral"
    })
    .to_string();
    mount_task(&server, "news media analyst", &analysis_reply).await;

    let report = pipeline_for(&server).rewrite(ARTICLE).await;

    assert_eq!(
        report.rewritten_text,
        "The council criticized the new levy on Monday."
    );
    assert_eq!(report.original_analysis.summary, "Levy coverage.");
    assert_eq!(report.rewritten_analysis.summary, "Levy coverage.");

    let diff = report.diff.to_string();
    assert!(diff.contains("title='Removed'>slammed</span>"));
    assert!(diff.contains("title='Added'>criticized</span>"));
    assert!(diff.contains("title='Removed'>reckless</span>"));
    assert!(diff.starts_with("The council"));
}

#[tokio::test]
async fn rewrite_failure_still_produces_a_well_formed_report() {
    common::init_test_tracing();
    let server = MockServer::start().await;

    // The rewrite prompt always fails; analysis succeeds.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("editor helping improve clarity"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let reply = json!({"summary": "Still analyzed."}).to_string();
    mount_task(&server, "news media analyst", &reply).await;

    let report = pipeline_for(&server).rewrite(ARTICLE).await;

    assert_eq!(report.rewritten_text, "Rewrite failed due to API error.");
    assert_eq!(report.original_analysis.summary, "Still analyzed.");
    // The diff is computed against the failure notice; it is still safe markup.
    assert!(report.diff.to_string().contains("title='Removed'"));
}
