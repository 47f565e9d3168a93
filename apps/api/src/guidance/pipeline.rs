//! Guidance pipeline: one fixed flow shared by every intent.
//!
//! Flow: build_prompt → gateway.generate → interpreter.interpret →
//!       (ok: model result) | (err: log, static fallback).
//!
//! There is no partial success: callers get either the full interpreted value
//! or the full fallback, and both satisfy the same schema.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::guidance::fallback::fallback_for;
use crate::guidance::models::GuidanceRequest;
use crate::guidance::prompts::build_prompt;
use crate::interpret::{InterpretError, Interpreter};
use crate::llm_client::{CompletionGateway, LlmError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("completion failed: {0}")]
    Service(#[from] LlmError),

    #[error("interpretation failed: {0}")]
    Interpretation(#[from] InterpretError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Model,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub value: Value,
    pub source: Source,
}

/// Runs the pipeline for `request`. Never fails; errors become the fallback.
pub async fn run(
    gateway: &dyn CompletionGateway,
    interpreter: &Interpreter,
    request: &GuidanceRequest,
) -> Outcome {
    let schema = request.schema();

    match attempt(gateway, interpreter, request).await {
        Ok(value) => {
            info!("{} result interpreted from model output", schema.name());
            Outcome {
                value,
                source: Source::Model,
            }
        }
        Err(e) => {
            warn!("{} pipeline failed, serving fallback: {e}", schema.name());
            Outcome {
                value: fallback_for(request),
                source: Source::Fallback,
            }
        }
    }
}

async fn attempt(
    gateway: &dyn CompletionGateway,
    interpreter: &Interpreter,
    request: &GuidanceRequest,
) -> Result<Value, PipelineError> {
    let schema = request.schema();
    let prompt = build_prompt(request);

    let raw = gateway.generate(&prompt).await?;
    debug!("Raw completion ({}): {raw}", schema.name());

    Ok(interpreter.interpret(&raw, schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::models::{ChatRequest, ResumeAnalysisRequest, RoadmapRequest};
    use crate::llm_client::scripted::ScriptedGateway;

    fn analysis_request() -> GuidanceRequest {
        GuidanceRequest::ResumeAnalysis(ResumeAnalysisRequest {
            resume: "5 years of Rust at a fintech".to_string(),
        })
    }

    #[tokio::test]
    async fn test_model_result_is_returned_unchanged() {
        let reply = r#"Analysis:
{"skills": ["Rust"], "strengths": ["Systems"], "weaknesses": ["Frontend"],
 "career_options": [{"name": "Backend Engineer", "fit": 90, "reason": "Rust"}],
 "improvements": ["Add metrics"], "experience_level": {"level": "Mid", "confidence": 75},
 "extra": "kept"}"#;
        let gateway = ScriptedGateway::replying(reply);

        let outcome = run(&gateway, &Interpreter::default(), &analysis_request()).await;

        assert_eq!(outcome.source, Source::Model);
        assert_eq!(outcome.value["experience_level"]["level"], "Mid");
        assert_eq!(outcome.value["extra"], "kept");
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_service_error_yields_exact_fallback() {
        let gateway = ScriptedGateway::failing();
        let request = analysis_request();

        let outcome = run(&gateway, &Interpreter::default(), &request).await;

        assert_eq!(outcome.source, Source::Fallback);
        assert_eq!(outcome.value, fallback_for(&request));
    }

    #[tokio::test]
    async fn test_interpretation_error_yields_fallback() {
        let gateway = ScriptedGateway::replying(r#"{"skills": ["Rust"]}"#);
        let request = analysis_request();

        let outcome = run(&gateway, &Interpreter::default(), &request).await;

        assert_eq!(outcome.source, Source::Fallback);
        assert_eq!(outcome.value, fallback_for(&request));
    }

    #[tokio::test]
    async fn test_roadmap_fallback_uses_requested_goal() {
        let gateway = ScriptedGateway::replying("I'd rather not.");
        let request = GuidanceRequest::Roadmap(RoadmapRequest {
            career_goal: "Game Developer".to_string(),
            ..Default::default()
        });

        let outcome = run(&gateway, &Interpreter::default(), &request).await;

        assert_eq!(outcome.source, Source::Fallback);
        assert_eq!(outcome.value[0]["milestone"], "Start Your Game Developer Journey");
    }

    #[tokio::test]
    async fn test_chat_passes_text_through() {
        let gateway = ScriptedGateway::replying("- Network on LinkedIn\n- Build a portfolio");
        let request = GuidanceRequest::Chat(ChatRequest {
            query: "How do I switch careers?".to_string(),
        });

        let outcome = run(&gateway, &Interpreter::default(), &request).await;

        assert_eq!(outcome.source, Source::Model);
        assert_eq!(
            outcome.value["response"],
            "- Network on LinkedIn\n- Build a portfolio"
        );
        assert!(gateway
            .last_prompt()
            .unwrap()
            .contains("How do I switch careers?"));
    }

    #[test]
    fn test_pipeline_error_messages() {
        let err = PipelineError::from(InterpretError::NoPayload);
        assert_eq!(err.to_string(), "interpretation failed: no JSON payload found");
        let err = PipelineError::from(LlmError::EmptyContent);
        assert_eq!(err.to_string(), "completion failed: LLM returned empty content");
    }
}
