//! Axum route handlers for the analysis endpoints.
//!
//! Failures are communicated as ordinary 200 responses carrying an `error`
//! field, never as non-2xx statuses. Callers inspect the body for an
//! `error` key; this is a compatibility contract, not an oversight.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use crate::analysis::Template;
use crate::llm_client::GatewayError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description_text: String,
}

/// Builds the template's prompts, runs one completion through the gateway,
/// and returns the provider's JSON verbatim.
async fn run_template(state: &AppState, template: Template, request: &AnalysisRequest) -> Json<Value> {
    let system = template.system_prompt();
    let user = template.user_prompt(&request.resume_text, &request.job_description_text);

    match state
        .gateway
        .complete(system, &user, template.temperature())
        .await
    {
        Ok(result) => Json(result),
        Err(GatewayError::NotConfigured) => {
            error!("{:?} request refused: no OpenAI client configured", template);
            Json(json!({ "error": template.not_configured_message() }))
        }
        Err(GatewayError::Provider(detail)) => {
            error!("{:?} completion failed: {detail}", template);
            Json(json!({ "error": template.failure_message(&detail) }))
        }
    }
}

/// POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<Value> {
    run_template(&state, Template::Analyze, &request).await
}

/// POST /optimize/resume
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<Value> {
    run_template(&state, Template::Optimize, &request).await
}

/// POST /quick-score
pub async fn handle_quick_score(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<Value> {
    run_template(&state, Template::QuickScore, &request).await
}

/// POST /skills-gap-analysis
pub async fn handle_skills_gap_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<Value> {
    run_template(&state, Template::SkillsGap, &request).await
}
