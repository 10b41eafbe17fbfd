use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Static capability listing for the operational endpoints.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Professional Resume Analysis Service is running",
        "endpoints": {
            "/analyze": "Complete resume optimization analysis for job seekers",
            "/quick-score": "Fast match score with top 3 improvements (like Jobscan)",
            "/optimize/resume": "Detailed resume enhancement suggestions",
            "/skills-gap-analysis": "Skills assessment and learning roadmap",
            "/parse-resume-file": "Parse resume files (PDF/DOCX)"
        }
    }))
}

/// GET /health
/// Reports whether an OpenAI client was configured at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "openai_configured": state.gateway.is_configured(),
        "version": "2.0"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{ChatCompletion, CompletionGateway, LlmError};
    use async_trait::async_trait;

    struct NeverCalled;

    #[async_trait]
    impl ChatCompletion for NeverCalled {
        async fn chat(
            &self,
            _system: &str,
            _user: &str,
            _temperature: f32,
        ) -> Result<String, LlmError> {
            unreachable!("health checks must not reach the provider")
        }
    }

    #[tokio::test]
    async fn health_reflects_gateway_configuration() {
        let Json(body) = health_handler(State(AppState {
            gateway: CompletionGateway::unconfigured(),
        }))
        .await;
        assert_eq!(
            body,
            json!({ "status": "healthy", "openai_configured": false, "version": "2.0" })
        );

        let Json(body) = health_handler(State(AppState {
            gateway: CompletionGateway::configured(NeverCalled),
        }))
        .await;
        assert_eq!(
            body,
            json!({ "status": "healthy", "openai_configured": true, "version": "2.0" })
        );
    }

    #[tokio::test]
    async fn root_lists_the_operational_endpoints() {
        let Json(body) = root_handler().await;
        assert_eq!(
            body["message"],
            "Professional Resume Analysis Service is running"
        );
        for endpoint in [
            "/analyze",
            "/quick-score",
            "/optimize/resume",
            "/skills-gap-analysis",
            "/parse-resume-file",
        ] {
            assert!(body["endpoints"][endpoint].is_string());
        }
    }
}
