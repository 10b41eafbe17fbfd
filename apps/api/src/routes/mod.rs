pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::extract::handlers as extract;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(analysis::handle_analyze))
        .route("/optimize/resume", post(analysis::handle_optimize_resume))
        .route("/quick-score", post(analysis::handle_quick_score))
        .route(
            "/skills-gap-analysis",
            post(analysis::handle_skills_gap_analysis),
        )
        .route("/parse-resume-file", post(extract::handle_parse_resume_file))
        .with_state(state)
}
