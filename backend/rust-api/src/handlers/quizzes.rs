use axum::{extract::State, Json};
use std::sync::Arc;

use super::ApiError;
use crate::{
    extractors::AppJson,
    models::{
        quiz::{QuizRequest, QuizResponse},
        Success,
    },
    services::{quiz_service::QuizService, AppState},
};

/// POST /api/quizzes
pub async fn play_quiz(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<QuizRequest>,
) -> Result<Json<Success<QuizResponse>>, ApiError> {
    let (previous, selector) = match (req.previous_questions, req.quiz_category) {
        (Some(previous), Some(selector)) => (previous, selector),
        _ => {
            return Err(ApiError::BadRequest(
                "previous_questions and quiz_category are required".to_string(),
            ))
        }
    };

    let service = QuizService::new(state.store.clone(), state.config.legacy_category_offset);
    let filter = service.resolve_filter(&selector).map_err(ApiError::BadRequest)?;

    let question = service.next_question(filter, &previous).await?;

    Ok(Json(Success::new(QuizResponse { question })))
}
