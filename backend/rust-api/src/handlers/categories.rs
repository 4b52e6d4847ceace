use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::ApiError;
use crate::{
    extractors::AppPath,
    models::{
        category::{CategoriesResponse, CategoryQuestionsResponse},
        question::PageQuery,
        Success,
    },
    services::{question_service::QuestionService, AppState},
    utils::pagination::Page,
};

/// GET /api/categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Success<CategoriesResponse>>, ApiError> {
    let service = QuestionService::new(state.store.clone());
    let categories = service.categories().await?;

    Ok(Json(Success::new(CategoriesResponse { categories })))
}

/// GET /api/categories/{id}/questions
pub async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    AppPath(category_id): AppPath<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Success<CategoryQuestionsResponse>>, ApiError> {
    let page = Page::from_query(query.page.as_deref());
    tracing::info!(
        "Listing questions for category {} (page {})",
        category_id,
        page.number()
    );

    let service = QuestionService::new(state.store.clone());
    let (category, listing) = service.list_by_category(category_id, page).await?;

    Ok(Json(Success::new(CategoryQuestionsResponse {
        questions: listing.questions,
        current_category: category.kind,
        total_questions: listing.total,
    })))
}
