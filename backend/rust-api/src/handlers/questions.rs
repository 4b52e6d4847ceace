use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::ApiError;
use crate::{
    extractors::{AppJson, AppPath},
    models::{
        question::{
            CreatedResponse, DeletedResponse, PageQuery, QuestionsPageResponse,
            QuestionsPostRequest, SearchResponse,
        },
        Success,
    },
    services::{question_service::QuestionService, store::StoreError, AppState},
    utils::pagination::Page,
};

/// GET /api/questions?page=N
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Success<QuestionsPageResponse>>, ApiError> {
    let page = Page::from_query(query.page.as_deref());
    let service = QuestionService::new(state.store.clone());

    let listing = service.list(page).await?;
    let categories = service.categories().await?;

    Ok(Json(Success::new(QuestionsPageResponse {
        questions: listing.questions,
        total_questions: listing.total,
        current_category: "none",
        categories,
    })))
}

/// DELETE /api/questions/{id}
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    AppPath(question_id): AppPath<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Success<DeletedResponse>>, ApiError> {
    let page = Page::from_query(query.page.as_deref());
    let service = QuestionService::new(state.store.clone());

    // Deleting an absent question is reported as unprocessable, not 404
    let listing = service.delete(question_id, page).await.map_err(|e| match e {
        StoreError::NotFound(what) => ApiError::Unprocessable(format!("{} does not exist", what)),
        other => ApiError::from(other),
    })?;

    Ok(Json(Success::new(DeletedResponse {
        deleted: question_id,
        questions: listing.questions,
        total_questions: listing.total,
    })))
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
    Search(SearchResponse),
    Created(CreatedResponse),
}

/// POST /api/questions: search when `searchTerm` is present, otherwise create.
pub async fn create_or_search_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    AppJson(req): AppJson<QuestionsPostRequest>,
) -> Result<Json<Success<QuestionsPostResponse>>, ApiError> {
    let page = Page::from_query(query.page.as_deref());
    let service = QuestionService::new(state.store.clone());

    if let Some(term) = req.search_term.as_deref() {
        tracing::info!("Searching questions for {:?}", term);
        let listing = service.search(term, page).await?;
        return Ok(Json(Success::new(QuestionsPostResponse::Search(
            SearchResponse {
                questions: listing.questions,
                total_questions: listing.total,
            },
        ))));
    }

    let new_question = req.into_new_question()?;
    let (created, listing) = service.create(new_question, page).await?;

    Ok(Json(Success::new(QuestionsPostResponse::Created(
        CreatedResponse {
            created,
            questions: listing.questions,
            total_questions: listing.total,
        },
    ))))
}
