use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Category, NewQuestion, Question};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Relational data access used by the handlers. Listings are ordered by id.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>>;

    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    async fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn insert_question(&self, question: &NewQuestion) -> StoreResult<i64>;

    /// Fails with [`StoreError::NotFound`] when no row has this id.
    async fn delete_question(&self, id: i64) -> StoreResult<()>;

    async fn count_questions(&self) -> StoreResult<i64>;
}
