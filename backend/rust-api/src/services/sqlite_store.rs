use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

use crate::{
    metrics::track_db_operation,
    models::{Category, NewQuestion, Question},
    services::store::{StoreError, StoreResult, TriviaStore},
};

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Single-connection in-memory database; the connection is never recycled
    /// so the data lives as long as the pool.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

/// Escapes LIKE wildcards so the term matches literally (used with `ESCAPE '\'`).
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl TriviaStore for SqliteStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        track_db_operation(
            "select",
            "categories",
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool),
        )
        .await
        .map_err(StoreError::from)
    }

    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        track_db_operation(
            "select",
            "categories",
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
        .map_err(StoreError::from)
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        track_db_operation(
            "select",
            "questions",
            sqlx::query_as::<_, Question>(
                "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id",
            )
            .fetch_all(&self.pool),
        )
        .await
        .map_err(StoreError::from)
    }

    async fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        track_db_operation(
            "select",
            "questions",
            sqlx::query_as::<_, Question>(
                r#"
                SELECT id, question, answer, difficulty, category FROM questions
                WHERE category = ?1
                ORDER BY id
                "#,
            )
            .bind(category_id)
            .fetch_all(&self.pool),
        )
        .await
        .map_err(StoreError::from)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        track_db_operation(
            "search",
            "questions",
            sqlx::query_as::<_, Question>(
                r#"
                SELECT id, question, answer, difficulty, category FROM questions
                WHERE question LIKE ?1 ESCAPE '\'
                ORDER BY id
                "#,
            )
            .bind(like_pattern(term))
            .fetch_all(&self.pool),
        )
        .await
        .map_err(StoreError::from)
    }

    async fn insert_question(&self, question: &NewQuestion) -> StoreResult<i64> {
        let result = track_db_operation(
            "insert",
            "questions",
            sqlx::query(
                r#"
                INSERT INTO questions (question, answer, difficulty, category)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.difficulty)
            .bind(question.category)
            .execute(&self.pool),
        )
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        let result = track_db_operation(
            "delete",
            "questions",
            sqlx::query("DELETE FROM questions WHERE id = ?1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("Question {}", id)));
        }
        Ok(())
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        track_db_operation(
            "count",
            "questions",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions").fetch_one(&self.pool),
        )
        .await
        .map_err(StoreError::from)
    }
}
