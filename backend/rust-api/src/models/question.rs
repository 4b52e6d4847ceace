use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use validator::Validate;

use super::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Body of `POST /api/questions`. The same endpoint serves search (when
/// `searchTerm` is present) and creation, so every field is optional here.
#[derive(Debug, Deserialize, Validate)]
pub struct QuestionsPostRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    #[validate(required, length(min = 1))]
    pub question: Option<String>,
    #[validate(required, length(min = 1))]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(required)]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(required)]
    pub category: Option<i64>,
}

impl QuestionsPostRequest {
    /// Converts the body into an insertable question, or returns the
    /// validation failure.
    pub fn into_new_question(self) -> Result<NewQuestion, validator::ValidationErrors> {
        self.validate()?;
        match (self.question, self.answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => Ok(NewQuestion {
                question,
                answer,
                difficulty,
                category,
            }),
            // validate() already rejected missing fields
            _ => Err(validator::ValidationErrors::new()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionsPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: &'static str,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}
