use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_string_from_number;

use super::Question;

/// Selector value the frontend sends when the player picks "all categories".
pub const ALL_CATEGORIES_SENTINEL: &str = "click";

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(i64),
}

impl QuizCategory {
    /// Resolves the selector into a candidate filter. With `legacy_offset` the
    /// caller's id is treated as a zero-based index and shifted by one.
    pub fn filter(&self, legacy_offset: bool) -> Result<CategoryFilter, String> {
        if self.kind == ALL_CATEGORIES_SENTINEL || self.id == ALL_CATEGORIES_SENTINEL {
            return Ok(CategoryFilter::All);
        }

        let id: i64 = self
            .id
            .trim()
            .parse()
            .map_err(|_| format!("Invalid quiz category id: {:?}", self.id))?;

        if legacy_offset {
            let shifted = id
                .checked_add(1)
                .ok_or_else(|| format!("Invalid quiz category id: {:?}", self.id))?;
            Ok(CategoryFilter::Category(shifted))
        } else {
            Ok(CategoryFilter::Category(id))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}
