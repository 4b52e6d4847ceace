use std::sync::Arc;

use crate::{
    metrics::QUESTION_MUTATIONS_TOTAL,
    models::{Category, NewQuestion, Question},
    services::store::{StoreError, StoreResult, TriviaStore},
    utils::pagination::{paginate, Page},
};

/// One page of an ordered question listing plus the size of the full listing.
#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: usize,
}

impl QuestionPage {
    fn from_all(all: Vec<Question>, page: Page) -> Self {
        let total = all.len();
        Self {
            questions: paginate(&all, page).to_vec(),
            total,
        }
    }
}

pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    pub async fn categories(&self) -> StoreResult<Vec<Category>> {
        self.store.list_categories().await
    }

    pub async fn list(&self, page: Page) -> StoreResult<QuestionPage> {
        let all = self.store.list_questions().await?;
        Ok(QuestionPage::from_all(all, page))
    }

    /// Returns `NotFound` when the category does not exist.
    pub async fn list_by_category(
        &self,
        category_id: i64,
        page: Page,
    ) -> StoreResult<(Category, QuestionPage)> {
        let category = self
            .store
            .get_category(category_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Category {}", category_id)))?;

        let all = self.store.questions_in_category(category_id).await?;
        Ok((category, QuestionPage::from_all(all, page)))
    }

    pub async fn search(&self, term: &str, page: Page) -> StoreResult<QuestionPage> {
        let matches = self.store.search_questions(term).await?;
        tracing::debug!("Search for {:?} matched {} questions", term, matches.len());
        Ok(QuestionPage::from_all(matches, page))
    }

    pub async fn create(
        &self,
        question: NewQuestion,
        page: Page,
    ) -> StoreResult<(i64, QuestionPage)> {
        let id = self.store.insert_question(&question).await?;
        QUESTION_MUTATIONS_TOTAL.with_label_values(&["create"]).inc();
        tracing::info!("Created question {} in category {}", id, question.category);

        Ok((id, self.list(page).await?))
    }

    pub async fn delete(&self, id: i64, page: Page) -> StoreResult<QuestionPage> {
        self.store.delete_question(id).await?;
        QUESTION_MUTATIONS_TOTAL.with_label_values(&["delete"]).inc();
        tracing::info!("Deleted question {}", id);

        self.list(page).await
    }
}
