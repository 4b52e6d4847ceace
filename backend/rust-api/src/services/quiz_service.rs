use rand::{seq::IndexedRandom, Rng};
use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    metrics::QUIZ_DRAWS_TOTAL,
    models::{
        quiz::{CategoryFilter, QuizCategory},
        Question,
    },
    services::store::{StoreResult, TriviaStore},
};

#[derive(Debug, PartialEq, Eq)]
pub enum QuizDraw<'a> {
    Question(&'a Question),
    RoundComplete,
}

/// Picks a random candidate the player has not seen yet.
///
/// The round is complete when the player has seen as many questions as there
/// are candidates, or when every candidate id already appears in `previous`.
/// That check runs before the RNG is touched, so the redraw loop below always
/// has at least one unseen candidate to land on.
pub fn draw_question<'a, R>(
    candidates: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> QuizDraw<'a>
where
    R: Rng + ?Sized,
{
    if previous.len() == candidates.len() {
        return QuizDraw::RoundComplete;
    }

    let seen: HashSet<i64> = previous.iter().copied().collect();
    if candidates.iter().all(|candidate| seen.contains(&candidate.id)) {
        return QuizDraw::RoundComplete;
    }

    loop {
        match candidates.choose(rng) {
            Some(candidate) if !seen.contains(&candidate.id) => {
                return QuizDraw::Question(candidate)
            }
            Some(_) => continue,
            None => return QuizDraw::RoundComplete,
        }
    }
}

pub struct QuizService {
    store: Arc<dyn TriviaStore>,
    legacy_category_offset: bool,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>, legacy_category_offset: bool) -> Self {
        Self {
            store,
            legacy_category_offset,
        }
    }

    pub fn resolve_filter(&self, selector: &QuizCategory) -> Result<CategoryFilter, String> {
        selector.filter(self.legacy_category_offset)
    }

    pub async fn candidates(&self, filter: CategoryFilter) -> StoreResult<Vec<Question>> {
        match filter {
            CategoryFilter::All => self.store.list_questions().await,
            CategoryFilter::Category(id) => self.store.questions_in_category(id).await,
        }
    }

    /// Loads the candidate set and deals the next unseen question, or `None`
    /// when the round is complete.
    pub async fn next_question(
        &self,
        filter: CategoryFilter,
        previous: &[i64],
    ) -> StoreResult<Option<Question>> {
        let candidates = self.candidates(filter).await?;

        let drawn = {
            let mut rng = rand::rng();
            match draw_question(&candidates, previous, &mut rng) {
                QuizDraw::Question(question) => Some(question.clone()),
                QuizDraw::RoundComplete => None,
            }
        };

        let outcome = if drawn.is_some() { "question" } else { "complete" };
        QUIZ_DRAWS_TOTAL.with_label_values(&[outcome]).inc();

        tracing::debug!(
            "Quiz draw: filter={:?}, candidates={}, previous={}, outcome={}",
            filter,
            candidates.len(),
            previous.len(),
            outcome
        );

        Ok(drawn)
    }
}
