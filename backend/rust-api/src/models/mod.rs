use serde::Serialize;

pub mod category;
pub mod question;
pub mod quiz;

pub use category::Category;
pub use question::{NewQuestion, Question};

/// Wraps a payload in the `{ "success": true, ... }` envelope every endpoint returns.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Success<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}
