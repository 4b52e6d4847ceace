//! Fixed-size page windows over ordered result sets.

/// Number of questions returned per page by every paginated endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page number taken from the `page` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(usize);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: usize) -> Self {
        Page(number.max(1))
    }

    /// Absent, non-numeric, zero and negative values all mean the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .map(Page::new)
            .unwrap_or(Page::FIRST)
    }

    pub fn number(self) -> usize {
        self.0
    }

    fn offset(self) -> usize {
        (self.0 - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

/// Returns the items at `[(page-1)*10, min(len, page*10))`, or an empty slice
/// when the page starts past the end.
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    let start = page.offset();
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
