use super::NotebookRecord;
use serde::{Deserialize, Serialize};

/// A mistake spotted in the book. `page` is free text so that labels such
/// as `xii` or `42, fig. 3` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrataEntry {
    pub book: String,
    pub page: String,
    pub content: String,
}

impl NotebookRecord for ErrataEntry {
    const KIND: &'static str = "errata";

    fn content(&self) -> &str {
        &self.content
    }

    fn render(&self) -> String {
        format!(
            "Book: {}\nPage: {}\nContent:\n{}",
            self.book, self.page, self.content
        )
    }
}
