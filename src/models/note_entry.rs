use super::NotebookRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub book: String,
    pub chapter: i64,
    pub subject: String,
    pub content: String,
}

impl NotebookRecord for NoteEntry {
    const KIND: &'static str = "note";

    fn content(&self) -> &str {
        &self.content
    }

    fn render(&self) -> String {
        format!(
            "Book: {}\nChapter: {}\nSubject: {}\nContent:\n{}",
            self.book, self.chapter, self.subject, self.content
        )
    }
}
