pub mod day_summary;
pub mod errata_entry;
pub mod log_entry;
pub mod note_entry;

pub use day_summary::DaySummary;
pub use errata_entry::ErrataEntry;
pub use log_entry::LogEntry;
pub use note_entry::NoteEntry;

/// Records kept in a notebook-like collection (notes, errata): keyed by
/// creation time, listed with a short preview, shown in full on request.
pub trait NotebookRecord {
    /// Singular name used in messages and audit rows.
    const KIND: &'static str;

    /// Free text used for the listing preview.
    fn content(&self) -> &str;

    /// Full multi-line rendering.
    fn render(&self) -> String;
}
