use crate::cli::parser::{Commands, ErrataAction, NoteAction};
use crate::config::Config;
use crate::core::Notebook;
use crate::errors::AppResult;
use crate::models::{ErrataEntry, NoteEntry, NotebookRecord};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::preview;
use serde::Serialize;
use serde::de::DeserializeOwned;

const PREVIEW_WIDTH: usize = 80;

/// Handles both `note` and `errata`; the two collections only differ in
/// their record type.
pub fn handle(cmd: &Commands, cfg: &Config, assume_yes: bool) -> AppResult<()> {
    match cmd {
        Commands::Note { action } => handle_note(action, cfg, assume_yes),
        Commands::Errata { action } => handle_errata(action, cfg, assume_yes),
        _ => Ok(()),
    }
}

fn handle_note(action: &NoteAction, cfg: &Config, assume_yes: bool) -> AppResult<()> {
    let mut book: Notebook<NoteEntry> = Notebook::open(cfg.note_path())?;

    match action {
        NoteAction::Add {
            chapter,
            subject,
            content,
        } => {
            let note = NoteEntry {
                book: cfg.book_name.clone(),
                chapter: *chapter,
                subject: subject.clone(),
                content: content.clone(),
            };
            let key = book.add(&note)?;
            success(format!("Note {} added", key));
        }
        NoteAction::List => print_list(&book)?,
        NoteAction::Show { key } => println!("{}", book.get(key)?.render()),
        NoteAction::Edit {
            key,
            chapter,
            subject,
            content,
        } => {
            let mut note = book.get(key)?;
            if let Some(c) = chapter {
                note.chapter = *c;
            }
            if let Some(s) = subject {
                note.subject = s.clone();
            }
            if let Some(c) = content {
                note.content = c.clone();
            }
            book.update(key, &note)?;
            success(format!("Note {} updated", key));
        }
        NoteAction::Delete { key } => delete(&mut book, key, assume_yes)?,
    }

    book.close()
}

fn handle_errata(action: &ErrataAction, cfg: &Config, assume_yes: bool) -> AppResult<()> {
    let mut book: Notebook<ErrataEntry> = Notebook::open(cfg.errata_path())?;

    match action {
        ErrataAction::Add { page, content } => {
            let errata = ErrataEntry {
                book: cfg.book_name.clone(),
                page: page.clone(),
                content: content.clone(),
            };
            let key = book.add(&errata)?;
            success(format!("Errata {} added", key));
        }
        ErrataAction::List => print_list(&book)?,
        ErrataAction::Show { key } => println!("{}", book.get(key)?.render()),
        ErrataAction::Delete { key } => delete(&mut book, key, assume_yes)?,
    }

    book.close()
}

fn print_list<T>(book: &Notebook<T>) -> AppResult<()>
where
    T: NotebookRecord + Serialize + DeserializeOwned,
{
    let records = book.list()?;
    if records.is_empty() {
        info(format!("No {} recorded.", T::KIND));
        return Ok(());
    }

    for (key, record) in records {
        println!(
            "{}[{}]{} {}",
            GREY,
            key,
            RESET,
            preview(record.content(), PREVIEW_WIDTH)
        );
    }
    Ok(())
}

fn delete<T>(book: &mut Notebook<T>, key: &str, assume_yes: bool) -> AppResult<()>
where
    T: NotebookRecord + Serialize + DeserializeOwned,
{
    let record = book.get(key)?;
    println!("{}", record.render());

    if !ask_confirmation(&format!("Delete {} {}?", T::KIND, key), assume_yes) {
        info("Operation cancelled.");
        return Ok(());
    }

    book.delete(key)?;
    success(format!("{} {} deleted", T::KIND, key));
    Ok(())
}
