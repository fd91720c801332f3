use rreading::core::Notebook;
use rreading::errors::AppError;
use rreading::models::{ErrataEntry, NoteEntry, NotebookRecord};

mod common;
use common::test_store;

fn note(subject: &str) -> NoteEntry {
    NoteEntry {
        book: "Book".into(),
        chapter: 3,
        subject: subject.into(),
        content: format!("about {}", subject),
    }
}

#[test]
fn test_same_second_adds_do_not_overwrite() {
    let path = test_store("notebook_collision", ".note");
    let mut book: Notebook<NoteEntry> = Notebook::open(&path).expect("open");

    let a = book.add_at(1000, &note("first")).expect("add");
    let b = book.add_at(1000, &note("second")).expect("add");
    assert_eq!(a, "1000");
    assert_eq!(b, "1001");

    let subjects: Vec<String> = book
        .list()
        .expect("list")
        .into_iter()
        .map(|(_, n)| n.subject)
        .collect();
    assert_eq!(subjects, vec!["first", "second"]);
}

#[test]
fn test_list_orders_by_numeric_key() {
    let path = test_store("notebook_order", ".note");
    let mut book: Notebook<NoteEntry> = Notebook::open(&path).expect("open");

    book.add_at(100, &note("late")).expect("add");
    book.add_at(99, &note("early")).expect("add");

    let keys: Vec<String> = book.list().expect("list").into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["99", "100"]);
}

#[test]
fn test_update_and_delete() {
    let path = test_store("notebook_edit", ".note");
    let mut book: Notebook<NoteEntry> = Notebook::open(&path).expect("open");

    let key = book.add_at(500, &note("draft")).expect("add");
    let mut n = book.get(&key).expect("get");
    n.content = "final text".into();
    book.update(&key, &n).expect("update");
    book.close().expect("close");

    let mut book: Notebook<NoteEntry> = Notebook::open(&path).expect("reopen");
    assert_eq!(book.get(&key).expect("get").content, "final text");

    book.delete(&key).expect("delete");
    assert!(matches!(book.get(&key), Err(AppError::NotFound(_))));
    assert!(matches!(book.delete(&key), Err(AppError::NotFound(_))));
    assert!(matches!(
        book.update("12345", &note("ghost")),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_errata_render_keeps_page_label() {
    let path = test_store("notebook_errata", ".errata");
    let mut book: Notebook<ErrataEntry> = Notebook::open(&path).expect("open");

    let errata = ErrataEntry {
        book: "Book".into(),
        page: "xii".into(),
        content: "typo in the preface".into(),
    };
    let key = book.add(&errata).expect("add");

    let shown = book.get(&key).expect("get").render();
    assert!(shown.contains("Page: xii"));
    assert!(shown.contains("typo in the preface"));
    assert_eq!(ErrataEntry::KIND, "errata");
}
