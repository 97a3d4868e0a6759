use std::sync::Arc;

use chrono::NaiveDate;
use book_catalog::catalog::filter_books;
use book_catalog::catalog::models::{Book, ViewId};
use book_catalog::catalog::store::{Action, CatalogStore};
use book_catalog::catalog::taxonomy;

fn sample_book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "Autor de Prueba".to_string(),
        description: "Descripción".to_string(),
        category: "Literatura General".to_string(),
        subcategory: "Clásicos".to_string(),
        cover_url: "https://example.com/cover.jpg".to_string(),
        cover_data: None,
        pdf_url: "/pdfs/sample.pdf".to_string(),
        pdf_data: None,
        upload_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        pages: Some(200),
    }
}

#[test]
fn test_initial_state() {
    let store = CatalogStore::new();
    let state = store.state();

    assert!(state.books.is_empty());
    assert!(state.current_book.is_none());
    assert!(!state.is_authenticated);
    assert_eq!(state.current_view, ViewId::Home);
    assert_eq!(state.search_term, "");
    assert_eq!(state.selected_category, taxonomy::ALL_CATEGORIES);
}

#[test]
fn test_add_book_appears_once_in_unfiltered_results() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::AddBook(sample_book("a", "Libro A")));
    store.dispatch(Action::AddBook(sample_book("b", "Libro B")));

    let state = store.state();
    let all = filter_books(&state.books, "", taxonomy::ALL_CATEGORIES);
    assert_eq!(all.len(), 2);
    assert_eq!(all.iter().filter(|b| b.id == "a").count(), 1);
}

#[test]
fn test_update_book_replaces_in_place() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::AddBook(sample_book("a", "Libro A")));
    store.dispatch(Action::AddBook(sample_book("b", "Libro B")));
    store.dispatch(Action::AddBook(sample_book("c", "Libro C")));

    store.dispatch(Action::UpdateBook(sample_book("b", "Libro B, 2a ed.")));

    let books = &store.state().books;
    assert_eq!(books.len(), 3);
    assert_eq!(books[0].id, "a");
    assert_eq!(books[1].title, "Libro B, 2a ed.");
    assert_eq!(books[2].id, "c");
}

#[test]
fn test_update_unknown_id_is_a_no_op() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::AddBook(sample_book("a", "Libro A")));
    let before = Arc::clone(&store.state().books);

    store.dispatch(Action::UpdateBook(sample_book("zzz", "Fantasma")));

    // Same list allocation: nothing changed, not even a copy.
    assert!(Arc::ptr_eq(&before, &store.state().books));
}

#[test]
fn test_delete_book_removes_exactly_one() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::AddBook(sample_book("a", "Libro A")));
    store.dispatch(Action::AddBook(sample_book("b", "Libro B")));

    store.dispatch(Action::DeleteBook("a".to_string()));

    let books = &store.state().books;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, "b");
}

#[test]
fn test_delete_unknown_id_is_a_no_op() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::AddBook(sample_book("a", "Libro A")));
    let before = Arc::clone(&store.state().books);

    store.dispatch(Action::DeleteBook("zzz".to_string()));

    assert!(Arc::ptr_eq(&before, &store.state().books));
}

#[test]
fn test_set_books_is_idempotent() {
    let list = vec![sample_book("a", "Libro A"), sample_book("b", "Libro B")];

    let mut store = CatalogStore::new();
    store.dispatch(Action::SetBooks(list.clone()));
    let first: Vec<Book> = store.state().books.as_ref().clone();

    store.dispatch(Action::SetBooks(list.clone()));
    let second: Vec<Book> = store.state().books.as_ref().clone();

    assert_eq!(first, list);
    assert_eq!(second, list);
}

#[test]
fn test_unrelated_actions_keep_the_book_list_allocation() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::AddBook(sample_book("a", "Libro A")));
    let before = Arc::clone(&store.state().books);

    store.dispatch(Action::SetSearchTerm("quijote".to_string()));
    store.dispatch(Action::SetView(ViewId::Catalog));
    store.dispatch(Action::SetSelectedCategory("Clásicos".to_string()));

    assert!(Arc::ptr_eq(&before, &store.state().books));
    assert_eq!(store.state().search_term, "quijote");
    assert_eq!(store.state().current_view, ViewId::Catalog);
}

#[test]
fn test_current_book_is_a_snapshot_not_a_link() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::AddBook(sample_book("a", "Título Original")));
    let opened = store.state().books[0].clone();
    store.dispatch(Action::SetCurrentBook(Some(opened)));

    // Editing the catalog entry mid-session must not change the open book.
    store.dispatch(Action::UpdateBook(sample_book("a", "Título Editado")));

    let state = store.state();
    assert_eq!(state.books[0].title, "Título Editado");
    assert_eq!(
        state.current_book.as_ref().map(|b| b.title.as_str()),
        Some("Título Original")
    );
}

#[test]
fn test_set_current_book_absent_clears_selection() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::SetCurrentBook(Some(sample_book("a", "Libro A"))));
    store.dispatch(Action::SetCurrentBook(None));
    assert!(store.state().current_book.is_none());
}

#[test]
fn test_display_precedence_prefers_embedded_data() {
    let mut book = sample_book("a", "Libro A");
    assert_eq!(book.display_cover(), "https://example.com/cover.jpg");
    assert_eq!(book.display_document(), "/pdfs/sample.pdf");

    book.cover_data = Some("data:image/png;base64,QUJD".to_string());
    assert_eq!(book.display_cover(), "data:image/png;base64,QUJD");
}

#[test]
fn test_reading_progress_uses_pages_or_the_default() {
    let mut book = sample_book("a", "Libro A"); // 200 pages
    assert_eq!(book.reading_progress(50), 25.0);

    book.pages = None; // falls back to 100
    assert_eq!(book.reading_progress(50), 50.0);
}

#[test]
fn test_generated_ids_are_numeric_time_tokens() {
    let id = Book::generate_id();
    assert!(!id.is_empty());
    assert!(id.chars().all(|c| c.is_ascii_digit()));
}
