//! The catalog state container: a closed action set applied by a pure
//! reducer. All side effects (persistence, file I/O) live outside.

use std::sync::Arc;

use super::models::{Book, ViewId};
use super::taxonomy;

/// Process-wide catalog state. Each transition produces a new value; the
/// book list sits behind an `Arc` so unrelated transitions keep the same
/// allocation, letting the persistence layer detect list changes by
/// identity instead of deep comparison.
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub books: Arc<Vec<Book>>,
    /// Value snapshot of the book open in the reading view. Later catalog
    /// edits do not retroactively change what the reader is viewing.
    pub current_book: Option<Book>,
    pub is_authenticated: bool,
    pub current_view: ViewId,
    pub search_term: String,
    pub selected_category: String,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            books: Arc::new(Vec::new()),
            current_book: None,
            is_authenticated: false,
            current_view: ViewId::Home,
            search_term: String::new(),
            selected_category: taxonomy::ALL_CATEGORIES.to_string(),
        }
    }
}

/// The closed set of catalog mutations.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the entire book list verbatim. Used at rehydration.
    SetBooks(Vec<Book>),
    /// Append a book. The caller supplies a unique id.
    AddBook(Book),
    /// Replace the book with a matching id. Silent no-op when absent.
    UpdateBook(Book),
    /// Remove the book with the given id. No-op when absent.
    DeleteBook(String),
    SetCurrentBook(Option<Book>),
    SetAuthenticated(bool),
    SetView(ViewId),
    SetSearchTerm(String),
    SetSelectedCategory(String),
}

/// Pure transition function: no I/O, no mutation of the input state.
pub fn reduce(state: &CatalogState, action: Action) -> CatalogState {
    match action {
        Action::SetBooks(books) => CatalogState {
            books: Arc::new(books),
            ..state.clone()
        },
        Action::AddBook(book) => {
            let mut books = state.books.as_ref().clone();
            books.push(book);
            CatalogState {
                books: Arc::new(books),
                ..state.clone()
            }
        }
        Action::UpdateBook(book) => {
            if !state.books.iter().any(|b| b.id == book.id) {
                // Unknown id: keep the existing list allocation untouched.
                return state.clone();
            }
            let books = state
                .books
                .iter()
                .map(|b| if b.id == book.id { book.clone() } else { b.clone() })
                .collect();
            CatalogState {
                books: Arc::new(books),
                ..state.clone()
            }
        }
        Action::DeleteBook(id) => {
            if !state.books.iter().any(|b| b.id == id) {
                return state.clone();
            }
            let books = state
                .books
                .iter()
                .filter(|b| b.id != id)
                .cloned()
                .collect();
            CatalogState {
                books: Arc::new(books),
                ..state.clone()
            }
        }
        Action::SetCurrentBook(book) => CatalogState {
            current_book: book,
            ..state.clone()
        },
        Action::SetAuthenticated(authenticated) => CatalogState {
            is_authenticated: authenticated,
            ..state.clone()
        },
        Action::SetView(view) => CatalogState {
            current_view: view,
            ..state.clone()
        },
        Action::SetSearchTerm(term) => CatalogState {
            search_term: term,
            ..state.clone()
        },
        Action::SetSelectedCategory(category) => CatalogState {
            selected_category: category,
            ..state.clone()
        },
    }
}

/// Holds the current state and serializes transitions. Single-threaded by
/// construction: dispatches are sequential, never concurrent.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: CatalogState,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Apply an action and commit the resulting state.
    pub fn dispatch(&mut self, action: Action) -> &CatalogState {
        self.state = reduce(&self.state, action);
        &self.state
    }
}
