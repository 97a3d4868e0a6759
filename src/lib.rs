//! book-catalog - Single-user digital book catalog
//!
//! This crate provides the catalog state container and its persistence and
//! ingestion pipeline:
//! - Reducer-style action dispatch over an immutable catalog state
//! - Write-through persistence of the book list and admin flag to an
//!   embedded redb database, with seed-data fallback at startup
//! - File ingestion for covers and documents (validation, base64 data-URL
//!   embedding, ephemeral previews)
//! - Pure search/filter over the book list and a view router with an
//!   authentication guard on the admin surface

pub mod auth;
pub mod catalog;
pub mod config;
pub mod ingest;
pub mod router;
pub mod storage;
#[cfg(test)]
pub mod testutil;

use std::sync::Arc;

use thiserror::Error;

use auth::CredentialProvider;
use catalog::models::ViewId;
use catalog::store::{Action, CatalogState, CatalogStore};
use config::Config;
use ingest::PreviewStore;
use storage::{Database, DatabaseError};

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The running catalog: the state container wired to write-through
/// durable storage. Constructed once at process start and passed to all
/// consumers; independent instances are cheap to create for testing.
pub struct Library {
    pub config: Config,
    db: Database,
    store: CatalogStore,
    previews: PreviewStore,
}

impl Library {
    /// Open durable storage and hydrate catalog state from it.
    ///
    /// A missing or malformed book list falls back to the seed dataset,
    /// which is persisted immediately so the next startup finds it.
    pub fn open(config: Config) -> Result<Self, LibraryError> {
        let db = Database::open(&config.data_dir)?;
        let previews = PreviewStore::new(&config.preview_dir)?;
        let mut store = CatalogStore::new();

        match db.get_books()? {
            Some(books) => {
                tracing::debug!(count = books.len(), "Loaded book list from storage");
                store.dispatch(Action::SetBooks(books));
            }
            None => {
                let books = catalog::seed::seed_books();
                db.put_books(&books)?;
                tracing::debug!(count = books.len(), "Seeded book list");
                store.dispatch(Action::SetBooks(books));
            }
        }

        if db.get_authenticated()? {
            store.dispatch(Action::SetAuthenticated(true));
        }

        Ok(Self {
            config,
            db,
            store,
            previews,
        })
    }

    pub fn state(&self) -> &CatalogState {
        self.store.state()
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn previews(&self) -> &PreviewStore {
        &self.previews
    }

    /// Apply an action and mirror any resulting book-list or auth change
    /// to durable storage. Writes happen synchronously off each committed
    /// transition, so storage observes states in dispatch order.
    pub fn dispatch(&mut self, action: Action) -> Result<&CatalogState, LibraryError> {
        let books_before = Arc::clone(&self.store.state().books);
        let auth_before = self.store.state().is_authenticated;

        self.store.dispatch(action);

        let state = self.store.state();
        if !Arc::ptr_eq(&books_before, &state.books) {
            self.db.put_books(&state.books)?;
            tracing::debug!(count = state.books.len(), "Persisted book list");
        }
        if auth_before != state.is_authenticated {
            self.db.put_authenticated(state.is_authenticated)?;
            tracing::debug!(
                authenticated = state.is_authenticated,
                "Persisted auth flag"
            );
        }

        Ok(state)
    }

    /// Verify credentials and, on a match, enter the admin surface.
    /// Returns whether the credentials matched; a failed attempt leaves
    /// state untouched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool, LibraryError> {
        if !self.config.credentials.verify(username, password) {
            return Ok(false);
        }

        self.dispatch(Action::SetAuthenticated(true))?;
        self.dispatch(Action::SetView(ViewId::Admin))?;
        Ok(true)
    }

    /// Close the admin session and return to the home surface.
    pub fn logout(&mut self) -> Result<(), LibraryError> {
        self.dispatch(Action::SetAuthenticated(false))?;
        self.dispatch(Action::SetView(ViewId::Home))?;
        Ok(())
    }

    /// The surface to render for the current state (admin guard applied).
    pub fn resolved_view(&self) -> ViewId {
        router::resolve_view(self.store.state())
    }
}
