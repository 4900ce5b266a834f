//! Catalog loading and lookup.
//!
//! The catalog is a static JSON file (`books.json`) loaded once at startup.
//! Unlike the per-key store state, a bad catalog file fails startup: the
//! catalog ships with the binary, so a parse error is a deployment mistake
//! rather than user data to recover from.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use readora_core::{Book, BookId, Category};

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },
    #[error("duplicate book id: {0}")]
    DuplicateId(BookId),
}

/// The in-memory catalog. Immutable after load; cheap to clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Arc<Vec<Book>>,
}

impl Catalog {
    /// Load `books.json` from the content directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unparseable, or contains
    /// duplicate identifiers.
    pub fn load(content_dir: &Path) -> Result<Self, CatalogError> {
        let path = content_dir.join("books.json");
        let display = path.display().to_string();

        let raw = std::fs::read_to_string(&path).map_err(|e| CatalogError::Io {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let books: Vec<Book> = serde_json::from_str(&raw).map_err(|e| CatalogError::Parse {
            path: display,
            message: e.to_string(),
        })?;

        let catalog = Self::from_books(books)?;
        tracing::info!(books = catalog.books.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Build a catalog from an already-parsed book list.
    ///
    /// # Errors
    ///
    /// Returns an error if two books share an identifier.
    pub fn from_books(books: Vec<Book>) -> Result<Self, CatalogError> {
        let mut seen = HashMap::new();
        for book in &books {
            if seen.insert(book.id.clone(), ()).is_some() {
                return Err(CatalogError::DuplicateId(book.id.clone()));
            }
        }

        Ok(Self {
            books: Arc::new(books),
        })
    }

    /// All books, in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by identifier.
    #[must_use]
    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| &book.id == id)
    }

    /// The first `n` books, used for the home-page featured rail.
    #[must_use]
    pub fn featured(&self, n: usize) -> &[Book] {
        self.books.get(..n.min(self.books.len())).unwrap_or(&[])
    }

    /// Number of books in the given category.
    #[must_use]
    pub fn category_count(&self, category: Category) -> usize {
        self.books
            .iter()
            .filter(|book| book.category == category)
            .count()
    }
}
