//! Catalog service

use std::collections::HashMap;

use crate::{
    config::CirculationConfig,
    error::{AppError, AppResult},
    models::{Book, BookId, NewBook},
    repository::Repository,
};

pub struct CatalogService<'a> {
    config: &'a CirculationConfig,
    repository: &'a mut Repository,
}

impl<'a> CatalogService<'a> {
    pub fn new(config: &'a CirculationConfig, repository: &'a mut Repository) -> Self {
        Self { config, repository }
    }

    /// Register a single available copy of a book
    pub fn register_book(&mut self, book: NewBook) -> Book {
        let id = self.repository.books.next_id();
        tracing::debug!("Allocated book id {}", id);

        let book = book.into_book(id);
        self.repository.books.insert(id, book.clone());
        tracing::info!("Registered book {} ({:?} by {})", id, book.title, book.author);
        book
    }

    /// Register a book from `bookName`, `author` and `publicationYear` attributes
    pub fn register_book_from_attributes(
        &mut self,
        attributes: &HashMap<String, String>,
    ) -> AppResult<Book> {
        let book = NewBook::from_attributes(attributes, self.config.parse_policy)
            .inspect_err(|e| tracing::warn!("Book registration rejected: {}", e))?;
        Ok(self.register_book(book))
    }

    pub fn get_book(&self, id: BookId) -> AppResult<Book> {
        self.repository
            .books
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// All books, in registration order
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.iter().cloned().collect()
    }
}
