//! Book catalog service: listing, text search, pagination, create/update.

use crate::{
    error::AppResult,
    models::{book::Book, pagination::PaginatedList},
    repository::Repository,
};

/// Keep the books whose title or short description contains `query` as a
/// case-insensitive substring. A missing, empty, or whitespace-only query
/// keeps everything; the source order is preserved either way.
pub fn filter_books(books: Vec<Book>, query: Option<&str>) -> Vec<Book> {
    let needle = match query {
        Some(q) if !q.trim().is_empty() => q.to_lowercase(),
        _ => return books,
    };

    books
        .into_iter()
        .filter(|book| matches_query(book, &needle))
        .collect()
}

fn matches_query(book: &Book, needle_lower: &str) -> bool {
    let field_contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|text| text.to_lowercase().contains(needle_lower))
    };

    field_contains(&book.title) || field_contains(&book.short_descr)
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book, store order.
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_all().await
    }

    /// List one page of books, optionally narrowed by a text query.
    pub async fn list_paginated(
        &self,
        page: i32,
        page_size: i32,
        query: Option<&str>,
    ) -> AppResult<PaginatedList<Book>> {
        let books = self.repository.books.list_all().await?;
        let filtered = filter_books(books, query);

        Ok(PaginatedList::new(filtered, page, page_size))
    }

    /// Get a book by id.
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Persist a new book and return the store-assigned id.
    pub async fn create_book(&self, book: &Book) -> AppResult<i32> {
        self.repository.books.create(book).await
    }

    /// Overwrite the stored book carrying `book.id` with the given fields.
    pub async fn update_book(&self, book: &Book) -> AppResult<()> {
        self.repository.books.update(book).await
    }
}
