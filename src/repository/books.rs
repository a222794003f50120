//! Books repository for database operations.

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// List every book in store order (id ascending).
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, short_descr, long_descr, isbn,
                   published_date, thumbnail_url, created_at, updated_at
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Get the single book with the given id.
    ///
    /// Zero matches is a not-found; more than one match means the store no
    /// longer guarantees identity uniqueness and fails hard rather than
    /// silently picking a row.
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        let matches = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, short_descr, long_descr, isbn,
                   published_date, thumbnail_url, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let mut matches = matches.into_iter();
        match (matches.next(), matches.next()) {
            (Some(book), None) => Ok(book),
            (None, _) => Err(AppError::NotFound(format!("Book with id {} not found", id))),
            (Some(_), Some(_)) => Err(AppError::Integrity(format!(
                "More than one book with id {}",
                id
            ))),
        }
    }

    // =========================================================================
    // CREATE
    // =========================================================================

    /// Insert a new book; the store assigns the id.
    pub async fn create(&self, book: &Book) -> AppResult<i32> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (
                title, short_descr, long_descr, isbn,
                published_date, thumbnail_url, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.short_descr)
        .bind(&book.long_descr)
        .bind(&book.isbn)
        .bind(&book.published_date)
        .bind(&book.thumbnail_url)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Overwrite all mutable fields of the book identified by `book.id`.
    pub async fn update(&self, book: &Book) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, short_descr = $2, long_descr = $3, isbn = $4,
                published_date = $5, thumbnail_url = $6, updated_at = $7
            WHERE id = $8
            "#,
        )
        .bind(&book.title)
        .bind(&book.short_descr)
        .bind(&book.long_descr)
        .bind(&book.isbn)
        .bind(&book.published_date)
        .bind(&book.thumbnail_url)
        .bind(Utc::now())
        .bind(book.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book with id {} not found",
                book.id
            )));
        }

        Ok(())
    }
}
