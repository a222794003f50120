//! Book endpoints and wire shapes.
//!
//! The wire contract never exposes the long description: responses surface
//! `short_descr` as `descr`, and edit requests cannot overwrite `long_descr`
//! (it is carried forward from the stored record instead).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BooksQuery},
        pagination::PaginatedList,
    },
};

/// Book create/update request body. Every field is optional text.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub published_date: Option<String>,
    pub thumbnail_url: Option<String>,
    pub descr: Option<String>,
}

impl BookRequest {
    /// Map the request onto a fresh, not-yet-persisted book.
    ///
    /// The store assigns the identity on insert and there is no previous
    /// record to inherit a long description from.
    pub fn into_new_book(self) -> Book {
        Book {
            id: 0,
            title: self.title,
            short_descr: self.descr,
            long_descr: None,
            isbn: self.isbn,
            published_date: self.published_date,
            thumbnail_url: self.thumbnail_url,
            created_at: None,
            updated_at: None,
        }
    }

    /// Map the request onto `current`, producing the record to persist.
    ///
    /// The identity is forced to `id` regardless of the request, and the long
    /// description is copied unchanged from the stored record.
    pub fn into_updated_book(self, id: i32, current: &Book) -> Book {
        Book {
            id,
            title: self.title,
            short_descr: self.descr,
            long_descr: current.long_descr.clone(),
            isbn: self.isbn,
            published_date: self.published_date,
            thumbnail_url: self.thumbnail_url,
            created_at: current.created_at,
            updated_at: current.updated_at,
        }
    }
}

/// Book projection returned on the wire.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub book_id: i32,
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub published_date: Option<String>,
    pub thumbnail_url: Option<String>,
    pub descr: Option<String>,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            book_id: book.id,
            title: book.title.clone(),
            isbn: book.isbn.clone(),
            published_date: book.published_date.clone(),
            thumbnail_url: book.thumbnail_url.clone(),
            descr: book.short_descr.clone(),
        }
    }
}

/// Page envelope returned by the paginated list path.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedListResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub page_number: i32,
    pub page_size: i32,
    pub total_count: i32,
    pub total_pages: i32,
    pub items: Vec<T>,
}

impl From<PaginatedList<Book>> for PaginatedListResponse<BookResponse> {
    fn from(page: PaginatedList<Book>) -> Self {
        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            total_count: page.total_count,
            total_pages: page.total_pages,
            items: page.items.iter().map(BookResponse::from).collect(),
        }
    }
}

/// List books, either in full or as one page of a filtered search.
///
/// `page` and `pageSize` must be supplied together: with both present the
/// response is a page envelope, with neither it is the plain full list, and
/// with exactly one the request is rejected naming the missing parameter.
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BooksQuery),
    responses(
        (status = 200, description = "Page envelope when page and pageSize are supplied, plain book list otherwise"),
        (status = 422, description = "Exactly one of page/pageSize supplied", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(params): Query<BooksQuery>,
) -> AppResult<Response> {
    match (params.page, params.page_size) {
        (Some(page), Some(page_size)) => {
            tracing::info!("Get books on page {} with page size {}.", page, page_size);

            let books = state
                .services
                .books
                .list_paginated(page, page_size, params.query.as_deref())
                .await?;

            Ok(Json(PaginatedListResponse::from(books)).into_response())
        }
        (Some(_), None) => {
            tracing::info!("Get books missing value for page size.");

            Err(AppError::Validation(
                "Parameter pageSize is missing a value.".to_string(),
            ))
        }
        (None, Some(_)) => {
            tracing::info!("Get books missing value for page.");

            Err(AppError::Validation(
                "Parameter page is missing a value.".to_string(),
            ))
        }
        (None, None) => {
            tracing::info!("Get all books.");

            let books = state.services.books.list_all().await?;
            let response: Vec<BookResponse> = books.iter().map(BookResponse::from).collect();

            Ok(Json(response).into_response())
        }
    }
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookResponse>> {
    tracing::info!("Get book by id {}", id);

    let book = state.services.books.get_book(id).await?;

    Ok(Json(BookResponse::from(&book)))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 200, description = "Id of the created book", body = i32)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BookRequest>,
) -> AppResult<Json<i32>> {
    tracing::info!("Create book.");

    let book = request.into_new_book();
    let id = state.services.books.create_book(&book).await?;

    Ok(Json(id))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book updated"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<BookRequest>,
) -> AppResult<StatusCode> {
    tracing::info!("Update book with id {}", id);

    let current = state.services.books.get_book(id).await?;
    let updated = request.into_updated_book(id, &current);
    state.services.books.update_book(&updated).await?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_book() -> Book {
        Book {
            id: 7,
            title: Some("Implementing Domain-Driven Design".to_string()),
            short_descr: Some("Short description.".to_string()),
            long_descr: Some("Long description.".to_string()),
            isbn: Some("0321834577".to_string()),
            published_date: Some("2013-02-06".to_string()),
            thumbnail_url: Some("https://covers.example.org/0321834577.jpg".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    fn request() -> BookRequest {
        BookRequest {
            title: Some("New title".to_string()),
            isbn: Some("1234567890".to_string()),
            published_date: Some("2020-01-01".to_string()),
            thumbnail_url: Some("https://covers.example.org/new.jpg".to_string()),
            descr: Some("New description.".to_string()),
        }
    }

    #[test]
    fn test_response_sources_descr_from_short_descr() {
        let book = stored_book();
        let response = BookResponse::from(&book);

        assert_eq!(response.book_id, 7);
        assert_eq!(response.title, book.title);
        assert_eq!(response.isbn, book.isbn);
        assert_eq!(response.published_date, book.published_date);
        assert_eq!(response.thumbnail_url, book.thumbnail_url);
        assert_eq!(response.descr.as_deref(), Some("Short description."));
    }

    #[test]
    fn test_response_never_exposes_long_descr() {
        let response = BookResponse::from(&stored_book());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("longDescr").is_none());
        assert_eq!(json["descr"], "Short description.");
    }

    #[test]
    fn test_update_mapping_preserves_long_descr() {
        let current = stored_book();
        let updated = request().into_updated_book(7, &current);

        assert_eq!(updated.long_descr.as_deref(), Some("Long description."));
        assert_eq!(updated.short_descr.as_deref(), Some("New description."));
        assert_eq!(updated.title.as_deref(), Some("New title"));
    }

    #[test]
    fn test_update_mapping_forces_target_identity() {
        let updated = request().into_updated_book(42, &stored_book());

        assert_eq!(updated.id, 42);
    }

    #[test]
    fn test_new_book_mapping_has_no_identity_and_no_long_descr() {
        let book = request().into_new_book();

        assert_eq!(book.id, 0);
        assert!(book.long_descr.is_none());
        assert_eq!(book.short_descr.as_deref(), Some("New description."));
        assert_eq!(book.title.as_deref(), Some("New title"));
    }

    #[test]
    fn test_paginated_mapping_copies_counts_and_maps_items() {
        let page = PaginatedList::new(vec![stored_book()], 1, 2);
        let response = PaginatedListResponse::from(page);

        assert_eq!(response.page_number, 1);
        assert_eq!(response.page_size, 2);
        assert_eq!(response.total_count, 1);
        assert_eq!(response.total_pages, 1);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].descr.as_deref(), Some("Short description."));
    }
}
