//! Book model and related types.
//!
//! A book row carries two description fields: `short_descr` is searchable and
//! exposed on the wire as `descr`; `long_descr` stays server-side and survives
//! updates untouched (edit requests never carry it).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Full book model (DB + domain).
///
/// `id` is assigned by the store; a book that has not been persisted yet
/// carries `id == 0` and the repository ignores it on insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub id: i32,
    pub title: Option<String>,
    pub short_descr: Option<String>,
    pub long_descr: Option<String>,
    pub isbn: Option<String>,
    pub published_date: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Book list query parameters (API).
///
/// `page` and `page_size` must be supplied together; `query` is an optional
/// case-insensitive substring filter on title and short description, only
/// meaningful on the paginated path.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BooksQuery {
    pub page: Option<i32>,
    pub page_size: Option<i32>,
    pub query: Option<String>,
}
