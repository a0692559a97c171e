//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book row from the book_catalog view
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// ISBN, the catalog key
    pub isbn: String,
    pub title: String,
    pub genre: Option<String>,
    pub publication_year: Option<i16>,
    /// Derived flag: true when no open borrowing references this book
    pub availability_status: bool,
}

/// Availability update request
///
/// The flag is optional on the wire so a missing field can be reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAvailabilityRequest {
    #[serde(rename = "availabilityStatus")]
    pub availability_status: Option<bool>,
}
