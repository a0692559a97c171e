//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, UpdateAvailabilityRequest},
};

use super::AuthenticatedUser;

/// Status message response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// List the full book catalog
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&isbn).await?;
    Ok(Json(book))
}

/// Update a book's availability flag
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    request_body = UpdateAvailabilityRequest,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Availability status missing"),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_availability(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(isbn): Path<String>,
    Json(request): Json<UpdateAvailabilityRequest>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_staff()?;

    let available = request
        .availability_status
        .ok_or_else(|| AppError::Validation("Availability status is required".to_string()))?;

    state.services.catalog.set_availability(&isbn, available).await?;

    Ok(Json(MessageResponse {
        message: "Book updated successfully".to_string(),
    }))
}
