//! Borrowing management endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::borrowing::{BorrowingRecord, CreateBorrowingRequest},
};

use super::AuthenticatedUser;

/// Borrowing creation response
#[derive(Serialize, ToSchema)]
pub struct BorrowingResponse {
    /// Borrowing ID
    pub id: i32,
    /// Status message
    pub message: String,
}

/// List all borrowings with customer and book details
#[utoipa::path(
    get,
    path = "/borrowings",
    tag = "borrowings",
    responses(
        (status = 200, description = "List of borrowings", body = Vec<BorrowingRecord>)
    )
)]
pub async fn list_borrowings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BorrowingRecord>>> {
    let records = state.services.borrowings.list_borrowings().await?;
    Ok(Json(records))
}

/// Create a new borrowing (borrow a book)
#[utoipa::path(
    post,
    path = "/borrowings",
    tag = "borrowings",
    security(("bearer_auth" = [])),
    request_body = CreateBorrowingRequest,
    responses(
        (status = 201, description = "Borrowing created", body = BorrowingResponse),
        (status = 400, description = "Missing required fields"),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Customer or book not found"),
        (status = 422, description = "Book is not available")
    )
)]
pub async fn create_borrowing(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateBorrowingRequest>,
) -> AppResult<(StatusCode, Json<BorrowingResponse>)> {
    claims.require_staff()?;

    let borrowing = request
        .into_create()
        .map_err(|_| AppError::Validation("All fields are required".to_string()))?;

    let borrowing_id = state.services.borrowings.create_borrowing(borrowing).await?;

    Ok((
        StatusCode::CREATED,
        Json(BorrowingResponse {
            id: borrowing_id,
            message: "Borrowing record added successfully".to_string(),
        }),
    ))
}
