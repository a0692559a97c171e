//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, borrowings, customers, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "1.0.0",
        description = "Library Management System REST API"
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Books
        books::list_books,
        books::get_book,
        books::update_availability,
        // Customers
        customers::list_customers,
        customers::get_customer,
        // Borrowings
        borrowings::list_borrowings,
        borrowings::create_borrowing,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::AccountInfo,
            crate::models::account::Role,
            // Books
            crate::models::book::Book,
            crate::models::book::UpdateAvailabilityRequest,
            books::MessageResponse,
            // Customers
            crate::models::customer::Customer,
            // Borrowings
            crate::models::borrowing::BorrowingRecord,
            crate::models::borrowing::CreateBorrowingRequest,
            borrowings::BorrowingResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "customers", description = "Customer directory"),
        (name = "borrowings", description = "Borrowing management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
