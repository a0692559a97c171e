//! Customer directory endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::customer::Customer};

/// List the full customer directory
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "List of customers", body = Vec<Customer>)
    )
)]
pub async fn list_customers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.directory.list_customers().await?;
    Ok(Json(customers))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer details", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.directory.get_customer(id).await?;
    Ok(Json(customer))
}
