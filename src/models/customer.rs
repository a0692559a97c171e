//! Customer model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Customer row from the customer_directory table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub age: Option<i16>,
}
