//! Borrowing model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Borrowing joined with customer and book, from the borrowing_status view
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingRecord {
    pub id: i32,
    #[serde(rename = "customerID")]
    pub customer_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub isbn: String,
    pub title: String,
    pub borrowing_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Create borrowing request
///
/// All four fields are required; they are optional on the wire so presence
/// can be checked explicitly and reported as a 400 with a stable message.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrowingRequest {
    #[serde(rename = "customerID")]
    #[validate(required)]
    pub customer_id: Option<i32>,
    #[validate(required, length(min = 1))]
    pub isbn: Option<String>,
    #[validate(required)]
    pub borrowing_date: Option<NaiveDate>,
    #[validate(required)]
    pub return_date: Option<NaiveDate>,
}

/// Validated create-borrowing input for the service layer
#[derive(Debug, Clone)]
pub struct CreateBorrowing {
    pub customer_id: i32,
    pub isbn: String,
    pub borrowing_date: NaiveDate,
    pub return_date: NaiveDate,
}

impl CreateBorrowingRequest {
    /// Check field presence and convert into the service-layer input.
    pub fn into_create(self) -> Result<CreateBorrowing, validator::ValidationErrors> {
        self.validate()?;
        match (self.customer_id, self.isbn, self.borrowing_date, self.return_date) {
            (Some(customer_id), Some(isbn), Some(borrowing_date), Some(return_date)) => {
                Ok(CreateBorrowing {
                    customer_id,
                    isbn,
                    borrowing_date,
                    return_date,
                })
            }
            _ => Err(validator::ValidationErrors::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateBorrowingRequest {
        CreateBorrowingRequest {
            customer_id: Some(1),
            isbn: Some("111".to_string()),
            borrowing_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            return_date: NaiveDate::from_ymd_opt(2024, 1, 21),
        }
    }

    #[test]
    fn test_complete_request_converts() {
        let create = full_request().into_create().expect("valid request");
        assert_eq!(create.customer_id, 1);
        assert_eq!(create.isbn, "111");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut request = full_request();
        request.return_date = None;
        assert!(request.into_create().is_err());
    }

    #[test]
    fn test_empty_isbn_is_rejected() {
        let mut request = full_request();
        request.isbn = Some(String::new());
        assert!(request.into_create().is_err());
    }
}
