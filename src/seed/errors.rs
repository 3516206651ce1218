use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum SeedApiError {
    CreateTableFailed,
    CountFailed,
    InsertFailed,
}

impl SeedApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::CreateTableFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to create transactions table.".to_string(),
            },
            Self::CountFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to count transactions.".to_string(),
            },
            Self::InsertFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to insert transactions.".to_string(),
            },
        }
    }
}
