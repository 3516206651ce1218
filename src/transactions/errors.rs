use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    InvalidMonthName,
    FetchTransactionsFailed,
    FetchStatisticsFailed,
    FetchBarChartFailed,
    FetchPieChartFailed,
    FetchCombinedFailed,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidMonthName => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid month name.".to_string(),
            },
            Self::FetchTransactionsFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Error fetching transactions.".to_string(),
            },
            Self::FetchStatisticsFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Error fetching statistics.".to_string(),
            },
            Self::FetchBarChartFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Error fetching bar chart data.".to_string(),
            },
            Self::FetchPieChartFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Error fetching pie chart data.".to_string(),
            },
            Self::FetchCombinedFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Error fetching combined data.".to_string(),
            },
        }
    }
}
