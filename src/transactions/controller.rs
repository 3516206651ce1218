use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{
    app::{models::api_error::ApiError, structs::query_from_request::QueryFromRequest},
    AppState,
};

use super::{
    dtos::{
        get_month_filter_dto::GetMonthFilterDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    models::{
        bar_chart_entry::BarChartEntry, category_count::CategoryCount,
        combined_data::CombinedData, transaction::Transaction,
    },
    service,
};

pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetTransactionsFilterDto>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    match service::get_transactions(&dto, &state.pool).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}

pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetMonthFilterDto>,
) -> Result<Json<Value>, ApiError> {
    match service::get_statistics(&dto, &state.pool).await {
        Ok(Some(statistics)) => Ok(Json(json!(statistics))),
        Ok(None) => Ok(Json(json!({}))),
        Err(e) => Err(e),
    }
}

pub async fn get_bar_chart(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetMonthFilterDto>,
) -> Result<Json<Vec<BarChartEntry>>, ApiError> {
    match service::get_bar_chart(&dto, &state.pool).await {
        Ok(entries) => Ok(Json(entries)),
        Err(e) => Err(e),
    }
}

pub async fn get_pie_chart(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetMonthFilterDto>,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    match service::get_pie_chart(&dto, &state.pool).await {
        Ok(entries) => Ok(Json(entries)),
        Err(e) => Err(e),
    }
}

pub async fn get_combined(
    State(state): State<Arc<AppState>>,
    QueryFromRequest(dto): QueryFromRequest<GetMonthFilterDto>,
) -> Result<Json<CombinedData>, ApiError> {
    match service::get_combined(&dto, &state.pool).await {
        Ok(combined) => Ok(Json(combined)),
        Err(e) => Err(e),
    }
}
