use std::sync::Arc;

use sqlx::{PgPool, Postgres, QueryBuilder};
use tokio::task;

use crate::{
    app::{models::api_error::ApiError, util::reqwest::get_json},
    seed::{errors::SeedApiError, structs::seed_transaction::SeedTransaction, SEED_DATA_URL},
    transactions::models::transaction::Transaction,
    AppState,
};

pub fn spawn(state: Arc<AppState>) {
    tracing::debug!("spawning seed loader");

    task::spawn(async move {
        if let Err(e) = initialize(&state).await {
            tracing::error!("failed to initialize the transaction store: {:?}", e);
        }
    });
}

pub async fn initialize(state: &Arc<AppState>) -> Result<(), ApiError> {
    if let Err(e) = create_transactions_table(&state.pool).await {
        return Err(e);
    }

    let count = match count_transactions(&state.pool).await {
        Ok(count) => count,
        Err(e) => return Err(e),
    };

    if count > 0 {
        tracing::info!("transaction store already initialized");
        return Ok(());
    }

    let items = match get_json::<Vec<SeedTransaction>>(SEED_DATA_URL).await {
        Ok(items) => items,
        Err(e) => return Err(e),
    };

    let mut transactions = Vec::with_capacity(items.len());

    for item in &items {
        transactions.push(Transaction::from_seed(item));
    }

    match insert_transactions(&transactions, &state.pool).await {
        Ok(_) => {
            tracing::info!(
                "transaction store initialized with {} records",
                transactions.len()
            );
            Ok(())
        }
        Err(e) => Err(e),
    }
}

pub async fn create_transactions_table(pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        CREATE TABLE IF NOT EXISTS transactions (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            category TEXT NOT NULL,
            image TEXT NOT NULL,
            sold BOOLEAN NOT NULL,
            date_of_sale TIMESTAMPTZ NOT NULL
        )
        ",
    )
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(SeedApiError::CreateTableFailed.value())
        }
    }
}

pub async fn count_transactions(pool: &PgPool) -> Result<i64, ApiError> {
    let sqlx_result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions")
        .fetch_one(pool)
        .await;

    match sqlx_result {
        Ok(count) => Ok(count),
        Err(e) => {
            tracing::error!(%e);
            Err(SeedApiError::CountFailed.value())
        }
    }
}

pub async fn insert_transactions(
    transactions: &Vec<Transaction>,
    pool: &PgPool,
) -> Result<(), ApiError> {
    if transactions.len() == 0 {
        return Ok(());
    }

    let mut query_builder = QueryBuilder::<Postgres>::new(
        "INSERT INTO transactions (id, title, description, price, category, image, sold, date_of_sale) ",
    );

    query_builder.push_values(transactions, |mut builder, transaction| {
        builder
            .push_bind(&transaction.id)
            .push_bind(&transaction.title)
            .push_bind(&transaction.description)
            .push_bind(transaction.price)
            .push_bind(&transaction.category)
            .push_bind(&transaction.image)
            .push_bind(transaction.sold)
            .push_bind(transaction.date_of_sale);
    });

    match query_builder.build().execute(pool).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(SeedApiError::InsertFailed.value())
        }
    }
}
