use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::seed::structs::seed_transaction::SeedTransaction;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub sold: bool,
    #[serde(rename = "dateOfSale")]
    pub date_of_sale: DateTime<Utc>,
}

impl Transaction {
    pub fn from_seed(item: &SeedTransaction) -> Self {
        return Self {
            id: Uuid::new_v4().to_string(),
            title: item.title.to_string(),
            description: item.description.to_string(),
            price: item.price,
            category: item.category.to_string(),
            image: item.image.to_string(),
            sold: item.sold,
            date_of_sale: item.date_of_sale,
        };
    }
}
