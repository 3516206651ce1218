use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SeedTransaction {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub sold: bool,
    #[serde(rename = "dateOfSale")]
    pub date_of_sale: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_deserializes_feed_item_and_normalizes_offset() {
        let item: SeedTransaction = serde_json::from_str(
            r#"{
                "id": 61,
                "title": "Backpack",
                "price": 329.85,
                "description": "Fits laptops up to 15 inches",
                "category": "men's clothing",
                "image": "https://example.com/backpack.jpg",
                "sold": false,
                "dateOfSale": "2021-11-27T20:29:54+05:30"
            }"#,
        )
        .unwrap();

        assert_eq!(item.title, "Backpack");
        assert_eq!(item.price, 329.85);
        assert_eq!(item.sold, false);

        // the feed carries local offsets, stored values are UTC
        assert_eq!(item.date_of_sale.month(), 11);
        assert_eq!(item.date_of_sale.day(), 27);
        assert_eq!(item.date_of_sale.hour(), 14);
        assert_eq!(item.date_of_sale.minute(), 59);
    }
}
