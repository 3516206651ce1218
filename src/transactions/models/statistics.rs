use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow)]
pub struct Statistics {
    #[serde(rename = "totalSales")]
    pub total_sales: f64,
    #[serde(rename = "totalSold")]
    pub total_sold: i64,
    #[serde(rename = "totalNotSold")]
    pub total_not_sold: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_keys() {
        let statistics = Statistics {
            total_sales: 1234.5,
            total_sold: 7,
            total_not_sold: 3,
        };

        let value = serde_json::to_value(&statistics).unwrap();

        assert_eq!(value["totalSales"], 1234.5);
        assert_eq!(value["totalSold"], 7);
        assert_eq!(value["totalNotSold"], 3);
        assert!(value.get("total_sales").is_none());
    }
}
