use serde::Serialize;
use serde_json::{json, Value};

use super::{bar_chart_entry::BarChartEntry, category_count::CategoryCount, statistics::Statistics};

#[derive(Debug, Serialize)]
pub struct CombinedData {
    pub statistics: Value,
    #[serde(rename = "barChart")]
    pub bar_chart: Vec<BarChartEntry>,
    #[serde(rename = "pieChart")]
    pub pie_chart: Vec<CategoryCount>,
}

impl CombinedData {
    pub fn new(
        statistics: Option<Statistics>,
        bar_chart: Vec<BarChartEntry>,
        pie_chart: Vec<CategoryCount>,
    ) -> Self {
        return Self {
            statistics: match statistics {
                Some(statistics) => json!(statistics),
                None => json!({}),
            },
            bar_chart,
            pie_chart,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_statistics() {
        let combined = CombinedData::new(
            Some(Statistics {
                total_sales: 500.0,
                total_sold: 2,
                total_not_sold: 1,
            }),
            vec![BarChartEntry {
                range: "0-100".to_string(),
                count: 3,
            }],
            vec![CategoryCount {
                category: "books".to_string(),
                count: 3,
            }],
        );

        let value = serde_json::to_value(&combined).unwrap();

        assert_eq!(value["statistics"]["totalSales"], 500.0);
        assert_eq!(value["barChart"][0]["range"], "0-100");
        assert_eq!(value["pieChart"][0]["_id"], "books");
    }

    #[test]
    fn test_new_without_statistics_keeps_an_empty_object() {
        let combined = CombinedData::new(None, Vec::new(), Vec::new());

        let value = serde_json::to_value(&combined).unwrap();

        assert_eq!(value["statistics"], json!({}));
        assert_eq!(value["barChart"], json!([]));
        assert_eq!(value["pieChart"], json!([]));
    }
}
