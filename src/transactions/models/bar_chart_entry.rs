use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BarChartEntry {
    pub range: String,
    pub count: i64,
}

impl BarChartEntry {
    pub fn range_label(low: i32, high: Option<i32>) -> String {
        match high {
            Some(high) => format!("{}-{}", low, high),
            None => format!("{}-Above", low),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_labels() {
        assert_eq!(BarChartEntry::range_label(0, Some(100)), "0-100");
        assert_eq!(BarChartEntry::range_label(101, Some(200)), "101-200");
        assert_eq!(BarChartEntry::range_label(801, Some(900)), "801-900");
        assert_eq!(BarChartEntry::range_label(901, None), "901-Above");
    }
}
