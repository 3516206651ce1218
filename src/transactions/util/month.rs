pub fn month_number(month: &str) -> Option<i32> {
    match month {
        "January" => Some(1),
        "February" => Some(2),
        "March" => Some(3),
        "April" => Some(4),
        "May" => Some(5),
        "June" => Some(6),
        "July" => Some(7),
        "August" => Some(8),
        "September" => Some(9),
        "October" => Some(10),
        "November" => Some(11),
        "December" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_number_maps_every_month_name() {
        let months = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];

        for (i, month) in months.iter().enumerate() {
            assert_eq!(month_number(month), Some(i as i32 + 1));
        }
    }

    #[test]
    fn test_month_number_rejects_unknown_names() {
        assert_eq!(month_number("Smarch"), None);
        assert_eq!(month_number("january"), None);
        assert_eq!(month_number("MARCH"), None);
        assert_eq!(month_number("Jan"), None);
        assert_eq!(month_number(""), None);
    }
}
