#[cfg(test)]
mod tests {
    use chrono::{Datelike, Local, NaiveDate};
    use proman::libs::date::{format_due_date, parse_due_date, MONTHS};

    #[test]
    fn test_format_mid_year_date() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        assert_eq!(format_due_date(&date), "15/Abril/2025");
    }

    #[test]
    fn test_format_last_day_of_year() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_due_date(&date), "31/Diciembre/2025");
    }

    #[test]
    fn test_format_first_day_of_year_has_no_leading_zero() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_due_date(&date), "1/Enero/2025");
    }

    #[test]
    fn test_month_table_has_twelve_entries() {
        assert_eq!(MONTHS.len(), 12);
        assert_eq!(MONTHS[0], "Enero");
        assert_eq!(MONTHS[11], "Diciembre");
    }

    #[test]
    fn test_round_trip_across_all_months() {
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(2025, month, 9).unwrap();
            assert_eq!(parse_due_date(&format_due_date(&date)), date);
        }
    }

    #[test]
    fn test_round_trip_boundary_days() {
        let dates = [
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), // leap day
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(1999, 7, 31).unwrap(),
        ];
        for date in dates {
            assert_eq!(parse_due_date(&format_due_date(&date)), date);
        }
    }

    #[test]
    fn test_parse_unknown_month_falls_back_to_enero() {
        let date = parse_due_date("15/Brumario/2025");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_empty_input_falls_back_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(parse_due_date(""), today);
    }

    #[test]
    fn test_parse_malformed_input_falls_back_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(parse_due_date("not a date"), today);
        assert_eq!(parse_due_date("15/Abril"), today);
        assert_eq!(parse_due_date("x/Abril/2025"), today);
        assert_eq!(parse_due_date("15/Abril/x"), today);
    }

    #[test]
    fn test_parse_impossible_calendar_date_falls_back_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(parse_due_date("31/Febrero/2025"), today);
    }

    #[test]
    fn test_parse_result_is_always_a_valid_date() {
        // Whatever the input, the result is a usable calendar date
        for input in ["", "garbage", "99/Xyz/abc", "5/Mayo/2030"] {
            let date = parse_due_date(input);
            assert!(date.year() > 1900);
        }
    }
}
