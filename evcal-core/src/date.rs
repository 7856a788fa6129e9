//! The day/month/year date format used at the presentation boundary.
//!
//! Dates cross the UI boundary as `DD/MM/YYYY` strings and are parsed into
//! calendar dates before any validation happens.

use chrono::NaiveDate;

use crate::error::{EvcalError, EvcalResult};

const FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` string into a calendar date.
pub fn parse_day_month_year(input: &str) -> EvcalResult<NaiveDate> {
    NaiveDate::parse_from_str(input, FORMAT).map_err(|_| EvcalError::InvalidDate(input.to_string()))
}

/// Format a calendar date back into its `DD/MM/YYYY` form.
pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_month_year() {
        assert_eq!(
            parse_day_month_year("01/05/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn rejects_iso_dates() {
        assert!(matches!(
            parse_day_month_year("2024-05-01"),
            Err(EvcalError::InvalidDate(_))
        ));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_day_month_year("31/02/2024").is_err());
        assert!(parse_day_month_year("00/01/2024").is_err());
    }

    #[test]
    fn formats_back_to_the_same_string() {
        let date = parse_day_month_year("03/05/2024").unwrap();
        assert_eq!(format_day_month_year(date), "03/05/2024");
    }
}
