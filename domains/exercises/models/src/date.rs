use chrono::{DateTime, NaiveDate};

const INPUT_FORMAT: &str = "%Y-%m-%d";
const LOG_FORMAT: &str = "%a %b %d %Y";

/// Renders a date the way every exercise response shows it, e.g.
/// `Mon Jan 15 2024`.
pub fn format_log_date(date: NaiveDate) -> String {
    date.format(LOG_FORMAT).to_string()
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp. Timestamps keep the
/// calendar day they were written in, not the UTC one.
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, INPUT_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(input)
            .ok()
            .map(|ts| ts.date_naive())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_log_date(date), "Fri Jan 05 2024");
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_date_input("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_date_input(" 2024-02-29 "),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            parse_date_input("2024-03-10T23:30:00-05:00"),
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date_input("not-a-date"), None);
        assert_eq!(parse_date_input("2023-02-29"), None);
        assert_eq!(parse_date_input(""), None);
    }
}
