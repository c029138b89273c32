use chrono::NaiveDate;

/// The zero calendar date carried by records whose date token failed to
/// parse. The line is still emitted.
pub fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).expect("year 1 is a valid date")
}

/// Parses a `YYYYMMDD` token into a calendar date, falling back to the zero
/// date.
pub fn parse_yyyymmdd(token: &str) -> NaiveDate {
    NaiveDate::parse_from_str(token.trim(), "%Y%m%d").unwrap_or_else(|_| zero_date())
}

/// Reformats a `YYYYMMDD` token as `YYYY-MM-DD` for feeds that persist dates
/// as text. Tokens shorter than eight characters pass through unchanged.
pub fn dash_yyyymmdd(token: &str) -> String {
    let t = token.trim();
    if t.len() >= 8 && t.is_char_boundary(4) && t.is_char_boundary(6) {
        format!("{}-{}-{}", &t[..4], &t[4..6], &t[6..])
    } else {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_dates() {
        assert_eq!(
            parse_yyyymmdd("20240131"),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn invalid_dates_fall_back_to_zero() {
        assert_eq!(parse_yyyymmdd(""), zero_date());
        assert_eq!(parse_yyyymmdd("20241332"), zero_date());
        assert_eq!(parse_yyyymmdd("banana"), zero_date());
    }

    #[test]
    fn dash_formatting() {
        assert_eq!(dash_yyyymmdd("20240131"), "2024-01-31");
        assert_eq!(dash_yyyymmdd("2024"), "2024");
        assert_eq!(dash_yyyymmdd(""), "");
    }
}
