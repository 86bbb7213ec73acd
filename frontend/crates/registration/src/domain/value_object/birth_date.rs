//! Birth Date and age computation
//!
//! Age is the number of completed years: the year difference, minus one
//! while this year's birthday has not been reached yet.

use chrono::{Datelike, NaiveDate};

/// Minimum age for applicant registration
pub const MINIMUM_AGE: i32 = 18;

/// Date format produced by date inputs
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_birth_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), BIRTH_DATE_FORMAT).ok()
}

/// Completed years between `birth` and `today`
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[inline]
pub fn is_at_least(birth: NaiveDate, today: NaiveDate, min_age: i32) -> bool {
    age_on(birth, today) >= min_age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exactly_eighteen() {
        let today = date(2026, 10, 17);
        assert_eq!(age_on(date(2008, 10, 17), today), 18);
        assert!(is_at_least(date(2008, 10, 17), today, MINIMUM_AGE));
    }

    #[test]
    fn test_one_day_short_of_eighteen() {
        let today = date(2026, 10, 17);
        assert_eq!(age_on(date(2008, 10, 18), today), 17);
        assert!(!is_at_least(date(2008, 10, 18), today, MINIMUM_AGE));
    }

    #[test]
    fn test_one_day_past_eighteen() {
        let today = date(2026, 10, 17);
        assert_eq!(age_on(date(2008, 10, 16), today), 18);
    }

    #[test]
    fn test_not_plain_year_subtraction() {
        // year difference is 18, birthday still ahead
        assert_eq!(age_on(date(2008, 12, 31), date(2026, 1, 1)), 17);
        // same month, earlier day
        assert_eq!(age_on(date(2008, 10, 20), date(2026, 10, 19)), 17);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2008, 2, 29);
        assert_eq!(age_on(birth, date(2026, 2, 28)), 17);
        assert_eq!(age_on(birth, date(2026, 3, 1)), 18);
        assert_eq!(age_on(birth, date(2028, 2, 29)), 20);
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(parse_birth_date("2000-01-01"), Some(date(2000, 1, 1)));
        assert_eq!(parse_birth_date(" 2000-01-01 "), Some(date(2000, 1, 1)));
        assert_eq!(parse_birth_date("2001-02-29"), None);
        assert_eq!(parse_birth_date("01/01/2000"), None);
        assert_eq!(parse_birth_date(""), None);
    }
}
