use chrono::NaiveDate;

// day-month-year, with the month spelled out (full or abbreviated) or
// as a number for the padded year-only case
static DATE_FORMATS: [&str; 2] = ["%d %B %Y", "%d %m %Y"];

/// Parses a complete `"30 March 2014"` style date. `None` is the invalid
/// date marker callers have to check.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let joined = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(joined.as_str(), fmt).ok())
}

/// Release dates come as `"2014"`, `"March 2014"` or `"30 March 2014"`.
/// Missing day and month default to the first.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let tokens = raw.split_whitespace().collect::<Vec<_>>();
    let padded = match tokens.len() {
        1 => format!("1 1 {}", tokens.join(" ")),
        2 => format!("1 {}", tokens.join(" ")),
        _ => tokens.join(" "),
    };
    let date = parse_date(padded.as_str());
    if date.is_none() {
        log::trace!("Could not parse release date {:?} (as {:?})", raw, padded);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn partial_dates_are_padded() {
        assert_eq!(normalize_date("2014"), ymd(2014, 1, 1));
        assert_eq!(normalize_date("March 2014"), ymd(2014, 3, 1));
        assert_eq!(normalize_date("30 March 2014"), ymd(2014, 3, 30));
    }

    #[test]
    fn canonical_form_is_iso() {
        assert_eq!(
            normalize_date("March 2014").map(|d| d.to_string()),
            Some("2014-03-01".to_string())
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(normalize_date("\n  7 Sep 1999 "), ymd(1999, 9, 7));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(normalize_date("not a date"), None);
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("31 February 2014"), None);
        assert_eq!(normalize_date("Sunday 30 March 2014"), None);
    }

    #[test]
    fn strict_parse_does_not_pad() {
        assert_eq!(parse_date("30 March 2014"), ymd(2014, 3, 30));
        assert_eq!(parse_date("2014"), None);
        assert_eq!(parse_date("March 2014"), None);
    }
}
