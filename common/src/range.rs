use chrono::{Duration, NaiveDate};
use eyre::{bail, eyre, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;
use url::Url;

lazy_static! {
    static ref RANGE: Regex = Regex::new(r"\d{4}\.\d{2}\.\d{2}-\d{4}\.\d{2}\.\d{2}").unwrap();
}

static DATE_FORMAT: &str = "%Y.%m.%d";
// /charts/<kind>/<scope>/<type>/<range>/
static RANGE_SEGMENT: usize = 4;
static DAYS_PER_WEEK: i64 = 7;

/// The `2024.01.01-2024.01.07` window a chart page covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// `None` when either end would leave the calendar chrono can represent.
    pub fn shifted(self, days: i64) -> Option<Self> {
        if days.unsigned_abs() > Duration::max_value().num_days().unsigned_abs() {
            return None;
        }
        let offset = Duration::days(days);
        Some(Self {
            start: self.start.checked_add_signed(offset)?,
            end: self.end.checked_add_signed(offset)?,
        })
    }

    pub fn from_chart_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| eyre!("Invalid chart URL {}: {}", url, e))?;
        let segment = parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).nth(RANGE_SEGMENT))
            .ok_or_else(|| eyre!("Chart URL {} has no date range segment", url))?;
        match RANGE.find(segment) {
            Some(m) => m.as_str().parse(),
            None => bail!("Chart URL {} does not cover a date range", url),
        }
    }
}

impl FromStr for DateRange {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| eyre!("Date range {:?} is missing its separator", s))?;
        let parse = |d: &str| {
            NaiveDate::parse_from_str(d, DATE_FORMAT)
                .map_err(|e| eyre!("Invalid date {:?} in range {:?}: {}", d, s, e))
        };
        Ok(Self {
            start: parse(start)?,
            end: parse(end)?,
        })
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(
            f,
            "{}-{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// The same chart, `weeks` weeks later (or earlier when negative).
pub fn week_url(url: &str, weeks: i64) -> Result<String> {
    let range = DateRange::from_chart_url(url)?;
    let range = weeks
        .checked_mul(DAYS_PER_WEEK)
        .and_then(|days| range.shifted(days))
        .ok_or_else(|| eyre!("Date range {} shifted by {} weeks is out of bounds", range, weeks))?;
    Ok(RANGE.replace(url, range.to_string().as_str()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    static CHART: &str = "https://rateyourmusic.com/charts/daily/top/album/2024.01.01-2024.01.07/";

    #[test]
    fn next_week() {
        let range: DateRange = "2024.01.01-2024.01.07".parse().unwrap();
        assert_eq!(range.shifted(7).unwrap().to_string(), "2024.01.08-2024.01.14");
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        let range: DateRange = "2023.12.25-2023.12.31".parse().unwrap();
        assert_eq!(range.shifted(7).unwrap().to_string(), "2024.01.01-2024.01.07");
        assert_eq!(range.shifted(-7).unwrap().to_string(), "2023.12.18-2023.12.24");
    }

    #[test]
    fn shifting_past_the_calendar_is_an_error() {
        let range: DateRange = "2024.01.01-2024.01.07".parse().unwrap();
        assert_eq!(range.shifted(i64::MAX), None);
        assert_eq!(range.shifted(i64::MIN), None);
        assert_eq!(range.shifted(7 * i64::from(u32::MAX)), None);
        assert!(week_url(CHART, i64::from(u32::MAX)).is_err());
        assert!(week_url(CHART, -i64::from(u32::MAX)).is_err());
        assert!(week_url(CHART, i64::MAX).is_err());
    }

    #[test]
    fn range_from_url() {
        assert_eq!(
            DateRange::from_chart_url(CHART).unwrap().to_string(),
            "2024.01.01-2024.01.07"
        );
        assert!(DateRange::from_chart_url("https://rateyourmusic.com/charts/daily/top/album/").is_err());
        assert!(DateRange::from_chart_url("https://rateyourmusic.com/charts/daily/top/album/all-time/").is_err());
    }

    #[test]
    fn week_navigation_rewrites_the_url() {
        assert_eq!(
            week_url(CHART, 1).unwrap(),
            "https://rateyourmusic.com/charts/daily/top/album/2024.01.08-2024.01.14/"
        );
        assert_eq!(
            week_url(&format!("{}2/", CHART), -1).unwrap(),
            "https://rateyourmusic.com/charts/daily/top/album/2023.12.25-2023.12.31/2/"
        );
    }

    #[test]
    fn malformed_ranges() {
        assert!("2024.01.01".parse::<DateRange>().is_err());
        assert!("2024.13.01-2024.13.07".parse::<DateRange>().is_err());
    }
}
