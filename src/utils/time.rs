use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{Error, Result};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parses an incoming datetime, accepting RFC 3339 or a bare
/// `YYYY-MM-DDTHH:MM:SS` (interpreted as UTC).
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::InvalidInput("Invalid datetime format".to_string()))
}

/// Combines a calendar date with an `HH:MM` wall-clock time into a UTC
/// timestamp.
pub fn combine_date_time(date: NaiveDate, wall_clock: &str) -> Result<DateTime<Utc>> {
    let time = NaiveTime::parse_from_str(wall_clock, "%H:%M")
        .map_err(|_| Error::InvalidInput(format!("Invalid time of day: {}", wall_clock)))?;
    Ok(date.and_time(time).and_utc())
}

pub fn human_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d %b %Y, %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_and_bare_iso() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap();
        assert_eq!(parse_datetime("2025-03-10T10:00:00Z").unwrap(), expected);
        assert_eq!(parse_datetime("2025-03-10T10:00:00").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("next tuesday"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn combines_date_with_wall_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let combined = combine_date_time(date, "09:30").unwrap();
        assert_eq!(combined, Utc.with_ymd_and_hms(2025, 3, 12, 9, 30, 0).unwrap());
    }

    #[test]
    fn rejects_bad_wall_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        assert!(combine_date_time(date, "9:30am").is_err());
        assert!(combine_date_time(date, "25:00").is_err());
    }
}
