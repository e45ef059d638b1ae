use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config;

pub const INVALID_DATE_LABEL: &str = "Data inválida";

fn app_time_zone() -> Tz {
    config::time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

/// Visit timestamp sent to the backend: local wall time with the zone offset, e.g. `2025-03-01T14:05:00.000-03:00`.
pub fn visit_timestamp(now: DateTime<Tz>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, false)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDateTime {
    pub date: String,
    pub time: String,
}

pub fn display_parts(moment: DateTime<Tz>) -> DisplayDateTime {
    DisplayDateTime {
        date: moment.format("%d/%m/%Y").to_string(),
        time: moment.format("%H:%M").to_string(),
    }
}

fn parse_in_zone(raw: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&tz));
    }
    // Offset-less timestamps are wall time in the application zone.
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}

pub fn format_visit_datetime_in(raw: &str, tz: Tz) -> DisplayDateTime {
    match parse_in_zone(raw, tz) {
        Some(moment) => display_parts(moment),
        None => {
            log::warn!("Unparsable visit date: {}", raw);
            DisplayDateTime {
                date: INVALID_DATE_LABEL.to_string(),
                time: String::new(),
            }
        }
    }
}

pub fn format_visit_datetime(raw: &str) -> DisplayDateTime {
    format_visit_datetime_in(raw, app_time_zone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::Recife;

    #[test]
    fn visit_timestamp_carries_recife_offset() {
        let now = Recife.with_ymd_and_hms(2025, 3, 1, 14, 5, 0).unwrap();
        assert_eq!(visit_timestamp(now), "2025-03-01T14:05:00.000-03:00");
    }

    #[test]
    fn formats_offset_timestamps_in_app_zone() {
        let parts = format_visit_datetime_in("2025-03-01T17:05:00Z", Recife);
        assert_eq!(parts.date, "01/03/2025");
        assert_eq!(parts.time, "14:05");
    }

    #[test]
    fn naive_timestamps_are_treated_as_local() {
        let parts = format_visit_datetime_in("2025-12-31T23:30:00", Recife);
        assert_eq!(parts.date, "31/12/2025");
        assert_eq!(parts.time, "23:30");
    }

    #[test]
    fn garbage_dates_are_labelled_invalid() {
        let parts = format_visit_datetime_in("ontem", Recife);
        assert_eq!(parts.date, INVALID_DATE_LABEL);
        assert!(parts.time.is_empty());
    }
}
