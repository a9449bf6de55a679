use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::models::Session;

/// Classifies a local hour-of-day (0-23). First matching range wins.
pub fn session_from_hour(hour: u32) -> Session {
    if (5..11).contains(&hour) {
        Session::S1
    } else if (11..17).contains(&hour) {
        Session::S2
    } else if (17..23).contains(&hour) {
        Session::S3
    } else if (1..5).contains(&hour) {
        Session::IS4
    } else {
        Session::S4
    }
}

/// Classifies a timestamp by its own hour component. The caller decides
/// which local time the value represents.
pub fn session_from_time<T: Timelike>(ts: &T) -> Session {
    session_from_hour(ts.hour())
}

/// Classifies a UTC instant by the wall-clock hour in `tz`.
pub fn session_at(utc_now: DateTime<Utc>, tz: Tz) -> Session {
    let local = utc_now.with_timezone(&tz);
    session_from_time(&local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::US::Eastern;
    use std::collections::HashMap;

    fn make_utc_for_et_hour(et_hour: u32, et_minute: u32) -> DateTime<Utc> {
        // ET is UTC-5 in January.
        let utc_hour = et_hour + 5;
        let (day_offset, hour) = if utc_hour >= 24 {
            (1, utc_hour - 24)
        } else {
            (0, utc_hour)
        };
        let date = NaiveDate::from_ymd_opt(2024, 1, 15 + day_offset).unwrap();
        let naive = date.and_hms_opt(hour, et_minute, 0).unwrap();
        Utc.from_utc_datetime(&naive)
    }

    #[test]
    fn every_hour_maps_to_exactly_one_session() {
        let mut counts: HashMap<Session, usize> = HashMap::new();
        for hour in 0..24 {
            *counts.entry(session_from_hour(hour)).or_default() += 1;
        }
        assert_eq!(counts[&Session::S1], 6);
        assert_eq!(counts[&Session::S2], 6);
        assert_eq!(counts[&Session::S3], 6);
        assert_eq!(counts[&Session::IS4], 4);
        assert_eq!(counts[&Session::S4], 2);
        assert_eq!(counts.values().sum::<usize>(), 24);
        assert!(Session::ALL.iter().all(|s| counts.contains_key(s)));
        assert_eq!(counts.len(), Session::ALL.len());
    }

    #[test]
    fn range_boundaries() {
        assert_eq!(session_from_hour(0), Session::S4);
        assert_eq!(session_from_hour(1), Session::IS4);
        assert_eq!(session_from_hour(4), Session::IS4);
        assert_eq!(session_from_hour(5), Session::S1);
        assert_eq!(session_from_hour(10), Session::S1);
        assert_eq!(session_from_hour(11), Session::S2);
        assert_eq!(session_from_hour(16), Session::S2);
        assert_eq!(session_from_hour(17), Session::S3);
        assert_eq!(session_from_hour(22), Session::S3);
        assert_eq!(session_from_hour(23), Session::S4);
    }

    #[test]
    fn naive_timestamp_uses_its_own_hour() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(17, 59, 0)
            .unwrap();
        assert_eq!(session_from_time(&ts), Session::S3);
    }

    #[test]
    fn utc_instant_resolved_in_timezone() {
        // 3am ET is 08:00 UTC
        assert_eq!(session_at(make_utc_for_et_hour(3, 0), Eastern), Session::IS4);
        assert_eq!(session_at(make_utc_for_et_hour(9, 30), Eastern), Session::S1);
        // 21:00 ET rolls to the next UTC day
        assert_eq!(session_at(make_utc_for_et_hour(21, 0), Eastern), Session::S3);
        assert_eq!(session_at(make_utc_for_et_hour(23, 15), Eastern), Session::S4);
    }
}
