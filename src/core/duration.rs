use chrono::NaiveDateTime;

/// Minutes between entry and exit. Missing exits and exits logged before the
/// entry both yield zero.
pub fn trade_duration_minutes(entry: NaiveDateTime, exit: Option<NaiveDateTime>) -> f64 {
    match exit {
        Some(exit) => {
            let millis = (exit - entry).num_milliseconds() as f64;
            (millis / 60_000.0).max(0.0)
        }
        None => 0.0,
    }
}

/// Compact rendering: `-`, `45m`, or `2h 5m`.
pub fn format_duration(minutes: f64) -> String {
    if minutes.is_nan() || minutes <= 0.0 {
        return "-".to_string();
    }
    let rounded = minutes.round() as i64;
    if minutes < 60.0 {
        format!("{}m", rounded)
    } else {
        let hours = (minutes / 60.0).floor() as i64;
        format!("{}h {}m", hours, rounded % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn missing_exit_is_zero() {
        assert_eq!(trade_duration_minutes(at(9, 0), None), 0.0);
    }

    #[test]
    fn exit_before_entry_clamps_to_zero() {
        assert_eq!(trade_duration_minutes(at(9, 0), Some(at(8, 30))), 0.0);
    }

    #[test]
    fn elapsed_minutes() {
        assert_eq!(trade_duration_minutes(at(9, 0), Some(at(11, 5))), 125.0);
        let exit = at(9, 0) + Duration::seconds(90);
        assert_eq!(trade_duration_minutes(at(9, 0), Some(exit)), 1.5);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_duration(0.0), "-");
        assert_eq!(format_duration(45.0), "45m");
        assert_eq!(format_duration(125.0), "2h 5m");
        assert_eq!(format_duration(60.0), "1h 0m");
        assert_eq!(format_duration(44.6), "45m");
        assert_eq!(format_duration(1505.0), "25h 5m");
    }

    #[test]
    fn hours_floor_while_minutes_round() {
        assert_eq!(format_duration(119.6), "1h 0m");
        assert_eq!(format_duration(125.4), "2h 5m");
        assert_eq!(format_duration(125.6), "2h 6m");
        // below an hour only the minutes are rounded
        assert_eq!(format_duration(59.6), "60m");
    }
}
