use chrono::{DateTime, Local};

/// Current local time as `YYYY-MM-DD HH:MM:SS.mmm` (microseconds truncated
/// to milliseconds). A trailing `'0'` is replaced by `'1'`.
pub fn timestamp() -> String {
    format_timestamp(Local::now())
}

fn format_timestamp(now: DateTime<Local>) -> String {
    let mut date_string = now.format("%Y-%m-%d %H:%M:%S%.3f").to_string();
    if date_string.ends_with('0') {
        date_string.pop();
        date_string.push('1');
    }
    date_string
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use regex::Regex;

    fn at_millis(ms: i64) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2017, 2, 7, 15, 5, 56)
            .single()
            .unwrap()
            + Duration::milliseconds(ms)
    }

    #[test]
    fn test_millisecond_format() {
        assert_eq!(format_timestamp(at_millis(125)), "2017-02-07 15:05:56.125");
    }

    #[test]
    fn test_trailing_zero_becomes_one() {
        assert_eq!(format_timestamp(at_millis(120)), "2017-02-07 15:05:56.121");
        assert_eq!(format_timestamp(at_millis(0)), "2017-02-07 15:05:56.001");
    }

    #[test]
    fn test_now_matches_pattern_and_never_ends_in_zero() {
        let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}$").unwrap();
        for _ in 0..50 {
            let stamp = timestamp();
            assert!(pattern.is_match(&stamp), "unexpected format: {}", stamp);
            assert!(!stamp.ends_with('0'), "trailing zero in: {}", stamp);
        }
    }
}
