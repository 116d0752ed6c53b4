//! Pace and finish-time conversion between clock text and whole seconds

/// `"m:ss"` to seconds; `None` for anything else
pub fn parse_pace(pace: &str) -> Option<u64> {
    let (minutes, seconds) = pace.trim().split_once(':')?;
    parse_part(minutes)?
        .checked_mul(60)?
        .checked_add(parse_part(seconds)?)
}

/// `"h:mm:ss"` to seconds; `None` for anything else, including values too
/// large to count in seconds
pub fn parse_finish_time(time: &str) -> Option<u64> {
    let mut parts = time.trim().split(':');
    let hours = parse_part(parts.next()?)?;
    let minutes = parse_part(parts.next()?)?;
    let seconds = parse_part(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

fn parse_part(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Seconds to `"m:ss"`
pub fn format_pace(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Seconds to `"h:mm:ss"`
pub fn format_finish_time(seconds: u64) -> String {
    let (minutes, secs) = (seconds / 60, seconds % 60);
    format!("{}:{:02}:{:02}", minutes / 60, minutes % 60, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_round_trip() {
        assert_eq!(parse_pace("6:30"), Some(390));
        assert_eq!(format_pace(390), "6:30");
        assert_eq!(format_pace(parse_pace("10:05").unwrap()), "10:05");
    }

    #[test]
    fn test_finish_time_round_trip() {
        assert_eq!(parse_finish_time("3:45:10"), Some(13510));
        assert_eq!(format_finish_time(13510), "3:45:10");
        assert_eq!(format_finish_time(parse_finish_time("5:03:09").unwrap()), "5:03:09");
    }

    #[test]
    fn test_malformed_values_rejected() {
        for pace in ["", "6", "6:", ":30", "6:3a", "6:30:00", "-6:30"] {
            assert_eq!(parse_pace(pace), None, "pace {pace:?}");
        }
        for time in ["", "3:45", "3:45:10:00", "3::10", "DNF"] {
            assert_eq!(parse_finish_time(time), None, "time {time:?}");
        }
    }

    #[test]
    fn test_oversized_values_rejected() {
        assert_eq!(parse_pace("307445734561825861:00"), None);
        assert_eq!(parse_pace("99999999999999999999:00"), None);
        assert_eq!(parse_finish_time("5124095576030432:00:00"), None);
        assert_eq!(parse_finish_time("0:307445734561825861:00"), None);
        assert_eq!(parse_finish_time("5124095576030431:00:15"), Some(u64::MAX));
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert_eq!(parse_pace(" 7:15 "), Some(435));
        assert_eq!(parse_finish_time("\t2:59:59\n"), Some(10799));
    }
}
