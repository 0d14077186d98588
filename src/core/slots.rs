use chrono::NaiveTime;

/// Accepted time-of-day layouts, tried in order
const SLOT_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parse a time-of-day slot such as "10:00" or "9:30:00"
///
/// Returns `None` for anything that is not a clock time, so malformed slots
/// can never produce a match.
#[inline]
pub fn parse_slot(slot: &str) -> Option<NaiveTime> {
    let trimmed = slot.trim();
    SLOT_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
}

/// Check whether the preferred slot is among the available ones
///
/// Slots are compared as times, not as strings, so "9:00" and "09:00" are the
/// same slot. An unparseable slot on either side is skipped.
pub fn has_exact_slot(preferred: &str, available: &[String]) -> bool {
    let Some(wanted) = parse_slot(preferred) else {
        return false;
    };

    available
        .iter()
        .filter_map(|slot| parse_slot(slot))
        .any(|time| time == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_slot_formats() {
        assert_eq!(parse_slot("10:00"), NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(parse_slot(" 14:30 "), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_slot("09:15:00"), NaiveTime::from_hms_opt(9, 15, 0));
    }

    #[test]
    fn test_parse_slot_rejects_garbage() {
        assert!(parse_slot("morning").is_none());
        assert!(parse_slot("25:00").is_none());
        assert!(parse_slot("").is_none());
    }

    #[test]
    fn test_exact_slot_ignores_zero_padding() {
        assert!(has_exact_slot("9:00", &slots(&["09:00", "11:00"])));
        assert!(has_exact_slot("10:00", &slots(&["09:00", "10:00"])));
        assert!(!has_exact_slot("10:30", &slots(&["09:00", "10:00"])));
    }

    #[test]
    fn test_malformed_slot_never_matches() {
        assert!(!has_exact_slot("ten o'clock", &slots(&["10:00"])));
        assert!(!has_exact_slot("10:00", &slots(&["10am", "afternoon"])));
        assert!(!has_exact_slot("10:00", &[]));
    }
}
