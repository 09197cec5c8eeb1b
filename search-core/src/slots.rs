use chrono::{NaiveDate, NaiveDateTime, Timelike};

pub const SLOT_MINUTES: u32 = 30;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Bookable "HH:MM" slots for `date` (ISO `YYYY-MM-DD`).
///
/// For today only slots from the next full hour onwards are offered; other
/// dates get the whole day. An empty result means nothing is bookable and
/// the caller renders its empty state.
pub fn available_slots(date: &str, now: NaiveDateTime) -> Vec<String> {
    let today = now.date().format(DATE_FORMAT).to_string();
    let earliest_hour = if date == today { now.hour() + 1 } else { 0 };

    (0..MINUTES_PER_DAY)
        .step_by(SLOT_MINUTES as usize)
        .filter(|minutes| minutes / 60 >= earliest_hour)
        .map(|minutes| format!("{:02}:{:02}", minutes / 60, minutes % 60))
        .collect()
}

/// Whether `time` is one of the slots offered for `date`.
pub fn is_available(date: &str, time: &str, now: NaiveDateTime) -> bool {
    available_slots(date, now).iter().any(|slot| slot == time)
}

/// Floor for any start-date picker.
pub fn min_date(today: NaiveDate) -> String {
    today.format(DATE_FORMAT).to_string()
}

/// Floor for a check-out / pick-up picker paired with `start`.
pub fn min_end_date(today: NaiveDate, start: &str) -> String {
    match NaiveDate::parse_from_str(start, DATE_FORMAT) {
        Ok(start) if start > today => min_date(start),
        _ => min_date(today),
    }
}

/// "2024-06-01" -> "01/06/2024"; anything unparseable is returned unchanged.
pub fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_today_starts_next_hour() {
        let slots = available_slots("2024-01-01", at("2024-01-01", 14, 20));
        assert_eq!(slots.len(), 18);
        assert_eq!(slots.first().map(String::as_str), Some("15:00"));
        assert_eq!(slots.last().map(String::as_str), Some("23:30"));
    }

    #[test]
    fn test_future_date_has_all_slots() {
        let slots = available_slots("2024-01-02", at("2024-01-01", 14, 20));
        assert_eq!(slots.len(), 48);
        assert_eq!(slots[0], "00:00");
        assert_eq!(slots[1], "00:30");
        assert_eq!(slots[47], "23:30");
    }

    #[test]
    fn test_late_evening_has_no_slots_today() {
        assert!(available_slots("2024-01-01", at("2024-01-01", 23, 5)).is_empty());
    }

    #[test]
    fn test_on_the_hour() {
        let slots = available_slots("2024-01-01", at("2024-01-01", 0, 0));
        assert_eq!(slots[0], "01:00");
        assert_eq!(slots.len(), 46);
    }

    #[test]
    fn test_empty_date_is_not_today() {
        assert_eq!(available_slots("", at("2024-01-01", 14, 20)).len(), 48);
    }

    #[test]
    fn test_is_available() {
        let now = at("2024-01-01", 14, 20);
        assert!(is_available("2024-01-01", "15:00", now));
        assert!(!is_available("2024-01-01", "14:30", now));
        assert!(is_available("2024-01-02", "14:30", now));
        assert!(!is_available("2024-01-02", "14:15", now));
    }

    #[test]
    fn test_min_end_date() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert_eq!(min_date(today), "2024-05-10");
        assert_eq!(min_end_date(today, ""), "2024-05-10");
        assert_eq!(min_end_date(today, "2024-05-14"), "2024-05-14");
        assert_eq!(min_end_date(today, "2024-05-01"), "2024-05-10");
        assert_eq!(min_end_date(today, "garbage"), "2024-05-10");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-06-01"), "01/06/2024");
        assert_eq!(display_date(""), "");
        assert_eq!(display_date("domani"), "domani");
    }
}
