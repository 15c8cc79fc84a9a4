//! Calendar arithmetic for daily delivery.
//!
//! Day 1 is the program's begin date; every calendar day after it is the next
//! ordinal. Dates are naive: the driver decides which timezone "today" is in.

use chrono::NaiveDate;
use daybook_model::Ordinal;

/// Date format accepted for begin dates, `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// The day number for `today`, or `None` before the program starts.
pub fn current_day(begin: NaiveDate, today: NaiveDate) -> Option<Ordinal> {
    day_number(begin, today)
}

/// Days that are due given the date of the last delivery.
///
/// Without a usable last delivery (none, before the start, or after today)
/// everything up to today is due.
pub fn days_to_deliver(
    begin: NaiveDate,
    last_delivered: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<Ordinal> {
    let Some(current) = current_day(begin, today) else {
        return Vec::new();
    };
    let first = last_delivered
        .and_then(|last| day_number(begin, last))
        .filter(|last| *last <= current)
        .map_or(1, |last| last.get() + 1);
    (first..=current.get()).map(Ordinal::new).collect()
}

/// Conventional folder name for a day, e.g. `3_day`.
pub fn folder_name(day: Ordinal) -> String {
    format!("{day}_day")
}

fn day_number(begin: NaiveDate, date: NaiveDate) -> Option<Ordinal> {
    let days = (date - begin).num_days() + 1;
    u32::try_from(days)
        .ok()
        .filter(|d| *d >= 1)
        .map(Ordinal::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        parse_date(value).expect("valid date")
    }

    fn ordinals(values: &[u32]) -> Vec<Ordinal> {
        values.iter().copied().map(Ordinal::new).collect()
    }

    #[test]
    fn begin_date_is_day_one() {
        assert_eq!(
            current_day(date("2026-03-01"), date("2026-03-01")),
            Some(Ordinal::new(1))
        );
        assert_eq!(
            current_day(date("2026-02-27"), date("2026-03-01")),
            Some(Ordinal::new(3))
        );
        assert_eq!(current_day(date("2026-03-02"), date("2026-03-01")), None);
    }

    #[test]
    fn nothing_delivered_yet() {
        assert_eq!(
            days_to_deliver(date("2026-03-01"), None, date("2026-03-03")),
            ordinals(&[1, 2, 3])
        );
    }

    #[test]
    fn delivers_only_new_days() {
        assert_eq!(
            days_to_deliver(
                date("2026-03-01"),
                Some(date("2026-03-02")),
                date("2026-03-05")
            ),
            ordinals(&[3, 4, 5])
        );
    }

    #[test]
    fn up_to_date_is_empty() {
        assert!(
            days_to_deliver(
                date("2026-03-01"),
                Some(date("2026-03-05")),
                date("2026-03-05")
            )
            .is_empty()
        );
    }

    #[test]
    fn out_of_range_last_delivery_restarts() {
        let begin = date("2026-03-01");
        let today = date("2026-03-02");
        assert_eq!(
            days_to_deliver(begin, Some(date("2026-02-01")), today),
            ordinals(&[1, 2])
        );
        assert_eq!(
            days_to_deliver(begin, Some(date("2026-04-01")), today),
            ordinals(&[1, 2])
        );
    }

    #[test]
    fn not_started_is_empty() {
        assert!(days_to_deliver(date("2026-03-10"), None, date("2026-03-01")).is_empty());
    }

    #[test]
    fn parses_and_names() {
        assert_eq!(parse_date("2026-13-01"), None);
        assert_eq!(folder_name(Ordinal::new(3)), "3_day");
    }
}
