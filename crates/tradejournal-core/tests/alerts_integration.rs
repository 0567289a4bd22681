//! Integration tests for the safety classifier against the built-in
//! market calendar.

use chrono::NaiveDate;
use tradejournal_core::{MarketCalendar, SafetyClassifier, TradingStatus};

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn christmas_2026_is_closed() {
    // 2026-12-25 is a Friday.
    let calendar = MarketCalendar::builtin();
    let report = SafetyClassifier::new().classify(day("2026-12-25"), &calendar);

    assert_eq!(report.status, TradingStatus::Closed);
    assert_eq!(report.title, "Christmas Day");
}

#[test]
fn ordinary_weekday_is_clear() {
    let calendar = MarketCalendar::builtin();
    // 2026-03-10 is a Tuesday with no scheduled events.
    let report = SafetyClassifier::new().classify(day("2026-03-10"), &calendar);

    assert_eq!(report.status, TradingStatus::Clear);
}

#[test]
fn saturday_is_weekend_not_clear() {
    let calendar = MarketCalendar::builtin();
    let report = SafetyClassifier::new().classify(day("2026-03-14"), &calendar);

    assert_eq!(report.status, TradingStatus::Weekend);
}

#[test]
fn next_safe_skips_a_holiday_weekend() {
    // From Christmas Eve 2026 (Thursday): Friday is closed, then the
    // weekend; the following Monday is the first tradeable day.
    let calendar = MarketCalendar::builtin();
    let next = SafetyClassifier::new()
        .next_safe_day(day("2026-12-24"), &calendar)
        .unwrap();

    assert_eq!(next.date, day("2026-12-28"));
    assert_eq!(next.days_away, 4);
    assert!(!next.nfp);
    assert!(!next.fomc);
}

#[test]
fn next_safe_lands_on_a_release_day_with_a_caveat() {
    // From Thursday 2026-12-03, the next weekday is the NFP Friday; it
    // qualifies but carries the nfp flag.
    let calendar = MarketCalendar::builtin();
    let next = SafetyClassifier::new()
        .next_safe_day(day("2026-12-03"), &calendar)
        .unwrap();

    assert_eq!(next.date, day("2026-12-04"));
    assert_eq!(next.days_away, 1);
    assert!(next.nfp);
}

#[test]
fn upcoming_alerts_are_sorted_and_bounded() {
    let calendar = MarketCalendar::builtin();
    let alerts = SafetyClassifier::new().upcoming_alerts(day("2026-11-20"), &calendar);

    // Within 30 days: Thanksgiving, the December NFP, the December FOMC.
    let dates: Vec<_> = alerts.iter().map(|alert| alert.date).collect();
    assert_eq!(
        dates,
        vec![day("2026-11-26"), day("2026-12-04"), day("2026-12-09")]
    );
    assert_eq!(alerts[0].days_away, 6);

    // Restartable: a second call over the same inputs is identical.
    let again = SafetyClassifier::new().upcoming_alerts(day("2026-11-20"), &calendar);
    assert_eq!(again.len(), alerts.len());
}
