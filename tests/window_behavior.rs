//! Behavior tests for lookback-window resolution.

use tradelens_core::{resolve_window, RawObservation, WindowError};
use tradelens_tests::{day, raw_series};

#[test]
fn rolls_forward_to_first_trading_day_within_tolerance() {
    // Anniversary 2020-01-01 is not a trading day; the series starts on the
    // 4th, three days later.
    let raw = raw_series(day("2020-01-04"), &[Some(10.0), Some(11.0), Some(9.0)]);

    let resolved = resolve_window(&raw, 5, day("2025-01-01"), 5).expect("window should resolve");
    assert_eq!(resolved.window.target, day("2020-01-01"));
    assert_eq!(resolved.window.start, day("2020-01-04"));
    assert_eq!(resolved.window.end, day("2020-01-06"));
    assert_eq!(resolved.series.len(), 3);
}

#[test]
fn rejects_window_start_beyond_tolerance() {
    let raw = raw_series(day("2020-01-10"), &[Some(10.0), Some(11.0)]);

    let err = resolve_window(&raw, 5, day("2025-01-01"), 5).expect_err("must fail");
    assert_eq!(
        err,
        WindowError::RollForwardExceeded {
            target: day("2020-01-01"),
            start: day("2020-01-10"),
            delta_days: 9,
            max_roll_days: 5,
        }
    );
}

#[test]
fn tolerance_is_inclusive() {
    let raw = raw_series(day("2020-01-06"), &[Some(10.0), Some(11.0)]);

    let resolved = resolve_window(&raw, 5, day("2025-01-01"), 5).expect("window should resolve");
    assert_eq!(resolved.window.start, day("2020-01-06"));
}

#[test]
fn fails_when_no_date_on_or_after_target() {
    let raw = raw_series(day("2019-06-01"), &[Some(10.0), Some(11.0)]);

    let err = resolve_window(&raw, 5, day("2025-01-01"), 5).expect_err("must fail");
    assert_eq!(
        err,
        WindowError::NoTradingDayInRange {
            target: day("2020-01-01")
        }
    );
}

#[test]
fn fails_when_window_has_only_missing_closes() {
    let raw = raw_series(day("2020-01-02"), &[None, None, None]);

    let err = resolve_window(&raw, 5, day("2025-01-01"), 5).expect_err("must fail");
    assert_eq!(err, WindowError::EmptyAfterCleaning);
}

#[test]
fn drops_missing_closes_inside_window() {
    let raw = raw_series(
        day("2020-01-02"),
        &[Some(10.0), None, Some(12.0), None, Some(9.5)],
    );

    let resolved = resolve_window(&raw, 5, day("2025-01-01"), 5).expect("window should resolve");
    assert_eq!(resolved.series.len(), 3);
    assert_eq!(resolved.series.close_on(day("2020-01-03")), None);
    assert_eq!(resolved.series.close_on(day("2020-01-04")), Some(12.0));
}

#[test]
fn observations_before_the_window_start_are_cut() {
    let mut raw = raw_series(day("2019-12-20"), &[Some(1.0), Some(2.0)]);
    raw.extend(raw_series(day("2020-01-02"), &[Some(10.0), Some(11.0)]));

    let resolved = resolve_window(&raw, 5, day("2025-01-01"), 5).expect("window should resolve");
    assert_eq!(resolved.series.len(), 2);
    assert_eq!(resolved.series.first().close, 10.0);
}

#[test]
fn unsorted_provider_output_is_resolved_defensively() {
    let mut raw = raw_series(day("2020-01-02"), &[Some(10.0), Some(11.0), Some(9.0)]);
    raw.reverse();

    let sorted: Vec<RawObservation> = {
        let mut copy = raw.clone();
        copy.reverse();
        copy
    };

    let from_unsorted =
        resolve_window(&raw, 5, day("2025-01-01"), 5).expect("window should resolve");
    let from_sorted =
        resolve_window(&sorted, 5, day("2025-01-01"), 5).expect("window should resolve");
    assert_eq!(from_unsorted, from_sorted);
}

#[test]
fn leap_day_reference_clamps_anniversary_to_feb_28() {
    let raw = raw_series(day("2023-02-28"), &[Some(10.0), Some(11.0)]);

    let resolved = resolve_window(&raw, 1, day("2024-02-29"), 5).expect("window should resolve");
    assert_eq!(resolved.window.target, day("2023-02-28"));
    assert_eq!(resolved.window.start, day("2023-02-28"));
}
