use chrono::NaiveDate;

use daylight_wheel::dst::*;
use daylight_wheel::Error;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ── Sunday helpers ──

#[test]
fn test_first_sunday_known_dates() {
    assert_eq!(first_sunday(2025, 11).unwrap(), date(2025, 11, 2));
    assert_eq!(first_sunday(2024, 11).unwrap(), date(2024, 11, 3));
    // 2024-09-01 falls on a Sunday itself
    assert_eq!(first_sunday(2024, 9).unwrap(), date(2024, 9, 1));
}

#[test]
fn test_second_sunday_known_dates() {
    assert_eq!(second_sunday(2025, 3).unwrap(), date(2025, 3, 9));
    assert_eq!(second_sunday(2024, 3).unwrap(), date(2024, 3, 10));
    assert_eq!(second_sunday(2024, 9).unwrap(), date(2024, 9, 8));
}

// ── dst_in_effect ──

#[test]
fn test_midsummer_and_midwinter() {
    assert!(dst_in_effect(2025, 7, 1).unwrap());
    assert!(!dst_in_effect(2025, 1, 1).unwrap());
}

#[test]
fn test_spring_boundary_inclusive() {
    // DST starts at 00:00 on the second Sunday of March
    assert!(dst_in_effect(2025, 3, 9).unwrap());
    assert!(!dst_in_effect(2025, 3, 8).unwrap());
}

#[test]
fn test_fall_boundary_exclusive() {
    // DST ends at 00:00 on the first Sunday of November
    assert!(!dst_in_effect(2025, 11, 2).unwrap());
    assert!(dst_in_effect(2025, 11, 1).unwrap());
}

#[test]
fn test_other_years() {
    assert!(dst_in_effect(2024, 3, 10).unwrap());
    assert!(!dst_in_effect(2024, 3, 9).unwrap());
    assert!(!dst_in_effect(2024, 11, 3).unwrap());
    assert!(dst_in_effect(2024, 11, 2).unwrap());
}

#[test]
fn test_invalid_dates_rejected() {
    assert!(matches!(
        dst_in_effect(2025, 2, 30).unwrap_err(),
        Error::InvalidRange { .. }
    ));
    assert!(dst_in_effect(2025, 13, 1).is_err());
    assert!(first_sunday(2025, 0).is_err());
}

#[test]
fn test_today_does_not_error() {
    assert!(dst_in_effect_today().is_ok());
}
