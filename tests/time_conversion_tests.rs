use rhourlog::errors::AppError;
use rhourlog::models::elapsed::Elapsed;
use rhourlog::utils::time::{clock_to_decimal, decimal_to_clock, hms_to_decimal, sum_as_clock};

#[test]
fn test_decimal_to_clock_truncates_minutes() {
    assert_eq!(decimal_to_clock(7.75), "07:45");
    assert_eq!(decimal_to_clock(9.25), "09:15");
    assert_eq!(decimal_to_clock(0.0), "00:00");
    // 8h 59m 59s is still 8h 59m
    assert_eq!(decimal_to_clock(hms_to_decimal(8, 59, 59)), "08:59");
    assert_eq!(decimal_to_clock(12.0), "12:00");
}

#[test]
fn test_decimal_to_clock_keeps_sign_in_front() {
    assert_eq!(decimal_to_clock(-0.5), "-00:30");
    assert_eq!(decimal_to_clock(-1.5), "-01:30");
    assert_eq!(decimal_to_clock(-9.0), "-09:00");
}

#[test]
fn test_clock_to_decimal_parses_hours_and_minutes() {
    assert_eq!(clock_to_decimal("07:45").unwrap(), 7.75);
    assert_eq!(clock_to_decimal("00:30").unwrap(), 0.5);
    assert_eq!(clock_to_decimal("10:00").unwrap(), 10.0);
    assert_eq!(clock_to_decimal(" 01:15 ").unwrap(), 1.25);
}

#[test]
fn test_clock_to_decimal_rejects_malformed_input() {
    for bad in ["", "7", "07:45:00", "aa:bb", "07-45", "07:", ":45", "7.5:00"] {
        let err = clock_to_decimal(bad).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidTime(_)),
            "expected InvalidTime for {bad:?}, got {err:?}"
        );
        assert!(err.is_format_error());
    }
}

#[test]
fn test_round_trip_recovers_whole_minutes() {
    for h in [0u32, 1, 7, 8, 9, 23, 100] {
        for m in 0..60u32 {
            let x = h as f64 + m as f64 / 60.0;
            let back = clock_to_decimal(&decimal_to_clock(x)).unwrap();
            assert!((back - x).abs() < 1e-9, "{h}:{m} came back as {back}");
        }
    }

    // seconds are dropped, never rounded up
    let x = hms_to_decimal(3, 20, 45);
    let back = clock_to_decimal(&decimal_to_clock(x)).unwrap();
    assert!((back - hms_to_decimal(3, 20, 0)).abs() < 1e-9);
}

#[test]
fn test_sum_as_clock_mixes_positive_and_negative() {
    assert_eq!(sum_as_clock([9.25, -0.5, 7.75]), "16:30");
    assert_eq!(sum_as_clock([1.0, -3.5]), "-02:30");
    assert_eq!(sum_as_clock(std::iter::empty()), "00:00");
}

#[test]
fn test_elapsed_display_and_decimal_hours() {
    let e = Elapsed::new(8, 30, 0);
    assert_eq!(e.to_string(), "08:30:00");
    assert_eq!(e.as_decimal_hours(), 8.5);
    assert_eq!(Elapsed::new(9, 15, 0).as_decimal_hours(), 9.25);
}

#[test]
fn test_decimal_to_clock_never_rounds_up_to_next_minute() {
    assert_eq!(decimal_to_clock(0.99999999999), "00:59");
    assert_eq!(decimal_to_clock(7.0 + 59.9999 / 60.0), "07:59");
    assert_eq!(decimal_to_clock(-0.99999999999), "-00:59");
    // exact minute values built from HH:MM still land on their minute
    assert_eq!(decimal_to_clock(7.0 + 7.0 / 60.0), "07:07");
}
