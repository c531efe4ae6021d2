//! Golden tests for civil time → UT day number conversion.

use kundli_time::{BirthMoment, TimeError, TimeValue, calendar_to_jd, jd_to_calendar};

// ---------------------------------------------------------------------------
// Known instants
// ---------------------------------------------------------------------------

#[test]
fn chennai_birth_golden() {
    // 1990-05-15 10:00 IST (+5:30) = 04:30 UT → JD 2448026.6875
    let t = BirthMoment::new(1990, 5, 15, 10, 0, 5.5)
        .with_location(13.08, 80.27)
        .to_time_value()
        .unwrap();
    assert!((t.jd() - 2_448_026.687_5).abs() < 1e-8, "jd = {}", t.jd());
}

#[test]
fn rfc3339_of_birth() {
    let t = BirthMoment::new(1990, 5, 15, 10, 0, 5.5).to_time_value().unwrap();
    let dt = t.to_datetime_utc().unwrap();
    assert_eq!(dt.to_rfc3339(), "1990-05-15T04:30:00+00:00");
}

#[test]
fn pre_gregorian_dates_stay_monotonic() {
    let a = BirthMoment::new(1582, 10, 4, 12, 0, 0.0).to_time_value().unwrap();
    let b = BirthMoment::new(1582, 10, 15, 12, 0, 0.0).to_time_value().unwrap();
    assert!((b.days_since(a) - 11.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Monotonicity sweep
// ---------------------------------------------------------------------------

#[test]
fn hourly_sweep_strictly_increasing() {
    let mut prev: Option<TimeValue> = None;
    for day in 27..=29 {
        for hour in 0..24 {
            let t = BirthMoment::new(2024, 2, day, hour, 0, 5.5)
                .to_time_value()
                .unwrap();
            if let Some(p) = prev {
                assert!(t > p, "{day} {hour}h not after previous");
                assert!((t.days_since(p) - 1.0 / 24.0).abs() < 1e-9);
            }
            prev = Some(t);
        }
    }
}

#[test]
fn calendar_roundtrip_across_year_boundary() {
    let jd = calendar_to_jd(1999, 12, 31.999);
    let (y, m, d) = jd_to_calendar(jd);
    assert_eq!((y, m), (1999, 12));
    assert!((d - 31.999).abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn invalid_field_names_the_field() {
    let err = BirthMoment::new(2023, 4, 31, 0, 0, 0.0)
        .to_time_value()
        .unwrap_err();
    assert_eq!(
        err,
        TimeError::InvalidDay {
            year: 2023,
            month: 4,
            day: 31
        }
    );
    assert_eq!(err.to_string(), "invalid day: 2023-04-31");
}

#[test]
fn invalid_minute_rejected() {
    let err = BirthMoment::new(2023, 4, 1, 0, 60, 0.0)
        .to_time_value()
        .unwrap_err();
    assert_eq!(err, TimeError::InvalidMinute(60));
}
