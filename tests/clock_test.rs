use hr_window::clock::{TimeTriple, Unit, add_duration, coerce_raw, format_unit, normalize};

#[test]
fn test_hours_overflow_resets_to_midnight() {
    let prev = TimeTriple::new(12, 30, 45);
    for raw in [24, 25, 47, 48, 100, 1000] {
        let next = normalize(prev, Unit::Hours, raw);
        assert_eq!(next.hours, 0, "hours edit {} should reset", raw);
        assert_eq!((next.minutes, next.seconds), (30, 45));
    }
}

#[test]
fn test_hours_in_range_taken_verbatim() {
    for raw in 0..=23u32 {
        assert_eq!(
            normalize(TimeTriple::MIDNIGHT, Unit::Hours, u64::from(raw)).hours,
            raw
        );
    }
}

#[test]
fn test_minutes_90_from_hour_5() {
    let prev = TimeTriple::new(5, 0, 17);
    assert_eq!(normalize(prev, Unit::Minutes, 90), TimeTriple::new(6, 30, 17));
}

#[test]
fn test_minutes_full_day_wraps_back() {
    let prev = TimeTriple::new(10, 0, 0);
    let next = normalize(prev, Unit::Minutes, 1470);
    assert_eq!(next.hours, 10);
    assert_eq!(next.minutes, 30);
}

#[test]
fn test_seconds_cascade_through_midnight() {
    let prev = TimeTriple::new(23, 59, 0);
    assert_eq!(normalize(prev, Unit::Seconds, 3661), TimeTriple::new(1, 0, 1));
}

#[test]
fn test_direct_and_cascaded_hour_overflow_differ() {
    // 25 typed into hours resets, 25 hours reached through minutes wraps.
    let direct = normalize(TimeTriple::MIDNIGHT, Unit::Hours, 25);
    let cascaded = normalize(TimeTriple::MIDNIGHT, Unit::Minutes, 25 * 60);
    assert_eq!(direct.hours, 0);
    assert_eq!(cascaded.hours, 1);
}

#[test]
fn test_normalizing_own_values_is_noop() {
    let samples = [
        TimeTriple::MIDNIGHT,
        TimeTriple::new(23, 59, 59),
        TimeTriple::new(7, 0, 30),
        TimeTriple::new(12, 45, 0),
    ];
    for t in samples {
        assert_eq!(normalize(t, Unit::Hours, u64::from(t.hours)), t);
        assert_eq!(normalize(t, Unit::Minutes, u64::from(t.minutes)), t);
        assert_eq!(normalize(t, Unit::Seconds, u64::from(t.seconds)), t);
    }
}

#[test]
fn test_every_edit_yields_canonical_time() {
    let prev = TimeTriple::new(22, 58, 30);
    for unit in [Unit::Hours, Unit::Minutes, Unit::Seconds] {
        for raw in [0, 1, 59, 60, 61, 119, 3599, 3600, 86_399, 86_400, 1_000_000] {
            let next = normalize(prev, unit, raw);
            assert!(next.hours < 24, "{:?} {} -> {}", unit, raw, next);
            assert!(next.minutes < 60, "{:?} {} -> {}", unit, raw, next);
            assert!(next.seconds < 60, "{:?} {} -> {}", unit, raw, next);
        }
    }
}

#[test]
fn test_add_duration_applies() {
    assert_eq!(
        add_duration(TimeTriple::MIDNIGHT, 30),
        Some(TimeTriple::new(0, 30, 0))
    );
    assert_eq!(
        add_duration(TimeTriple::new(9, 45, 10), 60),
        Some(TimeTriple::new(10, 45, 10))
    );
}

#[test]
fn test_add_duration_beyond_99_hours_declines() {
    assert_eq!(add_duration(TimeTriple::new(90, 0, 0), 600), None);
}

#[test]
fn test_add_duration_does_not_wrap_at_24() {
    let end = add_duration(TimeTriple::new(22, 0, 0), 180).unwrap();
    assert_eq!(end, TimeTriple::new(25, 0, 0));
    assert_eq!(end.to_string(), "25:00:00");
}

#[test]
fn test_formatting() {
    assert_eq!(format_unit(5), "05");
    assert_eq!(format_unit(135), "135");
    assert_eq!(TimeTriple::new(1, 2, 3).to_string(), "01:02:03");
}

#[test]
fn test_coerced_field_text_feeds_normalizer() {
    let prev = TimeTriple::new(4, 0, 0);
    assert_eq!(normalize(prev, Unit::Minutes, coerce_raw("-20")), TimeTriple::new(4, 0, 0));
    assert_eq!(normalize(prev, Unit::Minutes, coerce_raw("oops")), TimeTriple::new(4, 0, 0));
    assert_eq!(normalize(prev, Unit::Minutes, coerce_raw("75")), TimeTriple::new(5, 15, 0));
}

#[test]
fn test_field_text_beyond_u32_cascades_in_full() {
    let next = normalize(TimeTriple::MIDNIGHT, Unit::Seconds, coerce_raw("5000000000"));
    assert_eq!(next, TimeTriple::new(8, 53, 20));

    // 4_294_967_356 minutes = 71_582_789 h 16 m; 71_582_789 % 24 == 5.
    let next = normalize(TimeTriple::MIDNIGHT, Unit::Minutes, coerce_raw("4294967356"));
    assert_eq!(next, TimeTriple::new(5, 16, 0));
}
