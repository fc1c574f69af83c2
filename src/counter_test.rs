use super::*;

#[test]
fn two_rapid_increments_saturate_at_max() {
    let mut counter = BoundedCounter::new(0, 1, 1, 0).unwrap();
    assert_eq!(counter.increment(), 1);
    assert_eq!(counter.increment(), 1, "must saturate, not reach 2");
    assert!(counter.at_max());
}

#[test]
fn decrement_saturates_at_min() {
    let mut counter = BoundedCounter::new(0, 10, 3, 2).unwrap();
    assert_eq!(counter.decrement(), 0);
    assert_eq!(counter.decrement(), 0);
    assert!(counter.at_min());
}

#[test]
fn arbitrary_sequences_stay_within_bounds() {
    let mut counter = BoundedCounter::new(-5, 5, 2, 0).unwrap();
    let moves = [1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1];
    for up in moves {
        if up == 1 {
            counter.increment();
        } else {
            counter.decrement();
        }
        assert!((-5..=5).contains(&counter.value()), "value escaped bounds");
    }
}

#[test]
fn initial_value_is_clamped_into_range() {
    let counter = BoundedCounter::new(0, 10, 1, 99).unwrap();
    assert_eq!(counter.value(), 10);
    let counter = BoundedCounter::new(0, 10, 1, -3).unwrap();
    assert_eq!(counter.value(), 0);
}

#[test]
fn non_positive_step_defaults_to_one() {
    let mut counter = BoundedCounter::new(0, 10, 0, 0).unwrap();
    assert_eq!(counter.increment(), 1);
    let mut counter = BoundedCounter::new(0, 10, -4, 0).unwrap();
    assert_eq!(counter.increment(), 1);
}

#[test]
fn inverted_bounds_are_rejected() {
    assert_eq!(
        BoundedCounter::new(5, 0, 1, 0),
        Err(CounterError::InvalidBounds { min: 5, max: 0 })
    );
}

#[test]
fn saturating_near_integer_limits_does_not_overflow() {
    let mut counter = BoundedCounter::new(i64::MIN, i64::MAX, i64::MAX, i64::MAX - 1).unwrap();
    assert_eq!(counter.increment(), i64::MAX);
    assert_eq!(counter.increment(), i64::MAX);
}
