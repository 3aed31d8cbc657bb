//! Reference values for the numeric primitives.

use rust_decimal_macros::dec;

use arbcalc::math::{
    minus_fee, plus_fee, quantity_increments_compatible, spread_percent, to_increment,
};

#[test]
fn test_spread_percent() {
    assert_eq!(spread_percent(dec!(100), dec!(200)).unwrap(), dec!(100));
    assert_eq!(spread_percent(dec!(200), dec!(100)).unwrap(), dec!(-50));
    assert_eq!(spread_percent(dec!(0.5), dec!(2.0)).unwrap(), dec!(300));
    assert_eq!(spread_percent(dec!(0.5), dec!(0.75)).unwrap(), dec!(50));
}

#[test]
fn test_spread_percent_zero_ask() {
    assert!(spread_percent(dec!(0), dec!(1)).is_err());
}

#[test]
fn test_quantity_increments_compatible() {
    let compatible = [
        (dec!(4), dec!(2)),
        (dec!(5), dec!(0.1)),
        (dec!(0.99), dec!(0.11)),
        (dec!(1), dec!(0.001)),
    ];
    for (a, b) in compatible {
        assert!(quantity_increments_compatible(a, b), "{a} / {b}");
        assert!(quantity_increments_compatible(b, a), "{b} / {a}");
    }

    let incompatible = [(dec!(0.99), dec!(0.1)), (dec!(5), dec!(3)), (dec!(0.03), dec!(0.1))];
    for (a, b) in incompatible {
        assert!(!quantity_increments_compatible(a, b), "{a} / {b}");
        assert!(!quantity_increments_compatible(b, a), "{b} / {a}");
    }
}

#[test]
fn test_to_increment() {
    assert_eq!(to_increment(dec!(15), dec!(6)).unwrap(), dec!(12));
    assert_eq!(to_increment(dec!(15), dec!(3)).unwrap(), dec!(15));
    assert_eq!(to_increment(dec!(20), dec!(7)).unwrap(), dec!(14));
    assert_eq!(to_increment(dec!(1199), dec!(20)).unwrap(), dec!(1180));
}

#[test]
fn test_plus_fee() {
    assert_eq!(plus_fee(dec!(100), dec!(50)).unwrap(), dec!(200));
    assert_eq!(plus_fee(dec!(70), dec!(30)).unwrap(), dec!(100));
}

#[test]
fn test_minus_fee() {
    assert_eq!(minus_fee(dec!(60), dec!(20)).unwrap(), dec!(50));
    assert_eq!(minus_fee(dec!(294.4), dec!(15)).unwrap(), dec!(256));
}

#[test]
fn test_fee_inverse_relations() {
    // plus_fee undoes a deduction, minus_fee undoes a surcharge.
    let n = dec!(256);
    let fee = dec!(15);
    assert_eq!(minus_fee(n * dec!(1.15), fee).unwrap(), n);
    assert_eq!(plus_fee(n * dec!(0.85), fee).unwrap(), n);
}
