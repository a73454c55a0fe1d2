use sparkline_rs::core::ValueLabel;

#[test]
fn values_above_1000_format_with_no_decimals() {
    let label = ValueLabel::new(1000.0001, "$");
    assert_eq!(label.fraction_digits(), 0);
    assert_eq!(label.formatted(), "1000$");

    assert_eq!(ValueLabel::new(52345.7, "$").formatted(), "52346$");
}

#[test]
fn mid_range_values_format_with_two_decimals() {
    let label = ValueLabel::new(123.456, "$");
    assert_eq!(label.fraction_digits(), 2);
    assert_eq!(label.formatted(), "123.46$");

    assert_eq!(ValueLabel::new(2.0, "$").fraction_digits(), 2);
    assert_eq!(ValueLabel::new(999.0, "$").fraction_digits(), 2);
}

#[test]
fn small_values_format_with_three_decimals() {
    let label = ValueLabel::new(1.5, "$");
    assert_eq!(label.fraction_digits(), 3);
    assert_eq!(label.formatted(), "1.5$");

    assert_eq!(ValueLabel::new(0.12345, "BTC").formatted(), "0.123BTC");
}

// The threshold pair `> 1000` / `[2, 999]` leaves `(999, 1000]` uncovered by
// either branch, so those values take the 3-decimal default. This mirrors the
// shipped threshold table on purpose; do not "fix" it here without changing
// the table itself.
#[test]
fn gap_between_999_and_1000_takes_three_decimals() {
    assert_eq!(ValueLabel::new(999.999, "$").fraction_digits(), 3);
    assert_eq!(ValueLabel::new(999.999, "$").formatted(), "999.999$");

    assert_eq!(ValueLabel::new(999.5, "$").fraction_digits(), 3);
}

#[test]
fn exactly_1000_takes_three_decimals() {
    // 1000 > 1000 is false and 1000 is outside [2, 999], so the default
    // branch applies; trimming collapses the output to the integral text.
    let label = ValueLabel::new(1000.0, "$");
    assert_eq!(label.fraction_digits(), 3);
    assert_eq!(label.formatted(), "1000$");
}

#[test]
fn trailing_zeros_are_trimmed() {
    assert_eq!(ValueLabel::new(3.0, "$").formatted(), "3$");
    assert_eq!(ValueLabel::new(2.5, "$").formatted(), "2.5$");
    assert_eq!(ValueLabel::new(1.0, "$").formatted(), "1$");
    assert_eq!(ValueLabel::new(0.1, "$").formatted(), "0.1$");
}

#[test]
fn unit_is_appended_without_separator() {
    assert_eq!(ValueLabel::new(5.25, "€").formatted(), "5.25€");
    assert_eq!(ValueLabel::new(5.25, "").formatted(), "5.25");
}

#[test]
fn negative_values_take_the_default_branch() {
    let label = ValueLabel::new(-12.3456, "$");
    assert_eq!(label.fraction_digits(), 3);
    assert_eq!(label.formatted(), "-12.346$");
}
