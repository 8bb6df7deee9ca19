use super::*;
use time::macros::date;

#[test]
fn js_month_is_zero_based() {
    assert_eq!(from_js_parts(2026, 9, 17), Some(date!(2026 - 10 - 17)));
    assert_eq!(from_js_parts(2026, 0, 1), Some(date!(2026 - 01 - 01)));
}

#[test]
fn out_of_range_parts_are_rejected() {
    assert_eq!(from_js_parts(2026, 12, 1), None);
    assert_eq!(from_js_parts(2026, 1, 30), None);
}
