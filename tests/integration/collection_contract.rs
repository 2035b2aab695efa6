//! Integration tests for the DefaultableVec container contract

use overrule::defaultable::DefaultableVec;

#[test]
fn test_supplied_values_replace_defaults_entirely() {
    let mut widths = DefaultableVec::from_defaults([100u32, 200, 400, 800]);
    widths.push(50);
    widths.push(75);
    assert_eq!(widths.as_slice(), &[50, 75]);
}

#[test]
fn test_untouched_container_keeps_defaults() {
    let widths = DefaultableVec::from_defaults([100u32, 200, 400, 800]);
    assert_eq!(widths.as_slice(), &[100, 200, 400, 800]);
    assert!(!widths.is_overridden());
}

#[test]
fn test_value_supplied_over_empty_defaults() {
    let mut widths: DefaultableVec<u32> = DefaultableVec::from_defaults([]);
    widths.push(1);
    assert_eq!(widths.as_slice(), &[1]);
}

#[test]
fn test_zero_appends_keep_defaults() {
    // An explicit empty source performs zero appends and is therefore
    // indistinguishable from an absent source: defaults survive.
    let mut widths = DefaultableVec::from_defaults([1u32, 2, 3]);
    let appended: Vec<u32> = Vec::new();
    widths.extend(appended);
    assert_eq!(widths.as_slice(), &[1, 2, 3]);
    assert!(!widths.is_overridden());
}

#[test]
fn test_clear_then_push_does_not_restore_defaults() {
    let mut widths = DefaultableVec::from_defaults([1u32, 2, 3]);
    widths.push(10);
    widths.clear();
    widths.push(20);
    assert_eq!(widths.as_slice(), &[20]);
}

#[test]
fn test_removed_default_stays_removed_after_queries() {
    let mut widths = DefaultableVec::from_defaults([100u32, 200, 400]);
    assert!(widths.remove(&200));
    assert!(!widths.contains(&200));
    assert_eq!(widths.len(), 2);
    // remove never flips the flag, so a later push still discards the rest
    widths.push(50);
    assert_eq!(widths.as_slice(), &[50]);
}

#[test]
fn test_copy_out_produces_independent_storage() {
    let mut widths = DefaultableVec::from_defaults([100u32, 200]);
    let mut buffer = [0u32; 2];
    widths.copy_into(&mut buffer, 0).unwrap();
    widths.push(50);
    // The copy is unaffected by later mutation of the container.
    assert_eq!(buffer, [100, 200]);
    assert_eq!(widths.as_slice(), &[50]);
}
