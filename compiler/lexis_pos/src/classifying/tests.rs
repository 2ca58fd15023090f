use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_band_bounds() {
    assert_eq!(ClassifyingPos::FIRST, -2);
    assert_eq!(ClassifyingPos::LAST, -11);
    assert_eq!(ClassifyingPos::ALL.len(), 10);
}

#[test]
fn test_values_are_consecutive() {
    for (offset, category) in (0..).zip(ClassifyingPos::ALL) {
        assert_eq!(category.value(), ClassifyingPos::FIRST - offset, "{category}");
    }
}

#[test]
fn test_last_terminates_band() {
    assert_eq!(ClassifyingPos::ALL.last(), Some(&ClassifyingPos::Last));
    assert_eq!(ClassifyingPos::Last.value(), ClassifyingPos::LAST);
}

#[test]
fn test_from_raw_round_trip() {
    for category in ClassifyingPos::ALL {
        assert_eq!(ClassifyingPos::from_raw(category.value()), Some(category));
    }
}

#[test]
fn test_from_raw_outside_band() {
    assert_eq!(ClassifyingPos::from_raw(-1), None);
    assert_eq!(ClassifyingPos::from_raw(0), None);
    assert_eq!(ClassifyingPos::from_raw(-12), None);
    assert_eq!(ClassifyingPos::from_raw(isize::MIN), None);
}

#[test]
fn test_names() {
    assert_eq!(ClassifyingPos::Box.name(), "Box");
    assert_eq!(ClassifyingPos::ParallelMove.to_string(), "ParallelMove");
    assert_eq!(ClassifyingPos::MethodExtractor.to_string(), "MethodExtractor");
}
