// File: crates/barchart-core/tests/dataset.rs
// Purpose: Boundary validation of dataset construction.

use barchart_core::{Dataset, DatasetError};

#[test]
fn sample_matches_original_data() {
    let d = Dataset::sample();
    assert_eq!(d.values(), &[4.0, 8.0, 15.0, 16.0, 23.0, 42.0]);
    assert_eq!(d.len(), 6);
    assert_eq!(d.max(), 42.0);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(Dataset::new(Vec::new()).unwrap_err(), DatasetError::Empty);
}

#[test]
fn negative_value_is_rejected() {
    let err = Dataset::new(vec![4.0, -8.0, 15.0]).unwrap_err();
    assert_eq!(
        err,
        DatasetError::Negative {
            index: 1,
            value: -8.0
        }
    );
}

#[test]
fn non_finite_value_is_rejected() {
    let err = Dataset::new(vec![4.0, f64::NAN]).unwrap_err();
    assert_eq!(err, DatasetError::NotFinite { index: 1 });
    let err = Dataset::new(vec![f64::INFINITY]).unwrap_err();
    assert_eq!(err, DatasetError::NotFinite { index: 0 });
}

#[test]
fn zero_values_are_allowed() {
    let d = Dataset::new(vec![0.0, 0.0]).expect("zeros are valid values");
    assert_eq!(d.max(), 0.0);
}
