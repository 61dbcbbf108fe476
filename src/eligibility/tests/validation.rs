use super::common::*;
use crate::eligibility::{ProfileValidationError, MAX_HISTORY_MONTHS};

#[test]
fn checked_evaluation_passes_well_formed_profiles_through() {
    let report = engine()
        .evaluate_checked(&sample_rural_profile())
        .expect("ten months is a valid history");

    assert!(!report.is_eligible());
}

#[test]
fn empty_history_is_a_validation_error_not_a_rejection() {
    let profile = profile("monofasico", "residencial", "convencional", Vec::new());

    assert_eq!(
        engine().evaluate_checked(&profile),
        Err(ProfileValidationError::EmptyHistory)
    );
    // The unchecked path keeps the fail-open behavior.
    assert!(!engine().evaluate(&profile).is_eligible());
}

#[test]
fn negative_readings_are_rejected_with_position() {
    let profile = profile(
        "monofasico",
        "residencial",
        "convencional",
        vec![500.0, -3.0, 500.0],
    );

    assert_eq!(
        engine().evaluate_checked(&profile),
        Err(ProfileValidationError::NegativeReading {
            index: 1,
            value: -3.0
        })
    );
}

#[test]
fn non_finite_readings_are_rejected() {
    let profile = profile(
        "monofasico",
        "residencial",
        "convencional",
        vec![500.0, 500.0, f64::NAN],
    );

    assert_eq!(
        engine().evaluate_checked(&profile),
        Err(ProfileValidationError::NonFiniteReading { index: 2 })
    );
}

#[test]
fn overlong_history_is_rejected() {
    let profile = profile(
        "monofasico",
        "residencial",
        "convencional",
        vec![500.0; MAX_HISTORY_MONTHS + 1],
    );

    assert_eq!(
        engine().evaluate_checked(&profile),
        Err(ProfileValidationError::HistoryTooLong {
            len: 13,
            max: MAX_HISTORY_MONTHS
        })
    );
}

#[test]
fn readings_whose_sum_overflows_are_rejected() {
    let profile = profile(
        "monofasico",
        "residencial",
        "convencional",
        vec![1e308, 1e308],
    );

    assert_eq!(
        engine().evaluate_checked(&profile),
        Err(ProfileValidationError::TotalOutOfRange { index: 1 })
    );
}

#[test]
fn unrecognized_tokens_pass_validation() {
    let profile = profile("quadrifasico", "estatal", "roxa", vec![500.0; 12]);

    let report = engine()
        .evaluate_checked(&profile)
        .expect("unknown tokens are a business rejection");

    assert_eq!(report.ineligibility_reasons().map(|reasons| reasons.len()), Some(3));
}
