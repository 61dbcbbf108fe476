use super::config::EligibilityPolicy;
use super::domain::{ConsumptionClass, CustomerProfile, TariffModality};

/// Outcome of each independent predicate, kept for explaining a verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibilityChecks {
    pub consumption_class_accepted: bool,
    pub tariff_modality_accepted: bool,
    pub average_consumption_accepted: bool,
    pub average_consumption_kwh: f64,
}

impl EligibilityChecks {
    pub fn all_passed(&self) -> bool {
        self.consumption_class_accepted
            && self.tariff_modality_accepted
            && self.average_consumption_accepted
    }

    pub fn failed_count(&self) -> usize {
        [
            self.consumption_class_accepted,
            self.tariff_modality_accepted,
            self.average_consumption_accepted,
        ]
        .iter()
        .filter(|passed| !**passed)
        .count()
    }
}

pub(crate) fn run_checks(
    profile: &CustomerProfile,
    policy: &EligibilityPolicy,
) -> EligibilityChecks {
    let average_consumption_kwh = average_consumption(profile, policy);

    EligibilityChecks {
        consumption_class_accepted: consumption_class_accepted(&profile.consumption_class),
        tariff_modality_accepted: tariff_modality_accepted(&profile.tariff_modality),
        average_consumption_accepted: policy
            .threshold_for(&profile.connection_type)
            .map(|threshold| average_consumption_kwh > threshold)
            .unwrap_or(false),
        average_consumption_kwh,
    }
}

pub(crate) fn consumption_class_accepted(class: &ConsumptionClass) -> bool {
    matches!(
        class,
        ConsumptionClass::Commercial | ConsumptionClass::Residential | ConsumptionClass::Industrial
    )
}

pub(crate) fn tariff_modality_accepted(modality: &TariffModality) -> bool {
    matches!(modality, TariffModality::Conventional | TariffModality::White)
}

// Divides by the policy constant even when fewer months are supplied.
pub(crate) fn average_consumption(profile: &CustomerProfile, policy: &EligibilityPolicy) -> f64 {
    profile.total_consumption_kwh() / f64::from(policy.averaging_months.get())
}

pub(crate) fn project_annual_co2_savings(
    profile: &CustomerProfile,
    policy: &EligibilityPolicy,
) -> f64 {
    (profile.total_consumption_kwh() / 1000.0) * policy.emission_factor_kg_per_mwh
}
