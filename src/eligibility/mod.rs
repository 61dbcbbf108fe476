//! Subsidy eligibility rules and CO2 savings projection.
//!
//! Three independent checks (consumption class, tariff modality, average consumption) are
//! combined with logical AND. Unrecognized categorical values fail their check instead of
//! raising an error; [`EligibilityEngine::evaluate_checked`] adds shape validation for
//! callers that need to tell malformed input apart from a genuine rejection.

mod config;
pub mod domain;
mod report;
pub mod router;
mod rules;
mod validation;

#[cfg(test)]
mod tests;

pub use config::EligibilityPolicy;
pub use domain::{
    ConnectionType, ConsumptionClass, CustomerProfile, DocumentNumber, TariffModality,
};
pub use report::{EligibilityReport, IneligibilityReason, ReportShapeError};
pub use router::eligibility_router;
pub use rules::EligibilityChecks;
pub use validation::{ProfileValidationError, MAX_HISTORY_MONTHS};

use report::collect_reasons;
use tracing::debug;

/// Stateless evaluator applying an [`EligibilityPolicy`] to customer profiles.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    policy: EligibilityPolicy,
}

impl EligibilityEngine {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    pub fn checks(&self, profile: &CustomerProfile) -> EligibilityChecks {
        rules::run_checks(profile, &self.policy)
    }

    pub fn evaluate(&self, profile: &CustomerProfile) -> EligibilityReport {
        let checks = self.checks(profile);

        debug!(
            eligible = checks.all_passed(),
            average_kwh = checks.average_consumption_kwh,
            failed_checks = checks.failed_count(),
            "evaluated subsidy eligibility"
        );

        if checks.all_passed() {
            EligibilityReport::Eligible {
                annual_co2_savings_kg: rules::project_annual_co2_savings(profile, &self.policy),
            }
        } else {
            EligibilityReport::Ineligible {
                reasons: collect_reasons(&checks),
            }
        }
    }

    /// Validates the profile shape first, so malformed input never reads as "ineligible".
    pub fn evaluate_checked(
        &self,
        profile: &CustomerProfile,
    ) -> Result<EligibilityReport, ProfileValidationError> {
        validation::validate_profile(profile)?;
        Ok(self.evaluate(profile))
    }
}

/// Evaluates a profile against the standard program policy.
pub fn evaluate(profile: &CustomerProfile) -> EligibilityReport {
    EligibilityEngine::default().evaluate(profile)
}
