use std::num::NonZeroU32;

use super::domain::ConnectionType;

const TWELVE_MONTHS: NonZeroU32 = match NonZeroU32::new(12) {
    Some(months) => months,
    None => unreachable!(),
};

/// Numeric constants applied by the eligibility rules.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityPolicy {
    pub single_phase_threshold_kwh: f64,
    pub two_phase_threshold_kwh: f64,
    pub three_phase_threshold_kwh: f64,
    /// Divisor used for the monthly average. Fixed, independent of history length.
    pub averaging_months: NonZeroU32,
    /// Kilograms of CO2 emitted per 1000 kWh generated.
    pub emission_factor_kg_per_mwh: f64,
}

impl EligibilityPolicy {
    pub fn standard() -> Self {
        Self {
            single_phase_threshold_kwh: 400.0,
            two_phase_threshold_kwh: 500.0,
            three_phase_threshold_kwh: 750.0,
            averaging_months: TWELVE_MONTHS,
            emission_factor_kg_per_mwh: 84.0,
        }
    }

    /// Minimum average (exclusive) for the connection, `None` when unrecognized.
    pub fn threshold_for(&self, connection: &ConnectionType) -> Option<f64> {
        match connection {
            ConnectionType::SinglePhase => Some(self.single_phase_threshold_kwh),
            ConnectionType::TwoPhase => Some(self.two_phase_threshold_kwh),
            ConnectionType::ThreePhase => Some(self.three_phase_threshold_kwh),
            ConnectionType::Unrecognized(_) => None,
        }
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
