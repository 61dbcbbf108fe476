use serde::{Deserialize, Serialize};

use super::rules::EligibilityChecks;

/// Verdict of a single evaluation.
///
/// Serializes to the flat record consumers expect: `eligible` plus exactly one of
/// `annualCo2Savings` or `ineligibilityReasons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReportRecord", into = "ReportRecord")]
pub enum EligibilityReport {
    Eligible { annual_co2_savings_kg: f64 },
    Ineligible { reasons: Vec<IneligibilityReason> },
}

impl EligibilityReport {
    pub fn is_eligible(&self) -> bool {
        matches!(self, EligibilityReport::Eligible { .. })
    }

    pub fn annual_co2_savings(&self) -> Option<f64> {
        match self {
            EligibilityReport::Eligible {
                annual_co2_savings_kg,
            } => Some(*annual_co2_savings_kg),
            EligibilityReport::Ineligible { .. } => None,
        }
    }

    pub fn ineligibility_reasons(&self) -> Option<&[IneligibilityReason]> {
        match self {
            EligibilityReport::Eligible { .. } => None,
            EligibilityReport::Ineligible { reasons } => Some(reasons),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            EligibilityReport::Eligible {
                annual_co2_savings_kg,
            } => format!(
                "eligible, projected savings of {:.2} kg CO2 per year",
                annual_co2_savings_kg
            ),
            EligibilityReport::Ineligible { reasons } => {
                let messages: Vec<&str> = reasons.iter().map(|reason| reason.message()).collect();
                format!("ineligible: {}", messages.join("; "))
            }
        }
    }
}

/// Failed predicate, rendered with the program's fixed reason strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IneligibilityReason {
    ConsumptionClass,
    TariffModality,
    AverageConsumption,
}

impl IneligibilityReason {
    pub fn message(&self) -> &'static str {
        match self {
            IneligibilityReason::ConsumptionClass => "Classe de consumo não aceita",
            IneligibilityReason::TariffModality => "Modalidade tarifária não aceita",
            IneligibilityReason::AverageConsumption => "Consumo médio não aceito",
        }
    }
}

impl From<IneligibilityReason> for String {
    fn from(value: IneligibilityReason) -> Self {
        value.message().to_string()
    }
}

impl TryFrom<String> for IneligibilityReason {
    type Error = ReportShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        [
            IneligibilityReason::ConsumptionClass,
            IneligibilityReason::TariffModality,
            IneligibilityReason::AverageConsumption,
        ]
        .into_iter()
        .find(|reason| reason.message() == value)
        .ok_or(ReportShapeError::UnknownReason(value))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportShapeError {
    #[error("unknown ineligibility reason '{0}'")]
    UnknownReason(String),
    #[error("eligible report must carry annualCo2Savings and no ineligibilityReasons")]
    EligibleShape,
    #[error("ineligible report must carry ineligibilityReasons and no annualCo2Savings")]
    IneligibleShape,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportRecord {
    eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    annual_co2_savings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ineligibility_reasons: Option<Vec<IneligibilityReason>>,
}

impl From<EligibilityReport> for ReportRecord {
    fn from(value: EligibilityReport) -> Self {
        match value {
            EligibilityReport::Eligible {
                annual_co2_savings_kg,
            } => ReportRecord {
                eligible: true,
                annual_co2_savings: Some(annual_co2_savings_kg),
                ineligibility_reasons: None,
            },
            EligibilityReport::Ineligible { reasons } => ReportRecord {
                eligible: false,
                annual_co2_savings: None,
                ineligibility_reasons: Some(reasons),
            },
        }
    }
}

impl TryFrom<ReportRecord> for EligibilityReport {
    type Error = ReportShapeError;

    fn try_from(value: ReportRecord) -> Result<Self, Self::Error> {
        match value {
            ReportRecord {
                eligible: true,
                annual_co2_savings: Some(annual_co2_savings_kg),
                ineligibility_reasons: None,
            } => Ok(EligibilityReport::Eligible {
                annual_co2_savings_kg,
            }),
            ReportRecord { eligible: true, .. } => Err(ReportShapeError::EligibleShape),
            ReportRecord {
                eligible: false,
                annual_co2_savings: None,
                ineligibility_reasons: Some(reasons),
            } => Ok(EligibilityReport::Ineligible { reasons }),
            ReportRecord { eligible: false, .. } => Err(ReportShapeError::IneligibleShape),
        }
    }
}

/// Lists failed predicates in evaluation order: class, tariff, consumption.
pub(crate) fn collect_reasons(checks: &EligibilityChecks) -> Vec<IneligibilityReason> {
    let mut reasons = Vec::new();
    if !checks.consumption_class_accepted {
        reasons.push(IneligibilityReason::ConsumptionClass);
    }
    if !checks.tariff_modality_accepted {
        reasons.push(IneligibilityReason::TariffModality);
    }
    if !checks.average_consumption_accepted {
        reasons.push(IneligibilityReason::AverageConsumption);
    }
    reasons
}
