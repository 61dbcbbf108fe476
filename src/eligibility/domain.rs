use serde::{Deserialize, Serialize};

/// Opaque customer document identifier. Carried through evaluation, never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentNumber(pub String);

/// Electrical phase configuration of the customer's connection.
///
/// Tokens are matched case-sensitively; anything else is kept verbatim in
/// [`ConnectionType::Unrecognized`] and fails the consumption check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectionType {
    SinglePhase,
    TwoPhase,
    ThreePhase,
    Unrecognized(String),
}

impl ConnectionType {
    pub fn as_token(&self) -> &str {
        match self {
            ConnectionType::SinglePhase => "monofasico",
            ConnectionType::TwoPhase => "bifasico",
            ConnectionType::ThreePhase => "trifasico",
            ConnectionType::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ConnectionType::SinglePhase => "Single-phase",
            ConnectionType::TwoPhase => "Two-phase",
            ConnectionType::ThreePhase => "Three-phase",
            ConnectionType::Unrecognized(_) => "Unrecognized",
        }
    }
}

impl From<String> for ConnectionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "monofasico" => Self::SinglePhase,
            "bifasico" => Self::TwoPhase,
            "trifasico" => Self::ThreePhase,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<&str> for ConnectionType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ConnectionType> for String {
    fn from(value: ConnectionType) -> Self {
        match value {
            ConnectionType::Unrecognized(raw) => raw,
            other => other.as_token().to_string(),
        }
    }
}

/// Customer category assigned by the distributor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConsumptionClass {
    Commercial,
    Residential,
    Industrial,
    PublicSector,
    Rural,
    Unrecognized(String),
}

impl ConsumptionClass {
    pub fn as_token(&self) -> &str {
        match self {
            ConsumptionClass::Commercial => "comercial",
            ConsumptionClass::Residential => "residencial",
            ConsumptionClass::Industrial => "industrial",
            ConsumptionClass::PublicSector => "poderPublico",
            ConsumptionClass::Rural => "rural",
            ConsumptionClass::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ConsumptionClass::Commercial => "Commercial",
            ConsumptionClass::Residential => "Residential",
            ConsumptionClass::Industrial => "Industrial",
            ConsumptionClass::PublicSector => "Public sector",
            ConsumptionClass::Rural => "Rural",
            ConsumptionClass::Unrecognized(_) => "Unrecognized",
        }
    }
}

impl From<String> for ConsumptionClass {
    fn from(value: String) -> Self {
        match value.as_str() {
            "comercial" => Self::Commercial,
            "residencial" => Self::Residential,
            "industrial" => Self::Industrial,
            "poderPublico" => Self::PublicSector,
            "rural" => Self::Rural,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<&str> for ConsumptionClass {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ConsumptionClass> for String {
    fn from(value: ConsumptionClass) -> Self {
        match value {
            ConsumptionClass::Unrecognized(raw) => raw,
            other => other.as_token().to_string(),
        }
    }
}

/// Billing-rate scheme of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TariffModality {
    White,
    Blue,
    Green,
    Conventional,
    Unrecognized(String),
}

impl TariffModality {
    pub fn as_token(&self) -> &str {
        match self {
            TariffModality::White => "branca",
            TariffModality::Blue => "azul",
            TariffModality::Green => "verde",
            TariffModality::Conventional => "convencional",
            TariffModality::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TariffModality::White => "White",
            TariffModality::Blue => "Blue",
            TariffModality::Green => "Green",
            TariffModality::Conventional => "Conventional",
            TariffModality::Unrecognized(_) => "Unrecognized",
        }
    }
}

impl From<String> for TariffModality {
    fn from(value: String) -> Self {
        match value.as_str() {
            "branca" => Self::White,
            "azul" => Self::Blue,
            "verde" => Self::Green,
            "convencional" => Self::Conventional,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<&str> for TariffModality {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TariffModality> for String {
    fn from(value: TariffModality) -> Self {
        match value {
            TariffModality::Unrecognized(raw) => raw,
            other => other.as_token().to_string(),
        }
    }
}

/// Contract attributes and monthly consumption submitted for evaluation.
///
/// `consumption_history` is ordered most-recent-first, in kWh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    #[serde(alias = "numeroDoDocumento")]
    pub document_number: DocumentNumber,
    #[serde(alias = "tipoDeConexao")]
    pub connection_type: ConnectionType,
    #[serde(alias = "classeDeConsumo")]
    pub consumption_class: ConsumptionClass,
    #[serde(alias = "modalidadeTarifaria")]
    pub tariff_modality: TariffModality,
    #[serde(alias = "historicoDeConsumo")]
    pub consumption_history: Vec<f64>,
}

impl CustomerProfile {
    /// Sum of every reading present, whatever the history length.
    pub fn total_consumption_kwh(&self) -> f64 {
        self.consumption_history.iter().sum()
    }
}
