use axum::response::Response;
use serde_json::Value;

use crate::eligibility::domain::{
    ConnectionType, ConsumptionClass, CustomerProfile, DocumentNumber, TariffModality,
};
use crate::eligibility::{EligibilityEngine, EligibilityPolicy};

pub(super) fn profile(
    connection: &str,
    class: &str,
    tariff: &str,
    history: Vec<f64>,
) -> CustomerProfile {
    CustomerProfile {
        document_number: DocumentNumber("14041737706".to_string()),
        connection_type: ConnectionType::from(connection),
        consumption_class: ConsumptionClass::from(class),
        tariff_modality: TariffModality::from(tariff),
        consumption_history: history,
    }
}

/// Residential, conventional, single-phase customer averaging 500 kWh.
pub(super) fn eligible_profile() -> CustomerProfile {
    profile("monofasico", "residencial", "convencional", vec![500.0; 12])
}

/// Ten-month rural customer from the program's sample payload.
pub(super) fn sample_rural_profile() -> CustomerProfile {
    profile(
        "bifasico",
        "rural",
        "verde",
        vec![
            3878.0, 9760.0, 5976.0, 2797.0, 2481.0, 5731.0, 7538.0, 4392.0, 7859.0, 4160.0,
        ],
    )
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(EligibilityPolicy::standard())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
