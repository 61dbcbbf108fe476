//! End-to-end scenarios through the public evaluator API, CSV intake, and HTTP router.

use std::io::Cursor;
use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};
use subsidy_eligibility::eligibility::{
    eligibility_router, evaluate, CustomerProfile, EligibilityEngine, EligibilityPolicy,
    IneligibilityReason,
};
use subsidy_eligibility::intake::HistoryImporter;
use tower::ServiceExt;

fn profile_from_json(value: Value) -> CustomerProfile {
    serde_json::from_value(value).expect("profile parses")
}

#[test]
fn residential_conventional_single_phase_projects_savings() {
    let profile = profile_from_json(json!({
        "documentNumber": "14041737706",
        "connectionType": "monofasico",
        "consumptionClass": "residencial",
        "tariffModality": "convencional",
        "consumptionHistory": [500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500]
    }));

    let report = evaluate(&profile);

    assert_eq!(
        serde_json::to_value(&report).expect("json"),
        json!({ "eligible": true, "annualCo2Savings": 504.0 })
    );
}

#[test]
fn ten_month_rural_sample_keeps_fixed_divisor_behavior() {
    // The sample supplies ten months; the average still divides by twelve
    // (54572 / 12 = 4547.67), so only class and tariff are reported.
    let profile = profile_from_json(json!({
        "numeroDoDocumento": "14041737706",
        "tipoDeConexao": "bifasico",
        "classeDeConsumo": "rural",
        "modalidadeTarifaria": "verde",
        "historicoDeConsumo": [3878, 9760, 5976, 2797, 2481, 5731, 7538, 4392, 7859, 4160]
    }));

    let report = evaluate(&profile);

    assert_eq!(
        serde_json::to_value(&report).expect("json"),
        json!({
            "eligible": false,
            "ineligibilityReasons": [
                "Classe de consumo não aceita",
                "Modalidade tarifária não aceita"
            ]
        })
    );
}

#[test]
fn unknown_connection_and_exact_threshold_are_rejected() {
    let unknown = profile_from_json(json!({
        "documentNumber": "1",
        "connectionType": "quadrifasico",
        "consumptionClass": "comercial",
        "tariffModality": "branca",
        "consumptionHistory": [99999, 99999, 99999]
    }));
    let at_threshold = profile_from_json(json!({
        "documentNumber": "2",
        "connectionType": "trifasico",
        "consumptionClass": "comercial",
        "tariffModality": "branca",
        "consumptionHistory": [750, 750, 750, 750, 750, 750, 750, 750, 750, 750, 750, 750]
    }));

    for profile in [unknown, at_threshold] {
        assert_eq!(
            evaluate(&profile).ineligibility_reasons(),
            Some(&[IneligibilityReason::AverageConsumption][..])
        );
    }
}

#[test]
fn imported_history_feeds_evaluation() {
    let csv = "reference_month,consumption_kwh\n\
               2025-01,420\n2025-02,430\n2025-03,440\n2025-04,450\n\
               2025-05,460\n2025-06,470\n2025-07,480\n2025-08,490\n\
               2025-09,500\n2025-10,510\n2025-11,520\n2025-12,530\n";
    let history = HistoryImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
    assert_eq!(history.first(), Some(&530.0));
    assert_eq!(history.last(), Some(&420.0));

    let profile = profile_from_json(json!({
        "documentNumber": "3",
        "connectionType": "monofasico",
        "consumptionClass": "industrial",
        "tariffModality": "convencional",
        "consumptionHistory": history
    }));

    let engine = EligibilityEngine::new(EligibilityPolicy::standard());
    let report = engine.evaluate_checked(&profile).expect("valid profile");

    // 5700 kWh total, average 475
    assert!(report.is_eligible());
    let savings = report.annual_co2_savings().expect("savings present");
    assert!((savings - 478.8).abs() < 1e-9);
}

#[tokio::test]
async fn http_route_distinguishes_malformed_input_from_rejection() {
    let router = eligibility_router(Arc::new(EligibilityEngine::default()));

    let rejected = router
        .clone()
        .oneshot(post_json(json!({
            "documentNumber": "4",
            "connectionType": "monofasico",
            "consumptionClass": "rural",
            "tariffModality": "azul",
            "consumptionHistory": [100, 100]
        })))
        .await
        .expect("route executes");
    assert_eq!(rejected.status(), StatusCode::OK);

    let malformed = router
        .oneshot(post_json(json!({
            "documentNumber": "4",
            "connectionType": "monofasico",
            "consumptionClass": "rural",
            "tariffModality": "azul",
            "consumptionHistory": [100, -5]
        })))
        .await
        .expect("route executes");
    assert_eq!(malformed.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

fn post_json(body: Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/eligibility/evaluate")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("encode body"),
        ))
        .expect("request builds")
}
