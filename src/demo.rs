use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use subsidy_eligibility::eligibility::{
    ConnectionType, ConsumptionClass, CustomerProfile, DocumentNumber, EligibilityEngine,
    EligibilityReport, TariffModality,
};
use subsidy_eligibility::error::AppError;
use subsidy_eligibility::intake::HistoryImporter;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding a complete customer profile
    #[arg(
        long,
        conflicts_with_all = [
            "document_number",
            "connection_type",
            "consumption_class",
            "tariff_modality",
            "history",
            "history_csv",
        ]
    )]
    pub(crate) profile: Option<PathBuf>,
    /// Customer document number (carried through, not validated)
    #[arg(long)]
    pub(crate) document_number: Option<String>,
    /// Connection type token, e.g. monofasico
    #[arg(long)]
    pub(crate) connection_type: Option<String>,
    /// Consumption class token, e.g. residencial
    #[arg(long)]
    pub(crate) consumption_class: Option<String>,
    /// Tariff modality token, e.g. convencional
    #[arg(long)]
    pub(crate) tariff_modality: Option<String>,
    /// Monthly kWh readings, most recent first, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1.., conflicts_with = "history_csv")]
    pub(crate) history: Option<Vec<f64>>,
    /// CSV export with reference_month,consumption_kwh columns
    #[arg(long)]
    pub(crate) history_csv: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let as_json = args.json;
    let profile = build_profile(args)?;

    let engine = EligibilityEngine::default();
    let report = engine.evaluate_checked(&profile)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&engine, &profile, &report);
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let profile = sample_profile();
    let engine = EligibilityEngine::default();
    let report = engine.evaluate_checked(&profile)?;

    println!("Subsidy eligibility demo");
    println!("\nInput profile");
    println!("{}", serde_json::to_string_pretty(&profile)?);
    println!("\nReport");
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!();
    render_report(&engine, &profile, &report);

    Ok(())
}

pub(crate) fn build_profile(args: EvaluateArgs) -> Result<CustomerProfile, AppError> {
    if let Some(path) = args.profile {
        let reader = BufReader::new(File::open(path)?);
        return Ok(serde_json::from_reader(reader)?);
    }

    let consumption_history = match (args.history, args.history_csv) {
        (Some(history), _) => history,
        (None, Some(path)) => HistoryImporter::from_path(path)?,
        (None, None) => return Err(AppError::MissingInput("--history or --history-csv")),
    };

    Ok(CustomerProfile {
        document_number: DocumentNumber(
            args.document_number
                .ok_or(AppError::MissingInput("--document-number"))?,
        ),
        connection_type: ConnectionType::from(
            args.connection_type
                .ok_or(AppError::MissingInput("--connection-type"))?,
        ),
        consumption_class: ConsumptionClass::from(
            args.consumption_class
                .ok_or(AppError::MissingInput("--consumption-class"))?,
        ),
        tariff_modality: TariffModality::from(
            args.tariff_modality
                .ok_or(AppError::MissingInput("--tariff-modality"))?,
        ),
        consumption_history,
    })
}

fn sample_profile() -> CustomerProfile {
    CustomerProfile {
        document_number: DocumentNumber("14041737706".to_string()),
        connection_type: ConnectionType::TwoPhase,
        consumption_class: ConsumptionClass::Rural,
        tariff_modality: TariffModality::Green,
        consumption_history: vec![
            3878.0, 9760.0, 5976.0, 2797.0, 2481.0, 5731.0, 7538.0, 4392.0, 7859.0, 4160.0,
        ],
    }
}

fn render_report(
    engine: &EligibilityEngine,
    profile: &CustomerProfile,
    report: &EligibilityReport,
) {
    let checks = engine.checks(profile);
    let mark = |passed: bool| if passed { "pass" } else { "fail" };

    println!("Customer {}", profile.document_number.0);
    println!(
        "- {} connection, {} class, {} tariff, {} month(s) of history",
        profile.connection_type.label(),
        profile.consumption_class.label(),
        profile.tariff_modality.label(),
        profile.consumption_history.len()
    );
    println!("- consumption class: {}", mark(checks.consumption_class_accepted));
    println!("- tariff modality: {}", mark(checks.tariff_modality_accepted));
    match engine.policy().threshold_for(&profile.connection_type) {
        Some(threshold) => println!(
            "- average consumption {:.2} kWh (must exceed {:.0} kWh): {}",
            checks.average_consumption_kwh,
            threshold,
            mark(checks.average_consumption_accepted)
        ),
        None => println!(
            "- average consumption {:.2} kWh: fail (unrecognized connection '{}')",
            checks.average_consumption_kwh,
            profile.connection_type.as_token()
        ),
    }

    match report.ineligibility_reasons() {
        Some(reasons) => {
            println!("\nIneligible");
            for reason in reasons {
                println!("- {}", reason.message());
            }
        }
        None => println!("\n{}", report.summary()),
    }
}
