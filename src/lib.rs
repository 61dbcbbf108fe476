pub mod config;
pub mod eligibility;
pub mod error;
pub mod intake;
pub mod telemetry;
