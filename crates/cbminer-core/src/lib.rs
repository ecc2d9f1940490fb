//! Domain model and pure pipeline logic for the CrunchBase funding report.
//!
//! Everything in this crate is I/O-free: entities, the qualification
//! filter, report-row flattening, and environment-sourced configuration
//! parsing. HTTP and file handling live in `cbminer-crunchbase` and
//! `cbminer-cli`.

pub mod app_config;
pub mod config;
pub mod entities;
pub mod qualify;
pub mod report;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use entities::{Company, FundingRound, Investor};
pub use qualify::qualified_rounds;
pub use report::{build_investor_rows, build_startup_rows, InvestorRow, StartupRow};

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
