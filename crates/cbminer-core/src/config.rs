use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_i32 = |var: &str, raw: &str| -> Result<i32, ConfigError> {
        raw.parse::<i32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_key = require("CRUNCHBASE_API_KEY")?;
    let start_year = parse_i32("CBMINER_START_YEAR", &require("CBMINER_START_YEAR")?)?;

    // Lower-case the allowed set here; the qualification filter itself
    // does case-sensitive membership checks.
    let round_types: Vec<String> = require("CBMINER_ROUND_TYPES")?
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect();
    if round_types.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CBMINER_ROUND_TYPES".to_string(),
            reason: "no round categories listed".to_string(),
        });
    }

    let input_dir = PathBuf::from(or_default("CBMINER_INPUT_DIR", "./input"));
    let output_dir = PathBuf::from(or_default("CBMINER_OUTPUT_DIR", "./output"));
    let company_names_file = or_default("CBMINER_COMPANY_NAMES_FILE", "company_names.txt");
    let vc_names_file = or_default("CBMINER_VC_NAMES_FILE", "vc_permalinks.txt");
    let startup_output_file = or_default("CBMINER_STARTUP_OUTPUT_FILE", "startups.csv");
    let investor_output_file = or_default("CBMINER_INVESTOR_OUTPUT_FILE", "investors.csv");
    let request_timeout_secs = parse_u64("CBMINER_REQUEST_TIMEOUT_SECS", "30")?;
    let log_level = or_default("CBMINER_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_key,
        input_dir,
        output_dir,
        company_names_file,
        vc_names_file,
        startup_output_file,
        investor_output_file,
        start_year,
        round_types,
        request_timeout_secs,
        log_level,
    })
}
