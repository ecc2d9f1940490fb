//! The `startups` pipeline: company names in, qualified-round report out.
//!
//! Names are resolved one at a time; every per-name failure is logged
//! and skipped so a single bad name does not abort the full run. Only
//! list-file and report-file I/O errors are fatal.

use std::collections::HashSet;

use cbminer_core::report::build_startup_rows;
use cbminer_core::AppConfig;
use cbminer_crunchbase::CrunchbaseClient;

use crate::lookup::{self, CompanyResolution};
use crate::{names, output};

/// Per-name outcome counts for the run summary.
#[derive(Debug, Default)]
struct ResolutionTotals {
    qualified: usize,
    did_not_qualify: usize,
    no_match: usize,
    provider_errors: usize,
}

/// Runs the startup report end to end.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the name list cannot
/// be read, or the report cannot be written.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let client = CrunchbaseClient::new(&config.api_key, config.request_timeout_secs)?;
    run_with_client(config, &client).await
}

pub(crate) async fn run_with_client(
    config: &AppConfig,
    client: &CrunchbaseClient,
) -> anyhow::Result<()> {
    let list_path = config.input_path(&config.company_names_file);
    let company_names = names::read_names_from_file(&list_path)?;
    tracing::info!(
        names = company_names.len(),
        list = %list_path.display(),
        "resolving company names"
    );

    let allowed: HashSet<String> = config.round_types.iter().cloned().collect();
    let mut companies = Vec::new();
    let mut totals = ResolutionTotals::default();

    // Sequential on purpose: one name in flight at a time.
    for name in &company_names {
        match lookup::resolve_company(client, name, config.start_year, &allowed).await {
            CompanyResolution::Qualified(company) => {
                tracing::info!(name = %name, permalink = %company.permalink, "qualified");
                totals.qualified += 1;
                companies.push(company);
            }
            CompanyResolution::DoesNotQualify(company) => {
                tracing::info!(
                    name = %name,
                    permalink = %company.permalink,
                    "found but did not qualify"
                );
                totals.did_not_qualify += 1;
            }
            CompanyResolution::NoMatch => {
                tracing::warn!(name = %name, "no company match — skipping");
                totals.no_match += 1;
            }
            CompanyResolution::ProviderError(e) => {
                tracing::warn!(name = %name, error = %e, "provider error — skipping");
                totals.provider_errors += 1;
            }
        }
    }

    tracing::info!(
        qualified = totals.qualified,
        did_not_qualify = totals.did_not_qualify,
        no_match = totals.no_match,
        provider_errors = totals.provider_errors,
        "company resolution finished"
    );

    let rows = build_startup_rows(&companies, config.start_year, &allowed);
    let report_path = config.output_path(&config.startup_output_file);
    output::write_startup_csv(&report_path, &rows)?;
    tracing::info!(rows = rows.len(), report = %report_path.display(), "startup report written");

    Ok(())
}

#[cfg(test)]
#[path = "startups_test.rs"]
mod tests;
