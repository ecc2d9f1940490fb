//! The `investors` pipeline: known permalinks in, investor report out.
//!
//! No qualification stage; every permalink that resolves contributes a
//! row. Provider failures are logged and skipped like the startup
//! pipeline's.

use cbminer_core::report::build_investor_rows;
use cbminer_core::AppConfig;
use cbminer_crunchbase::CrunchbaseClient;

use crate::{lookup, names, output};

/// Runs the investor report end to end.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the permalink list
/// cannot be read, or the report cannot be written.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let client = CrunchbaseClient::new(&config.api_key, config.request_timeout_secs)?;
    run_with_client(config, &client).await
}

pub(crate) async fn run_with_client(
    config: &AppConfig,
    client: &CrunchbaseClient,
) -> anyhow::Result<()> {
    let list_path = config.input_path(&config.vc_names_file);
    let permalinks = names::read_names_from_file(&list_path)?;
    tracing::info!(
        permalinks = permalinks.len(),
        list = %list_path.display(),
        "resolving investor permalinks"
    );

    let mut investors = Vec::new();
    let mut failed: usize = 0;
    for permalink in &permalinks {
        match lookup::resolve_investor(client, permalink).await {
            Ok(investor) => investors.push(investor),
            Err(e) => {
                tracing::warn!(permalink = %permalink, error = %e, "lookup failed — skipping");
                failed += 1;
            }
        }
    }

    tracing::info!(
        resolved = investors.len(),
        failed,
        "investor resolution finished"
    );

    let rows = build_investor_rows(&investors);
    let report_path = config.output_path(&config.investor_output_file);
    output::write_investor_csv(&report_path, &rows)?;
    tracing::info!(rows = rows.len(), report = %report_path.display(), "investor report written");

    Ok(())
}

#[cfg(test)]
#[path = "investors_test.rs"]
mod tests;
