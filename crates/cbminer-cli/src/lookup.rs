//! Per-name lookup orchestration.
//!
//! Resolves a company name to a qualified [`Company`] via search +
//! detail fetch, or reports why it could not. Only the top search hit is
//! ever considered; there is no fallback to later results.

use std::collections::HashSet;

use cbminer_core::entities::{Company, Investor};
use cbminer_crunchbase::{normalize, CrunchbaseClient, CrunchbaseError};

/// Outcome of resolving one company name.
///
/// Every non-`Qualified` variant is handled as skip-and-continue by the
/// pipeline; the variants are distinct so the operator log can separate
/// a provider failure from a legitimate business miss.
#[derive(Debug)]
pub enum CompanyResolution {
    /// Found and at least one round passed the filter. The company keeps
    /// ALL its rounds; report building re-filters.
    Qualified(Company),
    /// Found, but no round passed the filter.
    DoesNotQualify(Company),
    /// Zero search hits, or the top hit is not a company.
    NoMatch,
    /// Search or detail fetch failed at the provider level.
    ProviderError(CrunchbaseError),
}

/// Resolves `name` through search → top-hit gate → detail fetch →
/// qualification check.
pub async fn resolve_company(
    client: &CrunchbaseClient,
    name: &str,
    min_year: i32,
    allowed_categories: &HashSet<String>,
) -> CompanyResolution {
    let response = match client.search(name).await {
        Ok(response) => response,
        Err(e) => return CompanyResolution::ProviderError(e),
    };

    if response.total < 1 {
        return CompanyResolution::NoMatch;
    }
    let Some(top_hit) = response.results.first() else {
        return CompanyResolution::NoMatch;
    };
    if !top_hit.is_company() || top_hit.permalink.is_empty() {
        return CompanyResolution::NoMatch;
    }

    let record = match client.get_company(&top_hit.permalink).await {
        Ok(record) => record,
        Err(e) => return CompanyResolution::ProviderError(e),
    };

    let company = normalize::company_from_record(record);
    if company.qualifies(min_year, allowed_categories) {
        CompanyResolution::Qualified(company)
    } else {
        CompanyResolution::DoesNotQualify(company)
    }
}

/// Resolves an investor by known permalink: a single detail fetch, no
/// qualification stage.
///
/// # Errors
///
/// Returns the underlying [`CrunchbaseError`] if the detail fetch fails.
pub async fn resolve_investor(
    client: &CrunchbaseClient,
    permalink: &str,
) -> Result<Investor, CrunchbaseError> {
    let record = client.get_financial_org(permalink).await?;
    Ok(normalize::investor_from_record(record))
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
