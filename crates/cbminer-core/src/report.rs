//! Flattening of qualified entities into report rows.
//!
//! Rows are plain typed structs; quoting, joining of multi-value fields,
//! and byte-level CSV concerns belong to the writer in `cbminer-cli`.

use std::collections::HashSet;

use crate::entities::{Company, Investor};
use crate::qualify::qualified_rounds;

/// One startup-report row: a (company, qualifying round) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupRow {
    pub company_name: String,
    pub crunchbase_url: String,
    pub permalink: String,
    pub industry: String,
    pub raised_amount: Option<f64>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub category: String,
    pub vc_links: Vec<String>,
    pub person_links: Vec<String>,
}

/// One investor-report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorRow {
    pub name: String,
    pub crunchbase_url: String,
    pub permalink: String,
    pub homepage_url: Option<String>,
}

/// Emits one row per qualifying round of each company, re-applying the
/// qualification filter. A company with several qualifying rounds yields
/// several rows; a company with none yields no rows at all.
#[must_use]
pub fn build_startup_rows(
    companies: &[Company],
    min_year: i32,
    allowed_categories: &HashSet<String>,
) -> Vec<StartupRow> {
    let mut rows = Vec::new();
    for company in companies {
        for round in qualified_rounds(company, min_year, allowed_categories) {
            rows.push(StartupRow {
                company_name: company.name.clone(),
                crunchbase_url: company.crunchbase_url.clone(),
                permalink: company.permalink.clone(),
                industry: company.industry.clone(),
                raised_amount: round.raised_amount,
                year: round.year,
                month: round.month,
                category: round.category.clone(),
                vc_links: round.investor_vc_links.iter().cloned().collect(),
                person_links: round.investor_person_links.iter().cloned().collect(),
            });
        }
    }
    rows
}

/// One row per investor, in input order, no filtering.
#[must_use]
pub fn build_investor_rows(investors: &[Investor]) -> Vec<InvestorRow> {
    investors
        .iter()
        .map(|investor| InvestorRow {
            name: investor.name.clone(),
            crunchbase_url: investor.crunchbase_url.clone(),
            permalink: investor.permalink.clone(),
            homepage_url: investor.homepage_url.clone(),
        })
        .collect()
}
