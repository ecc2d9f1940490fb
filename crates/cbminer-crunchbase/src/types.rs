//! CrunchBase v1 API wire types.
//!
//! All types model the JSON returned by the v1 REST endpoints. Provider
//! field names are centralised here as serde struct fields, so a schema
//! change touches this module and nothing else. Most fields are
//! `#[serde(default)]`: v1 payloads routinely omit keys rather than
//! sending nulls, and absent data must not fail the whole record.

use serde::Deserialize;

/// The entity kinds this client can address.
///
/// `as_str` doubles as the search-result `namespace` value and the
/// detail-endpoint path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Company,
    FinancialOrganization,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::Company => "company",
            EntityKind::FinancialOrganization => "financial-organization",
        }
    }
}

// ---------------------------------------------------------------------------
// search.js
// ---------------------------------------------------------------------------

/// Response of the `search.js` endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// A single search result.
///
/// `namespace` declares the entity kind (`"company"`, `"person"`,
/// `"financial-organization"`, ...); `permalink` is the join key for the
/// follow-up detail fetch.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub permalink: String,
}

impl SearchHit {
    /// Whether this hit declares itself a company.
    #[must_use]
    pub fn is_company(&self) -> bool {
        self.namespace == EntityKind::Company.as_str()
    }
}

// ---------------------------------------------------------------------------
// company/{permalink}.js
// ---------------------------------------------------------------------------

/// Full company detail record.
#[derive(Debug, Deserialize)]
pub struct CompanyRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub crunchbase_url: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    /// Industry classification, e.g. `"web"`.
    #[serde(default)]
    pub category_code: Option<String>,
    #[serde(default)]
    pub funding_rounds: Vec<FundingRoundRecord>,
}

/// One funding round inside a [`CompanyRecord`].
#[derive(Debug, Deserialize)]
pub struct FundingRoundRecord {
    /// Round category, e.g. `"seed"`, `"angel"`, `"a"`.
    #[serde(default)]
    pub round_code: Option<String>,
    #[serde(default)]
    pub raised_amount: Option<f64>,
    #[serde(default)]
    pub raised_currency_code: Option<String>,
    #[serde(default)]
    pub funded_day: Option<u32>,
    #[serde(default)]
    pub funded_month: Option<u32>,
    #[serde(default)]
    pub funded_year: Option<i32>,
    #[serde(default)]
    pub investments: Vec<InvestmentRecord>,
}

/// An individual investment in a round: exactly one of `financial_org`
/// or `person` is populated on well-formed records.
#[derive(Debug, Deserialize)]
pub struct InvestmentRecord {
    #[serde(default)]
    pub financial_org: Option<EntityRef>,
    #[serde(default)]
    pub person: Option<EntityRef>,
}

/// Minimal reference to another CrunchBase entity.
#[derive(Debug, Deserialize)]
pub struct EntityRef {
    #[serde(default)]
    pub permalink: Option<String>,
}

// ---------------------------------------------------------------------------
// financial-organization/{permalink}.js
// ---------------------------------------------------------------------------

/// Full financial-organization detail record.
#[derive(Debug, Deserialize)]
pub struct InvestorRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub crunchbase_url: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub homepage_url: Option<String>,
}
