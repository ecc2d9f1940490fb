//! Entities built from CrunchBase detail payloads.
//!
//! All three types are read-only after construction: they are assembled
//! once from a single provider response (see `cbminer-crunchbase`'s
//! `normalize` module), flattened into report rows, and dropped. None of
//! them holds a back-reference to its container, and a [`Company`] owns
//! its funding rounds exclusively.

use std::collections::BTreeSet;

use serde::Serialize;

/// An institutional investor ("financial organization" in provider terms).
#[derive(Debug, Clone, Serialize)]
pub struct Investor {
    pub name: String,
    pub crunchbase_url: String,
    /// Provider-assigned stable slug; the identity key. `name` is
    /// display-only and not guaranteed unique.
    pub permalink: String,
    pub homepage_url: Option<String>,
}

/// A single funding round of a [`Company`].
///
/// The two link sets partition the round's investments by whether each
/// entry references a financial organization or a person; an entry maps
/// to exactly one of the two, so the sets never share a permalink derived
/// from the same entry. Both are duplicate-free; iteration order carries
/// no meaning.
#[derive(Debug, Clone, Serialize)]
pub struct FundingRound {
    /// Round category code as provided upstream, e.g. `"seed"`, `"angel"`.
    pub category: String,
    pub raised_amount: Option<f64>,
    pub currency: String,
    pub day: Option<u32>,
    pub month: Option<u32>,
    /// Primary filter key. Absent on some provider records; a round
    /// without a year never qualifies.
    pub year: Option<i32>,
    pub investor_vc_links: BTreeSet<String>,
    pub investor_person_links: BTreeSet<String>,
}

/// A company with its funding history.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub name: String,
    pub crunchbase_url: String,
    pub permalink: String,
    /// Provider `category_code`, e.g. `"web"`.
    pub industry: String,
    /// Rounds in provider response order.
    pub funding_rounds: Vec<FundingRound>,
}
