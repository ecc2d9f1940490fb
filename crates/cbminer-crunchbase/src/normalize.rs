//! Normalization of CrunchBase wire records into domain entities.
//!
//! The v1 API omits fields freely; string fields missing from the
//! payload become empty strings, numeric fields stay `None`. Investment
//! entries are partitioned into the two permalink sets here, which also
//! de-duplicates them.

use std::collections::BTreeSet;

use cbminer_core::entities::{Company, FundingRound, Investor};

use crate::types::{CompanyRecord, FundingRoundRecord, InvestorRecord};

/// Builds a [`Company`] from a detail record. Round order follows the
/// payload order.
#[must_use]
pub fn company_from_record(record: CompanyRecord) -> Company {
    Company {
        name: record.name.unwrap_or_default(),
        crunchbase_url: record.crunchbase_url.unwrap_or_default(),
        permalink: record.permalink.unwrap_or_default(),
        industry: record.category_code.unwrap_or_default(),
        funding_rounds: record
            .funding_rounds
            .into_iter()
            .map(round_from_record)
            .collect(),
    }
}

/// Builds a [`FundingRound`], partitioning each investment entry by
/// whether it references a financial organization or a person. An entry
/// contributes to exactly one of the two sets.
#[must_use]
pub fn round_from_record(record: FundingRoundRecord) -> FundingRound {
    let mut vc_links = BTreeSet::new();
    let mut person_links = BTreeSet::new();

    for investment in record.investments {
        if let Some(permalink) = investment.financial_org.and_then(|org| org.permalink) {
            vc_links.insert(permalink);
        } else if let Some(permalink) = investment.person.and_then(|person| person.permalink) {
            person_links.insert(permalink);
        }
    }

    FundingRound {
        category: record.round_code.unwrap_or_default(),
        raised_amount: record.raised_amount,
        currency: record.raised_currency_code.unwrap_or_default(),
        day: record.funded_day,
        month: record.funded_month,
        year: record.funded_year,
        investor_vc_links: vc_links,
        investor_person_links: person_links,
    }
}

/// Builds an [`Investor`] from a financial-organization detail record.
/// No filtering stage exists for investors; whatever the provider
/// returns is taken as-is.
#[must_use]
pub fn investor_from_record(record: InvestorRecord) -> Investor {
    Investor {
        name: record.name.unwrap_or_default(),
        crunchbase_url: record.crunchbase_url.unwrap_or_default(),
        permalink: record.permalink.unwrap_or_default(),
        homepage_url: record.homepage_url,
    }
}
