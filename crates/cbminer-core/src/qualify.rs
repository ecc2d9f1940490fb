//! The qualification filter: which funding rounds make the report.
//!
//! A round qualifies when its year is at or after the configured minimum
//! AND its category code is in the allowed set. Category membership is
//! case-sensitive; the config loader lower-cases the allowed set, and
//! provider round codes are already lower-case on the wire.

use std::collections::HashSet;

use crate::entities::{Company, FundingRound};

/// Returns the rounds of `company` matching the year/category filter, in
/// their original order. May be empty; a round with no `funded_year`
/// never qualifies.
#[must_use]
pub fn qualified_rounds<'a>(
    company: &'a Company,
    min_year: i32,
    allowed_categories: &HashSet<String>,
) -> Vec<&'a FundingRound> {
    company
        .funding_rounds
        .iter()
        .filter(|round| {
            round.year.is_some_and(|y| y >= min_year) && allowed_categories.contains(&round.category)
        })
        .collect()
}

impl Company {
    /// Derived property: a company belongs in the startup report iff at
    /// least one of its rounds passes the filter.
    #[must_use]
    pub fn qualifies(&self, min_year: i32, allowed_categories: &HashSet<String>) -> bool {
        !qualified_rounds(self, min_year, allowed_categories).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn round(year: Option<i32>, category: &str) -> FundingRound {
        FundingRound {
            category: category.to_string(),
            raised_amount: None,
            currency: "USD".to_string(),
            day: None,
            month: None,
            year,
            investor_vc_links: BTreeSet::new(),
            investor_person_links: BTreeSet::new(),
        }
    }

    fn company(rounds: Vec<FundingRound>) -> Company {
        Company {
            name: "Acme".to_string(),
            crunchbase_url: "http://www.crunchbase.com/company/acme".to_string(),
            permalink: "acme".to_string(),
            industry: "web".to_string(),
            funding_rounds: rounds,
        }
    }

    fn allowed(categories: &[&str]) -> HashSet<String> {
        categories.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn filters_by_year_and_category() {
        let c = company(vec![round(Some(2012), "seed"), round(Some(2009), "series-a")]);
        let cats = allowed(&["seed", "angel"]);

        let qualified = qualified_rounds(&c, 2011, &cats);

        assert_eq!(qualified.len(), 1);
        assert_eq!(qualified[0].year, Some(2012));
        assert_eq!(qualified[0].category, "seed");
    }

    #[test]
    fn preserves_original_round_order() {
        let c = company(vec![
            round(Some(2013), "angel"),
            round(Some(2011), "seed"),
            round(Some(2012), "angel"),
        ]);
        let cats = allowed(&["seed", "angel"]);

        let years: Vec<Option<i32>> = qualified_rounds(&c, 2011, &cats)
            .iter()
            .map(|r| r.year)
            .collect();

        assert_eq!(years, vec![Some(2013), Some(2011), Some(2012)]);
    }

    #[test]
    fn year_boundary_is_inclusive() {
        let c = company(vec![round(Some(2011), "seed"), round(Some(2010), "seed")]);
        let cats = allowed(&["seed"]);

        let qualified = qualified_rounds(&c, 2011, &cats);

        assert_eq!(qualified.len(), 1);
        assert_eq!(qualified[0].year, Some(2011));
    }

    #[test]
    fn category_outside_allowed_set_is_excluded() {
        let c = company(vec![round(Some(2015), "series-b")]);
        let cats = allowed(&["seed", "angel"]);

        assert!(qualified_rounds(&c, 2011, &cats).is_empty());
    }

    #[test]
    fn round_without_year_never_qualifies() {
        let c = company(vec![round(None, "seed")]);
        let cats = allowed(&["seed"]);

        assert!(qualified_rounds(&c, 2011, &cats).is_empty());
    }

    #[test]
    fn company_with_no_rounds_does_not_qualify() {
        let c = company(vec![]);
        let cats = allowed(&["seed"]);

        assert!(qualified_rounds(&c, 2011, &cats).is_empty());
        assert!(!c.qualifies(2011, &cats));
    }

    #[test]
    fn filter_is_idempotent() {
        let c = company(vec![round(Some(2012), "seed"), round(Some(2009), "seed")]);
        let cats = allowed(&["seed"]);

        let first: Vec<Option<i32>> = qualified_rounds(&c, 2011, &cats)
            .iter()
            .map(|r| r.year)
            .collect();
        let second: Vec<Option<i32>> = qualified_rounds(&c, 2011, &cats)
            .iter()
            .map(|r| r.year)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn qualifies_is_true_with_a_matching_round() {
        let c = company(vec![round(Some(2014), "angel")]);
        assert!(c.qualifies(2011, &allowed(&["angel"])));
    }
}
