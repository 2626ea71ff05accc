//! Education loan comparison.
//!
//! ## Filters
//! - Loan type and served country
//! - Amount needed: the lender's ceiling must cover it
//! - Tenure needed: the lender's longest tenure must cover it
//! - Collateral: "yes" means secured offers only, "no" unsecured only
//! - Co-applicant: without one, only secured offers qualify
//!
//! Results are always ordered by indicative APR, lowest first.

use crate::format::EmptyState;
use crate::search::{log_search, ListingSearch, STUDY_COUNTRIES};
use crate::slider::{LOAN_AMOUNT, LOAN_TENURE};
use catalog::{Catalogs, Country, LoanOffer, LoanType};
use pipeline::filters::{EqualsFilter, MembershipFilter, PredicateFilter, ThresholdFilter};
use pipeline::{Comparator, Direction, FilterPipeline};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No matches found",
    hint: "Adjust filters to see more matches.",
};

pub const COUNTRIES: &[Country] = STUDY_COUNTRIES;

#[derive(Debug, Clone, PartialEq)]
pub struct LoanCriteria {
    pub loan_type: Option<LoanType>,
    pub country: Option<Country>,
    /// Amount needed in pounds.
    pub amount: u32,
    /// Repayment tenure needed in years.
    pub tenure_years: u32,
    /// Whether collateral can be offered; `None` is "Any".
    pub collateral: Option<bool>,
    /// Whether a co-applicant is available; `None` is "Any".
    pub co_applicant: Option<bool>,
}

impl Default for LoanCriteria {
    fn default() -> Self {
        Self {
            loan_type: None,
            country: None,
            amount: LOAN_AMOUNT.default,
            tenure_years: LOAN_TENURE.default,
            collateral: None,
            co_applicant: None,
        }
    }
}

pub struct LoanSearch {
    catalogs: Arc<Catalogs>,
    order: Comparator<LoanOffer>,
}

impl LoanSearch {
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self {
            catalogs,
            order: Comparator::new().then_by_float(
                "apr",
                |o: &LoanOffer| o.apr_from,
                Direction::Ascending,
            ),
        }
    }

    fn pipeline(&self, criteria: &LoanCriteria) -> FilterPipeline<LoanOffer> {
        FilterPipeline::new()
            .add_filter_if_some(criteria.loan_type, |loan_type| {
                EqualsFilter::new("loan_type", loan_type, |o: &LoanOffer| o.loan_type)
            })
            .add_filter_if_some(criteria.country, |country| {
                MembershipFilter::new("country", country, |o: &LoanOffer| o.countries.as_slice())
            })
            .add_filter(ThresholdFilter::at_least(
                "amount",
                LOAN_AMOUNT.clamp(criteria.amount),
                |o: &LoanOffer| o.max_amount_gbp,
            ))
            .add_filter(ThresholdFilter::at_least(
                "tenure",
                LOAN_TENURE.clamp(criteria.tenure_years),
                |o: &LoanOffer| o.tenure_years,
            ))
            .add_filter_if_some(criteria.collateral, |has_collateral| {
                let wanted = if has_collateral {
                    LoanType::Secured
                } else {
                    LoanType::Unsecured
                };
                EqualsFilter::new("collateral", wanted, |o: &LoanOffer| o.loan_type)
            })
            .add_filter_if_some(criteria.co_applicant.filter(|has| !has), |_| {
                PredicateFilter::new("co_applicant", |o: &LoanOffer| {
                    o.loan_type == LoanType::Secured
                })
            })
    }
}

impl ListingSearch for LoanSearch {
    type Record = LoanOffer;
    type Criteria = LoanCriteria;

    fn page(&self) -> &'static str {
        "loans"
    }

    fn records(&self) -> &[LoanOffer] {
        &self.catalogs.loans
    }

    fn search(&self, criteria: &LoanCriteria) -> Vec<&LoanOffer> {
        let results = self.pipeline(criteria).apply_sorted(self.records(), &self.order);
        log_search(self.page(), self.records().len(), results.len());
        results
    }

    fn empty_state(&self) -> EmptyState {
        EMPTY_STATE
    }
}
