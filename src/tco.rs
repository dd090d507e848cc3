//! Total cost of ownership, purchase versus rental.
//!
//! Every function here is a pure view over a [`FormState`]: nothing is cached,
//! so the results always match the current form.

use rust_decimal_macros::dec;
use thiserror::Error;

use crate::Amount;
use crate::form::{DerivedCosts, FormState};
use crate::model::{Duration, Segment};

/// Share of the taxable base treated as recoverable VAT in business mode.
const VAT_PCT: i64 = 40;
/// Deductible share of the post-VAT base for a purchased vehicle.
const PURCHASE_DEDUCTIBLE_PCT: i64 = 20;
/// Deductible share of the post-VAT base for a rented vehicle.
const RENTAL_DEDUCTIBLE_PCT: i64 = 70;
/// Yearly fringe benefit added back in business mode.
const FRINGE_BENEFIT_PER_YEAR: Amount = Amount::from_decimal(dec!(1500));
/// Cost per km is shown with three decimals.
const PER_KM_DECIMALS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("cost per km unavailable: distance is zero")]
    ZeroDistance,
}

/// Purchase TCO: depreciation plus running costs, net of business tax treatment.
pub fn purchase_tco(state: &FormState) -> Amount {
    let depreciation = state.purchase_price() - state.residual_value();
    let total = depreciation + state.derived().total() + state.fuel();
    if !state.is_business() {
        return total;
    }
    business_net(total, total, PURCHASE_DEDUCTIBLE_PCT, state.duration())
}

/// Rental TCO: fees over the contract plus fuel, net of business tax treatment.
///
/// Only the rental fees enter the VAT and deduction base, fuel does not.
pub fn rental_tco(state: &FormState) -> Amount {
    let rental_total = state.rental_fee().mul_ratio(state.duration().months(), 1);
    let total = rental_total + state.fuel();
    if !state.is_business() {
        return total;
    }
    business_net(total, rental_total, RENTAL_DEDUCTIBLE_PCT, state.duration())
}

/// Rental minus purchase. Negative when renting is cheaper.
pub fn difference(state: &FormState) -> Amount {
    rental_tco(state) - purchase_tco(state)
}

/// `total / km`, rounded once to three decimals.
pub fn cost_per_km(total: Amount, km: Amount) -> Result<Amount, CalcError> {
    total
        .ratio_dp(km, PER_KM_DECIMALS)
        .ok_or(CalcError::ZeroDistance)
}

pub fn cost_per_km_purchase(state: &FormState) -> Result<Amount, CalcError> {
    cost_per_km(purchase_tco(state), state.km())
}

pub fn cost_per_km_rental(state: &FormState) -> Result<Amount, CalcError> {
    cost_per_km(rental_tco(state), state.km())
}

fn business_net(total: Amount, base: Amount, deductible_pct: i64, duration: Duration) -> Amount {
    let vat = base.percent(VAT_PCT);
    let deductible = (base - vat).percent(deductible_pct);
    let fringe = duration.over_contract(FRINGE_BENEFIT_PER_YEAR);
    total - vat - deductible + fringe
}

/// Immutable snapshot of everything the report and the export show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub segment: Segment,
    pub duration: Duration,
    pub km: Amount,
    pub is_business: bool,
    pub purchase: Amount,
    pub rental: Amount,
    pub difference: Amount,
    pub cost_per_km_purchase: Result<Amount, CalcError>,
    pub cost_per_km_rental: Result<Amount, CalcError>,
    /// Segment costs per year.
    pub annual: DerivedCosts,
}

impl Summary {
    pub fn of(state: &FormState) -> Self {
        let purchase = purchase_tco(state);
        let rental = rental_tco(state);
        Self {
            segment: state.segment(),
            duration: state.duration(),
            km: state.km(),
            is_business: state.is_business(),
            purchase,
            rental,
            difference: rental - purchase,
            cost_per_km_purchase: cost_per_km(purchase, state.km()),
            cost_per_km_rental: cost_per_km(rental, state.km()),
            annual: state.derived().per_year(state.duration()),
        }
    }
}
