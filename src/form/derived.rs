use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::Amount;
use crate::model::{Duration, Segment};

/// Distance the segment tire rate is quoted for.
const TIRE_RATE_DISTANCE_KM: Decimal = dec!(30000);

/// Costs the form derives from segment, duration and distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedCosts {
    pub tax: Amount,
    pub insurance: Amount,
    pub maintenance: Amount,
    pub tires: Amount,
}

impl DerivedCosts {
    pub fn compute(segment: Segment, duration: Duration, km: Amount) -> Self {
        let rates = segment.rates();
        Self {
            tax: duration.over_contract(rates.tax),
            insurance: duration.over_contract(rates.insurance),
            maintenance: duration.over_contract(rates.maintenance),
            tires: Amount::from_decimal(
                rates.tires.decimal() * km.decimal() / TIRE_RATE_DISTANCE_KM,
            ),
        }
    }

    pub fn total(&self) -> Amount {
        self.tax + self.insurance + self.maintenance + self.tires
    }

    /// Per-year view of the contract totals, as shown in the segment breakdown.
    pub fn per_year(&self, duration: Duration) -> Self {
        Self {
            tax: duration.per_year(self.tax),
            insurance: duration.per_year(self.insurance),
            maintenance: duration.per_year(self.maintenance),
            tires: duration.per_year(self.tires),
        }
    }
}
