use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal quantity used for every currency amount and for distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub const fn from_decimal(value: Decimal) -> Self {
        Amount(value)
    }

    /// Whole units (euros, kilometres).
    pub fn from_units(value: i64) -> Self {
        Amount(Decimal::from(value))
    }

    pub fn decimal(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by `num / den`. `den` must not be zero.
    pub fn mul_ratio(self, num: i64, den: i64) -> Self {
        Amount(self.0 * Decimal::from(num) / Decimal::from(den))
    }

    /// Multiply by a whole percentage (`40` is 40%).
    pub fn percent(self, pct: i64) -> Self {
        self.mul_ratio(pct, 100)
    }

    /// `self / other` rounded once to `dp` decimals, half away from zero.
    ///
    /// `None` when `other` is zero.
    pub fn ratio_dp(self, other: Amount, dp: u32) -> Option<Amount> {
        self.0
            .checked_div(other.0)
            .map(|quotient| Amount(round_half_up(quotient, dp)))
    }

    /// Round to `dp` decimal places, half away from zero.
    pub fn round_dp(self, dp: u32) -> Self {
        Amount(round_half_up(self.0, dp))
    }

    /// Plain `-1234.567` style rendering with exactly `dp` decimals.
    pub fn to_fixed(self, dp: u32) -> String {
        let mut rounded = round_half_up(self.0, dp);
        if rounded.is_zero() {
            // no "-0.00"
            rounded = Decimal::ZERO;
        }
        format!("{rounded:.prec$}", prec = dp as usize)
    }
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Amount(-self.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, amount| acc + amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn from_units() {
        assert_eq!(Amount::from_units(250), Amount::from_decimal(dec!(250)));
        assert_eq!(Amount::from_units(-3).decimal(), dec!(-3));
    }

    #[test]
    fn display_drops_trailing_zeros() {
        assert_eq!(Amount::from_decimal(dec!(100.00)).to_string(), "100");
        assert_eq!(Amount::from_decimal(dec!(-50.250)).to_string(), "-50.25");
    }

    #[test]
    fn mul_ratio_exact() {
        // 250 a year over 36 months
        assert_eq!(Amount::from_units(250).mul_ratio(36, 12), Amount::from_units(750));
        assert_eq!(Amount::from_units(24_950).percent(40), Amount::from_units(9_980));
    }

    #[test]
    fn ratio_dp_rounds_the_exact_quotient_once() {
        // 24350.26 / 26 = 936.54846..
        let total = Amount::from_decimal(dec!(24350.26));
        let per_km = total.ratio_dp(Amount::from_units(26), 3).unwrap();
        assert_eq!(per_km.to_fixed(3), "936.548");

        // 19400 / 80000 = 0.2425, a midpoint at 3 decimals
        let per_km = Amount::from_units(19_400).ratio_dp(Amount::from_units(80_000), 3);
        assert_eq!(per_km, Some(Amount::from_decimal(dec!(0.243))));
    }

    #[test]
    fn ratio_dp_guards_zero() {
        assert_eq!(Amount::from_units(1).ratio_dp(Amount::ZERO, 3), None);
    }

    #[test]
    fn round_dp() {
        let round = |v: Decimal, dp| Amount::from_decimal(v).round_dp(dp).decimal();
        assert_eq!(round(dec!(0.4158), 3), dec!(0.416));
        assert_eq!(round(dec!(1.2345), 2), dec!(1.23));
        assert_eq!(round(dec!(1.235), 2), dec!(1.24));
        assert_eq!(round(dec!(-1.235), 2), dec!(-1.24));
    }

    #[test]
    fn to_fixed() {
        assert_eq!(Amount::from_decimal(dec!(0.4158)).to_fixed(3), "0.416");
        assert_eq!(Amount::from_units(-5_550).to_fixed(2), "-5550.00");
        assert_eq!(Amount::from_decimal(dec!(1.5)).to_fixed(0), "2");
        assert_eq!(Amount::from_decimal(dec!(-0.0001)).to_fixed(2), "0.00");
    }

    #[test]
    fn arithmetic() {
        let mut a = Amount::from_units(100);
        a += Amount::from_units(50);
        assert_eq!(a, Amount::from_units(150));
        a -= Amount::from_units(30);
        assert_eq!(a, Amount::from_units(120));
        assert_eq!(a - Amount::from_units(200), Amount::from_units(-80));
        assert_eq!(-a, Amount::from_units(-120));
        let total: Amount = [a, a].into_iter().sum();
        assert_eq!(total, Amount::from_units(240));
    }

    #[test]
    fn ordering_ignores_scale() {
        assert_eq!(Amount::from_decimal(dec!(1.50)), Amount::from_decimal(dec!(1.5)));
        assert!(Amount::from_units(-100) < Amount::ZERO);
    }
}
