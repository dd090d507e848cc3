//! Core domain types for the TCO comparator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Amount;
use crate::form::FieldError;

/// Vehicle class tier, selecting the annual cost rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Segment {
    #[default]
    Generalista,
    Premium,
    Luxury,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Generalista, Segment::Premium, Segment::Luxury];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generalista => "GENERALISTA",
            Self::Premium => "PREMIUM",
            Self::Luxury => "LUXURY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|segment| segment.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Annual base rates for this segment.
    pub fn rates(&self) -> SegmentRates {
        match self {
            Self::Generalista => SegmentRates::per_year(250, 700, 500, 300),
            Self::Premium => SegmentRates::per_year(450, 1100, 800, 500),
            Self::Luxury => SegmentRates::per_year(1200, 2500, 2000, 1200),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Segment {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FieldError::InvalidSegment(s.to_string()))
    }
}

/// Annual base costs of a segment. Tires are quoted per 30 000 km instead of per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRates {
    pub tax: Amount,
    pub insurance: Amount,
    pub maintenance: Amount,
    pub tires: Amount,
}

impl SegmentRates {
    fn per_year(tax: i64, insurance: i64, maintenance: i64, tires: i64) -> Self {
        Self {
            tax: Amount::from_units(tax),
            insurance: Amount::from_units(insurance),
            maintenance: Amount::from_units(maintenance),
            tires: Amount::from_units(tires),
        }
    }
}

/// Contract length. Only the four lengths offered by the form are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Duration {
    Months24,
    #[default]
    Months36,
    Months48,
    Months60,
}

impl Duration {
    pub const ALL: [Duration; 4] = [
        Duration::Months24,
        Duration::Months36,
        Duration::Months48,
        Duration::Months60,
    ];

    pub fn months(&self) -> i64 {
        match self {
            Self::Months24 => 24,
            Self::Months36 => 36,
            Self::Months48 => 48,
            Self::Months60 => 60,
        }
    }

    pub fn from_months(months: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.months() == months)
    }

    /// Scale an annual amount to the whole contract (`amount * months / 12`).
    pub fn over_contract(&self, annual: Amount) -> Amount {
        annual.mul_ratio(self.months(), 12)
    }

    /// Inverse of [`Duration::over_contract`].
    pub fn per_year(&self, total: Amount) -> Amount {
        total.mul_ratio(12, self.months())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.months())
    }
}

/// Every field of the form, editable or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Duration,
    Km,
    PurchasePrice,
    ResidualValue,
    RentalFee,
    Fuel,
    Segment,
    IsBusiness,
    Tax,
    Insurance,
    Maintenance,
    Tires,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Duration,
        Field::Km,
        Field::PurchasePrice,
        Field::ResidualValue,
        Field::RentalFee,
        Field::Fuel,
        Field::Segment,
        Field::IsBusiness,
        Field::Tax,
        Field::Insurance,
        Field::Maintenance,
        Field::Tires,
    ];

    /// Name used by the form (camelCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Km => "km",
            Self::PurchasePrice => "purchasePrice",
            Self::ResidualValue => "residualValue",
            Self::RentalFee => "rentalFee",
            Self::Fuel => "fuel",
            Self::Segment => "segment",
            Self::IsBusiness => "isBusiness",
            Self::Tax => "tax",
            Self::Insurance => "insurance",
            Self::Maintenance => "maintenance",
            Self::Tires => "tires",
        }
    }

    /// Accepts the form name or its snake_case spelling.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted: String = s.trim().chars().filter(|c| *c != '_').collect();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(&wanted))
    }

    /// Computed from the segment table, never set directly.
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            Self::Tax | Self::Insurance | Self::Maintenance | Self::Tires
        )
    }

    /// Whether editing this field invalidates the derived costs.
    pub fn affects_derived(&self) -> bool {
        matches!(self, Self::Segment | Self::Duration | Self::Km)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// A single edit of the form, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: String,
    pub value: String,
}

impl FieldEdit {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}
