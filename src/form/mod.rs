//! Form state model.
//!
//! Holds every input of the comparator together with the costs derived from
//! the segment table. Edits go through [`FormState::update_field`], which
//! validates the raw value, keeps the previous value on rejection, and
//! recomputes the derived costs whenever segment, duration or distance change.
//! Also supports an async stream of edits.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::Amount;
use crate::model::{Duration, Field, FieldEdit, Segment};

mod derived;
pub use derived::DerivedCosts;

mod error;
pub use error::FieldError;

/// Largest amount or distance the form accepts.
pub const MAX_INPUT: Decimal = dec!(1000000000000);

/// The state of one comparison form.
///
/// Derived costs are private and only written by [`FormState::recompute_derived`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    duration: Duration,
    km: Amount,
    purchase_price: Amount,
    residual_value: Amount,
    rental_fee: Amount,
    fuel: Amount,
    segment: Segment,
    is_business: bool,
    derived: DerivedCosts,
}

/// Public API
impl FormState {
    pub fn new() -> Self {
        let mut state = Self {
            duration: Duration::Months36,
            km: Amount::from_units(60_000),
            purchase_price: Amount::from_units(30_000),
            residual_value: Amount::from_units(15_000),
            rental_fee: Amount::from_units(400),
            fuel: Amount::from_units(5_000),
            segment: Segment::Generalista,
            is_business: false,
            derived: DerivedCosts::default(),
        };
        state.recompute_derived();
        state
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn km(&self) -> Amount {
        self.km
    }

    pub fn purchase_price(&self) -> Amount {
        self.purchase_price
    }

    pub fn residual_value(&self) -> Amount {
        self.residual_value
    }

    /// Monthly rental payment.
    pub fn rental_fee(&self) -> Amount {
        self.rental_fee
    }

    /// Fuel or energy cost over the whole contract.
    pub fn fuel(&self) -> Amount {
        self.fuel
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn is_business(&self) -> bool {
        self.is_business
    }

    pub fn derived(&self) -> &DerivedCosts {
        &self.derived
    }

    /// Update a field by its form name, returning which field changed.
    pub fn update_field(&mut self, name: &str, raw: &str) -> Result<Field, FieldError> {
        let field: Field = name.parse()?;
        self.set(field, raw)?;
        Ok(field)
    }

    /// Parse `raw` for `field` and apply it. Nothing changes on error.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), FieldError> {
        match field {
            Field::Duration => self.duration = parse_duration(raw)?,
            Field::Km => self.km = parse_non_negative(field, raw)?,
            Field::PurchasePrice => self.purchase_price = parse_non_negative(field, raw)?,
            Field::ResidualValue => self.residual_value = parse_non_negative(field, raw)?,
            Field::RentalFee => self.rental_fee = parse_non_negative(field, raw)?,
            Field::Fuel => self.fuel = parse_non_negative(field, raw)?,
            Field::Segment => self.segment = raw.parse()?,
            Field::IsBusiness => self.is_business = parse_bool(raw)?,
            Field::Tax | Field::Insurance | Field::Maintenance | Field::Tires => {
                return Err(FieldError::Derived(field));
            }
        }

        if field.affects_derived() {
            self.recompute_derived();
        }
        Ok(())
    }

    /// Recompute tax, insurance, maintenance and tires from the segment table.
    pub fn recompute_derived(&mut self) {
        self.derived = DerivedCosts::compute(self.segment, self.duration, self.km);
    }

    /// Apply a single edit, logging the outcome.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<Field, FieldError> {
        let result = self.update_field(&edit.field, &edit.value);
        match &result {
            Ok(field) => {
                info!(field = %field, value = %edit.value, "edit applied");
            }
            Err(e) => {
                warn!(field = %edit.field, value = %edit.value, reason = %e, "edit rejected");
            }
        }
        result
    }

    /// Run the form with the given edit stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = FieldEdit> + Unpin) {
        while let Some(edit) = stream.next().await {
            // a rejected edit keeps the previous value, the session goes on
            let _ = self.apply(edit);
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_number(field: Field, raw: &str) -> Result<Decimal, FieldError> {
    let trimmed = raw.trim();
    match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(value) => Ok(value),
        Err(_) => match trimmed.parse::<f64>() {
            // a well-formed number a decimal cannot hold
            Ok(value) if value.is_finite() && value.abs() >= 1.0 => Err(FieldError::TooLarge {
                field,
                value: trimmed.to_string(),
            }),
            _ => Err(FieldError::InvalidNumber {
                field,
                value: raw.to_string(),
            }),
        },
    }
}

fn parse_non_negative(field: Field, raw: &str) -> Result<Amount, FieldError> {
    let value = parse_number(field, raw)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(FieldError::Negative {
            field,
            value: raw.trim().to_string(),
        });
    }
    if value > MAX_INPUT {
        return Err(FieldError::TooLarge {
            field,
            value: raw.trim().to_string(),
        });
    }
    Ok(Amount::from_decimal(value.abs()))
}

fn parse_duration(raw: &str) -> Result<Duration, FieldError> {
    let invalid = || FieldError::InvalidDuration(raw.to_string());
    let months = parse_number(Field::Duration, raw).map_err(|_| invalid())?;
    if !months.fract().is_zero() {
        return Err(invalid());
    }
    months
        .to_i64()
        .and_then(Duration::from_months)
        .ok_or_else(invalid)
}

fn parse_bool(raw: &str) -> Result<bool, FieldError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(FieldError::InvalidBoolean(raw.to_string())),
    }
}
