pub mod amount;
pub mod config;
pub mod csv;
pub mod currency;
pub mod form;
pub mod model;
pub mod report;
pub mod tco;

pub use amount::Amount;
pub use form::{DerivedCosts, FieldError, FormState};
pub use model::{Duration, Field, FieldEdit, Segment, SegmentRates};
pub use tco::{CalcError, Summary};
