//! uf-core: unit algebra for unitflow.
//!
//! Contains:
//! - dimension (rational exponent vectors, pseudo-axes)
//! - unit (affine units and their composition rules)
//! - label (composed unit names with collapsing factors)
//! - amount (value + unit, conversion, checked comparison)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error type)

pub mod amount;
pub mod dimension;
pub mod error;
mod label;
pub mod numeric;
pub mod unit;

pub use amount::{Amount, UnitApply};
pub use dimension::{AXIS_COUNT, Axis, Dimension, Exponent};
pub use error::{UnitError, UnitResult};
pub use numeric::*;
pub use unit::{BaseUnit, DIMENSIONLESS_NAME, Unit};
