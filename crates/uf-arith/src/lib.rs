//! uf-arith: dimension-aware arithmetic for unitflow.
//!
//! Provides:
//! - `Value`, a plain number or an amount, with checked operators
//! - named operations (`add`, `mul`, `lt`, `expt`, ...) returning `UnitResult`
//! - the `Arithmetic` trait shared by `f64`, `Amount` and `Value`
//!
//! Plain numbers pass through unchanged: `2 * 3` is still `6`.

pub mod ops;
pub mod traits;
pub mod value;

pub use ops::{
    MAX_EXPONENT_DENOMINATOR, add, compare, div, eq, expt, expt_rational, exponent_from_real, ge,
    gt, le, lt, mul, ne, neg, sub,
};
pub use traits::Arithmetic;
pub use value::Value;
