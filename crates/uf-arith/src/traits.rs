//! The [`Arithmetic`] seam shared by `f64`, [`Amount`] and [`Value`].
//!
//! Calculus routines are generic over this trait, so every step they take is
//! a checked operation that reports dimension errors instead of panicking.
//!
//! ```
//! use uf_arith::{Arithmetic, Value};
//! use uf_core::{Dimension, Unit, UnitApply, UnitResult};
//!
//! fn midpoint<T: Arithmetic>(a: &T, b: &T) -> UnitResult<T> {
//!     a.try_add(b)?.try_scale(0.5)
//! }
//!
//! assert_eq!(midpoint(&1.0, &3.0).unwrap(), 2.0);
//!
//! let m = Unit::new(Some("m"), Dimension::LENGTH, 1.0, 0.0).unwrap();
//! let s = Unit::new(Some("s"), Dimension::TIME, 1.0, 0.0).unwrap();
//! let mid = midpoint(&Value::from(m.apply(1.0)), &Value::from(m.apply(3.0))).unwrap();
//! assert_eq!(mid.magnitude(), 2.0);
//! assert!(midpoint(&Value::from(m.apply(1.0)), &Value::from(s.apply(3.0))).is_err());
//! ```

use core::cmp::Ordering;

use uf_core::{Amount, Real, UnitResult};

use crate::ops;
use crate::value::Value;

/// Numeric-like operand that generic algorithms (differentiation,
/// quadrature) can be written against.
///
/// Plain `f64` never fails; [`Amount`] and [`Value`] fail on dimension
/// mismatches or affine units.
pub trait Arithmetic: Clone + Sized {
    fn try_add(&self, rhs: &Self) -> UnitResult<Self>;
    fn try_sub(&self, rhs: &Self) -> UnitResult<Self>;
    fn try_mul(&self, rhs: &Self) -> UnitResult<Self>;
    fn try_div(&self, rhs: &Self) -> UnitResult<Self>;

    /// Multiply by a plain number, keeping the unit.
    fn try_scale(&self, k: Real) -> UnitResult<Self>;

    fn try_cmp(&self, rhs: &Self) -> UnitResult<Option<Ordering>>;

    /// Raw numeric value in the operand's own unit.
    fn magnitude(&self) -> Real;

    /// Same unit, new raw value.
    fn with_magnitude(&self, value: Real) -> Self;
}

impl Arithmetic for Real {
    fn try_add(&self, rhs: &Self) -> UnitResult<Self> {
        Ok(self + rhs)
    }

    fn try_sub(&self, rhs: &Self) -> UnitResult<Self> {
        Ok(self - rhs)
    }

    fn try_mul(&self, rhs: &Self) -> UnitResult<Self> {
        Ok(self * rhs)
    }

    fn try_div(&self, rhs: &Self) -> UnitResult<Self> {
        Ok(self / rhs)
    }

    fn try_scale(&self, k: Real) -> UnitResult<Self> {
        Ok(self * k)
    }

    fn try_cmp(&self, rhs: &Self) -> UnitResult<Option<Ordering>> {
        Ok(self.partial_cmp(rhs))
    }

    fn magnitude(&self) -> Real {
        *self
    }

    fn with_magnitude(&self, value: Real) -> Self {
        value
    }
}

impl Arithmetic for Amount {
    fn try_add(&self, rhs: &Self) -> UnitResult<Self> {
        ops::add_amounts(self, rhs)
    }

    fn try_sub(&self, rhs: &Self) -> UnitResult<Self> {
        ops::sub_amounts(self, rhs)
    }

    fn try_mul(&self, rhs: &Self) -> UnitResult<Self> {
        ops::mul_amounts(self, rhs)
    }

    fn try_div(&self, rhs: &Self) -> UnitResult<Self> {
        ops::div_amounts(self, rhs)
    }

    fn try_scale(&self, k: Real) -> UnitResult<Self> {
        ops::scale_amount(self, k)
    }

    fn try_cmp(&self, rhs: &Self) -> UnitResult<Option<Ordering>> {
        Amount::try_cmp(self, rhs)
    }

    fn magnitude(&self) -> Real {
        self.value()
    }

    fn with_magnitude(&self, value: Real) -> Self {
        self.with_value(value)
    }
}

impl Arithmetic for Value {
    fn try_add(&self, rhs: &Self) -> UnitResult<Self> {
        ops::add(self, rhs)
    }

    fn try_sub(&self, rhs: &Self) -> UnitResult<Self> {
        ops::sub(self, rhs)
    }

    fn try_mul(&self, rhs: &Self) -> UnitResult<Self> {
        ops::mul(self, rhs)
    }

    fn try_div(&self, rhs: &Self) -> UnitResult<Self> {
        ops::div(self, rhs)
    }

    fn try_scale(&self, k: Real) -> UnitResult<Self> {
        ops::mul(self, &Value::Number(k))
    }

    fn try_cmp(&self, rhs: &Self) -> UnitResult<Option<Ordering>> {
        ops::compare(self, rhs)
    }

    fn magnitude(&self) -> Real {
        match self {
            Value::Number(n) => *n,
            Value::Amount(a) => a.value(),
        }
    }

    fn with_magnitude(&self, value: Real) -> Self {
        match self {
            Value::Number(_) => Value::Number(value),
            Value::Amount(a) => Value::Amount(a.with_value(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uf_core::{Dimension, Unit, UnitApply, UnitError};

    fn sum_all<T: Arithmetic>(items: &[T]) -> UnitResult<T> {
        let (first, rest) = items.split_first().ok_or(UnitError::InvalidArg {
            what: "empty slice",
        })?;
        rest.iter().try_fold(first.clone(), |acc, x| acc.try_add(x))
    }

    #[test]
    fn same_generic_code_for_numbers_and_amounts() {
        assert_eq!(sum_all(&[1.0, 2.0, 3.5]).unwrap(), 6.5);

        let km = Unit::new(Some("km"), Dimension::LENGTH, 1000.0, 0.0).unwrap();
        let m = Unit::new(Some("m"), Dimension::LENGTH, 1.0, 0.0).unwrap();
        let total = sum_all(&[km.apply(1.0), m.apply(500.0)]).unwrap();
        assert_eq!(total.value(), 1.5);
        assert_eq!(total.unit(), &km);
    }

    #[test]
    fn amount_scale_rejects_affine() {
        let c = Unit::new(Some("degC"), Dimension::TEMPERATURE, 1.0, 273.15).unwrap();
        assert!(c.apply(1.0).try_scale(2.0).is_err());
    }

    #[test]
    fn magnitude_round_trips_unit() {
        let s = Unit::new(Some("s"), Dimension::TIME, 1.0, 0.0).unwrap();
        let v = Value::from(s.apply(2.0));
        let w = v.with_magnitude(7.0);
        assert_eq!(w.magnitude(), 7.0);
        assert_eq!(w.unit(), s);
        assert_eq!(Value::Number(3.0).with_magnitude(4.0).as_number(), Some(4.0));
    }

    #[test]
    fn value_cmp_checks_dimensions() {
        let s = Unit::new(Some("s"), Dimension::TIME, 1.0, 0.0).unwrap();
        let a = Value::from(s.apply(2.0));
        assert_eq!(
            a.try_cmp(&Value::from(s.apply(1.0))).unwrap(),
            Some(Ordering::Greater)
        );
        assert!(a.try_cmp(&Value::Number(1.0)).is_err());
    }
}
