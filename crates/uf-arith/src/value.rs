//! The operand type of the arithmetic layer: a plain number or an amount.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use uf_core::{Amount, Dimension, Real, Unit, UnitApply, UnitResult};

use crate::ops;

/// Plain number or unit-tagged amount.
///
/// A plain number behaves as a value of the dimensionless identity unit.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Number(Real),
    Amount(Amount),
}

impl Value {
    pub fn dimension(&self) -> Dimension {
        match self {
            Value::Number(_) => Dimension::DIMENSIONLESS,
            Value::Amount(a) => a.dimension(),
        }
    }

    /// Value in the canonical base unit of its dimension.
    pub fn base_value(&self) -> Real {
        match self {
            Value::Number(n) => *n,
            Value::Amount(a) => a.base_value(),
        }
    }

    pub fn as_number(&self) -> Option<Real> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Amount(_) => None,
        }
    }

    pub fn as_amount(&self) -> Option<&Amount> {
        match self {
            Value::Number(_) => None,
            Value::Amount(a) => Some(a),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Unit of the value; the dimensionless identity for plain numbers.
    pub fn unit(&self) -> Unit {
        match self {
            Value::Number(_) => Unit::dimensionless(),
            Value::Amount(a) => a.unit().clone(),
        }
    }

    /// Express in `target`.
    pub fn extract(&self, target: &Unit) -> UnitResult<Real> {
        match self {
            Value::Number(n) => target.apply_to(&Unit::dimensionless().apply(*n)),
            Value::Amount(a) => a.extract(target),
        }
    }

    /// Collapse a truly dimensionless amount (e.g. `km/m`) to a plain number.
    ///
    /// Pseudo-dimensions such as angles are kept as amounts.
    pub fn simplify(self) -> Value {
        match self {
            Value::Amount(a) if a.dimension().is_dimensionless() && !a.unit().is_affine() => {
                Value::Number(a.base_value())
            }
            other => other,
        }
    }
}

impl From<Real> for Value {
    fn from(n: Real) -> Self {
        Value::Number(n)
    }
}

impl From<Amount> for Value {
    fn from(a: Amount) -> Self {
        Value::Amount(a)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Amount(a) => write!(f, "{a}"),
        }
    }
}

macro_rules! checked_operator {
    ($trait:ident, $method:ident, $op:path) => {
        impl $trait<&Value> for &Value {
            type Output = UnitResult<Value>;

            fn $method(self, rhs: &Value) -> UnitResult<Value> {
                $op(self, rhs)
            }
        }

        impl $trait for Value {
            type Output = UnitResult<Value>;

            fn $method(self, rhs: Value) -> UnitResult<Value> {
                $op(&self, &rhs)
            }
        }
    };
}

checked_operator!(Add, add, ops::add);
checked_operator!(Sub, sub, ops::sub);
checked_operator!(Mul, mul, ops::mul);
checked_operator!(Div, div, ops::div);

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        ops::neg(&self)
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        ops::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kilometer() -> Unit {
        Unit::new(Some("km"), Dimension::LENGTH, 1000.0, 0.0).unwrap()
    }

    fn meter() -> Unit {
        Unit::new(Some("m"), Dimension::LENGTH, 1.0, 0.0).unwrap()
    }

    #[test]
    fn operators_match_named_ops() {
        let a = Value::from(kilometer().apply(1.0));
        let b = Value::from(meter().apply(500.0));
        let sum = (&a + &b).unwrap();
        assert_eq!(sum.as_amount().unwrap().value(), 1.5);
        assert_eq!(sum.unit(), kilometer());

        let product = (Value::Number(2.0) * Value::Number(3.0)).unwrap();
        assert_eq!(product.as_number(), Some(6.0));
    }

    #[test]
    fn simplify_collapses_ratio() {
        let ratio = (Value::from(kilometer().apply(3.0)) / Value::from(meter().apply(1.0)))
            .unwrap();
        assert!(!ratio.is_number());
        assert_eq!(ratio.simplify().as_number(), Some(3000.0));
    }

    #[test]
    fn simplify_keeps_pseudo_dimensions() {
        let rad = Unit::new(Some("rad"), Dimension::PLANE_ANGLE, 1.0, 0.0).unwrap();
        let angle = Value::from(rad.apply(0.5)).simplify();
        assert!(!angle.is_number());
    }

    #[test]
    fn negation_keeps_unit() {
        let v = -Value::from(kilometer().apply(2.0));
        assert_eq!(v.as_amount().unwrap().value(), -2.0);
        assert_eq!((-&Value::Number(1.5)).as_number(), Some(-1.5));
    }

    #[test]
    fn number_extracts_as_dimensionless() {
        assert_eq!(Value::Number(4.0).extract(&Unit::dimensionless()).unwrap(), 4.0);
        assert!(Value::Number(4.0).extract(&meter()).is_err());
    }
}
