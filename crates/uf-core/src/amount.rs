//! Amounts: a raw value tagged with the unit it is expressed in.

use core::cmp::Ordering;
use core::fmt;

use crate::dimension::Dimension;
use crate::error::UnitResult;
use crate::numeric::{Real, Tolerances, nearly_equal};
use crate::unit::Unit;

/// A unit used as a value constructor and as a conversion extractor.
pub trait UnitApply {
    /// Tag `value` with this unit. No conversion is performed.
    fn apply(&self, value: Real) -> Amount;

    /// Read `amount` expressed in this unit.
    fn apply_to(&self, amount: &Amount) -> UnitResult<Real>;
}

impl UnitApply for Unit {
    fn apply(&self, value: Real) -> Amount {
        Amount::new(self.clone(), value)
    }

    fn apply_to(&self, amount: &Amount) -> UnitResult<Real> {
        amount.extract(self)
    }
}

/// Immutable `(value, unit)` pair.
///
/// There is no `PartialEq`: equality needs a conversion and fails across
/// dimensions, see [`Amount::try_eq`] and [`Amount::approx_eq`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amount {
    value: Real,
    unit: Unit,
}

impl Amount {
    pub fn new(unit: Unit, value: Real) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub fn value(&self) -> Real {
        self.value
    }

    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Value in the canonical base unit of the dimension.
    #[inline]
    pub fn base_value(&self) -> Real {
        self.unit.to_base(self.value)
    }

    /// Same unit, different value.
    pub fn with_value(&self, value: Real) -> Self {
        Self {
            value,
            unit: self.unit.clone(),
        }
    }

    pub fn into_parts(self) -> (Real, Unit) {
        (self.value, self.unit)
    }

    /// Value expressed in `target`.
    pub fn extract(&self, target: &Unit) -> UnitResult<Real> {
        self.unit.ensure_compatible(target, "extract")?;
        Ok(target.from_base_value(self.base_value()))
    }

    pub fn convert(&self, target: &Unit) -> UnitResult<Amount> {
        Ok(Amount::new(target.clone(), self.extract(target)?))
    }

    /// Order by base value. `None` only for NaN values.
    pub fn try_cmp(&self, other: &Amount) -> UnitResult<Option<Ordering>> {
        self.unit.ensure_compatible(&other.unit, "compare")?;
        Ok(self.base_value().partial_cmp(&other.base_value()))
    }

    /// Exact equality of base values.
    pub fn try_eq(&self, other: &Amount) -> UnitResult<bool> {
        self.unit.ensure_compatible(&other.unit, "compare")?;
        Ok(self.base_value() == other.base_value())
    }

    /// Equality of base values within `tol`.
    pub fn approx_eq(&self, other: &Amount, tol: Tolerances) -> UnitResult<bool> {
        self.unit.ensure_compatible(&other.unit, "compare")?;
        Ok(nearly_equal(self.base_value(), other.base_value(), tol))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.label())
    }
}
