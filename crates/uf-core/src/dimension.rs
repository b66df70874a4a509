//! Exponent-vector dimension algebra.
//!
//! A [`Dimension`] stores one exact rational exponent per [`Axis`]. Exponents
//! are `Ratio<i32>` so that equality is decidable: `L^(1/2) * L^(1/2)` is
//! exactly `L`, never `L^0.9999999`.
//!
//! Angle, solid angle, redshift and probability are *pseudo-axes*. They are
//! physically dimensionless but carry their own exponent so that a radian, a
//! redshift and a probability never convert into each other or into a plain
//! number.

use core::fmt;
use core::ops::{Add, Neg, Sub};
use num_rational::Ratio;

/// Exact rational exponent.
pub type Exponent = Ratio<i32>;

const ZERO: Exponent = Ratio::new_raw(0, 1);
const ONE: Exponent = Ratio::new_raw(1, 1);

/// Number of recognized axes.
pub const AXIS_COUNT: usize = 9;

/// Base axis of the exponent vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Length,
    Time,
    Mass,
    Charge,
    Temperature,
    PlaneAngle,
    SolidAngle,
    Redshift,
    Probability,
}

impl Axis {
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::Length,
        Axis::Time,
        Axis::Mass,
        Axis::Charge,
        Axis::Temperature,
        Axis::PlaneAngle,
        Axis::SolidAngle,
        Axis::Redshift,
        Axis::Probability,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dimensionless-looking axes that must stay distinct from plain numbers.
    pub const fn is_pseudo(self) -> bool {
        matches!(
            self,
            Axis::PlaneAngle | Axis::SolidAngle | Axis::Redshift | Axis::Probability
        )
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Axis::Length => "L",
            Axis::Time => "T",
            Axis::Mass => "M",
            Axis::Charge => "Q",
            Axis::Temperature => "Θ",
            Axis::PlaneAngle => "A",
            Axis::SolidAngle => "Ω",
            Axis::Redshift => "Z",
            Axis::Probability => "P",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Exponent vector over [`Axis::ALL`].
///
/// Exponents are always reduced with a positive denominator, so derived
/// equality is exact. Deserialized exponents are normalized the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DimensionRepr")
)]
pub struct Dimension {
    exps: [Exponent; AXIS_COUNT],
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DimensionRepr {
    exps: [Exponent; AXIS_COUNT],
}

#[cfg(feature = "serde")]
impl TryFrom<DimensionRepr> for Dimension {
    type Error = crate::error::UnitError;

    fn try_from(repr: DimensionRepr) -> Result<Self, Self::Error> {
        let mut exps = [ZERO; AXIS_COUNT];
        for (out, e) in exps.iter_mut().zip(repr.exps.iter()) {
            // Ratio::new reduces and moves the sign to the numerator
            let wide = Ratio::new(i64::from(*e.numer()), i64::from(*e.denom()));
            *out = narrow(wide).ok_or(crate::error::UnitError::InvalidArg {
                what: "dimension exponent out of range",
            })?;
        }
        Ok(Dimension { exps })
    }
}

impl Dimension {
    pub const DIMENSIONLESS: Self = Self {
        exps: [ZERO; AXIS_COUNT],
    };

    pub const LENGTH: Self = Self::axis(Axis::Length);
    pub const TIME: Self = Self::axis(Axis::Time);
    pub const MASS: Self = Self::axis(Axis::Mass);
    pub const CHARGE: Self = Self::axis(Axis::Charge);
    pub const TEMPERATURE: Self = Self::axis(Axis::Temperature);
    pub const PLANE_ANGLE: Self = Self::axis(Axis::PlaneAngle);
    pub const SOLID_ANGLE: Self = Self::axis(Axis::SolidAngle);
    pub const REDSHIFT: Self = Self::axis(Axis::Redshift);
    pub const PROBABILITY: Self = Self::axis(Axis::Probability);

    /// A single axis to the first power.
    pub const fn axis(axis: Axis) -> Self {
        let mut exps = [ZERO; AXIS_COUNT];
        exps[axis.index()] = ONE;
        Self { exps }
    }

    /// Build from integer exponents in [`Axis::ALL`] order.
    pub fn from_integers(exps: [i32; AXIS_COUNT]) -> Self {
        Self {
            exps: exps.map(Exponent::from_integer),
        }
    }

    /// Build from `(axis, exponent)` pairs; repeated axes accumulate.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Axis, Exponent)>,
    {
        let mut dim = Self::DIMENSIONLESS;
        for (axis, e) in pairs {
            dim.exps[axis.index()] += e;
        }
        dim
    }

    #[inline]
    pub fn exponent(&self, axis: Axis) -> Exponent {
        self.exps[axis.index()]
    }

    pub fn exponents(&self) -> &[Exponent; AXIS_COUNT] {
        &self.exps
    }

    /// Reciprocal.
    pub fn negate(&self) -> Dimension {
        Dimension {
            exps: self.exps.map(|e| -e),
        }
    }

    /// Raise to an exact rational power.
    ///
    /// Panics when an exponent leaves `i32` range; see [`Self::checked_scale`].
    pub fn scale(&self, k: Exponent) -> Dimension {
        Dimension {
            exps: self.exps.map(|e| e * k),
        }
    }

    /// [`Self::scale`] that returns `None` instead of overflowing.
    pub fn checked_scale(&self, k: Exponent) -> Option<Dimension> {
        let mut exps = [ZERO; AXIS_COUNT];
        for (out, e) in exps.iter_mut().zip(self.exps.iter()) {
            *out = checked_mul(*e, k)?;
        }
        Some(Dimension { exps })
    }

    /// Componentwise sum that returns `None` instead of overflowing.
    pub fn checked_add(&self, rhs: &Dimension) -> Option<Dimension> {
        let mut exps = [ZERO; AXIS_COUNT];
        for ((out, e), o) in exps.iter_mut().zip(self.exps.iter()).zip(rhs.exps.iter()) {
            *out = checked_sum(*e, *o)?;
        }
        Some(Dimension { exps })
    }

    pub fn checked_sub(&self, rhs: &Dimension) -> Option<Dimension> {
        self.checked_add(&rhs.checked_neg()?)
    }

    fn checked_neg(&self) -> Option<Dimension> {
        let mut exps = [ZERO; AXIS_COUNT];
        for (out, e) in exps.iter_mut().zip(self.exps.iter()) {
            *out = Exponent::new_raw(e.numer().checked_neg()?, *e.denom());
        }
        Some(Dimension { exps })
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exps.iter().all(|e| *e == ZERO)
    }

    /// The axis when this is exactly one axis to the first power.
    ///
    /// Only such dimensions may carry an affine offset.
    pub fn single_axis(&self) -> Option<Axis> {
        let mut found = None;
        for axis in Axis::ALL {
            let e = self.exps[axis.index()];
            if e == ZERO {
                continue;
            }
            if e != ONE || found.is_some() {
                return None;
            }
            found = Some(axis);
        }
        found
    }

    /// True when any pseudo-axis has a non-zero exponent.
    pub fn has_pseudo(&self) -> bool {
        Axis::ALL
            .iter()
            .any(|a| a.is_pseudo() && self.exps[a.index()] != ZERO)
    }
}

// Products of two i32 terms always fit in i64; the reduced result is then
// narrowed back or rejected. i32::MIN is rejected too so that every checked
// exponent can be negated.
fn widen(e: Exponent) -> Ratio<i64> {
    Ratio::new_raw(i64::from(*e.numer()), i64::from(*e.denom()))
}

fn narrow(r: Ratio<i64>) -> Option<Exponent> {
    let numer = i32::try_from(*r.numer()).ok().filter(|n| *n != i32::MIN)?;
    let denom = i32::try_from(*r.denom()).ok()?;
    Some(Exponent::new_raw(numer, denom))
}

pub(crate) fn checked_sum(a: Exponent, b: Exponent) -> Option<Exponent> {
    narrow(widen(a) + widen(b))
}

pub(crate) fn checked_mul(a: Exponent, b: Exponent) -> Option<Exponent> {
    narrow(widen(a) * widen(b))
}

/// Componentwise sum (product of units). Panics on exponent overflow.
impl Add for Dimension {
    type Output = Dimension;

    fn add(self, rhs: Dimension) -> Dimension {
        let mut exps = self.exps;
        for (e, o) in exps.iter_mut().zip(rhs.exps.iter()) {
            *e += *o;
        }
        Dimension { exps }
    }
}

/// Componentwise difference (quotient of units).
impl Sub for Dimension {
    type Output = Dimension;

    fn sub(self, rhs: Dimension) -> Dimension {
        self + rhs.negate()
    }
}

impl Neg for Dimension {
    type Output = Dimension;

    fn neg(self) -> Dimension {
        self.negate()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for axis in Axis::ALL {
            let e = self.exps[axis.index()];
            if e == ZERO {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if e == ONE {
                write!(f, "{axis}")?;
            } else {
                write!(f, "{axis}^{e}")?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}
