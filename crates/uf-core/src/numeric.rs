//! Float type and tolerance helpers shared by conversion and comparison.

use crate::UnitError;

pub type Real = f64;

/// Absolute/relative tolerance pair.
///
/// Two values agree when their difference is within `abs`, or within `rel`
/// times the larger magnitude. Scales span from `1e-24` (yocto) to parsecs,
/// so the relative part carries most comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(1e-12, 1e-9)
    }
}

impl Tolerances {
    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }

    /// Bit-for-bit agreement only.
    pub const EXACT: Tolerances = Tolerances::new(0.0, 0.0);

    pub fn agree(&self, a: Real, b: Real) -> bool {
        // also covers equal infinities, whose difference is NaN
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    tol.agree(a, b)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, UnitError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(UnitError::NonFinite { what, value: v })
    }
}

/// Finite and non-zero; `what` names the rejected quantity.
pub fn ensure_nonzero(v: Real, what: &'static str) -> Result<Real, UnitError> {
    let v = ensure_finite(v, what)?;
    if v == 0.0 {
        return Err(UnitError::InvalidArg { what });
    }
    Ok(v)
}
