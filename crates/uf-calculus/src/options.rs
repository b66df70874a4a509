//! Step and tolerance settings for the calculus combinators.

use uf_core::Real;

/// Finite-difference stencil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stencil {
    /// `(f(x+h) - f(x-h)) / 2h`
    #[default]
    Central,
    /// Fourth-order five-point stencil.
    FivePoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffOptions {
    /// Step relative to `max(|x|, 1)` when no explicit step is given
    pub rel_step: Real,
    pub stencil: Stencil,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            rel_step: 1e-5,
            stencil: Stencil::Central,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpsonOptions {
    /// Number of subintervals (positive, even)
    pub intervals: usize,
}

impl Default for SimpsonOptions {
    fn default() -> Self {
        Self { intervals: 100 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveOptions {
    /// Tolerance relative to the estimate after the forced bisections
    pub rel_tol: Real,
    /// Absolute floor for the tolerance, in the result's unit
    pub abs_tol: Real,
    /// Bisections applied before any panel may be accepted
    pub min_depth: u32,
    /// Maximum bisection depth
    pub max_depth: u32,
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self {
            rel_tol: 1e-10,
            abs_tol: 1e-12,
            min_depth: 2,
            max_depth: 16,
        }
    }
}
