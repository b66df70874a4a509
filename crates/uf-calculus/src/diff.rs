//! Finite-difference derivatives over any [`Arithmetic`] operand.
//!
//! Every step goes through the checked operators, so the result carries
//! `unit(f) / unit(x)` and dimension errors from `f` propagate unchanged.

use tracing::trace;
use uf_arith::Arithmetic;
use uf_core::{UnitError, UnitResult};

use crate::options::{DiffOptions, Stencil};

/// Derivative of `f` at `x` with the default options.
///
/// `step` is expressed in `x`'s unit (or any compatible one). When `None`,
/// the step is `rel_step * max(|x|, 1)` in `x`'s own unit.
pub fn differentiate<T, F>(f: F, x: &T, step: Option<T>) -> UnitResult<T>
where
    T: Arithmetic,
    F: Fn(&T) -> UnitResult<T>,
{
    differentiate_with(f, x, step, DiffOptions::default())
}

pub fn differentiate_with<T, F>(f: F, x: &T, step: Option<T>, opts: DiffOptions) -> UnitResult<T>
where
    T: Arithmetic,
    F: Fn(&T) -> UnitResult<T>,
{
    let h = match step {
        Some(h) => h,
        None => default_step(x, opts.rel_step)?,
    };
    if h.magnitude() == 0.0 {
        return Err(UnitError::InvalidArg {
            what: "differentiation step must be non-zero",
        });
    }
    trace!(step = h.magnitude(), stencil = ?opts.stencil, "differentiate");

    match opts.stencil {
        Stencil::Central => central(&f, x, &h),
        Stencil::FivePoint => five_point(&f, x, &h),
    }
}

fn default_step<T: Arithmetic>(x: &T, rel_step: f64) -> UnitResult<T> {
    if !(rel_step.is_finite() && rel_step > 0.0) {
        return Err(UnitError::InvalidArg {
            what: "rel_step must be positive and finite",
        });
    }
    Ok(x.with_magnitude(rel_step * x.magnitude().abs().max(1.0)))
}

fn central<T, F>(f: &F, x: &T, h: &T) -> UnitResult<T>
where
    T: Arithmetic,
    F: Fn(&T) -> UnitResult<T>,
{
    let forward = f(&x.try_add(h)?)?;
    let backward = f(&x.try_sub(h)?)?;
    let two_h = h.try_add(h)?;
    forward.try_sub(&backward)?.try_div(&two_h)
}

// (f(x-2h) - f(x+2h) + 8 (f(x+h) - f(x-h))) / 12h
fn five_point<T, F>(f: &F, x: &T, h: &T) -> UnitResult<T>
where
    T: Arithmetic,
    F: Fn(&T) -> UnitResult<T>,
{
    let two_h = h.try_scale(2.0)?;
    let f_p1 = f(&x.try_add(h)?)?;
    let f_m1 = f(&x.try_sub(h)?)?;
    let f_p2 = f(&x.try_add(&two_h)?)?;
    let f_m2 = f(&x.try_sub(&two_h)?)?;

    let outer = f_m2.try_sub(&f_p2)?;
    let inner = f_p1.try_sub(&f_m1)?.try_scale(8.0)?;
    outer.try_add(&inner)?.try_div(&h.try_scale(12.0)?)
}
