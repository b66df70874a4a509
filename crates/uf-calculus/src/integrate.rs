//! Simpson quadrature over any [`Arithmetic`] operand.
//!
//! The bounds must share a dimension; the result carries `unit(f) * unit(x)`.

use core::cmp::Ordering;

use tracing::{debug, trace};
use uf_arith::Arithmetic;
use uf_core::{Real, UnitError, UnitResult};

use crate::options::{AdaptiveOptions, SimpsonOptions};

/// Composite Simpson integral of `f` over `[a, b]` with the default options.
pub fn integrate<T, F>(f: F, a: &T, b: &T) -> UnitResult<T>
where
    T: Arithmetic,
    F: Fn(&T) -> UnitResult<T>,
{
    integrate_with(f, a, b, SimpsonOptions::default())
}

pub fn integrate_with<T, F>(f: F, a: &T, b: &T, opts: SimpsonOptions) -> UnitResult<T>
where
    T: Arithmetic,
    F: Fn(&T) -> UnitResult<T>,
{
    let n = opts.intervals;
    if n == 0 || n % 2 != 0 {
        return Err(UnitError::InvalidArg {
            what: "Simpson intervals must be positive and even",
        });
    }
    let h = b.try_sub(a)?.try_scale(1.0 / n as Real)?;
    trace!(intervals = n, step = h.magnitude(), "simpson");

    let mut sum = f(a)?.try_add(&f(b)?)?;
    for i in 1..n {
        let x = a.try_add(&h.try_scale(i as Real)?)?;
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum = sum.try_add(&f(&x)?.try_scale(weight)?)?;
    }
    sum.try_scale(1.0 / 3.0)?.try_mul(&h)
}

/// Deepest forced bisection level accepted in [`AdaptiveOptions::min_depth`].
pub const MAX_MIN_DEPTH: u32 = 12;

/// Adaptive Simpson integral of `f` over `[a, b]`.
///
/// The interval is first cut into `2^min_depth` equal panels, none of which
/// may be accepted untested, so an integrand that happens to vanish at the
/// first few samples is still resolved. The tolerance is `rel_tol` times the
/// sum of those panels, floored at `abs_tol`; each panel is then bisected
/// until its two halves agree or `max_depth` is reached.
pub fn integrate_adaptive<T, F>(f: F, a: &T, b: &T, opts: AdaptiveOptions) -> UnitResult<T>
where
    T: Arithmetic,
    F: Fn(&T) -> UnitResult<T>,
{
    if !(opts.rel_tol.is_finite() && opts.rel_tol > 0.0) {
        return Err(UnitError::InvalidArg {
            what: "rel_tol must be positive and finite",
        });
    }
    if !(opts.abs_tol.is_finite() && opts.abs_tol >= 0.0) {
        return Err(UnitError::InvalidArg {
            what: "abs_tol must be non-negative and finite",
        });
    }
    if opts.min_depth > MAX_MIN_DEPTH {
        return Err(UnitError::InvalidArg {
            what: "min_depth exceeds MAX_MIN_DEPTH",
        });
    }
    let min_depth = opts.min_depth.min(opts.max_depth);
    let panels = split(&f, a, b, 1 << min_depth)?;
    let (first, rest) = panels.split_first().ok_or(UnitError::InvalidArg {
        what: "adaptive Simpson needs at least one panel",
    })?;
    let coarse = rest
        .iter()
        .try_fold(first.estimate.clone(), |sum, p| sum.try_add(&p.estimate))?;

    let relative = abs(&coarse)?.try_scale(opts.rel_tol)?;
    let floor = coarse.with_magnitude(opts.abs_tol);
    let tol = match relative.try_cmp(&floor)? {
        Some(Ordering::Less) => floor,
        _ => relative,
    };
    let panel_tol = tol.try_scale(1.0 / panels.len() as Real)?;
    trace!(
        rel_tol = opts.rel_tol,
        abs_tol = opts.abs_tol,
        panels = panels.len(),
        max_depth = opts.max_depth,
        "adaptive simpson"
    );

    let depth = opts.max_depth - min_depth;
    let mut total: Option<T> = None;
    for panel in panels {
        let part = refine(&f, panel, &panel_tol, depth)?;
        total = Some(match total {
            Some(sum) => sum.try_add(&part)?,
            None => part,
        });
    }
    Ok(total.unwrap_or(coarse))
}

/// `pieces` equal panels over `[a, b]`, sharing their endpoint samples.
fn split<T, F>(f: &F, a: &T, b: &T, pieces: usize) -> UnitResult<Vec<Panel<T>>>
where
    T: Arithmetic,
    F: Fn(&T) -> UnitResult<T>,
{
    let width = b.try_sub(a)?.try_scale(1.0 / pieces as Real)?;
    let mut panels = Vec::with_capacity(pieces);
    let mut x0 = a.clone();
    let mut f0 = f(a)?;
    for i in 1..=pieces {
        let x1 = if i == pieces {
            b.clone()
        } else {
            a.try_add(&width.try_scale(i as Real)?)?
        };
        let f1 = f(&x1)?;
        panels.push(Panel::new(f, x0, x1.clone(), f0, f1.clone())?);
        x0 = x1;
        f0 = f1;
    }
    Ok(panels)
}

/// One Simpson panel with its endpoint and midpoint samples.
struct Panel<T> {
    a: T,
    b: T,
    mid: T,
    fa: T,
    fm: T,
    fb: T,
    estimate: T,
}

impl<T: Arithmetic> Panel<T> {
    fn new<F>(f: &F, a: T, b: T, fa: T, fb: T) -> UnitResult<Self>
    where
        F: Fn(&T) -> UnitResult<T>,
    {
        let half = b.try_sub(&a)?.try_scale(0.5)?;
        let mid = a.try_add(&half)?;
        let fm = f(&mid)?;
        // (b - a)/6 * (fa + 4 fm + fb)
        let estimate = fa
            .try_add(&fm.try_scale(4.0)?)?
            .try_add(&fb)?
            .try_mul(&half)?
            .try_scale(1.0 / 3.0)?;
        Ok(Self {
            a,
            b,
            mid,
            fa,
            fm,
            fb,
            estimate,
        })
    }
}

fn refine<T, F>(f: &F, panel: Panel<T>, tol: &T, depth: u32) -> UnitResult<T>
where
    T: Arithmetic,
    F: Fn(&T) -> UnitResult<T>,
{
    let Panel {
        a,
        b,
        mid,
        fa,
        fm,
        fb,
        estimate,
    } = panel;
    let left = Panel::new(f, a, mid.clone(), fa, fm.clone())?;
    let right = Panel::new(f, mid, b, fm, fb)?;
    let halves = left.estimate.try_add(&right.estimate)?;
    let delta = halves.try_sub(&estimate)?;

    // Richardson correction: S2 + (S2 - S1) / 15
    let within = abs(&delta)?.try_scale(1.0 / 15.0)?.try_cmp(tol)?;
    if matches!(within, Some(Ordering::Less | Ordering::Equal)) {
        return halves.try_add(&delta.try_scale(1.0 / 15.0)?);
    }
    if depth == 0 {
        debug!(delta = delta.magnitude(), "adaptive simpson reached depth limit");
        return Ok(halves);
    }
    let half_tol = tol.try_scale(0.5)?;
    let l = refine(f, left, &half_tol, depth - 1)?;
    let r = refine(f, right, &half_tol, depth - 1)?;
    l.try_add(&r)
}

fn abs<T: Arithmetic>(v: &T) -> UnitResult<T> {
    if v.magnitude() < 0.0 {
        v.try_scale(-1.0)
    } else {
        Ok(v.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uf_arith::{Value, mul};
    use uf_core::{Dimension, Exponent, Unit, UnitApply};

    fn meter() -> Unit {
        Unit::new(Some("m"), Dimension::LENGTH, 1.0, 0.0).unwrap()
    }

    #[test]
    fn linear_integrand_on_numbers() {
        let area = integrate(|x: &f64| Ok(2.0 * x), &1.0, &4.0).unwrap();
        assert!((area - 15.0).abs() < 1e-12);
    }

    #[test]
    fn reversed_bounds_flip_sign() {
        let area = integrate(|x: &f64| Ok(2.0 * x), &4.0, &1.0).unwrap();
        assert!((area + 15.0).abs() < 1e-12);
    }

    #[test]
    fn simpson_is_exact_for_cubics() {
        let opts = SimpsonOptions { intervals: 2 };
        let area = integrate_with(|x: &f64| Ok(x.powi(3)), &0.0, &2.0, opts).unwrap();
        assert!((area - 4.0).abs() < 1e-12);
    }

    #[test]
    fn odd_interval_count_is_rejected() {
        let opts = SimpsonOptions { intervals: 3 };
        assert!(matches!(
            integrate_with(|x: &f64| Ok(*x), &0.0, &1.0, opts),
            Err(UnitError::InvalidArg { .. })
        ));
        let opts = SimpsonOptions { intervals: 0 };
        assert!(integrate_with(|x: &f64| Ok(*x), &0.0, &1.0, opts).is_err());
    }

    #[test]
    fn amount_integral_has_product_dimension() {
        let m = meter();
        let area = integrate(
            |x: &Value| mul(&Value::Number(2.0), x),
            &Value::from(m.apply(1.0)),
            &Value::from(m.apply(4.0)),
        )
        .unwrap();
        let area = area.as_amount().unwrap();
        assert_eq!(area.dimension(), Dimension::LENGTH + Dimension::LENGTH);
        assert!((area.base_value() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_bounds_fail() {
        let s = Unit::new(Some("s"), Dimension::TIME, 1.0, 0.0).unwrap();
        let err = integrate(
            |x: &Value| Ok(x.clone()),
            &Value::from(meter().apply(0.0)),
            &Value::from(s.apply(1.0)),
        )
        .unwrap_err();
        assert!(matches!(err, UnitError::DimensionMismatch { .. }));
    }

    #[test]
    fn adaptive_matches_closed_form() {
        let area = integrate_adaptive(
            |x: &f64| Ok(x.sin()),
            &0.0,
            &core::f64::consts::PI,
            AdaptiveOptions::default(),
        )
        .unwrap();
        assert!((area - 2.0).abs() < 1e-8);
    }

    #[test]
    fn adaptive_on_amounts() {
        let m = meter();
        let area = integrate_adaptive(
            |x: &Value| mul(x, x),
            &Value::from(m.apply(0.0)),
            &Value::from(m.apply(3.0)),
            AdaptiveOptions::default(),
        )
        .unwrap();
        assert_eq!(area.dimension(), Dimension::LENGTH.scale(Exponent::from_integer(3)));
        assert!((area.base_value() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn adaptive_stops_at_depth_limit() {
        let opts = AdaptiveOptions {
            rel_tol: 1e-300,
            max_depth: 3,
            ..AdaptiveOptions::default()
        };
        let area = integrate_adaptive(|x: &f64| Ok(x.sqrt()), &0.0, &1.0, opts).unwrap();
        assert!((area - 2.0 / 3.0).abs() < 1e-2);
    }

    #[test]
    fn adaptive_rejects_bad_tolerance() {
        let opts = AdaptiveOptions {
            rel_tol: 0.0,
            max_depth: 4,
            ..AdaptiveOptions::default()
        };
        assert!(integrate_adaptive(|x: &f64| Ok(*x), &0.0, &1.0, opts).is_err());
        let opts = AdaptiveOptions {
            abs_tol: -1.0,
            ..AdaptiveOptions::default()
        };
        assert!(integrate_adaptive(|x: &f64| Ok(*x), &0.0, &1.0, opts).is_err());
        let opts = AdaptiveOptions {
            min_depth: MAX_MIN_DEPTH + 1,
            max_depth: 40,
            ..AdaptiveOptions::default()
        };
        assert!(matches!(
            integrate_adaptive(|x: &f64| Ok(*x), &0.0, &1.0, opts),
            Err(UnitError::InvalidArg { .. })
        ));
    }

    #[test]
    fn adaptive_resolves_integrand_vanishing_at_coarse_samples() {
        // sin^2(4x) is zero at every sample of one and two Simpson panels
        let area = integrate_adaptive(
            |x: &f64| Ok((4.0 * x).sin().powi(2)),
            &0.0,
            &core::f64::consts::PI,
            AdaptiveOptions::default(),
        )
        .unwrap();
        assert!((area - core::f64::consts::FRAC_PI_2).abs() < 1e-8);
    }

    #[test]
    fn adaptive_zero_integral_terminates_near_zero() {
        let pi = core::f64::consts::PI;
        let area =
            integrate_adaptive(|x: &f64| Ok(x.sin()), &-pi, &pi, AdaptiveOptions::default())
                .unwrap();
        assert!(area.abs() < 1e-9);
    }

    #[test]
    fn adaptive_without_forced_depth_still_integrates_smooth_functions() {
        let opts = AdaptiveOptions {
            min_depth: 0,
            ..AdaptiveOptions::default()
        };
        let area = integrate_adaptive(|x: &f64| Ok(x.exp()), &0.0, &1.0, opts).unwrap();
        assert!((area - (1.0_f64.exp() - 1.0)).abs() < 1e-9);
    }
}
