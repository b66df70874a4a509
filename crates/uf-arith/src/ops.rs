//! Dimension-checked operators over [`Value`].
//!
//! With plain numbers on both sides every operator reduces to the ordinary
//! `f64` operation. Amounts follow these rules:
//!
//! - `add`/`sub`: same dimension required; the right operand is converted into
//!   the left operand's unit and the result is in that unit.
//! - `mul`/`div`: any dimensions; the result unit is the composed unit of the
//!   operands (`km*h`, `m/s`), not the raw base unit. A plain number acts as
//!   the dimensionless identity and keeps the other operand's unit.
//! - comparisons: same dimension required; base values are compared.
//! - `expt`: the exponent must be dimensionless.

use core::cmp::Ordering;

use uf_core::{Amount, Exponent, Real, Unit, UnitError, UnitResult};

use crate::value::Value;

/// Largest denominator accepted when reading a float exponent as a rational.
pub const MAX_EXPONENT_DENOMINATOR: i32 = 12;

fn mismatch(op: &'static str, left: &Unit, right: &Unit) -> UnitError {
    UnitError::DimensionMismatch {
        op,
        left: left.describe(),
        right: right.describe(),
    }
}

/// Right operand as a raw value in the left operand's unit.
fn aligned(op: &'static str, lhs: &Amount, rhs: &Amount) -> UnitResult<Real> {
    lhs.unit().ensure_compatible(rhs.unit(), op)?;
    Ok(lhs.unit().from_base_value(rhs.base_value()))
}

/// A plain number read in a dimensionless amount's unit.
fn number_in(op: &'static str, unit: &Unit, n: Real) -> UnitResult<Real> {
    if !unit.dimension().is_dimensionless() {
        return Err(mismatch(op, unit, &Unit::dimensionless()));
    }
    Ok(unit.from_base_value(n))
}

/// Amount read as a plain number.
fn amount_as_number(op: &'static str, a: &Amount) -> UnitResult<Real> {
    if !a.dimension().is_dimensionless() {
        return Err(mismatch(op, &Unit::dimensionless(), a.unit()));
    }
    Ok(a.base_value())
}

pub(crate) fn add_amounts(lhs: &Amount, rhs: &Amount) -> UnitResult<Amount> {
    Ok(lhs.with_value(lhs.value() + aligned("add", lhs, rhs)?))
}

pub(crate) fn sub_amounts(lhs: &Amount, rhs: &Amount) -> UnitResult<Amount> {
    Ok(lhs.with_value(lhs.value() - aligned("sub", lhs, rhs)?))
}

pub(crate) fn mul_amounts(lhs: &Amount, rhs: &Amount) -> UnitResult<Amount> {
    let unit = lhs.unit().multiply(rhs.unit())?;
    Ok(Amount::new(unit, lhs.value() * rhs.value()))
}

pub(crate) fn div_amounts(lhs: &Amount, rhs: &Amount) -> UnitResult<Amount> {
    let unit = lhs.unit().divide(rhs.unit())?;
    Ok(Amount::new(unit, lhs.value() / rhs.value()))
}

/// Amount times a plain number; the unit is unchanged.
pub(crate) fn scale_amount(a: &Amount, k: Real) -> UnitResult<Amount> {
    a.unit().ensure_linear("multiply")?;
    Ok(a.with_value(a.value() * k))
}

pub fn add(lhs: &Value, rhs: &Value) -> UnitResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Number(a), Value::Amount(b)) => Ok(Value::Number(a + amount_as_number("add", b)?)),
        (Value::Amount(a), Value::Number(b)) => {
            let b = number_in("add", a.unit(), *b)?;
            Ok(Value::Amount(a.with_value(a.value() + b)))
        }
        (Value::Amount(a), Value::Amount(b)) => add_amounts(a, b).map(Value::Amount),
    }
}

pub fn sub(lhs: &Value, rhs: &Value) -> UnitResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
        (Value::Number(a), Value::Amount(b)) => Ok(Value::Number(a - amount_as_number("sub", b)?)),
        (Value::Amount(a), Value::Number(b)) => {
            let b = number_in("sub", a.unit(), *b)?;
            Ok(Value::Amount(a.with_value(a.value() - b)))
        }
        (Value::Amount(a), Value::Amount(b)) => sub_amounts(a, b).map(Value::Amount),
    }
}

pub fn mul(lhs: &Value, rhs: &Value) -> UnitResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
        (Value::Number(k), Value::Amount(a)) | (Value::Amount(a), Value::Number(k)) => {
            scale_amount(a, *k).map(Value::Amount)
        }
        (Value::Amount(a), Value::Amount(b)) => mul_amounts(a, b).map(Value::Amount),
    }
}

pub fn div(lhs: &Value, rhs: &Value) -> UnitResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
        (Value::Number(n), Value::Amount(b)) => {
            let unit = Unit::dimensionless().divide(b.unit())?;
            Ok(Value::Amount(Amount::new(unit, n / b.value())))
        }
        (Value::Amount(a), Value::Number(n)) => {
            a.unit().ensure_linear("divide")?;
            Ok(Value::Amount(a.with_value(a.value() / n)))
        }
        (Value::Amount(a), Value::Amount(b)) => div_amounts(a, b).map(Value::Amount),
    }
}

pub fn neg(v: &Value) -> Value {
    match v {
        Value::Number(n) => Value::Number(-n),
        Value::Amount(a) => Value::Amount(a.with_value(-a.value())),
    }
}

/// Order by base value. `None` only when a NaN is involved.
pub fn compare(lhs: &Value, rhs: &Value) -> UnitResult<Option<Ordering>> {
    if lhs.dimension() != rhs.dimension() {
        return Err(mismatch("compare", &lhs.unit(), &rhs.unit()));
    }
    Ok(lhs.base_value().partial_cmp(&rhs.base_value()))
}

pub fn eq(lhs: &Value, rhs: &Value) -> UnitResult<bool> {
    Ok(compare(lhs, rhs)? == Some(Ordering::Equal))
}

pub fn ne(lhs: &Value, rhs: &Value) -> UnitResult<bool> {
    eq(lhs, rhs).map(|e| !e)
}

pub fn lt(lhs: &Value, rhs: &Value) -> UnitResult<bool> {
    Ok(compare(lhs, rhs)? == Some(Ordering::Less))
}

pub fn le(lhs: &Value, rhs: &Value) -> UnitResult<bool> {
    Ok(matches!(
        compare(lhs, rhs)?,
        Some(Ordering::Less | Ordering::Equal)
    ))
}

pub fn gt(lhs: &Value, rhs: &Value) -> UnitResult<bool> {
    Ok(compare(lhs, rhs)? == Some(Ordering::Greater))
}

pub fn ge(lhs: &Value, rhs: &Value) -> UnitResult<bool> {
    Ok(matches!(
        compare(lhs, rhs)?,
        Some(Ordering::Greater | Ordering::Equal)
    ))
}

/// Exact rational for `e` with a denominator up to
/// [`MAX_EXPONENT_DENOMINATOR`], if one exists.
pub fn exponent_from_real(e: Real) -> Option<Exponent> {
    if !e.is_finite() {
        return None;
    }
    for d in 1..=MAX_EXPONENT_DENOMINATOR {
        let n = e * Real::from(d);
        if n.fract() != 0.0 || n.abs() > Real::from(i32::MAX) {
            continue;
        }
        let n = n as i32;
        if Real::from(n) / Real::from(d) == e {
            return Some(Exponent::new(n, d));
        }
    }
    None
}

/// `base ^ exponent`. The exponent must be dimensionless.
///
/// Plain bases use `f64::powf`. Amount bases need an exponent that is exactly
/// a small rational, and the unit power rule must accept it.
pub fn expt(base: &Value, exponent: &Value) -> UnitResult<Value> {
    let e = match exponent {
        Value::Number(e) => *e,
        Value::Amount(a) => amount_as_number("expt", a)?,
    };
    match base {
        Value::Number(b) => Ok(Value::Number(b.powf(e))),
        Value::Amount(a) => {
            let exact = exponent_from_real(e).ok_or_else(|| UnitError::UnsupportedExponent {
                unit: a.unit().describe(),
                exponent: e.to_string(),
                reason: "exponent is not a small exact rational",
            })?;
            expt_rational(base, exact)
        }
    }
}

/// `base ^ exponent` with an exact rational exponent.
///
/// Odd roots of negative values stay real, matching the unit scale rule:
/// `(-8 m^3)^(1/3)` is `-2 m`.
pub fn expt_rational(base: &Value, exponent: Exponent) -> UnitResult<Value> {
    match base {
        Value::Number(b) => Ok(Value::Number(rational_pow(*b, exponent))),
        Value::Amount(a) => {
            let unit = a.unit().power(exponent)?;
            let value = rational_pow(a.value(), exponent);
            Ok(Value::Amount(Amount::new(unit, value)))
        }
    }
}

fn rational_pow(v: Real, exponent: Exponent) -> Real {
    let numer = *exponent.numer();
    let denom = *exponent.denom();
    if denom == 1 {
        return v.powi(numer);
    }
    let as_real = Real::from(numer) / Real::from(denom);
    if v < 0.0 && denom % 2 == 1 {
        let magnitude = (-v).powf(as_real);
        return if numer % 2 == 0 { magnitude } else { -magnitude };
    }
    v.powf(as_real)
}
