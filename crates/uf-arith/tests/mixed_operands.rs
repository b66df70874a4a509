//! Integration tests for uf-arith against a seeded registry.

use uf_arith::{Arithmetic, Value, add, div, expt, gt, mul, sub};
use uf_core::{Dimension, Tolerances, UnitApply, UnitError};
use uf_registry::si_registry;

#[test]
fn plain_numbers_pass_through() {
    let six = mul(&Value::Number(2.0), &Value::Number(3.0)).unwrap();
    assert_eq!(six.as_number(), Some(6.0));
    assert_eq!(2.0_f64.try_mul(&3.0).unwrap(), 6.0);
}

#[test]
fn meters_plus_seconds_is_a_mismatch() {
    let reg = si_registry().unwrap();
    let m = reg.lookup("m").unwrap();
    let s = reg.lookup("s").unwrap();
    let err = add(&Value::from(m.apply(1.0)), &Value::from(s.apply(1.0))).unwrap_err();
    assert!(matches!(err, UnitError::DimensionMismatch { op: "add", .. }));
}

#[test]
fn kilometers_per_hour_to_meters_per_second() {
    let reg = si_registry().unwrap();
    let km = reg.lookup("km").unwrap();
    let h = reg.lookup("h").unwrap();
    let m = reg.lookup("m").unwrap();
    let s = reg.lookup("s").unwrap();

    let speed = div(&Value::from(km.apply(36.0)), &Value::from(h.apply(1.0))).unwrap();
    let mps = m.divide(&s).unwrap();
    assert!((speed.extract(&mps).unwrap() - 10.0).abs() < 1e-12);
}

#[test]
fn temperatures_add_in_left_unit() {
    let reg = si_registry().unwrap();
    let c = reg.lookup("degC").unwrap();
    let k = reg.lookup("K").unwrap();
    let warmer = add(&Value::from(c.apply(20.0)), &Value::from(k.apply(274.15))).unwrap();
    let warmer = warmer.as_amount().unwrap();
    assert_eq!(warmer.unit(), &c);
    assert!((warmer.value() - 21.0).abs() < 1e-9);
    assert!(gt(&Value::from(c.apply(0.0)), &Value::from(k.apply(273.0))).unwrap());
}

#[test]
fn angles_do_not_mix_with_plain_numbers() {
    let reg = si_registry().unwrap();
    let rad = reg.lookup("rad").unwrap();
    let angle = Value::from(rad.apply(1.0));
    assert!(sub(&angle, &Value::Number(1.0)).is_err());
    let doubled = mul(&angle, &Value::Number(2.0)).unwrap();
    assert_eq!(doubled.dimension(), Dimension::PLANE_ANGLE);
}

#[test]
fn square_root_of_area() {
    let reg = si_registry().unwrap();
    let cm = reg.lookup("cm").unwrap();
    let area = mul(&Value::from(cm.apply(4.0)), &Value::from(cm.apply(9.0))).unwrap();
    let side = expt(&area, &Value::Number(0.5)).unwrap();
    let side = side.as_amount().unwrap();
    assert!(side
        .approx_eq(&cm.apply(6.0), Tolerances::default())
        .unwrap());
}
