//! Base-unit sources: where primitive scale/offset factors come from.
//!
//! The registry only consumes [`BaseUnit`] descriptors. [`UomSource`] reads
//! them from the `uom` SI definitions by building a quantity in the named unit
//! and reading back its SI base value.

use uf_core::{BaseUnit, Dimension};
use uom::si::f64::{Angle, ElectricCharge, Length, Mass, ThermodynamicTemperature, Time};
use uom::si::{angle, electric_charge, length, mass, thermodynamic_temperature, time};

/// Supplier of primitive unit descriptors.
pub trait BaseUnitSource {
    fn base_units(&self) -> Vec<BaseUnit>;

    fn find(&self, name: &str) -> Option<BaseUnit> {
        self.base_units().into_iter().find(|b| b.name == name)
    }
}

impl BaseUnitSource for [BaseUnit] {
    fn base_units(&self) -> Vec<BaseUnit> {
        self.to_vec()
    }
}

impl BaseUnitSource for Vec<BaseUnit> {
    fn base_units(&self) -> Vec<BaseUnit> {
        self.clone()
    }
}

/// SI-relative factors taken from `uom`.
///
/// Mass is relative to the kilogram, as in SI.
#[derive(Debug, Clone, Copy, Default)]
pub struct UomSource;

macro_rules! linear {
    ($name:literal, $qty:ident, $unit:path, $dim:expr) => {
        BaseUnit::linear($name, $dim, $qty::new::<$unit>(1.0).value)
    };
}

macro_rules! affine_temperature {
    ($name:literal, $unit:path) => {{
        let zero = ThermodynamicTemperature::new::<$unit>(0.0).value;
        let one = ThermodynamicTemperature::new::<$unit>(1.0).value;
        BaseUnit {
            name: $name.to_string(),
            dimension: Dimension::TEMPERATURE,
            scale: one - zero,
            offset: zero,
        }
    }};
}

impl BaseUnitSource for UomSource {
    fn base_units(&self) -> Vec<BaseUnit> {
        vec![
            linear!("m", Length, length::meter, Dimension::LENGTH),
            linear!("au", Length, length::astronomical_unit, Dimension::LENGTH),
            linear!("ly", Length, length::light_year, Dimension::LENGTH),
            linear!("pc", Length, length::parsec, Dimension::LENGTH),
            linear!("in", Length, length::inch, Dimension::LENGTH),
            linear!("ft", Length, length::foot, Dimension::LENGTH),
            linear!("mi", Length, length::mile, Dimension::LENGTH),
            linear!("s", Time, time::second, Dimension::TIME),
            linear!("min", Time, time::minute, Dimension::TIME),
            linear!("h", Time, time::hour, Dimension::TIME),
            linear!("day", Time, time::day, Dimension::TIME),
            linear!("yr", Time, time::year, Dimension::TIME),
            linear!("g", Mass, mass::gram, Dimension::MASS),
            linear!("lb", Mass, mass::pound, Dimension::MASS),
            linear!("C", ElectricCharge, electric_charge::coulomb, Dimension::CHARGE),
            linear!(
                "K",
                ThermodynamicTemperature,
                thermodynamic_temperature::kelvin,
                Dimension::TEMPERATURE
            ),
            affine_temperature!("degC", thermodynamic_temperature::degree_celsius),
            affine_temperature!("degF", thermodynamic_temperature::degree_fahrenheit),
            linear!("rad", Angle, angle::radian, Dimension::PLANE_ANGLE),
            linear!("deg", Angle, angle::degree, Dimension::PLANE_ANGLE),
        ]
    }
}
