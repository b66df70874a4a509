//! Units: a dimension plus an affine transform to the base representation.
//!
//! `base_value = value * scale + offset`
//!
//! Offsets are only legal on primitive-affine dimensions (exactly one axis to
//! the first power). Products, quotients and non-unit powers of an offset unit
//! are rejected with [`UnitError::InvalidUnitComposition`].

use std::sync::Arc;

use crate::dimension::{Dimension, Exponent};
use crate::error::{UnitError, UnitResult};
use crate::label::Factors;
use crate::numeric::{Real, Tolerances, ensure_finite, ensure_nonzero, nearly_equal};

/// Name under which [`Unit::dimensionless`] is known.
pub const DIMENSIONLESS_NAME: &str = "dimensionless";

/// Primitive unit description as supplied by an external conversion source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseUnit {
    pub name: String,
    pub dimension: Dimension,
    pub scale: Real,
    pub offset: Real,
}

impl BaseUnit {
    pub fn linear(name: impl Into<String>, dimension: Dimension, scale: Real) -> Self {
        Self {
            name: name.into(),
            dimension,
            scale,
            offset: 0.0,
        }
    }
}

/// Immutable unit value.
///
/// Structural equality (`==`) includes the name. Use [`Unit::is_equivalent`]
/// to compare units that convert identically. Deserialized units go through
/// [`Unit::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UnitRepr")
)]
pub struct Unit {
    name: Option<Arc<str>>,
    dimension: Dimension,
    scale: Real,
    offset: Real,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UnitRepr {
    name: Option<String>,
    dimension: Dimension,
    scale: Real,
    offset: Real,
}

#[cfg(feature = "serde")]
impl TryFrom<UnitRepr> for Unit {
    type Error = UnitError;

    fn try_from(repr: UnitRepr) -> UnitResult<Self> {
        Unit::new(repr.name.as_deref(), repr.dimension, repr.scale, repr.offset)
    }
}

impl Unit {
    /// Validated constructor.
    pub fn new(
        name: Option<&str>,
        dimension: Dimension,
        scale: Real,
        offset: Real,
    ) -> UnitResult<Self> {
        let scale = ensure_nonzero(scale, "unit scale must be finite and non-zero")?;
        let offset = ensure_finite(offset, "unit offset")?;
        let unit = Self {
            name: name.map(Arc::from),
            dimension,
            scale,
            offset,
        };
        if offset != 0.0 && dimension.single_axis().is_none() {
            return Err(UnitError::InvalidUnitComposition {
                op: "new",
                unit: unit.describe(),
            });
        }
        Ok(unit)
    }

    /// Wrap an externally sourced primitive unit.
    pub fn from_base(base: &BaseUnit) -> UnitResult<Self> {
        Self::new(Some(&base.name), base.dimension, base.scale, base.offset)
    }

    /// Identity for multiply/divide.
    pub fn dimensionless() -> Self {
        Self {
            name: Some(Arc::from(DIMENSIONLESS_NAME)),
            dimension: Dimension::DIMENSIONLESS,
            scale: 1.0,
            offset: 0.0,
        }
    }

    /// Same conversion under a new name.
    pub fn named(&self, name: &str) -> Self {
        Self {
            name: Some(Arc::from(name)),
            ..self.clone()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[inline]
    pub fn scale(&self) -> Real {
        self.scale
    }

    #[inline]
    pub fn offset(&self) -> Real {
        self.offset
    }

    #[inline]
    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// Dimensionless, unit scale, no offset.
    pub fn is_identity(&self) -> bool {
        self.dimension.is_dimensionless() && self.scale == 1.0 && self.offset == 0.0
    }

    /// Name, or `scale [dimension]` for anonymous units.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.to_string(),
            None => format!("{} [{}]", self.scale, self.dimension),
        }
    }

    /// Label plus dimension, used in error messages.
    pub fn describe(&self) -> String {
        match &self.name {
            Some(name) => format!("{name} [{}]", self.dimension),
            None => self.label(),
        }
    }

    #[inline]
    pub fn to_base(&self, value: Real) -> Real {
        value * self.scale + self.offset
    }

    #[inline]
    pub fn from_base_value(&self, base: Real) -> Real {
        (base - self.offset) / self.scale
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    pub fn ensure_compatible(&self, other: &Unit, op: &'static str) -> UnitResult<()> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(UnitError::DimensionMismatch {
                op,
                left: self.describe(),
                right: other.describe(),
            })
        }
    }

    /// Fails when this unit carries an offset.
    pub fn ensure_linear(&self, op: &'static str) -> UnitResult<()> {
        if self.is_affine() {
            Err(UnitError::InvalidUnitComposition {
                op,
                unit: self.describe(),
            })
        } else {
            Ok(())
        }
    }

    /// Same dimension, scale and offset (within tolerance); names ignored.
    pub fn is_equivalent(&self, other: &Unit, tol: Tolerances) -> bool {
        self.dimension == other.dimension
            && nearly_equal(self.scale, other.scale, tol)
            && nearly_equal(self.offset, other.offset, tol)
    }

    pub fn multiply(&self, other: &Unit) -> UnitResult<Unit> {
        self.ensure_linear("multiply")?;
        other.ensure_linear("multiply")?;
        if other.is_identity() {
            return Ok(self.clone());
        }
        if self.is_identity() {
            return Ok(other.clone());
        }
        let dimension = self
            .dimension
            .checked_add(&other.dimension)
            .ok_or_else(|| exponent_overflow(self, other, "1"))?;
        Ok(Unit {
            name: composed_name(self, other, Exponent::from_integer(1)),
            dimension,
            scale: derived_scale(self.scale * other.scale)?,
            offset: 0.0,
        })
    }

    pub fn divide(&self, other: &Unit) -> UnitResult<Unit> {
        self.ensure_linear("divide")?;
        other.ensure_linear("divide")?;
        if other.is_identity() {
            return Ok(self.clone());
        }
        let dimension = self
            .dimension
            .checked_sub(&other.dimension)
            .ok_or_else(|| exponent_overflow(self, other, "-1"))?;
        Ok(Unit {
            name: composed_name(self, other, Exponent::from_integer(-1)),
            dimension,
            scale: derived_scale(self.scale / other.scale)?,
            offset: 0.0,
        })
    }

    /// Raise to an exact rational power.
    ///
    /// Offset units only accept exponent 1. Fractional exponents need a real
    /// root of the scale: even roots of a negative scale are rejected, as are
    /// exponents whose dimension or scale leaves the representable range.
    pub fn power(&self, exponent: Exponent) -> UnitResult<Unit> {
        if exponent == Exponent::from_integer(1) {
            return Ok(self.clone());
        }
        if self.is_affine() {
            return Err(UnitError::InvalidUnitComposition {
                op: "power",
                unit: self.describe(),
            });
        }
        if exponent == Exponent::from_integer(0) {
            return Ok(Unit::dimensionless());
        }
        let unsupported = |reason| UnitError::UnsupportedExponent {
            unit: self.describe(),
            exponent: exponent.to_string(),
            reason,
        };
        let dimension = self
            .dimension
            .checked_scale(exponent)
            .ok_or_else(|| unsupported("dimension exponent overflows i32"))?;
        let scale = power_scale(self.scale, exponent).map_err(unsupported)?;
        let name = self
            .name
            .as_deref()
            .and_then(|name| Factors::parse(name).powered(exponent))
            .map(|factors| Arc::from(factors.render()));
        Ok(Unit {
            name,
            dimension,
            scale,
            offset: 0.0,
        })
    }

    pub fn powi(&self, n: i32) -> UnitResult<Unit> {
        self.power(Exponent::from_integer(n))
    }

    pub fn sqrt(&self) -> UnitResult<Unit> {
        self.power(Exponent::new(1, 2))
    }

    /// `n`-th root.
    pub fn root(&self, n: i32) -> UnitResult<Unit> {
        if n == 0 {
            return Err(UnitError::InvalidArg {
                what: "zeroth root",
            });
        }
        self.power(Exponent::new(1, n))
    }

    /// Same dimension and offset, scale multiplied by `factor`.
    pub fn rescale(&self, factor: Real) -> UnitResult<Unit> {
        let factor = ensure_nonzero(factor, "rescale factor must be finite and non-zero")?;
        Ok(Unit {
            name: None,
            dimension: self.dimension,
            scale: derived_scale(self.scale * factor)?,
            offset: self.offset,
        })
    }

    /// Shift the reference point: the new unit's base value is this unit's
    /// base value plus `delta`.
    ///
    /// Builds `celsius` from `kelvin`, or `z` from `1+z`.
    pub fn offset_from(&self, delta: Real) -> UnitResult<Unit> {
        let delta = ensure_finite(delta, "offset delta")?;
        if self.dimension.single_axis().is_none() {
            return Err(UnitError::InvalidUnitComposition {
                op: "offset_from",
                unit: self.describe(),
            });
        }
        Ok(Unit {
            name: None,
            dimension: self.dimension,
            scale: self.scale,
            offset: self.offset + delta,
        })
    }

    /// Product of `unit^exponent` over the map.
    ///
    /// The result does not depend on iteration order: dimensions add exactly,
    /// scale factors are multiplied in sorted order and the name is built from
    /// sorted factor labels.
    pub fn from_power_map<I>(map: I) -> UnitResult<Unit>
    where
        I: IntoIterator<Item = (Unit, Exponent)>,
    {
        let zero = Exponent::from_integer(0);
        let entries: Vec<(Unit, Exponent)> = map.into_iter().filter(|(_, e)| *e != zero).collect();

        match entries.as_slice() {
            [] => return Ok(Unit::dimensionless()),
            [(unit, e)] if *e == Exponent::from_integer(1) => return Ok(unit.clone()),
            _ => {}
        }

        let mut factors = Vec::with_capacity(entries.len());
        for (unit, e) in &entries {
            unit.ensure_linear("from_power_map")?;
            factors.push(unit.power(*e)?);
        }

        let mut dimension = Dimension::DIMENSIONLESS;
        for u in &factors {
            dimension = dimension
                .checked_add(&u.dimension)
                .ok_or_else(|| exponent_overflow(&Unit::dimensionless(), u, "1"))?;
        }

        let mut scales: Vec<Real> = factors.iter().map(|u| u.scale).collect();
        scales.sort_by(|a, b| a.total_cmp(b));
        let scale = derived_scale(scales.iter().product())?;

        Ok(Unit {
            name: power_map_name(&factors),
            dimension,
            scale,
            offset: 0.0,
        })
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Name of `a * b^k`. Anonymous operands make the result anonymous.
fn composed_name(a: &Unit, b: &Unit, k: Exponent) -> Option<Arc<str>> {
    let left = if a.is_identity() {
        Factors::default()
    } else {
        Factors::parse(a.name.as_deref()?)
    };
    let right = Factors::parse(b.name.as_deref()?);
    let factors = left.combine(&right, k)?;
    Some(Arc::from(factors.render()))
}

fn power_map_name(factors: &[Unit]) -> Option<Arc<str>> {
    let mut labels = Vec::with_capacity(factors.len());
    for u in factors.iter().filter(|u| !u.is_identity()) {
        labels.push(u.name.as_deref()?);
    }
    if labels.is_empty() {
        return Some(Arc::from(DIMENSIONLESS_NAME));
    }
    labels.sort_unstable();
    let mut combined = Factors::default();
    for label in labels {
        combined = combined.combine(&Factors::parse(label), Exponent::from_integer(1))?;
    }
    Some(Arc::from(combined.render()))
}

fn derived_scale(scale: Real) -> UnitResult<Real> {
    ensure_nonzero(scale, "derived unit scale must be finite and non-zero")
}

fn exponent_overflow(a: &Unit, b: &Unit, exponent: &str) -> UnitError {
    UnitError::UnsupportedExponent {
        unit: format!("{} with {}", a.describe(), b.describe()),
        exponent: exponent.to_string(),
        reason: "dimension exponent overflows i32",
    }
}

fn power_scale(scale: Real, exponent: Exponent) -> Result<Real, &'static str> {
    let numer = *exponent.numer();
    let denom = *exponent.denom();
    let raised = if denom == 1 {
        scale.powi(numer)
    } else {
        let magnitude = real_root(scale.abs(), denom).powi(numer);
        if scale >= 0.0 || numer % 2 == 0 {
            magnitude
        } else {
            -magnitude
        }
    };
    if scale < 0.0 && denom % 2 == 0 {
        return Err("even root of a negative scale");
    }
    if !raised.is_finite() || raised == 0.0 {
        return Err("scale leaves the floating-point range");
    }
    Ok(raised)
}

fn real_root(x: Real, n: i32) -> Real {
    match n {
        2 => x.sqrt(),
        3 => x.cbrt(),
        _ => x.powf(1.0 / Real::from(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Axis;

    fn meter() -> Unit {
        Unit::new(Some("m"), Dimension::LENGTH, 1.0, 0.0).unwrap()
    }

    fn kilometer() -> Unit {
        Unit::new(Some("km"), Dimension::LENGTH, 1000.0, 0.0).unwrap()
    }

    fn second() -> Unit {
        Unit::new(Some("s"), Dimension::TIME, 1.0, 0.0).unwrap()
    }

    fn kelvin() -> Unit {
        Unit::new(Some("K"), Dimension::TEMPERATURE, 1.0, 0.0).unwrap()
    }

    fn celsius() -> Unit {
        kelvin().offset_from(273.15).unwrap().named("degC")
    }

    #[test]
    fn new_rejects_offset_on_composite_dimension() {
        let err = Unit::new(Some("bad"), Dimension::LENGTH - Dimension::TIME, 1.0, 3.0)
            .unwrap_err();
        assert!(matches!(err, UnitError::InvalidUnitComposition { .. }));
    }

    #[test]
    fn new_rejects_zero_and_non_finite_scale() {
        assert!(matches!(
            Unit::new(None, Dimension::LENGTH, 0.0, 0.0),
            Err(UnitError::InvalidArg { .. })
        ));
        assert!(matches!(
            Unit::new(None, Dimension::LENGTH, Real::NAN, 0.0),
            Err(UnitError::NonFinite { .. })
        ));
    }

    #[test]
    fn from_base_wraps_descriptor() {
        let desc = BaseUnit {
            name: "degF".into(),
            dimension: Dimension::TEMPERATURE,
            scale: 5.0 / 9.0,
            offset: 459.67 * 5.0 / 9.0,
        };
        let unit = Unit::from_base(&desc).unwrap();
        assert_eq!(unit.name(), Some("degF"));
        assert!(unit.is_affine());
        assert!((unit.to_base(32.0) - 273.15).abs() < 1e-9);
    }

    #[test]
    fn multiply_and_divide_compose() {
        let velocity = kilometer().divide(&second()).unwrap();
        assert_eq!(velocity.dimension(), Dimension::LENGTH - Dimension::TIME);
        assert_eq!(velocity.scale(), 1000.0);
        assert_eq!(velocity.name(), Some("km/s"));

        let area = meter().multiply(&kilometer()).unwrap();
        assert_eq!(area.dimension(), Dimension::LENGTH.scale(Exponent::from_integer(2)));
        assert_eq!(area.name(), Some("m*km"));
    }

    #[test]
    fn divide_by_self_is_dimensionless() {
        let tol = Tolerances::default();
        for u in [meter(), kilometer(), second(), kelvin()] {
            let ratio = u.divide(&u).unwrap();
            assert!(ratio.is_equivalent(&Unit::dimensionless(), tol));
            assert_ne!(ratio, Unit::dimensionless());
        }
    }

    #[test]
    fn multiply_by_identity_is_unchanged() {
        let km = kilometer();
        assert_eq!(km.multiply(&Unit::dimensionless()).unwrap(), km);
        assert_eq!(Unit::dimensionless().multiply(&km).unwrap(), km);
        assert_eq!(km.divide(&Unit::dimensionless()).unwrap(), km);
    }

    #[test]
    fn affine_units_refuse_products() {
        let err = celsius().multiply(&celsius()).unwrap_err();
        assert!(matches!(err, UnitError::InvalidUnitComposition { op: "multiply", .. }));
        assert!(celsius().divide(&second()).is_err());
        assert!(meter().multiply(&celsius()).is_err());
        assert!(matches!(
            celsius().powi(2),
            Err(UnitError::InvalidUnitComposition { op: "power", .. })
        ));
        assert_eq!(celsius().powi(1).unwrap(), celsius());
    }

    #[test]
    fn power_and_roots() {
        let km2 = kilometer().powi(2).unwrap();
        assert_eq!(km2.scale(), 1.0e6);
        assert_eq!(km2.name(), Some("km^2"));

        let back = km2.sqrt().unwrap();
        assert_eq!(back.dimension(), Dimension::LENGTH);
        assert!((back.scale() - 1000.0).abs() < 1e-9);

        let cube = Unit::new(Some("x"), Dimension::LENGTH, 27.0, 0.0).unwrap();
        let third = cube.root(3).unwrap();
        assert!((third.scale() - 3.0).abs() < 1e-12);
        assert_eq!(third.dimension().exponent(Axis::Length), Exponent::new(1, 3));

        let inverse = kilometer().powi(-1).unwrap();
        assert_eq!(inverse.scale(), 1.0e-3);
        assert!(kilometer().powi(0).unwrap().is_identity());
    }

    #[test]
    fn negative_scale_roots() {
        let flipped = Unit::new(Some("neg"), Dimension::LENGTH, -8.0, 0.0).unwrap();
        let cube_root = flipped.root(3).unwrap();
        assert!((cube_root.scale() + 2.0).abs() < 1e-12);

        let err = flipped.sqrt().unwrap_err();
        assert!(matches!(err, UnitError::UnsupportedExponent { .. }));

        let two_thirds = flipped.power(Exponent::new(2, 3)).unwrap();
        assert!((two_thirds.scale() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn zeroth_root_is_invalid() {
        assert!(matches!(meter().root(0), Err(UnitError::InvalidArg { .. })));
    }

    #[test]
    fn rescale_keeps_dimension_and_offset() {
        let full_sky = Unit::new(Some("sr"), Dimension::SOLID_ANGLE, 1.0, 0.0)
            .unwrap()
            .rescale(4.0 * core::f64::consts::PI)
            .unwrap();
        assert_eq!(full_sky.dimension(), Dimension::SOLID_ANGLE);
        assert!((full_sky.scale() - 12.566_370_614_359_172).abs() < 1e-12);
        assert_eq!(full_sky.name(), None);

        let half_celsius = celsius().rescale(0.5).unwrap();
        assert_eq!(half_celsius.offset(), 273.15);
        assert!(meter().rescale(0.0).is_err());
    }

    #[test]
    fn offset_from_builds_redshift_axis() {
        let one_plus_z = Unit::new(Some("1+z"), Dimension::REDSHIFT, 1.0, 0.0).unwrap();
        let z = one_plus_z.offset_from(1.0).unwrap().named("z");
        assert_eq!(z.to_base(0.0), 1.0);
        assert_eq!(z.to_base(2.0), 3.0);
        assert!(z.is_affine());

        let err = kilometer()
            .divide(&second())
            .unwrap()
            .offset_from(1.0)
            .unwrap_err();
        assert!(matches!(err, UnitError::InvalidUnitComposition { op: "offset_from", .. }));
    }

    #[test]
    fn power_map_is_order_independent() {
        let kg = Unit::new(Some("kg"), Dimension::MASS, 1.0, 0.0).unwrap();
        let forward = Unit::from_power_map([
            (kg.clone(), Exponent::from_integer(1)),
            (kilometer(), Exponent::from_integer(2)),
            (second(), Exponent::from_integer(-2)),
        ])
        .unwrap();
        let backward = Unit::from_power_map([
            (second(), Exponent::from_integer(-2)),
            (kilometer(), Exponent::from_integer(2)),
            (kg, Exponent::from_integer(1)),
        ])
        .unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.scale(), 1.0e6);
        assert_eq!(
            forward.dimension(),
            Dimension::from_integers([2, -2, 1, 0, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn power_rejects_scale_outside_float_range() {
        let err = kilometer().powi(200).unwrap_err();
        assert!(matches!(err, UnitError::UnsupportedExponent { ref exponent, .. } if exponent == "200"));
        assert!(kilometer().powi(-200).is_err());
        assert!(kilometer().powi(100).is_ok());
    }

    #[test]
    fn power_rejects_exponent_overflow() {
        let area = meter().multiply(&meter()).unwrap();
        let err = area.power(Exponent::from_integer(1_500_000_000)).unwrap_err();
        assert!(matches!(err, UnitError::UnsupportedExponent { .. }));

        let tall = meter().power(Exponent::from_integer(i32::MAX)).unwrap();
        assert!(matches!(
            tall.multiply(&meter()),
            Err(UnitError::UnsupportedExponent { .. })
        ));
        assert!(tall.divide(&meter().powi(-1).unwrap()).is_err());
    }

    #[test]
    fn products_reject_scale_overflow() {
        let huge = Unit::new(Some("huge"), Dimension::LENGTH, 1.0e300, 0.0).unwrap();
        assert!(matches!(huge.multiply(&huge), Err(UnitError::NonFinite { .. })));
        let tiny = Unit::new(Some("tiny"), Dimension::LENGTH, 1.0e-300, 0.0).unwrap();
        assert!(tiny.multiply(&tiny).is_err());
        assert!(huge.rescale(1.0e10).is_err());
    }

    #[test]
    fn composed_names_collapse_repeated_factors() {
        let hour = Unit::new(Some("h"), Dimension::TIME, 3600.0, 0.0).unwrap();
        let cube = meter().multiply(&meter()).unwrap().divide(&meter()).unwrap();
        assert_eq!(cube.name(), Some("m"));

        let speed = kilometer().divide(&hour).unwrap();
        assert_eq!(speed.multiply(&hour).unwrap().name(), Some("km"));
        assert_eq!(speed.powi(2).unwrap().name(), Some("km^2/h^2"));
        assert_eq!(Unit::dimensionless().divide(&second()).unwrap().name(), Some("1/s"));

        let kg = Unit::new(Some("kg"), Dimension::MASS, 1.0, 0.0).unwrap();
        let per = meter().divide(&kg).unwrap().divide(&second()).unwrap();
        assert_eq!(per.name(), Some("m/(kg*s)"));
    }

    #[test]
    fn anonymous_operands_give_anonymous_results() {
        let thousand_m = meter().rescale(1000.0).unwrap();
        let product = thousand_m.multiply(&second()).unwrap();
        assert_eq!(product.name(), None);
        assert_eq!(second().divide(&thousand_m).unwrap().name(), None);
        assert_eq!(thousand_m.powi(2).unwrap().name(), None);
        assert_eq!(product.label(), format!("1000 [{}]", product.dimension()));
    }

    #[test]
    fn power_map_edge_cases() {
        assert!(Unit::from_power_map(Vec::new()).unwrap().is_identity());
        let single = Unit::from_power_map([(celsius(), Exponent::from_integer(1))]).unwrap();
        assert_eq!(single, celsius());
        let err = Unit::from_power_map([
            (celsius(), Exponent::from_integer(1)),
            (meter(), Exponent::from_integer(1)),
        ])
        .unwrap_err();
        assert!(matches!(err, UnitError::InvalidUnitComposition { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_like_new() {
        let speed = kilometer().divide(&second()).unwrap();
        let json = serde_json::to_value(&speed).unwrap();
        let back: Unit = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, speed);

        let mut zero_scale = json.clone();
        zero_scale["scale"] = serde_json::json!(0.0);
        assert!(serde_json::from_value::<Unit>(zero_scale).is_err());

        let mut offset_speed = json;
        offset_speed["offset"] = serde_json::json!(5.0);
        assert!(serde_json::from_value::<Unit>(offset_speed).is_err());

        let mut offset_kelvin = serde_json::to_value(kelvin()).unwrap();
        offset_kelvin["offset"] = serde_json::json!(273.15);
        let celsius: Unit = serde_json::from_value(offset_kelvin).unwrap();
        assert!(celsius.is_affine());
    }
}
