//! Minimal SI seed: the base set every catalog builds on.

use tracing::debug;
use uf_core::{BaseUnit, Dimension, UnitResult};

use crate::prefix::SI_PREFIXES;
use crate::registry::UnitRegistry;
use crate::source::UomSource;

/// Units whose axes `uom` has no notion of.
fn pseudo_axis_units() -> Vec<BaseUnit> {
    vec![
        BaseUnit::linear("sr", Dimension::SOLID_ANGLE, 1.0),
        BaseUnit::linear("1+z", Dimension::REDSHIFT, 1.0),
        BaseUnit::linear("prob", Dimension::PROBABILITY, 1.0),
    ]
}

/// Register the SI base set, the pseudo-axis units, and metric prefix
/// families for `m`, `s` and `g`.
///
/// Fails with `NameCollision` when run twice on the same registry.
pub fn seed_si(registry: &UnitRegistry) -> UnitResult<()> {
    let count = registry.define_from_source(&UomSource)?
        + registry.define_from_source(&pseudo_axis_units())?;

    let one_plus_z = registry.lookup("1+z")?;
    registry.define("z", &one_plus_z.offset_from(1.0)?)?;

    let sr = registry.lookup("sr")?;
    registry.define("sky", &sr.rescale(4.0 * core::f64::consts::PI)?)?;

    for base in ["m", "s", "g"] {
        registry.generate_prefixed_family(base, SI_PREFIXES)?;
    }
    debug!(primitives = count, total = registry.len(), "seeded SI units");
    Ok(())
}

/// `seed_si` on a fresh registry.
pub fn si_registry() -> UnitResult<UnitRegistry> {
    let registry = UnitRegistry::new();
    seed_si(&registry)?;
    Ok(registry)
}
