//! Name -> unit mapping shared across the process.
//!
//! Readers take a shared lock, writers (definitions and prefix-family
//! generation) take the exclusive lock. Entries are never removed.

use std::collections::{HashMap, HashSet};
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};
use uf_core::{DIMENSIONLESS_NAME, Real, Unit, UnitError, UnitResult};

use crate::prefix::PrefixEntry;
use crate::source::BaseUnitSource;

#[derive(Debug, Default)]
struct RegistryState {
    units: HashMap<String, Unit>,
    prefixes: Vec<PrefixEntry>,
}

/// Thread-safe unit registry.
///
/// `UnitRegistry::new()` gives an isolated instance (useful in tests);
/// [`global`] is the process-wide one that domain catalogs populate at
/// startup.
#[derive(Debug)]
pub struct UnitRegistry {
    state: RwLock<RegistryState>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRegistry {
    /// Registry holding only the reserved `dimensionless` unit.
    pub fn new() -> Self {
        let mut state = RegistryState::default();
        state
            .units
            .insert(DIMENSIONLESS_NAME.to_string(), Unit::dimensionless());
        Self {
            state: RwLock::new(state),
        }
    }

    // Writers never leave the map half-updated, so a poisoned lock is still
    // consistent.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or overwrite `name`. The stored unit carries `name`.
    pub fn define(&self, name: &str, unit: &Unit) -> UnitResult<Unit> {
        if name.is_empty() {
            return Err(UnitError::InvalidArg {
                what: "unit name must not be empty",
            });
        }
        let named = unit.named(name);
        let previous = self.write().units.insert(name.to_string(), named.clone());
        if previous.is_some() {
            warn!(name, "unit redefined");
        }
        debug!(name, dimension = %named.dimension(), scale = named.scale(), "defined unit");
        Ok(named)
    }

    pub fn lookup(&self, name: &str) -> UnitResult<Unit> {
        self.read()
            .units
            .get(name)
            .cloned()
            .ok_or_else(|| UnitError::UnknownUnit {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().units.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.read().units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().units.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().units.keys().cloned().collect();
        names.sort();
        names
    }

    /// The unit registered under the reserved canonical name.
    pub fn dimensionless(&self) -> Unit {
        self.lookup(DIMENSIONLESS_NAME)
            .unwrap_or_else(|_| Unit::dimensionless())
    }

    /// Register `prefix + base_name` as `base * multiplier` for every entry
    /// of `table`.
    ///
    /// Collisions are rejected: if any generated name already exists (or is
    /// generated twice) nothing is inserted and `NameCollision` is returned.
    pub fn generate_prefixed_family(
        &self,
        base_name: &str,
        table: &[(&str, Real)],
    ) -> UnitResult<Vec<Unit>> {
        let mut state = self.write();
        let base = state
            .units
            .get(base_name)
            .cloned()
            .ok_or_else(|| UnitError::UnknownUnit {
                name: base_name.to_string(),
            })?;

        let mut seen = HashSet::with_capacity(table.len());
        let mut generated = Vec::with_capacity(table.len());
        for &(prefix, multiplier) in table {
            let name = format!("{prefix}{base_name}");
            if state.units.contains_key(&name) || !seen.insert(name.clone()) {
                warn!(base = base_name, name = %name, "prefix family collision");
                return Err(UnitError::NameCollision { name });
            }
            let unit = base.rescale(multiplier)?.named(&name);
            generated.push((
                PrefixEntry {
                    base: base_name.to_string(),
                    prefix: prefix.to_string(),
                    multiplier,
                },
                unit,
            ));
        }

        let mut units = Vec::with_capacity(generated.len());
        for (entry, unit) in generated {
            state.units.insert(entry.unit_name(), unit.clone());
            state.prefixes.push(entry);
            units.push(unit);
        }
        debug!(base = base_name, count = units.len(), "generated prefix family");
        Ok(units)
    }

    /// Prefix triples generated from `base_name`, in generation order.
    pub fn prefixes_of(&self, base_name: &str) -> Vec<PrefixEntry> {
        self.read()
            .prefixes
            .iter()
            .filter(|e| e.base == base_name)
            .cloned()
            .collect()
    }

    /// Define every unit a base-unit source offers. Returns the count.
    pub fn define_from_source<S>(&self, source: &S) -> UnitResult<usize>
    where
        S: BaseUnitSource + ?Sized,
    {
        let bases = source.base_units();
        for base in &bases {
            let unit = Unit::from_base(base)?;
            self.define(&base.name, &unit)?;
        }
        Ok(bases.len())
    }
}

static GLOBAL: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Process-wide registry.
pub fn global() -> &'static UnitRegistry {
    &GLOBAL
}

/// [`UnitRegistry::define`] on the global registry.
pub fn define(name: &str, unit: &Unit) -> UnitResult<Unit> {
    global().define(name, unit)
}

/// [`UnitRegistry::lookup`] on the global registry.
pub fn lookup(name: &str) -> UnitResult<Unit> {
    global().lookup(name)
}
