//! uf-registry: named units for unitflow.
//!
//! Provides:
//! - a thread-safe name -> unit registry (isolated instances + a global one)
//! - metric and binary prefix tables and prefix-family generation
//! - base-unit sources (`uom`-backed SI factors)
//! - an SI seed for catalogs and tests

pub mod prefix;
pub mod registry;
pub mod seed;
pub mod source;

pub use prefix::{BINARY_PREFIXES, PrefixEntry, PrefixTable, SI_PREFIXES};
pub use registry::{UnitRegistry, define, global, lookup};
pub use seed::{seed_si, si_registry};
pub use source::{BaseUnitSource, UomSource};
