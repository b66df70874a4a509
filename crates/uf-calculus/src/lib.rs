//! uf-calculus: unit-carrying derivatives and integrals.
//!
//! Both combinators are generic over `uf_arith::Arithmetic`, so the same call
//! works on plain `f64`, on `Amount` and on `Value`:
//! - `differentiate` returns `unit(f) / unit(x)`
//! - `integrate` returns `unit(f) * unit(x)`
//!
//! Dimension errors raised inside the integrand propagate unchanged.

pub mod diff;
pub mod integrate;
pub mod options;

pub use diff::{differentiate, differentiate_with};
pub use integrate::{MAX_MIN_DEPTH, integrate, integrate_adaptive, integrate_with};
pub use options::{AdaptiveOptions, DiffOptions, SimpsonOptions, Stencil};
