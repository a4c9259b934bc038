//! gf-core: stable foundation for the grid frequency simulator.
//!
//! Contains:
//! - units (uom SI types + constructors + nominal-frequency constants)
//! - numeric (Real + tolerances + series helpers)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
