//! File formats handled by arbgen.
//!
//! - [`csv`]: the multi-language translation table that drives a run.
//! - [`arb`]: the per-language ARB resources that a run reads and writes.

pub mod arb;
pub mod csv;

// Reexporting the formats for easier access
pub use arb::Format as ArbFormat;
pub use csv::{Row, TableReader};
