//! Fixed-capacity integer-keyed hash tables with two collision strategies, and a harness that
//! times them against each other.
//!
//! [`OpenAddressingTable`] probes linearly for a free slot; [`SeparateChainingTable`] appends
//! to a per-slot chain. Both hash with `key mod capacity`, never resize and keep duplicate
//! keys. [`benchmark::compare`] runs the same random workload against each.

pub mod benchmark;
pub mod config;
pub mod error;
pub mod footprint;
pub mod hash;
pub mod logger;
pub mod open_addressing;
pub mod report;
pub mod separate_chaining;
pub mod table;

#[cfg(test)]
mod proptests;

pub use benchmark::{compare, BenchmarkRunner, Measurement, ResultRecord};
pub use config::BenchConfig;
pub use error::{BenchmarkError, TableError};
pub use footprint::Footprint;
pub use open_addressing::OpenAddressingTable;
pub use separate_chaining::SeparateChainingTable;
pub use table::{Entry, Key, Table};
