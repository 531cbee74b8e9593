//! Secondary indexing module
//!
//! Provides hash-bucket indices mapping property values to vertex id sets,
//! for O(1) equality lookups and value-scan predicate lookups.

pub(crate) mod registry;
pub mod secondary;

pub use secondary::SecondaryIndex;
