//! # Roster Domain Types
//!
//! Closed vocabularies shared by the player record, the query engine, and the
//! storage adapters.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Strict parsing** - Unknown names are an error, never a fallback variant

mod profession;
pub use profession::Profession;

mod race;
pub use race::Race;
