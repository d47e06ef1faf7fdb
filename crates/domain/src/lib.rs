//! Roster domain: player records, validation rules, progression formulas,
//! and the in-memory query engine. No I/O, no async.

pub mod entities;
pub mod error;
pub mod ids;
pub mod query;
pub mod types;
pub mod value_objects;

pub use entities::{NewPlayer, Player, PlayerDraft};
pub use error::DomainError;
pub use ids::PlayerId;
pub use query::{PageRequest, PlayerCriteria, PlayerOrder};
pub use types::{Profession, Race};
pub use value_objects::{calculate_level, calculate_until_next_level, Progression};
