//! Domain entities - Core business objects with identity

mod player;

pub use player::{NewPlayer, Player, PlayerDraft};
