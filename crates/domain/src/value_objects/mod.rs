//! Value objects - Immutable objects defined by their attributes

pub mod progression;
pub mod validation;

pub use progression::{
    calculate_level, calculate_until_next_level, Progression, MAX_EXPERIENCE, MIN_EXPERIENCE,
};
pub use validation::{
    is_birthday_valid, is_experience_valid, is_name_valid, is_player_valid, is_string_valid,
    is_title_valid,
};
