//! Level and experience progression.
//!
//! Level is a pure function of experience. The square root is taken in f64
//! and the quotient truncated toward zero, which keeps boundary values such as
//! `experience = 100` (level 1 exactly) stable.

/// Lowest accepted experience value.
pub const MIN_EXPERIENCE: i32 = 0;

/// Highest accepted experience value.
pub const MAX_EXPERIENCE: i32 = 10_000_000;

/// Level reached with `experience` points.
pub fn calculate_level(experience: i32) -> i32 {
    let discriminant = 2500.0 + 200.0 * f64::from(experience);
    ((discriminant.sqrt() - 50.0) / 100.0) as i32
}

/// Experience still missing before the next level.
pub fn calculate_until_next_level(experience: i32) -> i32 {
    let level = calculate_level(experience);
    50 * (level + 1) * (level + 2) - experience
}

/// Derived progression stats, always computed together from one experience value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub level: i32,
    pub until_next_level: i32,
}

impl Progression {
    pub fn from_experience(experience: i32) -> Self {
        Self {
            level: calculate_level(experience),
            until_next_level: calculate_until_next_level(experience),
        }
    }
}
