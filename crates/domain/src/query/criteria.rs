//! Filter criteria for listing and counting players.

use chrono::{DateTime, Utc};

use crate::entities::Player;
use crate::types::{Profession, Race};

/// Optional filter predicates; an absent field imposes no constraint.
///
/// All bounds are inclusive: `after` keeps birthdays not strictly before it,
/// `before` keeps birthdays not strictly after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerCriteria {
    /// Substring of the name.
    pub name: Option<String>,
    /// Substring of the title.
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

impl PlayerCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every present criterion holds for `player`.
    pub fn matches(&self, player: &Player) -> bool {
        if let Some(name) = &self.name {
            if !player.name().contains(name.as_str()) {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if !player.title().contains(title.as_str()) {
                return false;
            }
        }
        if self.race.is_some() && player.race() != self.race {
            return false;
        }
        if self.profession.is_some() && player.profession() != self.profession {
            return false;
        }
        if self.after.is_some_and(|after| player.birthday() < after) {
            return false;
        }
        if self.before.is_some_and(|before| player.birthday() > before) {
            return false;
        }
        if self.banned.is_some_and(|banned| player.is_banned() != banned) {
            return false;
        }
        if self.min_experience.is_some_and(|min| player.experience() < min) {
            return false;
        }
        if self.max_experience.is_some_and(|max| player.experience() > max) {
            return false;
        }
        if self.min_level.is_some_and(|min| player.level() < min) {
            return false;
        }
        if self.max_level.is_some_and(|max| player.level() > max) {
            return false;
        }
        true
    }
}
