//! Sort keys for player listings.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::Player;
use crate::error::DomainError;

/// Field a listing is sorted by, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Level,
    Experience,
    Birthday,
}

impl PlayerOrder {
    pub const ALL: [PlayerOrder; 5] = [
        PlayerOrder::Id,
        PlayerOrder::Name,
        PlayerOrder::Level,
        PlayerOrder::Experience,
        PlayerOrder::Birthday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "ID",
            PlayerOrder::Name => "NAME",
            PlayerOrder::Level => "LEVEL",
            PlayerOrder::Experience => "EXPERIENCE",
            PlayerOrder::Birthday => "BIRTHDAY",
        }
    }

    /// Natural ordering of two players by this key.
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        match self {
            PlayerOrder::Id => a.id().cmp(&b.id()),
            PlayerOrder::Name => a.name().cmp(b.name()),
            PlayerOrder::Level => a.level().cmp(&b.level()),
            PlayerOrder::Experience => a.experience().cmp(&b.experience()),
            PlayerOrder::Birthday => a.birthday().cmp(&b.birthday()),
        }
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlayerOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown order: {}", s)))
    }
}
