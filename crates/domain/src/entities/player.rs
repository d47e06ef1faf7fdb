//! Player entity - a game character record with derived progression stats
//!
//! # Invariants
//!
//! - `level` and `until_next_level` always match `experience`. The only way
//!   to change experience is `set_experience`, which recomputes both.
//! - A `NewPlayer` has passed full validation; a `Player` additionally has an
//!   id assigned by persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::types::{Profession, Race};
use crate::value_objects::validation::{
    require, validate_birthday, validate_experience, validate_name, validate_title,
};
use crate::value_objects::Progression;

// =============================================================================
// Draft (request body shape)
// =============================================================================

/// All-optional player fields, as received for a create or a partial update.
///
/// Derived fields (`id`, `level`, `untilNextLevel`) are not part of the draft;
/// if a client sends them they are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<Profession>,
    /// Epoch milliseconds on the wire.
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<i32>,
}

// =============================================================================
// NewPlayer (validated, not yet stored)
// =============================================================================

/// A fully validated player that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    name: String,
    title: String,
    race: Option<Race>,
    profession: Option<Profession>,
    birthday: DateTime<Utc>,
    banned: bool,
    experience: i32,
    progression: Progression,
}

impl NewPlayer {
    /// Validate a draft for creation.
    ///
    /// Name, title, birthday and experience are required and checked in that
    /// order; `banned` defaults to `false`.
    pub fn from_draft(draft: PlayerDraft) -> Result<Self, DomainError> {
        let name = require(draft.name, "name")?;
        validate_name(&name)?;
        let title = require(draft.title, "title")?;
        validate_title(&title)?;
        let birthday = validate_birthday(require(draft.birthday, "birthday")?)?;
        let experience = validate_experience(require(draft.experience, "experience")?)?;

        Ok(Self {
            name,
            title,
            race: draft.race,
            profession: draft.profession,
            birthday,
            banned: draft.banned.unwrap_or(false),
            experience,
            progression: Progression::from_experience(experience),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn race(&self) -> Option<Race> {
        self.race
    }

    pub fn profession(&self) -> Option<Profession> {
        self.profession
    }

    pub fn birthday(&self) -> DateTime<Utc> {
        self.birthday
    }

    pub fn banned(&self) -> bool {
        self.banned
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn level(&self) -> i32 {
        self.progression.level
    }

    pub fn until_next_level(&self) -> i32 {
        self.progression.until_next_level
    }
}

// =============================================================================
// Player (stored)
// =============================================================================

/// A stored player record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: PlayerId,
    name: String,
    title: String,
    race: Option<Race>,
    profession: Option<Profession>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    birthday: DateTime<Utc>,
    banned: bool,
    experience: i32,
    level: i32,
    until_next_level: i32,
}

impl Player {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Attach the id persistence assigned to a freshly inserted player.
    pub fn from_new(id: PlayerId, new: &NewPlayer) -> Self {
        Self {
            id,
            name: new.name.clone(),
            title: new.title.clone(),
            race: new.race,
            profession: new.profession,
            birthday: new.birthday,
            banned: new.banned,
            experience: new.experience,
            level: new.progression.level,
            until_next_level: new.progression.until_next_level,
        }
    }

    /// Rebuild a player from stored columns.
    ///
    /// Progression is recomputed from `experience` rather than trusted from
    /// storage.
    pub fn restore(
        id: PlayerId,
        name: String,
        title: String,
        race: Option<Race>,
        profession: Option<Profession>,
        birthday: DateTime<Utc>,
        banned: bool,
        experience: i32,
    ) -> Self {
        let progression = Progression::from_experience(experience);
        Self {
            id,
            name,
            title,
            race,
            profession,
            birthday,
            banned,
            experience,
            level: progression.level,
            until_next_level: progression.until_next_level,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn race(&self) -> Option<Race> {
        self.race
    }

    #[inline]
    pub fn profession(&self) -> Option<Profession> {
        self.profession
    }

    #[inline]
    pub fn birthday(&self) -> DateTime<Utc> {
        self.birthday
    }

    #[inline]
    pub fn is_banned(&self) -> bool {
        self.banned
    }

    #[inline]
    pub fn experience(&self) -> i32 {
        self.experience
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[inline]
    pub fn until_next_level(&self) -> i32 {
        self.until_next_level
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = validate_name(name)?.to_string();
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), DomainError> {
        self.title = validate_title(title)?.to_string();
        Ok(())
    }

    pub fn set_race(&mut self, race: Race) {
        self.race = Some(race);
    }

    pub fn set_profession(&mut self, profession: Profession) {
        self.profession = Some(profession);
    }

    pub fn set_birthday(&mut self, birthday: DateTime<Utc>) -> Result<(), DomainError> {
        self.birthday = validate_birthday(birthday)?;
        Ok(())
    }

    pub fn set_banned(&mut self, banned: bool) {
        self.banned = banned;
    }

    /// Sets experience and recomputes level and until-next-level together.
    pub fn set_experience(&mut self, experience: i32) -> Result<(), DomainError> {
        let experience = validate_experience(experience)?;
        let progression = Progression::from_experience(experience);
        self.experience = experience;
        self.level = progression.level;
        self.until_next_level = progression.until_next_level;
        Ok(())
    }

    /// Apply the present fields of `draft` in order: name, title, race,
    /// profession, birthday, banned, experience.
    ///
    /// Stops at the first invalid field. Fields before it have already been
    /// written to `self`, so callers apply drafts to a working copy and drop
    /// it on error.
    pub fn apply_draft(&mut self, draft: PlayerDraft) -> Result<(), DomainError> {
        if let Some(name) = draft.name {
            self.set_name(&name)?;
        }
        if let Some(title) = draft.title {
            self.set_title(&title)?;
        }
        if let Some(race) = draft.race {
            self.set_race(race);
        }
        if let Some(profession) = draft.profession {
            self.set_profession(profession);
        }
        if let Some(birthday) = draft.birthday {
            self.set_birthday(birthday)?;
        }
        if let Some(banned) = draft.banned {
            self.set_banned(banned);
        }
        if let Some(experience) = draft.experience {
            self.set_experience(experience)?;
        }
        Ok(())
    }
}
