//! Field validation rules for player records.
//!
//! The `is_*` predicates answer pass/fail. The `validate_*` forms return the
//! value or a `DomainError::Validation` naming the field, and are what the
//! create and update paths use.

use chrono::{DateTime, Datelike, Utc};

use super::progression::{MAX_EXPERIENCE, MIN_EXPERIENCE};
use crate::entities::PlayerDraft;
use crate::error::DomainError;

/// Maximum length of a player name.
pub const MAX_NAME_LENGTH: usize = 12;

/// Maximum length of a player title.
pub const MAX_TITLE_LENGTH: usize = 30;

/// Earliest accepted birthday year.
pub const MIN_BIRTHDAY_YEAR: i32 = 2000;

/// Latest accepted birthday year.
pub const MAX_BIRTHDAY_YEAR: i32 = 3000;

/// Length is counted in characters, not bytes.
pub fn is_string_valid(s: Option<&str>, max_length: usize) -> bool {
    match s {
        Some(s) => !s.is_empty() && s.chars().count() <= max_length,
        None => false,
    }
}

pub fn is_name_valid(name: Option<&str>) -> bool {
    is_string_valid(name, MAX_NAME_LENGTH)
}

pub fn is_title_valid(title: Option<&str>) -> bool {
    is_string_valid(title, MAX_TITLE_LENGTH)
}

pub fn is_birthday_valid(birthday: Option<DateTime<Utc>>) -> bool {
    birthday.is_some_and(|date| (MIN_BIRTHDAY_YEAR..=MAX_BIRTHDAY_YEAR).contains(&date.year()))
}

pub fn is_experience_valid(experience: Option<i32>) -> bool {
    experience.is_some_and(|exp| (MIN_EXPERIENCE..=MAX_EXPERIENCE).contains(&exp))
}

/// Race, profession and banned are unconstrained.
pub fn is_player_valid(draft: Option<&PlayerDraft>) -> bool {
    draft.is_some_and(|draft| {
        is_name_valid(draft.name.as_deref())
            && is_title_valid(draft.title.as_deref())
            && is_birthday_valid(draft.birthday)
            && is_experience_valid(draft.experience)
    })
}

pub fn validate_name(name: &str) -> Result<&str, DomainError> {
    if is_name_valid(Some(name)) {
        Ok(name)
    } else {
        Err(DomainError::validation(format!(
            "name must be 1 to {} characters",
            MAX_NAME_LENGTH
        )))
    }
}

pub fn validate_title(title: &str) -> Result<&str, DomainError> {
    if is_title_valid(Some(title)) {
        Ok(title)
    } else {
        Err(DomainError::validation(format!(
            "title must be 1 to {} characters",
            MAX_TITLE_LENGTH
        )))
    }
}

pub fn validate_birthday(birthday: DateTime<Utc>) -> Result<DateTime<Utc>, DomainError> {
    if is_birthday_valid(Some(birthday)) {
        Ok(birthday)
    } else {
        Err(DomainError::validation(format!(
            "birthday year must be between {} and {}, got {}",
            MIN_BIRTHDAY_YEAR,
            MAX_BIRTHDAY_YEAR,
            birthday.year()
        )))
    }
}

pub fn validate_experience(experience: i32) -> Result<i32, DomainError> {
    if is_experience_valid(Some(experience)) {
        Ok(experience)
    } else {
        Err(DomainError::validation(format!(
            "experience must be between {} and {}, got {}",
            MIN_EXPERIENCE, MAX_EXPERIENCE, experience
        )))
    }
}

/// Unwraps a required field, reporting it by name when absent.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::validation(format!("{} is required", field)))
}
