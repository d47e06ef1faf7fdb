//! Repository port traits for database access.

use async_trait::async_trait;
use roster_domain::{NewPlayer, Player, PlayerId};

use super::error::RepoError;

// =============================================================================
// Player Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;

    /// Every stored player in ascending id order.
    async fn list_all(&self) -> Result<Vec<Player>, RepoError>;

    /// Store a new player; the store assigns its id.
    async fn insert(&self, player: &NewPlayer) -> Result<Player, RepoError>;

    /// Overwrite an existing player by id.
    ///
    /// Returns `RepoError::NotFound` if the id is not stored.
    async fn save(&self, player: &Player) -> Result<Player, RepoError>;

    /// Returns `RepoError::NotFound` if the id is not stored.
    async fn delete(&self, id: PlayerId) -> Result<(), RepoError>;
}
