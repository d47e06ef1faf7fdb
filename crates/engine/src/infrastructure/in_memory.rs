use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_domain::{NewPlayer, Player, PlayerId};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

struct Table {
    next_id: i64,
    rows: BTreeMap<PlayerId, Player>,
}

/// Ephemeral player storage. Ids start at 1 and are never reused.
pub struct InMemoryPlayerRepo {
    table: RwLock<Table>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryPlayerRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Player>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, player: &NewPlayer) -> Result<Player, RepoError> {
        let mut table = self.table.write().await;
        let id = PlayerId::from_trusted(table.next_id);
        table.next_id += 1;
        let stored = Player::from_new(id, player);
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, player: &Player) -> Result<Player, RepoError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&player.id()) {
            Some(row) => {
                *row = player.clone();
                Ok(player.clone())
            }
            None => Err(RepoError::not_found("Player", player.id())),
        }
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Player", id))
    }
}
