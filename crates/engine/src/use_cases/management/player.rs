//! Player management operations.

use std::sync::Arc;

use roster_domain::query::{self, PageRequest, PlayerCriteria, PlayerOrder};
use roster_domain::{NewPlayer, Player, PlayerDraft, PlayerId};

use crate::infrastructure::ports::PlayerRepo;

use super::ManagementError;

pub struct PlayerManagement {
    player: Arc<dyn PlayerRepo>,
}

impl PlayerManagement {
    pub fn new(player: Arc<dyn PlayerRepo>) -> Self {
        Self { player }
    }

    pub async fn get(&self, player_id: PlayerId) -> Result<Option<Player>, ManagementError> {
        tracing::debug!(player_id = %player_id, "Loading player");
        Ok(self.player.get(player_id).await?)
    }

    /// Validate and store a new player.
    pub async fn create(&self, draft: PlayerDraft) -> Result<Player, ManagementError> {
        let new_player = NewPlayer::from_draft(draft).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected player creation");
        })?;

        let player = self.player.insert(&new_player).await?;
        tracing::info!(
            player_id = %player.id(),
            level = player.level(),
            "Player created"
        );
        Ok(player)
    }

    /// Apply the present fields of `draft` to a stored player.
    ///
    /// The draft is applied to a copy; an invalid field aborts before
    /// anything is written.
    pub async fn update(
        &self,
        player_id: PlayerId,
        draft: PlayerDraft,
    ) -> Result<Player, ManagementError> {
        let stored = self
            .player
            .get(player_id)
            .await?
            .ok_or_else(|| ManagementError::not_found("Player", player_id))?;

        let mut updated = stored.clone();
        updated.apply_draft(draft).inspect_err(|e| {
            tracing::warn!(player_id = %player_id, error = %e, "Rejected player update");
        })?;

        let saved = self.player.save(&updated).await?;
        tracing::info!(player_id = %player_id, "Player updated");
        Ok(saved)
    }

    pub async fn delete(&self, player_id: PlayerId) -> Result<(), ManagementError> {
        if self.player.get(player_id).await?.is_none() {
            return Err(ManagementError::not_found("Player", player_id));
        }
        self.player.delete(player_id).await?;
        tracing::info!(player_id = %player_id, "Player deleted");
        Ok(())
    }

    /// Filter, sort, then paginate every stored player.
    pub async fn list(
        &self,
        criteria: &PlayerCriteria,
        order: PlayerOrder,
        page: PageRequest,
    ) -> Result<Vec<Player>, ManagementError> {
        let all = self.player.list_all().await?;
        let scanned = all.len();
        let players = query::list(all, criteria, order, &page);
        tracing::debug!(
            scanned,
            returned = players.len(),
            order = %order,
            page_number = page.page_number(),
            page_size = page.page_size(),
            "Listed players"
        );
        Ok(players)
    }

    /// Number of stored players matching `criteria`.
    pub async fn count(&self, criteria: &PlayerCriteria) -> Result<usize, ManagementError> {
        let all = self.player.list_all().await?;
        Ok(query::count(&all, criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockPlayerRepo, RepoError};
    use chrono::{TimeZone, Utc};
    use mockall::predicate::*;
    use roster_domain::{Profession, Race};

    fn alice_draft() -> PlayerDraft {
        PlayerDraft {
            name: Some("Alice".to_string()),
            title: Some("Hero".to_string()),
            race: Some(Race::Human),
            profession: Some(Profession::Warrior),
            birthday: Some(Utc.with_ymd_and_hms(2500, 1, 1, 0, 0, 0).unwrap()),
            banned: None,
            experience: Some(0),
        }
    }

    fn stored(id: i64, name: &str, experience: i32) -> Player {
        let mut draft = alice_draft();
        draft.name = Some(name.to_string());
        draft.experience = Some(experience);
        let new = NewPlayer::from_draft(draft).unwrap();
        Player::from_new(PlayerId::from_trusted(id), &new)
    }

    fn management(repo: MockPlayerRepo) -> PlayerManagement {
        PlayerManagement::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn create_derives_progression_and_defaults_banned() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_insert()
            .times(1)
            .withf(|new| new.name() == "Alice" && !new.banned())
            .returning(|new| Ok(Player::from_new(PlayerId::from_trusted(1), new)));

        let player = management(repo).create(alice_draft()).await.unwrap();

        assert_eq!(player.id().get(), 1);
        assert_eq!(player.level(), 0);
        assert_eq!(player.until_next_level(), 100);
        assert!(!player.is_banned());
    }

    #[tokio::test]
    async fn create_rejects_invalid_draft_without_storing() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_insert().times(0);

        let mut draft = alice_draft();
        draft.experience = Some(10_000_001);
        let err = management(repo).create(draft).await.unwrap_err();

        assert!(matches!(err, ManagementError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn update_applies_present_fields_and_recomputes_level() {
        let id = PlayerId::from_trusted(7);
        let mut repo = MockPlayerRepo::new();
        repo.expect_get()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored(7, "Alice", 0))));
        repo.expect_save()
            .times(1)
            .withf(|p| p.title() == "Slayer" && p.name() == "Alice" && p.level() == 5)
            .returning(|p| Ok(p.clone()));

        let draft = PlayerDraft {
            title: Some("Slayer".to_string()),
            experience: Some(1500),
            ..Default::default()
        };
        let player = management(repo).update(id, draft).await.unwrap();

        assert_eq!(player.until_next_level(), 600);
    }

    #[tokio::test]
    async fn update_with_invalid_title_saves_nothing() {
        let id = PlayerId::from_trusted(7);
        let mut repo = MockPlayerRepo::new();
        repo.expect_get()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored(7, "Alice", 0))));
        repo.expect_save().times(0);

        let draft = PlayerDraft {
            name: Some("Bob".to_string()),
            title: Some("t".repeat(31)),
            ..Default::default()
        };
        let err = management(repo).update(id, draft).await.unwrap_err();

        assert!(matches!(err, ManagementError::InvalidInput(ref msg) if msg.contains("title")));
    }

    #[tokio::test]
    async fn update_missing_player_is_not_found() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_save().times(0);

        let err = management(repo)
            .update(PlayerId::from_trusted(99), PlayerDraft::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ManagementError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_looks_up_before_deleting() {
        let id = PlayerId::from_trusted(3);
        let mut repo = MockPlayerRepo::new();
        repo.expect_get()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored(3, "Cid", 0))));
        repo.expect_delete().with(eq(id)).times(1).returning(|_| Ok(()));

        management(repo).delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn delete_missing_player_is_not_found() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_delete().times(0);

        let err = management(repo)
            .delete(PlayerId::from_trusted(3))
            .await
            .unwrap_err();

        assert!(matches!(err, ManagementError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_filters_sorts_and_pages() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_list_all().returning(|| {
            Ok(vec![
                stored(1, "Hugo", 1500),
                stored(2, "Anna", 5500),
                stored(3, "Emil", 100),
                stored(4, "Dora", 2100),
                stored(5, "Bert", 6600),
                stored(6, "Carl", 4500),
                stored(7, "Fay", 3000),
            ])
        });
        let criteria = PlayerCriteria {
            min_level: Some(5),
            max_level: Some(10),
            ..Default::default()
        };
        let management = management(repo);

        let page = PageRequest::new(Some(1), Some(2)).unwrap();
        let players = management
            .list(&criteria, PlayerOrder::Name, page)
            .await
            .unwrap();
        let names: Vec<&str> = players.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Dora", "Fay"]);

        assert_eq!(management.count(&criteria).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn storage_failures_propagate() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_list_all()
            .returning(|| Err(RepoError::database("players.list_all", "disk full")));

        let err = management(repo)
            .count(&PlayerCriteria::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ManagementError::Repo(_)));
    }
}
