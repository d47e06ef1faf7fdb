//! SQLite-backed player storage.

use async_trait::async_trait;
use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use roster_domain::{NewPlayer, Player, PlayerId, Profession, Race};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

const SELECT_COLUMNS: &str =
    "SELECT id, name, title, race, profession, birthday, banned, experience FROM players";

/// SQLite implementation of player storage.
///
/// Birthdays are stored as epoch milliseconds. `level` and
/// `until_next_level` are written alongside experience for ad-hoc queries
/// but recomputed on read.
pub struct SqlitePlayerRepo {
    pool: SqlitePool,
}

impl SqlitePlayerRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepoError::database("players.connect", e))?;
            }
        }

        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("players.connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                race TEXT,
                profession TEXT,
                birthday INTEGER NOT NULL,
                banned INTEGER NOT NULL DEFAULT 0,
                experience INTEGER NOT NULL,
                level INTEGER NOT NULL,
                until_next_level INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("players.migrate", e))?;

        tracing::debug!(db_path, "Player table ready");
        Ok(Self { pool })
    }
}

fn player_from_row(row: &SqliteRow) -> Result<Player, RepoError> {
    let id: i64 = row.try_get("id").map_err(RepoError::serialization)?;
    let name: String = row.try_get("name").map_err(RepoError::serialization)?;
    let title: String = row.try_get("title").map_err(RepoError::serialization)?;
    let race: Option<String> = row.try_get("race").map_err(RepoError::serialization)?;
    let profession: Option<String> =
        row.try_get("profession").map_err(RepoError::serialization)?;
    let birthday_ms: i64 = row.try_get("birthday").map_err(RepoError::serialization)?;
    let banned: bool = row.try_get("banned").map_err(RepoError::serialization)?;
    let experience: i32 = row.try_get("experience").map_err(RepoError::serialization)?;

    let race = race
        .as_deref()
        .map(str::parse::<Race>)
        .transpose()
        .map_err(RepoError::serialization)?;
    let profession = profession
        .as_deref()
        .map(str::parse::<Profession>)
        .transpose()
        .map_err(RepoError::serialization)?;
    let birthday = DateTime::from_timestamp_millis(birthday_ms).ok_or_else(|| {
        RepoError::serialization(format!("birthday out of range: {}", birthday_ms))
    })?;

    Ok(Player::restore(
        PlayerId::from_trusted(id),
        name,
        title,
        race,
        profession,
        birthday,
        banned,
        experience,
    ))
}

#[async_trait]
impl PlayerRepo for SqlitePlayerRepo {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.get", e))?;

        row.as_ref().map(player_from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Player>, RepoError> {
        let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.list_all", e))?;

        rows.iter().map(player_from_row).collect()
    }

    async fn insert(&self, player: &NewPlayer) -> Result<Player, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO players
                (name, title, race, profession, birthday, banned, experience, level, until_next_level)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(player.name())
        .bind(player.title())
        .bind(player.race().map(|r| r.as_str()))
        .bind(player.profession().map(|p| p.as_str()))
        .bind(player.birthday().timestamp_millis())
        .bind(player.banned())
        .bind(player.experience())
        .bind(player.level())
        .bind(player.until_next_level())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.insert", e))?;

        let id = PlayerId::from_trusted(result.last_insert_rowid());
        Ok(Player::from_new(id, player))
    }

    async fn save(&self, player: &Player) -> Result<Player, RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE players SET
                name = ?,
                title = ?,
                race = ?,
                profession = ?,
                birthday = ?,
                banned = ?,
                experience = ?,
                level = ?,
                until_next_level = ?
            WHERE id = ?
            "#,
        )
        .bind(player.name())
        .bind(player.title())
        .bind(player.race().map(|r| r.as_str()))
        .bind(player.profession().map(|p| p.as_str()))
        .bind(player.birthday().timestamp_millis())
        .bind(player.is_banned())
        .bind(player.experience())
        .bind(player.level())
        .bind(player.until_next_level())
        .bind(player.id().get())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.save", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Player", player.id()));
        }
        Ok(player.clone())
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Player", id));
        }
        Ok(())
    }
}
