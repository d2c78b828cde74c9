//! SQLite Prompt Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{PromptRecord, PromptRepositoryPort, RepositoryError};

/// SQLite Prompt Repository
pub struct SqlitePromptRepository {
    pool: DbPool,
}

impl SqlitePromptRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PromptRow {
    id: String,
    owner_id: String,
    title: String,
    prompt_text: String,
    category: String,
    is_favorite: i64,
    created_at: String,
}

impl TryFrom<PromptRow> for PromptRecord {
    type Error = RepositoryError;

    fn try_from(row: PromptRow) -> Result<Self, Self::Error> {
        Ok(PromptRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            owner_id: Uuid::parse_str(&row.owner_id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            title: row.title,
            prompt_text: row.prompt_text,
            category: row.category,
            is_favorite: row.is_favorite != 0,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl PromptRepositoryPort for SqlitePromptRepository {
    async fn save(&self, prompt: &PromptRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO writing_prompts (id, owner_id, title, prompt_text, category, is_favorite, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                prompt_text = excluded.prompt_text,
                category = excluded.category,
                is_favorite = excluded.is_favorite
            WHERE writing_prompts.owner_id = excluded.owner_id
            "#,
        )
        .bind(prompt.id.to_string())
        .bind(prompt.owner_id.to_string())
        .bind(&prompt.title)
        .bind(&prompt.prompt_text)
        .bind(&prompt.category)
        .bind(prompt.is_favorite as i64)
        .bind(prompt.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<PromptRecord>, RepositoryError> {
        let row: Option<PromptRow> = sqlx::query_as(
            "SELECT id, owner_id, title, prompt_text, category, is_favorite, created_at \
             FROM writing_prompts WHERE id = ? AND owner_id = ?",
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(PromptRecord::try_from).transpose()
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<PromptRecord>, RepositoryError> {
        let rows: Vec<PromptRow> = sqlx::query_as(
            "SELECT id, owner_id, title, prompt_text, category, is_favorite, created_at \
             FROM writing_prompts WHERE owner_id = ? ORDER BY created_at DESC",
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(PromptRecord::try_from).collect()
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM writing_prompts WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn setup() -> SqlitePromptRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqlitePromptRepository::new(pool)
    }

    fn sample_prompt(owner_id: Uuid) -> PromptRecord {
        PromptRecord {
            id: Uuid::new_v4(),
            owner_id,
            title: "Opening hooks".to_string(),
            prompt_text: "Start with a sound the narrator cannot place.".to_string(),
            category: "story".to_string(),
            is_favorite: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_and_find_round_trip() {
        let repo = setup().await;
        let owner = Uuid::new_v4();
        let prompt = sample_prompt(owner);
        repo.save(&prompt).await.unwrap();

        let found = repo.find_by_id(owner, prompt.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Opening hooks");
        assert_eq!(found.category, "story");
        assert!(!found.is_favorite);
    }

    #[tokio::test]
    async fn test_resave_updates_favorite_flag() {
        let repo = setup().await;
        let owner = Uuid::new_v4();
        let mut prompt = sample_prompt(owner);
        repo.save(&prompt).await.unwrap();

        prompt.is_favorite = true;
        repo.save(&prompt).await.unwrap();

        let all = repo.find_by_owner(owner).await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_favorite);
    }

    #[tokio::test]
    async fn test_list_ordered_by_created_at_desc() {
        let repo = setup().await;
        let owner = Uuid::new_v4();
        let now = Utc::now();

        for (i, title) in ["first", "second", "third"].iter().enumerate() {
            let mut prompt = sample_prompt(owner);
            prompt.title = title.to_string();
            prompt.created_at = now + chrono::Duration::seconds(i as i64);
            repo.save(&prompt).await.unwrap();
        }

        let all = repo.find_by_owner(owner).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_owner_isolation_and_delete() {
        let repo = setup().await;
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();
        let prompt = sample_prompt(owner);
        repo.save(&prompt).await.unwrap();

        assert!(repo.find_by_id(other, prompt.id).await.unwrap().is_none());
        repo.delete(other, prompt.id).await.unwrap();
        assert!(repo.find_by_id(owner, prompt.id).await.unwrap().is_some());

        repo.delete(owner, prompt.id).await.unwrap();
        assert!(repo.find_by_id(owner, prompt.id).await.unwrap().is_none());
    }
}
