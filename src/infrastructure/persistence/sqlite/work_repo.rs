//! SQLite Work Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{RepositoryError, WorkRecord, WorkRepositoryPort};
use crate::domain::ContentType;

/// SQLite Work Repository
pub struct SqliteWorkRepository {
    pool: DbPool,
}

impl SqliteWorkRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct WorkRow {
    id: String,
    owner_id: String,
    title: String,
    content: String,
    content_type: String,
    prompt: Option<String>,
    is_public: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<WorkRow> for WorkRecord {
    type Error = RepositoryError;

    fn try_from(row: WorkRow) -> Result<Self, Self::Error> {
        Ok(WorkRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            owner_id: Uuid::parse_str(&row.owner_id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            title: row.title,
            content: row.content,
            content_type: ContentType::from_str(&row.content_type).unwrap_or_default(),
            prompt: row.prompt,
            is_public: row.is_public != 0,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339(&row.updated_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl WorkRepositoryPort for SqliteWorkRepository {
    async fn save(&self, work: &WorkRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO creative_works (id, owner_id, title, content, content_type, prompt, is_public, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                content = excluded.content,
                content_type = excluded.content_type,
                prompt = excluded.prompt,
                is_public = excluded.is_public,
                updated_at = excluded.updated_at
            WHERE creative_works.owner_id = excluded.owner_id
            "#,
        )
        .bind(work.id.to_string())
        .bind(work.owner_id.to_string())
        .bind(&work.title)
        .bind(&work.content)
        .bind(work.content_type.as_str())
        .bind(&work.prompt)
        .bind(work.is_public as i64)
        .bind(work.created_at.to_rfc3339())
        .bind(work.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<WorkRecord>, RepositoryError> {
        let row: Option<WorkRow> = sqlx::query_as(
            "SELECT id, owner_id, title, content, content_type, prompt, is_public, created_at, updated_at \
             FROM creative_works WHERE id = ? AND owner_id = ?",
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(WorkRecord::try_from).transpose()
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<WorkRecord>, RepositoryError> {
        let rows: Vec<WorkRow> = sqlx::query_as(
            "SELECT id, owner_id, title, content, content_type, prompt, is_public, created_at, updated_at \
             FROM creative_works WHERE owner_id = ? ORDER BY updated_at DESC",
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(WorkRecord::try_from).collect()
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM creative_works WHERE id = ? AND owner_id = ?")
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

    async fn setup() -> SqliteWorkRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteWorkRepository::new(pool)
    }

    fn sample_work(owner_id: Uuid) -> WorkRecord {
        let now = Utc::now();
        WorkRecord {
            id: Uuid::new_v4(),
            owner_id,
            title: "The Lighthouse".to_string(),
            content: "The keeper climbed the stairs.".to_string(),
            content_type: ContentType::Story,
            prompt: Some("a lighthouse keeper finds something strange".to_string()),
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_save_and_find_round_trip() {
        let repo = setup().await;
        let owner = Uuid::new_v4();
        let work = sample_work(owner);

        repo.save(&work).await.unwrap();

        let found = repo.find_by_id(owner, work.id).await.unwrap().unwrap();
        assert_eq!(found.title, "The Lighthouse");
        assert_eq!(found.content_type, ContentType::Story);
        assert_eq!(
            found.prompt.as_deref(),
            Some("a lighthouse keeper finds something strange")
        );
        assert!(!found.is_public);
    }

    #[tokio::test]
    async fn test_resave_mutates_in_place() {
        let repo = setup().await;
        let owner = Uuid::new_v4();
        let mut work = sample_work(owner);
        repo.save(&work).await.unwrap();

        work.content = "The keeper climbed the stairs. The lamp was dark.".to_string();
        work.updated_at = work.updated_at + chrono::Duration::seconds(5);
        repo.save(&work).await.unwrap();

        let all = repo.find_by_owner(owner).await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].content.contains("The lamp was dark."));
        assert!(all[0].updated_at > all[0].created_at);
    }

    #[tokio::test]
    async fn test_list_ordered_by_updated_at_desc() {
        let repo = setup().await;
        let owner = Uuid::new_v4();
        let now = Utc::now();

        for (i, title) in ["oldest", "middle", "newest"].iter().enumerate() {
            let mut work = sample_work(owner);
            work.title = title.to_string();
            work.created_at = now + chrono::Duration::seconds(i as i64);
            work.updated_at = now + chrono::Duration::seconds(i as i64);
            repo.save(&work).await.unwrap();
        }

        let all = repo.find_by_owner(owner).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_owner_isolation() {
        let repo = setup().await;
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();
        let work = sample_work(owner);
        repo.save(&work).await.unwrap();

        // 其他用户看不到，也删不掉
        assert!(repo.find_by_id(other, work.id).await.unwrap().is_none());
        assert!(repo.find_by_owner(other).await.unwrap().is_empty());
        repo.delete(other, work.id).await.unwrap();
        assert!(repo.find_by_id(owner, work.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = setup().await;
        let owner = Uuid::new_v4();
        let work = sample_work(owner);
        repo.save(&work).await.unwrap();

        repo.delete(owner, work.id).await.unwrap();
        assert!(repo.find_by_id(owner, work.id).await.unwrap().is_none());
    }
}
