//! Repository for the `galleria` table.

use galleria_core::types::ArtworkId;
use sqlx::PgPool;

use crate::models::artwork::{ArtworkRow, NewArtworkRow};

/// Column list for `galleria` queries.
const COLUMNS: &str = "\
    id, name, year, description, source, artist, images, \
    is_active, created_at";

/// Provides data access for artworks.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// List artworks in creation order.
    ///
    /// With `include_inactive = false` only rows with `is_active = true`
    /// are returned.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<ArtworkRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM galleria \
             WHERE ($1 OR is_active = TRUE) \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, ArtworkRow>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Find an artwork by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: ArtworkId,
    ) -> Result<Option<ArtworkRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleria WHERE id = $1");
        sqlx::query_as::<_, ArtworkRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new artwork. The id and `created_at` are assigned by the database.
    pub async fn create(pool: &PgPool, row: &NewArtworkRow) -> Result<ArtworkRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO galleria \
                 (name, year, description, source, artist, images, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArtworkRow>(&query)
            .bind(&row.name)
            .bind(row.year)
            .bind(&row.description)
            .bind(&row.source)
            .bind(&row.artist)
            .bind(&row.images)
            .bind(row.is_active)
            .fetch_one(pool)
            .await
    }

    /// Flip `is_active` in a single statement.
    ///
    /// Returns `None` if no artwork has this id.
    pub async fn toggle_active(
        pool: &PgPool,
        id: ArtworkId,
    ) -> Result<Option<ArtworkRow>, sqlx::Error> {
        let query = format!(
            "UPDATE galleria SET is_active = NOT is_active \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArtworkRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artwork by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: ArtworkId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM galleria WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Tests (require a PostgreSQL instance via DATABASE_URL)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn new_row(name: &str, is_active: bool) -> NewArtworkRow {
        NewArtworkRow {
            name: name.to_string(),
            year: 1889,
            description: String::new(),
            source: String::new(),
            artist: json!({"name": "Vincent van Gogh"}),
            images: json!({}),
            is_active,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn list_filters_inactive(pool: PgPool) {
        ArtworkRepo::create(&pool, &new_row("Starry Night", true)).await.unwrap();
        ArtworkRepo::create(&pool, &new_row("Irises", false)).await.unwrap();

        let all = ArtworkRepo::list(&pool, true).await.unwrap();
        assert_eq!(all.len(), 2);

        let active = ArtworkRepo::list(&pool, false).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Starry Night");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn toggle_twice_restores_state(pool: PgPool) {
        let created = ArtworkRepo::create(&pool, &new_row("Starry Night", true)).await.unwrap();

        let once = ArtworkRepo::toggle_active(&pool, created.id).await.unwrap().unwrap();
        assert!(!once.is_active);
        let twice = ArtworkRepo::toggle_active(&pool, created.id).await.unwrap().unwrap();
        assert!(twice.is_active);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn delete_removes_row(pool: PgPool) {
        let created = ArtworkRepo::create(&pool, &new_row("Starry Night", true)).await.unwrap();

        assert!(ArtworkRepo::delete(&pool, created.id).await.unwrap());
        assert!(!ArtworkRepo::delete(&pool, created.id).await.unwrap());
        assert!(ArtworkRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    }
}
