use crate::domain::{models::{money::to_cents, party_type::PartyType}, ports::PartyTypeRepository};
use crate::error::AppError;
use super::rows::{PartyTypeRow, PARTY_TYPE_COLUMNS};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePartyTypeRepo {
    pool: SqlitePool,
}

impl SqlitePartyTypeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartyTypeRepository for SqlitePartyTypeRepo {
    async fn create(&self, party_type: &PartyType) -> Result<PartyType, AppError> {
        let row = sqlx::query_as::<_, PartyTypeRow>(&format!(
            "INSERT INTO party_types ({PARTY_TYPE_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {PARTY_TYPE_COLUMNS}"
        ))
            .bind(&party_type.id)
            .bind(&party_type.name)
            .bind(&party_type.description)
            .bind(to_cents(party_type.base_price)?)
            .bind(&party_type.image)
            .bind(party_type.duration_hours)
            .bind(party_type.max_guests)
            .bind(party_type.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PartyType>, AppError> {
        let row = sqlx::query_as::<_, PartyTypeRow>(&format!(
            "SELECT {PARTY_TYPE_COLUMNS} FROM party_types WHERE id = ?"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.map(Into::into))
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<PartyType>, AppError> {
        // LIMIT -1 means "no limit" in SQLite
        let rows = sqlx::query_as::<_, PartyTypeRow>(&format!(
            "SELECT {PARTY_TYPE_COLUMNS} FROM party_types ORDER BY created_at DESC LIMIT ?"
        ))
            .bind(limit.unwrap_or(-1))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
