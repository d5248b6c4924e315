use crate::domain::{models::{money::to_cents, service::Service}, ports::ServiceRepository};
use crate::error::AppError;
use super::rows::{ServiceRow, SERVICE_COLUMNS};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresServiceRepo {
    pool: PgPool,
}

impl PostgresServiceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for PostgresServiceRepo {
    async fn create(&self, service: &Service) -> Result<Service, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(&format!(
            "INSERT INTO services ({SERVICE_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {SERVICE_COLUMNS}"
        ))
            .bind(&service.id)
            .bind(&service.name)
            .bind(&service.description)
            .bind(to_cents(service.price)?)
            .bind(&service.icon)
            .bind(&service.image)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.into())
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Service>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ServiceRow>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE id = ANY($1) ORDER BY name ASC"
        ))
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list(&self) -> Result<Vec<Service>, AppError> {
        let rows = sqlx::query_as::<_, ServiceRow>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services ORDER BY name ASC"
        ))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
