use crate::domain::{models::{money::to_cents, service::Service}, ports::ServiceRepository};
use crate::error::AppError;
use super::rows::{ServiceRow, SERVICE_COLUMNS};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqliteServiceRepo {
    pool: SqlitePool,
}

impl SqliteServiceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for SqliteServiceRepo {
    async fn create(&self, service: &Service) -> Result<Service, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(&format!(
            "INSERT INTO services ({SERVICE_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?) RETURNING {SERVICE_COLUMNS}"
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

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!("SELECT {SERVICE_COLUMNS} FROM services WHERE id IN ("));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(") ORDER BY name ASC");

        let rows = builder
            .build_query_as::<ServiceRow>()
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
