use crate::domain::{
    models::{event_plan::EventPlan, money::to_cents, service::Service},
    ports::EventPlanRepository,
};
use crate::error::AppError;
use super::rows::{EventPlanRow, ServiceRow, EVENT_PLAN_COLUMNS};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct PostgresEventPlanRepo {
    pool: PgPool,
}

impl PostgresEventPlanRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventPlanRepository for PostgresEventPlanRepo {
    async fn create(&self, plan: &EventPlan, service_ids: &[String]) -> Result<EventPlan, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, EventPlanRow>(&format!(
            "INSERT INTO event_plans ({EVENT_PLAN_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING {EVENT_PLAN_COLUMNS}"
        ))
            .bind(&plan.id).bind(&plan.user_id).bind(&plan.party_type_id).bind(plan.guest_count)
            .bind(plan.event_date).bind(plan.event_time).bind(&plan.venue).bind(&plan.special_requests)
            .bind(to_cents(plan.total_cost)?).bind(plan.created_at).bind(plan.updated_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        for service_id in service_ids {
            sqlx::query("INSERT INTO event_plan_services (event_plan_id, service_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
                .bind(&plan.id).bind(service_id)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created.into())
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<EventPlan>, AppError> {
        let row = sqlx::query_as::<_, EventPlanRow>(&format!(
            "SELECT {EVENT_PLAN_COLUMNS} FROM event_plans WHERE user_id = $1 AND id = $2"
        ))
            .bind(user_id).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?;
        Ok(row.map(Into::into))
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<EventPlan>, AppError> {
        let rows = sqlx::query_as::<_, EventPlanRow>(&format!(
            "SELECT {EVENT_PLAN_COLUMNS} FROM event_plans WHERE user_id = $1 ORDER BY created_at DESC"
        ))
            .bind(user_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_services(&self, plan_id: &str) -> Result<Vec<Service>, AppError> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            "SELECT s.id, s.name, s.description, s.price_cents, s.icon, s.image
             FROM services s
             JOIN event_plan_services eps ON eps.service_id = s.id
             WHERE eps.event_plan_id = $1
             ORDER BY s.name ASC"
        )
            .bind(plan_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_total(&self, plan_id: &str, total_cost: Decimal) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE event_plans SET total_cost_cents = $1, updated_at = $2 WHERE id = $3")
            .bind(to_cents(total_cost)?).bind(Utc::now()).bind(plan_id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Event plan not found".into())); }
        Ok(())
    }
}
