use crate::domain::{models::testimonial::Testimonial, ports::TestimonialRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresTestimonialRepo {
    pool: PgPool,
}

impl PostgresTestimonialRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for PostgresTestimonialRepo {
    async fn create(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "INSERT INTO testimonials (id, name, party_type_id, rating, comment, image, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, name, party_type_id, rating, comment, image, created_at"
        )
            .bind(&testimonial.id).bind(&testimonial.name).bind(&testimonial.party_type_id).bind(testimonial.rating)
            .bind(&testimonial.comment).bind(&testimonial.image).bind(testimonial.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<Testimonial>, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "SELECT id, name, party_type_id, rating, comment, image, created_at FROM testimonials ORDER BY created_at DESC LIMIT $1"
        )
            .bind(limit)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_party_type(&self, party_type_id: &str) -> Result<Vec<Testimonial>, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "SELECT id, name, party_type_id, rating, comment, image, created_at FROM testimonials WHERE party_type_id = $1 ORDER BY created_at DESC"
        )
            .bind(party_type_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
