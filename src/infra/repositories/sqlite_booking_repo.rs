use crate::domain::{models::{booking::Booking, money::to_cents}, ports::BookingRepository};
use crate::error::AppError;
use super::rows::{into_bookings, BookingRow, BOOKING_COLUMNS};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, BookingRow>(&format!(
            "INSERT INTO bookings ({BOOKING_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {BOOKING_COLUMNS}"
        ))
            .bind(&booking.id).bind(&booking.user_id).bind(&booking.event_plan_id).bind(booking.status.as_str())
            .bind(to_cents(booking.payment_amount)?).bind(to_cents(booking.advance_payment)?).bind(booking.is_paid)
            .bind(booking.booking_date).bind(&booking.confirmation_code)
            .fetch_one(&self.pool).await.map_err(AppError::Database)?
            .try_into()
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, BookingRow>(&format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = ? AND id = ?"))
            .bind(user_id).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .map(Booking::try_from)
            .transpose()
    }

    async fn find_by_event_plan(&self, event_plan_id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, BookingRow>(&format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE event_plan_id = ?"))
            .bind(event_plan_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .map(Booking::try_from)
            .transpose()
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = ? ORDER BY booking_date DESC"))
            .bind(user_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;
        into_bookings(rows)
    }
}
