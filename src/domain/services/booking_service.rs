use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use tracing::warn;

/// Inserts tried before giving up on finding a free confirmation code.
pub const MAX_CODE_ATTEMPTS: u32 = 5;

#[derive(Debug)]
pub enum Placement {
    Created(Booking),
    /// The plan was booked by a concurrent request first.
    AlreadyBooked(Booking),
}

impl Placement {
    pub fn booking(&self) -> &Booking {
        match self {
            Placement::Created(b) | Placement::AlreadyBooked(b) => b,
        }
    }
}

/// Inserts the booking. A uniqueness violation either means the plan already
/// has a booking, which is returned instead, or that the confirmation code is
/// taken, in which case `next_code` supplies another one.
pub async fn place_booking(
    repo: &dyn BookingRepository,
    mut booking: Booking,
    mut next_code: impl FnMut() -> String + Send,
) -> Result<Placement, AppError> {
    let mut attempt = 1;
    loop {
        match repo.create(&booking).await {
            Ok(created) => return Ok(Placement::Created(created)),
            Err(e) if e.is_unique_violation() => {
                if let Some(existing) = repo.find_by_event_plan(&booking.event_plan_id).await? {
                    warn!("Plan {} was booked concurrently, using booking {}", booking.event_plan_id, existing.id);
                    return Ok(Placement::AlreadyBooked(existing));
                }
                if attempt >= MAX_CODE_ATTEMPTS {
                    return Err(AppError::InternalWithMsg(format!(
                        "No unique confirmation code after {} attempts", attempt
                    )));
                }
                warn!("Confirmation code collision on attempt {}, retrying", attempt);
                booking.confirmation_code = next_code();
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
