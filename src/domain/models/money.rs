use rust_decimal::Decimal;
use crate::error::AppError;

/// Amounts are stored as integer cents so both storage engines share one encoding.
pub fn to_cents(amount: Decimal) -> Result<i64, AppError> {
    let mut scaled = amount.round_dp(2);
    scaled.rescale(2);
    i64::try_from(scaled.mantissa())
        .map_err(|_| AppError::Validation(format!("Amount {} is out of range", amount)))
}

pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
