use chrono::{NaiveDate, NaiveTime};
use garde::Validate;
use serde::Serialize;
use crate::domain::models::event_plan::{MAX_GUESTS, MIN_GUESTS};
use super::{check, required, FormErrors, REQUIRED};

/// Raw plan form. Built from url-encoded pairs because `services` repeats.
#[derive(Debug, Default, Clone, Serialize, Validate)]
pub struct EventPlanForm {
    #[garde(custom(required))]
    pub party_type: String,
    #[garde(skip)]
    pub services: Vec<String>,
    #[garde(custom(valid_guest_count))]
    pub guest_count: String,
    #[garde(custom(valid_date))]
    pub event_date: String,
    #[garde(custom(valid_time))]
    pub event_time: String,
    #[garde(custom(required), length(chars, max = 255))]
    pub venue: String,
    #[garde(skip)]
    pub special_requests: String,
}

#[derive(Debug)]
pub struct EventPlanInput {
    pub party_type_id: String,
    pub service_ids: Vec<String>,
    pub guest_count: i32,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub special_requests: String,
}

impl EventPlanForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "party_type" => form.party_type = value,
                "services" => {
                    let value = value.trim().to_string();
                    if !value.is_empty() && !form.services.contains(&value) {
                        form.services.push(value);
                    }
                }
                "guest_count" => form.guest_count = value,
                "event_date" => form.event_date = value,
                "event_time" => form.event_time = value,
                "venue" => form.venue = value,
                "special_requests" => form.special_requests = value,
                _ => {}
            }
        }
        form
    }

    /// Syntactic checks only; the handler verifies the referenced ids exist.
    pub fn clean(&self) -> Result<EventPlanInput, FormErrors> {
        let form = Self {
            party_type: self.party_type.trim().to_string(),
            services: self.services.clone(),
            guest_count: self.guest_count.trim().to_string(),
            event_date: self.event_date.trim().to_string(),
            event_time: self.event_time.trim().to_string(),
            venue: self.venue.trim().to_string(),
            special_requests: self.special_requests.trim().to_string(),
        };
        check(&form)?;

        let invalid = |field: &str, message: String| {
            let mut errors = FormErrors::new();
            errors.add(field, message);
            errors
        };

        Ok(EventPlanInput {
            guest_count: parse_guest_count(&form.guest_count).map_err(|m| invalid("guest_count", m))?,
            event_date: parse_date(&form.event_date).map_err(|m| invalid("event_date", m.to_string()))?,
            event_time: parse_time(&form.event_time).map_err(|m| invalid("event_time", m.to_string()))?,
            party_type_id: form.party_type,
            service_ids: form.services,
            venue: form.venue,
            special_requests: form.special_requests,
        })
    }
}

fn parse_guest_count(raw: &str) -> Result<i32, String> {
    let count: i32 = raw.parse().map_err(|_| "Enter a whole number.".to_string())?;
    if count < MIN_GUESTS {
        return Err(format!("Ensure this value is greater than or equal to {}.", MIN_GUESTS));
    }
    if count > MAX_GUESTS {
        return Err(format!("Ensure this value is less than or equal to {}.", MAX_GUESTS));
    }
    Ok(count)
}

fn parse_date(raw: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| "Enter a valid date.")
}

fn parse_time(raw: &str) -> Result<NaiveTime, &'static str> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| "Enter a valid time.")
}

fn valid_guest_count(value: &str, ctx: &()) -> garde::Result {
    required(value, ctx)?;
    parse_guest_count(value).map(|_| ()).map_err(garde::Error::new)
}

fn valid_date(value: &str, ctx: &()) -> garde::Result {
    required(value, ctx)?;
    parse_date(value).map(|_| ()).map_err(garde::Error::new)
}

fn valid_time(value: &str, ctx: &()) -> garde::Result {
    required(value, ctx)?;
    parse_time(value).map(|_| ()).map_err(garde::Error::new)
}
