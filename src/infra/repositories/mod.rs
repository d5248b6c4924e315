pub mod rows;

pub mod sqlite_auth_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_contact_repo;
pub mod sqlite_event_plan_repo;
pub mod sqlite_party_type_repo;
pub mod sqlite_service_repo;
pub mod sqlite_testimonial_repo;
pub mod sqlite_user_repo;

pub mod postgres_auth_repo;
pub mod postgres_booking_repo;
pub mod postgres_contact_repo;
pub mod postgres_event_plan_repo;
pub mod postgres_party_type_repo;
pub mod postgres_service_repo;
pub mod postgres_testimonial_repo;
pub mod postgres_user_repo;
