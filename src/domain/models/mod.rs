pub mod auth;
pub mod booking;
pub mod contact;
pub mod event_plan;
pub mod money;
pub mod party_type;
pub mod service;
pub mod testimonial;
pub mod user;
