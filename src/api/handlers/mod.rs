pub mod auth;
pub mod booking;
pub mod contact;
pub mod dashboard;
pub mod event_plan;
pub mod health;
pub mod pages;
