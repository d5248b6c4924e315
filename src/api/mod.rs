pub mod dtos;
pub mod extractors;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod render;
pub mod router;
