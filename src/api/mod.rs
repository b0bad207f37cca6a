pub mod client;
pub mod models;

pub use client::{DEFAULT_API_BASE, ReqwestTimeTrackingClient, TimeTrackingApi};
pub use models::{ApiUser, NewTimeEntry, TimeEntry};
