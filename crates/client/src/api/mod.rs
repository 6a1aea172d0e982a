//! Typed endpoints, one file per backend resource. Each file adds methods
//! to [`ApiClient`](crate::ApiClient).

pub mod auth;
pub mod cases;
pub mod judgments;
pub mod notifications;
pub mod schedules;
pub mod stats;
pub mod users;

pub use auth::*;
pub use cases::CaseQuery;
pub use stats::*;
