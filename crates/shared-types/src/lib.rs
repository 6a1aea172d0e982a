pub mod error;
pub mod feature_flags;

pub mod common;
pub mod models;

// CourtSys records
pub mod case;
pub mod judgment;
pub mod lifecycle;
pub mod notification;
pub mod schedule;

pub use error::*;
pub use feature_flags::*;

pub use common::*;
pub use models::*;

pub use case::*;
pub use judgment::*;
pub use lifecycle::*;
pub use notification::*;
pub use schedule::*;
