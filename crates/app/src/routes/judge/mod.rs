mod cases_assigned;
mod dashboard;
mod hearings;
mod judgments;
mod notifications;
mod progress;

pub use cases_assigned::CasesAssigned;
pub use dashboard::JudgeDashboard;
pub use hearings::{ScheduleHearing, ScheduleNewHearing};
pub use judgments::{JudgmentHistory, PlaceJudgment};
pub use notifications::Notifications;
pub use progress::Progress;
