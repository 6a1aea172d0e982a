mod assignment;
mod dashboard;
mod queues;

pub use assignment::ApprovedCases;
pub use dashboard::RegistrarDashboard;
pub use queues::{AssignedCases, DisapprovedCases, SubmittedCases};
