mod cases;
mod dashboard;
mod schedules;
mod users;

pub use cases::ManageCases;
pub use dashboard::AdminDashboard;
pub use schedules::ManageSchedules;
pub use users::{CreateUser, ManageUsers};
