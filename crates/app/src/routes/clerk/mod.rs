mod dashboard;
mod filing;
mod registration;

pub use dashboard::ClerkDashboard;
pub use filing::{CaseFormPage, EditCase};
pub use registration::CaseRegistration;
