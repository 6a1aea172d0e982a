use futures::try_join;
use shared_types::{AdminSummary, AppError, Case, StatusStats};

use crate::ApiClient;

/// Registrar dashboard data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrarOverview {
    pub stats: StatusStats,
    pub submitted: Vec<Case>,
    pub approved: Vec<Case>,
}

impl ApiClient {
    /// Admin dashboard counters. The five requests run concurrently and
    /// the first failure fails the whole batch.
    pub async fn admin_summary(&self) -> Result<AdminSummary, AppError> {
        let (users, cases, closed_cases, roles, recent_users) = try_join!(
            self.user_count(),
            self.case_count(),
            self.closed_case_count(),
            self.role_counts(),
            self.recent_users(),
        )?;
        Ok(AdminSummary {
            users,
            cases,
            closed_cases,
            roles,
            recent_users,
        })
    }

    pub async fn registrar_overview(&self) -> Result<RegistrarOverview, AppError> {
        let (stats, submitted, approved) = try_join!(
            self.status_stats(),
            self.submitted_cases(),
            self.approved_cases(),
        )?;
        Ok(RegistrarOverview {
            stats,
            submitted,
            approved,
        })
    }
}
