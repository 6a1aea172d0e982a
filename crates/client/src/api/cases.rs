use serde::Serialize;
use shared_types::{
    AppError, AssignJudgeRequest, Case, CaseRequest, CaseStatus, ClerkSummary,
    ClosedCountResponse, CountResponse, RegisterCaseRequest, RegistrarDecisionRequest,
    StatusStats,
};
use validator::Validate;

use crate::ApiClient;

/// Optional filters for `GET /api/cases`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clerk_id: Option<String>,
}

impl CaseQuery {
    pub fn status(status: CaseStatus) -> Self {
        Self {
            status: Some(status.label().to_string()),
            ..Default::default()
        }
    }

    pub fn clerk(clerk_id: impl Into<String>) -> Self {
        Self {
            clerk_id: Some(clerk_id.into()),
            ..Default::default()
        }
    }
}

impl ApiClient {
    pub async fn list_cases(&self) -> Result<Vec<Case>, AppError> {
        self.get("/api/cases").await
    }

    pub async fn query_cases(&self, query: &CaseQuery) -> Result<Vec<Case>, AppError> {
        self.get_query("/api/cases", query).await
    }

    pub async fn get_case(&self, id: &str) -> Result<Case, AppError> {
        self.get(&format!("/api/cases/{id}")).await
    }

    #[tracing::instrument(skip(self, req), fields(title = %req.title))]
    pub async fn create_case(&self, req: &CaseRequest) -> Result<(), AppError> {
        req.validate()?;
        self.post_json("/api/cases", req).await
    }

    pub async fn update_case(&self, id: &str, req: &CaseRequest) -> Result<(), AppError> {
        req.validate()?;
        self.put_json(&format!("/api/cases/{id}"), req).await
    }

    pub async fn delete_case(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/api/cases/{id}")).await
    }

    // ── Lifecycle actions ──────────────────────────────────────────

    /// Clerk: Filed → Registered.
    pub async fn register_case(&self, id: &str, clerk_id: &str) -> Result<(), AppError> {
        let body = RegisterCaseRequest {
            clerk_id: clerk_id.to_string(),
        };
        self.put_json(&format!("/api/cases/{id}/register"), &body).await
    }

    /// Clerk: Registered → Submitted.
    pub async fn submit_to_registrar(&self, id: &str) -> Result<(), AppError> {
        self.put_empty(&format!("/api/cases/{id}/submit-to-registrar"))
            .await
    }

    /// Registrar: Submitted → Approved.
    pub async fn approve_case(&self, id: &str, registrar_name: &str) -> Result<(), AppError> {
        let body = RegistrarDecisionRequest {
            registrar_name: registrar_name.to_string(),
        };
        self.post_json(&format!("/api/cases/approve/{id}"), &body).await
    }

    /// Registrar: Submitted → Disapproved.
    pub async fn disapprove_case(&self, id: &str, registrar_name: &str) -> Result<(), AppError> {
        let body = RegistrarDecisionRequest {
            registrar_name: registrar_name.to_string(),
        };
        self.post_json(&format!("/api/cases/disapprove/{id}"), &body).await
    }

    /// Registrar: Approved → Assigned.
    pub async fn assign_judge(
        &self,
        id: &str,
        judge_id: &str,
        registrar_name: &str,
    ) -> Result<(), AppError> {
        if judge_id.trim().is_empty() {
            return Err(AppError::bad_request("Please select a judge before assigning."));
        }
        let body = AssignJudgeRequest {
            judge_id: judge_id.to_string(),
            registrar_name: registrar_name.to_string(),
        };
        self.post_json(&format!("/api/cases/endorse/{id}"), &body).await
    }

    // ── Views ──────────────────────────────────────────────────────

    pub async fn assigned_cases(&self, judge_id: &str) -> Result<Vec<Case>, AppError> {
        self.get(&format!("/api/cases/assigned/{judge_id}")).await
    }

    pub async fn submitted_cases(&self) -> Result<Vec<Case>, AppError> {
        self.get("/api/cases/submitted").await
    }

    pub async fn approved_cases(&self) -> Result<Vec<Case>, AppError> {
        self.get("/api/cases/approved").await
    }

    pub async fn disapproved_cases(&self) -> Result<Vec<Case>, AppError> {
        self.get("/api/cases/disapproved").await
    }

    // ── Aggregates ─────────────────────────────────────────────────

    pub async fn case_count(&self) -> Result<u64, AppError> {
        self.get::<CountResponse>("/api/cases/count")
            .await
            .map(|c| c.count)
    }

    pub async fn closed_case_count(&self) -> Result<u64, AppError> {
        self.get::<ClosedCountResponse>("/api/cases/closed")
            .await
            .map(|c| c.closed_count)
    }

    pub async fn status_stats(&self) -> Result<StatusStats, AppError> {
        self.get("/api/cases/status-stats").await
    }

    pub async fn judge_status_stats(&self, judge_id: &str) -> Result<StatusStats, AppError> {
        self.get(&format!("/api/cases/status-stats/judge/{judge_id}"))
            .await
    }

    pub async fn clerk_summary(&self, clerk_id: &str) -> Result<ClerkSummary, AppError> {
        self.get_query("/api/cases/summary", &[("clerkId", clerk_id)])
            .await
    }
}
