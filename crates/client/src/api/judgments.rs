use shared_types::{AppError, Judgment, JudgmentRequest};
use validator::Validate;

use crate::ApiClient;

impl ApiClient {
    pub async fn list_judgments(&self) -> Result<Vec<Judgment>, AppError> {
        self.get("/api/judgments").await
    }

    pub async fn judge_judgments(&self, judge_id: &str) -> Result<Vec<Judgment>, AppError> {
        self.get(&format!("/api/judgments/judge/{judge_id}")).await
    }

    #[tracing::instrument(skip(self, req), fields(case = %req.case_id))]
    pub async fn record_judgment(&self, req: &JudgmentRequest) -> Result<(), AppError> {
        req.validate()?;
        self.post_json("/api/judgments", req).await
    }
}
