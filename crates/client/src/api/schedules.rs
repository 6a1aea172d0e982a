use shared_types::{AppError, Schedule, ScheduleRequest};
use validator::Validate;

use crate::ApiClient;

impl ApiClient {
    pub async fn list_schedules(&self) -> Result<Vec<Schedule>, AppError> {
        self.get("/api/schedules").await
    }

    /// Creates a hearing slot. Every field must be filled in.
    #[tracing::instrument(skip(self, req), fields(case = %req.case_id))]
    pub async fn create_schedule(&self, req: &ScheduleRequest) -> Result<(), AppError> {
        req.validate()?;
        self.post_json("/api/schedules", req).await
    }

    pub async fn update_schedule(&self, id: &str, req: &ScheduleRequest) -> Result<(), AppError> {
        req.validate()?;
        self.put_json(&format!("/api/schedules/{id}"), req).await
    }

    pub async fn delete_schedule(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/api/schedules/{id}")).await
    }

    pub async fn judge_schedules(&self, judge_id: &str) -> Result<Vec<Schedule>, AppError> {
        self.get(&format!("/api/schedules/judge/{judge_id}")).await
    }

    pub async fn judge_progress(&self, judge_id: &str) -> Result<Vec<Schedule>, AppError> {
        self.get(&format!("/api/schedules/progress/{judge_id}")).await
    }
}
