use shared_types::{
    AppError, CountResponse, CreateUserRequest, RoleCounts, UpdateUserRequest, User,
};
use validator::Validate;

use crate::ApiClient;

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get("/api/users").await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        self.get(&format!("/api/users/{id}")).await
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn create_user(&self, req: &CreateUserRequest) -> Result<(), AppError> {
        req.validate()?;
        self.post_json("/api/users", req).await
    }

    pub async fn update_user(&self, id: &str, req: &UpdateUserRequest) -> Result<(), AppError> {
        self.put_json(&format!("/api/users/{id}"), req).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/api/users/{id}")).await
    }

    pub async fn user_count(&self) -> Result<u64, AppError> {
        self.get::<CountResponse>("/api/users/count")
            .await
            .map(|c| c.count)
    }

    pub async fn recent_users(&self) -> Result<Vec<User>, AppError> {
        self.get("/api/users/recent").await
    }

    pub async fn role_counts(&self) -> Result<RoleCounts, AppError> {
        self.get("/api/users/roles/count").await
    }

    pub async fn list_judges(&self) -> Result<Vec<User>, AppError> {
        self.get("/api/users/judges").await
    }
}
