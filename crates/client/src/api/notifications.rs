use shared_types::{sort_notifications, AppError, Notification};

use crate::ApiClient;

impl ApiClient {
    /// Notifications for `user_id`, unread first, newest first.
    pub async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>, AppError> {
        let mut list: Vec<Notification> = self.get(&format!("/api/notifications/{user_id}")).await?;
        sort_notifications(&mut list);
        Ok(list)
    }

    /// Ask the backend to generate notifications for newly assigned work.
    pub async fn sync_notifications(&self, user_id: &str) -> Result<(), AppError> {
        self.post_empty(&format!("/api/notifications/sync/{user_id}"))
            .await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<(), AppError> {
        self.patch_empty(&format!("/api/notifications/{id}/read"))
            .await
    }
}
