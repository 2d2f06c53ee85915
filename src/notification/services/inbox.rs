//! Per-user inbox reads and read-flag management.

use crate::directory::domain::UserId;
use crate::notification::{
    domain::{Notification, NotificationId},
    ports::{NotificationRepository, NotificationRepositoryResult},
};
use std::sync::Arc;

/// Read-side service over a user's notification inbox.
#[derive(Clone)]
pub struct InboxService<N>
where
    N: NotificationRepository,
{
    repository: Arc<N>,
}

impl<N> InboxService<N>
where
    N: NotificationRepository,
{
    /// Creates a new inbox service.
    #[must_use]
    pub const fn new(repository: Arc<N>) -> Self {
        Self { repository }
    }

    /// Returns every notification addressed to the user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the listing fails.
    pub async fn notifications_for(
        &self,
        recipient: UserId,
    ) -> NotificationRepositoryResult<Vec<Notification>> {
        self.repository.list_for_recipient(recipient).await
    }

    /// Returns the number of unread notifications for the user.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the listing fails.
    pub async fn unread_count(&self, recipient: UserId) -> NotificationRepositoryResult<usize> {
        let notifications = self.repository.list_for_recipient(recipient).await?;
        Ok(notifications
            .iter()
            .filter(|notification| !notification.is_read())
            .count())
    }

    /// Marks a notification as read and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationRepositoryError::NotFound`] when the
    /// notification does not exist.
    ///
    /// [`NotificationRepositoryError::NotFound`]: crate::notification::ports::NotificationRepositoryError::NotFound
    pub async fn mark_read(
        &self,
        id: NotificationId,
    ) -> NotificationRepositoryResult<Notification> {
        self.repository.mark_read(id).await
    }
}
