//! In-memory notification inbox.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::domain::UserId;
use crate::notification::{
    domain::{Notification, NotificationId},
    ports::{NotificationRepository, NotificationRepositoryError, NotificationRepositoryResult},
};

/// Thread-safe in-memory notification repository.
///
/// Entries are kept in append order so inbox listings reflect emission
/// order without an explicit sort.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    state: Arc<RwLock<InMemoryInboxState>>,
}

#[derive(Debug, Default)]
struct InMemoryInboxState {
    entries: Vec<Notification>,
    id_index: HashMap<NotificationId, usize>,
}

impl InMemoryNotificationRepository {
    /// Creates an empty in-memory inbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn append(&self, notification: &Notification) -> NotificationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.id_index.contains_key(&notification.id()) {
            return Err(NotificationRepositoryError::DuplicateNotification(
                notification.id(),
            ));
        }

        let position = state.entries.len();
        state.id_index.insert(notification.id(), position);
        state.entries.push(notification.clone());
        Ok(())
    }

    async fn list_for_recipient(
        &self,
        recipient: UserId,
    ) -> NotificationRepositoryResult<Vec<Notification>> {
        let state = self.state.read().map_err(|err| {
            NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .entries
            .iter()
            .filter(|notification| notification.recipient() == recipient)
            .cloned()
            .collect())
    }

    async fn mark_read(&self, id: NotificationId) -> NotificationRepositoryResult<Notification> {
        let mut state = self.state.write().map_err(|err| {
            NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let position = *state
            .id_index
            .get(&id)
            .ok_or(NotificationRepositoryError::NotFound(id))?;
        let notification = state
            .entries
            .get_mut(position)
            .ok_or(NotificationRepositoryError::NotFound(id))?;
        notification.mark_read();
        Ok(notification.clone())
    }
}
