//! Notification entity stored in a user's inbox.

use super::{NotificationDraft, NotificationId};
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A persisted per-user message.
///
/// Immutable once created except for the read flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    recipient: UserId,
    title: String,
    message: String,
    link: Option<String>,
    is_read: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedNotificationData {
    /// Persisted notification identifier.
    pub id: NotificationId,
    /// Persisted recipient identifier.
    pub recipient: UserId,
    /// Persisted notification title.
    pub title: String,
    /// Persisted message body.
    pub message: String,
    /// Persisted deep-link, if any.
    pub link: Option<String>,
    /// Persisted read flag.
    pub is_read: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Materialises a draft into an unread notification record.
    #[must_use]
    pub fn new(draft: NotificationDraft, clock: &impl Clock) -> Self {
        Self {
            id: NotificationId::new(),
            recipient: draft.recipient(),
            title: draft.title().to_owned(),
            message: draft.message().to_owned(),
            link: draft.link().map(ToOwned::to_owned),
            is_read: false,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a notification from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedNotificationData) -> Self {
        Self {
            id: data.id,
            recipient: data.recipient,
            title: data.title,
            message: data.message,
            link: data.link,
            is_read: data.is_read,
            created_at: data.created_at,
        }
    }

    /// Returns the notification identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the recipient user identifier.
    #[must_use]
    pub const fn recipient(&self) -> UserId {
        self.recipient
    }

    /// Returns the notification title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the optional deep-link.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Returns whether the recipient has read this notification.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.is_read
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the notification as read.
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}
