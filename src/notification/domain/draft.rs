//! Pure notification effects produced by state transitions.

use crate::directory::domain::UserId;

/// A notification that has been decided upon but not yet persisted.
///
/// Transition logic in the directory and task services returns drafts
/// instead of touching the inbox directly; the dispatcher turns each draft
/// into a stored [`Notification`](super::Notification).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    recipient: UserId,
    title: String,
    message: String,
    link: Option<String>,
}

impl NotificationDraft {
    /// Creates a draft addressed to a single recipient.
    #[must_use]
    pub fn new(recipient: UserId, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient,
            title: title.into(),
            message: message.into(),
            link: None,
        }
    }

    /// Sets a deep-link for the surrounding application to render.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
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

    /// Returns the notification message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the optional deep-link.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}
