//! Domain model for user notifications.
//!
//! Notifications are independent entities: immutable once created except
//! for the read flag. A [`NotificationDraft`] is the pure "effect to emit"
//! produced by state transitions before any persistence happens.

mod draft;
mod ids;
mod notification;

pub use draft::NotificationDraft;
pub use ids::NotificationId;
pub use notification::{Notification, PersistedNotificationData};
