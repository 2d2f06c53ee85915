//! Port contracts for the notification inbox.
//!
//! Ports define infrastructure-agnostic interfaces used by notification
//! services.

pub mod repository;

pub use repository::{
    NotificationRepository, NotificationRepositoryError, NotificationRepositoryResult,
};
