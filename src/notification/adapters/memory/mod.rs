//! In-memory adapter implementations for testing and single-process use.

mod notification;

pub use notification::InMemoryNotificationRepository;
