//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use foreman::directory::{
    adapters::memory::InMemoryUserRepository,
    domain::{Role, User},
    services::{DirectoryService, RegisterUserRequest},
};
use foreman::notification::{
    adapters::memory::InMemoryNotificationRepository, domain::Notification,
    ports::NotificationRepository, services::InboxService,
};
use foreman::task::{
    adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Directory service type used by integration tests.
pub type TestDirectoryService =
    DirectoryService<InMemoryUserRepository, InMemoryNotificationRepository, DefaultClock>;

/// Task lifecycle service type used by integration tests.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryNotificationRepository,
    DefaultClock,
>;

/// Full core wired over shared in-memory repositories.
pub struct CoreHarness {
    /// Directory orchestration service.
    pub directory: TestDirectoryService,
    /// Task lifecycle orchestration service.
    pub tasks: TestTaskService,
    /// Inbox read service.
    pub inbox: InboxService<InMemoryNotificationRepository>,
    notifications: Arc<InMemoryNotificationRepository>,
}

impl CoreHarness {
    /// Registers and approves a user in one step.
    pub async fn onboard(&self, name: &str, email: &str, role: Role) -> User {
        let registered = self
            .directory
            .register(RegisterUserRequest::new(name, email, "secret", role))
            .await
            .expect("registration should succeed");
        self.directory
            .approve(registered.id())
            .await
            .expect("approval should succeed")
    }

    /// Reads a user's raw inbox.
    pub async fn inbox_for(&self, user: &User) -> Vec<Notification> {
        self.notifications
            .list_for_recipient(user.id())
            .await
            .expect("inbox listing should succeed")
    }
}

/// Provides a fresh fully-wired core for each test.
#[fixture]
pub fn harness() -> CoreHarness {
    let users = Arc::new(InMemoryUserRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let notifications = Arc::new(InMemoryNotificationRepository::new());
    let clock = Arc::new(DefaultClock);

    CoreHarness {
        directory: DirectoryService::new(
            Arc::clone(&users),
            Arc::clone(&notifications),
            Arc::clone(&clock),
        ),
        tasks: TaskLifecycleService::new(
            tasks,
            Arc::clone(&users),
            Arc::clone(&notifications),
            clock,
        ),
        inbox: InboxService::new(Arc::clone(&notifications)),
        notifications,
    }
}
