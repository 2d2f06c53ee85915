//! Shared world state for task verification BDD scenarios.

use std::sync::Arc;

use foreman::directory::{
    adapters::memory::InMemoryUserRepository,
    domain::{Role, User},
    services::{DirectoryService, RegisterUserRequest},
};
use foreman::notification::{
    adapters::memory::InMemoryNotificationRepository, domain::Notification,
    ports::NotificationRepository,
};
use foreman::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Directory service type used by the BDD world.
pub type TestDirectoryService =
    DirectoryService<InMemoryUserRepository, InMemoryNotificationRepository, DefaultClock>;

/// Task lifecycle service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryNotificationRepository,
    DefaultClock,
>;

/// Scenario world for task verification behaviour tests.
pub struct VerificationWorld {
    pub directory: TestDirectoryService,
    pub tasks: TestTaskService,
    pub notifications: Arc<InMemoryNotificationRepository>,
    pub admin: Option<User>,
    pub worker: Option<User>,
    pub task: Option<Task>,
    pub last_approval: Option<Result<Task, TaskLifecycleError>>,
}

impl VerificationWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let task_store = Arc::new(InMemoryTaskRepository::new());
        let notifications = Arc::new(InMemoryNotificationRepository::new());
        let clock = Arc::new(DefaultClock);

        Self {
            directory: DirectoryService::new(
                Arc::clone(&users),
                Arc::clone(&notifications),
                Arc::clone(&clock),
            ),
            tasks: TaskLifecycleService::new(
                task_store,
                Arc::clone(&users),
                Arc::clone(&notifications),
                clock,
            ),
            notifications,
            admin: None,
            worker: None,
            task: None,
            last_approval: None,
        }
    }

    /// Registers and approves a user in one step.
    pub fn onboard(&self, name: &str, role: Role) -> Result<User, eyre::Report> {
        let email = format!("{}@example.com", name.to_ascii_lowercase().replace(' ', "."));
        let registered = run_async(self.directory.register(RegisterUserRequest::new(
            name, email, "secret", role,
        )))
        .map_err(|err| eyre::eyre!("registration failed: {err}"))?;
        run_async(self.directory.approve(registered.id()))
            .map_err(|err| eyre::eyre!("approval failed: {err}"))
    }

    /// Reads a user's raw inbox.
    pub fn inbox_for(&self, user: &User) -> Result<Vec<Notification>, eyre::Report> {
        run_async(self.notifications.list_for_recipient(user.id()))
            .map_err(|err| eyre::eyre!("inbox listing failed: {err}"))
    }
}

impl Default for VerificationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> VerificationWorld {
    VerificationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
