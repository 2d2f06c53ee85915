//! Service layer for task creation, lifecycle transitions, and
//! verification.

use crate::directory::{
    domain::{Role, User, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use crate::notification::{
    domain::NotificationDraft,
    ports::{NotificationRepository, NotificationRepositoryError},
    services::NotificationDispatcher,
};
use crate::task::{
    domain::{
        Assignment, Comment, ReportPeriod, Task, TaskDomainError, TaskId, TaskPriority,
        TaskReport, TaskStatus, VerificationRequest,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date: DateTime<Utc>,
    priority: TaskPriority,
    assignment: Assignment,
}

impl CreateTaskRequest {
    /// Creates a request with all task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: DateTime<Utc>,
        priority: TaskPriority,
        assignment: Assignment,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
            priority,
            assignment,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] UserRepositoryError),
    /// Notification dispatch failed.
    #[error(transparent)]
    Notifications(#[from] NotificationRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// All mutating operations are atomic with respect to the store:
/// validation and lookups come first, then the single aggregate write,
/// then notification dispatch. Nothing observable mutates on a failed
/// precondition.
#[derive(Clone)]
pub struct TaskLifecycleService<R, U, N, C>
where
    R: TaskRepository,
    U: UserRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<U>,
    dispatcher: NotificationDispatcher<N, C>,
    clock: Arc<C>,
}

impl<R, U, N, C> TaskLifecycleService<R, U, N, C>
where
    R: TaskRepository,
    U: UserRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(
        repository: Arc<R>,
        directory: Arc<U>,
        notifications: Arc<N>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            directory,
            dispatcher: NotificationDispatcher::new(notifications, Arc::clone(&clock)),
            clock,
        }
    }

    /// Creates a new task in pending status and notifies each resolved
    /// assignee.
    ///
    /// The assignment spec is resolved against the current directory: a
    /// direct set is notified verbatim, a role spec notifies every
    /// currently approved user of that role.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            due_date,
            priority,
            assignment,
        } = request;

        let task = Task::new(
            title,
            description,
            due_date,
            priority,
            assignment,
            &*self.clock,
        )?;
        self.repository.store(&task).await?;

        let directory = self.directory.list_all().await?;
        self.dispatcher
            .dispatch(assignment_drafts(&task, &directory))
            .await?;
        info!(task = %task.id(), priority = task.priority().as_str(), "task created");
        Ok(task)
    }

    /// Overwrites a task's lifecycle status.
    ///
    /// Any of the four statuses is accepted and no other side effects
    /// occur. Guarding against illegal jumps is a caller contract; the
    /// UI-facing convention is that once a task carries an unapproved
    /// verification request its status stays at `completed` until
    /// approval, and a `verified` task is final.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task is unknown.
    pub async fn update_status(
        &self,
        task_id: TaskId,
        status: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_by_id_or_error(task_id).await?;
        task.set_status(status, &*self.clock);
        self.repository.update(&task).await?;
        debug!(task = %task.id(), status = status.as_str(), "task status updated");
        Ok(task)
    }

    /// Appends a comment to a task.
    ///
    /// Comments are pull, not push: no notification is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task is unknown.
    pub async fn add_comment(
        &self,
        task_id: TaskId,
        author: UserId,
        text: impl Into<String> + Send,
    ) -> TaskLifecycleResult<Comment> {
        let mut task = self.find_by_id_or_error(task_id).await?;
        let comment = task.add_comment(author, text, &*self.clock);
        self.repository.update(&task).await?;
        Ok(comment)
    }

    /// Records a completion claim on a task and notifies every approved
    /// admin.
    ///
    /// Forces the task's status to `completed`. Any prior request is
    /// replaced outright; no history is kept.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task is unknown.
    pub async fn submit_verification(
        &self,
        task_id: TaskId,
        submitted_by: UserId,
        comment: impl Into<String> + Send,
    ) -> TaskLifecycleResult<VerificationRequest> {
        let mut task = self.find_by_id_or_error(task_id).await?;
        let request = task.submit_verification(submitted_by, comment, &*self.clock);
        self.repository.update(&task).await?;

        let directory = self.directory.list_all().await?;
        self.dispatcher
            .dispatch(verification_drafts(&task, &directory))
            .await?;
        info!(task = %task.id(), submitter = %submitted_by, "verification requested");
        Ok(request)
    }

    /// Approves a task's outstanding verification request and notifies the
    /// original submitter.
    ///
    /// Forces the task's status to `verified`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task is unknown,
    /// or [`TaskDomainError::VerificationMissing`] when it carries no
    /// verification request; in both cases the task is left unchanged.
    pub async fn approve_verification(
        &self,
        task_id: TaskId,
        approval_comment: impl Into<String> + Send,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_by_id_or_error(task_id).await?;
        let request = task.approve_verification(approval_comment, &*self.clock)?;
        self.repository.update(&task).await?;

        self.dispatcher
            .dispatch(vec![approval_draft(&task, request.submitted_by())])
            .await?;
        info!(task = %task.id(), submitter = %request.submitted_by(), "verification approved");
        Ok(task)
    }

    /// Finds a task by internal identifier.
    ///
    /// Returns `Ok(None)` when no task has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        let result: TaskRepositoryResult<Option<Task>> = self.repository.find_by_id(id).await;
        Ok(result?)
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns every task awaiting admin verification: the request exists
    /// and is not yet approved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn pending_verifications(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_pending_verification().await?)
    }

    /// Returns the tasks a user may act on.
    ///
    /// Admins see every task. Workers see tasks whose direct set names
    /// them or whose role spec matches their role, deduplicated by task
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user is unknown.
    pub async fn tasks_for_user(&self, user_id: UserId) -> TaskLifecycleResult<Vec<Task>> {
        let user = self
            .directory
            .find_by_id(user_id)
            .await?
            .ok_or(UserRepositoryError::NotFound(user_id))?;
        let tasks = self.repository.list_all().await?;

        if user.role() == Role::Admin {
            return Ok(tasks);
        }
        Ok(tasks
            .into_iter()
            .filter(|task| task.is_assigned_to(&user))
            .collect())
    }

    /// Compiles a report over the tasks created inside the period ending
    /// now.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn report(&self, period: ReportPeriod) -> TaskLifecycleResult<TaskReport> {
        let end = self.clock.utc();
        let tasks = self
            .repository
            .list_created_between(period.window_start(end), end)
            .await?;
        Ok(TaskReport::compile(period, end, tasks))
    }

    async fn find_by_id_or_error(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}

/// Builds one "new task" draft per assignee resolved from the directory.
///
/// Direct assignees are taken verbatim (dangling ids included); a role
/// spec selects the currently approved members of that role.
fn assignment_drafts(task: &Task, directory: &[User]) -> Vec<NotificationDraft> {
    task.assignment()
        .resolve(directory)
        .into_iter()
        .map(|assignee| {
            NotificationDraft::new(
                assignee,
                "New Task Assigned",
                format!("You have been assigned to \"{}\"", task.title()),
            )
            .with_link(format!("/tasks/{}", task.id()))
        })
        .collect()
}

/// Builds one "verification requested" draft per currently approved admin.
fn verification_drafts(task: &Task, directory: &[User]) -> Vec<NotificationDraft> {
    directory
        .iter()
        .filter(|user| user.is_approved() && user.role() == Role::Admin)
        .map(|admin| {
            NotificationDraft::new(
                admin.id(),
                "Verification Requested",
                format!("A verification has been requested for \"{}\"", task.title()),
            )
            .with_link(format!("/admin/verify/{}", task.id()))
        })
        .collect()
}

/// Builds the "task verified" draft for the original submitter.
fn approval_draft(task: &Task, submitter: UserId) -> NotificationDraft {
    NotificationDraft::new(
        submitter,
        "Task Verified",
        format!("Your task \"{}\" has been verified", task.title()),
    )
    .with_link(format!("/tasks/{}", task.id()))
}
