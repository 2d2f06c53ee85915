//! Task aggregate root and related task lifecycle types.

use super::{
    Assignment, Comment, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError, TaskId,
    VerificationRequest,
};
use crate::directory::domain::{User, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
///
/// `Completed` and `Verified` are only ever produced by the verification
/// operations on [`Task`]; direct status updates are limited by contract
/// to the earlier states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// A completion claim is awaiting admin review.
    Completed,
    /// An admin has approved the completion claim.
    Verified,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Verified => "verified",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "verified" => Ok(Self::Verified),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task priority, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    /// Lowest priority.
    Low,
    /// Default priority.
    Medium,
    /// Elevated priority.
    High,
    /// Highest priority.
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Task aggregate root.
///
/// Owns its comments and verification request outright; both live and die
/// with the task. Invariant: `status == Verified` holds exactly when the
/// verification request exists and is approved, and an unapproved request
/// pins the status at `Completed` until approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: DateTime<Utc>,
    priority: TaskPriority,
    status: TaskStatus,
    assignment: Assignment,
    comments: Vec<Comment>,
    verification: Option<VerificationRequest>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted assignment spec.
    pub assignment: Assignment,
    /// Persisted comments, oldest first.
    pub comments: Vec<Comment>,
    /// Persisted verification request, if any.
    pub verification: Option<VerificationRequest>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in [`TaskStatus::Pending`] status with no
    /// comments and no verification request.
    ///
    /// The description is opaque payload text and is not interpreted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: DateTime<Utc>,
        priority: TaskPriority,
        assignment: Assignment,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: trimmed.to_owned(),
            description: description.into(),
            due_date,
            priority,
            status: TaskStatus::Pending,
            assignment,
            comments: Vec::new(),
            verification: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            status: data.status,
            assignment: data.assignment,
            comments: data.comments,
            verification: data.verification,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignment spec.
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Returns the comments, oldest first.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the verification request, if any.
    #[must_use]
    pub const fn verification(&self) -> Option<&VerificationRequest> {
        self.verification.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the task carries an unapproved verification request.
    #[must_use]
    pub fn has_pending_verification(&self) -> bool {
        self.verification
            .as_ref()
            .is_some_and(|request| !request.is_approved())
    }

    /// Returns whether the user owns this task through its assignment spec.
    #[must_use]
    pub fn is_assigned_to(&self, user: &User) -> bool {
        self.assignment.includes(user)
    }

    /// Overwrites the lifecycle status.
    ///
    /// No transition validation happens here: the engine accepts any of
    /// the four statuses, and guarding against illegal jumps is a caller
    /// responsibility layered on top. The verification gate is structural
    /// instead: [`Self::submit_verification`] and
    /// [`Self::approve_verification`] are the only operations that produce
    /// `Completed` and `Verified`.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Appends an immutable comment and returns it.
    ///
    /// No existence check is made on the author; dangling references are
    /// tolerated and resolved lazily at read time.
    pub fn add_comment(
        &mut self,
        author: UserId,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Comment {
        let comment = Comment::new(self.id, author, text, clock);
        self.comments.push(comment.clone());
        self.touch(clock);
        comment
    }

    /// Records a completion claim and forces the status to
    /// [`TaskStatus::Completed`].
    ///
    /// Any prior request is overwritten outright: a second submission
    /// silently discards the first, so the latest claim is always the one
    /// an admin reviews.
    pub fn submit_verification(
        &mut self,
        submitted_by: UserId,
        comment: impl Into<String>,
        clock: &impl Clock,
    ) -> VerificationRequest {
        let request = VerificationRequest::new(self.id, submitted_by, comment, clock);
        self.verification = Some(request.clone());
        self.status = TaskStatus::Completed;
        self.touch(clock);
        request
    }

    /// Approves the outstanding verification request and forces the status
    /// to [`TaskStatus::Verified`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::VerificationMissing`] when the task
    /// carries no verification request; the task is left untouched.
    pub fn approve_verification(
        &mut self,
        approval_comment: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<VerificationRequest, TaskDomainError> {
        let request = self
            .verification
            .as_mut()
            .ok_or(TaskDomainError::VerificationMissing(self.id))?;
        request.approve(approval_comment, clock);
        let approved = request.clone();
        self.status = TaskStatus::Verified;
        self.touch(clock);
        Ok(approved)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
