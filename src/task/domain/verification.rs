//! Verification requests: a worker's claim that a task is complete.

use super::{TaskId, VerificationId};
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A completion claim awaiting admin review.
///
/// A task carries at most one live request; resubmission replaces the
/// previous request outright and no history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    id: VerificationId,
    task_id: TaskId,
    submitted_by: UserId,
    comment: String,
    created_at: DateTime<Utc>,
    approved: bool,
    approved_at: Option<DateTime<Utc>>,
    approval_comment: Option<String>,
}

/// Parameter object for reconstructing a persisted verification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedVerificationData {
    /// Persisted verification identifier.
    pub id: VerificationId,
    /// Persisted parent task identifier.
    pub task_id: TaskId,
    /// Persisted submitter identifier.
    pub submitted_by: UserId,
    /// Persisted completion comment.
    pub comment: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted approval flag.
    pub approved: bool,
    /// Persisted approval timestamp, if approved.
    pub approved_at: Option<DateTime<Utc>>,
    /// Persisted approval comment, if approved.
    pub approval_comment: Option<String>,
}

impl VerificationRequest {
    /// Creates an unapproved request with a fresh identifier and clock
    /// stamp.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        submitted_by: UserId,
        comment: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: VerificationId::new(),
            task_id,
            submitted_by,
            comment: comment.into(),
            created_at: clock.utc(),
            approved: false,
            approved_at: None,
            approval_comment: None,
        }
    }

    /// Reconstructs a request from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedVerificationData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            submitted_by: data.submitted_by,
            comment: data.comment,
            created_at: data.created_at,
            approved: data.approved,
            approved_at: data.approved_at,
            approval_comment: data.approval_comment,
        }
    }

    /// Returns the verification identifier.
    #[must_use]
    pub const fn id(&self) -> VerificationId {
        self.id
    }

    /// Returns the parent task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the submitting user identifier.
    #[must_use]
    pub const fn submitted_by(&self) -> UserId {
        self.submitted_by
    }

    /// Returns the submitter's completion comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether an admin has approved the request.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.approved
    }

    /// Returns the approval timestamp, once approved.
    #[must_use]
    pub const fn approved_at(&self) -> Option<DateTime<Utc>> {
        self.approved_at
    }

    /// Returns the admin's approval comment, once approved.
    #[must_use]
    pub fn approval_comment(&self) -> Option<&str> {
        self.approval_comment.as_deref()
    }

    /// Approves the request, stamping approval time and comment.
    pub fn approve(&mut self, approval_comment: impl Into<String>, clock: &impl Clock) {
        self.approved = true;
        self.approved_at = Some(clock.utc());
        self.approval_comment = Some(approval_comment.into());
    }
}
