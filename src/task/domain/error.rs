//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A direct assignment carries no assignees.
    #[error("direct assignment must name at least one user")]
    EmptyAssignees,

    /// The task carries no verification request to approve.
    #[error("no verification request found for task {0}")]
    VerificationMissing(TaskId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing report periods from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown report period: {0}")]
pub struct ParseReportPeriodError(pub String);
