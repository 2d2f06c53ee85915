//! Assignment spec: who may act on a task.

use super::TaskDomainError;
use crate::directory::domain::{Role, User, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The rule determining who may act on a task.
///
/// A task is assigned to an explicit user set or to a role, never both and
/// never neither. The tagged variant makes the illegal states of a
/// nullable pair unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Assignment {
    /// Explicit set of user identities.
    Direct {
        /// Users who may act on the task.
        assignees: BTreeSet<UserId>,
    },
    /// Every approved user holding the role.
    ByRole {
        /// Role whose members may act on the task.
        role: Role,
    },
}

impl Assignment {
    /// Creates a direct assignment to an explicit user set.
    ///
    /// No existence check is made against the directory; dangling
    /// references are tolerated and resolved lazily at read time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyAssignees`] when the set is empty.
    pub fn direct(assignees: impl IntoIterator<Item = UserId>) -> Result<Self, TaskDomainError> {
        let assignees: BTreeSet<UserId> = assignees.into_iter().collect();
        if assignees.is_empty() {
            return Err(TaskDomainError::EmptyAssignees);
        }
        Ok(Self::Direct { assignees })
    }

    /// Creates a role assignment.
    #[must_use]
    pub const fn by_role(role: Role) -> Self {
        Self::ByRole { role }
    }

    /// Returns the direct assignee set, when this is a direct assignment.
    #[must_use]
    pub const fn direct_assignees(&self) -> Option<&BTreeSet<UserId>> {
        match self {
            Self::Direct { assignees } => Some(assignees),
            Self::ByRole { .. } => None,
        }
    }

    /// Returns the role, when this is a role assignment.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Direct { .. } => None,
            Self::ByRole { role } => Some(*role),
        }
    }

    /// Computes the set of users who may act on the task.
    ///
    /// A direct set is returned verbatim. A role spec selects every
    /// approved user of that role from the directory snapshot passed in,
    /// recomputed on every call: role membership is dynamic, never
    /// snapshotted at assignment time.
    #[must_use]
    pub fn resolve<'a>(&self, directory: impl IntoIterator<Item = &'a User>) -> BTreeSet<UserId> {
        match self {
            Self::Direct { assignees } => assignees.clone(),
            Self::ByRole { role } => directory
                .into_iter()
                .filter(|user| user.is_approved() && user.role() == *role)
                .map(User::id)
                .collect(),
        }
    }

    /// Returns whether the user owns tasks under this spec: their id is in
    /// the direct set, or their role matches the role spec.
    #[must_use]
    pub fn includes(&self, user: &User) -> bool {
        match self {
            Self::Direct { assignees } => assignees.contains(&user.id()),
            Self::ByRole { role } => user.role() == *role,
        }
    }
}
