//! User account aggregate root.

use super::{DisplayName, EmailAddress, PasswordDigest, Role, UserId, UserStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// User account aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: DisplayName,
    email: EmailAddress,
    password: PasswordDigest,
    role: Role,
    status: UserStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted display name.
    pub name: DisplayName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted password digest.
    pub password: PasswordDigest,
    /// Persisted role.
    pub role: Role,
    /// Persisted approval status.
    pub status: UserStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new account in [`UserStatus::Pending`] status.
    #[must_use]
    pub fn register(
        name: DisplayName,
        email: EmailAddress,
        password: &str,
        role: Role,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: UserId::new(),
            name,
            email,
            password: PasswordDigest::digest(password),
            role,
            status: UserStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            password: data.password,
            role: data.role,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the approval status.
    #[must_use]
    pub const fn status(&self) -> UserStatus {
        self.status
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

    /// Returns whether the account has been approved.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self.status, UserStatus::Approved)
    }

    /// Approves the account, setting status to [`UserStatus::Approved`].
    pub fn approve(&mut self, clock: &impl Clock) {
        self.status = UserStatus::Approved;
        self.touch(clock);
    }

    /// Returns whether the candidate password digests to the stored value.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
