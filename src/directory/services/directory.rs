//! Service layer for registration, approval, and authentication.

use crate::directory::{
    domain::{DirectoryDomainError, DisplayName, EmailAddress, Role, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use crate::notification::{
    domain::NotificationDraft,
    ports::{NotificationRepository, NotificationRepositoryError},
    services::NotificationDispatcher,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    name: String,
    email: String,
    password: String,
    role: Role,
}

impl RegisterUserRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

/// Service-level errors for directory operations.
#[derive(Debug, Error)]
pub enum DirectoryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// Notification dispatch failed.
    #[error(transparent)]
    Notifications(#[from] NotificationRepositoryError),
    /// Authentication failed. Wrong email, wrong password, and an
    /// unapproved account are indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Result type for directory service operations.
pub type DirectoryServiceResult<T> = Result<T, DirectoryServiceError>;

/// Directory orchestration service.
#[derive(Clone)]
pub struct DirectoryService<U, N, C>
where
    U: UserRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<U>,
    dispatcher: NotificationDispatcher<N, C>,
    clock: Arc<C>,
}

impl<U, N, C> DirectoryService<U, N, C>
where
    U: UserRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new directory service.
    #[must_use]
    pub fn new(repository: Arc<U>, notifications: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repository,
            dispatcher: NotificationDispatcher::new(notifications, Arc::clone(&clock)),
            clock,
        }
    }

    /// Registers a new account in pending status and notifies every
    /// approved admin.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Domain`] when the name or email
    /// fails validation, or [`DirectoryServiceError::Repository`] when the
    /// email address is already registered.
    pub async fn register(&self, request: RegisterUserRequest) -> DirectoryServiceResult<User> {
        let RegisterUserRequest {
            name,
            email,
            password,
            role,
        } = request;

        let display_name = DisplayName::new(name)?;
        let email_address = EmailAddress::new(email)?;
        let user = User::register(display_name, email_address, &password, role, &*self.clock);
        self.repository.store(&user).await?;

        let drafts = registration_drafts(&user, &self.repository.list_all().await?);
        self.dispatcher.dispatch(drafts).await?;
        info!(user = %user.id(), role = %user.role(), "user registered");
        Ok(user)
    }

    /// Approves a pending account and notifies the user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the id is unknown.
    pub async fn approve(&self, id: UserId) -> DirectoryServiceResult<User> {
        let mut user = self.find_by_id_or_error(id).await?;
        user.approve(&*self.clock);
        self.repository.update(&user).await?;

        let draft = NotificationDraft::new(
            user.id(),
            "Account Approved",
            "Your account has been approved by the admin. You can now log in.",
        )
        .with_link("/login");
        self.dispatcher.dispatch(vec![draft]).await?;
        info!(user = %user.id(), "user approved");
        Ok(user)
    }

    /// Rejects a pending account: notifies the user, then deletes the
    /// record. Rejected accounts are not retained.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the id is unknown.
    pub async fn reject(&self, id: UserId) -> DirectoryServiceResult<()> {
        let user = self.find_by_id_or_error(id).await?;

        let draft = NotificationDraft::new(
            user.id(),
            "Account Rejected",
            "Your account registration has been rejected by the admin.",
        )
        .with_link("/login");
        self.dispatcher.dispatch(vec![draft]).await?;
        self.repository.remove(user.id()).await?;
        info!(user = %user.id(), "user rejected and removed");
        Ok(())
    }

    /// Authenticates by email and password.
    ///
    /// Succeeds only for an exact credential match on an approved account.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::InvalidCredentials`] on any
    /// mismatch, including unapproved accounts.
    pub async fn authenticate(&self, email: &str, password: &str) -> DirectoryServiceResult<User> {
        let email_address =
            EmailAddress::new(email).map_err(|_| DirectoryServiceError::InvalidCredentials)?;
        let user = self
            .repository
            .find_by_email(&email_address)
            .await?
            .ok_or(DirectoryServiceError::InvalidCredentials)?;

        if !user.verify_password(password) || !user.is_approved() {
            return Err(DirectoryServiceError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Finds an account by internal identifier.
    ///
    /// Returns `Ok(None)` when no account has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> DirectoryServiceResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every account awaiting admin review.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_pending(&self) -> DirectoryServiceResult<Vec<User>> {
        Ok(self.repository.list_pending().await?)
    }

    /// Returns every account.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_all(&self) -> DirectoryServiceResult<Vec<User>> {
        Ok(self.repository.list_all().await?)
    }

    async fn find_by_id_or_error(&self, id: UserId) -> DirectoryServiceResult<User> {
        let result: UserRepositoryResult<Option<User>> = self.repository.find_by_id(id).await;
        result?.ok_or_else(|| UserRepositoryError::NotFound(id).into())
    }
}

/// Builds one "new registration" draft per currently approved admin.
///
/// Admin membership is recomputed from the directory snapshot on every
/// call, never cached.
fn registration_drafts(registered: &User, directory: &[User]) -> Vec<NotificationDraft> {
    directory
        .iter()
        .filter(|user| user.is_approved() && user.role() == Role::Admin)
        .map(|admin| {
            NotificationDraft::new(
                admin.id(),
                "New User Registration",
                format!(
                    "{} has registered as a {}. Please review their account.",
                    registered.name(),
                    registered.role()
                ),
            )
            .with_link("/admin/users")
        })
        .collect()
}
