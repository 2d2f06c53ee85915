//! Integration tests for the registration, approval, and rejection flows.

use super::helpers::{CoreHarness, harness};
use foreman::directory::{
    domain::{Role, UserStatus},
    ports::UserRepositoryError,
    services::{DirectoryServiceError, RegisterUserRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registration_queues_the_account_for_review(harness: CoreHarness) {
    let registered = harness
        .directory
        .register(RegisterUserRequest::new(
            "Sarah Johnson",
            "sarah.j@gmail.com",
            "frontend123",
            Role::Frontend,
        ))
        .await
        .expect("registration should succeed");

    let pending = harness
        .directory
        .list_pending()
        .await
        .expect("pending listing should succeed");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending.first().map(|u| u.id()), Some(registered.id()));

    // Not yet approved, so authentication stays closed.
    let result = harness
        .directory
        .authenticate("sarah.j@gmail.com", "frontend123")
        .await;
    assert!(matches!(
        result,
        Err(DirectoryServiceError::InvalidCredentials)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn approval_unlocks_authentication(harness: CoreHarness) {
    let user = harness
        .onboard("David Smith", "david.s@gmail.com", Role::Backend)
        .await;
    assert_eq!(user.status(), UserStatus::Approved);

    let authenticated = harness
        .directory
        .authenticate("david.s@gmail.com", "secret")
        .await
        .expect("authentication should succeed");
    assert_eq!(authenticated.id(), user.id());

    let inbox = harness.inbox_for(&user).await;
    assert!(inbox.iter().any(|n| n.title() == "Account Approved"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejection_removes_the_account_entirely(harness: CoreHarness) {
    let registered = harness
        .directory
        .register(RegisterUserRequest::new(
            "James Wilson",
            "james.w@gmail.com",
            "testing123",
            Role::Testing,
        ))
        .await
        .expect("registration should succeed");

    harness
        .directory
        .reject(registered.id())
        .await
        .expect("rejection should succeed");

    let looked_up = harness
        .directory
        .find_by_id(registered.id())
        .await
        .expect("lookup should succeed");
    assert!(looked_up.is_none());

    // A re-registration with the freed email is allowed.
    harness
        .directory
        .register(RegisterUserRequest::new(
            "James Wilson",
            "james.w@gmail.com",
            "testing456",
            Role::Testing,
        ))
        .await
        .expect("re-registration should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_is_rejected_at_registration(harness: CoreHarness) {
    harness
        .onboard("Emily Brown", "emily.b@gmail.com", Role::Backend)
        .await;

    let result = harness
        .directory
        .register(RegisterUserRequest::new(
            "Imposter",
            "emily.b@gmail.com",
            "other",
            Role::Designer,
        ))
        .await;
    assert!(matches!(
        result,
        Err(DirectoryServiceError::Repository(
            UserRepositoryError::DuplicateEmail(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admins_are_notified_of_each_registration(harness: CoreHarness) {
    let admin = harness
        .onboard("Admin User", "admin@gmail.com", Role::Admin)
        .await;

    harness
        .directory
        .register(RegisterUserRequest::new(
            "Sophie Turner",
            "sophie.t@gmail.com",
            "design123",
            Role::Designer,
        ))
        .await
        .expect("registration should succeed");

    let inbox = harness.inbox_for(&admin).await;
    let notices: Vec<_> = inbox
        .iter()
        .filter(|n| n.title() == "New User Registration")
        .collect();
    assert_eq!(notices.len(), 1);
    assert!(notices.first().is_some_and(|n| n.message().contains("Sophie Turner")));
}
