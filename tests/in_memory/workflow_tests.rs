//! End-to-end task assignment and verification workflows.

use super::helpers::{CoreHarness, harness};
use foreman::directory::domain::Role;
use foreman::task::{
    domain::{Assignment, TaskPriority, TaskStatus},
    services::CreateTaskRequest,
};
use chrono::{Duration, Utc};
use rstest::rstest;

fn role_task(title: &str, role: Role) -> CreateTaskRequest {
    CreateTaskRequest::new(
        title,
        "Integration test task",
        Utc::now() + Duration::days(3),
        TaskPriority::Urgent,
        Assignment::by_role(role),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn role_assignment_reaches_every_approved_member(harness: CoreHarness) {
    let first = harness
        .onboard("David Smith", "david.s@gmail.com", Role::Backend)
        .await;
    let second = harness
        .onboard("Emily Brown", "emily.b@gmail.com", Role::Backend)
        .await;
    // Registered but never approved: must not be notified.
    let pending = harness
        .directory
        .register(foreman::directory::services::RegisterUserRequest::new(
            "New Joiner",
            "new.j@gmail.com",
            "secret",
            Role::Backend,
        ))
        .await
        .expect("registration should succeed");

    harness
        .tasks
        .create_task(role_task("Ship the release", Role::Backend))
        .await
        .expect("task creation should succeed");

    for member in [&first, &second] {
        let inbox = harness.inbox_for(member).await;
        assert!(inbox.iter().any(|n| n.title() == "New Task Assigned"));
    }
    let pending_inbox = harness.inbox_for(&pending).await;
    assert!(!pending_inbox.iter().any(|n| n.title() == "New Task Assigned"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn verification_gates_the_verified_state(harness: CoreHarness) {
    let admin = harness
        .onboard("Admin User", "admin@gmail.com", Role::Admin)
        .await;
    let worker = harness
        .onboard("David Smith", "david.s@gmail.com", Role::Backend)
        .await;

    let task = harness
        .tasks
        .create_task(role_task("Implement lifecycle persistence", Role::Backend))
        .await
        .expect("task creation should succeed");

    // The worker picks the task up and comments along the way.
    harness
        .tasks
        .update_status(task.id(), TaskStatus::InProgress)
        .await
        .expect("status update should succeed");
    harness
        .tasks
        .add_comment(task.id(), worker.id(), "Starting on this today")
        .await
        .expect("comment should succeed");

    // Completion claim: the task freezes at completed until review.
    harness
        .tasks
        .submit_verification(task.id(), worker.id(), "done")
        .await
        .expect("submission should succeed");
    let completed = harness
        .tasks
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task present");
    assert_eq!(completed.status(), TaskStatus::Completed);

    let admin_inbox = harness.inbox_for(&admin).await;
    assert!(admin_inbox.iter().any(|n| n.title() == "Verification Requested"));
    let queue = harness
        .tasks
        .pending_verifications()
        .await
        .expect("queue listing should succeed");
    assert_eq!(queue.len(), 1);

    // Admin review closes the loop.
    let verified = harness
        .tasks
        .approve_verification(task.id(), "looks good")
        .await
        .expect("approval should succeed");
    assert_eq!(verified.status(), TaskStatus::Verified);
    assert!(verified.verification().is_some_and(|r| r.is_approved()));

    let worker_inbox = harness.inbox_for(&worker).await;
    let verified_notices: Vec<_> = worker_inbox
        .iter()
        .filter(|n| n.title() == "Task Verified")
        .collect();
    assert_eq!(verified_notices.len(), 1);

    let queue_after = harness
        .tasks
        .pending_verifications()
        .await
        .expect("queue listing should succeed");
    assert!(queue_after.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unread_counts_follow_the_workflow(harness: CoreHarness) {
    let worker = harness
        .onboard("Emily Brown", "emily.b@gmail.com", Role::Backend)
        .await;

    harness
        .tasks
        .create_task(role_task("Tune the cache", Role::Backend))
        .await
        .expect("task creation should succeed");

    // Account approval plus the task assignment.
    let unread = harness
        .inbox
        .unread_count(worker.id())
        .await
        .expect("count should succeed");
    assert_eq!(unread, 2);

    let inbox = harness.inbox_for(&worker).await;
    let first_id = inbox.first().map(|n| n.id()).expect("notifications present");
    harness
        .inbox
        .mark_read(first_id)
        .await
        .expect("mark read should succeed");

    let unread_after = harness
        .inbox
        .unread_count(worker.id())
        .await
        .expect("count should succeed");
    assert_eq!(unread_after, 1);
}
