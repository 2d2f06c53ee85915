//! Then steps for task verification BDD scenarios.

use super::world::{VerificationWorld, run_async};
use foreman::task::{
    domain::{Task, TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};
use rstest_bdd_macros::then;

/// Refetches the scenario task from the store.
fn current_task(world: &VerificationWorld) -> Result<Task, eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    run_async(world.tasks.find_by_id(task.id()))
        .map_err(|err| eyre::eyre!("task lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("task disappeared from the store"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &VerificationWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = current_task(world)?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the admin has a "{title}" notification"#)]
fn admin_has_notification(world: &VerificationWorld, title: String) -> Result<(), eyre::Report> {
    let admin = world
        .admin
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing admin in scenario world"))?;
    let inbox = world.inbox_for(admin)?;
    eyre::ensure!(
        inbox.iter().any(|n| n.title() == title),
        "no \"{title}\" notification for the admin"
    );
    Ok(())
}

#[then(r#"the worker has a "{title}" notification"#)]
fn worker_has_notification(world: &VerificationWorld, title: String) -> Result<(), eyre::Report> {
    let worker = world
        .worker
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing worker in scenario world"))?;
    let inbox = world.inbox_for(worker)?;
    eyre::ensure!(
        inbox.iter().any(|n| n.title() == title),
        "no \"{title}\" notification for the worker"
    );
    Ok(())
}

#[then("the pending verification queue has exactly one entry")]
fn queue_has_one_entry(world: &VerificationWorld) -> Result<(), eyre::Report> {
    let queue = run_async(world.tasks.pending_verifications())
        .map_err(|err| eyre::eyre!("queue listing failed: {err}"))?;
    eyre::ensure!(queue.len() == 1, "expected one queued task, found {}", queue.len());
    Ok(())
}

#[then("the pending verification queue is empty")]
fn queue_is_empty(world: &VerificationWorld) -> Result<(), eyre::Report> {
    let queue = run_async(world.tasks.pending_verifications())
        .map_err(|err| eyre::eyre!("queue listing failed: {err}"))?;
    eyre::ensure!(queue.is_empty(), "expected empty queue, found {}", queue.len());
    Ok(())
}

#[then("the outstanding claim is approved")]
fn claim_is_approved(world: &VerificationWorld) -> Result<(), eyre::Report> {
    let task = current_task(world)?;
    let request = task
        .verification()
        .ok_or_else(|| eyre::eyre!("no verification request on the task"))?;
    eyre::ensure!(request.is_approved(), "claim is not approved");
    eyre::ensure!(
        request.approved_at().is_some(),
        "approved claim carries no approval timestamp"
    );
    Ok(())
}

#[then(r#"the outstanding claim comment is "{comment}""#)]
fn claim_comment_is(world: &VerificationWorld, comment: String) -> Result<(), eyre::Report> {
    let task = current_task(world)?;
    let request = task
        .verification()
        .ok_or_else(|| eyre::eyre!("no verification request on the task"))?;
    eyre::ensure!(
        request.comment() == comment,
        "expected claim comment {comment:?}, found {:?}",
        request.comment()
    );
    Ok(())
}

#[then("the approval fails because no verification request exists")]
fn approval_failed_without_request(world: &VerificationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_approval
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing approval result in scenario world"))?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Domain(
                TaskDomainError::VerificationMissing(_)
            ))
        ),
        "approval did not fail with a missing verification request"
    );
    Ok(())
}
