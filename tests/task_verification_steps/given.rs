//! Given steps for task verification BDD scenarios.

use super::world::{VerificationWorld, run_async};
use chrono::{Duration, Utc};
use foreman::directory::domain::Role;
use foreman::task::{
    domain::{Assignment, TaskPriority},
    services::CreateTaskRequest,
};
use rstest_bdd_macros::given;

#[given(r#"an approved admin "{name}""#)]
fn approved_admin(world: &mut VerificationWorld, name: String) -> Result<(), eyre::Report> {
    let admin = world.onboard(&name, Role::Admin)?;
    world.admin = Some(admin);
    Ok(())
}

#[given(r#"an approved backend worker "{name}""#)]
fn approved_backend_worker(
    world: &mut VerificationWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let worker = world.onboard(&name, Role::Backend)?;
    world.worker = Some(worker);
    Ok(())
}

#[given(r#"a task "{title}" assigned to the backend role"#)]
fn backend_role_task(world: &mut VerificationWorld, title: String) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(
        title,
        "Behaviour scenario task",
        Utc::now() + Duration::days(7),
        TaskPriority::Medium,
        Assignment::by_role(Role::Backend),
    );
    let task = run_async(world.tasks.create_task(request))
        .map_err(|err| eyre::eyre!("task creation failed: {err}"))?;
    world.task = Some(task);
    Ok(())
}

#[given(r#"the worker has submitted the task for verification with comment "{comment}""#)]
fn worker_has_submitted(
    world: &mut VerificationWorld,
    comment: String,
) -> Result<(), eyre::Report> {
    let worker = world
        .worker
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing worker in scenario world"))?;
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    run_async(
        world
            .tasks
            .submit_verification(task.id(), worker.id(), comment),
    )
    .map_err(|err| eyre::eyre!("verification submission failed: {err}"))?;
    Ok(())
}
