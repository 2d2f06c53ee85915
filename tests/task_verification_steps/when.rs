//! When steps for task verification BDD scenarios.

use super::world::{VerificationWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the worker submits the task for verification with comment "{comment}""#)]
fn worker_submits(world: &mut VerificationWorld, comment: String) -> Result<(), eyre::Report> {
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

#[when(r#"the admin approves the verification with comment "{comment}""#)]
fn admin_approves(world: &mut VerificationWorld, comment: String) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let result = run_async(world.tasks.approve_verification(task.id(), comment));
    world.last_approval = Some(result);
    Ok(())
}
