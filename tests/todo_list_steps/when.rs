//! When steps for task list BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the user adds a task "{text}""#)]
fn add_task(world: &mut TodoWorld, text: String) {
    let result = run_async(world.store.create(&text));
    world.last_create_result = Some(result);
}

#[when(r#"the user toggles the task "{text}""#)]
fn toggle_task(world: &mut TodoWorld, text: String) -> Result<(), eyre::Report> {
    let id = world
        .store
        .items()
        .iter()
        .find(|item| item.text().as_str() == text)
        .map(|item| item.id().clone())
        .ok_or_else(|| eyre::eyre!("no task with text {text:?} in scenario world"))?;
    run_async(world.store.toggle(&id));
    Ok(())
}

#[when("the task list is loaded")]
fn load_task_list(world: &mut TodoWorld) {
    run_async(world.store.load());
}

#[when("the task list is reloaded")]
fn reload_task_list(world: &mut TodoWorld) {
    world.reopen_store();
    run_async(world.store.load());
}

#[when("the user declines the prompt")]
fn decline_prompt(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    if !world.signals.decline_confirmation() {
        return Err(eyre::eyre!("no visible prompt to decline"));
    }
    Ok(())
}

#[when("the prompt is resolved")]
fn resolve_prompt(world: &mut TodoWorld) {
    world.signals.resolve_confirmation();
}
