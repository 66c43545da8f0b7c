use anyhow::{anyhow, Result};

use detox_app::AppState;
use detox_common::Goal;

pub fn list(state: &AppState) -> Result<()> {
    if state.goals().is_empty() {
        println!("No goals set.");
        return Ok(());
    }
    for (goal, (_, status)) in state.goals().iter().zip(state.statuses()?) {
        println!("{} {:<20} {}", status.glyph(), goal.name, goal.describe());
    }
    Ok(())
}

pub fn add_total(state: &mut AppState, name: &str, limit: u32) -> Result<()> {
    let goal = state.add_goal(Goal::total_time(name, limit))?;
    println!("Added: {} — {}", goal.name, goal.describe());
    Ok(())
}

pub fn add_app(state: &mut AppState, name: &str, app: &str, limit: u32) -> Result<()> {
    let goal = state.add_goal(Goal::app_limit(name, app, limit))?;
    println!("Added: {} — {}", goal.name, goal.describe());
    Ok(())
}

pub fn add_window(state: &mut AppState, name: &str, start: &str, end: &str) -> Result<()> {
    let goal = state.add_goal(Goal::no_use_window(name, start, end))?;
    println!("Added: {} — {}", goal.name, goal.describe());
    Ok(())
}

pub fn remove(state: &mut AppState, name: &str) -> Result<()> {
    let id = state
        .goal_by_name(name)
        .ok_or_else(|| anyhow!("no goal named '{}'", name))?
        .id;
    let goal = state.remove_goal(id)?;
    println!("Removed: {}", goal.name);
    Ok(())
}
