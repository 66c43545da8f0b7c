use anyhow::Result;
use chrono::Local;

use detox_app::AppState;
use detox_common::GoalKind;

pub fn show(state: &AppState) -> Result<()> {
    let progress = state.progress();

    println!("Digital Detox — Today");
    println!("=====================");
    println!();

    let badge = if !progress.is_verified() {
        "verification needed".to_string()
    } else if progress.all_achieved {
        "goals achieved".to_string()
    } else {
        "goals missed".to_string()
    };
    println!("Today: {}", badge);
    println!("Progress: {}%", state.progress_percent()?);
    if let Some(at) = progress.evaluated_at {
        println!("Last updated: {}", at.with_timezone(&Local).format("%H:%M:%S"));
    }
    println!();

    println!("Goals:");
    if state.goals().is_empty() {
        println!("  (none set — add one with `detox-ctl goal add-total`)");
    }
    let now = Local::now().time();
    for (goal, (_, status)) in state.goals().iter().zip(state.statuses()?) {
        let mut line = format!(
            "  {} {:<20} {} [{}]",
            status.glyph(),
            goal.name,
            goal.describe(),
            status.label()
        );
        if let GoalKind::TimeSlot { slot } = &goal.kind {
            if slot.contains(now) {
                line.push_str(" (window active now)");
            }
        }
        println!("{}", line);
    }
    println!();

    for group in state.groups() {
        let tally = state.group_tally(group.id)?;
        println!(
            "Group '{}' ({} days): {} achieved / {} failed / {} pending",
            group.name, group.duration_days, tally.achieved, tally.failed, tally.pending
        );
    }

    Ok(())
}
