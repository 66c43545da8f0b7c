use anyhow::{anyhow, Result};

use detox_app::AppState;
use detox_common::{Group, Reaction};

fn find<'a>(state: &'a AppState, name: &str) -> Result<&'a Group> {
    state
        .group_by_name(name)
        .ok_or_else(|| anyhow!("no group named '{}'", name))
}

pub fn list(state: &AppState) -> Result<()> {
    if state.groups().is_empty() {
        println!("No groups yet. Create one with `detox-ctl group create`.");
        return Ok(());
    }
    for group in state.groups() {
        let tally = state.group_tally(group.id)?;
        println!(
            "{} — {} day challenge, {} members ({} achieved / {} failed / {} pending)",
            group.name,
            group.duration_days,
            group.members.len(),
            tally.achieved,
            tally.failed,
            tally.pending
        );
    }
    Ok(())
}

pub fn show(state: &AppState, name: &str) -> Result<()> {
    let group = find(state, name)?;

    println!("{} — {} day challenge, started {}", group.name, group.duration_days, group.start_date);
    println!("Members:");
    for member in &group.members {
        println!(
            "  {} {:<12} {} • {} day streak",
            member.today_status.glyph(),
            member.name,
            member.today_status.label(),
            member.streak_days
        );
    }
    Ok(())
}

pub fn create(state: &mut AppState, name: &str, duration: u32) -> Result<()> {
    let group = state.create_group(name, duration)?;
    println!("Created '{}' ({} day challenge).", group.name, group.duration_days);
    Ok(())
}

pub fn join(state: &mut AppState, code: &str) -> Result<()> {
    state.join_group(code)?;
    println!("Joined! Start your new detox journey.");
    Ok(())
}

pub fn invite(state: &AppState, name: &str) -> Result<()> {
    let group_id = find(state, name)?.id;
    let link = state.invite_link(group_id)?;
    let code = state.invite_code(group_id)?;
    println!("Invite link: {}", link);
    println!("Invite code: {}", code);
    Ok(())
}

pub fn react(state: &AppState, group: &str, member: &str, reaction: &str) -> Result<()> {
    let reaction = match reaction {
        "cheer" => Reaction::Cheer,
        "congrats" => Reaction::Congrats,
        other => return Err(anyhow!("unknown reaction '{}', use cheer or congrats", other)),
    };

    let group = find(state, group)?;
    let member = group
        .members
        .iter()
        .find(|m| m.name == member)
        .ok_or_else(|| anyhow!("no member named '{}' in '{}'", member, group.name))?;

    state.send_reaction(group.id, member.id, reaction)?;
    println!("Sent to {}!", member.name);
    Ok(())
}
