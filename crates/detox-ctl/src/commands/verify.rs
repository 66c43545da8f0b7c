use anyhow::Result;

use detox_app::ingestion::ScreenshotAnalyzer;
use detox_app::AppState;
use detox_common::evaluator::EvaluationReport;
use detox_common::UsageSnapshot;

/// Parse a `NAME=MINUTES` per-app usage argument.
pub fn parse_app_usage(s: &str) -> Result<(String, u32), String> {
    let (name, minutes) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=MINUTES, got '{}'", s))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| format!("invalid minutes in '{}'", s))?;
    Ok((name.to_string(), minutes))
}

pub async fn upload(state: &mut AppState) -> Result<()> {
    println!("Analyzing screenshot...");
    let analyzer = ScreenshotAnalyzer::from_config(state.config());
    let report = state.verify_with(&analyzer).await?;
    print_report(state, &report)?;
    Ok(())
}

pub fn manual(state: &mut AppState, total: u32, apps: Vec<(String, u32)>) -> Result<()> {
    let mut snapshot = UsageSnapshot::new(total);
    for (name, minutes) in apps {
        snapshot = snapshot.with_app(name, minutes);
    }
    let report = state.submit_snapshot(snapshot)?;
    print_report(state, &report)?;
    Ok(())
}

fn print_report(state: &AppState, report: &EvaluationReport) -> Result<()> {
    println!();
    for goal in state.goals() {
        let status = report.per_goal[&goal.id];
        println!("{} {:<20} {} [{}]", status.glyph(), goal.name, goal.describe(), status.label());
    }
    println!();
    if report.all_achieved {
        println!("Congratulations! You hit today's goals.");
    } else {
        println!("You missed today's goals. Try again tomorrow!");
    }
    Ok(())
}
