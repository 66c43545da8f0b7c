// End-to-end verification flow: provider-driven snapshot ingestion,
// re-evaluation, and last-write-wins resubmission.

use std::time::Duration;

use detox_app::ingestion::{FixedProvider, ScreenshotAnalyzer, UsageProvider};
use detox_app::notifications::{MemorySink, NotificationManager};
use detox_app::AppState;
use detox_common::config::AppConfig;
use detox_common::{Goal, GoalStatus, UsageSnapshot};

fn sample_state(sink: &MemorySink) -> AppState {
    let notifier = NotificationManager::new().with_sink(Box::new(sink.clone()));
    AppState::with_sample_data(AppConfig::default(), notifier)
}

#[tokio::test(start_paused = true)]
async fn screenshot_upload_updates_todays_progress() {
    let sink = MemorySink::new();
    let mut state = sample_state(&sink);

    // Sample goals: total <= 180, Instagram <= 30, sleep window.
    assert!(!state.progress().is_verified());

    let analyzer = ScreenshotAnalyzer::new(Duration::from_secs(2));
    let report = state.verify_with(&analyzer).await.unwrap();

    // Canned payload: total 180 (at the limit, achieved), Instagram 45
    // (over 30, failed), window goal reported kept.
    assert!(!report.all_achieved);
    let statuses: Vec<GoalStatus> =
        state.statuses().unwrap().into_iter().map(|(_, s)| s).collect();
    assert_eq!(
        statuses,
        vec![GoalStatus::Achieved, GoalStatus::Failed, GoalStatus::Achieved]
    );

    assert!(state.progress().is_verified());
    assert_eq!(state.progress().snapshot.as_ref().unwrap().total_minutes, 180);

    let toasts = sink.toasts();
    assert!(toasts.iter().any(|t| t.title == "Screenshot analysis complete!"));
    assert!(toasts.iter().any(|t| t.body.contains("missed")));
}

#[tokio::test]
async fn resubmission_last_write_wins() {
    let sink = MemorySink::new();
    let mut state = sample_state(&sink);
    let instagram_goal = state.goal_by_name("Instagram").unwrap().id;

    // First submission fails the Instagram goal.
    let failing = FixedProvider::new(UsageSnapshot::new(150).with_app("Instagram", 45));
    let report = state.verify_with(&failing).await.unwrap();
    assert!(!report.all_achieved);
    assert_eq!(state.goal_status(instagram_goal).unwrap(), GoalStatus::Failed);

    // A later submission the same day replaces it wholesale; no ratchet.
    let passing = FixedProvider::new(UsageSnapshot::new(150).with_app("Instagram", 20));
    let report = state.verify_with(&passing).await.unwrap();
    assert!(report.all_achieved);
    assert_eq!(state.goal_status(instagram_goal).unwrap(), GoalStatus::Achieved);
    assert_eq!(
        state.progress().snapshot.as_ref().unwrap().minutes_for("Instagram"),
        20
    );
}

#[tokio::test]
async fn manual_entry_recomputes_aggregate() {
    let notifier = NotificationManager::new();
    let mut state = AppState::new(AppConfig::default(), notifier);
    state.add_goal(Goal::total_time("Daily total", 180)).unwrap();
    state.add_goal(Goal::app_limit("Instagram", "Instagram", 30)).unwrap();

    let report = state
        .submit_snapshot(UsageSnapshot::new(180).with_app("Instagram", 45))
        .unwrap();
    assert!(!report.all_achieved);

    let report = state
        .submit_snapshot(UsageSnapshot::new(150).with_app("Instagram", 20))
        .unwrap();
    assert!(report.all_achieved);
    assert_eq!(state.progress_percent().unwrap(), 100);
}

#[tokio::test]
async fn unreported_app_counts_as_kept() {
    let mut state = AppState::new(AppConfig::default(), NotificationManager::new());
    let tiktok = state
        .add_goal(Goal::app_limit("TikTok", "TikTok", 30))
        .unwrap()
        .id;

    let provider = FixedProvider::new(UsageSnapshot::new(100).with_app("Instagram", 45));
    state.verify_with(&provider).await.unwrap();

    assert_eq!(state.goal_status(tiktok).unwrap(), GoalStatus::Achieved);
}
