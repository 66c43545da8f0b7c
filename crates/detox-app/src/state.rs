//! The application state controller.
//!
//! One `AppState` owns the goal list, the groups, and today's progress;
//! every mutation flows through its command methods, so the screens that
//! sit on top of it never share mutable state with each other. The only
//! asynchronous path is snapshot ingestion, and even there the writes land
//! through `submit_snapshot` in completion order (last write wins, same as
//! the single-snapshot data model).

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use detox_common::config::AppConfig;
use detox_common::evaluator::{self, EvaluationReport};
use detox_common::{
    DailyProgress, Error, Goal, GoalStatus, Group, Reaction, Result, StatusTally, UsageSnapshot,
};

use crate::group_manager::GroupManager;
use crate::ingestion::UsageProvider;
use crate::notifications::{NotificationManager, Toast};
use crate::sample;

pub struct AppState {
    config: AppConfig,
    notifier: NotificationManager,
    goals: Vec<Goal>,
    groups: GroupManager,
    progress: DailyProgress,
}

impl AppState {
    /// Empty state: no goals, no groups, nothing verified today.
    pub fn new(config: AppConfig, notifier: NotificationManager) -> Self {
        Self {
            config,
            notifier,
            goals: Vec::new(),
            groups: GroupManager::new(Vec::new()),
            progress: DailyProgress::default(),
        }
    }

    /// State seeded with the first-launch sample goals and group.
    pub fn with_sample_data(config: AppConfig, notifier: NotificationManager) -> Self {
        let mut state = Self::new(config, notifier);
        state.goals = sample::sample_goals();
        state.groups = GroupManager::new(sample::sample_groups());
        state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Goals
    // ------------------------------------------------------------------

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn goal_by_name(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.name == name)
    }

    /// Validate and append a goal. Insertion order is display order.
    pub fn add_goal(&mut self, goal: Goal) -> Result<&Goal> {
        goal.validate()?;
        info!(goal = %goal.name, "added goal");
        self.goals.push(goal);
        self.notifier.push(Toast::goal_added());
        Ok(self.goals.last().expect("goal just pushed"))
    }

    pub fn remove_goal(&mut self, goal_id: Uuid) -> Result<Goal> {
        let index = self
            .goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or(Error::GoalNotFound(goal_id))?;
        let goal = self.goals.remove(index);
        info!(goal = %goal.name, "removed goal");
        self.notifier.push(Toast::goal_removed());
        Ok(goal)
    }

    // ------------------------------------------------------------------
    // Verification
    // ------------------------------------------------------------------

    pub fn progress(&self) -> &DailyProgress {
        &self.progress
    }

    /// Replace today's snapshot wholesale and re-evaluate every goal.
    ///
    /// Nothing is merged and nothing ratchets: a resubmission can flip any
    /// status in either direction.
    pub fn submit_snapshot(&mut self, snapshot: UsageSnapshot) -> Result<EvaluationReport> {
        let report = evaluator::evaluate_all(&self.goals, Some(&snapshot))?;

        self.progress = DailyProgress {
            snapshot: Some(snapshot),
            all_achieved: report.all_achieved,
            evaluated_at: Some(Utc::now()),
        };

        info!(all_achieved = report.all_achieved, "snapshot submitted");
        self.notifier.push(Toast::verification_result(report.all_achieved));
        Ok(report)
    }

    /// Fetch a snapshot from the provider, then submit it.
    pub async fn verify_with(&mut self, provider: &dyn UsageProvider) -> Result<EvaluationReport> {
        let snapshot = provider.fetch_snapshot().await?;
        self.notifier.push(Toast::analysis_complete());
        self.submit_snapshot(snapshot)
    }

    /// A single goal's status against the current snapshot.
    pub fn goal_status(&self, goal_id: Uuid) -> Result<GoalStatus> {
        let goal = self
            .goals
            .iter()
            .find(|g| g.id == goal_id)
            .ok_or(Error::GoalNotFound(goal_id))?;
        evaluator::evaluate(goal, self.progress.snapshot.as_ref())
    }

    /// Statuses for every goal, in display order.
    pub fn statuses(&self) -> Result<Vec<(Uuid, GoalStatus)>> {
        self.goals
            .iter()
            .map(|g| {
                evaluator::evaluate(g, self.progress.snapshot.as_ref()).map(|s| (g.id, s))
            })
            .collect()
    }

    /// Share of goals currently achieved, as a whole percentage. Zero when
    /// no goals are set.
    pub fn progress_percent(&self) -> Result<u32> {
        if self.goals.is_empty() {
            return Ok(0);
        }
        let achieved = self
            .statuses()?
            .iter()
            .filter(|(_, s)| *s == GoalStatus::Achieved)
            .count();
        Ok((achieved * 100 / self.goals.len()) as u32)
    }

    // ------------------------------------------------------------------
    // Groups
    // ------------------------------------------------------------------

    pub fn groups(&self) -> &[Group] {
        self.groups.groups()
    }

    pub fn group(&self, group_id: Uuid) -> Result<&Group> {
        self.groups.get(group_id)
    }

    pub fn group_by_name(&self, name: &str) -> Option<&Group> {
        self.groups.find_by_name(name)
    }

    pub fn create_group(&mut self, name: &str, duration_days: u32) -> Result<&Group> {
        let group = self.groups.create(name, duration_days)?;
        self.notifier.push(Toast::group_created());
        Ok(group)
    }

    pub fn join_group(&mut self, code: &str) -> Result<()> {
        self.groups.join(code)?;
        self.notifier.push(Toast::group_joined());
        Ok(())
    }

    /// Template the invite link for a group and announce it as copied.
    pub fn invite_link(&self, group_id: Uuid) -> Result<String> {
        let link = self.groups.invite_link(group_id, &self.config.invite_base_url)?;
        self.notifier.push(Toast::invite_copied());
        Ok(link)
    }

    pub fn invite_code(&self, group_id: Uuid) -> Result<String> {
        self.groups.invite_code(group_id)
    }

    pub fn send_reaction(
        &self,
        group_id: Uuid,
        member_id: Uuid,
        reaction: Reaction,
    ) -> Result<()> {
        self.groups.send_reaction(group_id, member_id, reaction)?;
        self.notifier
            .push(Toast::reaction_sent(reaction == Reaction::Congrats));
        Ok(())
    }

    pub fn group_tally(&self, group_id: Uuid) -> Result<StatusTally> {
        self.groups.tally(group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::MemorySink;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), NotificationManager::new())
    }

    #[test]
    fn test_add_and_remove_goal() {
        let mut state = state();
        let id = state.add_goal(Goal::total_time("Daily total", 180)).unwrap().id;
        assert_eq!(state.goals().len(), 1);

        let removed = state.remove_goal(id).unwrap();
        assert_eq!(removed.name, "Daily total");
        assert!(state.goals().is_empty());
        assert!(matches!(state.remove_goal(id), Err(Error::GoalNotFound(_))));
    }

    #[test]
    fn test_add_goal_rejects_invalid() {
        let mut state = state();
        let err = state.add_goal(Goal::app_limit("Bad", "NotAnApp", 10));
        assert!(matches!(err, Err(Error::InvalidGoal { .. })));
        assert!(state.goals().is_empty());
    }

    #[test]
    fn test_statuses_pending_before_first_submission() {
        let state = AppState::with_sample_data(AppConfig::default(), NotificationManager::new());
        assert!(!state.progress().is_verified());
        for (_, status) in state.statuses().unwrap() {
            assert_eq!(status, GoalStatus::Pending);
        }
        assert_eq!(state.progress_percent().unwrap(), 0);
    }

    #[test]
    fn test_submit_snapshot_updates_progress() {
        let mut state = state();
        state.add_goal(Goal::total_time("Daily total", 180)).unwrap();

        let report = state.submit_snapshot(UsageSnapshot::new(150)).unwrap();
        assert!(report.all_achieved);
        assert!(state.progress().is_verified());
        assert_eq!(state.progress().snapshot.as_ref().unwrap().total_minutes, 150);
        assert_eq!(state.progress_percent().unwrap(), 100);
    }

    #[test]
    fn test_submission_toasts_success_and_failure() {
        let sink = MemorySink::new();
        let notifier = NotificationManager::new().with_sink(Box::new(sink.clone()));
        let mut state = AppState::new(AppConfig::default(), notifier);
        state.add_goal(Goal::total_time("Daily total", 180)).unwrap();

        state.submit_snapshot(UsageSnapshot::new(200)).unwrap();
        state.submit_snapshot(UsageSnapshot::new(100)).unwrap();

        let toasts = sink.toasts();
        // goal added, failed submission, achieved submission
        assert_eq!(toasts.len(), 3);
        assert!(toasts[1].body.contains("missed"));
        assert!(toasts[2].body.contains("Congratulations"));
    }

    #[test]
    fn test_progress_percent_partial() {
        let mut state = state();
        state.add_goal(Goal::total_time("Daily total", 180)).unwrap();
        state.add_goal(Goal::app_limit("Instagram", "Instagram", 30)).unwrap();

        state
            .submit_snapshot(UsageSnapshot::new(150).with_app("Instagram", 45))
            .unwrap();
        assert_eq!(state.progress_percent().unwrap(), 50);
    }
}
