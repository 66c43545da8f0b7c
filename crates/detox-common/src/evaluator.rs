//! Goal evaluation: per-goal compliance against a usage snapshot, plus the
//! aggregate all-achieved verdict shown on the home screen.
//!
//! Evaluation is pure: calling it twice with the same goals and snapshot
//! yields identical results, and nothing ratchets — a later submission the
//! same day recomputes every status from scratch (last write wins).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::types::{Goal, GoalKind, GoalStatus, UsageSnapshot};

/// Outcome of evaluating a goal list against the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// True iff every goal evaluated to `Achieved`. Vacuously true for an
    /// empty goal list, matching how new users see the home badge before
    /// setting any goals.
    pub all_achieved: bool,
    pub per_goal: HashMap<Uuid, GoalStatus>,
}

/// Evaluate a single goal against the current snapshot.
///
/// With no snapshot the status is `Pending` regardless of kind. Limit
/// comparisons are inclusive: usage exactly equal to the limit counts as
/// achieved. A malformed goal is rejected with `Error::InvalidGoal`.
pub fn evaluate(goal: &Goal, snapshot: Option<&UsageSnapshot>) -> Result<GoalStatus> {
    goal.validate()?;

    let Some(snapshot) = snapshot else {
        return Ok(GoalStatus::Pending);
    };

    let status = match &goal.kind {
        GoalKind::TotalTime => {
            if snapshot.total_minutes <= goal.limit_minutes {
                GoalStatus::Achieved
            } else {
                GoalStatus::Failed
            }
        }
        GoalKind::SpecificApp { app_name } => {
            // An app absent from the snapshot was not used at all, which
            // always satisfies a non-negative limit.
            if snapshot.minutes_for(app_name) <= goal.limit_minutes {
                GoalStatus::Achieved
            } else {
                GoalStatus::Failed
            }
        }
        // No-use windows are self-reported as kept. The snapshot carries
        // no time-of-day data to check them against, so once a snapshot
        // exists they count as achieved.
        GoalKind::TimeSlot { .. } => GoalStatus::Achieved,
    };

    debug!(goal = %goal.name, status = status.label(), "evaluated goal");
    Ok(status)
}

/// Evaluate every goal and derive the aggregate verdict.
pub fn evaluate_all(
    goals: &[Goal],
    snapshot: Option<&UsageSnapshot>,
) -> Result<EvaluationReport> {
    let mut per_goal = HashMap::with_capacity(goals.len());
    let mut all_achieved = true;

    for goal in goals {
        let status = evaluate(goal, snapshot)?;
        if status != GoalStatus::Achieved {
            all_achieved = false;
        }
        per_goal.insert(goal.id, status);
    }

    Ok(EvaluationReport { all_achieved, per_goal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_goals() -> Vec<Goal> {
        vec![
            Goal::total_time("Daily total", 180),
            Goal::app_limit("Instagram", "Instagram", 30),
        ]
    }

    #[test]
    fn test_no_snapshot_is_pending_for_every_kind() {
        let goals = vec![
            Goal::total_time("Daily total", 180),
            Goal::app_limit("Instagram", "Instagram", 30),
            Goal::no_use_window("Sleep hours", "22:00", "07:00"),
        ];
        for goal in &goals {
            assert_eq!(evaluate(goal, None).unwrap(), GoalStatus::Pending);
        }
    }

    #[test]
    fn test_total_time_boundary_is_inclusive() {
        let goal = Goal::total_time("Daily total", 180);

        let at_limit = UsageSnapshot::new(180);
        assert_eq!(evaluate(&goal, Some(&at_limit)).unwrap(), GoalStatus::Achieved);

        let over_limit = UsageSnapshot::new(181);
        assert_eq!(evaluate(&goal, Some(&over_limit)).unwrap(), GoalStatus::Failed);
    }

    #[test]
    fn test_app_goal_against_recorded_usage() {
        let goal = Goal::app_limit("Instagram", "Instagram", 30);

        let under = UsageSnapshot::new(100).with_app("Instagram", 30);
        assert_eq!(evaluate(&goal, Some(&under)).unwrap(), GoalStatus::Achieved);

        let over = UsageSnapshot::new(100).with_app("Instagram", 31);
        assert_eq!(evaluate(&goal, Some(&over)).unwrap(), GoalStatus::Failed);
    }

    #[test]
    fn test_absent_app_counts_as_achieved() {
        let goal = Goal::app_limit("TikTok", "TikTok", 30);
        let snapshot = UsageSnapshot::new(100).with_app("Instagram", 45);
        assert_eq!(evaluate(&goal, Some(&snapshot)).unwrap(), GoalStatus::Achieved);
    }

    #[test]
    fn test_time_slot_is_achieved_once_snapshot_exists() {
        let goal = Goal::no_use_window("Sleep hours", "22:00", "07:00");
        let snapshot = UsageSnapshot::new(600);
        assert_eq!(evaluate(&goal, Some(&snapshot)).unwrap(), GoalStatus::Achieved);
    }

    #[test]
    fn test_malformed_goal_is_rejected_not_defaulted() {
        let goal = Goal::app_limit("Some app", "NotAnApp", 30);
        let snapshot = UsageSnapshot::new(100);
        assert!(matches!(
            evaluate(&goal, Some(&snapshot)),
            Err(Error::InvalidGoal { .. })
        ));
    }

    #[test]
    fn test_mixed_outcome_scenario() {
        let goals = sample_goals();
        let snapshot = UsageSnapshot::new(180).with_app("Instagram", 45);

        let report = evaluate_all(&goals, Some(&snapshot)).unwrap();
        assert_eq!(report.per_goal[&goals[0].id], GoalStatus::Achieved);
        assert_eq!(report.per_goal[&goals[1].id], GoalStatus::Failed);
        assert!(!report.all_achieved);
    }

    #[test]
    fn test_all_achieved_scenario() {
        let goals = sample_goals();
        let snapshot = UsageSnapshot::new(150).with_app("Instagram", 20);

        let report = evaluate_all(&goals, Some(&snapshot)).unwrap();
        assert_eq!(report.per_goal[&goals[0].id], GoalStatus::Achieved);
        assert_eq!(report.per_goal[&goals[1].id], GoalStatus::Achieved);
        assert!(report.all_achieved);
    }

    #[test]
    fn test_empty_goal_list_is_vacuously_achieved() {
        // Deliberate policy: zero goals count as "all achieved".
        let snapshot = UsageSnapshot::new(999);
        let report = evaluate_all(&[], Some(&snapshot)).unwrap();
        assert!(report.all_achieved);
        assert!(report.per_goal.is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let goals = sample_goals();
        let snapshot = UsageSnapshot::new(180).with_app("Instagram", 45);

        let first = evaluate_all(&goals, Some(&snapshot)).unwrap();
        let second = evaluate_all(&goals, Some(&snapshot)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pending_goals_block_all_achieved() {
        let goals = sample_goals();
        let report = evaluate_all(&goals, None).unwrap();
        assert!(!report.all_achieved);
        assert!(report.per_goal.values().all(|s| *s == GoalStatus::Pending));
    }
}
