//! Seed data shown on first launch. Everything here is in-memory only and
//! re-created on every run.

use chrono::NaiveDate;
use uuid::Uuid;

use detox_common::{Goal, GoalStatus, Group, GroupMember, MemberRole};

pub fn sample_goals() -> Vec<Goal> {
    vec![
        Goal::total_time("Daily screen time", 180),
        Goal::app_limit("Instagram", "Instagram", 30),
        Goal::no_use_window("Sleep hours", "22:00", "07:00"),
    ]
}

pub fn sample_groups() -> Vec<Group> {
    vec![Group {
        id: Uuid::new_v4(),
        name: "Digital Detox Challenge".to_string(),
        duration_days: 14,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        members: vec![
            GroupMember::new("Jiho", GoalStatus::Achieved, 5),
            GroupMember::new("Minseo", GoalStatus::Failed, 2),
            GroupMember::new("Haeun", GoalStatus::Pending, 4),
            GroupMember::new("Me", GoalStatus::Pending, 3),
        ],
        my_role: MemberRole::Admin,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use detox_common::StatusTally;

    #[test]
    fn test_sample_goals_are_well_formed() {
        let goals = sample_goals();
        assert_eq!(goals.len(), 3);
        for goal in &goals {
            goal.validate().unwrap();
        }
    }

    #[test]
    fn test_sample_group_tally() {
        let groups = sample_groups();
        let tally = StatusTally::of(&groups[0].members);
        assert_eq!(tally.achieved, 1);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.pending, 2);
    }
}
