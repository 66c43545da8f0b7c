use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::time_slot;

/// Applications selectable for per-app limits. A `SpecificApp` goal must
/// target one of these names; usage snapshots report minutes keyed by them.
pub const KNOWN_APPS: &[&str] = &[
    "Instagram",
    "TikTok",
    "YouTube",
    "Facebook",
    "Twitter",
    "KakaoTalk",
    "Netflix",
    "Twitch",
    "Discord",
    "Snapchat",
];

/// The kind of constraint a goal places on daily usage.
///
/// The payload lives on the variant, so a well-typed goal cannot carry an
/// app name without being a per-app goal, or a time slot without being a
/// window goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GoalKind {
    /// Cap on the whole day's screen time.
    TotalTime,
    /// Cap on one application's usage.
    SpecificApp {
        #[serde(rename = "appName")]
        app_name: String,
    },
    /// A clock-time window in which the device should not be used.
    TimeSlot {
        #[serde(rename = "timeSlot")]
        slot: TimeSlot,
    },
}

/// A `{start, end}` pair of `HH:MM` clock times. No ordering is enforced:
/// an end earlier than the start denotes an overnight span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

/// A user-defined screen-time constraint.
///
/// Goals are held in insertion order (display order), created and deleted
/// by explicit user action, and never otherwise mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, assigned at creation, immutable.
    pub id: Uuid,
    /// Display label, user-supplied, non-empty.
    pub name: String,
    /// Budget in minutes. Its meaning depends on the kind; ignored for
    /// `TimeSlot` goals.
    pub limit_minutes: u32,
    #[serde(flatten)]
    pub kind: GoalKind,
}

impl Goal {
    /// Cap on the whole day's screen time, in minutes.
    pub fn total_time(name: impl Into<String>, limit_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            limit_minutes,
            kind: GoalKind::TotalTime,
        }
    }

    /// Cap on a single application's usage, in minutes.
    pub fn app_limit(
        name: impl Into<String>,
        app_name: impl Into<String>,
        limit_minutes: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            limit_minutes,
            kind: GoalKind::SpecificApp { app_name: app_name.into() },
        }
    }

    /// A no-use window between two `HH:MM` clock times.
    pub fn no_use_window(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            limit_minutes: 0,
            kind: GoalKind::TimeSlot {
                slot: TimeSlot { start: start.into(), end: end.into() },
            },
        }
    }

    /// Check well-formedness beyond what the type system enforces: the
    /// name must be non-empty, a per-app goal must target a known
    /// application, and window times must parse as `HH:MM`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidGoal {
                name: self.name.clone(),
                reason: "name must not be empty".to_string(),
            });
        }

        match &self.kind {
            GoalKind::TotalTime => Ok(()),
            GoalKind::SpecificApp { app_name } => {
                if KNOWN_APPS.contains(&app_name.as_str()) {
                    Ok(())
                } else {
                    Err(Error::InvalidGoal {
                        name: self.name.clone(),
                        reason: format!("unknown application: {}", app_name),
                    })
                }
            }
            GoalKind::TimeSlot { slot } => {
                slot.validate().map_err(|reason| Error::InvalidGoal {
                    name: self.name.clone(),
                    reason,
                })
            }
        }
    }

    /// Human-readable summary of what the goal demands, used by list views.
    pub fn describe(&self) -> String {
        match &self.kind {
            GoalKind::TotalTime => format!("at most {} minutes per day", self.limit_minutes),
            GoalKind::SpecificApp { app_name } => {
                format!("{}: at most {} minutes", app_name, self.limit_minutes)
            }
            GoalKind::TimeSlot { slot } => {
                format!("no use between {} and {}", slot.start, slot.end)
            }
        }
    }
}

/// One day's measured usage: whole-day minutes plus per-app minutes.
/// An application absent from the map counts as zero usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UsageSnapshot {
    pub total_minutes: u32,
    pub app_minutes: HashMap<String, u32>,
}

impl UsageSnapshot {
    pub fn new(total_minutes: u32) -> Self {
        Self { total_minutes, app_minutes: HashMap::new() }
    }

    pub fn with_app(mut self, app_name: impl Into<String>, minutes: u32) -> Self {
        self.app_minutes.insert(app_name.into(), minutes);
        self
    }

    /// Minutes recorded for an application, zero if it was not reported.
    pub fn minutes_for(&self, app_name: &str) -> u32 {
        self.app_minutes.get(app_name).copied().unwrap_or(0)
    }
}

/// Per-goal compliance outcome. `Pending` is the default until a snapshot
/// exists for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Achieved,
    Failed,
    Pending,
}

impl GoalStatus {
    /// Fixed display glyph for status badges.
    pub fn glyph(&self) -> &'static str {
        match self {
            GoalStatus::Achieved => "✅",
            GoalStatus::Failed => "❌",
            GoalStatus::Pending => "⏳",
        }
    }

    /// Fixed display label for status badges.
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Achieved => "achieved",
            GoalStatus::Failed => "failed",
            GoalStatus::Pending => "pending",
        }
    }
}

/// Aggregate derived state for the current day. Replaced wholesale on each
/// snapshot submission; no history is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DailyProgress {
    pub snapshot: Option<UsageSnapshot>,
    pub all_achieved: bool,
    pub evaluated_at: Option<DateTime<Utc>>,
}

impl DailyProgress {
    /// Whether a snapshot has been submitted today.
    pub fn is_verified(&self) -> bool {
        self.evaluated_at.is_some()
    }
}

/// Role of the local user within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
}

/// A participant in an accountability group, with their self-reported
/// status for today and their consecutive-day streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: Uuid,
    pub name: String,
    pub today_status: GoalStatus,
    pub streak_days: u32,
}

impl GroupMember {
    pub fn new(name: impl Into<String>, today_status: GoalStatus, streak_days: u32) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), today_status, streak_days }
    }
}

/// A named cohort sharing a challenge duration, with individually tracked
/// member statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub duration_days: u32,
    pub start_date: NaiveDate,
    pub members: Vec<GroupMember>,
    pub my_role: MemberRole,
}

/// An encouragement sent to another group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Cheer,
    Congrats,
}

/// Member counts per status, shown on the group overview panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusTally {
    pub achieved: usize,
    pub failed: usize,
    pub pending: usize,
}

impl StatusTally {
    pub fn of(members: &[GroupMember]) -> Self {
        let mut tally = Self::default();
        for member in members {
            match member.today_status {
                GoalStatus::Achieved => tally.achieved += 1,
                GoalStatus::Failed => tally.failed += 1,
                GoalStatus::Pending => tally.pending += 1,
            }
        }
        tally
    }
}

impl TimeSlot {
    /// Check both endpoints parse as `HH:MM`.
    pub fn validate(&self) -> std::result::Result<(), String> {
        time_slot::parse_clock(&self.start)?;
        time_slot::parse_clock(&self.end)?;
        Ok(())
    }
}
