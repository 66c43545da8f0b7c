use uuid::Uuid;

/// Errors surfaced by the goal evaluator and the application controller.
///
/// A missing usage snapshot is not an error: it maps to the normal
/// `Pending` status. Malformed goals, on the other hand, are rejected
/// instead of being coerced to a default.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid goal '{name}': {reason}")]
    InvalidGoal { name: String, reason: String },

    #[error("goal not found: {0}")]
    GoalNotFound(Uuid),

    #[error("group not found: {0}")]
    GroupNotFound(Uuid),

    #[error("member not found in group: {0}")]
    MemberNotFound(Uuid),

    #[error("only the group admin can do that")]
    NotAdmin,

    #[error("invalid invite code: {0}")]
    InvalidInviteCode(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("usage provider failed: {0}")]
    Provider(String),

    #[error("failed to read config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
