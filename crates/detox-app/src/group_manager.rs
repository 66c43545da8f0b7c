//! Accountability groups: creation, simulated joins, invites, reactions.
//!
//! Group membership is local-only sample state. Joining by invite code is
//! simulated end to end: the code is checked for shape and the join is
//! acknowledged, but no remote roster exists to mutate.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use detox_common::{
    Error, GoalStatus, Group, GroupMember, MemberRole, Reaction, Result, StatusTally,
};

pub const INVITE_CODE_LEN: usize = 6;

pub struct GroupManager {
    groups: Vec<Group>,
}

impl GroupManager {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, group_id: Uuid) -> Result<&Group> {
        self.groups
            .iter()
            .find(|g| g.id == group_id)
            .ok_or(Error::GroupNotFound(group_id))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Create a group with the local user as its admin and sole member.
    pub fn create(&mut self, name: &str, duration_days: u32) -> Result<&Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let group = Group {
            id: Uuid::new_v4(),
            name: name.to_string(),
            duration_days,
            start_date: Utc::now().date_naive(),
            members: vec![GroupMember::new("Me", GoalStatus::Pending, 0)],
            my_role: MemberRole::Admin,
        };

        info!(group = %group.name, duration_days, "created group");
        self.groups.push(group);
        Ok(self.groups.last().expect("group just pushed"))
    }

    /// Join a group by invite code. The membership change is simulated;
    /// only the code's shape is verified.
    pub fn join(&mut self, code: &str) -> Result<()> {
        let code = code.trim();
        if code.len() != INVITE_CODE_LEN || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidInviteCode(code.to_string()));
        }
        info!(code, "joined group by invite code");
        Ok(())
    }

    /// Template the shareable invite link for a group. Admin only.
    pub fn invite_link(&self, group_id: Uuid, base_url: &str) -> Result<String> {
        let group = self.require_admin(group_id)?;
        Ok(format!("{}/{}", base_url.trim_end_matches('/'), group.id))
    }

    /// Generate a short invite code for a group. Admin only.
    pub fn invite_code(&self, group_id: Uuid) -> Result<String> {
        self.require_admin(group_id)?;
        let code: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(INVITE_CODE_LEN)
            .map(|b| (b as char).to_ascii_uppercase())
            .collect();
        Ok(code)
    }

    /// Send an encouragement to another member. Fire and forget: the
    /// reaction is acknowledged but not stored.
    pub fn send_reaction(
        &self,
        group_id: Uuid,
        member_id: Uuid,
        reaction: Reaction,
    ) -> Result<()> {
        let group = self.get(group_id)?;
        let member = group
            .members
            .iter()
            .find(|m| m.id == member_id)
            .ok_or(Error::MemberNotFound(member_id))?;

        debug!(group = %group.name, member = %member.name, ?reaction, "sent reaction");
        Ok(())
    }

    pub fn tally(&self, group_id: Uuid) -> Result<StatusTally> {
        Ok(StatusTally::of(&self.get(group_id)?.members))
    }

    fn require_admin(&self, group_id: Uuid) -> Result<&Group> {
        let group = self.get(group_id)?;
        if group.my_role != MemberRole::Admin {
            return Err(Error::NotAdmin);
        }
        Ok(group)
    }
}
