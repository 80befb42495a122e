use std::fmt;
use serde::{Deserialize, Serialize};

use super::user::User;
use crate::constants::{DEFAULT_MAX_MEMBERS, TEAM_SIZE_OPTIONS};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Leader,
    Member,
}

impl Role {
    pub fn toggled(self) -> Self {
        match self {
            Role::Leader => Role::Member,
            Role::Member => Role::Leader,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Leader => write!(f, "Leader"),
            Role::Member => write!(f, "Member"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Member {
    pub fn from_user(user: &User, role: Role) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role,
        }
    }

    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "maxMembers")]
    pub max_members: u32,
    #[serde(rename = "inviteCode")]
    pub invite_code: String,
    pub members: Vec<Member>,
}

impl Team {
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub fn role_of(&self, user_id: &str) -> Option<Role> {
        self.member(user_id).map(|m| m.role)
    }

    pub fn is_leader(&self, user_id: &str) -> bool {
        self.role_of(user_id) == Some(Role::Leader)
    }

    /// Header tag text, e.g. `3/4 Members`
    pub fn occupancy(&self) -> String {
        format!("{}/{} Members", self.members.len(), self.max_members)
    }

    pub fn invite_link(&self, origin: &str) -> String {
        format!("{}/join/{}", origin.trim_end_matches('/'), self.invite_code)
    }

    /// Overwrite the editable fields, leaving id, code and members alone
    pub fn apply(&mut self, draft: &TeamDraft) {
        self.name = draft.name.clone();
        self.description = draft.description.clone();
        self.max_members = draft.max_members;
    }
}

/// The editable part of a team, as filled in by the create and settings forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDraft {
    pub name: String,
    pub description: String,
    pub max_members: u32,
}

impl Default for TeamDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            max_members: DEFAULT_MAX_MEMBERS,
        }
    }
}

impl TeamDraft {
    pub fn new(name: &str, description: &str, max_members: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            max_members,
        }
    }

    pub fn from_team(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            description: team.description.clone(),
            max_members: team.max_members,
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Step through the allowed team sizes, wrapping at both ends
    pub fn cycle_max_members(&mut self, forward: bool) {
        let len = TEAM_SIZE_OPTIONS.len();
        let pos = TEAM_SIZE_OPTIONS
            .iter()
            .position(|&n| n == self.max_members)
            .unwrap_or(0);
        let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
        self.max_members = TEAM_SIZE_OPTIONS[next];
    }
}
