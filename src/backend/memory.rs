use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::invite::generate_invite_code;
use super::TeamRepository;
use crate::devcircle_error;
use crate::error::{DevCircleError, DevCircleResult};
use crate::logging::log_debug;
use crate::models::{Member, Role, Team, TeamDraft, User};

/// The user every session is signed in as
pub fn mock_current_user() -> User {
    User::new("user1", "Alex Johnson", "alex@example.com")
}

/// The team the mock backend hands out on first load
pub fn sample_team() -> Team {
    Team {
        id: "team1".to_string(),
        name: "Code Crushers".to_string(),
        description: "Building the next generation of sustainable tech solutions".to_string(),
        max_members: 4,
        invite_code: "CC2024XYZ".to_string(),
        members: vec![
            Member::from_user(&mock_current_user(), Role::Leader),
            Member::from_user(&User::new("user2", "Sarah Chen", "sarah@example.com"), Role::Member),
            Member::from_user(&User::new("user3", "Mike Rodriguez", "mike@example.com"), Role::Member),
        ],
    }
}

/// In-process team store. Holds at most one team, the current user's, and
/// forgets it when dropped. Only the initial fetch is slowed down; mutations
/// apply immediately.
pub struct MemoryTeamRepository {
    team: Mutex<Option<Team>>,
    load_latency: Duration,
}

impl MemoryTeamRepository {
    pub fn new(team: Option<Team>) -> Self {
        Self {
            team: Mutex::new(team),
            load_latency: Duration::ZERO,
        }
    }

    pub fn empty() -> Self {
        Self::new(None)
    }

    pub fn with_sample_team() -> Self {
        Self::new(Some(sample_team()))
    }

    pub fn with_load_latency(mut self, latency: Duration) -> Self {
        self.load_latency = latency;
        self
    }

    async fn mutate<F>(&self, f: F) -> DevCircleResult<Team>
    where
        F: FnOnce(&mut Team) -> DevCircleResult<()> + Send,
    {
        let mut slot = self.team.lock().await;
        let team = slot.as_mut().ok_or(DevCircleError::TeamNotFound)?;
        f(team)?;
        Ok(team.clone())
    }
}

fn require_name(draft: &TeamDraft) -> DevCircleResult<()> {
    if draft.has_name() {
        Ok(())
    } else {
        Err(devcircle_error!(InvalidInput, "team name is empty"))
    }
}

#[async_trait]
impl TeamRepository for MemoryTeamRepository {
    async fn get_team(&self, hackathon_id: &str) -> DevCircleResult<Option<Team>> {
        // one team per session regardless of hackathon
        log_debug(&format!("Loading team for hackathon {}", hackathon_id));
        if !self.load_latency.is_zero() {
            tokio::time::sleep(self.load_latency).await;
        }
        Ok(self.team.lock().await.clone())
    }

    async fn create_team(&self, draft: TeamDraft, leader: &User) -> DevCircleResult<Team> {
        require_name(&draft)?;
        let team = Team {
            id: format!("team_{}", Utc::now().timestamp_millis()),
            name: draft.name,
            description: draft.description,
            max_members: draft.max_members,
            invite_code: generate_invite_code(),
            members: vec![Member::from_user(leader, Role::Leader)],
        };
        *self.team.lock().await = Some(team.clone());
        Ok(team)
    }

    async fn update_team(&self, draft: TeamDraft) -> DevCircleResult<Team> {
        require_name(&draft)?;
        self.mutate(|team| {
            team.apply(&draft);
            Ok(())
        })
        .await
    }

    async fn remove_member(&self, member_id: &str) -> DevCircleResult<Team> {
        self.mutate(|team| {
            let before = team.members.len();
            team.members.retain(|m| m.id != member_id);
            if team.members.len() == before {
                return Err(DevCircleError::MemberNotFound(member_id.to_string()));
            }
            Ok(())
        })
        .await
    }

    async fn change_role(&self, member_id: &str, role: Role) -> DevCircleResult<Team> {
        self.mutate(|team| {
            let member = team
                .members
                .iter_mut()
                .find(|m| m.id == member_id)
                .ok_or_else(|| DevCircleError::MemberNotFound(member_id.to_string()))?;
            member.role = role;
            Ok(())
        })
        .await
    }
}
