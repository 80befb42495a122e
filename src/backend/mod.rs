//! Ports between the screens and whatever answers their requests.
//!
//! Nothing here talks to a network. [`MemoryTeamRepository`] and
//! [`MockAuthGateway`] stand in for a server and simulate its latency, so
//! the screens only ever see the traits and a real backend can replace the
//! mocks without touching view logic.

mod auth;
mod clipboard;
mod invite;
mod memory;

use async_trait::async_trait;

use crate::error::DevCircleResult;
use crate::models::{Role, Team, TeamDraft, User};

pub use auth::{AuthGateway, MockAuthGateway};
pub use clipboard::{Clipboard, MemoryClipboard, Osc52Clipboard};
pub use invite::generate_invite_code;
pub use memory::{MemoryTeamRepository, mock_current_user, sample_team};

/// Team storage as seen by the team-management screen.
///
/// Every mutating call returns the team as it looks afterwards; the screen
/// replaces its copy wholesale with that value.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Fetch the current user's team for a hackathon, `None` if they have none.
    async fn get_team(&self, hackathon_id: &str) -> DevCircleResult<Option<Team>>;

    /// Create a team with `leader` as its only member.
    async fn create_team(&self, draft: TeamDraft, leader: &User) -> DevCircleResult<Team>;

    /// Replace name, description and member limit.
    ///
    /// # Errors
    ///
    /// [`DevCircleError::TeamNotFound`](crate::error::DevCircleError::TeamNotFound)
    /// when there is no team to update.
    async fn update_team(&self, draft: TeamDraft) -> DevCircleResult<Team>;

    async fn remove_member(&self, member_id: &str) -> DevCircleResult<Team>;

    async fn change_role(&self, member_id: &str, role: Role) -> DevCircleResult<Team>;
}
