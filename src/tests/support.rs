//! Test doubles shared by the page and app tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::backend::{
    AuthGateway, Clipboard, MemoryClipboard, MemoryTeamRepository, TeamRepository,
    mock_current_user,
};
use crate::error::{DevCircleError, DevCircleResult};
use crate::models::{Role, Team, TeamDraft, User};
use crate::pages::{TeamPage, TeamServices};

pub const ORIGIN: &str = "http://localhost:5173";

/// Every call fails with a backend error
pub struct FailingRepository;

#[async_trait]
impl TeamRepository for FailingRepository {
    async fn get_team(&self, _hackathon_id: &str) -> DevCircleResult<Option<Team>> {
        Err(DevCircleError::BackendError("unreachable".to_string()))
    }

    async fn create_team(&self, _draft: TeamDraft, _leader: &User) -> DevCircleResult<Team> {
        Err(DevCircleError::BackendError("unreachable".to_string()))
    }

    async fn update_team(&self, _draft: TeamDraft) -> DevCircleResult<Team> {
        Err(DevCircleError::BackendError("unreachable".to_string()))
    }

    async fn remove_member(&self, _member_id: &str) -> DevCircleResult<Team> {
        Err(DevCircleError::BackendError("unreachable".to_string()))
    }

    async fn change_role(&self, _member_id: &str, _role: Role) -> DevCircleResult<Team> {
        Err(DevCircleError::BackendError("unreachable".to_string()))
    }
}

pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn copy(&self, _text: &str) -> DevCircleResult<()> {
        Err(DevCircleError::ClipboardError("no terminal".to_string()))
    }
}

pub struct FailingGateway;

#[async_trait]
impl AuthGateway for FailingGateway {
    async fn login(&self, _email: &str, _password: &str) -> DevCircleResult<()> {
        Err(DevCircleError::BackendError("offline".to_string()))
    }

    async fn signup(&self, _name: &str, _email: &str, _password: &str) -> DevCircleResult<()> {
        Err(DevCircleError::BackendError("offline".to_string()))
    }
}

pub fn services_with(
    repository: Arc<dyn TeamRepository>,
    clipboard: Arc<dyn Clipboard>,
) -> TeamServices {
    TeamServices {
        repository,
        clipboard,
        current_user: mock_current_user(),
        invite_origin: ORIGIN.to_string(),
        notification_ttl: Duration::from_secs(4),
    }
}

/// A page over the sample team, already loaded
pub async fn loaded_page() -> (TeamPage, Arc<MemoryClipboard>) {
    let clipboard = Arc::new(MemoryClipboard::default());
    let services = services_with(
        Arc::new(MemoryTeamRepository::with_sample_team()),
        clipboard.clone(),
    );
    let mut page = TeamPage::new("hack2024", services);
    page.load().await;
    (page, clipboard)
}

/// A page with no team yet, already loaded
pub async fn empty_page() -> TeamPage {
    let services = services_with(
        Arc::new(MemoryTeamRepository::empty()),
        Arc::new(MemoryClipboard::default()),
    );
    let mut page = TeamPage::new("hack2024", services);
    page.load().await;
    page
}

pub fn type_text(input: &mut crate::pages::TextInput, text: &str) {
    for ch in text.chars() {
        input.insert_char(ch);
    }
}
