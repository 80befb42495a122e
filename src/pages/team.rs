//! Team-management screen.
//!
//! The base view moves `Loading -> NoTeam | HasTeam`, `NoTeam -> CreatingTeam |
//! JoiningTeam` and back. While a team is shown, the settings form, the invite
//! modal and the removal confirmation sit on top of it. All team data goes
//! through the [`TeamRepository`]; the page only keeps the last copy it got.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::input::{Edit, TextInput};
use super::notification::NotificationSlot;
use crate::backend::{Clipboard, TeamRepository};
use crate::error::DevCircleError;
use crate::logging::{log_debug, log_error, log_info};
use crate::models::{Member, Role, Team, TeamDraft, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamView {
    Loading,
    NoTeam,
    CreatingTeam,
    JoiningTeam,
    HasTeam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    EditingTeam,
    InviteModal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamFormField {
    Name,
    Description,
    MaxMembers,
}

impl TeamFormField {
    const ORDER: [TeamFormField; 3] = [
        TeamFormField::Name,
        TeamFormField::Description,
        TeamFormField::MaxMembers,
    ];
}

/// Shared by the create view and the settings overlay
#[derive(Debug, Clone, PartialEq)]
pub struct TeamForm {
    pub name: TextInput,
    pub description: TextInput,
    pub max_members: u32,
    pub focus: TeamFormField,
}

impl Default for TeamForm {
    fn default() -> Self {
        Self::from_draft(&TeamDraft::default())
    }
}

impl TeamForm {
    pub fn from_draft(draft: &TeamDraft) -> Self {
        Self {
            name: TextInput::from_content(&draft.name),
            description: TextInput::from_content(&draft.description),
            max_members: draft.max_members,
            focus: TeamFormField::Name,
        }
    }

    pub fn to_draft(&self) -> TeamDraft {
        TeamDraft {
            name: self.name.value().to_string(),
            description: self.description.value().to_string(),
            max_members: self.max_members,
        }
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(TeamFormField::ORDER.len() - 1);
    }

    fn step_focus(&mut self, by: usize) {
        let len = TeamFormField::ORDER.len();
        let pos = TeamFormField::ORDER.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.focus = TeamFormField::ORDER[(pos + by) % len];
    }

    /// Text edits go to the focused text field; on the member limit the
    /// cursor keys step through the allowed sizes instead.
    pub fn edit(&mut self, edit: Edit) {
        match self.focus {
            TeamFormField::Name => self.name.apply(edit),
            TeamFormField::Description => self.description.apply(edit),
            TeamFormField::MaxMembers => match edit {
                Edit::Right => self.cycle_max_members(true),
                Edit::Left => self.cycle_max_members(false),
                _ => {}
            },
        }
    }

    pub fn cycle_max_members(&mut self, forward: bool) {
        let mut draft = self.to_draft();
        draft.cycle_max_members(forward);
        self.max_members = draft.max_members;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    RemoveMember(String),
}

/// A question awaiting an explicit yes; the action only runs on confirm
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub message: String,
    pub action: PendingAction,
}

/// What the page needs from the outside world
#[derive(Clone)]
pub struct TeamServices {
    pub repository: Arc<dyn TeamRepository>,
    pub clipboard: Arc<dyn Clipboard>,
    pub current_user: User,
    pub invite_origin: String,
    pub notification_ttl: Duration,
}

pub struct TeamPage {
    hackathon_id: String,
    services: TeamServices,
    team: Option<Team>,
    view: TeamView,
    overlay: Option<Overlay>,
    pub form: TeamForm,
    pub join_code: TextInput,
    pub invite_email: TextInput,
    confirmation: Option<Confirmation>,
    selected: usize,
    pub notification: NotificationSlot,
}

impl TeamPage {
    pub fn new(hackathon_id: &str, services: TeamServices) -> Self {
        let notification = NotificationSlot::new(services.notification_ttl);
        Self {
            hackathon_id: hackathon_id.to_string(),
            services,
            team: None,
            view: TeamView::Loading,
            overlay: None,
            form: TeamForm::default(),
            join_code: TextInput::new(),
            invite_email: TextInput::new(),
            confirmation: None,
            selected: 0,
            notification,
        }
    }

    pub fn hackathon_id(&self) -> &str {
        &self.hackathon_id
    }

    pub fn view(&self) -> TeamView {
        self.view
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    pub fn current_user(&self) -> &User {
        &self.services.current_user
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_member(&self) -> Option<&Member> {
        self.team.as_ref().and_then(|t| t.members.get(self.selected))
    }

    pub fn is_team_leader(&self) -> bool {
        self.team
            .as_ref()
            .map(|t| t.is_leader(&self.services.current_user.id))
            .unwrap_or(false)
    }

    /// Leaders may manage everybody except themselves
    pub fn can_manage(&self, member_id: &str) -> bool {
        self.is_team_leader() && member_id != self.services.current_user.id
    }

    pub fn invite_link(&self) -> String {
        self.team
            .as_ref()
            .map(|t| t.invite_link(&self.services.invite_origin))
            .unwrap_or_default()
    }

    fn set_team(&mut self, team: Team) {
        let last = team.members.len().saturating_sub(1);
        self.selected = self.selected.min(last);
        self.team = Some(team);
        self.view = TeamView::HasTeam;
    }

    // --- loading ---

    pub async fn load(&mut self) {
        self.view = TeamView::Loading;
        match self.services.repository.get_team(&self.hackathon_id).await {
            Ok(Some(team)) => {
                log_info(&format!("Loaded team {} ({})", team.name, team.id));
                self.set_team(team);
            }
            Ok(None) => {
                log_info("No team for current user");
                self.team = None;
                self.view = TeamView::NoTeam;
            }
            Err(e) => {
                log_error(&format!("Failed to load team: {}", e));
                self.team = None;
                self.view = TeamView::NoTeam;
                self.notification.error(format!("Failed to load team: {}", e));
            }
        }
    }

    // --- no team: create / join ---

    pub fn start_creating(&mut self) {
        if self.view == TeamView::NoTeam {
            self.form = TeamForm::default();
            self.view = TeamView::CreatingTeam;
        }
    }

    pub fn start_joining(&mut self) {
        if self.view == TeamView::NoTeam {
            self.join_code.clear();
            self.view = TeamView::JoiningTeam;
        }
    }

    /// Leave the create or join form without submitting
    pub fn cancel_form(&mut self) {
        if matches!(self.view, TeamView::CreatingTeam | TeamView::JoiningTeam) {
            self.view = TeamView::NoTeam;
        }
    }

    pub async fn submit_create(&mut self) {
        if self.view != TeamView::CreatingTeam {
            return;
        }
        let draft = self.form.to_draft();
        if !draft.has_name() {
            self.notification.error("Please enter a team name");
            return;
        }

        let leader = self.services.current_user.clone();
        match self.services.repository.create_team(draft, &leader).await {
            Ok(team) => {
                log_info(&format!("Created team {} with code {}", team.name, team.invite_code));
                self.selected = 0;
                self.set_team(team);
                self.form = TeamForm::default();
                self.notification.success("Team created successfully!");
            }
            Err(e) => {
                log_error(&format!("Failed to create team: {}", e));
                self.notification.error(format!("Failed to create team: {}", e));
            }
        }
    }

    /// Typed characters are upper-cased, invite codes are case-insensitive
    pub fn edit_join_code(&mut self, edit: Edit) {
        match edit {
            Edit::Insert(ch) => ch.to_uppercase().for_each(|c| self.join_code.insert_char(c)),
            other => self.join_code.apply(other),
        }
    }

    /// Nothing redeems the code yet: the user is told the join is under way
    /// and put back on the no-team view without a team attached.
    pub fn submit_join(&mut self) {
        if self.view != TeamView::JoiningTeam {
            return;
        }
        if self.join_code.is_blank() {
            self.notification.error("Please enter an invite code");
            return;
        }
        let code = self.join_code.value().to_string();
        log_info(&format!("Join requested with code {}", code));
        self.notification.success(format!("Joining team with code: {}", code));
        self.view = TeamView::NoTeam;
        self.join_code.clear();
    }

    // --- has team: settings overlay ---

    pub fn start_editing(&mut self) {
        if self.view != TeamView::HasTeam || !self.is_team_leader() {
            return;
        }
        if let Some(team) = &self.team {
            self.form = TeamForm::from_draft(&TeamDraft::from_team(team));
            self.overlay = Some(Overlay::EditingTeam);
        }
    }

    pub fn cancel_editing(&mut self) {
        if self.overlay == Some(Overlay::EditingTeam) {
            self.overlay = None;
        }
    }

    pub async fn save_editing(&mut self) {
        if self.overlay != Some(Overlay::EditingTeam) {
            return;
        }
        let draft = self.form.to_draft();
        if !draft.has_name() {
            self.notification.error("Team name cannot be empty");
            return;
        }

        match self.services.repository.update_team(draft).await {
            Ok(team) => {
                self.set_team(team);
                self.overlay = None;
                self.notification.success("Team settings updated!");
            }
            Err(e) => {
                log_error(&format!("Failed to update team: {}", e));
                self.notification.error(format!("Failed to update team: {}", e));
            }
        }
    }

    // --- has team: invite overlay ---

    pub fn open_invite(&mut self) {
        if self.view == TeamView::HasTeam && self.is_team_leader() {
            self.overlay = Some(Overlay::InviteModal);
        }
    }

    pub fn close_invite(&mut self) {
        if self.overlay == Some(Overlay::InviteModal) {
            self.overlay = None;
        }
    }

    pub fn copy_invite_link(&mut self) {
        let link = self.invite_link();
        if link.is_empty() {
            return;
        }
        match self.services.clipboard.copy(&link) {
            Ok(()) => self.notification.success("Invite link copied to clipboard!"),
            Err(e) => {
                log_error(&format!("Clipboard copy failed: {}", e));
                self.notification.error("Failed to copy link.");
            }
        }
    }

    /// Only a notification; no mail leaves the machine
    pub fn send_email_invite(&mut self) {
        if self.invite_email.value().is_empty() {
            return;
        }
        let email = self.invite_email.value().to_string();
        log_info(&format!("Invite requested for {}", email));
        self.notification.success(format!("Invite sent to {}", email));
        self.invite_email.clear();
        self.overlay = None;
    }

    // --- has team: member list ---

    pub fn select_next(&mut self) {
        if let Some(team) = &self.team {
            if !team.members.is_empty() {
                self.selected = (self.selected + 1) % team.members.len();
            }
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(team) = &self.team {
            if !team.members.is_empty() {
                self.selected = if self.selected == 0 {
                    team.members.len() - 1
                } else {
                    self.selected - 1
                };
            }
        }
    }

    /// Ask before removing; nothing changes until [`TeamPage::confirm`]
    pub fn request_remove(&mut self, member_id: &str) {
        if !self.can_manage(member_id) {
            log_debug(&format!("Ignoring remove request for {}", member_id));
            return;
        }
        self.confirmation = Some(Confirmation {
            message: "Are you sure you want to remove this member?".to_string(),
            action: PendingAction::RemoveMember(member_id.to_string()),
        });
    }

    pub fn request_remove_selected(&mut self) {
        if let Some(id) = self.selected_member().map(|m| m.id.clone()) {
            self.request_remove(&id);
        }
    }

    pub fn cancel_confirmation(&mut self) {
        self.confirmation = None;
    }

    pub async fn confirm(&mut self) {
        let Some(confirmation) = self.confirmation.take() else {
            return;
        };
        match confirmation.action {
            PendingAction::RemoveMember(member_id) => {
                match self.services.repository.remove_member(&member_id).await {
                    Ok(team) => {
                        log_info(&format!("Removed member {}", member_id));
                        self.set_team(team);
                        self.notification.success("Member removed from the team.");
                    }
                    Err(e) => self.report_member_error("remove member", e),
                }
            }
        }
    }

    pub async fn change_role(&mut self, member_id: &str, role: Role) {
        if !self.can_manage(member_id) {
            log_debug(&format!("Ignoring role change for {}", member_id));
            return;
        }
        match self.services.repository.change_role(member_id, role).await {
            Ok(team) => {
                log_info(&format!("Member {} is now {}", member_id, role));
                self.set_team(team);
                self.notification.success("Member role updated.");
            }
            Err(e) => self.report_member_error("update role", e),
        }
    }

    /// Target of a role toggle on the highlighted row, if it may be changed
    pub fn selected_role_toggle(&self) -> Option<(String, Role)> {
        self.selected_member()
            .filter(|m| self.can_manage(&m.id))
            .map(|m| (m.id.clone(), m.role.toggled()))
    }

    fn report_member_error(&mut self, what: &str, e: DevCircleError) {
        log_error(&format!("Failed to {}: {}", what, e));
        self.notification.error(format!("Failed to {}: {}", what, e));
    }

    pub fn tick(&mut self, now: Instant) {
        self.notification.expire(now);
    }
}
