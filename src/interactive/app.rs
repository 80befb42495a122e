use std::sync::Arc;
use std::time::Instant;

use crate::backend::{
    AuthGateway, Clipboard, MemoryTeamRepository, MockAuthGateway, TeamRepository, mock_current_user,
};
use crate::config::Config;
use crate::interactive::keys::{Action, KeyContext};
use crate::interactive::panels;
use crate::logging::log_debug;
use crate::models::{Role, User};
use crate::pages::{
    AuthPage, LandingPage, Overlay, TeamPage, TeamServices, TeamView, TextInput,
};
use crate::router::Route;

/// Builds the repository for a freshly mounted team screen
pub type RepositoryFactory = Box<dyn Fn() -> Arc<dyn TeamRepository> + Send + Sync>;

pub struct AppServices {
    pub config: Config,
    pub current_user: User,
    pub repositories: RepositoryFactory,
    pub auth: Arc<dyn AuthGateway>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl AppServices {
    /// The mock backend: every visit to the team screen starts from the
    /// hard-coded data again, as nothing is persisted.
    pub fn mock(config: Config, clipboard: Arc<dyn Clipboard>) -> Self {
        let with_team = config.mock_team;
        let latency = config.load_delay();
        Self {
            auth: Arc::new(MockAuthGateway::new(config.submit_delay())),
            current_user: mock_current_user(),
            repositories: Box::new(move || {
                let repo = if with_team {
                    MemoryTeamRepository::with_sample_team()
                } else {
                    MemoryTeamRepository::empty()
                };
                Arc::new(repo.with_load_latency(latency))
            }),
            clipboard,
            config,
        }
    }
}

pub enum Screen {
    Landing(LandingPage),
    Auth(AuthPage),
    Team(TeamPage),
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Popup {
    Help,
    Goto,
}

/// Async work the event loop awaits after drawing the frame that shows it
/// is in progress
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    LoadTeam,
    SubmitAuth,
    CreateTeam,
    SaveTeam,
    ConfirmPending,
    ChangeRole { member_id: String, role: Role },
}

pub struct App {
    pub route: Route,
    pub screen: Screen,
    pub popup: Option<Popup>,
    pub goto_input: TextInput,
    pub should_quit: bool,
    services: AppServices,
}

impl App {
    /// Build the app on `route`; the returned task, if any, must be run
    /// before the first key is handled.
    pub fn new(services: AppServices, route: Route) -> (Self, Option<Task>) {
        let mut app = Self {
            route: Route::Landing,
            screen: Screen::Landing(LandingPage::new()),
            popup: None,
            goto_input: TextInput::new(),
            should_quit: false,
            services,
        };
        let task = app.navigate(route);
        (app, task)
    }

    pub fn config(&self) -> &Config {
        &self.services.config
    }

    pub fn current_user(&self) -> &User {
        &self.services.current_user
    }

    /// Mount the screen for `route`. Screens never inherit state from the
    /// previous one.
    pub fn navigate(&mut self, route: Route) -> Option<Task> {
        log_debug(&format!("Navigating to {}", route));
        self.popup = None;
        let (screen, task) = match &route {
            Route::Landing => (Screen::Landing(LandingPage::new()), None),
            Route::Auth => (
                Screen::Auth(AuthPage::new(self.services.config.signup_redirect())),
                None,
            ),
            Route::Team { hackathon_id } => {
                let services = TeamServices {
                    repository: (self.services.repositories)(),
                    clipboard: self.services.clipboard.clone(),
                    current_user: self.services.current_user.clone(),
                    invite_origin: self.services.config.invite_origin.clone(),
                    notification_ttl: self.services.config.notification_ttl(),
                };
                (Screen::Team(TeamPage::new(hackathon_id, services)), Some(Task::LoadTeam))
            }
            Route::NotFound(path) => (Screen::NotFound(path.clone()), None),
        };
        self.route = route;
        self.screen = screen;
        task
    }

    pub fn key_context(&self) -> KeyContext {
        match self.popup {
            Some(Popup::Help) => return KeyContext::Help,
            Some(Popup::Goto) => return KeyContext::Goto,
            None => {}
        }
        match &self.screen {
            Screen::Landing(_) => KeyContext::Landing,
            Screen::Auth(_) => KeyContext::Auth,
            Screen::NotFound(_) => KeyContext::NotFound,
            Screen::Team(page) => {
                if page.confirmation().is_some() {
                    return KeyContext::TeamConfirm;
                }
                match (page.view(), page.overlay()) {
                    (TeamView::Loading, _) => KeyContext::TeamLoading,
                    (TeamView::NoTeam, _) => KeyContext::TeamNoTeam,
                    (TeamView::CreatingTeam, _) => KeyContext::TeamCreating,
                    (TeamView::JoiningTeam, _) => KeyContext::TeamJoining,
                    (TeamView::HasTeam, Some(Overlay::EditingTeam)) => KeyContext::TeamEditing,
                    (TeamView::HasTeam, Some(Overlay::InviteModal)) => KeyContext::TeamInvite,
                    (TeamView::HasTeam, None) => KeyContext::TeamMain,
                }
            }
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Option<Task> {
        match action {
            Action::None => return None,
            Action::Quit => {
                self.should_quit = true;
                return None;
            }
            Action::Help => {
                self.popup = Some(Popup::Help);
                return None;
            }
            Action::Goto => {
                self.goto_input = TextInput::from_content(&self.route.path());
                self.popup = Some(Popup::Goto);
                return None;
            }
            Action::Home => return self.navigate(Route::Landing),
            Action::OpenAuth => return self.navigate(Route::Auth),
            Action::OpenTeam => {
                let route = Route::team(&self.services.config.default_hackathon);
                return self.navigate(route);
            }
            _ => {}
        }

        match self.popup {
            Some(Popup::Help) => {
                if action == Action::Cancel {
                    self.popup = None;
                }
                return None;
            }
            Some(Popup::Goto) => return self.handle_goto_action(action),
            None => {}
        }

        match &mut self.screen {
            Screen::Landing(page) => {
                match action {
                    Action::ToggleMenu => page.toggle_menu(),
                    Action::ScrollDown => {
                        let height = panels::landing::content_height(page);
                        page.scroll_down(height);
                    }
                    Action::ScrollUp => page.scroll_up(),
                    _ => {}
                }
                None
            }
            Screen::Auth(page) => handle_auth_action(page, action),
            Screen::Team(page) => handle_team_action(page, action),
            Screen::NotFound(_) => None,
        }
    }

    fn handle_goto_action(&mut self, action: Action) -> Option<Task> {
        match action {
            Action::Cancel => {
                self.popup = None;
                None
            }
            Action::Submit => {
                let route = Route::parse(self.goto_input.value());
                self.navigate(route)
            }
            Action::Edit(edit) => {
                self.goto_input.apply(edit);
                None
            }
            _ => None,
        }
    }

    pub async fn run_task(&mut self, task: Task) {
        log_debug(&format!("Running task {:?}", task));
        match (&mut self.screen, task) {
            (Screen::Auth(page), Task::SubmitAuth) => {
                page.complete_submit(self.services.auth.as_ref()).await;
            }
            (Screen::Team(page), Task::LoadTeam) => page.load().await,
            (Screen::Team(page), Task::CreateTeam) => page.submit_create().await,
            (Screen::Team(page), Task::SaveTeam) => page.save_editing().await,
            (Screen::Team(page), Task::ConfirmPending) => page.confirm().await,
            (Screen::Team(page), Task::ChangeRole { member_id, role }) => {
                page.change_role(&member_id, role).await;
            }
            (_, task) => log_debug(&format!("Dropping {:?}, screen changed", task)),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        match &mut self.screen {
            Screen::Auth(page) => page.tick(now),
            Screen::Team(page) => page.tick(now),
            _ => {}
        }
    }
}

fn handle_auth_action(page: &mut AuthPage, action: Action) -> Option<Task> {
    match action {
        Action::Edit(edit) => page.edit(edit),
        Action::NextField => page.focus_next(),
        Action::PrevField => page.focus_prev(),
        Action::ToggleAuthMode => page.toggle_mode(),
        Action::TogglePassword => page.toggle_password(),
        Action::Submit => {
            if page.begin_submit() {
                return Some(Task::SubmitAuth);
            }
        }
        _ => {}
    }
    None
}

fn handle_team_action(page: &mut TeamPage, action: Action) -> Option<Task> {
    if action == Action::DismissNotification {
        page.notification.dismiss();
        return None;
    }

    if page.confirmation().is_some() {
        match action {
            Action::ConfirmYes => return Some(Task::ConfirmPending),
            Action::ConfirmNo => page.cancel_confirmation(),
            _ => {}
        }
        return None;
    }

    match (page.view(), page.overlay()) {
        (TeamView::NoTeam, _) => match action {
            Action::CreateTeam => page.start_creating(),
            Action::JoinTeam => page.start_joining(),
            _ => {}
        },
        (TeamView::CreatingTeam, _) => match action {
            Action::Edit(edit) => page.form.edit(edit),
            Action::NextField => page.form.focus_next(),
            Action::PrevField => page.form.focus_prev(),
            Action::Cancel => page.cancel_form(),
            Action::Submit => return Some(Task::CreateTeam),
            _ => {}
        },
        (TeamView::JoiningTeam, _) => match action {
            Action::Edit(edit) => page.edit_join_code(edit),
            Action::Cancel => page.cancel_form(),
            Action::Submit => page.submit_join(),
            _ => {}
        },
        (TeamView::HasTeam, Some(Overlay::EditingTeam)) => match action {
            Action::Edit(edit) => page.form.edit(edit),
            Action::NextField => page.form.focus_next(),
            Action::PrevField => page.form.focus_prev(),
            Action::Cancel => page.cancel_editing(),
            Action::Submit => return Some(Task::SaveTeam),
            _ => {}
        },
        (TeamView::HasTeam, Some(Overlay::InviteModal)) => match action {
            Action::Edit(edit) => page.invite_email.apply(edit),
            Action::CopyLink => page.copy_invite_link(),
            Action::Submit => page.send_email_invite(),
            Action::Cancel => page.close_invite(),
            _ => {}
        },
        (TeamView::HasTeam, None) => match action {
            Action::MoveDown => page.select_next(),
            Action::MoveUp => page.select_prev(),
            Action::OpenInvite => page.open_invite(),
            Action::OpenSettings => page.start_editing(),
            Action::RemoveMember => page.request_remove_selected(),
            Action::ToggleRole => {
                if let Some((member_id, role)) = page.selected_role_toggle() {
                    return Some(Task::ChangeRole { member_id, role });
                }
            }
            _ => {}
        },
        (TeamView::Loading, _) => {}
    }
    None
}
