use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pages::Edit;

/// Which key map applies right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Landing,
    Auth,
    NotFound,
    TeamLoading,
    TeamNoTeam,
    TeamCreating,
    TeamJoining,
    TeamMain,
    TeamEditing,
    TeamInvite,
    TeamConfirm,
    Help,
    Goto,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Navigation
    Home,
    OpenAuth,
    OpenTeam,
    Goto,
    ScrollUp,
    ScrollDown,
    ToggleMenu,

    // Forms
    Edit(Edit),
    NextField,
    PrevField,
    Submit,
    Cancel,

    // Auth
    ToggleAuthMode,
    TogglePassword,

    // Team
    CreateTeam,
    JoinTeam,
    MoveUp,
    MoveDown,
    OpenInvite,
    OpenSettings,
    ToggleRole,
    RemoveMember,
    ConfirmYes,
    ConfirmNo,
    CopyLink,
    DismissNotification,

    // General
    Help,
    Quit,

    None,
}

pub fn map_key(key: KeyEvent, context: KeyContext) -> Action {
    if is_ctrl(&key, 'c') {
        return Action::Quit;
    }
    match context {
        KeyContext::Landing => map_landing_key(key),
        KeyContext::Auth => map_auth_key(key),
        KeyContext::NotFound => map_not_found_key(key),
        KeyContext::TeamLoading => map_loading_key(key),
        KeyContext::TeamNoTeam => map_no_team_key(key),
        KeyContext::TeamCreating | KeyContext::TeamEditing => map_team_form_key(key),
        KeyContext::TeamJoining => map_single_input_key(key),
        KeyContext::TeamMain => map_team_key(key),
        KeyContext::TeamInvite => map_invite_key(key),
        KeyContext::TeamConfirm => map_confirm_key(key),
        KeyContext::Help => map_help_key(key),
        KeyContext::Goto => map_single_input_key(key),
    }
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Keys that edit the focused text field
fn edit_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return Action::None;
    }
    match key.code {
        KeyCode::Char(c) => Action::Edit(Edit::Insert(c)),
        KeyCode::Backspace => Action::Edit(Edit::Backspace),
        KeyCode::Delete => Action::Edit(Edit::Delete),
        KeyCode::Left => Action::Edit(Edit::Left),
        KeyCode::Right => Action::Edit(Edit::Right),
        KeyCode::Home => Action::Edit(Edit::Home),
        KeyCode::End => Action::Edit(Edit::End),
        _ => Action::None,
    }
}

fn map_landing_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Char('m') => Action::ToggleMenu,
        KeyCode::Char('l') | KeyCode::Char('s') | KeyCode::Char('g') | KeyCode::Enter => Action::OpenAuth,
        KeyCode::Char('t') => Action::OpenTeam,
        KeyCode::Char(':') => Action::Goto,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_auth_key(key: KeyEvent) -> Action {
    if is_ctrl(&key, 't') {
        return Action::ToggleAuthMode;
    }
    if is_ctrl(&key, 'p') {
        return Action::TogglePassword;
    }
    match key.code {
        KeyCode::Esc => Action::Home,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Enter => Action::Submit,
        KeyCode::F(1) => Action::Help,
        _ => edit_key(key),
    }
}

fn map_not_found_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h') => Action::Home,
        KeyCode::Char(':') => Action::Goto,
        _ => Action::None,
    }
}

fn map_loading_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::Home,
        _ => Action::None,
    }
}

fn map_no_team_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::Home,
        KeyCode::Char('c') => Action::CreateTeam,
        KeyCode::Char('j') => Action::JoinTeam,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char(':') => Action::Goto,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_team_form_key(key: KeyEvent) -> Action {
    if is_ctrl(&key, 'x') {
        return Action::DismissNotification;
    }
    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Enter => Action::Submit,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        _ => edit_key(key),
    }
}

/// Join code and go-to path: one field, Enter submits, Esc backs out
fn map_single_input_key(key: KeyEvent) -> Action {
    if is_ctrl(&key, 'x') {
        return Action::DismissNotification;
    }
    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Enter => Action::Submit,
        _ => edit_key(key),
    }
}

fn map_team_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::Home,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('i') => Action::OpenInvite,
        KeyCode::Char('e') | KeyCode::Char('s') => Action::OpenSettings,
        KeyCode::Char('r') => Action::ToggleRole,
        KeyCode::Char('d') | KeyCode::Delete => Action::RemoveMember,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char(':') => Action::Goto,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_invite_key(key: KeyEvent) -> Action {
    if is_ctrl(&key, 'y') {
        return Action::CopyLink;
    }
    map_single_input_key(key)
}

fn map_confirm_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmYes,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::ConfirmNo,
        _ => Action::None,
    }
}

fn map_help_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter | KeyCode::F(1) => Action::Cancel,
        _ => Action::None,
    }
}

/// Footer hint line for each context
pub fn hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Landing => "l: Login  s: Sign Up  t: My Team  m: Menu  j/k: Scroll  :: Go to  ?: Help  q: Quit",
        KeyContext::Auth => "Tab: Next field  Enter: Submit  Ctrl+T: Login/Sign Up  Ctrl+P: Show password  Esc: Home",
        KeyContext::NotFound => "Enter: Home  :: Go to  q: Quit",
        KeyContext::TeamLoading => "Esc: Home  q: Quit",
        KeyContext::TeamNoTeam => "c: Create team  j: Join team  Esc: Home  q: Quit",
        KeyContext::TeamCreating => "Tab: Next field  \u{2190}/\u{2192}: Team size  Enter: Create Team  Esc: Cancel",
        KeyContext::TeamJoining => "Enter: Join Team  Esc: Cancel",
        KeyContext::TeamMain => "j/k: Select  i: Invite  s: Settings  r: Toggle role  d: Remove  x: Dismiss  Esc: Home",
        KeyContext::TeamEditing => "Tab: Next field  \u{2190}/\u{2192}: Team size  Enter: Save Changes  Esc: Cancel",
        KeyContext::TeamInvite => "Ctrl+Y: Copy link  Enter: Send invite  Esc: Done",
        KeyContext::TeamConfirm => "y: Confirm  n: Cancel",
        KeyContext::Help => "Esc: Close",
        KeyContext::Goto => "Enter: Go  Esc: Cancel",
    }
}
