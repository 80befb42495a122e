use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::backend::MemoryClipboard;
use crate::config::Config;
use crate::interactive::app::{App, AppServices, Popup, Screen, Task};
use crate::interactive::keys::{map_key, Action, KeyContext};
use crate::interactive::panels::landing::content_height;
use crate::interactive::ui;
use crate::pages::{Edit, TeamView};
use crate::router::Route;

fn instant_config() -> Config {
    Config {
        load_delay_ms: 0,
        submit_delay_ms: 0,
        ..Config::default()
    }
}

fn app_at(route: Route) -> (App, Option<Task>) {
    let services = AppServices::mock(instant_config(), Arc::new(MemoryClipboard::default()));
    App::new(services, route)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> Option<Task> {
    let action = map_key(key(code), app.key_context());
    app.handle_action(action)
}

fn buffer_to_string(buf: &Buffer) -> String {
    let mut s = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            s.push_str(buf.get(x, y).symbol());
        }
        s.push('\n');
    }
    s
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    for context in [KeyContext::Landing, KeyContext::Auth, KeyContext::TeamCreating, KeyContext::Goto] {
        assert_eq!(map_key(ctrl_c, context), Action::Quit);
    }
}

#[test]
fn test_text_contexts_type_letters() {
    assert_eq!(map_key(key(KeyCode::Char('q')), KeyContext::Auth), Action::Edit(Edit::Insert('q')));
    assert_eq!(map_key(key(KeyCode::Char('j')), KeyContext::TeamJoining), Action::Edit(Edit::Insert('j')));
    assert_eq!(map_key(key(KeyCode::Char('q')), KeyContext::Landing), Action::Quit);
    assert_eq!(map_key(key(KeyCode::Char('j')), KeyContext::TeamNoTeam), Action::JoinTeam);
}

#[test]
fn test_landing_to_auth() {
    let (mut app, task) = app_at(Route::Landing);
    assert!(task.is_none());
    assert_eq!(app.key_context(), KeyContext::Landing);

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.route, Route::Auth);
    assert!(matches!(app.screen, Screen::Auth(_)));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route, Route::Landing);
}

#[test]
fn test_unknown_path_shows_not_found() {
    let (app, _) = app_at(Route::parse("/nowhere"));
    assert!(matches!(&app.screen, Screen::NotFound(path) if path == "/nowhere"));
    assert!(render(&app).contains("/nowhere"));
}

#[test]
fn test_goto_popup_navigates() {
    let (mut app, _) = app_at(Route::Landing);
    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.popup, Some(Popup::Goto));
    assert_eq!(app.goto_input.value(), "/");

    for ch in "auth".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.popup, None);
    assert_eq!(app.route, Route::Auth);
}

#[tokio::test]
async fn test_team_route_loads_then_manages_members() {
    let (mut app, task) = app_at(Route::team("hack2024"));
    assert_eq!(task, Some(Task::LoadTeam));
    assert_eq!(app.key_context(), KeyContext::TeamLoading);
    assert!(render(&app).contains("Loading team"));

    app.run_task(Task::LoadTeam).await;
    assert_eq!(app.key_context(), KeyContext::TeamMain);
    let screen = render(&app);
    assert!(screen.contains("Code Crushers"));
    assert!(screen.contains("3/4 Members"));

    press(&mut app, KeyCode::Char('j'));
    assert!(press(&mut app, KeyCode::Char('d')).is_none());
    assert_eq!(app.key_context(), KeyContext::TeamConfirm);
    assert!(render(&app).contains("Are you sure you want to remove this member?"));

    let task = press(&mut app, KeyCode::Char('y')).unwrap();
    assert_eq!(task, Task::ConfirmPending);
    app.run_task(task).await;

    let Screen::Team(page) = &app.screen else { panic!("expected team screen") };
    assert_eq!(page.team().unwrap().members.len(), 2);
}

#[tokio::test]
async fn test_role_toggle_becomes_task() {
    let (mut app, _) = app_at(Route::team("hack2024"));
    app.run_task(Task::LoadTeam).await;

    press(&mut app, KeyCode::Char('j'));
    let task = press(&mut app, KeyCode::Char('r')).unwrap();
    assert_eq!(
        task,
        Task::ChangeRole { member_id: "user2".to_string(), role: crate::models::Role::Leader }
    );
}

#[tokio::test]
async fn test_no_team_config_starts_empty() {
    let config = Config { mock_team: false, ..instant_config() };
    let services = AppServices::mock(config, Arc::new(MemoryClipboard::default()));
    let (mut app, task) = App::new(services, Route::team("hack2024"));
    app.run_task(task.unwrap()).await;

    assert_eq!(app.key_context(), KeyContext::TeamNoTeam);
    assert!(render(&app).contains("Join the Adventure"));

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.key_context(), KeyContext::TeamCreating);
    for ch in "Night Owls".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    let task = press(&mut app, KeyCode::Enter).unwrap();
    app.run_task(task).await;

    let Screen::Team(page) = &app.screen else { panic!("expected team screen") };
    assert_eq!(page.view(), TeamView::HasTeam);
    assert_eq!(page.team().unwrap().name, "Night Owls");
}

#[tokio::test]
async fn test_navigation_resets_team_state() {
    let (mut app, _) = app_at(Route::team("hack2024"));
    app.run_task(Task::LoadTeam).await;
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    app.run_task(Task::ConfirmPending).await;

    press(&mut app, KeyCode::Esc);
    let task = app.handle_action(Action::OpenTeam);
    app.run_task(task.unwrap()).await;

    let Screen::Team(page) = &app.screen else { panic!("expected team screen") };
    assert_eq!(page.team().unwrap().members.len(), 3);
}

#[test]
fn test_every_screen_renders() {
    for route in [Route::Landing, Route::Auth, Route::team("x"), Route::parse("/missing")] {
        let (mut app, _) = app_at(route);
        render(&app);
        app.handle_action(Action::Help);
        assert!(render(&app).contains("Keyboard Shortcuts"));
    }
}

#[test]
fn test_landing_scroll_stops_at_content_end() {
    let (mut app, _) = app_at(Route::Landing);
    let Screen::Landing(page) = &app.screen else { panic!("expected landing screen") };
    let height = content_height(page);
    assert!(height > 1);

    for _ in 0..(height as usize + 50) {
        press(&mut app, KeyCode::Char('j'));
    }
    let Screen::Landing(page) = &app.screen else { panic!("expected landing screen") };
    assert_eq!(page.scroll, height - 1);

    press(&mut app, KeyCode::Char('k'));
    let Screen::Landing(page) = &app.screen else { panic!("expected landing screen") };
    assert_eq!(page.scroll, height - 2);
}

#[test]
fn test_empty_goto_goes_home() {
    let (mut app, _) = app_at(Route::Auth);
    app.handle_action(Action::Goto);
    app.goto_input.clear();
    app.handle_action(Action::Submit);

    assert_eq!(app.route, Route::Landing);
    assert!(matches!(app.screen, Screen::Landing(_)));
}
