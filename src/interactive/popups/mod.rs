pub mod confirm;
pub mod goto;
pub mod help;
pub mod invite;
pub mod team_settings;

use ratatui::{Frame, layout::Rect};
use crate::interactive::app::{App, Popup};
use crate::pages::{Overlay, TeamPage};

/// Draw the active app-wide popup, if any. Draws on top of everything.
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &App) {
    let Some(popup) = &app.popup else { return };

    match popup {
        Popup::Help => help::draw(frame, area, app),
        Popup::Goto => goto::draw(frame, area, app),
    }
}

/// Modals owned by the team screen. The confirmation dialog sits above
/// any other overlay.
pub fn draw_team_overlays(frame: &mut Frame, area: Rect, page: &TeamPage) {
    match page.overlay() {
        Some(Overlay::EditingTeam) => team_settings::draw(frame, area, page),
        Some(Overlay::InviteModal) => invite::draw(frame, area, page),
        None => {}
    }
    if let Some(confirmation) = page.confirmation() {
        confirm::draw(frame, area, &confirmation.message);
    }
}
