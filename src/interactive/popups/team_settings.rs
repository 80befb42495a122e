use ratatui::{layout::Rect, widgets::Clear, Frame};

use crate::interactive::layout::centered_popup;
use crate::interactive::panels::team::draw_team_form;
use crate::interactive::ui::ACCENT;
use crate::pages::TeamPage;

pub fn draw(frame: &mut Frame, area: Rect, page: &TeamPage) {
    let popup_area = centered_popup(64, 12, area);
    frame.render_widget(Clear, popup_area);
    draw_team_form(
        frame,
        popup_area,
        &page.form,
        " ⚙ Edit Team Settings ",
        "Save Changes",
        ACCENT,
    );
}
