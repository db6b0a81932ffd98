mod filter_menu;
mod layout;
mod review_table;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    filter_menu::render_bar(frame, app_layout.filter_bar, state);
    review_table::render(frame, app_layout.table, state);
    review_table::render_footer(frame, app_layout.footer, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Popup last so it draws over the table
    filter_menu::render_popup(frame, app_layout.filter_bar, state);
}
