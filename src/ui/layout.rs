use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub filter_bar: Rect,
    pub table: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter dropdown
            Constraint::Min(5),    // Review table
            Constraint::Length(1), // Pagination footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        filter_bar: chunks[0],
        table: chunks[1],
        footer: chunks[2],
        status_bar: chunks[3],
    }
}
