use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let style = if state.load == LoadStatus::Failed {
        Theme::status_error()
    } else {
        Theme::status_bar()
    };

    if state.load == LoadStatus::Loading {
        let frame_idx = (state.tick_count / 4) as usize % SPINNER.len();
        parts.push(Span::styled(format!(" {}", SPINNER[frame_idx]), style));
    }

    parts.push(Span::styled(format!(" {} ", state.status_line()), style));

    let hints = Span::styled(" f filter  a all  s size  ←→ page  q quit ", style);
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.width());
    parts.push(Span::styled(" ".repeat(remaining), style));
    parts.push(hints);

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
