use crate::app::state::AppState;
use crate::review::AppFilter;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

/// The closed dropdown: a bordered box showing the active filter.
pub fn render_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Filter by App ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if state.filter_menu.visible {
            Style::default().fg(Theme::ACCENT_LAVENDER)
        } else {
            Theme::border()
        })
        .style(Theme::panel_bg());

    let value_style = match state.store.filter() {
        AppFilter::All => Style::default()
            .fg(Theme::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC),
        AppFilter::App(_) => Style::default().fg(Theme::ACCENT_TEAL),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", state.store.filter().label()), value_style),
        Span::styled("▾", Style::default().fg(Theme::ACCENT_AMBER)),
        Span::styled(
            format!("   ({} apps)", state.store.app_names().len()),
            Theme::hint_text(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// The open dropdown, drawn as a popup under the filter bar.
pub fn render_popup(frame: &mut Frame, anchor: Rect, state: &AppState) {
    if !state.filter_menu.visible {
        return;
    }

    let area = frame.area();
    let options = state.filter_options();
    let popup_w = (options
        .iter()
        .map(|o| o.label().chars().count())
        .max()
        .unwrap_or(0) as u16
        + 8)
        .max(30)
        .min(area.width.saturating_sub(anchor.x));
    let max_h = area.height.saturating_sub(anchor.y + anchor.height);
    let popup_h = (options.len() as u16 + 2).min(max_h);
    if popup_h < 3 {
        return;
    }
    let popup_area = Rect::new(anchor.x, anchor.y + anchor.height, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_LAVENDER))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let visible = inner.height as usize;
    let highlighted = state.filter_menu.highlighted;
    let start = (highlighted + 1).saturating_sub(visible);
    let current = state.current_filter_index();

    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, option)| {
            let marker = if i == current { "● " } else { "  " };
            let text = format!(" {}{}", marker, option.label());
            let style = if i == highlighted {
                Theme::menu_selected()
            } else if *option == AppFilter::All {
                Style::default()
                    .fg(Theme::TEXT_SECONDARY)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(Theme::TEXT_PRIMARY)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if options.len() > visible {
        let mut scrollbar_state =
            ScrollbarState::new(options.len().saturating_sub(visible)).position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Style::default().fg(Theme::ACCENT_LAVENDER))
                .track_style(Style::default().fg(Theme::BORDER_DIM)),
            popup_area,
            &mut scrollbar_state,
        );
    }
}
