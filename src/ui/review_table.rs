//! Paginated review grid.
//!
//! Rows come from the displayed subset of the store, one page at a time.
//! Each row is as tall as its longest wrapped cell, up to
//! `ui.max_row_lines`.

use crate::app::state::{AppState, LoadStatus};
use crate::review::model::{Review, MAX_RATING};
use crate::review::AppFilter;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const COLUMN_SPACING: u16 = 1;

/// One entry of the column schema.
pub struct Column {
    pub field: &'static str,
    pub header: &'static str,
    pub width: Constraint,
    /// Wrap long text instead of clipping it.
    pub wrap: bool,
    /// Custom cell renderer; plain text of the field otherwise.
    pub render: Option<fn(&Review) -> Line<'static>>,
}

pub const COLUMNS: [Column; 6] = [
    Column {
        field: "id",
        header: "ID",
        width: Constraint::Length(6),
        wrap: false,
        render: None,
    },
    Column {
        field: "app_name",
        header: "App",
        width: Constraint::Length(18),
        wrap: true,
        render: None,
    },
    Column {
        field: "rating",
        header: "Rating",
        width: Constraint::Length(7),
        wrap: false,
        render: Some(render_rating),
    },
    Column {
        field: "title",
        header: "Title",
        width: Constraint::Length(20),
        wrap: true,
        render: None,
    },
    Column {
        field: "content",
        header: "Content",
        width: Constraint::Fill(1),
        wrap: true,
        render: None,
    },
    Column {
        field: "author",
        header: "Author",
        width: Constraint::Length(14),
        wrap: false,
        render: None,
    },
];

pub fn field_text(review: &Review, field: &str) -> String {
    match field {
        "id" => review.id.to_string(),
        "app_name" => review.app_name.clone(),
        "rating" => review.rating.to_string(),
        "title" => review.title.clone(),
        "content" => review.content.clone(),
        "author" => review.author.clone(),
        _ => String::new(),
    }
}

/// Read-only star glyphs, e.g. `★★★☆☆` for a rating of 3.
pub fn star_glyphs(rating: u8) -> (String, String) {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    ("★".repeat(filled), "☆".repeat(empty))
}

fn render_rating(review: &Review) -> Line<'static> {
    let (filled, empty) = star_glyphs(review.stars());
    Line::from(vec![
        Span::styled(filled, Theme::star_filled()),
        Span::styled(empty, Theme::star_empty()),
    ])
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_w = 0;

        for word in paragraph.split_whitespace() {
            let word_w = word.width();
            let sep = usize::from(current_w > 0);

            if current_w + sep + word_w <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_w += sep + word_w;
                continue;
            }

            if current_w > 0 {
                lines.push(std::mem::take(&mut current));
                current_w = 0;
            }

            if word_w <= width {
                current.push_str(word);
                current_w = word_w;
                continue;
            }

            // Hard-split an overlong word
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if current_w + cw > width && current_w > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_w = 0;
                }
                current.push(c);
                current_w += cw;
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Resolve the schema against the width available to the columns.
pub fn column_widths(total: u16) -> Vec<u16> {
    Layout::horizontal(COLUMNS.iter().map(|c| c.width))
        .spacing(COLUMN_SPACING)
        .split(Rect::new(0, 0, total, 1))
        .iter()
        .map(|r| r.width)
        .collect()
}

/// Wrapped lines of a text column, capped at `max_lines`.
fn wrapped_cell(review: &Review, col: &Column, width: u16, max_lines: u16) -> Vec<String> {
    let max_lines = usize::from(max_lines.max(1));
    let mut lines = wrap_text(&field_text(review, col.field), usize::from(width));
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

/// Height of a row: the line count of its tallest wrapped cell.
pub fn row_height(review: &Review, widths: &[u16], max_lines: u16) -> u16 {
    COLUMNS
        .iter()
        .zip(widths)
        .filter(|(col, _)| col.wrap && col.render.is_none())
        .map(|(col, &w)| wrapped_cell(review, col, w, max_lines).len())
        .max()
        .unwrap_or(1)
        .max(1) as u16
}

fn build_row(review: &Review, widths: &[u16], max_lines: u16) -> Row<'static> {
    let cells: Vec<Cell> = COLUMNS
        .iter()
        .zip(widths)
        .map(|(col, &w)| {
            if let Some(render) = col.render {
                return Cell::from(render(review));
            }
            let style = if col.field == "app_name" {
                Theme::app_name()
            } else {
                Theme::cell()
            };
            if !col.wrap {
                return Cell::from(Span::styled(field_text(review, col.field), style));
            }
            let lines = wrapped_cell(review, col, w, max_lines);
            Cell::from(Text::from(
                lines.into_iter().map(Line::from).collect::<Vec<_>>(),
            ))
            .style(style)
        })
        .collect();

    Row::new(cells).height(row_height(review, widths, max_lines))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let len = state.store.displayed_len();
    let title = match state.store.filter() {
        AppFilter::All => format!(" Reviews ({}) ", len),
        filter @ AppFilter::App(_) => format!(" Reviews: {} ({}) ", filter.label(), len),
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    if len == 0 {
        let msg = match (&state.load, state.store.filter()) {
            (LoadStatus::Loading, _) => "  Loading reviews...".to_string(),
            (_, filter @ AppFilter::App(_)) => format!("  No reviews for {}.", filter.label()),
            _ => "  No reviews to show.".to_string(),
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default().fg(Theme::TEXT_MUTED),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    let highlight_w = HIGHLIGHT_SYMBOL.width() as u16;
    let widths = column_widths(inner.width.saturating_sub(highlight_w + COLUMN_SPACING));

    let (start, end) = state.grid.page_bounds(len);
    let max_lines = state.config.ui.max_row_lines;
    let rows: Vec<Row> = state
        .store
        .displayed_range(start, end)
        .map(|r| build_row(r, &widths, max_lines))
        .collect();

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(c.header))).style(Theme::header());

    let table = Table::new(rows, widths.iter().map(|&w| Constraint::Length(w)))
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(Theme::row_selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut table_state = TableState::default().with_selected(Some(state.grid.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// "Rows a–b of n · Page x/y · Rows per page" line under the table.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let grid = &state.grid;
    let len = state.store.displayed_len();
    let (start, end) = grid.page_bounds(len);
    let shown = if len == 0 {
        "0 of 0".to_string()
    } else {
        format!("{}–{} of {}", start + 1, end, len)
    };

    let mut spans = vec![
        Span::styled(" Rows ", Theme::hint_text()),
        Span::styled(shown, Theme::cell()),
        Span::styled("   Page ", Theme::hint_text()),
        Span::styled(
            format!("{}/{}", grid.page + 1, grid.page_count(len)),
            Theme::cell(),
        ),
        Span::styled("   Rows per page:", Theme::hint_text()),
    ];
    for &size in &grid.page_size_options {
        if size == grid.page_size {
            spans.push(Span::styled(format!(" [{}]", size), Theme::key_hint()));
        } else {
            spans.push(Span::styled(format!(" {}", size), Theme::hint_text()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(content: &str) -> Review {
        Review {
            id: 1,
            app_name: "Reader".into(),
            rating: 4,
            title: "Great".into(),
            content: content.into(),
            author: "sam".into(),
        }
    }

    #[test]
    fn test_star_glyphs() {
        assert_eq!(star_glyphs(0), (String::new(), "☆☆☆☆☆".to_string()));
        assert_eq!(star_glyphs(3), ("★★★".to_string(), "☆☆".to_string()));
        assert_eq!(star_glyphs(5), ("★★★★★".to_string(), String::new()));
        assert_eq!(star_glyphs(200), ("★★★★★".to_string(), String::new()));
    }

    #[test]
    fn test_wrap_text_greedy() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("short", 10), vec!["short"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_text_keeps_paragraphs() {
        assert_eq!(wrap_text("one\ntwo", 20), vec!["one", "two"]);
    }

    #[test]
    fn test_field_text() {
        let r = review("body");
        assert_eq!(field_text(&r, "id"), "1");
        assert_eq!(field_text(&r, "rating"), "4");
        assert_eq!(field_text(&r, "content"), "body");
        assert_eq!(field_text(&r, "unknown"), "");
    }

    #[test]
    fn test_schema_order() {
        let fields: Vec<_> = COLUMNS.iter().map(|c| c.field).collect();
        assert_eq!(fields, ["id", "app_name", "rating", "title", "content", "author"]);
        assert!(COLUMNS[2].render.is_some());
    }

    #[test]
    fn test_column_widths_give_rest_to_content() {
        let widths = column_widths(120);
        assert_eq!(widths.len(), COLUMNS.len());
        assert_eq!(widths[0], 6);
        assert_eq!(widths[2], 7);
        // 120 - fixed (6 + 18 + 7 + 20 + 14) - 5 gaps
        assert_eq!(widths[4], 50);
    }

    #[test]
    fn test_row_height_follows_content() {
        let widths = [6, 18, 7, 20, 10, 14];
        assert_eq!(row_height(&review("tiny"), &widths, 4), 1);
        assert_eq!(row_height(&review("one two three"), &widths, 4), 2);
        let long = "word ".repeat(40);
        assert_eq!(row_height(&review(&long), &widths, 4), 4);
        assert_eq!(row_height(&review(&long), &widths, 0), 1);
    }
}
