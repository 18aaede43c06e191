//! Filters widget rendering.
//!
//! Displays filter rows, the cost range and the active filter labels.

use crate::app::{FilterRow, UiMode};
use crate::ui::ViewFrame;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render the filters widget.
///
/// # Arguments
/// * `frame` - View snapshot
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// One line per filter row (the selected row is marked while editing),
/// then the active filter labels, then key hints when active.
pub fn render_filters(frame: &ViewFrame, area: Rect, buf: &mut Buffer) {
    let is_active = frame.mode == UiMode::Filters;
    let mut lines = vec![];

    for row in FilterRow::ALL {
        let selected = is_active && row == frame.filter_row;
        let value = match row {
            FilterRow::CostMin => format!("${}", frame.criteria.cost_range.min),
            FilterRow::CostMax => format!("${}", frame.criteria.cost_range.max),
            _ => {
                let text = frame.criteria.text(row.field());
                if text.is_empty() {
                    "Any".to_string()
                } else {
                    text.to_string()
                }
            }
        };
        let value_color = match row {
            FilterRow::CostMin | FilterRow::CostMax => Color::Green,
            _ if frame.criteria.text(row.field()).is_empty() => Color::Gray,
            _ => Color::White,
        };

        let caption_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "▶ " } else { "  " }, caption_style),
            Span::styled(format!("{:<11}", row.caption()), caption_style),
            Span::styled(value, Style::default().fg(value_color)),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!(
            "  Range: ${} - ${}",
            frame.bounds.min, frame.bounds.max
        ),
        Style::default().fg(Color::DarkGray),
    )));

    lines.push(Line::from(""));
    if frame.labels.is_empty() {
        lines.push(Line::from(Span::styled(
            "No filters active",
            Style::default().fg(Color::Gray),
        )));
    } else {
        let mut spans = Vec::new();
        for label in frame.labels {
            spans.push(Span::styled(
                format!("[{} ×]", label),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if is_active {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑/↓ row, ←/→ change, 'd' remove, Backspace remove last, 'r' reset cost, 'c' clear all, 'Esc' exit",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(if is_active {
                "Filters (ACTIVE - press 'Esc' or 'f' to exit)"
            } else {
                "Filters (press 'f')"
            })
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
