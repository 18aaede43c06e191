//! Sort widget rendering.
//!
//! Displays the current sort key and the record counts.

use crate::engine::SortKey;
use crate::ui::ViewFrame;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the sort bar.
///
/// # Arguments
/// * `frame` - View snapshot
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_sort(frame: &ViewFrame, area: Rect, buf: &mut Buffer) {
    let sorted = frame.sort != SortKey::None;
    let line = Line::from(vec![
        Span::styled("Sort By: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            frame.sort.name(),
            Style::default().fg(if sorted { Color::Magenta } else { Color::Gray }),
        ),
        Span::styled(
            if sorted { "  ('x' to clear)" } else { "" },
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(
                "   Showing {} of {} applications",
                frame.filtered_count, frame.total_count
            ),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title("Sort (press 's')")
            .borders(Borders::ALL),
    );

    Widget::render(paragraph, area, buf);
}
