//! Record list widget rendering.
//!
//! Displays the current page as a scrollable list of record cards with
//! selection highlighting.

use crate::ui::ViewFrame;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};
use std::ops::Range;

/// Lines taken by one record card (4 content lines + 1 separator).
pub const LINES_PER_RECORD: u16 = 5;

/// Cards visible in a list area, keeping the selection centered.
///
/// # Arguments
/// * `selected` - Selected index within the page
/// * `len` - Number of records on the page
/// * `height` - Height of the list area including borders
///
/// # Returns
/// * `Range<usize>` - Page indices to draw
pub fn visible_window(selected: usize, len: usize, height: u16) -> Range<usize> {
    let available_height = height.saturating_sub(2);
    let visible = (available_height / LINES_PER_RECORD).max(1) as usize;
    let center_offset = visible / 2;

    let max_scroll = len.saturating_sub(visible);
    let start = selected.saturating_sub(center_offset).min(max_scroll);
    let end = (start + visible).min(len);
    start..end
}

/// Render the record list widget.
///
/// # Arguments
/// * `frame` - View snapshot
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each record takes `LINES_PER_RECORD` lines:
/// - Line 1: Number within the filtered result and name (bold)
/// - Line 2: University and country
/// - Line 3: Duration and language
/// - Line 4: Cost and deadline
/// - Line 5: Separator
pub fn render_list(frame: &ViewFrame, area: Rect, buf: &mut Buffer) {
    let title = format!(
        "Applications ({}/{})",
        frame.filtered_count, frame.total_count
    );

    if frame.page.is_empty() {
        let list = List::new(vec![ListItem::new("No applications match the current filters")])
            .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = frame.selected_index.min(frame.page.len() - 1);
    let window = visible_window(selected_index, frame.page.len(), area.height);

    let separator_width = area.width.saturating_sub(2).max(10) as usize;
    let separator_line = "─".repeat(separator_width);

    let items: Vec<ListItem> = frame.page[window.clone()]
        .iter()
        .enumerate()
        .map(|(offset, record)| {
            let idx = window.start + offset;
            let is_selected = idx == selected_index;

            let title_style = Style::default()
                .fg(if is_selected {
                    Color::Yellow
                } else {
                    Color::White
                })
                .add_modifier(Modifier::BOLD);

            let line1 = Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", frame.page_offset + idx + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(&record.name, title_style),
            ]);
            let line2 = Line::from(vec![
                Span::styled(
                    format!("University: {}", record.university),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("Country: {}", record.country),
                    Style::default().fg(Color::Cyan),
                ),
            ]);
            let line3 = Line::from(vec![
                Span::styled(
                    format!("Duration: {}", record.duration),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("Language: {}", record.language),
                    Style::default().fg(Color::Magenta),
                ),
            ]);
            let line4 = Line::from(vec![
                Span::styled(
                    format!("Cost: {}", record.format_cost()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("Deadline: {}", record.format_deadline()),
                    Style::default().fg(Color::Yellow),
                ),
            ]);

            let separator_style = if is_selected {
                Style::default().fg(Color::Blue)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let separator = Line::from(vec![Span::styled(separator_line.clone(), separator_style)]);

            ListItem::new(vec![line1, line2, line3, line4, separator])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index - window.start));

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    StatefulWidget::render(list, area, buf, &mut list_state);
}
