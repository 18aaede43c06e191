//! Application browser TUI - Terminal User Interface for browsing student applications.
//!
//! Main entry point and event loop for the application.

mod app;
mod catalog;
mod config;
mod engine;
mod logging;
mod ui;

use anyhow::Context;
use app::{App, UiMode};
use catalog::RecordSource;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io;
use std::time::Duration;

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, starts logging, loads records, and runs the event loop.
/// With `--init-config`, writes the default configuration file and exits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().nth(1).as_deref() == Some("--init-config") {
        let path = Config::default_config_path()?;
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        Config::default().save(Some(&path))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let config = Config::load(None)?;

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let source = config.record_source();
    let mut app = App::new(config.page_size, config.default_sort, config.cost_step);
    load_records(&mut app, &source).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}

/// Load the record source into the app, reporting the outcome on the status line.
async fn load_records(app: &mut App, source: &RecordSource) {
    let today = chrono::Local::now().date_naive();
    match source
        .load(today)
        .await
        .with_context(|| format!("Failed to load {}", source.describe()))
    {
        Ok(records) => {
            app.set_records(records);
            if app.store.is_empty() {
                app.set_status("Warning: No applications found.".to_string());
            } else {
                app.set_status(format!("Loaded {} applications", app.store.len()));
            }
        }
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "record load failed");
            app.set_status(format!("Error: {:#}", e));
        }
    }
}

/// Split the screen into sort bar, filters, list, page bar and status line.
fn layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Sort bar
            Constraint::Min(0),    // Filters + list
            Constraint::Length(3), // Page bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[1]);
    (rows[0], columns[0], columns[1], rows[2], rows[3])
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
///
/// # Returns
/// * `Rect` - Area of the record list, for mouse hit testing
fn render_ui(f: &mut ratatui::Frame, app: &App) -> Rect {
    let (sort_area, filter_area, list_area, page_area, status_area) = layout(f.area());
    let frame = app.frame();

    ui::render_sort(&frame, sort_area, f.buffer_mut());
    ui::render_filters(&frame, filter_area, f.buffer_mut());
    ui::render_list(&frame, list_area, f.buffer_mut());
    ui::render_pagination(&frame, page_area, f.buffer_mut());

    let status_text = frame.status.unwrap_or(
        "Press 'q' to quit, 'f' for filters, 's' to change sort, '←'/'→' to change page",
    );
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text));
    f.render_widget(status, status_area);

    list_area
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
/// * `source` - Record source used for refreshes
///
/// # Details
/// Handles keyboard and mouse events, updates state, and renders UI.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: &RecordSource,
) -> anyhow::Result<()> {
    let mut list_area = Rect::default();

    loop {
        terminal.draw(|f| {
            list_area = render_ui(f, app);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(event::KeyModifiers::CONTROL)
                {
                    break;
                }

                match app.mode {
                    UiMode::List => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                        KeyCode::Left | KeyCode::Char('h') => {
                            app.prev_page();
                        }
                        KeyCode::Right | KeyCode::Char('l') => {
                            app.next_page();
                        }
                        KeyCode::Char(c @ '1'..='9') => {
                            let page = c.to_digit(10).unwrap_or(1) as usize;
                            if !app.set_page(page) {
                                app.set_status(format!("No page {}", page));
                            }
                        }
                        KeyCode::Enter => {
                            if let Some(record) = app.selected_record() {
                                let summary = format!(
                                    "{} | {} | {} | {} | deadline {}",
                                    record.name,
                                    record.university,
                                    record.country,
                                    record.format_cost(),
                                    record.format_deadline()
                                );
                                app.set_status(summary);
                            }
                        }
                        KeyCode::Char('f') => {
                            app.mode = UiMode::Filters;
                        }
                        KeyCode::Char('s') => {
                            app.cycle_sort();
                            app.set_status(format!("Sort: {}", app.sort.key().name()));
                        }
                        KeyCode::Char('x') => {
                            if app.clear_sort() {
                                app.set_status("Sort cleared".to_string());
                            }
                        }
                        KeyCode::Char('c') => {
                            if app.clear_filters() {
                                app.set_status("Filters cleared".to_string());
                            }
                        }
                        KeyCode::Char('r') => {
                            app.set_status(format!("Reloading {}...", source.describe()));
                            load_records(app, source).await;
                        }
                        _ => {}
                    },
                    UiMode::Filters => match key.code {
                        KeyCode::Esc | KeyCode::Char('f') => {
                            app.mode = UiMode::List;
                        }
                        KeyCode::Up | KeyCode::Char('k') => app.move_filter_row(false),
                        KeyCode::Down | KeyCode::Char('j') => app.move_filter_row(true),
                        KeyCode::Left | KeyCode::Char('h') => app.step_filter(false),
                        KeyCode::Right | KeyCode::Char('l') => app.step_filter(true),
                        KeyCode::Char('d') | KeyCode::Delete => {
                            app.remove_selected_filter();
                        }
                        KeyCode::Backspace => {
                            app.remove_last_filter();
                        }
                        KeyCode::Char('r') => {
                            app.reset_cost_range();
                        }
                        KeyCode::Char('c') => {
                            app.clear_filters();
                        }
                        KeyCode::Char('s') => {
                            app.cycle_sort();
                            app.set_status(format!("Sort: {}", app.sort.key().name()));
                        }
                        _ => {}
                    },
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, app, list_area),
            _ => {}
        }
    }

    Ok(())
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `list_area` - Area of the record list widget
///
/// # Details
/// Scrolling moves the selection; a left click selects the card under the cursor.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, list_area: Rect) {
    if app.mode != UiMode::List {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            // Skip the top border
            if mouse.column >= list_area.x
                && mouse.column < list_area.x + list_area.width
                && mouse.row > list_area.y
                && mouse.row < list_area.y + list_area.height
            {
                let window = ui::list::visible_window(
                    app.selected_index,
                    app.page_records().len(),
                    list_area.height,
                );
                let card = ((mouse.row - list_area.y - 1) / ui::list::LINES_PER_RECORD) as usize;
                let index = window.start + card;
                if index < window.end {
                    app.selected_index = index;
                }
            }
        }
        _ => {}
    }
}
