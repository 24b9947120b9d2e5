//! TUI rendering with ratatui
//!
//! Board, solved category bars, and the end-of-round screens.

use super::app::{App, GRID_COLUMNS};
use crate::core::{Category, GameStatus};
use crate::engine::{MAX_MISTAKES, StateStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: StateStore>(f: &mut Frame, app: &App<S>) {
    match app.engine.status() {
        GameStatus::Loading => render_loading(f),
        GameStatus::Lost => render_lost(f),
        GameStatus::Playing | GameStatus::Won => render_board(f, app),
    }
}

fn render_loading(f: &mut Frame) {
    let loading = Paragraph::new("Loading...")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(loading, centered(f.area(), 3));
}

fn render_lost(f: &mut Frame) {
    let content = vec![
        Line::from("😔"),
        Line::from(""),
        Line::from(Span::styled(
            "Thank you for playing, friend.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("We're all done."),
        Line::from(Span::styled(
            "Better luck next time.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, centered(f.area(), 7));
}

fn render_board<S: StateStore>(f: &mut Frame, app: &App<S>) {
    let solved_rows = app.engine.solved().len() as u16 * 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(1),           // Mistakes + message
            Constraint::Length(solved_rows), // Solved categories
            Constraint::Min(4),              // Grid or celebration
            Constraint::Length(1),           // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_status_line(f, app, chunks[1]);
    render_solved(f, app, chunks[2]);

    if app.engine.status() == GameStatus::Won {
        render_celebration(f, app, chunks[3]);
    } else {
        render_grid(f, app, chunks[3]);
    }

    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Connections",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Create four groups of four!",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn render_status_line<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    if app.engine.status() != GameStatus::Playing {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let remaining = app.engine.mistakes_remaining();
    let dots = "●".repeat(remaining as usize) + &"○".repeat((MAX_MISTAKES - remaining) as usize);
    let mistakes_style = if app.is_shaking() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(format!("Mistakes remaining: {dots}")).style(mistakes_style),
        chunks[0],
    );

    if let Some(message) = app.engine.message() {
        f.render_widget(
            Paragraph::new(message.to_string())
                .alignment(Alignment::Right)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[1],
        );
    }
}

fn render_solved<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let categories: Vec<&Category> = app.engine.solved_categories().collect();
    if categories.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(4); categories.len()])
        .split(area);

    for (category, row) in categories.into_iter().zip(rows.iter()) {
        let color = category_color(&category.color);
        let bar = Paragraph::new(vec![
            Line::from(Span::styled(
                category.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(category.words.join(", ")),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(color))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(bar, *row);
    }
}

fn render_grid<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let words = app.engine.active_words();
    if words.is_empty() {
        return;
    }

    // Nudge the whole grid sideways while shaking
    let area = if app.is_shaking() && area.width > 2 {
        Rect {
            x: area.x + 1,
            width: area.width - 2,
            ..area
        }
    } else {
        area
    };

    let row_count = words.len().div_ceil(GRID_COLUMNS);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); row_count])
        .split(area);

    for (r, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (c, cell) in cells.iter().enumerate() {
            let index = r * GRID_COLUMNS + c;
            let Some(word) = words.get(index) else {
                break;
            };

            let selected = app.engine.is_selected(word);
            let style = if selected {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let border = if index == app.cursor {
                BorderType::Double
            } else {
                BorderType::Rounded
            };

            let tile = Paragraph::new(word.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_type(border));
            f.render_widget(tile, *cell);
        }
    }
}

fn render_celebration<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let Some(typewriter) = &app.typewriter else {
        return;
    };

    let frame = typewriter.frame(typewriter.elapsed());
    let style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    let hidden_style = if frame.faded {
        style.add_modifier(Modifier::HIDDEN)
    } else {
        style
    };

    let line = Line::from(vec![
        Span::styled(frame.before, style),
        Span::styled(frame.hidden, hidden_style),
        Span::styled(frame.after, style),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(""), line])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_help<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = if app.engine.status() == GameStatus::Playing {
        "←↑↓→: Move | Space: Select | Enter: Submit | s: Shuffle | d: Deselect | q: Quit"
    } else {
        "Made with love for the ACTUAL LOML 💜 | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Map a category colour tag to a terminal colour
#[must_use]
pub fn category_color(tag: &str) -> Color {
    match tag.to_lowercase().as_str() {
        "purple" => Color::Magenta,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "red" => Color::Red,
        "cyan" => Color::Cyan,
        _ => Color::Gray,
    }
}

fn centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}
