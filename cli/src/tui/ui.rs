use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Feedback, Screen, Tab};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Feedback
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let header = Paragraph::new("PLASTIC CONSUMPTION TRACKER")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    match app.screen {
        Screen::AwaitingName => draw_name_prompt(f, app, main_chunks[1]),
        Screen::Tracker => draw_tracker(f, app, main_chunks[1]),
    }

    draw_feedback(f, app, main_chunks[2]);

    // Footer
    let help = match app.screen {
        Screen::AwaitingName => "Type your name | Enter: Continue | Esc: Quit",
        Screen::Tracker => match app.tab {
            Tab::Tracker => "j/k: Select | h/l: Count | Enter: Submit | Tab: Leaderboard | q: Quit",
            Tab::Board => "j/k: Navigate | d: Delete | c: Clear all | r: Reload | Tab: Tracker | q: Quit",
        },
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_name_prompt(f: &mut Frame, app: &App, area: Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical[1]);

    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .title(" Enter Your Name to Begin ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, horizontal[1]);

    let typed: String = app.input.chars().take(app.cursor_position).collect();
    let cursor_x = horizontal[1].x + typed.width() as u16 + 1;
    f.set_cursor_position((cursor_x, horizontal[1].y + 1));
}

fn draw_tracker(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let selected = match app.tab {
        Tab::Tracker => 0,
        Tab::Board => 1,
    };
    let tabs = Tabs::new(vec!["Input Tracker", "Leaderboard"])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    match app.tab {
        Tab::Tracker => draw_usage_form(f, app, chunks[1]),
        Tab::Board => draw_board(f, app, chunks[1]),
    }
}

fn draw_usage_form(f: &mut Frame, app: &mut App, area: Rect) {
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let rows: Vec<Row> = app
        .catalog()
        .products()
        .iter()
        .zip(&app.counts)
        .map(|(product, &count)| {
            let grams_day = f64::from(count) * f64::from(product.grams);
            Row::new(vec![
                Span::raw(product.name),
                Span::raw(format!("{}g", product.grams)),
                Span::styled(count.to_string(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("{:.0}g", grams_day)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(26),   // Product
            Constraint::Length(8), // Unit weight
            Constraint::Length(7), // Count
            Constraint::Length(8), // Per day
        ],
    )
    .header(Row::new(vec!["Product", "Unit", "Count", "g/day"]).style(Style::default().fg(Color::Yellow)))
    .block(
        Block::default()
            .title(" Daily Usage ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, content_chunks[0], &mut app.product_state);

    draw_totals_panel(f, app, content_chunks[1]);
}

fn draw_totals_panel(f: &mut Frame, app: &App, area: Rect) {
    let totals = app.totals();

    let info_text = vec![
        Line::from(vec![Span::styled(
            format!("Hello {}", app.user_name),
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Daily:   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}g", totals.per_day),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Yearly:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}g", totals.per_year),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Yearly:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}kg", totals.per_year_kg),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter submits this estimate",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let info = Paragraph::new(info_text)
        .block(
            Block::default()
                .title(" Estimate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(info, area);
}

fn draw_board(f: &mut Frame, app: &mut App, area: Rect) {
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let rows: Vec<Row> = app
        .board
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Row::new(vec![
                Span::raw(format!("#{}", i + 1)),
                Span::styled(entry.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(entry.username.clone()),
                Span::raw(format!("{:.2}", entry.per_day)),
                Span::raw(format!("{:.2}", entry.per_year_kg)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),  // Rank
            Constraint::Min(14),    // Name
            Constraint::Min(12),    // Username
            Constraint::Length(10), // Per day
            Constraint::Length(10), // Per year kg
        ],
    )
    .header(Row::new(vec!["Rank", "Name", "Username", "g/day", "kg/yr"]).style(Style::default().fg(Color::Yellow)))
    .block(
        Block::default()
            .title(" Leaderboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, content_chunks[0], &mut app.board_state);

    draw_board_summary(f, app, content_chunks[1]);
}

fn draw_board_summary(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(1)])
        .split(area);

    let latest_rank = app
        .last_submitted
        .and_then(|id| app.board.iter().position(|e| e.id == id));

    let mut info_text = vec![
        Line::from(vec![Span::styled(
            "Summary",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Entries: ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.board.len().to_string(), Style::default().fg(Color::White)),
        ]),
    ];
    if let Some(top) = app.board.first() {
        info_text.push(Line::from(vec![
            Span::styled("Top:     ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} ({:.2}kg)", top.name, top.per_year_kg),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    if let Some(rank) = latest_rank {
        info_text.push(Line::from(vec![
            Span::styled("You:     ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("#{}", rank + 1),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
    } else if app.last_submitted.is_none() {
        info_text.push(Line::from(Span::styled(
            "Submit an estimate to join",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let info = Paragraph::new(info_text).block(
        Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(info, chunks[0]);

    // Your latest entry against the heaviest consumer
    if let (Some(top), Some(rank)) = (app.board.first(), latest_rank) {
        let yours = app.board[rank].per_year_kg;
        let ratio = if top.per_year_kg > 0.0 {
            (yours / top.per_year_kg).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(" Vs Top Consumer ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .gauge_style(Style::default().fg(if ratio >= 1.0 { Color::Red } else { Color::Green }))
            .ratio(ratio)
            .label(format!("{:.0}% of top", ratio * 100.0));
        f.render_widget(gauge, chunks[1]);
    }
}

fn draw_feedback(f: &mut Frame, app: &App, area: Rect) {
    if let Some(feedback) = &app.feedback {
        let (text, color) = match feedback {
            Feedback::Success(msg) => (msg.as_str(), Color::Green),
            Feedback::Warning(msg) => (msg.as_str(), Color::Yellow),
        };
        let line = Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);
        f.render_widget(line, area);
    }
}
