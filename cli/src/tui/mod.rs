pub mod app;
pub mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plastrack_core::StoreKind;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::{App, Screen, Tab};

pub fn run(kind: StoreKind) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(kind);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.screen {
                    Screen::AwaitingName => match key.code {
                        KeyCode::Enter => app.submit_name(),
                        KeyCode::Esc => return Ok(()),
                        KeyCode::Char(c) => app.input_char(c),
                        KeyCode::Backspace => app.delete_char(),
                        KeyCode::Left => app.move_cursor_left(),
                        KeyCode::Right => app.move_cursor_right(),
                        _ => {}
                    },
                    Screen::Tracker => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Tab => app.switch_tab(),
                        KeyCode::Down | KeyCode::Char('j') => app.next(),
                        KeyCode::Up | KeyCode::Char('k') => app.previous(),
                        _ => match app.tab {
                            Tab::Tracker => match key.code {
                                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
                                    app.increment()
                                }
                                KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                                    app.decrement()
                                }
                                KeyCode::Enter | KeyCode::Char('s') => app.submit_entry(),
                                _ => {}
                            },
                            Tab::Board => match key.code {
                                KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
                                KeyCode::Char('c') => app.clear_board(),
                                KeyCode::Char('r') => app.reload_board(),
                                _ => {}
                            },
                        },
                    },
                }
            }
        }
    }
}
