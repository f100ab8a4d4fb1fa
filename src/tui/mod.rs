mod app;
mod ui;

use crate::index::types::IndexConfig;
use anyhow::Result;
use app::{App, Mode};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

pub fn run(words: Vec<String>, config: &IndexConfig) -> Result<()> {
    // Build before touching the terminal so a bad configuration fails with
    // a plain error message.
    let mut app = App::new(words, config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                    (KeyModifiers::CONTROL, KeyCode::Char('q')) => return Ok(()),
                    _ => {}
                }

                match app.mode {
                    Mode::Query => match key.code {
                        KeyCode::Esc => {
                            if app.query.is_empty() {
                                return Ok(());
                            }
                            app.query.clear();
                        }
                        KeyCode::Enter => app.execute_query(),
                        KeyCode::Backspace => {
                            app.query.pop();
                        }
                        KeyCode::F(5) => app.start_rebuild(),
                        KeyCode::Char(c) => app.query.push(c),
                        _ => {}
                    },
                    Mode::Rebuild => match key.code {
                        KeyCode::Esc => app.cancel_rebuild(),
                        KeyCode::Enter => app.apply_rebuild(),
                        KeyCode::Backspace => {
                            app.page_size_input.pop();
                        }
                        KeyCode::Char(c) if c.is_ascii_digit() => app.page_size_input.push(c),
                        _ => {}
                    },
                }
            }
        }
    }
}
