use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::ConfigLoad;
use crate::ledger::LedgerStore;
use crate::ui::app::{App, Field, InputMode, PendingAction};
use crate::ui::commands;

pub(crate) fn as_tui(loaded: &ConfigLoad) -> Result<()> {
    let store = LedgerStore::new(&loaded.config.data_file);
    let mut app = App::new(loaded.config.clone(), store);
    if let Err(e) = app.refresh_history() {
        tracing::warn!(error = %e, "could not load ledger");
        app.set_status(format!("Error: {e}"));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Editing => handle_editing_input(key, app),
                InputMode::Confirm => handle_confirm_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            commands::handle_command("save", app)?;
        }
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.move_field(1),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.move_field(-1),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_field(1)
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => app.adjust_field(-1),
        KeyCode::Char('L') => app.adjust_field(10),
        KeyCode::Char('H') => app.adjust_field(-10),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.edit_buffer.clear();
            app.edit_buffer.push(c);
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('x') | KeyCode::Delete if matches!(app.field(), Field::Amount(_)) => {
            app.set_field_value(0);
        }
        KeyCode::Enter => commands::handle_command("save", app)?,
        KeyCode::Char('R') => commands::handle_command("reset", app)?,
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            match app.edit_buffer.parse::<u64>() {
                Ok(value) => app.set_field_value(value),
                Err(_) => app.set_status("Amount too large"),
            }
            app.edit_buffer.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.edit_buffer.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.edit_buffer.pop();
            if app.edit_buffer.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.edit_buffer.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(PendingAction::ResetLedger) = app.pending_action.take() {
                if let Err(e) = app.reset_ledger() {
                    app.set_status(format!("Error: {e}"));
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
}
