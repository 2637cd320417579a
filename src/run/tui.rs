use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use crate::chat::Session;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(session: Session, output_dir: PathBuf) -> Result<()> {
    let mut app = App::new(session, output_dir);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!("terminal UI started");

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "terminal UI failed");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, table border + header
            let content_height = f.area().height.saturating_sub(3) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Chat => handle_chat_input(key, app),
                InputMode::Command => handle_command_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_chat_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat_input.clear();
        }
        KeyCode::Char(':') if app.chat_input.is_empty() => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char(c) => {
            app.status_message.clear();
            app.chat_input.push(c);
        }
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        KeyCode::Enter => {
            if !app.chat_input.trim().is_empty() {
                app.submit_chat();
            }
        }
        KeyCode::Esc => {
            if app.chat_input.is_empty() {
                app.input_mode = InputMode::Normal;
            } else {
                app.chat_input.clear();
            }
        }
        KeyCode::PageUp => scroll_chat(app, true),
        KeyCode::PageDown => scroll_chat(app, false),
        KeyCode::Tab => cycle_screen(app, true),
        KeyCode::BackTab => cycle_screen(app, false),
        _ => {}
    }
}

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
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
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => app.switch_screen(Screen::Chat),
        KeyCode::Char('2') => app.switch_screen(Screen::Pit),
        KeyCode::Char('3') => app.switch_screen(Screen::Dashboard),
        KeyCode::Char('4') => app.switch_screen(Screen::Records),
        KeyCode::Tab => cycle_screen(app, true),
        KeyCode::BackTab => cycle_screen(app, false),
        KeyCode::Enter | KeyCode::Char('i') if app.screen == Screen::Chat => {
            app.input_mode = InputMode::Chat;
        }
        KeyCode::PageUp if app.screen == Screen::Chat => scroll_chat(app, true),
        KeyCode::PageDown if app.screen == Screen::Chat => scroll_chat(app, false),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = app.resting_mode();
            if let Err(e) = commands::handle_command(&input, app) {
                tracing::error!(command = %input, error = %e, "command failed");
                app.set_status(format!("Error: {e:#}"));
            }
        }
        KeyCode::Esc => {
            app.input_mode = app.resting_mode();
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = app.resting_mode();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = app.resting_mode();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = app.resting_mode();
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

fn cycle_screen(app: &mut App, forward: bool) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    let next = if forward {
        (idx + 1) % screens.len()
    } else if idx == 0 {
        screens.len() - 1
    } else {
        idx - 1
    };
    app.switch_screen(screens[next]);
}

fn scroll_chat(app: &mut App, up: bool) {
    let step = (app.visible_rows / 2).max(1);
    app.chat_scroll = if up {
        app.chat_scroll.saturating_add(step)
    } else {
        app.chat_scroll.saturating_sub(step)
    };
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Records {
        let page = app.records_page();
        scroll_down(
            &mut app.record_index,
            &mut app.record_scroll,
            app.session.records.len(),
            page,
        );
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Records {
        scroll_up(&mut app.record_index, &mut app.record_scroll);
    }
}

fn handle_goto_top(app: &mut App) {
    if app.screen == Screen::Records {
        scroll_to_top(&mut app.record_index, &mut app.record_scroll);
    }
}

fn handle_goto_bottom(app: &mut App) {
    if app.screen == Screen::Records {
        let page = app.records_page();
        scroll_to_bottom(
            &mut app.record_index,
            &mut app.record_scroll,
            app.session.records.len(),
            page,
        );
    }
}
