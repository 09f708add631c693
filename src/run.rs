use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, Field, InputMode, Screen};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();

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
        terminal.draw(|f| {
            // Rows available to the table: frame minus tab/status/hint bars,
            // borders, and the header row.
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Editing(_) => handle_editing_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') | KeyCode::Char('d')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('1') => app.screen = Screen::Entry,
        KeyCode::Char('2') => app.screen = Screen::Summary,
        KeyCode::Char('3') => app.screen = Screen::Table,
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            app.screen = screens[(idx + 1) % screens.len()];
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            app.screen = screens[if idx == 0 { screens.len() - 1 } else { idx - 1 }];
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('i') if app.screen == Screen::Entry => {
            app.start_editing(Field::Income);
        }
        KeyCode::Char('a') if app.screen == Screen::Entry => {
            app.start_editing(Field::Amount);
        }
        KeyCode::Char('n') if app.screen == Screen::Entry => {
            app.start_editing(Field::NewCategory);
        }
        KeyCode::Char('l') | KeyCode::Right if app.screen == Screen::Entry => {
            app.next_category();
        }
        KeyCode::Char('h') | KeyCode::Left if app.screen == Screen::Entry => {
            app.prev_category();
        }
        KeyCode::Char('j') | KeyCode::Down if app.screen == Screen::Table => {
            let len = app.ledger.transactions().len();
            let page = app.visible_rows.max(1);
            scroll_down(&mut app.txn_index, &mut app.txn_scroll, len, page);
        }
        KeyCode::Char('k') | KeyCode::Up if app.screen == Screen::Table => {
            scroll_up(&mut app.txn_index, &mut app.txn_scroll);
        }
        KeyCode::Char('g') if app.screen == Screen::Table => {
            scroll_to_top(&mut app.txn_index, &mut app.txn_scroll);
        }
        KeyCode::Char('G') if app.screen == Screen::Table => {
            let len = app.ledger.transactions().len();
            let page = app.visible_rows.max(1);
            scroll_to_bottom(&mut app.txn_index, &mut app.txn_scroll, len, page);
        }
        _ => {}
    }
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.commit_input(),
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                app.input.push(c);
            }
        }
        _ => {}
    }
}
