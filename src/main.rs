//! Terminal word-quiz runner (default binary).
//!
//! Hosts the event loop the core is driven by: key events become commands,
//! elapsed time becomes ticks, and core events become status-line updates.
//! The terminal stands in for the widget's display/audio surface, so
//! "speaking" a word shows its text and phonetic hint in the status line.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_wordquiz::catalog::Catalog;
use tui_wordquiz::core::{QuizSession, SessionSnapshot};
use tui_wordquiz::input::{map_browse_key, map_quiz_key, should_quit, BrowseAction, QuizAction};
use tui_wordquiz::term::{
    render_browse, render_quiz, BrowseScreen, Frame, TerminalRenderer, Viewport,
};
use tui_wordquiz::types::{QuizCommand, QuizEvent, QuizPhase, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Quiz,
}

struct App {
    catalog: Catalog,
    session: QuizSession,
    mode: Mode,
    filter: String,
    selected: usize,
    status: Option<String>,
}

fn main() -> Result<()> {
    let catalog = load_catalog()?;
    let session = QuizSession::new(time_seed(), catalog.words().to_vec());
    let mut app = App {
        catalog,
        session,
        mode: Mode::Browse,
        filter: String::new(),
        selected: 0,
        status: None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn load_catalog() -> Result<Catalog> {
    let data_dir = PathBuf::from(env::var("WORDQUIZ_DATA").unwrap_or_else(|_| "data".into()));
    let lang = env::var("WORDQUIZ_LANG").unwrap_or_else(|_| "en".into());
    Catalog::load_language(&data_dir, &lang).with_context(|| {
        format!(
            "loading catalog for {:?} from {}",
            lang,
            data_dir.display()
        )
    })
}

/// Seed sessions from the clock so every launch quizzes different words.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut frame = Frame::new(0, 0);
    let mut snap = SessionSnapshot::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match app.mode {
            Mode::Browse => {
                let filtered = app.catalog.search(&app.filter);
                if app.selected >= filtered.len() {
                    app.selected = filtered.len().saturating_sub(1);
                }
                let screen = BrowseScreen {
                    filter: &app.filter,
                    words: &filtered,
                    selected: app.selected,
                    total_words: app.catalog.len(),
                    skipped: app.catalog.skipped(),
                    status: app.status.as_deref(),
                };
                render_browse(&screen, viewport, &mut frame);
            }
            Mode::Quiz => {
                app.session.snapshot_into(&mut snap);
                render_quiz(&snap, app.status.as_deref(), viewport, &mut frame);
            }
        }
        term.draw(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match app.mode {
                        Mode::Browse => handle_browse_key(app, key),
                        Mode::Quiz => handle_quiz_key(app, key),
                    }
                }
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.session.tick(elapsed.as_millis() as u32);
        }

        drain_events(app);
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match map_browse_key(key) {
        Some(BrowseAction::MoveUp) => app.selected = app.selected.saturating_sub(1),
        Some(BrowseAction::MoveDown) => app.selected += 1,
        Some(BrowseAction::Type(c)) => {
            app.filter.push(c.to_ascii_lowercase());
            app.selected = 0;
        }
        Some(BrowseAction::Erase) => {
            app.filter.pop();
        }
        Some(BrowseAction::Clear) => {
            app.filter.clear();
            app.selected = 0;
        }
        Some(BrowseAction::Speak) => {
            let filtered = app.catalog.search(&app.filter);
            if let Some(word) = filtered.get(app.selected) {
                app.status = Some(format!("♪ {} {}", word.text, word.phonetic));
            }
        }
        Some(BrowseAction::StartQuiz) => match app.session.apply_command(QuizCommand::Start) {
            Ok(()) => {
                app.mode = Mode::Quiz;
                app.status = None;
            }
            Err(err) => app.status = Some(err.to_string()),
        },
        None => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match map_quiz_key(key) {
        Some(QuizAction::Choose(i)) => {
            let option = app
                .session
                .current_puzzle()
                .and_then(|p| p.options.get(i as usize))
                .cloned();
            if let Some(option) = option {
                let _ = app.session.apply_command(QuizCommand::SubmitAnswer(option));
            }
        }
        Some(QuizAction::Restart) => {
            if app.session.phase() == QuizPhase::Finished {
                let _ = app.session.apply_command(QuizCommand::Start);
            }
        }
        Some(QuizAction::Leave) => {
            let _ = app.session.apply_command(QuizCommand::Abort);
            app.mode = Mode::Browse;
            app.status = None;
        }
        None => {}
    }
}

/// Turn core events into status-line updates.
fn drain_events(app: &mut App) {
    while let Some(event) = app.session.pop_event() {
        match event {
            QuizEvent::RoundStarted { word, .. } => {
                app.status = Some(format!("♪ {}", word));
            }
            QuizEvent::Finished { .. } => {
                app.status = None;
            }
            // Countdown and feedback are drawn from the snapshot every frame.
            QuizEvent::Tick { .. } | QuizEvent::Answered { .. } => {}
        }
    }
}
