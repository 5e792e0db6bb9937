//! Views: map catalog and session state into a frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::fb::{Frame, Style};
use tui_wordquiz_core::{Feedback, SessionSnapshot};
use tui_wordquiz_types::{MessageTier, QuizPhase, WordRecord, ROUND_SECONDS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

fn title_style() -> Style {
    Style::new(Color::Cyan).bold()
}

fn dim_style() -> Style {
    Style::new(Color::DarkGrey)
}

fn accent_style() -> Style {
    Style::new(Color::Yellow).bold()
}

fn good_style() -> Style {
    Style::new(Color::Green).bold()
}

fn bad_style() -> Style {
    Style::new(Color::Red).bold()
}

/// Everything the browse screen shows.
#[derive(Debug, Clone, Copy)]
pub struct BrowseScreen<'a> {
    /// Current search filter text
    pub filter: &'a str,
    /// Words matching the filter, in catalog order
    pub words: &'a [&'a WordRecord],
    /// Selected index into `words`
    pub selected: usize,
    /// Words in the whole catalog
    pub total_words: usize,
    /// Malformed entries dropped at load time
    pub skipped: usize,
    /// Transient status line (spoken word, error, ...)
    pub status: Option<&'a str>,
}

/// Render the word list / search screen.
pub fn render_browse(screen: &BrowseScreen, viewport: Viewport, frame: &mut Frame) {
    frame.resize(viewport.width, viewport.height);
    frame.clear();
    if viewport.height < 7 {
        return;
    }

    let header = format!(
        "WORD WORKSHOP   {} of {} words",
        screen.words.len(),
        screen.total_words
    );
    frame.put_str(1, 0, &header, title_style());
    if screen.skipped > 0 {
        let note = format!("({} entries skipped)", screen.skipped);
        let x = viewport.width.saturating_sub(note.chars().count() as u16 + 1);
        frame.put_str(x, 0, &note, dim_style());
    }

    let search = format!("Search: {}_", screen.filter);
    frame.put_str(1, 1, &search, Style::default());
    frame.hline(2, dim_style());

    // List window that keeps the selection visible.
    let list_top: u16 = 3;
    let list_rows = viewport.height.saturating_sub(list_top + 2) as usize;
    let start = scroll_start(screen.selected, screen.words.len(), list_rows);
    for (row, word) in screen.words.iter().skip(start).take(list_rows).enumerate() {
        let index = start + row;
        let selected = index == screen.selected;
        let marker = if selected { "> " } else { "  " };
        let line = format!(
            "{}{:<12} {:<12} {}",
            marker,
            word.text,
            word.phonetic,
            word.category.label()
        );
        let style = if selected {
            accent_style()
        } else {
            Style::default()
        };
        frame.put_str(1, list_top + row as u16, &line, style);
    }

    frame.put_str(
        1,
        viewport.height - 2,
        "[enter] speak   [tab] quiz   [esc] clear   [ctrl+c] quit",
        dim_style(),
    );
    if let Some(status) = screen.status {
        frame.put_str(1, viewport.height - 1, status, accent_style());
    }
}

/// Render the quiz screen (active round, feedback, or finish).
pub fn render_quiz(
    snap: &SessionSnapshot,
    status: Option<&str>,
    viewport: Viewport,
    frame: &mut Frame,
) {
    frame.resize(viewport.width, viewport.height);
    frame.clear();
    if viewport.height < 10 {
        return;
    }

    if snap.phase == QuizPhase::Finished {
        render_finish(snap, frame);
        return;
    }

    let round = format!("Round {} of {}", snap.round_index + 1, snap.total_rounds);
    frame.put_str(1, 0, &round, title_style());
    let score = format!("Score {}", snap.score);
    let x = viewport.width.saturating_sub(score.chars().count() as u16 + 1);
    frame.put_str(x, 0, &score, title_style());
    frame.hline(1, dim_style());

    // The masked word, letter-spaced so the blanks stand out.
    let spaced = spaced_word(&snap.masked);
    frame.put_str_centered(3, &spaced, accent_style());

    let timer_style = match snap.seconds_left {
        0..=2 => bad_style(),
        3..=5 => Style::new(Color::Yellow),
        _ => good_style(),
    };
    frame.put_str_centered(5, &timer_bar(snap.seconds_left), timer_style);

    let mut options_line = String::new();
    for (i, option) in snap.options.iter().enumerate() {
        if i > 0 {
            options_line.push_str("    ");
        }
        options_line.push_str(&format!("{}) {}", i + 1, option));
    }
    frame.put_str_centered(7, &options_line, Style::default());

    match snap.feedback {
        Some(Feedback { correct: true, .. }) => {
            frame.put_str_centered(9, "Correct!", good_style());
        }
        Some(Feedback {
            timed_out: true, ..
        }) => {
            let line = format!("Time's up! It was {}", snap.answer);
            frame.put_str_centered(9, &line, bad_style());
        }
        Some(Feedback { .. }) => {
            let line = format!("Not quite! It was {}", snap.answer);
            frame.put_str_centered(9, &line, bad_style());
        }
        None => {}
    }

    frame.put_str(
        1,
        viewport.height - 2,
        "[1-4] answer   [esc] back",
        dim_style(),
    );
    if let Some(status) = status {
        frame.put_str(1, viewport.height - 1, status, dim_style());
    }
}

fn render_finish(snap: &SessionSnapshot, frame: &mut Frame) {
    let tier = MessageTier::for_score(snap.score, snap.total_rounds);
    frame.put_str_centered(2, "Quiz complete!", title_style());
    let score = format!("Score: {} / {}", snap.score, snap.total_rounds);
    frame.put_str_centered(4, &score, accent_style());
    frame.put_str_centered(6, tier.message(), Style::default());
    frame.put_str_centered(8, "[tab] play again   [esc] back", dim_style());
}

/// First visible index so that `selected` stays inside a `rows`-tall window.
fn scroll_start(selected: usize, len: usize, rows: usize) -> usize {
    if rows == 0 || len <= rows {
        return 0;
    }
    let max_start = len - rows;
    selected.saturating_sub(rows / 2).min(max_start)
}

fn spaced_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn timer_bar(seconds_left: u32) -> String {
    let mut bar = String::new();
    for i in 0..ROUND_SECONDS {
        bar.push(if i < seconds_left { '█' } else { '·' });
    }
    bar
}
