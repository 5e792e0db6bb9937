//! Key mapping from terminal events to surface actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions on the browse screen (word list + search filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    /// Move the selection up
    MoveUp,
    /// Move the selection down
    MoveDown,
    /// Append a character to the search filter
    Type(char),
    /// Delete the last filter character
    Erase,
    /// Clear the filter (or leave, when it is already empty)
    Clear,
    /// "Speak" the selected word (show its phonetic hint)
    Speak,
    /// Open the quiz
    StartQuiz,
}

/// Actions on the quiz screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Choose answer option 0-3
    Choose(u8),
    /// Restart from the finish screen
    Restart,
    /// Abort the quiz and return to browsing
    Leave,
}

/// Map keyboard input on the browse screen.
pub fn map_browse_key(key: KeyEvent) -> Option<BrowseAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(BrowseAction::MoveUp),
        KeyCode::Down => Some(BrowseAction::MoveDown),
        KeyCode::Backspace => Some(BrowseAction::Erase),
        KeyCode::Esc => Some(BrowseAction::Clear),
        KeyCode::Enter => Some(BrowseAction::Speak),
        KeyCode::Tab => Some(BrowseAction::StartQuiz),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(BrowseAction::Type(c)),
        _ => None,
    }
}

/// Map keyboard input on the quiz screen.
///
/// Options accept both number keys (1-4) and letter keys (a-d).
pub fn map_quiz_key(key: KeyEvent) -> Option<QuizAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(c @ '1'..='4') => Some(QuizAction::Choose(c as u8 - b'1')),
        KeyCode::Char(c @ 'a'..='d') => Some(QuizAction::Choose(c as u8 - b'a')),
        KeyCode::Char(c @ 'A'..='D') => Some(QuizAction::Choose(c as u8 - b'A')),
        KeyCode::Tab => Some(QuizAction::Restart),
        KeyCode::Esc => Some(QuizAction::Leave),
        _ => None,
    }
}

/// Check if the key should quit the application.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn browse_navigation_keys() {
        assert_eq!(
            map_browse_key(KeyEvent::from(KeyCode::Up)),
            Some(BrowseAction::MoveUp)
        );
        assert_eq!(
            map_browse_key(KeyEvent::from(KeyCode::Down)),
            Some(BrowseAction::MoveDown)
        );
        assert_eq!(
            map_browse_key(KeyEvent::from(KeyCode::Enter)),
            Some(BrowseAction::Speak)
        );
        assert_eq!(
            map_browse_key(KeyEvent::from(KeyCode::Tab)),
            Some(BrowseAction::StartQuiz)
        );
    }

    #[test]
    fn browse_filter_keys() {
        assert_eq!(
            map_browse_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(BrowseAction::Type('s'))
        );
        assert_eq!(
            map_browse_key(KeyEvent::from(KeyCode::Backspace)),
            Some(BrowseAction::Erase)
        );
        assert_eq!(
            map_browse_key(KeyEvent::from(KeyCode::Esc)),
            Some(BrowseAction::Clear)
        );
        // Digits and punctuation never enter the filter.
        assert_eq!(map_browse_key(KeyEvent::from(KeyCode::Char('3'))), None);
        assert_eq!(map_browse_key(KeyEvent::from(KeyCode::Char('!'))), None);
    }

    #[test]
    fn quiz_option_keys() {
        assert_eq!(
            map_quiz_key(KeyEvent::from(KeyCode::Char('1'))),
            Some(QuizAction::Choose(0))
        );
        assert_eq!(
            map_quiz_key(KeyEvent::from(KeyCode::Char('4'))),
            Some(QuizAction::Choose(3))
        );
        assert_eq!(
            map_quiz_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(QuizAction::Choose(0))
        );
        assert_eq!(
            map_quiz_key(KeyEvent::from(KeyCode::Char('D'))),
            Some(QuizAction::Choose(3))
        );
        assert_eq!(map_quiz_key(KeyEvent::from(KeyCode::Char('5'))), None);
        assert_eq!(map_quiz_key(KeyEvent::from(KeyCode::Char('e'))), None);
    }

    #[test]
    fn quiz_control_keys() {
        assert_eq!(
            map_quiz_key(KeyEvent::from(KeyCode::Esc)),
            Some(QuizAction::Leave)
        );
        assert_eq!(
            map_quiz_key(KeyEvent::from(KeyCode::Tab)),
            Some(QuizAction::Restart)
        );
    }

    #[test]
    fn ctrl_chords_never_map_to_actions() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(map_browse_key(ctrl_a), None);
        assert_eq!(map_quiz_key(ctrl_a), None);
    }

    #[test]
    fn quit_is_ctrl_c_only() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
