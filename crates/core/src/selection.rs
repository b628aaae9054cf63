//! The Choice List Model: candidate rows, a cursor, and the key-driven state
//! machine that ends in either a confirmed selection or a cancellation.
//!
//! Rendering is a pure function of `(candidates, cursor)`; the visible page is
//! recomputed from the cursor on every call rather than tracked as scroll state.

use std::fmt::{Display, Formatter};

use log::debug;

use crate::config::{CURSOR_GLYPH, ELLIPSIS, PAGE_SIZE};
use crate::error::{Error, Result};

/// Key categories the picker reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Quit,
    Up,
    Down,
    Confirm,
    Other,
}

impl Key {
    /// Classifies a key by its conventional name (`"ctrl+c"`, `"up"`, `"k"`, `" "`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ctrl+c" | "q" => Key::Quit,
            "up" | "k" => Key::Up,
            "down" | "j" => Key::Down,
            "enter" | " " => Key::Confirm,
            _ => Key::Other,
        }
    }
}

/// Where a session stands in its lifecycle.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SessionState {
    Browsing,
    Confirmed(String),
    Cancelled,
}

/// Terminal value of a finished session.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Selection {
    Confirmed(String),
    Cancelled,
}

#[derive(Debug)]
pub struct SelectionSession {
    candidates: Vec<String>,
    cursor: usize,
    resource_kind: String,
    state: SessionState,
}

impl SelectionSession {
    /// Starts browsing `candidates`. An empty candidate list never becomes a session.
    pub fn new(candidates: Vec<String>, resource_kind: impl Into<String>) -> Result<Self> {
        let resource_kind = resource_kind.into();
        if candidates.is_empty() {
            return Err(Error::empty_result(&resource_kind, ""));
        }

        debug!(
            "Starting selection over {} {} candidates",
            candidates.len(),
            resource_kind
        );

        Ok(Self {
            candidates,
            cursor: 0,
            resource_kind,
            state: SessionState::Browsing,
        })
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn resource_kind(&self) -> &str {
        &self.resource_kind
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The selected identifier, present only once confirmed.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            SessionState::Confirmed(selected) => Some(selected),
            _ => None,
        }
    }

    /// The terminal value, or `None` while still browsing.
    #[must_use]
    pub fn outcome(&self) -> Option<Selection> {
        match &self.state {
            SessionState::Browsing => None,
            SessionState::Confirmed(selected) => Some(Selection::Confirmed(selected.clone())),
            SessionState::Cancelled => Some(Selection::Cancelled),
        }
    }

    /// Applies one key event. Events after the session has finished are ignored.
    pub fn handle_key(&mut self, key: Key) -> Result<&SessionState> {
        if self.state != SessionState::Browsing {
            return Ok(&self.state);
        }

        match key {
            Key::Quit => self.state = SessionState::Cancelled,
            Key::Up => self.cursor = self.cursor.saturating_sub(1),
            Key::Down => self.cursor = (self.cursor + 1).min(self.candidates.len() - 1),
            Key::Confirm => {
                let selected = first_token(&self.candidates[self.cursor])?;
                self.state = SessionState::Confirmed(selected.to_string());
            }
            Key::Other => {}
        }

        Ok(&self.state)
    }

    /// Renders the page containing the cursor.
    #[must_use]
    pub fn render(&self) -> Page<'_> {
        let page_start = PAGE_SIZE * (self.cursor / PAGE_SIZE);
        let page_end = (page_start + PAGE_SIZE).min(self.candidates.len());

        Page {
            header: format!(
                "select which {} you want to run your action on:",
                self.resource_kind
            ),
            rows: &self.candidates[page_start..page_end],
            cursor_row: self.cursor - page_start,
            has_previous: page_start > 0,
            has_next: page_end < self.candidates.len(),
        }
    }
}

/// The first whitespace-delimited token of a candidate row.
pub fn first_token(row: &str) -> Result<&str> {
    row.split_whitespace()
        .next()
        .ok_or_else(|| Error::MalformedRow(row.to_string()))
}

/// One rendered window of candidates.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a> {
    pub header: String,
    pub rows: &'a [String],
    /// Index of the cursor within `rows`.
    pub cursor_row: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Page<'_> {
    /// Output lines in display order: header, blank, optional ellipsis, rows, optional ellipsis.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.header.clone());
        lines.push(String::new());

        if self.has_previous {
            lines.push(ELLIPSIS.to_string());
        }

        for (i, row) in self.rows.iter().enumerate() {
            let glyph = if i == self.cursor_row { CURSOR_GLYPH } else { ' ' };
            lines.push(format!("{glyph} {row}"));
        }

        if self.has_next {
            lines.push(ELLIPSIS.to_string());
        }

        lines
    }

    /// Index into [`Page::lines`] of the line carrying the cursor glyph.
    #[must_use]
    pub fn cursor_line(&self) -> usize {
        2 + usize::from(self.has_previous) + self.cursor_row
    }

    /// The candidate row under the cursor.
    #[must_use]
    pub fn cursor_text(&self) -> &str {
        &self.rows[self.cursor_row]
    }
}

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("web-{i}   1/1   Running   0   {i}d"))
            .collect()
    }

    fn session(count: usize) -> SelectionSession {
        SelectionSession::new(rows(count), "pods").unwrap()
    }

    fn move_to(session: &mut SelectionSession, index: usize) {
        for _ in 0..index {
            session.handle_key(Key::Down).unwrap();
        }
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let result = SelectionSession::new(vec![], "pods");
        assert!(matches!(result, Err(Error::EmptyResult { .. })));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ctrl+c"), Key::Quit);
        assert_eq!(Key::from_name("q"), Key::Quit);
        assert_eq!(Key::from_name("up"), Key::Up);
        assert_eq!(Key::from_name("k"), Key::Up);
        assert_eq!(Key::from_name("down"), Key::Down);
        assert_eq!(Key::from_name("j"), Key::Down);
        assert_eq!(Key::from_name("enter"), Key::Confirm);
        assert_eq!(Key::from_name(" "), Key::Confirm);
        assert_eq!(Key::from_name("esc"), Key::Other);
        assert_eq!(Key::from_name("x"), Key::Other);
    }

    #[test]
    fn test_cursor_clamps_at_top() {
        let mut session = session(3);
        session.handle_key(Key::Up).unwrap();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.state(), &SessionState::Browsing);
    }

    #[test]
    fn test_cursor_clamps_at_bottom() {
        let mut session = session(3);
        move_to(&mut session, 10);
        assert_eq!(session.cursor(), 2);
        session.handle_key(Key::Up).unwrap();
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_cursor_stays_in_bounds_for_mixed_sequences() {
        let keys = [Key::Down, Key::Up, Key::Up, Key::Other, Key::Down, Key::Down];
        for count in 1..=4 {
            let mut session = session(count);
            for key in keys.iter().cycle().take(60) {
                session.handle_key(*key).unwrap();
                assert!(session.cursor() < count);
            }
        }
    }

    #[test]
    fn test_single_candidate_never_moves() {
        let mut session = session(1);
        session.handle_key(Key::Down).unwrap();
        session.handle_key(Key::Up).unwrap();
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_confirm_takes_first_token() {
        let mut session =
            SelectionSession::new(vec!["  api-7d9f   2/2 Running".to_string()], "pods").unwrap();
        let state = session.handle_key(Key::Confirm).unwrap();
        assert_eq!(state, &SessionState::Confirmed("api-7d9f".to_string()));
        assert_eq!(session.selected(), Some("api-7d9f"));
        assert_eq!(
            session.outcome(),
            Some(Selection::Confirmed("api-7d9f".to_string()))
        );
    }

    #[test]
    fn test_confirm_after_moving() {
        let mut session = session(5);
        move_to(&mut session, 3);
        session.handle_key(Key::Confirm).unwrap();
        assert_eq!(session.selected(), Some("web-3"));
    }

    #[test]
    fn test_confirm_blank_row_is_malformed() {
        let mut session = SelectionSession::new(vec!["   ".to_string()], "pods").unwrap();
        let result = session.handle_key(Key::Confirm);
        assert!(matches!(result, Err(Error::MalformedRow(_))));
        assert_eq!(session.state(), &SessionState::Browsing);
    }

    #[test]
    fn test_quit_cancels_after_movement() {
        let mut session = session(5);
        move_to(&mut session, 2);
        session.handle_key(Key::Quit).unwrap();
        assert_eq!(session.selected(), None);
        assert_eq!(session.outcome(), Some(Selection::Cancelled));
        assert_eq!(session.state(), &SessionState::Cancelled);
    }

    #[test]
    fn test_events_after_finish_are_ignored() {
        let mut session = session(5);
        session.handle_key(Key::Confirm).unwrap();
        session.handle_key(Key::Down).unwrap();
        session.handle_key(Key::Quit).unwrap();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.selected(), Some("web-0"));

        let mut cancelled = self::session(5);
        cancelled.handle_key(Key::Quit).unwrap();
        cancelled.handle_key(Key::Confirm).unwrap();
        assert_eq!(cancelled.outcome(), Some(Selection::Cancelled));
    }

    #[test]
    fn test_outcome_absent_while_browsing() {
        let mut session = session(2);
        session.handle_key(Key::Other).unwrap();
        assert_eq!(session.outcome(), None);
        assert_eq!(session.state(), &SessionState::Browsing);
    }

    #[test]
    fn test_first_page_of_short_list() {
        let session = session(3);
        let lines = session.render().lines();
        assert_eq!(
            lines,
            vec![
                "select which pods you want to run your action on:".to_string(),
                String::new(),
                "> web-0   1/1   Running   0   0d".to_string(),
                "  web-1   1/1   Running   0   1d".to_string(),
                "  web-2   1/1   Running   0   2d".to_string(),
            ]
        );
    }

    #[test]
    fn test_first_page_is_clipped() {
        let session = session(20);
        let page = session.render();
        assert!(!page.has_previous);
        assert!(page.has_next);
        assert_eq!(page.rows.len(), PAGE_SIZE);
        assert_eq!(page.lines().last().map(String::as_str), Some(ELLIPSIS));
    }

    #[test]
    fn test_second_page_window() {
        let mut session = session(20);
        move_to(&mut session, 16);
        let page = session.render();

        assert!(page.has_previous);
        assert!(!page.has_next);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.cursor_row, 1);
        assert_eq!(page.rows[0], session.candidates()[15]);

        let lines = page.lines();
        assert_eq!(page.cursor_line(), 4);
        assert_eq!(lines[2], ELLIPSIS);
        assert_eq!(lines[3], "  web-15   1/1   Running   0   15d");
        assert_eq!(lines[4], "> web-16   1/1   Running   0   16d");
        assert_eq!(lines.len(), 2 + 1 + 5);
    }

    #[test]
    fn test_exact_page_has_no_trailing_ellipsis() {
        let mut session = session(PAGE_SIZE);
        move_to(&mut session, PAGE_SIZE - 1);
        let page = session.render();
        assert!(!page.has_previous);
        assert!(!page.has_next);
        assert_eq!(page.cursor_row, PAGE_SIZE - 1);
    }

    #[test]
    fn test_middle_page_has_both_markers() {
        let mut session = session(40);
        move_to(&mut session, 15);
        let page = session.render();
        assert!(page.has_previous);
        assert!(page.has_next);
        assert_eq!(page.cursor_row, 0);
        assert_eq!(page.rows.len(), PAGE_SIZE);
    }

    #[test]
    fn test_every_cursor_renders_its_own_row() {
        let mut session = session(47);
        for index in 0..47 {
            let page = session.render();
            assert!(page.rows.len() <= PAGE_SIZE);
            assert_eq!(page.cursor_text(), session.candidates()[index]);
            assert!(page.lines()[page.cursor_line()].starts_with(CURSOR_GLYPH));
            let markers = page.lines().iter().filter(|l| *l == ELLIPSIS).count();
            assert!(markers <= 2);
            session.handle_key(Key::Down).unwrap();
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut session = session(33);
        move_to(&mut session, 21);
        assert_eq!(session.render(), session.render());
        assert_eq!(session.render().to_string(), session.render().to_string());
    }
}
