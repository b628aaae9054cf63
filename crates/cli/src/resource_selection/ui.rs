use std::io::{stdout, Stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use log::{debug, warn};
use qkk_core::error::Result;
use qkk_core::selection::{Page, Selection, SelectionSession};

use super::input::classify_key_event;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore the terminal on every exit path, including errors
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Lets the user browse `session` until a row is confirmed or the picker is quit.
pub fn prompt_for_selection(mut session: SelectionSession) -> Result<Selection> {
    let mut stdout = stdout();

    // Armed first so a failure part-way through setup still restores the terminal
    let _raw_mode_guard = RawModeGuard;
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    stdout.execute(cursor::Hide)?;

    loop {
        redraw_ui(&mut stdout, &session.render())?;

        match event::read()? {
            Event::Key(key_event) => {
                let Some(key) = classify_key_event(key_event) else {
                    continue;
                };
                debug!("{:?} -> {:?}", key_event.code, key);
                session.handle_key(key)?;
            }
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
            }
            _ => {}
        }

        if let Some(selection) = session.outcome() {
            return Ok(selection);
        }
    }
}

/// Draws a full page, header and cursor row highlighted.
fn redraw_ui(stdout: &mut Stdout, page: &Page) -> Result<()> {
    let cursor_line = page.cursor_line();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    for (i, line) in page.lines().into_iter().enumerate() {
        if i == 0 {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(DarkGreen),
            )?;
        } else if i == cursor_line {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetBackgroundColor(DarkBlue),
                SetForegroundColor(Yellow),
            )?;
        }

        queue!(
            stdout,
            Print(line),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(Reset),
            SetForegroundColor(Reset),
            cursor::MoveToNextLine(1)
        )?;
    }

    stdout.flush()?;
    Ok(())
}
