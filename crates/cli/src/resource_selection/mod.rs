//! Interactive resource selection.
//!
//! This module drives a [`SelectionSession`](qkk_core::selection::SelectionSession)
//! from terminal key events and draws its current page after every event.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Enter or space to select the resource under the cursor
//! - 'q' or Ctrl+C to quit without selecting

pub mod input;
pub mod ui;

pub use input::classify_key_event;
pub use ui::prompt_for_selection;
