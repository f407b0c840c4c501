//! Abstractions for terminal side effects to enable testing.
//!
//! This module provides the `Screen` trait, implemented by a real terminal
//! writer and by a recorder used in tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};

/// Clears the whole screen and parks the cursor on the second row.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[2;1H";
/// Moves the cursor back to the top-left corner.
const RESET_CURSOR: &str = "\x1b[1;1H";

/// Destination for visualization frames.
pub trait Screen: Send + Sync {
    /// Wipe previous output before a new frame.
    fn clear(&self) -> Result<()>;

    /// Write one fully composed frame.
    fn write_frame(&self, frame: &str) -> Result<()>;

    /// Reposition the cursor once every frame has been shown.
    fn reset_cursor(&self) -> Result<()>;
}

/// Screen writing escape sequences and frames to stdout.
#[derive(Debug, Clone, Default)]
pub struct TerminalScreen;

impl TerminalScreen {
    fn emit(text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())
            .context("Failed to write to terminal")?;
        out.flush().context("Failed to flush terminal")?;
        Ok(())
    }
}

impl Screen for TerminalScreen {
    fn clear(&self) -> Result<()> {
        Self::emit(CLEAR_SCREEN)
    }

    fn write_frame(&self, frame: &str) -> Result<()> {
        Self::emit(frame)
    }

    fn reset_cursor(&self) -> Result<()> {
        Self::emit(RESET_CURSOR)
    }
}

/// Everything a [`MockScreen`] has been asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Clear,
    Frame(String),
    ResetCursor,
}

/// Mock screen for testing that records all calls.
#[derive(Debug, Clone, Default)]
pub struct MockScreen {
    events: Arc<Mutex<Vec<ScreenEvent>>>,
}

impl MockScreen {
    /// Create a new mock screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded events.
    pub fn events(&self) -> Vec<ScreenEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Get only the written frames.
    pub fn frames(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                ScreenEvent::Frame(f) => Some(f.clone()),
                _ => None,
            })
            .collect()
    }

    /// Get the count of frames written.
    pub fn frame_count(&self) -> usize {
        self.frames().len()
    }

    fn record(&self, event: ScreenEvent) -> Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

impl Screen for MockScreen {
    fn clear(&self) -> Result<()> {
        self.record(ScreenEvent::Clear)
    }

    fn write_frame(&self, frame: &str) -> Result<()> {
        self.record(ScreenEvent::Frame(frame.to_string()))
    }

    fn reset_cursor(&self) -> Result<()> {
        self.record(ScreenEvent::ResetCursor)
    }
}
