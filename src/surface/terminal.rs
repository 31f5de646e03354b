//! Terminal reference surface: draws run lists as ANSI true-color text.
//!
//! One grid cell maps to one terminal cell, so the auto-fit font sizing is
//! irrelevant here; the run list is drawn at the terminal's top-left. All
//! escape sequences for a frame are accumulated into one buffer and flushed
//! with a single write to avoid flicker.

use super::DrawSurface;
use crate::frame::Color;
use crate::render::{GridDimensions, Run};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// An ANSI terminal draw surface.
///
/// Construction switches the terminal into raw mode on the alternate
/// screen; dropping the surface restores it.
pub struct TerminalSurface {
    /// Terminal stdout handle.
    stdout: Stdout,
    /// Pre-allocated escape-sequence buffer, reused across frames.
    output: Vec<u8>,
    /// Size reported when the terminal cannot be queried.
    fallback_size: (u16, u16),
}

impl TerminalSurface {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be
    /// entered.
    pub fn new() -> io::Result<Self> {
        let fallback_size = terminal::size().unwrap_or((80, 24));
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        Ok(Self {
            stdout,
            output: Vec::with_capacity(16 * 1024),
            fallback_size,
        })
    }

    /// Append the SGR sequences for a run's colors.
    fn push_colors(output: &mut Vec<u8>, fg: Color, bg: Color) {
        match fg {
            Color::Transparent => output.extend_from_slice(b"\x1b[39m"),
            Color::Rgb(rgb) => {
                let _ = write!(output, "\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b);
            }
        }
        match bg {
            Color::Transparent => output.extend_from_slice(b"\x1b[49m"),
            Color::Rgb(rgb) => {
                let _ = write!(output, "\x1b[48;2;{};{};{}m", rgb.r, rgb.g, rgb.b);
            }
        }
    }
}

impl DrawSurface for TerminalSurface {
    fn size(&self) -> (f32, f32) {
        let (columns, rows) = terminal::size().unwrap_or(self.fallback_size);
        (f32::from(columns), f32::from(rows))
    }

    fn draw(&mut self, runs: &[Run], _dims: &GridDimensions) -> io::Result<()> {
        self.output.clear();
        self.output.extend_from_slice(b"\x1b[H");

        let mut last_colors: Option<(Color, Color)> = None;
        for run in runs {
            if run.text == "\n" {
                // Raw mode: explicit carriage return with the line feed.
                self.output.extend_from_slice(b"\r\n");
                continue;
            }
            if last_colors != Some((run.fg, run.bg)) {
                Self::push_colors(&mut self.output, run.fg, run.bg);
                last_colors = Some((run.fg, run.bg));
            }
            self.output.extend_from_slice(run.text.as_bytes());
        }

        self.output.extend_from_slice(b"\x1b[0m");
        self.stdout.write_all(&self.output)?;
        self.stdout.flush()
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_colors_rgb_and_default() {
        let mut output = Vec::new();
        TerminalSurface::push_colors(&mut output, Color::RED, Color::Transparent);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\x1b[38;2;255;0;0m"));
        assert!(text.contains("\x1b[49m"));

        let mut output = Vec::new();
        TerminalSurface::push_colors(&mut output, Color::Transparent, Color::BLACK);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\x1b[39m"));
        assert!(text.contains("\x1b[48;2;0;0;0m"));
    }
}
