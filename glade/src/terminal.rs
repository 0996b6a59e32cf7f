use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;

/// Owns the terminal: raw mode, alternate screen, mouse capture, and the
/// double buffer used for diff rendering. Restores the terminal on drop.
pub struct Terminal {
    stdout: Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let (width, height) = crossterm::terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    /// Wait up to `timeout` for input, then drain everything pending.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Layout of the most recent render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    /// Lay out and draw the tree, flushing only changed cells.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = crossterm::terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            // Fresh previous buffer forces a full repaint after resize
            self.previous = Buffer::new(width, height);
            execute!(self.stdout, crossterm::terminal::Clear(crossterm::terminal::ClearType::All))?;
        }

        self.last_layout = layout(root, Rect::from_size(width, height));
        self.current.clear();
        render_to_buffer(root, &self.last_layout, &mut self.current);

        for (x, y, cell) in self.current.diff(&self.previous) {
            queue!(self.stdout, cursor::MoveTo(x, y), SetAttribute(Attribute::Reset))?;
            if cell.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if cell.style.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }
            if cell.style.italic {
                queue!(self.stdout, SetAttribute(Attribute::Italic))?;
            }
            if cell.style.underline {
                queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
            }
            if cell.style.reverse {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                self.stdout,
                SetForegroundColor(cell.fg.unwrap_or(Color::Reset)),
                SetBackgroundColor(cell.bg.unwrap_or(Color::Reset)),
                Print(cell.ch)
            )?;
        }
        self.stdout.flush()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(&self.last_layout)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Restore unconditionally; errors during teardown are not actionable
        let _ = execute!(
            self.stdout,
            DisableMouseCapture,
            cursor::Show,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}
