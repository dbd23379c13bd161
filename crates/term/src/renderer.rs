//! TerminalRenderer: puts game frames on a real terminal.
//!
//! The first frame after [`TerminalRenderer::enter`], a resize or
//! [`TerminalRenderer::invalidate`] clears the screen and paints everything;
//! later frames only repaint the spans that changed, so a falling letter or a
//! rotated line costs a handful of cells.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Span, Tone};

const SCREEN_BG: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const FIELD_BG: Color = Color::Rgb { r: 30, g: 30, b: 40 };

/// Foreground, background and weight of a tone.
fn tone_colors(tone: Tone) -> (Color, Color, bool) {
    let rgb = |r, g, b| Color::Rgb { r, g, b };
    match tone {
        Tone::Plain => (rgb(220, 220, 220), SCREEN_BG, false),
        Tone::Field => (rgb(80, 80, 90), FIELD_BG, false),
        Tone::Border => (rgb(200, 200, 200), SCREEN_BG, false),
        Tone::Letter => (rgb(235, 235, 235), FIELD_BG, true),
        Tone::Active => (rgb(20, 20, 20), rgb(120, 190, 250), true),
        Tone::Highlight => (rgb(20, 20, 20), rgb(240, 200, 60), true),
        Tone::Locked => (rgb(230, 255, 230), rgb(40, 110, 60), true),
        Tone::Selected => (rgb(250, 160, 60), SCREEN_BG, true),
        Tone::Label => (rgb(150, 150, 160), SCREEN_BG, false),
        Tone::Value => (rgb(240, 240, 240), SCREEN_BG, true),
        Tone::Done => (rgb(120, 220, 120), SCREEN_BG, true),
        Tone::Wrong => (rgb(240, 110, 110), FIELD_BG, true),
        Tone::Overlay => (rgb(255, 255, 255), rgb(90, 40, 40), true),
    }
}

#[derive(Default)]
pub struct TerminalRenderer {
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()?;
        self.shown = None;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next frame (terminal resized or scribbled on).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `frame`, repainting only what differs from the frame on screen.
    pub fn present(&mut self, frame: FrameBuffer) -> Result<()> {
        self.buf.clear();
        let spans = encode_frame(self.shown.as_ref(), &frame, &mut self.buf)?;
        if spans > 0 {
            self.flush()?;
        }
        self.shown = Some(frame);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.buf)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `shown` into `next`.
///
/// With nothing shown, or a frame of another size, the screen is cleared and
/// every row painted. Returns how many spans were painted.
pub fn encode_frame(shown: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<usize> {
    let spans: Vec<Span> = match shown {
        Some(prev) if prev.same_size(next) => next.changed_spans(prev),
        _ => {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            next.changed_spans(&FrameBuffer::new(0, 0))
        }
    };

    let mut tone = None;
    for span in &spans {
        out.queue(cursor::MoveTo(span.x, span.y))?;
        let row = next.row(span.y);
        let end = (span.x + span.len) as usize;
        for cell in row.get(span.x as usize..end.min(row.len())).unwrap_or(&[]) {
            if tone != Some(cell.tone) {
                set_tone(out, cell.tone)?;
                tone = Some(cell.tone);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    if !spans.is_empty() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(spans.len())
}

fn set_tone(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    let (fg, bg, bold) = tone_colors(tone);
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(fg))?;
    out.queue(SetBackgroundColor(bg))?;
    if bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}
