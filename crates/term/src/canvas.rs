//! TerminalCanvas: the renderer collaborator wired to a real terminal.

use anyhow::Result;

use crate::core::Renderer;
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;

/// A [`FrameBuffer`] that presents itself through a [`TerminalRenderer`] on
/// every flush.
pub struct TerminalCanvas {
    term: TerminalRenderer,
    frame: FrameBuffer,
}

impl TerminalCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            term: TerminalRenderer::new(),
            frame: FrameBuffer::new(width, height),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }

    pub fn width(&self) -> u16 {
        self.frame.width()
    }

    pub fn height(&self) -> u16 {
        self.frame.height()
    }
}

impl Renderer for TerminalCanvas {
    type Error = anyhow::Error;

    fn place_glyph(&mut self, row: i32, col: i32, glyph: char) {
        self.frame.place_glyph(row, col, glyph);
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn flush(&mut self) -> Result<()> {
        self.term.present(&mut self.frame)
    }
}
