//! Renderer collaborator.
//!
//! The core never talks to a terminal. Entities describe themselves through
//! this trait and a backend (framebuffer, terminal, test recorder) turns the
//! calls into pixels.

/// Paddle glyph.
pub const PADDLE_GLYPH: char = '█';
/// Ball glyph.
pub const BALL_GLYPH: char = '●';
/// Glyph used for the lit segments of score digits.
pub const DIGIT_GLYPH: char = '█';

/// Direction of [`Renderer::draw_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Glyph a backend should use for a line of this orientation.
    pub fn glyph(&self) -> char {
        match self {
            Orientation::Horizontal => '─',
            Orientation::Vertical => '│',
        }
    }
}

/// Grid drawing surface.
///
/// Coordinates are signed and unchecked: implementations must clip anything
/// outside their grid silently.
pub trait Renderer {
    type Error;

    fn place_glyph(&mut self, row: i32, col: i32, glyph: char);

    fn draw_line(&mut self, row: i32, col: i32, orientation: Orientation, length: u16) {
        let glyph = orientation.glyph();
        for i in 0..i32::from(length) {
            match orientation {
                Orientation::Horizontal => self.place_glyph(row, col + i, glyph),
                Orientation::Vertical => self.place_glyph(row + i, col, glyph),
            }
        }
    }

    fn clear(&mut self);

    /// Present the frame drawn since the last `clear`.
    fn flush(&mut self) -> Result<(), Self::Error>;
}
