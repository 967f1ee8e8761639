//! Scoreboard - one block-digit display per paddle.

use crate::render::{Renderer, DIGIT_GLYPH};
use crate::types::{Position, Side};

/// Digit glyph width in columns.
pub const DIGIT_WIDTH: u16 = 3;
/// Digit glyph height in rows.
pub const DIGIT_HEIGHT: u16 = 5;

/// 3x5 font for 0-9; `#` marks a lit cell.
const DIGITS: [[&str; 5]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    ["  #", "  #", "  #", "  #", "  #"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

/// Digit shown for `score`. Scores past 9 display as 9; the score itself is
/// unbounded.
pub fn display_digit(score: u32) -> usize {
    score.min(9) as usize
}

/// A single-digit score display bound to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDisplay {
    pos: Position,
}

impl ScoreDisplay {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn draw<R: Renderer>(&self, r: &mut R, score: u32) {
        let top = i32::from(self.pos.y);
        let left = i32::from(self.pos.x);
        for (dy, line) in DIGITS[display_digit(score)].iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch == '#' {
                    r.place_glyph(top + dy as i32, left + dx as i32, DIGIT_GLYPH);
                }
            }
        }
    }
}

/// Score displays for the left (human) and right (opponent) paddles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    left: ScoreDisplay,
    right: ScoreDisplay,
}

impl Scoreboard {
    pub fn new(left: ScoreDisplay, right: ScoreDisplay) -> Self {
        Self { left, right }
    }

    pub fn display(&self, side: Side) -> &ScoreDisplay {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn draw<R: Renderer>(&self, r: &mut R, left_score: u32, right_score: u32) {
        self.left.draw(r, left_score);
        self.right.draw(r, right_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::Recorder;

    #[test]
    fn test_display_digit_clamps() {
        assert_eq!(display_digit(0), 0);
        assert_eq!(display_digit(7), 7);
        assert_eq!(display_digit(9), 9);
        assert_eq!(display_digit(10), 9);
        assert_eq!(display_digit(u32::MAX), 9);
    }

    #[test]
    fn test_digits_fit_the_grid() {
        for digit in DIGITS.iter() {
            assert_eq!(digit.len(), DIGIT_HEIGHT as usize);
            for line in digit.iter() {
                assert_eq!(line.chars().count(), DIGIT_WIDTH as usize);
            }
        }
    }

    #[test]
    fn test_draw_one() {
        let mut r = Recorder::default();
        ScoreDisplay::new(Position::new(3, 10)).draw(&mut r, 1);
        // "1" is the right column only.
        assert_eq!(r.count(DIGIT_GLYPH), 5);
        for row in 3..8 {
            assert_eq!(r.at(row, 12), Some(DIGIT_GLYPH));
            assert_eq!(r.at(row, 10), None);
        }
    }

    #[test]
    fn test_large_score_draws_nine() {
        let mut nine = Recorder::default();
        ScoreDisplay::new(Position::new(0, 0)).draw(&mut nine, 9);
        let mut big = Recorder::default();
        ScoreDisplay::new(Position::new(0, 0)).draw(&mut big, 42);
        assert_eq!(nine.glyphs, big.glyphs);
    }

    #[test]
    fn test_scoreboard_draws_both_sides() {
        let board = Scoreboard::new(
            ScoreDisplay::new(Position::new(3, 20)),
            ScoreDisplay::new(Position::new(3, 60)),
        );
        let mut r = Recorder::default();
        board.draw(&mut r, 1, 7);
        assert_eq!(r.at(3, 22), Some(DIGIT_GLYPH));
        assert_eq!(r.at(3, 60), Some(DIGIT_GLYPH));
        assert_eq!(board.display(Side::Right).position(), Position::new(3, 60));
    }
}
