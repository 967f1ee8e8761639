//! Paddle - shared by the human player and the opponent.
//!
//! Both drivers go through [`Paddle::move_by`], which clamps against the walls:
//! a paddle already in contact with a wall refuses to move further into it.

use crate::collision::collides;
use crate::entity::{Body, Bounds, Wall};
use crate::render::{Renderer, PADDLE_GLYPH};
use crate::types::{EntityKind, MoveError, Position, Side, Vector, PADDLE_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    side: Side,
    pos: Position,
    score: u32,
}

impl Paddle {
    pub const WIDTH: u16 = 1;
    pub const HEIGHT: u16 = PADDLE_HEIGHT;

    pub fn new(side: Side, pos: Position) -> Self {
        Self { side, pos, score: 0 }
    }

    /// The side this paddle defends.
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn add_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// First occupied row.
    pub fn top_row(&self) -> i32 {
        i32::from(self.pos.y)
    }

    /// Last occupied row.
    pub fn bottom_row(&self) -> i32 {
        self.top_row() + i32::from(Self::HEIGHT) - 1
    }

    /// Move vertically by one row in the direction of `dy` (`0` holds).
    ///
    /// Returns `Ok(false)` without moving when the paddle already touches the
    /// wall in that direction.
    pub fn move_by(&mut self, dy: i32, top: &Wall, bottom: &Wall) -> Result<bool, MoveError> {
        let dy = dy.signum();
        let blocked = match dy {
            0 => true,
            d if d < 0 => collides(&*self, top),
            _ => collides(&*self, bottom),
        };
        if blocked {
            return Ok(false);
        }
        self.translate(Vector::new(dy, 0))?;
        Ok(true)
    }

    pub(crate) fn translate(&mut self, v: Vector) -> Result<(), MoveError> {
        self.pos = self.pos.checked_add(v)?;
        Ok(())
    }

    pub fn draw<R: Renderer>(&self, r: &mut R) {
        let col = i32::from(self.pos.x);
        for row in self.top_row()..=self.bottom_row() {
            r.place_glyph(row, col, PADDLE_GLYPH);
        }
    }
}

impl Body for Paddle {
    fn kind(&self) -> EntityKind {
        EntityKind::Paddle
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, Self::WIDTH, Self::HEIGHT)
    }
}
