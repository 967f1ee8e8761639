//! Ball physics: constant integer velocity and axis-wise reflection.

use crate::entity::{Body, Bounds};
use crate::render::{Renderer, BALL_GLYPH};
use crate::types::{EntityKind, MoveError, Position, Side, Vector, DEFAULT_BALL_VELOCITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pos: Position,
    velocity: Vector,
}

impl Ball {
    pub const WIDTH: u16 = 1;
    pub const HEIGHT: u16 = 1;

    /// A ball at `pos` with [`DEFAULT_BALL_VELOCITY`].
    pub fn new(pos: Position) -> Self {
        Self::with_velocity(pos, DEFAULT_BALL_VELOCITY)
    }

    pub fn with_velocity(pos: Position, velocity: Vector) -> Self {
        Self { pos, velocity }
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Advance one tick: `position += velocity`.
    ///
    /// Fails with [`MoveError::OutOfBounds`] (leaving the ball in place) if the
    /// step would leave the non-negative quadrant. In play the round manager
    /// bounces the ball off walls and goals before this can happen.
    pub fn advance(&mut self) -> Result<(), MoveError> {
        self.translate(self.velocity)
    }

    pub(crate) fn translate(&mut self, v: Vector) -> Result<(), MoveError> {
        self.pos = self.pos.checked_add(v)?;
        Ok(())
    }

    /// Reverse horizontal direction.
    pub fn bounce_x(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    /// Reverse vertical direction.
    pub fn bounce_y(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    /// The field side the ball is travelling toward.
    pub fn heading(&self) -> Side {
        if self.velocity.x < 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn is_rising(&self) -> bool {
        self.velocity.y < 0
    }

    pub fn draw<R: Renderer>(&self, r: &mut R) {
        r.place_glyph(i32::from(self.pos.y), i32::from(self.pos.x), BALL_GLYPH);
    }
}

impl Body for Ball {
    fn kind(&self) -> EntityKind {
        EntityKind::Ball
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, Self::WIDTH, Self::HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_ball_has_default_velocity() {
        let ball = Ball::new(Position::new(12, 40));
        assert_eq!(ball.velocity(), Vector::new(-1, 1));
        assert_eq!(ball.heading(), Side::Right);
        assert!(ball.is_rising());
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut ball = Ball::new(Position::new(12, 40));
        ball.advance().unwrap();
        assert_eq!(ball.position(), Position::new(11, 41));
        ball.advance().unwrap();
        assert_eq!(ball.position(), Position::new(10, 42));
    }

    #[test]
    fn test_advance_out_of_bounds_keeps_position() {
        let mut ball = Ball::with_velocity(Position::new(0, 3), Vector::new(-1, -1));
        assert_eq!(
            ball.advance(),
            Err(MoveError::OutOfBounds { y: -1, x: 2 })
        );
        assert_eq!(ball.position(), Position::new(0, 3));
    }

    #[test]
    fn test_bounces_flip_single_axis() {
        let mut ball = Ball::with_velocity(Position::new(5, 5), Vector::new(-1, 1));
        ball.bounce_y();
        assert_eq!(ball.velocity(), Vector::new(1, 1));
        ball.bounce_x();
        assert_eq!(ball.velocity(), Vector::new(1, -1));
        assert_eq!(ball.heading(), Side::Left);
    }

    proptest! {
        #[test]
        fn double_bounce_restores_velocity(vy in -3i32..=3, vx in -3i32..=3) {
            let v = Vector::new(vy, vx);
            let mut ball = Ball::with_velocity(Position::new(10, 10), v);
            ball.bounce_x();
            ball.bounce_x();
            prop_assert_eq!(ball.velocity(), v);
            ball.bounce_y();
            ball.bounce_y();
            prop_assert_eq!(ball.velocity(), v);
        }
    }
}
