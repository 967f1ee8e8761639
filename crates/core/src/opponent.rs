//! Opponent controller - reactive vertical tracking.
//!
//! Once per tick the controller compares the ball row with the paddle's rows and
//! steps one row toward the ball. It only reacts while the ball is heading toward
//! its side. No prediction, no randomness: the decision is a pure function of
//! the current ball and paddle state.

use crate::ball::Ball;
use crate::collision::collides;
use crate::entity::{Body, Wall};
use crate::paddle::Paddle;

/// Vertical step (`-1`, `0` or `1`) the opponent paddle should take this tick.
pub fn decide(ball: &Ball, paddle: &Paddle, top: &Wall, bottom: &Wall) -> i32 {
    if ball.heading() != paddle.side() {
        return 0;
    }

    let ball_row = i32::from(ball.position().y);
    if ball_row < paddle.top_row() && !collides(paddle, top) {
        -1
    } else if ball_row > paddle.bottom_row() && !collides(paddle, bottom) {
        1
    } else {
        0
    }
}
