//! Game module - owns every entity and runs one tick of play
//!
//! A tick is the round/score manager followed by the opponent controller:
//!
//! 1. Ball touching the left goal: the right paddle scores, the ball respawns,
//!    and the tick ends.
//! 2. Ball touching the right goal: the left paddle scores, respawn, tick ends.
//! 3. Ball touching a wall it is heading into: vertical bounce.
//! 4. Ball touching a paddle it is heading into: horizontal bounce (checked for
//!    both paddles independently).
//! 5. Ball advances by its velocity.
//! 6. Opponent paddle steps toward the ball.
//!
//! Bounces are gated on direction so a ball still in contact on the following
//! tick (closed-interval collision) is not reflected back again.

use arrayvec::ArrayVec;

use crate::collision::collides;
use crate::entity::{Body, Entity, Goal, Wall};
use crate::opponent;
use crate::render::{Orientation, Renderer};
use crate::scoreboard::{ScoreDisplay, Scoreboard};
use crate::types::{
    FieldError, MoveError, PlayerCommand, Position, Side, MIN_COLS, MIN_ROWS, PADDLE_HEIGHT,
    PADDLE_MARGIN, SCORE_ROW,
};
use crate::{Ball, Paddle};

/// Playing field dimensions, measured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    rows: u16,
    cols: u16,
}

impl Field {
    pub fn new(rows: u16, cols: u16) -> Result<Self, FieldError> {
        if rows < MIN_ROWS || cols < MIN_COLS {
            return Err(FieldError::TooSmall { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Respawn point of the ball.
    pub fn center(&self) -> Position {
        Position::new(self.rows / 2, self.cols / 2)
    }
}

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    WallBounce,
    PaddleBounce(Side),
    /// The ball reached a goal; `scorer` gained a point and the ball respawned.
    Goal { scorer: Side },
    OpponentMoved(i32),
}

/// Events of one tick, in order.
pub type TickReport = ArrayVec<TickEvent, 4>;

/// Complete game state. The single owner of every entity.
#[derive(Debug, Clone)]
pub struct Game {
    field: Field,
    player: Paddle,
    opponent: Paddle,
    ball: Ball,
    top_wall: Wall,
    bottom_wall: Wall,
    left_goal: Goal,
    right_goal: Goal,
    scoreboard: Scoreboard,
    running: bool,
    ticks: u64,
}

impl Game {
    pub fn new(field: Field) -> Self {
        let rows = field.rows();
        let cols = field.cols();
        let center = field.center();
        let paddle_top = center.y - PADDLE_HEIGHT / 2;

        log::debug!("new game on a {}x{} field", rows, cols);

        Self {
            field,
            player: Paddle::new(Side::Left, Position::new(paddle_top, PADDLE_MARGIN)),
            opponent: Paddle::new(
                Side::Right,
                Position::new(paddle_top, cols - 1 - PADDLE_MARGIN),
            ),
            ball: Ball::new(center),
            top_wall: Wall::new(Position::new(0, 0), cols),
            bottom_wall: Wall::new(Position::new(rows - 1, 0), cols),
            left_goal: Goal::new(Position::new(0, 0), rows),
            right_goal: Goal::new(Position::new(0, cols - 1), rows),
            scoreboard: Scoreboard::new(
                ScoreDisplay::new(Position::new(SCORE_ROW, center.x / 2)),
                ScoreDisplay::new(Position::new(SCORE_ROW, center.x + center.x / 2)),
            ),
            running: true,
            ticks: 0,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// The human-controlled paddle (left side).
    pub fn player(&self) -> &Paddle {
        &self.player
    }

    /// The computer-controlled paddle (right side).
    pub fn opponent(&self) -> &Paddle {
        &self.opponent
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.opponent,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn top_wall(&self) -> &Wall {
        &self.top_wall
    }

    pub fn bottom_wall(&self) -> &Wall {
        &self.bottom_wall
    }

    pub fn goal(&self, side: Side) -> &Goal {
        match side {
            Side::Left => &self.left_goal,
            Side::Right => &self.right_goal,
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request shutdown. The loop finishes the current tick and exits.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Replace the ball (scenario setup and replays).
    pub fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    /// Replace the paddle defending `paddle.side()`.
    pub fn set_paddle(&mut self, paddle: Paddle) {
        match paddle.side() {
            Side::Left => self.player = paddle,
            Side::Right => self.opponent = paddle,
        }
    }

    /// All entities in draw order (ball last so it stays on top).
    pub fn entities(&self) -> [Entity; 7] {
        [
            self.top_wall.into(),
            self.bottom_wall.into(),
            self.left_goal.into(),
            self.right_goal.into(),
            self.player.into(),
            self.opponent.into(),
            self.ball.into(),
        ]
    }

    /// Apply one human command. Returns whether the player paddle moved.
    pub fn apply_command(&mut self, cmd: PlayerCommand) -> Result<bool, MoveError> {
        match cmd.dy() {
            Some(dy) => self.player.move_by(dy, &self.top_wall, &self.bottom_wall),
            None => {
                log::info!("quit requested after {} ticks", self.ticks);
                self.stop();
                Ok(false)
            }
        }
    }

    /// Run one physics, collision and scoring step.
    ///
    /// An error here is a contract violation: the goal and wall checks are
    /// supposed to keep every entity on the field.
    pub fn tick(&mut self) -> Result<TickReport, MoveError> {
        self.ticks += 1;
        let mut report = TickReport::new();

        if collides(&self.ball, &self.left_goal) {
            self.score(Side::Right);
            report.push(TickEvent::Goal { scorer: Side::Right });
            return Ok(report);
        } else if collides(&self.ball, &self.right_goal) {
            self.score(Side::Left);
            report.push(TickEvent::Goal { scorer: Side::Left });
            return Ok(report);
        } else if self.ball_hits_wall() {
            self.ball.bounce_y();
            log::trace!("wall bounce at {:?}", self.ball.position());
            report.push(TickEvent::WallBounce);
        }

        for paddle in [&self.player, &self.opponent] {
            if self.ball.heading() == paddle.side() && collides(&self.ball, paddle) {
                self.ball.bounce_x();
                log::trace!("{} paddle bounce at {:?}", paddle.side().as_str(), self.ball.position());
                report.push(TickEvent::PaddleBounce(paddle.side()));
            }
        }

        self.ball.advance()?;

        let dy = opponent::decide(&self.ball, &self.opponent, &self.top_wall, &self.bottom_wall);
        if dy != 0 && self.opponent.move_by(dy, &self.top_wall, &self.bottom_wall)? {
            report.push(TickEvent::OpponentMoved(dy));
        }

        Ok(report)
    }

    /// Draw a full frame and flush it.
    pub fn render<R: Renderer>(&self, r: &mut R) -> Result<(), R::Error> {
        r.clear();
        r.draw_line(
            0,
            i32::from(self.field.center().x),
            Orientation::Vertical,
            self.field.rows(),
        );
        self.scoreboard
            .draw(r, self.player.score(), self.opponent.score());
        for entity in self.entities().iter() {
            entity.draw(r);
        }
        r.flush()
    }

    fn ball_hits_wall(&self) -> bool {
        if self.ball.is_rising() {
            collides(&self.ball, &self.top_wall)
        } else {
            collides(&self.ball, &self.bottom_wall)
        }
    }

    fn score(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.player.add_point(),
            Side::Right => self.opponent.add_point(),
        }
        log::info!(
            "{} scores: {} - {}",
            scorer.as_str(),
            self.player.score(),
            self.opponent.score()
        );
        self.ball = Ball::new(self.field.center());
    }
}
