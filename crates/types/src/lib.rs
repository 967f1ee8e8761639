//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Every coordinate is `(y, x)`: row first, then column, with the origin in the
//! top-left corner of the field.
//!
//! - [`Vector`] is a free signed offset (velocity, movement step).
//! - [`Position`] is a location on the field. Its components are unsigned, so a
//!   position can never be negative; adding a vector that would push it below
//!   zero fails with [`MoveError::OutOfBounds`].
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 40 | Fixed timestep interval (25 ticks per second) |
//! | `PADDLE_HEIGHT` | 5 | Rows covered by a paddle |
//! | `PADDLE_MARGIN` | 3 | Columns between a field edge and its paddle |
//! | `SCORE_ROW` | 3 | Top row of the score digits |
//! | `MIN_ROWS` / `MIN_COLS` | 12 / 24 | Smallest playable field |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{MoveError, Position, Vector, DEFAULT_BALL_VELOCITY};
//!
//! let pos = Position::new(1, 1);
//! assert_eq!(pos.checked_add(DEFAULT_BALL_VELOCITY), Ok(Position::new(0, 2)));
//!
//! // Positions never go negative.
//! let err = Position::new(0, 4).checked_add(Vector::new(-1, 0)).unwrap_err();
//! assert_eq!(err, MoveError::OutOfBounds { y: -1, x: 4 });
//! ```

use std::fmt;
use std::ops::{Add, Neg};

/// Fixed timestep interval in milliseconds (40ms = 25 ticks per second)
pub const TICK_MS: u32 = 40;

/// Paddle height in rows
pub const PADDLE_HEIGHT: u16 = 5;

/// Distance from a field edge to the paddle defending it
pub const PADDLE_MARGIN: u16 = 3;

/// Row at which the score digits are drawn
pub const SCORE_ROW: u16 = 3;

/// Minimum field height (walls, paddle travel and score digits must fit)
pub const MIN_ROWS: u16 = 12;

/// Minimum field width
pub const MIN_COLS: u16 = 24;

/// Velocity of a freshly (re)spawned ball: one row up, one column right per tick
pub const DEFAULT_BALL_VELOCITY: Vector = Vector::new(-1, 1);


/// A signed 2D offset `(y, x)`.
///
/// No invariant by itself; used for velocities and movement steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub y: i32,
    pub x: i32,
}

impl Vector {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.y + rhs.y, self.x + rhs.x)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.y, -self.x)
    }
}

/// A location on the field `(y, x)`.
///
/// Components are unsigned: a position is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub y: u16,
    pub x: u16,
}

impl Position {
    pub const fn new(y: u16, x: u16) -> Self {
        Self { y, x }
    }

    /// Translate by `v`.
    ///
    /// Fails with [`MoveError::OutOfBounds`] if either resulting component would
    /// be negative (or would not fit the coordinate type). `self` is untouched on
    /// failure.
    pub fn checked_add(self, v: Vector) -> Result<Position, MoveError> {
        Position::try_from(self.as_vector() + v)
    }

    pub fn as_vector(self) -> Vector {
        Vector::new(i32::from(self.y), i32::from(self.x))
    }
}

impl TryFrom<Vector> for Position {
    type Error = MoveError;

    fn try_from(v: Vector) -> Result<Self, Self::Error> {
        match (u16::try_from(v.y), u16::try_from(v.x)) {
            (Ok(y), Ok(x)) => Ok(Position::new(y, x)),
            _ => Err(MoveError::OutOfBounds { y: v.y, x: v.x }),
        }
    }
}

/// The closed set of game object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Wall,
    Goal,
    Ball,
    Paddle,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Wall => "wall",
            EntityKind::Goal => "goal",
            EntityKind::Ball => "ball",
            EntityKind::Paddle => "paddle",
        }
    }

    /// Walls and goals never move.
    pub fn is_movable(&self) -> bool {
        matches!(self, EntityKind::Ball | EntityKind::Paddle)
    }
}

/// Field half. The human defends the left side, the opponent the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Commands produced by the human driver's input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Move the human paddle one row up
    Up,
    /// Move the human paddle one row down
    Down,
    /// Stop the game after the current tick
    Quit,
}

impl PlayerCommand {
    /// Vertical step for movement commands (`None` for quit).
    pub fn dy(&self) -> Option<i32> {
        match self {
            PlayerCommand::Up => Some(-1),
            PlayerCommand::Down => Some(1),
            PlayerCommand::Quit => None,
        }
    }
}

/// Failure kinds of entity movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The move would put a coordinate below zero.
    OutOfBounds { y: i32, x: i32 },
    /// Walls and goals cannot be moved.
    ImmovableEntity(EntityKind),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { y, x } => {
                write!(f, "position ({}, {}) is out of bounds", y, x)
            }
            MoveError::ImmovableEntity(kind) => {
                write!(f, "{} cannot be moved", kind.as_str())
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Field setup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    TooSmall { rows: u16, cols: u16 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::TooSmall { rows, cols } => write!(
                f,
                "field {}x{} is too small (need at least {}x{})",
                rows, cols, MIN_ROWS, MIN_COLS
            ),
        }
    }
}

impl std::error::Error for FieldError {}
