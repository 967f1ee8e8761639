//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the entity model, collision rules, ball physics, the
//! opponent controller and the round/score manager. It has **zero dependencies**
//! on terminals or input devices:
//!
//! - **Deterministic**: integer velocities and a reflex controller with no
//!   randomness, so every tick has an exact outcome
//! - **Testable**: rendering goes through the [`Renderer`] trait, so any grid
//!   (including a test recorder) can stand in for the terminal
//!
//! # Module Structure
//!
//! - [`entity`]: walls, goals, the shared bounding box and the `Entity` variant set
//! - [`collision`]: closed-interval AABB test
//! - [`ball`]: constant-velocity movement and bounces
//! - [`paddle`]: wall-clamped vertical movement and scores
//! - [`opponent`]: the computer paddle's tracking heuristic
//! - [`scoreboard`]: block-digit score displays
//! - [`game`]: field layout, tick update and frame rendering
//! - [`render`]: the renderer collaborator trait
//!
//! # Example
//!
//! ```
//! use tui_pong_core::{Ball, Body, Field, Game, TickEvent};
//! use tui_pong_types::{PlayerCommand, Position, Side, Vector};
//!
//! let mut game = Game::new(Field::new(24, 80).unwrap());
//! game.apply_command(PlayerCommand::Up).unwrap();
//!
//! // A ball sliding into the left goal scores for the right paddle.
//! game.set_ball(Ball::with_velocity(Position::new(20, 1), Vector::new(1, -1)));
//! let report = game.tick().unwrap();
//! assert_eq!(report[0], TickEvent::Goal { scorer: Side::Right });
//! assert_eq!(game.opponent().score(), 1);
//! assert_eq!(game.ball().position(), game.field().center());
//! ```

pub mod ball;
pub mod collision;
pub mod entity;
pub mod game;
pub mod opponent;
pub mod paddle;
pub mod render;
pub mod scoreboard;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use ball::Ball;
pub use collision::{collides, overlaps};
pub use entity::{Body, Bounds, Entity, Goal, Wall};
pub use game::{Field, Game, TickEvent, TickReport};
pub use paddle::Paddle;
pub use render::{Orientation, Renderer};
pub use scoreboard::{display_digit, ScoreDisplay, Scoreboard};
