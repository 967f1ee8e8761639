//! Entity model - the closed set of game objects
//!
//! Every object on the field has a position and an axis-aligned bounding box.
//! The four kinds share the [`Bounds`] record and the [`Body`] capability;
//! [`Entity`] wraps them in a tagged variant so any pair can be tested or
//! drawn uniformly without dynamic dispatch.

use crate::render::{Orientation, Renderer};
use crate::types::{EntityKind, MoveError, Position, Vector};
use crate::{Ball, Paddle};

/// Axis-aligned bounding box: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub pos: Position,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub const fn new(pos: Position, width: u16, height: u16) -> Self {
        Self { pos, width, height }
    }

    pub fn top(&self) -> i32 {
        i32::from(self.pos.y)
    }

    pub fn left(&self) -> i32 {
        i32::from(self.pos.x)
    }

    /// `top + height` (the closed far edge used by collision).
    pub fn bottom(&self) -> i32 {
        self.top() + i32::from(self.height)
    }

    /// `left + width` (the closed far edge used by collision).
    pub fn right(&self) -> i32 {
        self.left() + i32::from(self.width)
    }
}

/// Anything with a bounding box.
pub trait Body {
    fn kind(&self) -> EntityKind;

    fn bounds(&self) -> Bounds;

    fn position(&self) -> Position {
        self.bounds().pos
    }
}

/// Fixed horizontal strip closing the field at the top or bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pos: Position,
    width: u16,
}

impl Wall {
    pub const HEIGHT: u16 = 1;

    pub fn new(pos: Position, width: u16) -> Self {
        Self { pos, width }
    }

    pub fn draw<R: Renderer>(&self, r: &mut R) {
        r.draw_line(
            i32::from(self.pos.y),
            i32::from(self.pos.x),
            Orientation::Horizontal,
            self.width,
        );
    }
}

impl Body for Wall {
    fn kind(&self) -> EntityKind {
        EntityKind::Wall
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.width, Self::HEIGHT)
    }
}

/// Invisible vertical scoring strip at the left or right field edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pos: Position,
    height: u16,
}

impl Goal {
    pub const WIDTH: u16 = 1;

    pub fn new(pos: Position, height: u16) -> Self {
        Self { pos, height }
    }
}

impl Body for Goal {
    fn kind(&self) -> EntityKind {
        EntityKind::Goal
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, Self::WIDTH, self.height)
    }
}

/// Any game object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Wall(Wall),
    Goal(Goal),
    Ball(Ball),
    Paddle(Paddle),
}

impl Entity {
    /// Translate the entity by `v`.
    ///
    /// Walls and goals are immovable and reject every move, including a zero
    /// one. The entity is unchanged on error.
    pub fn translate(&mut self, v: Vector) -> Result<(), MoveError> {
        match self {
            Entity::Wall(_) => Err(MoveError::ImmovableEntity(EntityKind::Wall)),
            Entity::Goal(_) => Err(MoveError::ImmovableEntity(EntityKind::Goal)),
            Entity::Ball(ball) => ball.translate(v),
            Entity::Paddle(paddle) => paddle.translate(v),
        }
    }

    pub fn draw<R: Renderer>(&self, r: &mut R) {
        match self {
            Entity::Wall(wall) => wall.draw(r),
            // Goals are never rendered.
            Entity::Goal(_) => {}
            Entity::Ball(ball) => ball.draw(r),
            Entity::Paddle(paddle) => paddle.draw(r),
        }
    }
}

impl Body for Entity {
    fn kind(&self) -> EntityKind {
        match self {
            Entity::Wall(e) => e.kind(),
            Entity::Goal(e) => e.kind(),
            Entity::Ball(e) => e.kind(),
            Entity::Paddle(e) => e.kind(),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Entity::Wall(e) => e.bounds(),
            Entity::Goal(e) => e.bounds(),
            Entity::Ball(e) => e.bounds(),
            Entity::Paddle(e) => e.bounds(),
        }
    }
}

impl From<Wall> for Entity {
    fn from(value: Wall) -> Self {
        Entity::Wall(value)
    }
}

impl From<Goal> for Entity {
    fn from(value: Goal) -> Self {
        Entity::Goal(value)
    }
}

impl From<Ball> for Entity {
    fn from(value: Ball) -> Self {
        Entity::Ball(value)
    }
}

impl From<Paddle> for Entity {
    fn from(value: Paddle) -> Self {
        Entity::Paddle(value)
    }
}
