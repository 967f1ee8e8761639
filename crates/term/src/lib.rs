//! Terminal renderer module.
//!
//! This is the renderer collaborator for real terminals. The game draws into a
//! [`FrameBuffer`] through the core `Renderer` trait; [`TerminalRenderer`] then
//! flushes only the cells that changed since the previous frame.
//!
//! Glyphs placed outside the grid are clipped silently, since the field layout
//! is derived arithmetically from the terminal size measured at startup.

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use canvas::TerminalCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
