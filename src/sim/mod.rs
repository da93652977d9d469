//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay platform-pure:
//! - Whole frames only, fixed update order
//! - Caller-supplied RNG only
//! - Stable iteration order (spawn/generation order)
//! - No rendering, input-device, or clock dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{paddle_deflection, reflect_off_walls};
pub use rect::Rect;
pub use state::{
    Ball, Brick, BrickTier, GamePhase, GameState, Paddle, PowerUp, PowerUpKind, Sprite, Visual,
};
pub use tick::{TickInput, generate_level, tick};
