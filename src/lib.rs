//! Brick Breaker - a paddle-and-bricks arcade game
//!
//! Core modules:
//! - `sim`: frame-stepped simulation (entities, collision rules, level
//!   generation, the per-frame tick)
//!
//! Window management, input devices, rendering, and fonts are external
//! collaborators. A frontend polls whatever input it owns into a
//! [`TickInput`](sim::TickInput), advances the game with [`tick`](sim::tick)
//! once per frame, draws the [`GameState::sprites`](sim::GameState::sprites)
//! draw list together with the score, and caps the frame rate. `main.rs`
//! ships a headless reference frontend that does exactly that.

pub mod sim;

pub use sim::{GamePhase, GameState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Playfield size in world units (pixels for a 1:1 renderer)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed frame rate the frontend paces to
    pub const FPS: u32 = 60;

    /// Paddle geometry and handling
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal paddle speed, units per frame
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between the paddle's underside and the bottom of the screen
    pub const PADDLE_BOTTOM_MARGIN: f32 = 30.0;
    /// How many enlarge power-ups can stack
    pub const MAX_ENLARGEMENTS: u32 = 2;
    /// Width gained per enlargement
    pub const ENLARGE_STEP: f32 = 50.0;
    /// Enlargement lifetime (10 seconds of frames)
    pub const ENLARGE_DURATION_FRAMES: u32 = FPS * 10;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis launch speed, units per frame
    pub const BALL_SPEED: f32 = 4.0;
    /// Paddle-contact deflection: hit offset in [-0.5, 0.5] times this
    pub const PADDLE_DEFLECT_FACTOR: f32 = 8.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 5.0;
    /// Empty band above the first brick row
    pub const BRICK_TOP_MARGIN: f32 = 50.0;
    pub const MIN_BRICK_ROWS: u32 = 4;
    pub const MAX_BRICK_ROWS: u32 = 6;
    /// Points for every brick hit
    pub const BRICK_SCORE: u64 = 100;

    /// Power-ups
    pub const POWERUP_SIZE: f32 = 20.0;
    /// Fall speed, units per frame
    pub const POWERUP_FALL_SPEED: f32 = 3.0;
    /// Chance that a brick hit drops a power-up
    pub const POWERUP_PROBABILITY: f64 = 0.05;
    /// Extra balls granted by a multi-ball
    pub const MULTI_BALL_COUNT: usize = 2;
    /// Multi-ball launch point above the paddle's top edge
    pub const MULTI_BALL_SPAWN_OFFSET: f32 = 10.0;
}
