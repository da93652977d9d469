//! Entity types and game state
//!
//! Everything a frontend needs to snapshot lives here; the per-frame rules
//! connecting the entities are in [`tick`](super::tick).

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are being simulated
    Running,
    /// Every ball was lost; the loop halts
    GameOver,
    /// External shutdown request observed
    Terminated,
}

/// Remaining-durability category a renderer maps to a brick color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickTier {
    /// One hit left
    Light,
    /// Two hits left
    Medium,
    /// Three or more hits left
    Heavy,
}

/// One-shot effects carried by falling power-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Widen the paddle for a while
    Enlarge,
    /// Launch two extra balls from the paddle
    MultiBall,
}

/// Visual category of a drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visual {
    Paddle,
    Ball,
    Brick(BrickTier),
    PowerUp(PowerUpKind),
}

/// What a renderer needs to know to draw one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub rect: Rect,
    pub visual: Visual,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub speed: f32,
    /// Active width boosts (0..=MAX_ENLARGEMENTS)
    enlargements: u32,
    /// Frames until the newest boost lapses (0 = no timer armed)
    enlarge_timer: u32,
}

impl Default for Paddle {
    fn default() -> Self {
        let rect = Rect::new(
            (SCREEN_WIDTH - PADDLE_WIDTH) / 2.0,
            SCREEN_HEIGHT - PADDLE_BOTTOM_MARGIN - PADDLE_HEIGHT,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        );
        Self {
            rect,
            speed: PADDLE_SPEED,
            enlargements: 0,
            enlarge_timer: 0,
        }
    }
}

impl Paddle {
    /// Per-frame update: apply held directional input at fixed speed, keep
    /// the paddle fully on screen, and count the enlargement timer down.
    /// When the timer runs out it releases exactly one width step.
    pub fn update(&mut self, left: bool, right: bool) {
        if left {
            self.rect.pos.x -= self.speed;
        }
        if right {
            self.rect.pos.x += self.speed;
        }
        self.rect.pos.x = self.rect.pos.x.clamp(0.0, SCREEN_WIDTH - self.rect.width());

        if self.enlarge_timer > 0 {
            self.enlarge_timer -= 1;
            if self.enlarge_timer == 0 {
                self.shrink();
            }
        }
    }

    /// Widen by one step and (re)arm the lapse timer. Saturates at
    /// [`MAX_ENLARGEMENTS`]; never an error.
    pub fn enlarge(&mut self) {
        if self.enlargements < MAX_ENLARGEMENTS {
            self.enlargements += 1;
            self.rect.size.x += ENLARGE_STEP;
            self.enlarge_timer = ENLARGE_DURATION_FRAMES;
        }
    }

    /// Give back one width step. No-op at base width.
    pub fn shrink(&mut self) {
        if self.enlargements > 0 {
            self.enlargements -= 1;
            self.rect.size.x -= ENLARGE_STEP;
        }
    }

    pub fn enlargements(&self) -> u32 {
        self.enlargements
    }
}

/// A ball in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// New ball at `pos`, launched upward with a random horizontal direction
    pub fn new(pos: Vec2, rng: &mut Pcg32) -> Self {
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            pos,
            vel: Vec2::new(dir * BALL_SPEED, -BALL_SPEED),
            radius: BALL_RADIUS,
        }
    }

    /// Bounding box used for collision tests
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Linear motion plus wall reflection, once per frame
    pub fn advance(&mut self) {
        self.pos += self.vel;
        collision::reflect_off_walls(&self.rect(), &mut self.vel);
    }

    /// Rebound off the paddle: horizontal speed from the contact point,
    /// vertical speed normalized upward with its magnitude preserved.
    pub fn bounce(&mut self, paddle: &Rect) {
        self.vel.x = collision::paddle_deflection(self.pos.x, paddle);
        self.vel.y = -self.vel.y.abs();
    }

    /// A ball whose top edge dropped below the screen is out of play
    pub fn is_lost(&self) -> bool {
        self.rect().top() > SCREEN_HEIGHT
    }
}

/// A brick with a hit-point counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub hits: u32,
}

impl Brick {
    pub fn new(x: f32, y: f32, hits: u32) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            hits,
        }
    }

    /// Take one hit. Hit points only ever go down; the tick drops the brick
    /// from the field once they reach zero.
    pub fn hit(&mut self) {
        self.hits = self.hits.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits == 0
    }

    /// Visual category derived from remaining hit points
    pub fn tier(&self) -> BrickTier {
        match self.hits {
            0 | 1 => BrickTier::Light,
            2 => BrickTier::Medium,
            _ => BrickTier::Heavy,
        }
    }
}

/// A falling collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
}

impl PowerUp {
    /// Spawn centered on the brick that dropped it
    pub fn new(center: Vec2, kind: PowerUpKind) -> Self {
        Self {
            rect: Rect::from_center(center, Vec2::splat(POWERUP_SIZE)),
            kind,
        }
    }

    /// Constant-speed fall, once per frame
    pub fn advance(&mut self) {
        self.rect.pos.y += POWERUP_FALL_SPEED;
    }

    /// Fell past the bottom edge without being caught
    pub fn is_lost(&self) -> bool {
        self.rect.top() > SCREEN_HEIGHT
    }
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Monotonically non-decreasing score
    pub score: u64,
    /// Current level, starting at 1
    pub level: u32,
    pub phase: GamePhase,
    pub paddle: Paddle,
    /// Active balls, in spawn order
    pub balls: Vec<Ball>,
    /// Active bricks, in generation order
    pub bricks: Vec<Brick>,
    /// Falling power-ups, in spawn order
    pub powerups: Vec<PowerUp>,
}

impl GameState {
    /// Fresh run: one paddle and one centered ball, no bricks yet — callers
    /// fill the field with [`generate_level`](super::tick::generate_level).
    pub fn new(rng: &mut Pcg32) -> Self {
        let mut state = Self {
            score: 0,
            level: 1,
            phase: GamePhase::Running,
            paddle: Paddle::default(),
            balls: Vec::new(),
            bricks: Vec::new(),
            powerups: Vec::new(),
        };
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        state.balls.push(Ball::new(center, rng));
        state
    }

    /// Launch an extra ball from `pos`
    pub fn spawn_ball(&mut self, pos: Vec2, rng: &mut Pcg32) {
        self.balls.push(Ball::new(pos, rng));
    }

    /// Flat draw list in stable paint order: paddle, balls, bricks,
    /// power-ups.
    pub fn sprites(&self) -> Vec<Sprite> {
        let mut sprites =
            Vec::with_capacity(1 + self.balls.len() + self.bricks.len() + self.powerups.len());
        sprites.push(Sprite {
            rect: self.paddle.rect,
            visual: Visual::Paddle,
        });
        sprites.extend(self.balls.iter().map(|b| Sprite {
            rect: b.rect(),
            visual: Visual::Ball,
        }));
        sprites.extend(self.bricks.iter().map(|b| Sprite {
            rect: b.rect,
            visual: Visual::Brick(b.tier()),
        }));
        sprites.extend(self.powerups.iter().map(|p| Sprite {
            rect: p.rect,
            visual: Visual::PowerUp(p.kind),
        }));
        sprites
    }
}
