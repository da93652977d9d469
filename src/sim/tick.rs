//! The per-frame game loop body
//!
//! [`tick`] advances exactly one frame in a fixed order: shutdown check,
//! entity updates, paddle rebounds, brick hits, power-up collection,
//! lost-ball removal, then the game-over and level-clear transitions. The
//! order is part of the game's observable behavior and must not be
//! rearranged.
//!
//! Frontends own the steps the simulation cannot: polling input devices
//! into a [`TickInput`], drawing [`GameState::sprites`] plus the score, and
//! capping the frame rate.

use std::cmp::Ordering;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Brick, GamePhase, GameState, PowerUp, PowerUpKind};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left-equivalent key held
    pub left: bool,
    /// Right-equivalent key held
    pub right: bool,
    /// External shutdown requested
    pub quit: bool,
    /// Let the built-in tracker drive the paddle (demo/attract mode)
    pub autopilot: bool,
}

/// Advance the game by one frame.
///
/// Inert unless the phase is `Running`. A shutdown request is honored at
/// the frame boundary, before anything moves.
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut Pcg32) {
    if state.phase != GamePhase::Running {
        return;
    }
    if input.quit {
        state.phase = GamePhase::Terminated;
        return;
    }

    let (left, right) = if input.autopilot {
        autopilot(state)
    } else {
        (input.left, input.right)
    };

    // Move everything before any collision is resolved.
    state.paddle.update(left, right);
    for ball in &mut state.balls {
        ball.advance();
    }
    for powerup in &mut state.powerups {
        powerup.advance();
    }
    state.powerups.retain(|p| !p.is_lost());

    // Paddle rebounds.
    let paddle_rect = state.paddle.rect;
    for ball in &mut state.balls {
        if ball.rect().intersects(&paddle_rect) {
            ball.bounce(&paddle_rect);
        }
    }

    // Brick hits. Every overlapped brick takes damage, scores, and rolls
    // for a power-up drop, but a ball's vertical velocity flips at most
    // once per frame no matter how many bricks it clipped.
    let mut dropped: Vec<PowerUp> = Vec::new();
    for ball in &mut state.balls {
        let ball_rect = ball.rect();
        let mut struck = false;
        for brick in &mut state.bricks {
            if !brick.is_destroyed() && ball_rect.intersects(&brick.rect) {
                struck = true;
                brick.hit();
                state.score += BRICK_SCORE;
                if rng.random_bool(POWERUP_PROBABILITY) {
                    let kind = if rng.random_bool(0.5) {
                        PowerUpKind::Enlarge
                    } else {
                        PowerUpKind::MultiBall
                    };
                    dropped.push(PowerUp::new(brick.rect.center(), kind));
                }
            }
        }
        if struck {
            ball.vel.y = -ball.vel.y;
        }
    }
    state.bricks.retain(|b| !b.is_destroyed());
    state.powerups.extend(dropped);

    // Power-up collection: everything touching the paddle this frame is
    // consumed, then the effects apply in pickup order.
    let mut collected: Vec<PowerUpKind> = Vec::new();
    state.powerups.retain(|p| {
        if p.rect.intersects(&paddle_rect) {
            collected.push(p.kind);
            false
        } else {
            true
        }
    });
    for kind in collected {
        match kind {
            PowerUpKind::Enlarge => state.paddle.enlarge(),
            PowerUpKind::MultiBall => {
                let launch = Vec2::new(
                    state.paddle.rect.center().x,
                    state.paddle.rect.top() - MULTI_BALL_SPAWN_OFFSET,
                );
                for _ in 0..MULTI_BALL_COUNT {
                    state.spawn_ball(launch, rng);
                }
            }
        }
    }

    // Lost balls leave play; losing the last one ends the run.
    state.balls.retain(|b| !b.is_lost());
    if state.balls.is_empty() {
        log::info!("Game Over");
        state.phase = GamePhase::GameOver;
        return;
    }

    // A cleared field regenerates immediately, in the same frame, so the
    // next render already shows the new level.
    if state.bricks.is_empty() {
        log::info!("Level Complete!");
        state.level += 1;
        state.bricks = generate_level(state.level, rng);
    }
}

/// Build the brick field for `level`.
///
/// The row count is re-rolled on every call; columns always fill the screen
/// width left to right. Deeper levels hand out more hit points.
pub fn generate_level(level: u32, rng: &mut Pcg32) -> Vec<Brick> {
    let rows = rng.random_range(MIN_BRICK_ROWS..=MAX_BRICK_ROWS);
    let cols = (SCREEN_WIDTH / (BRICK_WIDTH + BRICK_GAP)) as u32;
    let hits = 1 + level / 2;

    let mut bricks = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = col as f32 * (BRICK_WIDTH + BRICK_GAP);
            let y = row as f32 * (BRICK_HEIGHT + BRICK_GAP) + BRICK_TOP_MARGIN;
            bricks.push(Brick::new(x, y, hits));
        }
    }
    log::info!("Level {}: {} rows x {} cols, {} hp each", level, rows, cols, hits);
    bricks
}

/// Demo-mode paddle driver: chase the ball closest to the bottom edge, or
/// drift toward the nearest falling power-up while every ball is climbing.
fn autopilot(state: &GameState) -> (bool, bool) {
    let threat = state
        .balls
        .iter()
        .max_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal));

    let paddle_center = state.paddle.rect.center().x;
    let all_climbing = state.balls.iter().all(|b| b.vel.y < 0.0);

    let target = if all_climbing {
        state
            .powerups
            .iter()
            .min_by(|a, b| {
                let da = (a.rect.center().x - paddle_center).abs();
                let db = (b.rect.center().x - paddle_center).abs();
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            })
            .map(|p| p.rect.center().x)
            .or(threat.map(|b| b.pos.x))
    } else {
        threat.map(|b| b.pos.x)
    };

    match target {
        // Deadband one paddle-step wide so the tracker doesn't oscillate.
        Some(x) if x < paddle_center - state.paddle.speed => (true, false),
        Some(x) if x > paddle_center + state.paddle.speed => (false, true),
        _ => (false, false),
    }
}
