//! Brick Breaker entry point
//!
//! The simulation is frontend-agnostic; this binary is the headless
//! reference frontend. It seeds the shared RNG, paces the loop at the fixed
//! frame rate, and lets the autopilot hold the paddle. Wire a real renderer
//! to `GameState::sprites` and real key state into `TickInput` to make it
//! playable.

use std::thread;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use brick_breaker::consts::FPS;
use brick_breaker::sim::{GamePhase, GameState, TickInput, generate_level, tick};

fn main() {
    env_logger::init();

    let seed: u64 = rand::rng().random();
    log::info!("Brick Breaker starting (seed {})", seed);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new(&mut rng);
    state.bricks = generate_level(state.level, &mut rng);

    let input = TickInput {
        autopilot: true,
        ..TickInput::default()
    };
    let frame = Duration::from_secs(1) / FPS;
    let mut next_frame = Instant::now() + frame;
    let mut frames: u64 = 0;

    while state.phase == GamePhase::Running {
        tick(&mut state, &input, &mut rng);
        present(&state, frames);
        frames += 1;

        // Time-capped pacing: sleep off the rest of the frame budget, or
        // reset the schedule after a stall.
        match next_frame.checked_duration_since(Instant::now()) {
            Some(wait) => thread::sleep(wait),
            None => next_frame = Instant::now(),
        }
        next_frame += frame;
    }

    log::info!(
        "Run ended: score {} on level {} after {} frames",
        state.score,
        state.level,
        frames
    );
}

/// Stand-in for a renderer: one status line per second instead of pixels.
fn present(state: &GameState, frames: u64) {
    if frames % u64::from(FPS) == 0 {
        log::debug!(
            "score {:>6}  level {}  balls {}  bricks {:>2}  powerups {}",
            state.score,
            state.level,
            state.balls.len(),
            state.bricks.len(),
            state.powerups.len()
        );
    }
}
