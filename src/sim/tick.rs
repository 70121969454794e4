//! Per-frame simulation tick
//!
//! Advances the game state by a measured time delta and describes the scene
//! to draw for that frame.

use glam::DVec2;

use super::collision::first_hit;
use super::field::build_field;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// One-shot inputs for a single tick
///
/// Held movement keys live on [`GameState`]; only edge-triggered input goes here.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start / restart a round (space)
    pub confirm: bool,
}

/// What to draw for a frame, decoupled from any drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    /// Title and instructions
    Title,
    /// Live round with HUD
    Round {
        player_x: f64,
        obstacles: Vec<DVec2>,
        score: u64,
        multiplier: f64,
    },
    /// Frozen final frame with the round summary
    GameOver {
        player_x: f64,
        obstacles: Vec<DVec2>,
        score: u64,
        high_score: u64,
    },
}

/// Result of a tick: the scene for this frame plus anything the driver must react to
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub scene: Scene,
    pub events: Vec<GameEvent>,
}

/// Whole seconds survived
#[inline]
pub fn calc_score(round_time: f64) -> u64 {
    (round_time / 1000.0).floor() as u64
}

/// Speed multiplier: 1x at the start of a round, approaching 2x
#[inline]
pub fn calc_mult(round_time: f64) -> f64 {
    2.0 - 1.0 / (1.0 + round_time / MULT_RAMP_MS)
}

/// Advance the game by `dt` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) -> TickOutcome {
    let mut events = Vec::new();

    // The transition frame shows the fresh round without advancing it
    if input.confirm && state.accepts_confirm() {
        state.begin_round();
        events.push(GameEvent::RoundStarted);
        let scene = Scene::Round {
            player_x: state.player_x,
            obstacles: build_field(state.round_y),
            score: calc_score(state.round_time),
            multiplier: calc_mult(state.round_time),
        };
        return TickOutcome { scene, events };
    }

    let scene = match state.phase {
        GamePhase::Start => start_tick(state),
        GamePhase::Playing => playing_tick(state, dt, &mut events),
        GamePhase::GameOver => game_over_tick(state),
    };

    TickOutcome { scene, events }
}

fn start_tick(_state: &GameState) -> Scene {
    Scene::Title
}

fn game_over_tick(state: &GameState) -> Scene {
    Scene::GameOver {
        player_x: state.player_x,
        obstacles: build_field(state.round_y),
        score: calc_score(state.round_time),
        high_score: state.high_score,
    }
}

fn playing_tick(state: &mut GameState, dt: f64, events: &mut Vec<GameEvent>) -> Scene {
    state.round_time += dt;

    let score = calc_score(state.round_time);
    if score > state.high_score {
        state.high_score = score;
        events.push(GameEvent::NewHighScore { score });
    }

    let multiplier = calc_mult(state.round_time);
    state.round_y += dt * ENEMY_SPEED * multiplier;

    // Both keys held cancel out
    if state.left_held {
        state.player_x -= dt * PLAYER_SPEED * multiplier;
    }
    if state.right_held {
        state.player_x += dt * PLAYER_SPEED * multiplier;
    }
    state.clamp_player();

    let obstacles = build_field(state.round_y);

    if first_hit(state.player_pos(), &obstacles, CIRCLE_RADIUS).is_some() {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::PlayerHit { score });
        return game_over_tick(state);
    }

    Scene::Round {
        player_x: state.player_x,
        obstacles,
        score,
        multiplier,
    }
}
