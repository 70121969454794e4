//! Game state and core simulation types

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Start,
    /// Active round
    Playing,
    /// Round ended, final frame frozen until confirm
    GameOver,
}

/// Things that happened during a tick that the driver reacts to (audio, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round began
    RoundStarted,
    /// The player touched an obstacle; carries the final score
    PlayerHit { score: u64 },
    /// The session best went up
    NewHighScore { score: u64 },
}

/// Complete game state
///
/// Owned by the driver for the lifetime of the page. Obstacles are not part
/// of it; they are rebuilt from `round_y` whenever they are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Horizontal center of the player circle
    pub player_x: f64,
    /// Left movement key currently down
    pub left_held: bool,
    /// Right movement key currently down
    pub right_held: bool,
    /// Milliseconds survived in the current round
    pub round_time: f64,
    /// Distance the obstacle field has scrolled in the current round
    pub round_y: f64,
    /// Best score this session
    pub high_score: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Start,
            player_x: GAME_SIZE / 2.0,
            left_held: false,
            right_held: false,
            round_time: 0.0,
            round_y: 0.0,
            high_score: 0,
        }
    }

    /// Enter `Playing` with a fresh round. Hold flags and the high score carry over.
    pub fn begin_round(&mut self) {
        self.phase = GamePhase::Playing;
        self.round_time = 0.0;
        self.round_y = 0.0;
        self.player_x = GAME_SIZE / 2.0;
    }

    /// Player center in field coordinates
    pub fn player_pos(&self) -> DVec2 {
        DVec2::new(self.player_x, PLAYER_HEIGHT)
    }

    /// Keep the player fully inside the field
    pub fn clamp_player(&mut self) {
        self.player_x = self.player_x.clamp(CIRCLE_RADIUS, GAME_SIZE - CIRCLE_RADIUS);
    }

    /// Whether a confirm press would start a round
    pub fn accepts_confirm(&self) -> bool {
        matches!(self.phase, GamePhase::Start | GamePhase::GameOver)
    }
}
