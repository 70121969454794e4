//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time comes in as an explicit delta
//! - Obstacles are derived from the scroll offset, never stored
//! - No rendering backends, audio or platform dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, first_hit};
pub use field::{build_field, pseudo_random};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, TickOutcome, calc_mult, calc_score, tick};
