//! Circle Dodge - A scrolling obstacle-avoidance arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacle field, phases, collisions)
//! - `renderer`: Draw command lists and the WebGPU surface that executes them
//! - `platform`: Frame clock, key mapping and the owning game driver
//! - `audio`: Round start / death cues
//! - `settings`: Player preferences (volume, logging, HUD)

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical width and height of the square play field
    pub const GAME_SIZE: f64 = 400.0;
    /// Radius shared by the player and every obstacle
    pub const CIRCLE_RADIUS: f64 = 10.0;
    /// Vertical position of the player's center
    pub const PLAYER_HEIGHT: f64 = GAME_SIZE - CIRCLE_RADIUS * 2.0;

    /// Obstacle bands across the field height
    pub const OBSTACLE_COUNT: usize = 40;
    /// Vertical distance between consecutive bands
    pub const BAND_SPACING: f64 = GAME_SIZE / OBSTACLE_COUNT as f64;

    /// Horizontal player speed (pixels per millisecond at 1x)
    pub const PLAYER_SPEED: f64 = 0.15;
    /// Scroll speed of the obstacle field (pixels per millisecond at 1x)
    pub const ENEMY_SPEED: f64 = PLAYER_SPEED;
    /// Round time (ms) at which the multiplier reaches 1.5x
    pub const MULT_RAMP_MS: f64 = 50_000.0;

    /// Inset of HUD text from the field edge
    pub const TEXT_MARGIN: f64 = 5.0;
    /// HUD font size in logical pixels
    pub const FONT_SIZE: f64 = 20.0;
    /// Spacing between centered message lines
    pub const LINE_SPACING: f64 = 40.0;
}
