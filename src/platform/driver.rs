//! Game driver
//!
//! Owns the single [`GameState`] plus everything that feeds it: the frame
//! clock, pending one-shot input and the audio cue player. Key handlers and
//! the animation callback all run on the same thread, so a key event always
//! lands before the next frame reads it.

use glam::DVec2;

use super::clock::{FpsCounter, FrameClock};
use super::input::Key;
use crate::audio::{CuePlayer, SoundEffect};
use crate::consts::{GAME_SIZE, TEXT_MARGIN};
use crate::renderer::{DrawCommand, Frame, Surface, TextAlign, TextBaseline, compose, frame::palette};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Game instance holding all state
pub struct Game<A: CuePlayer> {
    state: GameState,
    input: TickInput,
    clock: FrameClock,
    audio: A,
    fps: FpsCounter,
    show_fps: bool,
}

impl<A: CuePlayer> Game<A> {
    /// `start_time` is the scheduler timestamp the first frame's delta counts from
    pub fn new(audio: A, settings: &Settings, start_time: f64) -> Self {
        Self {
            state: GameState::new(),
            input: TickInput::default(),
            clock: FrameClock::new(start_time),
            audio,
            fps: FpsCounter::default(),
            show_fps: settings.show_fps,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Confirm => {
                if self.state.accepts_confirm() {
                    self.input.confirm = true;
                }
            }
            Key::Left => self.state.left_held = true,
            Key::Right => self.state.right_held = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Confirm => {}
            Key::Left => self.state.left_held = false,
            Key::Right => self.state.right_held = false,
        }
    }

    /// Advance one animation frame and return what to draw
    pub fn update(&mut self, timestamp: f64) -> Frame {
        let dt = self.clock.delta(timestamp);
        let outcome = tick(&mut self.state, &self.input, dt);

        // Clear one-shot inputs after processing
        self.input = TickInput::default();

        for event in &outcome.events {
            self.handle_event(*event);
        }

        self.fps.record(timestamp);

        let mut frame = compose(&outcome.scene);
        if self.show_fps {
            frame.push(DrawCommand::Text {
                text: format!("{} fps", self.fps.fps()),
                pos: DVec2::new(GAME_SIZE - TEXT_MARGIN, TEXT_MARGIN),
                align: TextAlign::Right,
                baseline: TextBaseline::Top,
                color: palette::TEXT,
            });
        }
        frame
    }

    /// Advance one frame and draw it straight onto `surface`
    pub fn frame<S: Surface + ?Sized>(&mut self, timestamp: f64, surface: &mut S) {
        let frame = self.update(timestamp);
        frame.draw(surface);
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::RoundStarted => {
                log::info!("Round started (high score {})", self.state.high_score);
                self.audio.play(SoundEffect::RoundStart);
            }
            GameEvent::PlayerHit { score } => {
                log::info!(
                    "Game over: score {} (high score {})",
                    score,
                    self.state.high_score
                );
                self.audio.play(SoundEffect::Death);
            }
            GameEvent::NewHighScore { score } => {
                log::debug!("New high score: {}", score);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CIRCLE_RADIUS;
    use crate::renderer::{Color, RecordingSurface};
    use crate::sim::pseudo_random;
    use std::cell::RefCell;

    /// Records cues instead of playing them
    #[derive(Default)]
    struct RecordingAudio {
        played: RefCell<Vec<SoundEffect>>,
    }

    impl CuePlayer for RecordingAudio {
        fn play(&self, effect: SoundEffect) {
            self.played.borrow_mut().push(effect);
        }
    }

    fn new_game() -> Game<RecordingAudio> {
        Game::new(RecordingAudio::default(), &Settings::default(), 0.0)
    }

    #[test]
    fn test_confirm_then_frame_starts_round() {
        let mut game = new_game();
        let mut surface = RecordingSurface::default();

        game.frame(16.0, &mut surface);
        assert_eq!(game.phase(), GamePhase::Start);
        assert!(surface.texts().any(|t| t == "space to start"));

        game.key_down(Key::Confirm);
        surface.clear();
        game.frame(32.0, &mut surface);

        let state = game.state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.round_time, 0.0);
        assert_eq!(state.round_y, 0.0);
        assert_eq!(state.player_x, GAME_SIZE / 2.0);
        assert_eq!(*game.audio().played.borrow(), vec![SoundEffect::RoundStart]);
        assert_eq!(surface.circle_count(Color::RED), 1);
        assert!(surface.texts().any(|t| t == "0 pts"));
    }

    #[test]
    fn test_confirm_is_one_shot() {
        let mut game = new_game();
        game.key_down(Key::Confirm);
        game.update(16.0);
        game.update(32.0);
        game.update(48.0);
        assert_eq!(game.audio().played.borrow().len(), 1);
        assert_eq!(game.state().round_time, 32.0);
    }

    #[test]
    fn test_movement_keys_set_hold_flags() {
        let mut game = new_game();
        game.key_down(Key::Left);
        game.key_down(Key::Right);
        assert!(game.state().left_held && game.state().right_held);

        game.key_up(Key::Left);
        assert!(!game.state().left_held);
        assert!(game.state().right_held);

        // Releasing confirm changes nothing
        game.key_up(Key::Confirm);
        assert!(game.state().right_held);
    }

    #[test]
    fn test_two_second_round_scores() {
        let mut game = new_game();
        game.key_down(Key::Confirm);
        game.update(0.0);

        let frame = game.update(2000.0);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.state().high_score, 2);

        let mut surface = RecordingSurface::default();
        frame.draw(&mut surface);
        assert!(surface.texts().any(|t| t == "2 pts"));
        assert!(surface.texts().any(|t| t == "1.04x"));
    }

    #[test]
    fn test_crash_plays_death_cue_and_restart() {
        let mut game = new_game();
        game.key_down(Key::Confirm);
        game.update(0.0);

        // Steer into band 2, which sits on the player's row at round start
        game.state.player_x = GAME_SIZE * pseudo_random(2) - CIRCLE_RADIUS;
        let mut surface = RecordingSurface::default();
        game.frame(0.0, &mut surface);

        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(
            *game.audio().played.borrow(),
            vec![SoundEffect::RoundStart, SoundEffect::Death]
        );
        assert!(surface.texts().any(|t| t == "game over"));
        assert!(surface.texts().any(|t| t == "space to restart"));

        // Frozen until confirm
        let frozen = game.state().clone();
        game.update(500.0);
        assert_eq!(*game.state(), frozen);

        game.key_down(Key::Confirm);
        game.update(516.0);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.audio().played.borrow().len(), 3);
    }

    #[test]
    fn test_confirm_ignored_mid_round() {
        let mut game = new_game();
        game.key_down(Key::Confirm);
        game.update(0.0);
        game.key_down(Key::Confirm);
        game.update(100.0);
        assert_eq!(game.state().round_time, 100.0);
        assert_eq!(game.audio().played.borrow().len(), 1);
    }

    #[test]
    fn test_fps_text_when_enabled() {
        let settings = Settings {
            show_fps: true,
            ..Settings::default()
        };
        let mut game = Game::new(RecordingAudio::default(), &settings, 0.0);
        let frame = game.update(16.0);
        assert!(matches!(
            frame.commands.last(),
            Some(DrawCommand::Text { text, align: TextAlign::Right, .. }) if text.ends_with(" fps")
        ));

        let mut plain = new_game();
        let frame = plain.update(16.0);
        assert!(!matches!(
            frame.commands.last(),
            Some(DrawCommand::Text { text, .. }) if text.ends_with(" fps")
        ));
    }
}
