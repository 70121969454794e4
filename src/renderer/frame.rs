//! Surface-independent draw command lists
//!
//! A [`Frame`] is the ordered list of primitives for one animation frame. It is
//! built from a [`Scene`] and can be replayed against any [`Surface`].

use glam::DVec2;

use super::surface::Surface;
use crate::consts::*;
use crate::sim::tick::Scene;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for vertex colors
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// CSS hex notation (`#rrggbb`)
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Scene palette
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::BLACK;
    pub const PLAYER: Color = Color::RED;
    pub const OBSTACLE: Color = Color::BLUE;
    pub const TEXT: Color = Color::WHITE;
}

/// Horizontal anchor of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// HUD readouts hang from their anchor
    Top,
    /// Message lines sit on their anchor
    Alphabetic,
}

/// A single drawing primitive in field coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: DVec2,
        size: DVec2,
        color: Color,
    },
    FillCircle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    Text {
        text: String,
        pos: DVec2,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Replay every command against `surface`, in order
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::FillRect {
                    origin,
                    size,
                    color,
                } => surface.fill_rect(*origin, *size, *color),
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => surface.fill_circle(*center, *radius, *color),
                DrawCommand::Text {
                    text,
                    pos,
                    align,
                    baseline,
                    color,
                } => surface.fill_text(text, *pos, *align, *baseline, *color),
            }
        }
    }

    fn background(&mut self) {
        self.push(DrawCommand::FillRect {
            origin: DVec2::ZERO,
            size: DVec2::splat(GAME_SIZE),
            color: palette::BACKGROUND,
        });
    }

    fn player(&mut self, x: f64) {
        self.push(DrawCommand::FillCircle {
            center: DVec2::new(x, PLAYER_HEIGHT),
            radius: CIRCLE_RADIUS,
            color: palette::PLAYER,
        });
    }

    fn obstacles(&mut self, obstacles: &[DVec2]) {
        for &center in obstacles {
            self.push(DrawCommand::FillCircle {
                center,
                radius: CIRCLE_RADIUS,
                color: palette::OBSTACLE,
            });
        }
    }

    fn text(&mut self, text: String, pos: DVec2, align: TextAlign, baseline: TextBaseline) {
        self.push(DrawCommand::Text {
            text,
            pos,
            align,
            baseline,
            color: palette::TEXT,
        });
    }

    /// Centered message block; line 1 sits 60px above the field center
    fn message_lines(&mut self, lines: &[String]) {
        for (i, line) in lines.iter().enumerate() {
            let y = GAME_SIZE / 2.0 + LINE_SPACING * (i as f64 - 1.0) - 60.0;
            self.text(
                line.clone(),
                DVec2::new(GAME_SIZE / 2.0, y),
                TextAlign::Center,
                TextBaseline::Alphabetic,
            );
        }
    }
}

/// Build the frame for a scene
pub fn compose(scene: &Scene) -> Frame {
    let mut frame = Frame::new();
    frame.background();

    match scene {
        Scene::Title => {
            frame.message_lines(&["< and > to move".to_string(), "space to start".to_string()]);
        }
        Scene::Round {
            player_x,
            obstacles,
            score,
            multiplier,
        } => {
            frame.player(*player_x);
            frame.obstacles(obstacles);
            frame.text(
                format!("{} pts", score),
                DVec2::splat(TEXT_MARGIN),
                TextAlign::Left,
                TextBaseline::Top,
            );
            frame.text(
                format!("{:.2}x", multiplier),
                DVec2::new(GAME_SIZE / 2.0, TEXT_MARGIN),
                TextAlign::Center,
                TextBaseline::Top,
            );
        }
        Scene::GameOver {
            player_x,
            obstacles,
            score,
            high_score,
        } => {
            frame.obstacles(obstacles);
            frame.player(*player_x);
            frame.message_lines(&[
                "game over".to_string(),
                format!("score: {}", score),
                format!("high score: {}", high_score),
                "space to restart".to_string(),
            ]);
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::RecordingSurface;

    fn texts(frame: &Frame) -> Vec<(&str, DVec2, TextAlign)> {
        frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text {
                    text, pos, align, ..
                } => Some((text.as_str(), *pos, *align)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_title_frame() {
        let frame = compose(&Scene::Title);

        assert_eq!(
            frame.commands[0],
            DrawCommand::FillRect {
                origin: DVec2::ZERO,
                size: DVec2::splat(GAME_SIZE),
                color: Color::BLACK,
            }
        );
        assert_eq!(
            texts(&frame),
            vec![
                ("< and > to move", DVec2::new(200.0, 100.0), TextAlign::Center),
                ("space to start", DVec2::new(200.0, 140.0), TextAlign::Center),
            ]
        );
    }

    #[test]
    fn test_round_frame_layout() {
        let obstacles = vec![DVec2::new(30.0, 40.0), DVec2::new(300.0, 200.0)];
        let frame = compose(&Scene::Round {
            player_x: 123.0,
            obstacles: obstacles.clone(),
            score: 7,
            multiplier: 1.23456,
        });

        // background, player, 2 obstacles, 2 HUD texts
        assert_eq!(frame.commands.len(), 6);
        assert_eq!(
            frame.commands[1],
            DrawCommand::FillCircle {
                center: DVec2::new(123.0, PLAYER_HEIGHT),
                radius: CIRCLE_RADIUS,
                color: Color::RED,
            }
        );
        assert_eq!(
            frame.commands[2],
            DrawCommand::FillCircle {
                center: obstacles[0],
                radius: CIRCLE_RADIUS,
                color: Color::BLUE,
            }
        );
        assert_eq!(
            texts(&frame),
            vec![
                ("7 pts", DVec2::new(5.0, 5.0), TextAlign::Left),
                ("1.23x", DVec2::new(200.0, 5.0), TextAlign::Center),
            ]
        );
    }

    #[test]
    fn test_game_over_frame_draws_player_last() {
        let frame = compose(&Scene::GameOver {
            player_x: 50.0,
            obstacles: vec![DVec2::new(1.0, 2.0)],
            score: 12,
            high_score: 30,
        });

        assert!(matches!(
            frame.commands[1],
            DrawCommand::FillCircle { color: Color::BLUE, .. }
        ));
        assert!(matches!(
            frame.commands[2],
            DrawCommand::FillCircle { color: Color::RED, .. }
        ));
        let lines: Vec<&str> = texts(&frame).into_iter().map(|t| t.0).collect();
        assert_eq!(
            lines,
            vec!["game over", "score: 12", "high score: 30", "space to restart"]
        );
        assert_eq!(texts(&frame)[3].1, DVec2::new(200.0, 220.0));
    }

    #[test]
    fn test_draw_replays_in_order() {
        let frame = compose(&Scene::Round {
            player_x: 200.0,
            obstacles: vec![DVec2::new(10.0, 10.0)],
            score: 0,
            multiplier: 1.0,
        });
        let mut surface = RecordingSurface::default();
        frame.draw(&mut surface);
        assert_eq!(surface.commands, frame.commands);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::RED.to_css(), "#ff0000");
        assert_eq!(Color::rgb(1, 171, 255).to_css(), "#01abff");
        assert_eq!(Color::BLUE.to_rgba(), [0.0, 0.0, 1.0, 1.0]);
    }
}
