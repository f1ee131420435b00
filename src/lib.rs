//! Brickout - a paddle, ball and brick arcade game
//!
//! Core modules:
//! - `sim`: Per-tick simulation (entities, movement, collisions, lifecycle)
//! - `renderer`: Drawing seam for whatever surface hosts the game
//! - `audio`: Effect playback seam driven by simulation events
//! - `settings`: Data-driven configuration and presets

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{BallSize, GameConfig, PaddleSize, Resolution};

/// Game configuration constants
pub mod consts {
    /// Score awarded for each destroyed brick
    pub const BRICK_SCORE: u64 = 100;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 100.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_HEALTH: i32 = 1;

    /// Level 1 layout: 5 rows x 2 columns starting at the horizontal center
    pub const LEVEL_ROWS: usize = 5;
    pub const LEVEL_COLUMNS: usize = 2;
    pub const LEVEL_TOP: f32 = 100.0;
    pub const LEVEL_COLUMN_SPACING: f32 = 110.0;
    pub const LEVEL_ROW_SPACING: f32 = 50.0;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 5.0;
    pub const BALL_DAMAGE: i32 = 1;

    /// Paddle defaults (pixels per tick)
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Paddle height is width / PADDLE_ASPECT
    pub const PADDLE_ASPECT: f32 = 5.0;

    /// Starting lives
    pub const START_LIVES: u8 = 3;

    /// Gap left between a snapped entity and the face it bounced off
    pub const COLLISION_INSET: f32 = 1.0;

    /// Number of round-robin channels per sound effect
    pub const AUDIO_CHANNELS: usize = 4;
}

/// Format a value as lowercase base-36 (used for short entity labels)
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::with_capacity(13);
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }
}
