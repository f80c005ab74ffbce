//! Bricker - a Breakout game with stackable brick effects
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision strategies, game state)
//! - `settings`: Grid/seed configuration and audio preferences
//! - `audio`: Sound effect handles and the playback sink

pub mod audio;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundEffect};
pub use settings::{AudioSettings, ConfigError, GameConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Frame cap for the headless demo runner (five minutes of play)
    pub const MAX_DEMO_FRAMES: u64 = 120 * 60 * 5;

    /// Play field dimensions
    pub const FIELD_SIZE: Vec2 = Vec2::new(700.0, 500.0);
    pub const WALL_THICKNESS: f32 = 20.0;
    /// Death zone sits directly below the visible field
    pub const DEATH_ZONE_HEIGHT: f32 = 20.0;

    /// Brick grid defaults
    pub const DEFAULT_BRICKS_PER_ROW: u32 = 8;
    pub const DEFAULT_NUM_ROWS: u32 = 7;
    pub const BRICK_HEIGHT: f32 = 15.0;
    pub const BRICK_SPACING: f32 = 5.0;
    pub const BRICKS_START_Y: f32 = 50.0;

    /// Ball defaults
    pub const BALL_SIZE: Vec2 = Vec2::new(20.0, 20.0);
    pub const BALL_SPEED: f32 = 200.0;
    /// Extra balls are 3/4 of the main ball
    pub const EXTRA_BALL_SIZE: Vec2 = Vec2::new(15.0, 15.0);
    pub const EXTRA_BALL_SPEED: f32 = BALL_SPEED;
    pub const EXTRA_BALLS_PER_HIT: usize = 2;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(100.0, 15.0);
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Distance of the main paddle center from the bottom of the field
    pub const PADDLE_Y_OFFSET: f32 = 30.0;
    /// Ball contacts an extra paddle survives
    pub const EXTRA_PADDLE_MAX_HITS: u32 = 4;

    /// Heart disc (extra life pickup)
    pub const HEART_DISC_SIZE: Vec2 = Vec2::new(20.0, 20.0);
    pub const HEART_DISC_VELOCITY: Vec2 = Vec2::new(0.0, 100.0);

    /// Lives
    pub const INIT_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 4;

    /// Strategy factory thresholds (one roll in [0, 1) per brick)
    pub const BASIC_STRATEGY_PROBABILITY: f64 = 0.5;
    pub const SINGLE_SPECIAL_PROBABILITY: f64 = 0.9;
    pub const DOUBLE_SPECIAL_EFFECTS: usize = 2;
}

/// The four diagonal launch directions for the main ball
pub const DIAGONALS: [Vec2; 4] = [
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, -1.0),
];

/// Velocity with the given angle (radians) and magnitude
#[inline]
pub fn polar_velocity(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos() * speed, angle.sin() * speed)
}
