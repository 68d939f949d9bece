use std::ops::RangeInclusive;

// Viewport
pub const DEFAULT_WIDTH: i32 = 600;
pub const DEFAULT_HEIGHT: i32 = 300;
pub const DEFAULT_GRAVITY_Y: f64 = 350.0;
pub const SKY_COLOR: u32 = 0x87ceeb;

// Frame timing
pub const FRAME_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_DT_MS: u64 = 100;

// Entity motion: everything scrolls right to left
pub const SPAWN_X: f64 = 800.0;
pub const ENTRY_X: f64 = 820.0;
pub const EXIT_X: f64 = -100.0;
pub const BASE_TRAVEL_MS: f64 = 2000.0;

// Clouds
pub const CLOUD_WIDTH: f64 = 98.0;
pub const CLOUD_HEIGHT: f64 = 32.0;
pub const CLOUD_COLOR: u32 = 0xffffff;
pub const CLOUD_Y_RANGE: RangeInclusive<u32> = 0..=100;
pub const CLOUD_SCALE_DIVISOR: RangeInclusive<u32> = 1..=3;

// Obstacles
pub const OBSTACLE_SIZE: f64 = 32.0;
pub const OBSTACLE_COLOR: u32 = 0xff0000;

// Coins
pub const COIN_SIZE: f64 = 32.0;
pub const COIN_TEXTURE: &str = "coin";
pub const COIN_ANIMATION: &str = "coin";
pub const COIN_FIRST_FRAME: u32 = 0;
pub const COIN_LAST_FRAME: u32 = 7;
pub const COIN_FRAME_RATE: f64 = 8.0;

/// Hazards and coins spawn this far above the floor.
pub const FLOOR_OFFSET_RANGE: RangeInclusive<u32> = 32..=128;

// Generator timing
pub const WARMUP_MS: u64 = 2000;
pub const CLOUD_DELAY_MS: RangeInclusive<u64> = 2000..=3000;
pub const OBSTACLE_DELAY_MS: RangeInclusive<u64> = 1500..=2500;
pub const COIN_DELAY_MS: RangeInclusive<u64> = 500..=1500;

// Player
pub const PLAYER_SIZE: f64 = 32.0;
pub const PLAYER_COLOR: u32 = 0x00ff00;
pub const PLAYER_OFFSET_X: f64 = 100.0; // left of center
pub const PLAYER_OFFSET_Y: f64 = 200.0; // above the floor
pub const PLAYER_DRAG_Y: f64 = 10.0;
pub const PLAYER_MASS: f64 = 10.0;
pub const PLAYER_HEALTH: u32 = 10;
pub const JUMP_VELOCITY: f64 = -300.0;
pub const JUMP_SPIN_MS: f64 = 1000.0;
pub const JUMP_SPIN_DEGREES: f64 = 360.0;

// Score
pub const SCORE_TICK_MS: u64 = 100;
pub const COIN_BONUS: u64 = 1000;
pub const SCORE_KEY: &str = "score";

// Labels
pub const SCORE_LABEL_Y: f64 = 10.0;
pub const SCORE_LABEL_SIZE: u16 = 20;
pub const FINAL_SCORE_Y: f64 = 50.0;
pub const FINAL_SCORE_SIZE: u16 = 25;
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const GAME_OVER_SIZE: u16 = 45;
pub const RESTART_TEXT: &str = "Press SPACE or click to restart!";
pub const RESTART_Y: f64 = 250.0;
pub const RESTART_SIZE: u16 = 15;

// Files under ~/.skyhop
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "skyhop.log";
