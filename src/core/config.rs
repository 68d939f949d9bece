//! Game configuration loaded from ~/.skyhop/config.json.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::constants::{CONFIG_FILE, DEFAULT_GRAVITY_Y, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::utils::persistence::{load_json_or_default, save_json};

/// A viewport dimension. Hand-edited configs may carry `"600"` instead of
/// `600`, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl Dimension {
    /// Normalize to whole pixels.
    ///
    /// Text is read like an integer prefix: leading whitespace and an optional
    /// sign, then digits up to the first non-digit (`"600px"` is 600).
    pub fn resolve(&self) -> io::Result<i32> {
        match self {
            Dimension::Number(n) if n.is_finite() => Ok(n.trunc() as i32),
            Dimension::Number(n) => Err(invalid_dimension(n)),
            Dimension::Text(s) => parse_int_prefix(s).ok_or_else(|| invalid_dimension(s)),
        }
    }
}

impl From<i32> for Dimension {
    fn from(n: i32) -> Self {
        Dimension::Number(n as f64)
    }
}

fn invalid_dimension(value: impl fmt::Display) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("viewport dimension is not a number: {}", value),
    )
}

fn parse_int_prefix(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let value: i32 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Resolved viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn center_width(&self) -> f64 {
        self.width as f64 / 2.0
    }

    pub fn center_height(&self) -> f64 {
        self.height as f64 / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: Dimension,
    pub height: Dimension,
    /// Downward acceleration, pixels per second squared.
    pub gravity_y: f64,
    /// Fixed RNG seed; a fresh one is drawn per run when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.into(),
            height: DEFAULT_HEIGHT.into(),
            gravity_y: DEFAULT_GRAVITY_Y,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load from ~/.skyhop/config.json, falling back to defaults.
    pub fn load() -> Self {
        load_json_or_default(CONFIG_FILE)
    }

    /// Write to ~/.skyhop/config.json, returning the path written.
    pub fn save(&self) -> io::Result<PathBuf> {
        save_json(CONFIG_FILE, self)
    }

    pub fn viewport(&self) -> io::Result<Viewport> {
        Ok(Viewport {
            width: self.width.resolve()?,
            height: self.height.resolve()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let viewport = GameConfig::default().viewport().unwrap();
        assert_eq!(viewport, Viewport::default());
        assert_eq!(viewport.center_width(), 300.0);
        assert_eq!(viewport.center_height(), 150.0);
    }

    #[test]
    fn test_numeric_strings_resolve() {
        assert_eq!(Dimension::Text("800".into()).resolve().unwrap(), 800);
        assert_eq!(Dimension::Text("  480px".into()).resolve().unwrap(), 480);
        assert_eq!(Dimension::Text("-5".into()).resolve().unwrap(), -5);
        assert_eq!(Dimension::Number(600.9).resolve().unwrap(), 600);
    }

    #[test]
    fn test_non_numeric_dimension_is_invalid_data() {
        let err = Dimension::Text("wide".into()).resolve().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(Dimension::Text(String::new()).resolve().is_err());
        assert!(Dimension::Number(f64::NAN).resolve().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"width": "800"}"#).unwrap();
        assert_eq!(config.width, Dimension::Text("800".into()));
        assert_eq!(config.height, Dimension::Number(300.0));
        assert_eq!(config.gravity_y, 350.0);
        assert_eq!(config.seed, None);

        let viewport = config.viewport().unwrap();
        assert_eq!(viewport.width, 800);
        assert_eq!(viewport.center_width(), 400.0);
    }
}
