//! Small value types shared between config, renderer and app.

use serde::{Deserialize, Serialize};

/// 8-bit sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: 255,
            }),
            8 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Channels as `[r, g, b, a]` in `0.0..=1.0`, still sRGB-encoded.
    pub fn to_unit_rgba(&self) -> [f64; 4] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let c = Color::from_hex("#1a1a1a").unwrap();
        assert_eq!(c, Color::from_rgba(0x1a, 0x1a, 0x1a, 255));
    }

    #[test]
    fn parses_eight_digit_hex_without_hash() {
        let c = Color::from_hex("ff000080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 0, 0, 128));
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(Color::from_hex("#00d4ff").unwrap().to_hex(), "#00d4ff");
        assert_eq!(Color::from_hex("#00d4ff80").unwrap().to_hex(), "#00d4ff80");
    }

    #[test]
    fn unit_rgba_scales_channels() {
        let [r, g, b, a] = Color::from_rgba(255, 0, 51, 255).to_unit_rgba();
        assert!((r - 1.0).abs() < 1e-9);
        assert!(g.abs() < 1e-9);
        assert!((b - 0.2).abs() < 1e-9);
        assert!((a - 1.0).abs() < 1e-9);
    }
}
