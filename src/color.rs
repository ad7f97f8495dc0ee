//! SolidColor: the parsed form of a color string, used only for drawing.
//!
//! Color strings travel through the crate unvalidated. The picker widget and
//! the swatch trigger parse them here when they need actual channel values;
//! anything that does not parse is simply not drawn.

use floem::peniko::Color;

use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl SolidColor {
    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex color string: optional `#`, then 3, 6, or 8 hex digits.
    ///
    /// Surrounding whitespace is ignored. 8 digits are read as RRGGBBAA.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize, width: usize| -> Option<u8> {
            let v = u8::from_str_radix(digits.get(i * width..(i + 1) * width)?, 16).ok()?;
            Some(if width == 1 { v * 17 } else { v })
        };
        match digits.len() {
            3 => Some(Self::from_rgba8(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?, 255)),
            6 => Some(Self::from_rgba8(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?, 255)),
            8 => Some(Self::from_rgba8(
                channel(0, 2)?,
                channel(1, 2)?,
                channel(2, 2)?,
                channel(3, 2)?,
            )),
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, uppercase. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// True when both colors format to the same `#RRGGBB`.
    pub fn same_rgb(&self, other: &SolidColor) -> bool {
        self.to_rgb() == other.to_rgb()
    }

    /// Create from HSB/HSV values (all 0.0–1.0), fully opaque.
    pub fn from_hsb(h: f64, s: f64, b: f64) -> Self {
        let (r, g, bl) = math::hsb_to_rgb(h, s, b);
        Self { r, g, b: bl, a: 1.0 }
    }

    /// Convert to HSB (all 0.0–1.0). Returns (h, s, b).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        math::rgb_to_hsb(self.r, self.g, self.b)
    }

    /// The renderer's color type.
    pub fn to_color(&self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}

/// Parse `value` into a paintable color, or transparent when it doesn't parse.
pub fn paint_color(value: &str) -> Color {
    SolidColor::from_hex(value)
        .map(|c| c.to_color())
        .unwrap_or(Color::TRANSPARENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_hex_lengths() {
        assert_eq!(SolidColor::from_hex("#58E1BE").unwrap().to_rgb(), (0x58, 0xE1, 0xBE));
        assert_eq!(SolidColor::from_hex("fff").unwrap().to_rgb(), (255, 255, 255));
        let translucent = SolidColor::from_hex("#11223380").unwrap();
        assert_eq!(translucent.to_rgb(), (0x11, 0x22, 0x33));
        assert!((translucent.a() - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_garbage() {
        for s in ["", "#", "#12", "#12345", "blue", "#GGGGGG", "#1234567"] {
            assert!(SolidColor::from_hex(s).is_none(), "{s:?} should not parse");
        }
    }

    #[test]
    fn formats_uppercase_with_hash() {
        assert_eq!(SolidColor::from_hex("#58e1be").unwrap().to_hex(), "#58E1BE");
        assert_eq!(SolidColor::from_rgb(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn hsb_matches_rgb() {
        let c = SolidColor::from_hsb(0.0, 1.0, 1.0);
        assert_eq!(c.to_hex(), "#FF0000");
        let (h, s, b) = SolidColor::from_rgb(0, 0, 255).to_hsb();
        assert!((h - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!((s, b), (1.0, 1.0));
    }

    #[test]
    fn unparseable_paints_transparent() {
        assert_eq!(paint_color("not a color"), Color::TRANSPARENT);
        assert_eq!(paint_color("#FFFFFF"), Color::rgba(1.0, 1.0, 1.0, 1.0));
    }
}
