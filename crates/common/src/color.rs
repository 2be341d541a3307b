use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 6 or 8 hex digits, got {len}: {input:?}")]
    BadLength { input: String, len: usize },
    #[error("invalid hex digit in color {0:?}")]
    BadDigit(String),
}

/// An sRGB color with alpha, each channel in `0.0..=1.0`.
///
/// Serialized as a `#RRGGBB` (or `#RRGGBBAA`) string so scene configs can be
/// written the way designers write colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(input.to_string()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::BadLength {
                input: input.to_string(),
                len: digits.len(),
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(input.to_string()));
        }

        let channel = |i: usize| -> Result<f32, ColorError> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorError::BadDigit(input.to_string()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 1.0 },
        })
    }

    pub fn to_hex(&self) -> String {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                q(self.r),
                q(self.g),
                q(self.b),
                q(self.a)
            )
        } else {
            format!("#{:02X}{:02X}{:02X}", q(self.r), q(self.g), q(self.b))
        }
    }

    /// Convert to linear space for shading. Alpha is left untouched.
    pub fn to_linear(&self) -> Color {
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Color {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steppe_ground_color() {
        let c = Color::from_hex("#8B7355").unwrap();
        assert!((c.r - 139.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 115.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 85.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.to_hex(), "#8B7355");
    }

    #[test]
    fn parses_alpha_and_lowercase() {
        let c = Color::from_hex("#e8dcc480").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.to_hex(), "#E8DCC480");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            Color::from_hex("8B7355"),
            Err(ColorError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex("#8B73"),
            Err(ColorError::BadLength { len: 4, .. })
        ));
        assert!(matches!(
            Color::from_hex("#8B73ZZ"),
            Err(ColorError::BadDigit(_))
        ));
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), Color::BLACK);
        let white = Color::WHITE.to_linear();
        assert!((white.r - 1.0).abs() < 1e-6);
        let mid = Color::rgb(0.5, 0.5, 0.5).to_linear();
        assert!(mid.r < 0.5 && mid.r > 0.2);
    }

    #[test]
    fn serializes_as_hex_string() {
        let c = Color::from_hex("#654321").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#654321\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_hex(), "#654321");
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
