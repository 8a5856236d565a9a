use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

/// An RGB colour, sent to Discord as a single packed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks `0xRRGGBB`. Bits above the low 24 are dropped.
    #[must_use]
    pub const fn from_discord(code: u32) -> Self {
        Self {
            r: (code >> 16) as u8,
            g: (code >> 8) as u8,
            b: code as u8,
        }
    }

    #[must_use]
    pub fn to_discord(self) -> u32 {
        let r = u32::from(self.r);
        let g = u32::from(self.g);
        let b = u32::from(self.b);
        (r << 16) | (g << 8) | b
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_discord())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid colour {0:?} (expected decimal, #RRGGBB or 0xRRGGBB)")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"));

        let code: u32 = match hex {
            Some(digits) if digits.len() == 6 => {
                u32::from_str_radix(digits, 16).map_err(|_| err())?
            }
            Some(_) => return Err(err()),
            None => s.parse().map_err(|_| err())?,
        };

        if code > 0xFF_FFFF {
            return Err(err());
        }
        Ok(Self::from_discord(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_rgb() {
        assert_eq!(Color::new(255, 0, 0).to_discord(), 16_711_680);
        assert_eq!(Color::new(0x12, 0x34, 0x56).to_discord(), 0x12_3456);
        assert_eq!(Color::from_discord(0x12_3456), Color::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!("16711680".parse(), Ok(Color::new(255, 0, 0)));
        assert_eq!("#00ff00".parse(), Ok(Color::new(0, 255, 0)));
        assert_eq!("0x0000FF".parse(), Ok(Color::new(0, 0, 255)));
    }

    #[test]
    fn rejects_garbage() {
        assert!("#fff".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
        assert!("16777216".parse::<Color>().is_err());
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::new(228, 24, 17).to_string(), "#E41811");
    }
}
