//! CSS color values read back from computed styles.
//!
//! The icon screens compare an uploaded image's border color against the
//! color submitted through the color input, so the suite needs to parse
//! whatever form the browser reports (`rgb()`, `rgba()`, or hex).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{E2eError, E2eResult};

/// An RGBA color parsed from a CSS color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha as permille (1000 = fully opaque), kept integral so the type
    /// stays `Eq` for assertions
    pub alpha_permille: u16,
}

fn rgb_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9.]+)\s*)?\)$")
            .unwrap()
    })
}

impl Color {
    /// Fully opaque color from channel values
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha_permille: 1000,
        }
    }

    /// Parse a CSS color string: `#rgb`, `#rrggbb`, `rgb(r, g, b)` or
    /// `rgba(r, g, b, a)`.
    pub fn parse(value: &str) -> E2eResult<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex, value);
        }
        let captures = rgb_pattern().captures(value).ok_or_else(|| {
            E2eError::illegal_state(format!("unparseable CSS color: {value:?}"))
        })?;
        let channel = |i: usize| -> E2eResult<u8> {
            captures[i]
                .parse::<u16>()
                .ok()
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(|| {
                    E2eError::illegal_state(format!("channel out of range in {value:?}"))
                })
        };
        let alpha_permille = match captures.get(4) {
            Some(a) => {
                let alpha: f64 = a.as_str().parse().map_err(|_| {
                    E2eError::illegal_state(format!("bad alpha in {value:?}"))
                })?;
                (alpha.clamp(0.0, 1.0) * 1000.0).round() as u16
            }
            None => 1000,
        };
        Ok(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
            alpha_permille,
        })
    }

    fn parse_hex(hex: &str, original: &str) -> E2eResult<Self> {
        if !hex.is_ascii() {
            return Err(E2eError::illegal_state(format!(
                "unparseable CSS color: {original:?}"
            )));
        }
        let expand = |c: u8| (c << 4) | c;
        let digit = |range: std::ops::Range<usize>| -> E2eResult<u8> {
            u8::from_str_radix(&hex[range], 16).map_err(|_| {
                E2eError::illegal_state(format!("unparseable CSS color: {original:?}"))
            })
        };
        match hex.len() {
            3 => Ok(Self::rgb(
                expand(digit(0..1)?),
                expand(digit(1..2)?),
                expand(digit(2..3)?),
            )),
            6 => Ok(Self::rgb(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            _ => Err(E2eError::illegal_state(format!(
                "unparseable CSS color: {original:?}"
            ))),
        }
    }

    /// `#rrggbb` form, the shape the color input expects for injection
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(Color::parse("rgb(255, 0, 16)").unwrap(), Color::rgb(255, 0, 16));
        let semi = Color::parse("rgba(110, 22, 0, 0.5)").unwrap();
        assert_eq!((semi.r, semi.g, semi.b), (110, 22, 0));
        assert_eq!(semi.alpha_permille, 500);
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse("#dd3333").unwrap(), Color::rgb(0xdd, 0x33, 0x33));
        assert_eq!(Color::parse("#d33").unwrap(), Color::rgb(0xdd, 0x33, 0x33));
    }

    #[test]
    fn hex_round_trips() {
        let color = Color::parse("rgba(221, 51, 51, 1)").unwrap();
        assert_eq!(color.hex(), "#dd3333");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::parse("bordeaux").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("rgb(300, 0, 0)").is_err());
        assert!(Color::parse("#€€€").is_err());
    }

    #[test]
    fn computed_style_comparison() {
        // What the browser reports for a #dd3333 border.
        let reported = Color::parse("rgb(221, 51, 51)").unwrap();
        let submitted = Color::parse("#dd3333").unwrap();
        assert_eq!(reported, submitted);
    }
}
