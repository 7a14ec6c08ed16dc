//! Parse and print colors as text.
//!
//! Supported notations:
//! - `#RRGGBB` and `#RGB` hex colors (the hash is optional),
//! - `rgb(r, g, b)` with channels on a 0..=255 scale,
//! - `cmyk(c, m, y, k)` with channels on a 0..=1 scale,
//! - `hls(h, l, s)` with hue in turns and lightness as HSB brightness.
//!
//! Parsing is case-insensitive and surrounding whitespace is trimmed.
//! Arguments may be separated by commas, whitespace or both.

use std::fmt;
use std::str::FromStr;

use crate::color::{Channel, Color, Component, Space};
use crate::error::ParseColorError;
use crate::models::{Channels, Cmyk, Hls, Model, Rgb};
use crate::{Error, RangePolicy};

impl Color {
    /// Parse a color, handling out of range channels according to `policy`.
    ///
    /// ```rust
    /// use tricolor::{Color, RangePolicy};
    /// let red = Color::parse("cmyk(0, 1, 1, 0)", RangePolicy::Reject).unwrap();
    /// assert_eq!(red.to_hex(), "#ff0000");
    /// assert!(Color::parse("rgb(0, 0, 300)", RangePolicy::Reject).is_err());
    /// ```
    pub fn parse(s: &str, policy: RangePolicy) -> Result<Self, Error> {
        let s = s.trim().to_ascii_lowercase();

        if let Some(hex) = s.strip_prefix('#') {
            return Ok(parse_hex(hex)?);
        }

        if let Some((name, args)) = s.split_once('(') {
            let Some(args) = args.strip_suffix(')') else {
                return Err(ParseColorError::UnknownNotation(s.clone()).into());
            };
            let space = name.trim().parse::<Space>()?;
            let values = args
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|arg| !arg.is_empty())
                .map(parse_number)
                .collect::<Result<Vec<_>, _>>()?;

            return match space {
                Space::Rgb => build::<Rgb, 3>(&values, policy),
                Space::Cmyk => build::<Cmyk, 4>(&values, policy),
                Space::Hls => build::<Hls, 3>(&values, policy),
            };
        }

        if matches!(s.len(), 3 | 6) && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Ok(parse_hex(&s)?);
        }

        Err(ParseColorError::UnknownNotation(s).into())
    }

    /// Format the color as `#rrggbb`, rounding each channel.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.rgb().to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

fn parse_number(text: &str) -> Result<Component, ParseColorError> {
    text.parse::<Component>()
        .map_err(|source| ParseColorError::InvalidNumber {
            text: text.to_string(),
            source,
        })
}

fn build<M, const N: usize>(values: &[Component], policy: RangePolicy) -> Result<Color, Error>
where
    M: Model + Channels + From<[Component; N]>,
{
    let array: [Component; N] =
        values
            .try_into()
            .map_err(|_| ParseColorError::WrongArgumentCount {
                space: M::SPACE,
                expected: N,
                actual: values.len(),
            })?;
    Color::try_from_model(M::from(array), policy)
}

fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    if !matches!(hex.len(), 3 | 6) {
        return Err(ParseColorError::InvalidLength);
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex(hex.to_string()));
    }

    let value =
        u32::from_str_radix(hex, 16).map_err(|_| ParseColorError::InvalidHex(hex.to_string()))?;

    let [r, g, b] = if hex.len() == 3 {
        // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF).
        [value >> 8, value >> 4, value].map(|v| (v & 0xF) as u8 * 17)
    } else {
        [value >> 16, value >> 8, value].map(|v| (v & 0xFF) as u8)
    };

    Ok(Color::from_model(Rgb::from_u8(r, g, b)))
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a color, clamping out of range channels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s, RangePolicy::Clamp)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Space {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Space::Rgb),
            "cmyk" => Ok(Space::Cmyk),
            "hls" => Ok(Space::Hls),
            other => Err(ParseColorError::UnknownSpace(other.to_string())),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = ParseColorError;

    /// Parse a channel from its name or first letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Channel::ALL
            .into_iter()
            .find(|channel| {
                let full = channel.name();
                name == full || name == full[..1]
            })
            .or(match name.as_str() {
                "black" => Some(Channel::Key),
                "brightness" | "value" => Some(Channel::Lightness),
                _ => None,
            })
            .ok_or(ParseColorError::UnknownChannel(name))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single channel edit written as `CHANNEL=VALUE`, for example `cyan=0.4`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edit {
    /// The channel to replace.
    pub channel: Channel,
    /// The new value of the channel.
    pub value: Component,
}

impl Edit {
    /// Apply the edit to `color`.
    pub fn apply(&self, color: &Color, policy: RangePolicy) -> Result<Color, Error> {
        color.try_with(self.channel, self.value, policy)
    }
}

impl FromStr for Edit {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((channel, value)) = s.split_once('=') else {
            return Err(ParseColorError::MissingValue(s.to_string()));
        };
        Ok(Edit {
            channel: channel.parse()?,
            value: parse_number(value.trim())?,
        })
    }
}
