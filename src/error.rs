//! Errors returned when a color can not be accepted or parsed.

use std::num::ParseFloatError;

use crate::color::{Component, Space};

/// Errors returned when validating or parsing colors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A channel holds a value outside of its range.
    #[error("{} channel `{channel}` is {value}, expected a value in {min}..={max}", .space.name())]
    OutOfRange {
        /// The model the channel belongs to.
        space: Space,
        /// The name of the channel.
        channel: &'static str,
        /// The rejected value.
        value: Component,
        /// The smallest value of the channel.
        min: Component,
        /// The largest value of the channel.
        max: Component,
    },

    /// A channel holds NaN or an infinite value.
    #[error("{} channel `{channel}` is not a finite number", .space.name())]
    NotFinite {
        /// The model the channel belongs to.
        space: Space,
        /// The name of the channel.
        channel: &'static str,
    },

    /// The text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseColorError),
}

/// Errors returned when parsing colors, spaces or channels from text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#').
    #[error("invalid hex color length (expected 3 or 6 digits)")]
    InvalidLength,

    /// The hex string contains something other than hexadecimal digits.
    #[error("invalid hex digits `{0}`")]
    InvalidHex(String),

    /// The text is neither a hex color nor a known functional notation.
    #[error("unknown color notation `{0}`")]
    UnknownNotation(String),

    /// A functional notation got the wrong number of arguments.
    #[error("{name} expects {expected} arguments, got {actual}", name = .space.name())]
    WrongArgumentCount {
        /// The model of the notation.
        space: Space,
        /// The number of channels of the model.
        expected: usize,
        /// The number of arguments found.
        actual: usize,
    },

    /// An argument of a functional notation is not a number.
    #[error("invalid number `{text}`: {source}")]
    InvalidNumber {
        /// The text of the argument.
        text: String,
        /// The underlying error.
        source: ParseFloatError,
    },

    /// Unknown channel name.
    #[error("unknown channel `{0}`")]
    UnknownChannel(String),

    /// Unknown color space name.
    #[error("unknown color space `{0}`")]
    UnknownSpace(String),

    /// An edit is missing its `=value` part.
    #[error("expected CHANNEL=VALUE, got `{0}`")]
    MissingValue(String),
}
