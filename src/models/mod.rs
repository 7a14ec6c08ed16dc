//! Models are structs that represent a color in one of the supported color
//! models. All conversions go through [`Rgb`], the canonical model.
//!
//! ```rust
//! use tricolor::models::Rgb;
//! let chocolate = Rgb::new(210.0, 105.0, 30.0);
//! let cmyk = chocolate.to_cmyk();
//! let hls = chocolate.to_hls();
//! assert_eq!(cmyk.to_rgb().red.round(), 210.0);
//! assert_eq!(hls.to_rgb().blue.round(), 30.0);
//! ```

use std::ops::{Index, IndexMut};

use crate::color::{Component, Flags, HasSpace};
use crate::Error;

mod cmyk;
mod hls;
mod rgb;

pub use cmyk::Cmyk;
pub use hls::Hls;
pub use rgb::Rgb;

/// The range of values a channel of a model accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRange {
    /// The name of the channel.
    pub name: &'static str,
    /// The smallest value of the channel.
    pub min: Component,
    /// The largest value of the channel.
    pub max: Component,
    /// Whether values outside the range wrap around instead of being clamped.
    pub wraps: bool,
}

/// Channel level access to a model. Implemented by `gen_model!`.
pub trait Channels:
    Copy + std::fmt::Debug + PartialEq + Index<usize, Output = Component> + IndexMut<usize>
{
    /// The range of each channel, in declaration order.
    const CHANNELS: &'static [ChannelRange];

    /// Return the model with every channel forced into its range. Wrapping
    /// channels wrap around, other channels are clamped and NaN becomes the
    /// smallest value of the channel.
    fn clamped(&self) -> Self;

    /// Check that every channel is finite and, unless it wraps, inside its
    /// range.
    fn validate(&self) -> Result<(), Error>;
}

/// A color model that can be converted to and from [`Rgb`].
pub trait Model: HasSpace + Sized {
    /// Convert a color in the RGB model to this model.
    fn from_rgb(rgb: &Rgb) -> Self;

    /// Convert this color to the RGB model.
    fn to_rgb(&self) -> Rgb;

    /// Return flags marking the channels that have no effect on the color.
    fn powerless(&self) -> Flags {
        Flags::empty()
    }
}
