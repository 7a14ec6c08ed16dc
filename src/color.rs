//! A [`Color`] holds a single color as RGB and derives the CMYK and HLS
//! representations from it on demand.

use bitflags::bitflags;

use crate::models::{Channels, Cmyk, Hls, Model, Rgb};
use crate::{Error, RangePolicy};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

bitflags! {
    /// Flags marking channels whose value has no effect on the color.
    ///
    /// A powerless channel still holds a value (hue is 0 for grays, cyan,
    /// magenta and yellow are 0 for black), but any other value would
    /// describe the same color.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the first channel of a model is powerless.
        const C0_IS_POWERLESS = 1 << 0;
        /// Set when the second channel of a model is powerless.
        const C1_IS_POWERLESS = 1 << 1;
        /// Set when the third channel of a model is powerless.
        const C2_IS_POWERLESS = 1 << 2;
        /// Set when the fourth channel of a model is powerless.
        const C3_IS_POWERLESS = 1 << 3;
    }
}

impl Flags {
    /// Return the flag for the channel at `index`.
    pub fn for_channel(index: usize) -> Self {
        match index {
            0 => Self::C0_IS_POWERLESS,
            1 => Self::C1_IS_POWERLESS,
            2 => Self::C2_IS_POWERLESS,
            3 => Self::C3_IS_POWERLESS,
            _ => Self::empty(),
        }
    }
}

/// The color models a [`Color`] can be viewed and edited in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Space {
    /// Additive red, green, blue on a 0..=255 scale.
    Rgb = 0,
    /// Subtractive cyan, magenta, yellow and key (black) on a 0..=1 scale.
    Cmyk = 1,
    /// Hue (in turns), lightness and saturation, where lightness is the
    /// HSB brightness channel.
    Hls = 2,
}

impl Space {
    /// All the supported spaces.
    pub const ALL: [Space; 3] = [Space::Rgb, Space::Cmyk, Space::Hls];

    /// The lowercase name of the space.
    pub fn name(self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Cmyk => "cmyk",
            Space::Hls => "hls",
        }
    }
}

/// Implemented by models to tell which [`Space`] they belong to.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}

/// Every field a user can edit, across all three models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    /// RGB red.
    Red,
    /// RGB green.
    Green,
    /// RGB blue.
    Blue,
    /// CMYK cyan.
    Cyan,
    /// CMYK magenta.
    Magenta,
    /// CMYK yellow.
    Yellow,
    /// CMYK key (black).
    Key,
    /// HLS hue.
    Hue,
    /// HLS lightness (HSB brightness).
    Lightness,
    /// HLS saturation.
    Saturation,
}

impl Channel {
    /// All the channels, grouped by space.
    pub const ALL: [Channel; 10] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Cyan,
        Channel::Magenta,
        Channel::Yellow,
        Channel::Key,
        Channel::Hue,
        Channel::Lightness,
        Channel::Saturation,
    ];

    /// The space this channel belongs to.
    pub fn space(self) -> Space {
        use Channel as C;
        match self {
            C::Red | C::Green | C::Blue => Space::Rgb,
            C::Cyan | C::Magenta | C::Yellow | C::Key => Space::Cmyk,
            C::Hue | C::Lightness | C::Saturation => Space::Hls,
        }
    }

    /// The position of the channel inside its model.
    pub fn index(self) -> usize {
        use Channel as C;
        match self {
            C::Red | C::Cyan | C::Hue => 0,
            C::Green | C::Magenta | C::Lightness => 1,
            C::Blue | C::Yellow | C::Saturation => 2,
            C::Key => 3,
        }
    }

    /// The lowercase name of the channel.
    pub fn name(self) -> &'static str {
        use Channel as C;
        match self {
            C::Red => "red",
            C::Green => "green",
            C::Blue => "blue",
            C::Cyan => "cyan",
            C::Magenta => "magenta",
            C::Yellow => "yellow",
            C::Key => "key",
            C::Hue => "hue",
            C::Lightness => "lightness",
            C::Saturation => "saturation",
        }
    }
}

/// A single color.
///
/// RGB is the only representation that is stored. CMYK and HLS are derived
/// every time they are read, so the three views can never drift apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    rgb: Rgb,
}

impl Default for Color {
    fn default() -> Self {
        Self::new(255.0, 255.0, 255.0)
    }
}

impl Color {
    /// Create a new [`Color`] from RGB channels on a 0..=255 scale. Channels
    /// outside the range are clamped.
    /// ```rust
    /// use tricolor::Color;
    /// let c = Color::new(255.0, 0.0, 0.0);
    /// assert_eq!(c.cmyk().magenta, 1.0);
    /// ```
    pub fn new(red: Component, green: Component, blue: Component) -> Self {
        Self::from_model(Rgb::new(red, green, blue))
    }

    /// Create a color from any model, clamping channels that are out of
    /// range.
    pub fn from_model<M: Model + Channels>(model: M) -> Self {
        Self {
            rgb: model.clamped().to_rgb().clamped(),
        }
    }

    /// Create a color from any model, handling out of range channels
    /// according to `policy`.
    pub fn try_from_model<M: Model + Channels>(
        model: M,
        policy: RangePolicy,
    ) -> Result<Self, Error> {
        let model = policy.admit(model)?;
        Ok(Self::from_model(model))
    }

    /// The color in the RGB model.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The color in the CMYK model.
    pub fn cmyk(&self) -> Cmyk {
        self.rgb.to_cmyk()
    }

    /// The color in the HLS model.
    pub fn hls(&self) -> Hls {
        self.rgb.to_hls()
    }

    /// The color in the model `M`.
    pub fn to_model<M: Model>(&self) -> M {
        M::from_rgb(&self.rgb)
    }

    /// Read a single channel from the model it belongs to.
    pub fn channel(&self, channel: Channel) -> Component {
        let index = channel.index();
        match channel.space() {
            Space::Rgb => self.rgb()[index],
            Space::Cmyk => self.cmyk()[index],
            Space::Hls => self.hls()[index],
        }
    }

    /// Return a new color with a single channel replaced. The value is
    /// clamped to the range of the channel.
    ///
    /// The model the channel belongs to is derived from this color, the
    /// channel is replaced and the result becomes the new RGB value.
    pub fn with(&self, channel: Channel, value: Component) -> Self {
        // Clamping can not fail.
        self.try_with(channel, value, RangePolicy::Clamp)
            .unwrap_or(*self)
    }

    /// Return a new color with a single channel replaced, handling an out of
    /// range value according to `policy`.
    pub fn try_with(
        &self,
        channel: Channel,
        value: Component,
        policy: RangePolicy,
    ) -> Result<Self, Error> {
        tracing::trace!(channel = channel.name(), value, "editing color");

        let index = channel.index();
        match channel.space() {
            Space::Rgb => Self::try_from_model(replace(self.rgb(), index, value), policy),
            Space::Cmyk => Self::try_from_model(replace(self.cmyk(), index, value), policy),
            Space::Hls => Self::try_from_model(replace(self.hls(), index, value), policy),
        }
    }

    /// Take a snapshot of the color in all three models.
    pub fn readout(&self) -> Readout {
        let cmyk = self.cmyk();
        let hls = self.hls();
        Readout {
            rgb: self.rgb,
            cmyk,
            hls,
            cmyk_powerless: cmyk.powerless(),
            hls_powerless: hls.powerless(),
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::from_model(value)
    }
}

impl From<Cmyk> for Color {
    fn from(value: Cmyk) -> Self {
        Self::from_model(value)
    }
}

impl From<Hls> for Color {
    fn from(value: Hls) -> Self {
        Self::from_model(value)
    }
}

fn replace<M: Channels>(mut model: M, index: usize, value: Component) -> M {
    model[index] = value;
    model
}

/// The three representations of a [`Color`] at once, for display.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Readout {
    /// The color in the RGB model.
    pub rgb: Rgb,
    /// The color in the CMYK model.
    pub cmyk: Cmyk,
    /// The color in the HLS model.
    pub hls: Hls,
    /// CMYK channels that have no effect on the color.
    #[cfg_attr(feature = "serde", serde(with = "flags_bits"))]
    pub cmyk_powerless: Flags,
    /// HLS channels that have no effect on the color.
    #[cfg_attr(feature = "serde", serde(with = "flags_bits"))]
    pub hls_powerless: Flags,
}

#[cfg(feature = "serde")]
mod flags_bits {
    use super::Flags;

    pub fn serialize<S: serde::Serializer>(flags: &Flags, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(flags.bits())
    }

    pub fn deserialize<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Flags, D::Error> {
        let bits = <u8 as serde::Deserialize>::deserialize(d)?;
        Ok(Flags::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn public_types_are_thread_safe() {
        fn assert_copy<T: Copy>() {}
        fn assert_send_sync<T: Send + Sync>() {}

        assert_copy::<Color>();
        assert_copy::<Rgb>();
        assert_copy::<Cmyk>();
        assert_copy::<Hls>();
        assert_copy::<Readout>();
        assert_copy::<crate::Interpolation>();
        assert_copy::<crate::Edit>();

        assert_send_sync::<Color>();
        assert_send_sync::<Rgb>();
        assert_send_sync::<Cmyk>();
        assert_send_sync::<Hls>();
        assert_send_sync::<Readout>();
        assert_send_sync::<crate::Interpolation>();
        assert_send_sync::<crate::Edit>();
        assert_send_sync::<Error>();
        assert_send_sync::<crate::ParseColorError>();
    }

    #[test]
    fn channels_know_their_space_and_index() {
        for channel in Channel::ALL {
            let space = channel.space();
            let names: &[&str] = match space {
                Space::Rgb => &["red", "green", "blue"],
                Space::Cmyk => &["cyan", "magenta", "yellow", "key"],
                Space::Hls => &["hue", "lightness", "saturation"],
            };
            assert_eq!(names[channel.index()], channel.name());
        }
    }

    #[test]
    fn new_color_clamps_channels() {
        let c = Color::new(300.0, -5.0, Component::NAN);
        assert_eq!(c.rgb(), Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn default_is_white() {
        let c = Color::default();
        assert_eq!(c.cmyk(), Cmyk::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(c.hls().lightness, 1.0);
    }

    #[test]
    fn rgb_edit_updates_cmyk_and_hls() {
        let c = Color::new(0.0, 0.0, 0.0).with(Channel::Red, 255.0);
        assert_eq!(c.cmyk(), Cmyk::new(0.0, 1.0, 1.0, 0.0));
        assert_component_eq!(c.hls().hue, 0.0);
        assert_component_eq!(c.hls().saturation, 1.0);
        assert_component_eq!(c.hls().lightness, 1.0);
    }

    #[test]
    fn cmyk_edit_propagates_through_rgb() {
        let c = Color::new(255.0, 255.0, 255.0).with(Channel::Key, 0.5);
        assert_component_eq!(c.rgb().red, 127.5, epsilon = 1.0e-9);
        assert_component_eq!(c.rgb().green, 127.5, epsilon = 1.0e-9);
        assert_component_eq!(c.rgb().blue, 127.5, epsilon = 1.0e-9);
        assert_component_eq!(c.hls().lightness, 0.5);
        assert_eq!(c.hls().saturation, 0.0);
    }

    #[test]
    fn hls_edit_propagates_through_rgb() {
        // Pure red rotated by a third of a turn is pure green.
        let c = Color::new(255.0, 0.0, 0.0).with(Channel::Hue, 1.0 / 3.0);
        assert_component_eq!(c.rgb().red, 0.0, epsilon = 1.0e-3);
        assert_component_eq!(c.rgb().green, 255.0, epsilon = 1.0e-3);
        assert_component_eq!(c.rgb().blue, 0.0, epsilon = 1.0e-3);
        assert_component_eq!(c.cmyk().cyan, 1.0);
        assert_component_eq!(c.cmyk().yellow, 1.0);
    }

    #[test]
    fn hue_edit_on_gray_has_no_effect() {
        let gray = Color::new(128.0, 128.0, 128.0);
        let edited = gray.with(Channel::Hue, 0.5);
        assert_component_eq!(edited.rgb().red, 128.0, epsilon = 1.0e-9);
        assert_component_eq!(edited.rgb().green, 128.0, epsilon = 1.0e-9);
        assert_component_eq!(edited.rgb().blue, 128.0, epsilon = 1.0e-9);
        assert_eq!(edited.hls().hue, 0.0);
    }

    #[test]
    fn reading_channels() {
        let c = Color::new(255.0, 0.0, 0.0);
        assert_eq!(c.channel(Channel::Red), 255.0);
        assert_eq!(c.channel(Channel::Magenta), 1.0);
        assert_eq!(c.channel(Channel::Key), 0.0);
        assert_eq!(c.channel(Channel::Saturation), 1.0);
    }

    #[test]
    fn rejecting_edits_out_of_range() {
        let c = Color::new(10.0, 20.0, 30.0);
        let err = c
            .try_with(Channel::Cyan, 1.5, RangePolicy::Reject)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                space: Space::Cmyk,
                channel: "cyan",
                ..
            }
        ));

        let clamped = c.try_with(Channel::Cyan, 1.5, RangePolicy::Clamp).unwrap();
        assert_eq!(clamped.cmyk().cyan, 1.0);
        assert_eq!(clamped.rgb().red, 0.0);
    }

    #[test]
    fn readout_marks_powerless_channels() {
        let black = Color::new(0.0, 0.0, 0.0).readout();
        assert_eq!(black.cmyk, Cmyk::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(
            black.cmyk_powerless,
            Flags::C0_IS_POWERLESS | Flags::C1_IS_POWERLESS | Flags::C2_IS_POWERLESS
        );
        assert_eq!(
            black.hls_powerless,
            Flags::C0_IS_POWERLESS | Flags::C2_IS_POWERLESS
        );

        let red = Color::new(255.0, 0.0, 0.0).readout();
        assert!(red.cmyk_powerless.is_empty());
        assert!(red.hls_powerless.is_empty());
    }
}
