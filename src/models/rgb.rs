//! Model a color with red, green and blue channels.

use crate::color::{Component, HasSpace, Space};

tricolor_macros::gen_model! {
    /// A color in the RGB model. Every channel is on a 0..=255 scale.
    pub struct Rgb {
        /// The red channel.
        #[range(0.0, 255.0)]
        red: Component,
        /// The green channel.
        #[range(0.0, 255.0)]
        green: Component,
        /// The blue channel.
        #[range(0.0, 255.0)]
        blue: Component,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    /// Create a color from 8-bit channels.
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red.into(), green.into(), blue.into())
    }

    /// Convert to 8-bit channels, rounding and clamping each one.
    pub fn to_u8(&self) -> [u8; 3] {
        self.to_array().map(|v| {
            if v.is_nan() {
                0
            } else {
                v.round().clamp(0.0, 255.0) as u8
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Channels;
    use crate::Error;

    #[test]
    fn channels_are_indexed_in_declaration_order() {
        let mut rgb = Rgb::new(1.0, 2.0, 3.0);
        assert_eq!(rgb[0], 1.0);
        assert_eq!(rgb[1], 2.0);
        assert_eq!(rgb[2], 3.0);

        rgb[1] = 20.0;
        assert_eq!(rgb.green, 20.0);
        assert_eq!(rgb.to_array(), [1.0, 20.0, 3.0]);
        assert_eq!(Rgb::from([1.0, 20.0, 3.0]), rgb);
    }

    #[test]
    #[should_panic]
    fn indexing_past_the_last_channel_panics() {
        let _ = Rgb::new(0.0, 0.0, 0.0)[3];
    }

    #[test]
    fn channel_ranges() {
        assert_eq!(Rgb::CHANNELS.len(), 3);
        assert_eq!(Rgb::CHANNELS[0].name, "red");
        assert_eq!(Rgb::CHANNELS[2].max, 255.0);
        assert!(Rgb::CHANNELS.iter().all(|c| !c.wraps));
    }

    #[test]
    fn clamping() {
        let rgb = Rgb::new(-1.0, 256.0, Component::NAN).clamped();
        assert_eq!(rgb, Rgb::new(0.0, 255.0, 0.0));

        let rgb = Rgb::new(Component::INFINITY, Component::NEG_INFINITY, 12.5).clamped();
        assert_eq!(rgb, Rgb::new(255.0, 0.0, 12.5));
    }

    #[test]
    fn validation() {
        assert!(Rgb::new(0.0, 128.0, 255.0).validate().is_ok());
        assert_eq!(
            Rgb::new(0.0, 300.0, 0.0).validate(),
            Err(Error::OutOfRange {
                space: Space::Rgb,
                channel: "green",
                value: 300.0,
                min: 0.0,
                max: 255.0,
            })
        );
        assert_eq!(
            Rgb::new(0.0, 0.0, Component::NAN).validate(),
            Err(Error::NotFinite {
                space: Space::Rgb,
                channel: "blue",
            })
        );
    }

    #[test]
    fn eight_bit_channels() {
        assert_eq!(Rgb::from_u8(255, 128, 0), Rgb::new(255.0, 128.0, 0.0));
        assert_eq!(Rgb::new(127.5, 300.0, -3.0).to_u8(), [128, 255, 0]);
        assert_eq!(Rgb::new(Component::NAN, 0.4, 254.6).to_u8(), [0, 0, 255]);
    }
}
