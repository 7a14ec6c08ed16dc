//! Model a color with cyan, magenta, yellow and key (black) channels.

use crate::color::{Component, HasSpace, Space};

tricolor_macros::gen_model! {
    /// A color in the CMYK model. Every channel is on a 0..=1 scale.
    pub struct Cmyk {
        /// The cyan channel.
        #[range(0.0, 1.0)]
        cyan: Component,
        /// The magenta channel.
        #[range(0.0, 1.0)]
        magenta: Component,
        /// The yellow channel.
        #[range(0.0, 1.0)]
        yellow: Component,
        /// The key (black) channel.
        #[range(0.0, 1.0)]
        key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Channels;

    #[test]
    fn four_channels() {
        let cmyk = Cmyk::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(cmyk[3], 0.4);
        assert_eq!(<[Component; 4]>::from(cmyk), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Cmyk::CHANNELS[3].name, "key");
    }

    #[test]
    fn clamping() {
        let cmyk = Cmyk::new(-0.5, 1.5, 0.5, Component::NAN).clamped();
        assert_eq!(cmyk, Cmyk::new(0.0, 1.0, 0.5, 0.0));
    }

    #[test]
    fn map_applies_to_every_channel() {
        let cmyk = Cmyk::new(0.5, 0.25, 0.125, 1.0).map(|v| v / 2.0);
        assert_eq!(cmyk, Cmyk::new(0.25, 0.125, 0.0625, 0.5));
    }
}
