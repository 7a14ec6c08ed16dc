//! Model a color with hue, lightness and saturation channels.
//!
//! Lightness here is the brightness (value) channel of the HSB model, not
//! the lightness channel of HSL. Pure red has a lightness of 1.

use crate::color::{Component, HasSpace, Space};

tricolor_macros::gen_model! {
    /// A color in the HLS model. Hue is measured in turns, so 0.5 is the
    /// opposite side of the color wheel from 0.
    pub struct Hls {
        /// The hue channel.
        #[range(0.0, 1.0, wrap)]
        hue: Component,
        /// The lightness channel, which is HSB brightness.
        #[range(0.0, 1.0)]
        lightness: Component,
        /// The saturation channel.
        #[range(0.0, 1.0)]
        saturation: Component,
    }
}

impl HasSpace for Hls {
    const SPACE: Space = Space::Hls;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::models::Channels;

    #[test]
    fn hue_wraps_around() {
        let hls = Hls::new(1.25, 0.5, 0.5).clamped();
        assert_component_eq!(hls.hue, 0.25);

        let hls = Hls::new(-0.25, 0.5, 0.5).clamped();
        assert_component_eq!(hls.hue, 0.75);

        let hls = Hls::new(Component::INFINITY, 2.0, -1.0).clamped();
        assert_eq!(hls, Hls::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn any_finite_hue_is_valid() {
        assert!(Hls::new(7.5, 0.5, 0.5).validate().is_ok());
        assert!(Hls::new(-3.0, 0.5, 0.5).validate().is_ok());
        assert!(Hls::new(Component::NAN, 0.5, 0.5).validate().is_err());
        assert!(Hls::new(0.0, 1.5, 0.5).validate().is_err());
    }

    #[test]
    fn only_hue_wraps() {
        let wraps: Vec<_> = Hls::CHANNELS.iter().map(|c| c.wraps).collect();
        assert_eq!(wraps, [true, false, false]);
    }
}
