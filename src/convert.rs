//! Conversions between the RGB, CMYK and HLS models.
//!
//! RGB is the hub: CMYK and HLS only convert to and from RGB. Inputs are
//! clamped to the range of their model before converting (hue wraps), so
//! every conversion is total and never produces NaN.
//!
//! ```rust
//! use tricolor::{cmyk_to_rgb, rgb_to_cmyk};
//! assert_eq!(rgb_to_cmyk(255.0, 0.0, 0.0), (0.0, 1.0, 1.0, 0.0));
//! assert_eq!(cmyk_to_rgb(0.0, 1.0, 1.0, 0.0), (255.0, 0.0, 0.0));
//! ```

use crate::{
    color::{Component, Flags},
    models::{Channels, Cmyk, Hls, Model, Rgb},
};

/// The largest value of an RGB channel.
const RGB_SCALE: Component = 255.0;

impl Rgb {
    /// Convert this color to the CMYK model.
    pub fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk(self.normalized()).into()
    }

    /// Convert this color to the HLS model.
    pub fn to_hls(&self) -> Hls {
        util::rgb_to_hsb(self.normalized()).into()
    }

    /// Clamped channels on a 0..=1 scale.
    fn normalized(&self) -> [Component; 3] {
        self.clamped().to_array().map(|v| v / RGB_SCALE)
    }

    fn from_normalized(rgb: [Component; 3]) -> Self {
        Self::from(rgb.map(|v| v * RGB_SCALE))
    }
}

impl Cmyk {
    /// Convert this color to the RGB model.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_normalized(util::cmyk_to_rgb(self.clamped().to_array()))
    }
}

impl Hls {
    /// Convert this color to the RGB model.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_normalized(util::hsb_to_rgb(self.clamped().to_array()))
    }
}

impl Model for Rgb {
    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }
}

impl Model for Cmyk {
    fn from_rgb(rgb: &Rgb) -> Self {
        rgb.to_cmyk()
    }

    fn to_rgb(&self) -> Rgb {
        Cmyk::to_rgb(self)
    }

    fn powerless(&self) -> Flags {
        // With full black ink the other inks can not be seen.
        if self.key >= 1.0 {
            Flags::C0_IS_POWERLESS | Flags::C1_IS_POWERLESS | Flags::C2_IS_POWERLESS
        } else {
            Flags::empty()
        }
    }
}

impl Model for Hls {
    fn from_rgb(rgb: &Rgb) -> Self {
        rgb.to_hls()
    }

    fn to_rgb(&self) -> Rgb {
        Hls::to_rgb(self)
    }

    fn powerless(&self) -> Flags {
        if self.lightness <= 0.0 {
            Flags::C0_IS_POWERLESS | Flags::C2_IS_POWERLESS
        } else if self.saturation <= 0.0 {
            Flags::C0_IS_POWERLESS
        } else {
            Flags::empty()
        }
    }
}

/// Convert RGB channels (0..=255) to CMYK channels (0..=1).
///
/// Pure black converts to `(0, 0, 0, 1)`.
pub fn rgb_to_cmyk(
    r: Component,
    g: Component,
    b: Component,
) -> (Component, Component, Component, Component) {
    let Cmyk {
        cyan,
        magenta,
        yellow,
        key,
    } = Rgb::new(r, g, b).to_cmyk();
    (cyan, magenta, yellow, key)
}

/// Convert CMYK channels (0..=1) to RGB channels (0..=255).
pub fn cmyk_to_rgb(
    c: Component,
    m: Component,
    y: Component,
    k: Component,
) -> (Component, Component, Component) {
    let Rgb { red, green, blue } = Cmyk::new(c, m, y, k).to_rgb();
    (red, green, blue)
}

/// Convert RGB channels (0..=255) to hue (turns), lightness and saturation
/// (0..=1). Lightness is HSB brightness. Grays have a hue of 0.
pub fn rgb_to_hls(r: Component, g: Component, b: Component) -> (Component, Component, Component) {
    let Hls {
        hue,
        lightness,
        saturation,
    } = Rgb::new(r, g, b).to_hls();
    (hue, lightness, saturation)
}

/// Convert hue (turns), lightness and saturation (0..=1) to RGB channels
/// (0..=255). Lightness is HSB brightness.
pub fn hls_to_rgb(h: Component, l: Component, s: Component) -> (Component, Component, Component) {
    let Rgb { red, green, blue } = Hls::new(h, l, s).to_rgb();
    (red, green, blue)
}

mod util {
    use crate::{color::Component, math::wrap};

    /// Convert from normalized RGB to CMYK.
    pub fn rgb_to_cmyk(from: [Component; 3]) -> [Component; 4] {
        let [red, green, blue] = from;

        let max = red.max(green).max(blue);
        let key = 1.0 - max;

        // Every ink is indeterminate at full black.
        if max <= 0.0 {
            return [0.0, 0.0, 0.0, 1.0];
        }

        // (1 - c - k) / (1 - k) where 1 - k == max.
        let ink = |channel: Component| (max - channel) / max;

        [ink(red), ink(green), ink(blue), key]
    }

    /// Convert from CMYK to normalized RGB.
    pub fn cmyk_to_rgb(from: [Component; 4]) -> [Component; 3] {
        let [cyan, magenta, yellow, key] = from;
        let white = 1.0 - key;
        [
            (1.0 - cyan) * white,
            (1.0 - magenta) * white,
            (1.0 - yellow) * white,
        ]
    }

    /// Convert from normalized RGB to hue (turns), brightness and
    /// saturation. The order of the result matches the HLS model.
    pub fn rgb_to_hsb(from: [Component; 3]) -> [Component; 3] {
        let [red, green, blue] = from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta > 0.0 {
            let sector = if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            wrap(sector / 6.0, 0.0, 1.0)
        } else {
            0.0
        };

        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        [hue, max, saturation]
    }

    /// Convert from hue (turns), brightness and saturation to normalized
    /// RGB.
    pub fn hsb_to_rgb(from: [Component; 3]) -> [Component; 3] {
        let [hue, brightness, saturation] = from;

        if saturation <= 0.0 {
            return [brightness; 3];
        }

        let h = wrap(hue, 0.0, 1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;

        let v = brightness;
        let p = v * (1.0 - saturation);
        let q = v * (1.0 - saturation * f);
        let t = v * (1.0 - saturation * (1.0 - f));

        match sector as u8 % 6 {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        }
    }
}
