use crate::color::{Color, Component, Flags, Space};
use crate::math::{lerp, lerp_hue};
use crate::models::{Channels, Cmyk, Hls, Model, Rgb};

/// Holds the two endpoints of an interpolation in the space the
/// interpolation happens in.
#[derive(Clone, Copy, Debug)]
pub struct Interpolation {
    left: Color,
    right: Color,
    space: Space,
}

impl Color {
    /// Prepare to interpolate from this color to `other` in the given
    /// space.
    pub fn interpolate(&self, other: &Self, space: Space) -> Interpolation {
        Interpolation {
            left: *self,
            right: *other,
            space,
        }
    }
}

impl Interpolation {
    /// The space the interpolation happens in.
    pub fn space(&self) -> Space {
        self.space
    }

    /// Return the color at `t`, where 0 is the left color and 1 the right.
    pub fn at(&self, t: Component) -> Color {
        match self.space {
            Space::Rgb => mix::<Rgb>(&self.left, &self.right, t),
            Space::Cmyk => mix::<Cmyk>(&self.left, &self.right, t),
            Space::Hls => mix::<Hls>(&self.left, &self.right, t),
        }
    }
}

fn mix<M: Model + Channels>(left: &Color, right: &Color, t: Component) -> Color {
    let left = left.to_model::<M>();
    let right = right.to_model::<M>();
    let left_powerless = left.powerless();
    let right_powerless = right.powerless();

    let mut result = left;
    for (index, range) in M::CHANNELS.iter().enumerate() {
        let flag = Flags::for_channel(index);

        // A powerless channel takes the value from the other side.
        let (a, b) = match (
            left_powerless.contains(flag),
            right_powerless.contains(flag),
        ) {
            (true, false) => (right[index], right[index]),
            (false, true) => (left[index], left[index]),
            _ => (left[index], right[index]),
        };

        result[index] = if range.wraps {
            lerp_hue(a, b, t, range.min, range.max)
        } else {
            lerp(a, b, t)
        };
    }

    Color::from_model(result)
}
