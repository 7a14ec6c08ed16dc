//! Math utility functions.

use num_traits::Float;

use crate::color::{Component, Space};
use crate::Error;

/// Linear interpolation between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Wrap `value` into `min..max`. Non-finite values become `min`.
pub fn wrap(value: Component, min: Component, max: Component) -> Component {
    if !value.is_finite() {
        return min;
    }

    let wrapped = (value - min).rem_euclid(max - min) + min;
    // rem_euclid can round up to the divisor for tiny negative inputs.
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}

/// Force a channel value into its range. Used by models generated with
/// `gen_model!`.
pub fn fit_channel(value: Component, min: Component, max: Component, wraps: bool) -> Component {
    if wraps {
        wrap(value, min, max)
    } else if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Check a channel value against its range. Used by models generated with
/// `gen_model!`.
pub fn check_channel(
    space: Space,
    channel: &'static str,
    value: Component,
    min: Component,
    max: Component,
    wraps: bool,
) -> Result<(), Error> {
    if !value.is_finite() {
        return Err(Error::NotFinite { space, channel });
    }

    if !wraps && !(min..=max).contains(&value) {
        return Err(Error::OutOfRange {
            space,
            channel,
            value,
            min,
            max,
        });
    }

    Ok(())
}

/// Interpolate between two hues along the shorter arc of the circle
/// `min..max`.
pub fn lerp_hue(
    a: Component,
    b: Component,
    t: Component,
    min: Component,
    max: Component,
) -> Component {
    let span = max - min;
    let mut delta = b - a;
    if delta > span / 2.0 {
        delta -= span;
    } else if delta < -span / 2.0 {
        delta += span;
    }
    wrap(a + delta * t, min, max)
}
