//! Render a gradient between two colors, interpolated once in every model.

use anyhow::Context;
use image::{Rgb, RgbImage};
use tricolor::{Color, Component, Space};

/// Render one horizontal band per model, from `from` on the left to `to`
/// on the right.
pub fn render(
    from: &Color,
    to: &Color,
    width: u32,
    band_height: u32,
) -> anyhow::Result<RgbImage> {
    let height = u32::try_from(Space::ALL.len())
        .ok()
        .and_then(|bands| bands.checked_mul(band_height))
        .with_context(|| format!("band height {band_height} is too large"))?;

    let bands = Space::ALL.map(|space| {
        let interp = from.interpolate(to, space);
        (0..width)
            .map(|x| {
                let t = if width > 1 {
                    x as Component / (width - 1) as Component
                } else {
                    0.0
                };
                Rgb(interp.at(t).rgb().to_u8())
            })
            .collect::<Vec<_>>()
    });

    let mut img = RgbImage::new(width, height);

    img.enumerate_rows_mut().for_each(|(y, pixels)| {
        let band = &bands[(y / band_height) as usize];
        for (x, _, pixel) in pixels {
            *pixel = band[x as usize];
        }
    });

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_band_per_model() {
        let red = Color::new(255.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 255.0);
        let img = render(&red, &blue, 11, 4).unwrap();

        assert_eq!(img.dimensions(), (11, 12));
        for band in 0..3 {
            let y = band * 4;
            assert_eq!(img.get_pixel(0, y), &Rgb([255, 0, 0]));
            assert_eq!(img.get_pixel(10, y + 3), &Rgb([0, 0, 255]));
        }
    }

    #[test]
    fn models_disagree_in_the_middle() {
        let red = Color::new(255.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 255.0);
        let img = render(&red, &blue, 3, 1).unwrap();

        // RGB averages the channels, HLS keeps full brightness on the way
        // through magenta.
        assert_eq!(img.get_pixel(1, 0), &Rgb([128, 0, 128]));
        assert_eq!(img.get_pixel(1, 2), &Rgb([255, 0, 255]));
    }

    #[test]
    fn single_column() {
        let img = render(&Color::default(), &Color::new(0.0, 0.0, 0.0), 1, 1).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn oversized_bands_are_an_error() {
        let err = render(&Color::default(), &Color::default(), 1, 2_000_000_000).unwrap_err();
        assert_eq!(err.to_string(), "band height 2000000000 is too large");
    }
}
