//! Pixel classification: decide whether a pixel is a wall or open floor.
//!
//! The unweighted mean of the red, green and blue channels is compared
//! against half of the channel's maximum value. Darker pixels are walls.
//! Alpha is ignored.

use image::Pixel;

/// Outcome of classifying one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passability {
    /// Open floor.
    Passable,
    /// Wall.
    Blocked,
}

impl Passability {
    /// Returns `true` for [`Passability::Passable`].
    #[must_use]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Passable)
    }
}

/// An integer colour channel with a known full-scale value.
pub trait Intensity: Copy {
    /// Full-scale channel value.
    const MAX: u32;

    /// The channel value widened to `u32`.
    fn value(self) -> u32;
}

impl Intensity for u8 {
    const MAX: u32 = 255;

    fn value(self) -> u32 {
        u32::from(self)
    }
}

impl Intensity for u16 {
    const MAX: u32 = 65_535;

    fn value(self) -> u32 {
        u32::from(self)
    }
}

/// Classify red, green and blue channel values.
///
/// Blocked iff `(r + g + b) / 3 < MAX / 2`, evaluated exactly as
/// `2 * (r + g + b) < 3 * MAX`. For 8-bit channels a mean of 127 is
/// blocked and a mean of 128 is passable.
#[must_use]
pub fn classify_rgb<T: Intensity>(r: T, g: T, b: T) -> Passability {
    // 2 * 3 * 65535 fits comfortably in u32.
    let sum = r.value() + g.value() + b.value();
    if 2 * sum < 3 * T::MAX {
        Passability::Blocked
    } else {
        Passability::Passable
    }
}

/// Classify any `image` pixel whose channels are [`Intensity`] values.
///
/// Grayscale pixels are treated as grey RGB.
#[must_use]
pub fn classify<P>(pixel: &P) -> Passability
where
    P: Pixel,
    P::Subpixel: Intensity,
{
    let [r, g, b, _alpha] = pixel.to_rgba().0;
    classify_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use image::{Luma, Rgb, Rgba};

    use super::*;

    #[test]
    fn black_is_blocked_white_is_passable() {
        assert_eq!(classify(&Rgb([0u8, 0, 0])), Passability::Blocked);
        assert_eq!(classify(&Rgb([255u8, 255, 255])), Passability::Passable);
        assert_eq!(classify(&Rgb([0u16, 0, 0])), Passability::Blocked);
        assert_eq!(
            classify(&Rgb([65_535u16, 65_535, 65_535])),
            Passability::Passable
        );
    }

    #[test]
    fn eight_bit_midpoint() {
        // Mean 127 is below 127.5, mean 128 is not.
        assert_eq!(classify_rgb(127u8, 127, 127), Passability::Blocked);
        assert_eq!(classify_rgb(128u8, 128, 128), Passability::Passable);
        // Sum 382 -> mean 127.33; sum 383 -> mean 127.67.
        assert_eq!(classify_rgb(127u8, 127, 128), Passability::Blocked);
        assert_eq!(classify_rgb(127u8, 128, 128), Passability::Passable);
    }

    #[test]
    fn sixteen_bit_midpoint() {
        assert_eq!(classify_rgb(32_767u16, 32_767, 32_767), Passability::Blocked);
        assert_eq!(
            classify_rgb(32_768u16, 32_768, 32_768),
            Passability::Passable
        );
    }

    #[test]
    fn average_is_unweighted() {
        // Pure green would be bright under luminance weighting but its
        // plain average is 85.
        assert_eq!(classify_rgb(0u8, 255, 0), Passability::Blocked);
        assert_eq!(classify_rgb(255u8, 255, 0), Passability::Passable);
    }

    #[test]
    fn alpha_is_ignored() {
        assert_eq!(classify(&Rgba([255u8, 255, 255, 0])), Passability::Passable);
        assert_eq!(classify(&Rgba([0u8, 0, 0, 255])), Passability::Blocked);
    }

    #[test]
    fn luma_is_treated_as_grey() {
        assert_eq!(classify(&Luma([200u8])), Passability::Passable);
        assert_eq!(classify(&Luma([20u8])), Passability::Blocked);
    }

    #[test]
    fn every_eight_bit_grey_maps_to_one_outcome() {
        for v in 0..=255u8 {
            let expected = if v < 128 {
                Passability::Blocked
            } else {
                Passability::Passable
            };
            assert_eq!(classify_rgb(v, v, v), expected, "grey level {v}");
        }
    }
}
