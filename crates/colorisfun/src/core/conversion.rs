use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Clamp a channel to unit range, mapping not-a-number to zero.
#[inline]
pub(crate) fn clamp_unit(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Determine whether the channel is a finite number in unit range.
#[inline]
pub(crate) fn is_unit(value: Float) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Convert the color coordinates to 24-bit representation.
///
/// Each coordinate is first clamped to `0..=1`, then scaled by 255 and
/// *truncated*. Truncation means that a coordinate of `0.999999` becomes 254
/// and not 255. Display formats depend on this behavior, so do not replace it
/// with rounding.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        (clamp_unit(r) * 255.0) as u8,
        (clamp_unit(g) * 255.0) as u8,
        (clamp_unit(b) * 255.0) as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB coordinates to hue, saturation, and lightness.
///
/// All three results have unit range, with the hue in `0..1`. Achromatic
/// colors, i.e., colors whose largest and smallest coordinates are the same,
/// have hue and saturation zero. That includes black and white.
pub(crate) fn rgb_to_hsl(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [h / 6.0, s, l]
}

/// Compute the squared Euclidian distance between two RGB colors.
///
/// There is no square root. Since the square root is monotonic, minimizing
/// the squared distance selects the same color.
///
/// Fused multiply-add would change the rounding and with it which of two
/// equally distant entries compares as closer.
#[allow(clippy::suboptimal_flops)]
#[inline]
pub(crate) fn distance_squared(c1: &[Float; 3], c2: &[Float; 3]) -> Float {
    let dr = c1[0] - c2[0];
    let dg = c1[1] - c2[1];
    let db = c1[2] - c2[2];
    dr * dr + dg * dg + db * db
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{clamp_unit, distance_squared, from_24bit, rgb_to_hsl, to_24bit};
    use crate::assert_close_enough;
    use crate::Float;

    #[test]
    fn test_24bit() {
        for value in 0..=255_u8 {
            let coordinates = from_24bit(value, value, value);
            assert_eq!(to_24bit(&coordinates), [value, value, value]);
        }

        assert_eq!(to_24bit(&[0.999999, 0.5, 0.0]), [254, 127, 0]);
        assert_eq!(to_24bit(&[1.5, -0.5, Float::NAN]), [255, 0, 0]);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(-3.0), 0.0);
        assert_eq!(clamp_unit(3.0), 1.0);
        assert_eq!(clamp_unit(Float::NAN), 0.0);
        assert_eq!(clamp_unit(Float::INFINITY), 1.0);
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_eq!(rgb_to_hsl(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl(&[1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_hsl(&[1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);

        let [h, s, l] = rgb_to_hsl(&[0.0, 1.0, 0.0]);
        assert_close_enough!(h, 1.0 / 3.0);
        assert_close_enough!(s, 1.0);
        assert_close_enough!(l, 0.5);

        let [h, s, l] = rgb_to_hsl(&[0.0, 0.0, 1.0]);
        assert_close_enough!(h, 2.0 / 3.0);
        assert_close_enough!(s, 1.0);
        assert_close_enough!(l, 0.5);

        // Magenta has g < b and hence wraps around.
        let [h, _, _] = rgb_to_hsl(&[1.0, 0.0, 1.0]);
        assert_close_enough!(h, 5.0 / 6.0);

        // Light colors take the other saturation branch.
        let [_, s, l] = rgb_to_hsl(&[1.0, 0.5, 0.5]);
        assert_close_enough!(s, 1.0);
        assert_close_enough!(l, 0.75);
    }

    #[test]
    fn test_distance_squared() {
        assert_eq!(distance_squared(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(distance_squared(&[1.0, 0.0, 0.0], &[0.0, 0.0, 0.0]), 1.0);
        assert_eq!(distance_squared(&[1.0, 1.0, 1.0], &[0.0, 0.0, 0.0]), 3.0);
        assert_eq!(distance_squared(&[0.5, 0.0, 0.0], &[0.0, 0.5, 0.0]), 0.5);
    }
}
