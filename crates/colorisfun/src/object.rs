use core::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clamp_unit, distance_squared, format_hex, format_hsl, format_rgb, from_24bit, is_unit, parse,
    rgb_to_hsl, to_24bit, to_eq_coordinates,
};
use crate::error::{ClassifyError, ColorFormatError};
use crate::opt::ChannelPolicy;
use crate::Float;

/// Create a new color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const expressions,
/// since it performs the floating point division as part of the const
/// expression and only then invokes the const constructor.
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $r as $crate::Float / 255.0,
            $g as $crate::Float / 255.0,
            $b as $crate::Float / 255.0,
        )
    };
}

/// A sampled sRGB color.
///
/// Every color has three coordinates for red, green, and blue. In-gamut
/// colors have unit range coordinates. The constructors do not enforce that
/// range; [`Color::checked`] does, and all text conversions clamp
/// coordinates before formatting them.
///
/// ## Equality Testing and Hashing
///
/// Equality and hashing zero out not-a-numbers, reduce resolution, and
/// replace negative zeros before comparing bit strings. Hence colors that
/// differ only by floating point noise compare as equal.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorisfun"))]
#[derive(Clone, Copy, Debug)]
pub struct Color {
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given red, green, and blue
    /// coordinates.
    ///
    /// ```
    /// # use colorisfun::Color;
    /// let blue = Color::new(0.25, 0.5, 1.0);
    /// assert_eq!(blue.as_ref(), &[0.25, 0.5, 1.0]);
    /// ```
    #[inline]
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self {
            coordinates: [r, g, b],
        }
    }

    /// Instantiate a new color after validating its coordinates.
    ///
    /// With [`ChannelPolicy::Clamp`], out-of-range and not-a-number
    /// coordinates are clamped to `0..=1` and a warning is logged. With
    /// [`ChannelPolicy::Reject`], they result in an error.
    ///
    /// ```
    /// # use colorisfun::{Color, error::ClassifyError, opt::ChannelPolicy};
    /// let clamped = Color::checked(1.5, 0.5, -0.5, ChannelPolicy::Clamp)?;
    /// assert_eq!(clamped, Color::new(1.0, 0.5, 0.0));
    ///
    /// let rejected = Color::checked(1.5, 0.5, -0.5, ChannelPolicy::Reject);
    /// assert!(matches!(
    ///     rejected,
    ///     Err(ClassifyError::ChannelOutOfRange { channel: 0, .. })
    /// ));
    /// # Ok::<(), ClassifyError>(())
    /// ```
    pub fn checked(
        r: Float,
        g: Float,
        b: Float,
        policy: ChannelPolicy,
    ) -> Result<Self, ClassifyError> {
        let mut coordinates = [r, g, b];
        for (channel, value) in coordinates.iter_mut().enumerate() {
            if is_unit(*value) {
                continue;
            }

            match policy {
                ChannelPolicy::Reject => {
                    return Err(ClassifyError::ChannelOutOfRange {
                        channel,
                        value: *value,
                    })
                }
                ChannelPolicy::Clamp => {
                    let clamped = clamp_unit(*value);
                    log::warn!(
                        "clamping color channel #{} from {} to {}",
                        channel + 1,
                        value,
                        clamped
                    );
                    *value = clamped;
                }
            }
        }

        Ok(Self { coordinates })
    }

    /// Instantiate a new color from its 24-bit representation.
    ///
    /// This function returns a new color with the given red, green, and blue
    /// coordinates scaled by 1/255. The [`rgb`] macro does the same thing but
    /// is safe to use inside const expressions.
    ///
    /// ```
    /// # use colorisfun::Color;
    /// let blue = Color::from_24bit(59, 130, 246);
    /// assert_eq!(blue.to_hex(), "#3B82F6");
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        let [r, g, b] = from_24bit(r, g, b);
        Self::new(r, g, b)
    }

    /// Access the red coordinate.
    #[inline]
    pub fn red(&self) -> Float {
        self.coordinates[0]
    }

    /// Access the green coordinate.
    #[inline]
    pub fn green(&self) -> Float {
        self.coordinates[1]
    }

    /// Access the blue coordinate.
    #[inline]
    pub fn blue(&self) -> Float {
        self.coordinates[2]
    }

    /// Get the coordinates clamped to unit range.
    #[inline]
    pub fn clamped(&self) -> [Float; 3] {
        let [r, g, b] = self.coordinates;
        [clamp_unit(r), clamp_unit(g), clamp_unit(b)]
    }

    /// Convert this color to 24-bit representation.
    ///
    /// Coordinates are clamped and then truncated, not rounded. Hence
    /// `0.999999` becomes 254.
    ///
    /// ```
    /// # use colorisfun::Color;
    /// assert_eq!(Color::new(0.999999, 0.5, 0.0).to_24bit(), [254, 127, 0]);
    /// ```
    #[inline]
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.coordinates)
    }

    /// Format this color as `#RRGGBB` with uppercase hexadecimal digits.
    pub fn to_hex(&self) -> String {
        format_hex(self.to_24bit())
    }

    /// Format this color as comma-separated 24-bit coordinates, e.g.,
    /// `59, 130, 246`.
    pub fn to_rgb_string(&self) -> String {
        format_rgb(self.to_24bit())
    }

    /// Convert this color to hue, saturation, and lightness, all in unit
    /// range.
    ///
    /// Grays have hue and saturation zero.
    ///
    /// ```
    /// # use colorisfun::Color;
    /// assert_eq!(Color::new(1.0, 0.0, 0.0).to_hsl(), [0.0, 1.0, 0.5]);
    /// assert_eq!(Color::new(0.6, 0.6, 0.6).to_hsl(), [0.0, 0.0, 0.6]);
    /// ```
    pub fn to_hsl(&self) -> [Float; 3] {
        rgb_to_hsl(&self.clamped())
    }

    /// Format this color as hue in degrees and saturation and lightness in
    /// percent, e.g., `217°, 91%, 59%`. Each quantity is truncated.
    pub fn to_hsl_string(&self) -> String {
        format_hsl(&self.to_hsl())
    }

    /// Compute the squared Euclidian distance to the other color.
    ///
    /// Both colors are clamped first.
    pub fn distance_squared(&self, other: &Color) -> Float {
        distance_squared(&self.clamped(), &other.clamped())
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Color {
    /// Create a new color from its coordinates.
    #[new]
    pub fn py_new(r: Float, g: Float, b: Float) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a color from its hashed hexadecimal representation.
    #[staticmethod]
    #[pyo3(name = "parse")]
    pub fn py_parse(s: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(s)
    }

    /// Create a new color from 24-bit coordinates.
    #[staticmethod]
    #[pyo3(name = "from_24bit")]
    pub fn py_from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::from_24bit(r, g, b)
    }

    #[pyo3(name = "to_hex")]
    pub fn py_to_hex(&self) -> String {
        self.to_hex()
    }

    #[pyo3(name = "to_rgb_string")]
    pub fn py_to_rgb_string(&self) -> String {
        self.to_rgb_string()
    }

    #[pyo3(name = "to_hsl_string")]
    pub fn py_to_hsl_string(&self) -> String {
        self.to_hsl_string()
    }

    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    pub fn __str__(&self) -> String {
        self.to_hex()
    }
}

impl Default for Color {
    /// Create an instance of the default color, which is black.
    #[inline]
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::from_24bit(value[0], value[1], value[2])
    }
}

impl From<[Float; 3]> for Color {
    fn from(value: [Float; 3]) -> Self {
        Self { coordinates: value }
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its hashed hexadecimal representation.
    ///
    /// This method accepts three and six digit forms, ignores surrounding
    /// white space, and is case-insensitive.
    ///
    /// ```
    /// # use colorisfun::{Color, error::ColorFormatError};
    /// let blue: Color = "#3b82f6".parse()?;
    /// assert_eq!(blue, Color::from_24bit(59, 130, 246));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self::from)
    }
}

impl core::fmt::Display for Color {
    /// Format this color in hashed hexadecimal notation.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl core::hash::Hash for Color {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        to_eq_coordinates(&self.coordinates).hash(state);
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(&self.coordinates) == to_eq_coordinates(&other.coordinates)
    }
}

impl Eq for Color {}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::error::{ClassifyError, ColorFormatError};
    use crate::opt::ChannelPolicy;
    use crate::Float;
    use test_case::test_case;

    #[test_case(0.0, 0.0, 0.0, "#000000", "0, 0, 0", "0°, 0%, 0%" ; "black")]
    #[test_case(1.0, 1.0, 1.0, "#FFFFFF", "255, 255, 255", "0°, 0%, 100%" ; "white")]
    #[test_case(1.0, 0.0, 0.0, "#FF0000", "255, 0, 0", "0°, 100%, 50%" ; "red")]
    #[test_case(0.0, 1.0, 0.0, "#00FF00", "0, 255, 0", "120°, 100%, 50%" ; "green")]
    #[test_case(0.5, 0.5, 0.5, "#7F7F7F", "127, 127, 127", "0°, 0%, 50%" ; "mid gray")]
    fn test_formats(r: Float, g: Float, b: Float, hex: &str, rgb: &str, hsl: &str) {
        let color = Color::new(r, g, b);
        assert_eq!(color.to_hex(), hex);
        assert_eq!(color.to_rgb_string(), rgb);
        assert_eq!(color.to_hsl_string(), hsl);
    }

    #[test]
    fn test_blue_500() {
        let color = rgb!(59, 130, 246);
        assert_eq!(color.to_hex(), "#3B82F6");
        assert_eq!(color.to_rgb_string(), "59, 130, 246");
        assert_eq!(color.to_hsl_string(), "217°, 91%, 59%");
    }

    #[test]
    fn test_truncation() {
        let color = Color::new(0.999999, 0.999999, 0.999999);
        assert_eq!(color.to_hex(), "#FEFEFE");
        assert_eq!(color.to_rgb_string(), "254, 254, 254");
    }

    #[test]
    fn test_out_of_range() {
        let color = Color::new(2.0, -1.0, Float::NAN);
        assert_eq!(color.to_hex(), "#FF0000");
        assert_eq!(color.to_hsl_string(), "0°, 100%, 50%");
    }

    #[test]
    fn test_checked() -> Result<(), ClassifyError> {
        let color = Color::checked(0.25, 0.5, 0.75, ChannelPolicy::Reject)?;
        assert_eq!(color, Color::new(0.25, 0.5, 0.75));

        let color = Color::checked(Float::NAN, 1.25, 0.5, ChannelPolicy::Clamp)?;
        assert_eq!(color, Color::new(0.0, 1.0, 0.5));

        let result = Color::checked(0.5, 0.5, 1.25, ChannelPolicy::Reject);
        assert_eq!(
            result,
            Err(ClassifyError::ChannelOutOfRange {
                channel: 2,
                value: 1.25
            })
        );
        Ok(())
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        for value in 0..=255_u8 {
            let inverse = 255 - value;
            let mid = value.wrapping_mul(7);
            let color = Color::from_24bit(value, mid, inverse);
            let parsed: Color = color.to_hex().parse()?;
            assert_eq!(parsed.to_24bit(), [value, mid, inverse]);
            assert_eq!(
                color.to_rgb_string(),
                format!("{}, {}, {}", value, mid, inverse)
            );
        }
        Ok(())
    }

    #[test]
    fn test_display() {
        let color = Color::from_24bit(0x0a, 0xbc, 0xde);
        assert_eq!(format!("{}", color), "#0ABCDE");
        assert_eq!(Color::default().to_string(), "#000000");
    }
}
