#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ClassifyError;
use crate::opt::{CopyFormat, Options};
use crate::palette::{Palette, PaletteEntry};
use crate::Color;

/// The text representations of a sampled color.
///
/// A formatted color is a snapshot. It is recomputed for every new sample and
/// replaces the previous one. The [`Default`] instance represents the display
/// before the first sample, with `"None"` as palette name.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "colorisfun"))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormattedColor {
    hex: String,
    rgb: String,
    hsl: String,
    nearest_palette_name: String,
}

impl FormattedColor {
    /// Get the hashed hexadecimal representation, e.g., `#3B82F6`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Get the comma-separated 24-bit representation, e.g., `59, 130, 246`.
    pub fn rgb(&self) -> &str {
        &self.rgb
    }

    /// Get the HSL representation, e.g., `217°, 91%, 59%`.
    pub fn hsl(&self) -> &str {
        &self.hsl
    }

    /// Get the name of the nearest palette entry, e.g., `blue-500`.
    pub fn nearest_palette_name(&self) -> &str {
        &self.nearest_palette_name
    }

    /// Get the representation for the given format.
    pub fn get(&self, format: CopyFormat) -> &str {
        match format {
            CopyFormat::Tailwind => self.nearest_palette_name(),
            CopyFormat::Hex => self.hex(),
            CopyFormat::Rgb => self.rgb(),
            CopyFormat::Hsl => self.hsl(),
        }
    }

    /// Get the labelled representations in display order.
    pub fn rows(&self) -> [(CopyFormat, &str); 4] {
        CopyFormat::all().map(|format| (format, self.get(format)))
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl FormattedColor {
    /// Get the hashed hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    #[getter(hex)]
    pub fn py_hex(&self) -> String {
        self.hex.clone()
    }

    /// Get the comma-separated 24-bit representation. <i
    /// class=python-only>Python only!</i>
    #[getter(rgb)]
    pub fn py_rgb(&self) -> String {
        self.rgb.clone()
    }

    /// Get the HSL representation. <i class=python-only>Python only!</i>
    #[getter(hsl)]
    pub fn py_hsl(&self) -> String {
        self.hsl.clone()
    }

    /// Get the name of the nearest palette entry. <i
    /// class=python-only>Python only!</i>
    #[getter(nearest_palette_name)]
    pub fn py_nearest_palette_name(&self) -> String {
        self.nearest_palette_name.clone()
    }

    /// Get the representation for the given format. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "get")]
    pub fn py_get(&self, format: CopyFormat) -> String {
        self.get(format).to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    pub fn __str__(&self) -> String {
        self.to_string()
    }
}

impl Default for FormattedColor {
    fn default() -> Self {
        Self {
            hex: "#000000".to_string(),
            rgb: "0, 0, 0".to_string(),
            hsl: "0°, 0%, 0%".to_string(),
            nearest_palette_name: "None".to_string(),
        }
    }
}

impl core::fmt::Display for FormattedColor {
    /// Format the representations as one labelled row per line.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, (format, value)) in self.rows().into_iter().enumerate() {
            if 0 < index {
                f.write_str("\n")?;
            }
            write!(f, "{:<8} {}", format.label(), value)?;
        }
        Ok(())
    }
}

// ====================================================================================================================

/// A color classifier.
///
/// A classifier combines a [`Palette`] with [`Options`] and converts sampled
/// colors into their text representations, including the name of the nearest
/// palette entry. It has no mutable state. The same color always produces the
/// same result, and a classifier can be shared between threads.
///
/// Each representation is available on its own, e.g., through
/// [`Classifier::hex`], or all at once through [`Classifier::classify`].
///
/// ```
/// # use colorisfun::{Classifier, Color, error::ClassifyError};
/// let classifier = Classifier::default();
/// let formatted = classifier.classify(&Color::from_24bit(59, 130, 246))?;
///
/// assert_eq!(formatted.hex(), "#3B82F6");
/// assert_eq!(formatted.rgb(), "59, 130, 246");
/// assert_eq!(formatted.hsl(), "217°, 91%, 59%");
/// assert_eq!(formatted.nearest_palette_name(), "blue-500");
/// # Ok::<(), ClassifyError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "colorisfun"))]
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    palette: Palette,
    options: Options,
}

impl Classifier {
    /// Create a new classifier with the given palette and options.
    pub fn new(palette: Palette, options: Options) -> Self {
        Self { palette, options }
    }

    /// Create a new classifier with the given options and the Tailwind
    /// palette.
    pub fn with_options(options: Options) -> Self {
        Self::new(Palette::tailwind(), options)
    }

    /// Access the palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Access the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Apply the channel policy.
    fn admit(&self, color: &Color) -> Result<Color, ClassifyError> {
        let [r, g, b] = *color.as_ref();
        Color::checked(r, g, b, self.options.channel_policy())
    }

    /// Format the color as `#RRGGBB`.
    pub fn hex(&self, color: &Color) -> Result<String, ClassifyError> {
        Ok(self.admit(color)?.to_hex())
    }

    /// Format the color as `R, G, B`.
    pub fn rgb(&self, color: &Color) -> Result<String, ClassifyError> {
        Ok(self.admit(color)?.to_rgb_string())
    }

    /// Format the color as `H°, S%, L%`.
    pub fn hsl(&self, color: &Color) -> Result<String, ClassifyError> {
        Ok(self.admit(color)?.to_hsl_string())
    }

    /// Find the palette entry nearest to the color.
    pub fn nearest(&self, color: &Color) -> Result<&PaletteEntry, ClassifyError> {
        let color = self.admit(color)?;
        self.palette.nearest(&color)
    }

    /// Compute all text representations of the color.
    pub fn classify(&self, color: &Color) -> Result<FormattedColor, ClassifyError> {
        let color = self.admit(color)?;
        let formatted = FormattedColor {
            hex: color.to_hex(),
            rgb: color.to_rgb_string(),
            hsl: color.to_hsl_string(),
            nearest_palette_name: self.palette.nearest(&color)?.name().to_string(),
        };

        log::debug!(
            "classified {:?} as {} / {} / {} / {}",
            color.as_ref(),
            formatted.hex,
            formatted.rgb,
            formatted.hsl,
            formatted.nearest_palette_name
        );
        Ok(formatted)
    }

    /// Classify the outcome of sampling the screen.
    ///
    /// A sampler yields `None` when the user cancels. In that case, there is
    /// nothing to classify and the previous snapshot stays current.
    pub fn classify_sample(
        &self,
        sample: Option<&Color>,
    ) -> Result<Option<FormattedColor>, ClassifyError> {
        let Some(color) = sample else {
            log::debug!("color sampling was cancelled");
            return Ok(None);
        };

        self.classify(color).map(Some)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Classifier {
    /// Create a new classifier with the Tailwind palette and default options.
    #[new]
    pub fn py_new() -> Self {
        Self::default()
    }

    /// Compute all text representations of the color.
    #[pyo3(name = "classify")]
    pub fn py_classify(&self, color: &Color) -> Result<FormattedColor, ClassifyError> {
        self.classify(color)
    }

    /// Find the name of the palette entry nearest to the color.
    #[pyo3(name = "nearest_name")]
    pub fn py_nearest_name(&self, color: &Color) -> Result<String, ClassifyError> {
        self.nearest(color).map(|entry| entry.name().to_string())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Classifier, FormattedColor};
    use crate::error::ClassifyError;
    use crate::opt::{ChannelPolicy, CopyFormat, Options};
    use crate::palette::{Palette, PaletteEntry};
    use crate::{rgb, Color, Float};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_default_snapshot() {
        let formatted = FormattedColor::default();
        assert_eq!(formatted.hex(), "#000000");
        assert_eq!(formatted.rgb(), "0, 0, 0");
        assert_eq!(formatted.hsl(), "0°, 0%, 0%");
        assert_eq!(formatted.nearest_palette_name(), "None");
    }

    #[test]
    fn test_black_and_white() -> Result<(), ClassifyError> {
        let classifier = Classifier::default();

        let black = classifier.classify(&Color::new(0.0, 0.0, 0.0))?;
        assert_eq!(black.hex(), "#000000");
        assert_eq!(black.rgb(), "0, 0, 0");
        assert_eq!(black.hsl(), "0°, 0%, 0%");
        assert_eq!(black.nearest_palette_name(), "zinc-950");

        let white = classifier.classify(&Color::new(1.0, 1.0, 1.0))?;
        assert_eq!(white.hex(), "#FFFFFF");
        assert_eq!(white.rgb(), "255, 255, 255");
        assert_eq!(white.hsl(), "0°, 0%, 100%");
        assert_eq!(white.nearest_palette_name(), "zinc-50");

        let red = classifier.classify(&Color::new(1.0, 0.0, 0.0))?;
        assert_eq!(red.hsl(), "0°, 100%, 50%");
        Ok(())
    }

    #[test]
    fn test_single_representations() -> Result<(), ClassifyError> {
        let classifier = Classifier::default();
        let color = rgb!(59, 130, 246);
        let formatted = classifier.classify(&color)?;

        assert_eq!(classifier.hex(&color)?, formatted.hex());
        assert_eq!(classifier.rgb(&color)?, formatted.rgb());
        assert_eq!(classifier.hsl(&color)?, formatted.hsl());
        assert_eq!(
            classifier.nearest(&color)?.name(),
            formatted.nearest_palette_name()
        );

        assert_eq!(formatted.get(CopyFormat::Tailwind), "blue-500");
        assert_eq!(formatted.get(CopyFormat::Hex), "#3B82F6");
        assert_eq!(formatted.get(CopyFormat::Rgb), "59, 130, 246");
        assert_eq!(formatted.get(CopyFormat::Hsl), "217°, 91%, 59%");
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), ClassifyError> {
        let formatted = Classifier::default().classify(&rgb!(59, 130, 246))?;
        assert_eq!(
            formatted.to_string(),
            "Tailwind blue-500\nHEX      #3B82F6\nRGB      59, 130, 246\nHSL      217°, 91%, 59%"
        );
        Ok(())
    }

    #[test]
    fn test_idempotence() -> Result<(), ClassifyError> {
        let classifier = Classifier::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let color = Color::new(rng.random(), rng.random(), rng.random());
            let first = classifier.classify(&color)?;
            let second = classifier.classify(&color)?;
            assert_eq!(first, second);
        }
        Ok(())
    }

    #[test]
    fn test_channel_policy() -> Result<(), ClassifyError> {
        let color = Color::new(1.5, 0.0, -0.25);

        let clamping = Classifier::default();
        assert_eq!(clamping.hex(&color)?, "#FF0000");
        assert_eq!(clamping.classify(&color)?.nearest_palette_name(), "red-600");

        let rejecting = Classifier::with_options(
            Options::builder()
                .channel_policy(ChannelPolicy::Reject)
                .build(),
        );
        let error = ClassifyError::ChannelOutOfRange {
            channel: 0,
            value: 1.5,
        };
        assert_eq!(rejecting.hex(&color), Err(error.clone()));
        assert_eq!(rejecting.classify(&color), Err(error));
        assert!(rejecting.nearest(&Color::new(0.5, Float::NAN, 0.5)).is_err());
        Ok(())
    }

    #[test]
    fn test_custom_palette() -> Result<(), Box<dyn std::error::Error>> {
        let palette = Palette::new(vec![
            PaletteEntry::new("night", 0.0, 0.0, 0.2)?,
            PaletteEntry::new("day", 1.0, 1.0, 0.8)?,
        ])?;
        let classifier = Classifier::new(palette, Options::default());

        let dusk = classifier.classify(&Color::new(0.3, 0.3, 0.4))?;
        assert_eq!(dusk.nearest_palette_name(), "night");
        let noon = classifier.classify(&Color::new(0.9, 0.9, 0.9))?;
        assert_eq!(noon.nearest_palette_name(), "day");
        Ok(())
    }

    #[test]
    fn test_classify_sample() -> Result<(), ClassifyError> {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify_sample(None)?, None);

        let sample = classifier.classify_sample(Some(&rgb!(239, 68, 68)))?;
        assert_eq!(
            sample.as_ref().map(FormattedColor::nearest_palette_name),
            Some("red-500")
        );
        Ok(())
    }

    #[cfg(feature = "pyffi")]
    #[test]
    fn test_python_accessors() -> Result<(), ClassifyError> {
        let formatted = Classifier::py_new().py_classify(&rgb!(59, 130, 246))?;
        assert_eq!(formatted.py_hex(), "#3B82F6");
        assert_eq!(formatted.py_rgb(), "59, 130, 246");
        assert_eq!(formatted.py_hsl(), "217°, 91%, 59%");
        assert_eq!(formatted.py_nearest_palette_name(), "blue-500");
        assert_eq!(formatted.py_get(CopyFormat::Tailwind), "blue-500");
        assert_eq!(formatted.__str__(), formatted.to_string());

        let defaults = FormattedColor::default();
        assert_eq!(defaults.py_nearest_palette_name(), "None");
        Ok(())
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
        assert_send_sync::<FormattedColor>();
        assert_send_sync::<Palette>();
        assert_send_sync::<Color>();
    }
}
