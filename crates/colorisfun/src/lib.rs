//! # Color Is Fun
//!
//! Colorisfun turns a sampled screen color into the text people actually
//! paste: hashed hexadecimal, comma-separated RGB, HSL, and the name of the
//! nearest [Tailwind CSS](https://tailwindcss.com/docs/colors) color.
//!
//! Sampling the screen, showing the results, and writing to the system
//! clipboard are the job of the surrounding application. This crate provides
//! the pure part in between.
//!
//!
//! ## 1. Overview
//!
//! Colorisfun's main abstractions are:
//!
//!   * [`Color`] is an sRGB color with three [`Float`] coordinates in unit
//!     range. Its methods convert to 24-bit, hexadecimal, RGB, and HSL
//!     representations. Conversion to 24-bit *truncates* coordinates.
//!   * [`Palette`] is an ordered sequence of named colors, with
//!     [`Palette::tailwind`] as the built-in default. Its
//!     [`Palette::nearest`] method finds the closest entry by squared
//!     Euclidian distance in RGB, with the first entry winning ties.
//!   * [`Classifier`] combines a palette with [`Options`](opt::Options) and
//!     produces [`FormattedColor`]s.
//!   * [`CopyBuffer`](copy::CopyBuffer) decides what to copy to a
//!     [`Clipboard`](copy::Clipboard) after each sample.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use colorisfun::{Classifier, Color, error::ClassifyError};
//! let classifier = Classifier::default();
//!
//! // The sampler returns None when the user cancels.
//! let sample = Some(Color::from_24bit(0xef, 0x44, 0x44));
//! let formatted = classifier.classify_sample(sample.as_ref())?;
//!
//! let formatted = formatted.unwrap_or_default();
//! assert_eq!(formatted.hex(), "#EF4444");
//! assert_eq!(formatted.rgb(), "239, 68, 68");
//! assert_eq!(formatted.hsl(), "0°, 84%, 60%");
//! assert_eq!(formatted.nearest_palette_name(), "red-500");
//! # Ok::<(), ClassifyError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Colorisfun supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls colorisfun's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//!
//! ## 4. Logging
//!
//! Colorisfun logs through the [`log`](https://docs.rs/log) facade but never
//! installs a logger. It warns when clamping channels or when a clipboard
//! fails and emits debug and trace records for classification results.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

extern crate alloc;

mod classify;
pub mod copy;
mod core;
pub mod error;
mod object;
pub mod opt;
pub mod palette;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use classify::{Classifier, FormattedColor};
pub use object::Color;
pub use palette::{Palette, PaletteEntry};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Find the name of the Tailwind color nearest to the given color. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
fn nearest_tailwind_name(color: &Color) -> Result<String, error::ClassifyError> {
    Palette::tailwind()
        .nearest(color)
        .map(|entry| entry.name().to_string())
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorisfun(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(nearest_tailwind_name, m)?)?;
    m.add_class::<Color>()?;
    m.add_class::<Classifier>()?;
    m.add_class::<FormattedColor>()?;
    m.add_class::<opt::CopyFormat>()?;
    Ok(())
}
