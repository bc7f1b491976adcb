//! Utility module with colorisfun's errors.
//!
//! All errors signal integration bugs rather than transient conditions. None
//! of them warrants a retry.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use thiserror::Error;

use crate::Float;

/// An error during classification.
///
/// Both variants amount to an invalid argument: either there is nothing to
/// compare against or a color channel does not fit into unit range.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClassifyError {
    /// The palette for nearest-match classification has no entries.
    #[error("palette should have at least one entry but is empty")]
    EmptyPalette,

    /// A color channel is outside `0..=1` or not a number. The channel index
    /// is zero-based.
    #[error("color channel #{} should be in 0..=1 but is {value}", .channel + 1)]
    ChannelOutOfRange { channel: usize, value: Float },
}

#[cfg(feature = "pyffi")]
impl From<ClassifyError> for PyErr {
    fn from(value: ClassifyError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`.
    #[error("color format should start with `#`")]
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    #[error("color format should contain 3 or 6 ASCII hex digits")]
    UnexpectedCharacters,

    /// A color format with a malformed hexadecimal coordinate, e.g., `#efg`.
    #[error("color format coordinates should be hexadecimal integers but are not")]
    MalformedHex,
}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while building a palette from externalized records.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A palette without entries.
    #[error("palette should have at least one entry but has none")]
    Empty,

    /// A palette with two or more entries of the same name.
    #[error("palette entry names should be unique but `{0}` is not")]
    DuplicateName(String),

    /// A palette entry with a channel outside unit range.
    #[error("palette entry `{name}` should have channels in 0..=1 but has {value}")]
    InvalidChannel { name: String, value: Float },

    /// Malformed JSON.
    #[error("palette records should be valid JSON")]
    Json(#[from] serde_json::Error),
}

// ====================================================================================================================

/// An error while loading options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Malformed JSON, including unknown enumeration values.
    #[error("options should be valid JSON")]
    Json(#[from] serde_json::Error),

    /// A copy format label other than tailwind, hex, rgb, or hsl.
    #[error("copy format should be tailwind, hex, rgb, or hsl but is `{0}`")]
    UnknownCopyFormat(String),
}

// ====================================================================================================================

/// An error while copying a color representation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CopyError {
    /// A row label other than tailwind, hex, rgb, or hsl.
    #[error("row label should be tailwind, hex, rgb, or hsl but is `{0}`")]
    UnknownLabel(String),

    /// The clipboard collaborator failed.
    #[error("could not write to clipboard: {0}")]
    Clipboard(String),
}
