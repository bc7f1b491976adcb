//! Helper module with the options for classifying and copying colors.
//!
//! This module provides the options for a [`Classifier`](crate::Classifier)
//! and [`CopyBuffer`](crate::copy::CopyBuffer) as well as the corresponding
//! builder. Options can also be loaded from JSON, with all fields optional.
//!
//!
//! # Example
//!
//! ```
//! # use colorisfun::opt::{ChannelPolicy, CopyFormat, Options};
//! let options = Options::builder()
//!     .copy_format(CopyFormat::Hsl)
//!     .auto_copy(true)
//!     .build();
//!
//! assert_eq!(options.copy_format(), CopyFormat::Hsl);
//! assert!(options.auto_copy());
//! assert_eq!(options.channel_policy(), ChannelPolicy::Clamp);
//!
//! let same = Options::from_json(r#"{ "copy_format": "hsl", "auto_copy": true }"#)?;
//! assert_eq!(same, options);
//! # Ok::<(), colorisfun::error::OptionsError>(())
//! ```
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// The treatment of color channels outside unit range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelPolicy {
    /// Clamp to `0..=1` and log a warning.
    #[default]
    Clamp,
    /// Fail with [`ClassifyError::ChannelOutOfRange`](crate::error::ClassifyError).
    Reject,
}

/// A color representation shown to and copied for users.
///
/// The variants are ordered as the rows of a picker's display, with the
/// palette name first.
#[cfg_attr(
    feature = "pyffi",
    pyo3::pyclass(eq, eq_int, frozen, hash, module = "colorisfun")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    Tailwind,
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl CopyFormat {
    /// Get all copy formats in display order.
    pub const fn all() -> [CopyFormat; 4] {
        [Self::Tailwind, Self::Hex, Self::Rgb, Self::Hsl]
    }

    /// Get this format's row label, e.g., `"HEX"`.
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::Tailwind => "Tailwind",
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        }
    }
}

impl FromStr for CopyFormat {
    type Err = OptionsError;

    /// Parse a copy format from its label.
    ///
    /// The comparison ignores ASCII case as well as surrounding white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::all()
            .into_iter()
            .find(|format| format.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| OptionsError::UnknownCopyFormat(s.to_string()))
    }
}

impl core::fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
struct OptionData {
    channel_policy: ChannelPolicy,
    copy_format: CopyFormat,
    auto_copy: bool,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            channel_policy: ChannelPolicy::Clamp,
            copy_format: CopyFormat::Hex,
            auto_copy: false,
        }
    }
}

impl Default for OptionData {
    fn default() -> Self {
        Self::new()
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the policy for out-of-range color channels.
    pub fn channel_policy(&mut self, policy: ChannelPolicy) -> &mut Self {
        self.0.channel_policy = policy;
        self
    }

    /// Set the format copied automatically after each sample.
    pub fn copy_format(&mut self, format: CopyFormat) -> &mut Self {
        self.0.copy_format = format;
        self
    }

    /// Enable or disable automatic copying after each sample.
    pub fn auto_copy(&mut self, enabled: bool) -> &mut Self {
        self.0.auto_copy = enabled;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with automatic copying of the
    /// given format enabled.
    pub fn with_auto_copy(format: CopyFormat) -> Options {
        Self::builder().copy_format(format).auto_copy(true).build()
    }

    /// Load options from a JSON object.
    ///
    /// Missing fields take on their default values. Unknown fields and
    /// unknown enumeration values are errors.
    pub fn from_json(json: &str) -> Result<Options, OptionsError> {
        let data: OptionData = serde_json::from_str(json)?;
        log::debug!("loaded options {:?}", data);
        Ok(Options(data))
    }

    /// Serialize these options as a JSON object.
    pub fn to_json(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Get the policy for out-of-range color channels.
    pub fn channel_policy(&self) -> ChannelPolicy {
        self.0.channel_policy
    }

    /// Get the format copied automatically after each sample.
    pub fn copy_format(&self) -> CopyFormat {
        self.0.copy_format
    }

    /// Determine whether automatic copying is enabled.
    pub fn auto_copy(&self) -> bool {
        self.0.auto_copy
    }
}

// ====================================================================================================================
