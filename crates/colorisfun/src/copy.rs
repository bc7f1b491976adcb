//! Copying color representations to the clipboard.
//!
//! The clipboard itself belongs to the platform and is represented by the
//! [`Clipboard`] trait. A [`CopyBuffer`] decides what to copy: after each
//! sample, it copies the configured [`CopyFormat`] if automatic copying is
//! enabled. Explicit copies of a single row always go through.
//!
//! ```
//! # use colorisfun::copy::{Clipboard, CopyBuffer};
//! # use colorisfun::error::CopyError;
//! # use colorisfun::opt::{CopyFormat, Options};
//! # use colorisfun::{rgb, Classifier};
//! #[derive(Default)]
//! struct Pasteboard(Option<String>);
//!
//! impl Clipboard for Pasteboard {
//!     fn set_text(&mut self, text: &str) -> Result<(), CopyError> {
//!         self.0 = Some(text.to_string());
//!         Ok(())
//!     }
//! }
//!
//! let options = Options::with_auto_copy(CopyFormat::Tailwind);
//! let mut buffer = CopyBuffer::new(options, Pasteboard::default());
//! let formatted = Classifier::default().classify(&rgb!(59, 130, 246))?;
//!
//! buffer.on_sample(&formatted)?;
//! assert_eq!(buffer.clipboard().0.as_deref(), Some("blue-500"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
use crate::classify::FormattedColor;
use crate::error::CopyError;
use crate::opt::{CopyFormat, Options};

/// A destination for copied text.
pub trait Clipboard {
    /// Replace the clipboard's contents with the given text.
    fn set_text(&mut self, text: &str) -> Result<(), CopyError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn set_text(&mut self, text: &str) -> Result<(), CopyError> {
        (**self).set_text(text)
    }
}

/// The policy for copying color representations.
#[derive(Debug)]
pub struct CopyBuffer<C> {
    options: Options,
    clipboard: C,
}

impl<C: Clipboard> CopyBuffer<C> {
    /// Create a new copy buffer.
    pub fn new(options: Options, clipboard: C) -> Self {
        Self { options, clipboard }
    }

    /// Access the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Access the clipboard.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Consume this copy buffer and return the clipboard.
    pub fn into_clipboard(self) -> C {
        self.clipboard
    }

    /// Handle a new sample.
    ///
    /// If automatic copying is enabled, this method copies the representation
    /// in the configured format and returns it. Otherwise, it leaves the
    /// clipboard untouched and returns `None`.
    pub fn on_sample<'f>(
        &mut self,
        formatted: &'f FormattedColor,
    ) -> Result<Option<&'f str>, CopyError> {
        if !self.options.auto_copy() {
            return Ok(None);
        }

        let text = formatted.get(self.options.copy_format());
        self.write(text)?;
        Ok(Some(text))
    }

    /// Copy the representation in the given format.
    pub fn copy<'f>(
        &mut self,
        formatted: &'f FormattedColor,
        format: CopyFormat,
    ) -> Result<&'f str, CopyError> {
        let text = formatted.get(format);
        self.write(text)?;
        Ok(text)
    }

    /// Copy the representation for the given row label.
    ///
    /// Labels are matched without regard to ASCII case, so `"hex"` and
    /// `"HEX"` select the same row.
    pub fn copy_label<'f>(
        &mut self,
        formatted: &'f FormattedColor,
        label: &str,
    ) -> Result<&'f str, CopyError> {
        let format: CopyFormat = label
            .parse()
            .map_err(|_| CopyError::UnknownLabel(label.to_string()))?;
        self.copy(formatted, format)
    }

    fn write(&mut self, text: &str) -> Result<(), CopyError> {
        self.clipboard.set_text(text).inspect_err(|error| {
            log::warn!("copying {:?} failed: {}", text, error);
        })
    }
}

// ====================================================================================================================
