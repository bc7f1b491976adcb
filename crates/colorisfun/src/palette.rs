//! Named reference colors and nearest-match classification.
//!
//! A [`Palette`] is an ordered, non-empty sequence of uniquely named
//! [`PaletteEntry`]s. The built-in [`Palette::tailwind`] borrows the
//! [`TAILWIND_COLORS`] table, which never changes. Other palettes can be
//! loaded from JSON records of the form
//!
//! ```json
//! [{ "name": "blue-500", "r": 0.231, "g": 0.51, "b": 0.965 }]
//! ```
//!
//! with all channels in `0..=1`.
use alloc::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{distance_squared, to_eq_coordinates};
use crate::error::{ClassifyError, PaletteError};
use crate::{Color, Float};

/// A named reference color.
///
/// Entries are validated on construction, including during deserialization:
/// every channel is a number in `0..=1`. Like [`Color`], entries compare
/// channels after normalizing floating point noise.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "PaletteRecord")]
pub struct PaletteEntry {
    name: Cow<'static, str>,
    r: Float,
    g: Float,
    b: Float,
}

/// The unvalidated record form of a palette entry.
#[derive(Deserialize)]
struct PaletteRecord {
    name: String,
    r: Float,
    g: Float,
    b: Float,
}

impl TryFrom<PaletteRecord> for PaletteEntry {
    type Error = PaletteError;

    fn try_from(value: PaletteRecord) -> Result<Self, Self::Error> {
        PaletteEntry::new(value.name, value.r, value.g, value.b)
    }
}

impl PaletteEntry {
    /// Create a new palette entry.
    ///
    /// This function fails if any channel is outside `0..=1`.
    pub fn new<N: Into<String>>(
        name: N,
        r: Float,
        g: Float,
        b: Float,
    ) -> Result<Self, PaletteError> {
        let name = name.into();
        if let Some(value) = [r, g, b]
            .into_iter()
            .find(|value| !(0.0..=1.0).contains(value))
        {
            return Err(PaletteError::InvalidChannel { name, value });
        }

        Ok(Self {
            name: Cow::Owned(name),
            r,
            g,
            b,
        })
    }

    /// Create a new palette entry in a const context. Callers are
    /// responsible for unit-range channels.
    const fn constant(name: &'static str, r: Float, g: Float, b: Float) -> Self {
        Self {
            name: Cow::Borrowed(name),
            r,
            g,
            b,
        }
    }

    /// Get the entry's name, e.g., `"blue-500"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the entry's coordinates.
    pub fn coordinates(&self) -> [Float; 3] {
        [self.r, self.g, self.b]
    }

    /// Get the entry's color.
    pub fn color(&self) -> Color {
        Color::new(self.r, self.g, self.b)
    }
}

impl PartialEq for PaletteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && to_eq_coordinates(&self.coordinates()) == to_eq_coordinates(&other.coordinates())
    }
}

// ====================================================================================================================

/// Find the palette entry closest to the given color.
///
/// This function computes the squared Euclidian distance in RGB between the
/// clamped color and every entry, in order, and returns the entry with the
/// smallest distance. When several entries are equally close, the first one
/// wins. If the palette is empty, this function returns an error.
///
/// ```
/// # use colorisfun::{palette::{nearest_entry, TAILWIND_COLORS}, rgb};
/// let entry = nearest_entry(&rgb!(60, 128, 250), &TAILWIND_COLORS)?;
/// assert_eq!(entry.name(), "blue-500");
/// # Ok::<(), colorisfun::error::ClassifyError>(())
/// ```
pub fn nearest_entry<'p>(
    color: &Color,
    palette: &'p [PaletteEntry],
) -> Result<&'p PaletteEntry, ClassifyError> {
    let origin = color.clamped();
    let mut min_distance = Float::INFINITY;
    let mut min_entry = None;

    for entry in palette {
        let distance = distance_squared(&origin, &entry.coordinates());
        if distance < min_distance {
            min_distance = distance;
            min_entry = Some(entry);
        }
    }

    let entry = min_entry.ok_or(ClassifyError::EmptyPalette)?;
    log::trace!(
        "nearest palette entry to {} is {} at squared distance {}",
        color,
        entry.name(),
        min_distance
    );
    Ok(entry)
}

// ====================================================================================================================

/// An ordered, non-empty sequence of uniquely named colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Cow<'static, [PaletteEntry]>,
}

impl Palette {
    /// Get the built-in Tailwind CSS palette.
    ///
    /// ```
    /// # use colorisfun::Palette;
    /// let palette = Palette::tailwind();
    /// assert_eq!(palette.len(), 242);
    ///
    /// let blue = palette.get("blue-500").map(|entry| entry.color().to_hex());
    /// assert_eq!(blue.as_deref(), Some("#3B82F6"));
    /// ```
    pub fn tailwind() -> Self {
        Self {
            entries: Cow::Borrowed(&TAILWIND_COLORS),
        }
    }

    /// Create a new palette with the given entries.
    ///
    /// This function fails if there are no entries or if two entries share a
    /// name. It preserves the order of entries, which determines the winner
    /// between equally close entries.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut names = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !names.insert(entry.name()) {
                return Err(PaletteError::DuplicateName(entry.name().to_string()));
            }
        }

        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    /// Load a palette from a JSON array of `{name, r, g, b}` records.
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        let entries: Vec<PaletteEntry> = serde_json::from_str(json)?;
        let palette = Self::new(entries)?;
        log::debug!("loaded palette with {} entries", palette.len());
        Ok(palette)
    }

    /// Serialize this palette as a JSON array of `{name, r, g, b}` records.
    pub fn to_json(&self) -> Result<String, PaletteError> {
        Ok(serde_json::to_string(self.entries.as_ref())?)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this palette is empty, which it never is.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an iterator over the entries in order.
    pub fn iter(&self) -> core::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Find the entry closest to the given color.
    ///
    /// See [`nearest_entry`] for details.
    pub fn nearest(&self, color: &Color) -> Result<&PaletteEntry, ClassifyError> {
        nearest_entry(color, &self.entries)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tailwind()
    }
}

impl AsRef<[PaletteEntry]> for Palette {
    fn as_ref(&self) -> &[PaletteEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = core::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ====================================================================================================================

macro_rules! entry {
    ($name:expr, $r:expr, $g:expr, $b:expr) => {
        PaletteEntry::constant(
            $name,
            $r as Float / 255.0,
            $g as Float / 255.0,
            $b as Float / 255.0,
        )
    };
}

/// The Tailwind CSS colors.
///
/// There are 22 families with 11 shades each, from 50 to 950. Families are
/// ordered as in Tailwind's documentation. Note that `zinc-50` and
/// `neutral-50` have the same color, so `neutral-50` never is the nearest
/// entry.
pub static TAILWIND_COLORS: [PaletteEntry; 242] = [
    // Slate
    entry!("slate-50", 248, 250, 252),
    entry!("slate-100", 241, 245, 249),
    entry!("slate-200", 226, 232, 240),
    entry!("slate-300", 203, 213, 225),
    entry!("slate-400", 148, 163, 184),
    entry!("slate-500", 100, 116, 139),
    entry!("slate-600", 71, 85, 105),
    entry!("slate-700", 51, 65, 85),
    entry!("slate-800", 30, 41, 59),
    entry!("slate-900", 15, 23, 42),
    entry!("slate-950", 2, 6, 23),

    // Gray
    entry!("gray-50", 249, 250, 251),
    entry!("gray-100", 243, 244, 246),
    entry!("gray-200", 229, 231, 235),
    entry!("gray-300", 209, 213, 219),
    entry!("gray-400", 156, 163, 175),
    entry!("gray-500", 107, 114, 128),
    entry!("gray-600", 75, 85, 99),
    entry!("gray-700", 55, 65, 81),
    entry!("gray-800", 31, 41, 55),
    entry!("gray-900", 17, 24, 39),
    entry!("gray-950", 3, 7, 18),

    // Zinc
    entry!("zinc-50", 250, 250, 250),
    entry!("zinc-100", 244, 244, 245),
    entry!("zinc-200", 228, 228, 231),
    entry!("zinc-300", 212, 212, 216),
    entry!("zinc-400", 161, 161, 170),
    entry!("zinc-500", 113, 113, 122),
    entry!("zinc-600", 82, 82, 91),
    entry!("zinc-700", 63, 63, 70),
    entry!("zinc-800", 39, 39, 42),
    entry!("zinc-900", 24, 24, 27),
    entry!("zinc-950", 9, 9, 11),

    // Neutral
    entry!("neutral-50", 250, 250, 250),
    entry!("neutral-100", 245, 245, 245),
    entry!("neutral-200", 229, 229, 229),
    entry!("neutral-300", 212, 212, 212),
    entry!("neutral-400", 163, 163, 163),
    entry!("neutral-500", 115, 115, 115),
    entry!("neutral-600", 82, 82, 82),
    entry!("neutral-700", 64, 64, 64),
    entry!("neutral-800", 38, 38, 38),
    entry!("neutral-900", 23, 23, 23),
    entry!("neutral-950", 10, 10, 10),

    // Stone
    entry!("stone-50", 250, 250, 249),
    entry!("stone-100", 245, 245, 244),
    entry!("stone-200", 231, 229, 228),
    entry!("stone-300", 214, 211, 209),
    entry!("stone-400", 168, 162, 158),
    entry!("stone-500", 120, 113, 108),
    entry!("stone-600", 87, 83, 78),
    entry!("stone-700", 68, 64, 60),
    entry!("stone-800", 41, 37, 36),
    entry!("stone-900", 28, 25, 23),
    entry!("stone-950", 12, 10, 9),

    // Red
    entry!("red-50", 254, 242, 242),
    entry!("red-100", 254, 226, 226),
    entry!("red-200", 254, 202, 202),
    entry!("red-300", 252, 165, 165),
    entry!("red-400", 248, 113, 113),
    entry!("red-500", 239, 68, 68),
    entry!("red-600", 220, 38, 38),
    entry!("red-700", 185, 28, 28),
    entry!("red-800", 153, 27, 27),
    entry!("red-900", 127, 29, 29),
    entry!("red-950", 69, 10, 10),

    // Orange
    entry!("orange-50", 255, 247, 237),
    entry!("orange-100", 255, 237, 213),
    entry!("orange-200", 254, 215, 170),
    entry!("orange-300", 253, 186, 116),
    entry!("orange-400", 251, 146, 60),
    entry!("orange-500", 249, 115, 22),
    entry!("orange-600", 234, 88, 12),
    entry!("orange-700", 194, 65, 12),
    entry!("orange-800", 154, 52, 18),
    entry!("orange-900", 124, 45, 18),
    entry!("orange-950", 67, 20, 7),

    // Amber
    entry!("amber-50", 255, 251, 235),
    entry!("amber-100", 254, 243, 199),
    entry!("amber-200", 253, 230, 138),
    entry!("amber-300", 252, 211, 77),
    entry!("amber-400", 251, 191, 36),
    entry!("amber-500", 245, 158, 11),
    entry!("amber-600", 217, 119, 6),
    entry!("amber-700", 180, 83, 9),
    entry!("amber-800", 146, 64, 14),
    entry!("amber-900", 120, 53, 15),
    entry!("amber-950", 69, 26, 3),

    // Yellow
    entry!("yellow-50", 254, 252, 232),
    entry!("yellow-100", 254, 249, 195),
    entry!("yellow-200", 254, 240, 138),
    entry!("yellow-300", 253, 224, 71),
    entry!("yellow-400", 250, 204, 21),
    entry!("yellow-500", 234, 179, 8),
    entry!("yellow-600", 202, 138, 4),
    entry!("yellow-700", 161, 98, 7),
    entry!("yellow-800", 133, 77, 14),
    entry!("yellow-900", 113, 63, 18),
    entry!("yellow-950", 66, 32, 6),

    // Lime
    entry!("lime-50", 247, 254, 231),
    entry!("lime-100", 236, 252, 203),
    entry!("lime-200", 217, 249, 157),
    entry!("lime-300", 190, 242, 100),
    entry!("lime-400", 163, 230, 53),
    entry!("lime-500", 132, 204, 22),
    entry!("lime-600", 101, 163, 13),
    entry!("lime-700", 77, 124, 15),
    entry!("lime-800", 63, 98, 18),
    entry!("lime-900", 54, 83, 20),
    entry!("lime-950", 26, 46, 5),

    // Green
    entry!("green-50", 240, 253, 244),
    entry!("green-100", 220, 252, 231),
    entry!("green-200", 187, 247, 208),
    entry!("green-300", 134, 239, 172),
    entry!("green-400", 74, 222, 128),
    entry!("green-500", 34, 197, 94),
    entry!("green-600", 22, 163, 74),
    entry!("green-700", 21, 128, 61),
    entry!("green-800", 22, 101, 52),
    entry!("green-900", 20, 83, 45),
    entry!("green-950", 5, 46, 22),

    // Emerald
    entry!("emerald-50", 236, 253, 245),
    entry!("emerald-100", 209, 250, 229),
    entry!("emerald-200", 167, 243, 208),
    entry!("emerald-300", 110, 231, 183),
    entry!("emerald-400", 52, 211, 153),
    entry!("emerald-500", 16, 185, 129),
    entry!("emerald-600", 5, 150, 105),
    entry!("emerald-700", 4, 120, 87),
    entry!("emerald-800", 6, 95, 70),
    entry!("emerald-900", 6, 78, 59),
    entry!("emerald-950", 2, 44, 34),

    // Teal
    entry!("teal-50", 240, 253, 250),
    entry!("teal-100", 204, 251, 241),
    entry!("teal-200", 153, 246, 228),
    entry!("teal-300", 94, 234, 212),
    entry!("teal-400", 45, 212, 191),
    entry!("teal-500", 20, 184, 166),
    entry!("teal-600", 13, 148, 136),
    entry!("teal-700", 15, 118, 110),
    entry!("teal-800", 17, 94, 89),
    entry!("teal-900", 19, 78, 74),
    entry!("teal-950", 4, 47, 46),

    // Cyan
    entry!("cyan-50", 236, 254, 255),
    entry!("cyan-100", 207, 250, 254),
    entry!("cyan-200", 165, 243, 252),
    entry!("cyan-300", 103, 232, 249),
    entry!("cyan-400", 34, 211, 238),
    entry!("cyan-500", 6, 182, 212),
    entry!("cyan-600", 8, 145, 178),
    entry!("cyan-700", 14, 116, 144),
    entry!("cyan-800", 21, 94, 117),
    entry!("cyan-900", 22, 78, 99),
    entry!("cyan-950", 8, 51, 68),

    // Sky
    entry!("sky-50", 240, 249, 255),
    entry!("sky-100", 224, 242, 254),
    entry!("sky-200", 186, 230, 253),
    entry!("sky-300", 125, 211, 252),
    entry!("sky-400", 56, 189, 248),
    entry!("sky-500", 14, 165, 233),
    entry!("sky-600", 2, 132, 199),
    entry!("sky-700", 3, 105, 161),
    entry!("sky-800", 7, 89, 133),
    entry!("sky-900", 12, 74, 110),
    entry!("sky-950", 8, 47, 73),

    // Blue
    entry!("blue-50", 239, 246, 255),
    entry!("blue-100", 219, 234, 254),
    entry!("blue-200", 191, 219, 254),
    entry!("blue-300", 147, 197, 253),
    entry!("blue-400", 96, 165, 250),
    entry!("blue-500", 59, 130, 246),
    entry!("blue-600", 37, 99, 235),
    entry!("blue-700", 29, 78, 216),
    entry!("blue-800", 30, 64, 175),
    entry!("blue-900", 30, 58, 138),
    entry!("blue-950", 23, 37, 84),

    // Indigo
    entry!("indigo-50", 238, 242, 255),
    entry!("indigo-100", 224, 231, 255),
    entry!("indigo-200", 199, 210, 254),
    entry!("indigo-300", 165, 180, 252),
    entry!("indigo-400", 129, 140, 248),
    entry!("indigo-500", 99, 102, 241),
    entry!("indigo-600", 79, 70, 229),
    entry!("indigo-700", 67, 56, 202),
    entry!("indigo-800", 55, 48, 163),
    entry!("indigo-900", 49, 46, 129),
    entry!("indigo-950", 30, 27, 75),

    // Violet
    entry!("violet-50", 245, 243, 255),
    entry!("violet-100", 237, 233, 254),
    entry!("violet-200", 221, 214, 254),
    entry!("violet-300", 196, 181, 253),
    entry!("violet-400", 167, 139, 250),
    entry!("violet-500", 139, 92, 246),
    entry!("violet-600", 124, 58, 237),
    entry!("violet-700", 109, 40, 217),
    entry!("violet-800", 91, 33, 182),
    entry!("violet-900", 76, 29, 149),
    entry!("violet-950", 46, 16, 101),

    // Purple
    entry!("purple-50", 250, 245, 255),
    entry!("purple-100", 243, 232, 255),
    entry!("purple-200", 233, 213, 255),
    entry!("purple-300", 216, 180, 254),
    entry!("purple-400", 192, 132, 252),
    entry!("purple-500", 168, 85, 247),
    entry!("purple-600", 147, 51, 234),
    entry!("purple-700", 126, 34, 206),
    entry!("purple-800", 107, 33, 168),
    entry!("purple-900", 88, 28, 135),
    entry!("purple-950", 59, 7, 100),

    // Fuchsia
    entry!("fuchsia-50", 253, 244, 255),
    entry!("fuchsia-100", 250, 232, 255),
    entry!("fuchsia-200", 245, 208, 254),
    entry!("fuchsia-300", 240, 171, 252),
    entry!("fuchsia-400", 232, 121, 249),
    entry!("fuchsia-500", 217, 70, 239),
    entry!("fuchsia-600", 192, 38, 211),
    entry!("fuchsia-700", 162, 28, 175),
    entry!("fuchsia-800", 134, 25, 143),
    entry!("fuchsia-900", 112, 26, 117),
    entry!("fuchsia-950", 74, 4, 78),

    // Pink
    entry!("pink-50", 253, 242, 248),
    entry!("pink-100", 252, 231, 243),
    entry!("pink-200", 251, 207, 232),
    entry!("pink-300", 249, 168, 212),
    entry!("pink-400", 244, 114, 182),
    entry!("pink-500", 236, 72, 153),
    entry!("pink-600", 219, 39, 119),
    entry!("pink-700", 190, 24, 93),
    entry!("pink-800", 157, 23, 77),
    entry!("pink-900", 131, 24, 67),
    entry!("pink-950", 80, 7, 36),

    // Rose
    entry!("rose-50", 255, 241, 242),
    entry!("rose-100", 255, 228, 230),
    entry!("rose-200", 254, 205, 211),
    entry!("rose-300", 253, 164, 175),
    entry!("rose-400", 251, 113, 133),
    entry!("rose-500", 244, 63, 94),
    entry!("rose-600", 225, 29, 72),
    entry!("rose-700", 190, 18, 60),
    entry!("rose-800", 159, 18, 57),
    entry!("rose-900", 136, 19, 55),
    entry!("rose-950", 76, 5, 25),
];

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{nearest_entry, Palette, PaletteEntry, TAILWIND_COLORS};
    use crate::error::{ClassifyError, PaletteError};
    use crate::{rgb, Color};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use test_case::test_case;

    #[test]
    fn test_tailwind_table() {
        let palette = Palette::tailwind();
        assert_eq!(palette.len(), 242);
        assert!(!palette.is_empty());

        let mut names = std::collections::HashSet::new();
        for entry in &palette {
            assert!(names.insert(entry.name()), "duplicate {}", entry.name());
            assert!(entry.coordinates().iter().all(|c| (0.0..=1.0).contains(c)));
        }

        assert_eq!(palette.iter().next().map(PaletteEntry::name), Some("slate-50"));
        assert_eq!(palette.iter().last().map(PaletteEntry::name), Some("rose-950"));
    }

    #[test]
    fn test_exact_member() -> Result<(), ClassifyError> {
        let color = Color::new(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0);
        let palette = Palette::tailwind();
        let entry = palette.nearest(&color)?;
        assert_eq!(entry.name(), "blue-500");
        assert_eq!(color.distance_squared(&entry.color()), 0.0);
        Ok(())
    }

    #[test]
    fn test_every_member_is_its_own_nearest() -> Result<(), ClassifyError> {
        for entry in TAILWIND_COLORS.iter() {
            let nearest = nearest_entry(&entry.color(), &TAILWIND_COLORS)?;
            if entry.name() == "neutral-50" {
                // Same color as zinc-50, which comes first.
                assert_eq!(nearest.name(), "zinc-50");
            } else {
                assert_eq!(nearest.name(), entry.name());
            }
        }
        Ok(())
    }

    #[test_case(rgb!(0, 0, 0), "zinc-950" ; "black")]
    #[test_case(rgb!(255, 255, 255), "zinc-50" ; "white")]
    #[test_case(rgb!(255, 0, 0), "red-600" ; "red")]
    #[test_case(rgb!(0, 255, 0), "green-500" ; "green")]
    #[test_case(rgb!(0, 0, 255), "blue-700" ; "blue")]
    #[test_case(rgb!(250, 250, 250), "zinc-50" ; "tie between zinc and neutral")]
    #[test_case(Color::new(2.0, -1.0, -1.0), "red-600" ; "clamped red")]
    fn test_nearest(color: Color, name: &str) -> Result<(), ClassifyError> {
        assert_eq!(Palette::tailwind().nearest(&color)?.name(), name);
        Ok(())
    }

    #[test]
    fn test_tie_break() -> Result<(), PaletteError> {
        let darker = PaletteEntry::new("darker", 0.25, 0.5, 0.5)?;
        let lighter = PaletteEntry::new("lighter", 0.75, 0.5, 0.5)?;
        let probe = Color::new(0.5, 0.5, 0.5);
        assert_eq!(
            probe.distance_squared(&darker.color()),
            probe.distance_squared(&lighter.color())
        );

        let palette = Palette::new(vec![darker.clone(), lighter.clone()])?;
        assert_eq!(palette.nearest(&probe).map(PaletteEntry::name), Ok("darker"));

        let reversed = Palette::new(vec![lighter, darker])?;
        assert_eq!(reversed.nearest(&probe).map(PaletteEntry::name), Ok("lighter"));
        Ok(())
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            nearest_entry(&Color::default(), &[]),
            Err(ClassifyError::EmptyPalette)
        );
        assert!(matches!(Palette::new(vec![]), Err(PaletteError::Empty)));
        assert!(matches!(Palette::from_json("[]"), Err(PaletteError::Empty)));
    }

    #[test]
    fn test_closure() -> Result<(), ClassifyError> {
        let palette = Palette::tailwind();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..1_000 {
            let color = Color::new(rng.random(), rng.random(), rng.random());
            let entry = palette.nearest(&color)?;
            assert_eq!(palette.get(entry.name()), Some(entry));

            // Nothing else is strictly closer.
            let distance = color.distance_squared(&entry.color());
            assert!(palette
                .iter()
                .all(|other| distance <= color.distance_squared(&other.color())));

            // Deterministic.
            assert_eq!(palette.nearest(&color)?, entry);
        }
        Ok(())
    }

    #[test]
    fn test_json() -> Result<(), PaletteError> {
        let palette = Palette::from_json(
            r#"[
                { "name": "ink", "r": 0.0, "g": 0.0, "b": 0.1 },
                { "name": "paper", "r": 1.0, "g": 1.0, "b": 0.9 }
            ]"#,
        )?;
        assert_eq!(palette.len(), 2);
        assert_eq!(
            palette.get("paper").map(PaletteEntry::coordinates),
            Some([1.0, 1.0, 0.9])
        );
        assert_eq!(Palette::from_json(&palette.to_json()?)?, palette);

        let tailwind = Palette::tailwind();
        let reloaded = Palette::from_json(&tailwind.to_json()?)?;
        assert_eq!(reloaded, tailwind);
        Ok(())
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            Palette::from_json(
                r#"[{ "name": "a", "r": 0, "g": 0, "b": 0 }, { "name": "a", "r": 1, "g": 1, "b": 1 }]"#
            ),
            Err(PaletteError::DuplicateName(name)) if name == "a"
        ));
        assert!(matches!(
            Palette::from_json(r#"[{ "name": "hot", "r": 1.5, "g": 0, "b": 0 }]"#),
            Err(PaletteError::Json(_))
        ));
        assert!(matches!(
            Palette::from_json(r#"[{ "name": "partial", "r": 1 }]"#),
            Err(PaletteError::Json(_))
        ));
        assert!(matches!(
            PaletteEntry::new("hot", 1.5, 0.0, 0.0),
            Err(PaletteError::InvalidChannel { value, .. }) if value == 1.5
        ));
    }
}
