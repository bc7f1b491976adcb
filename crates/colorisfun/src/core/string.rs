use crate::error::ColorFormatError;
use crate::Float;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Parse the string into RGB coordinates.
///
/// This function recognizes the three and six digit hashed hexadecimal
/// formats. Before parsing, it trims leading and trailing white space and
/// converts ASCII letters to lowercase. The resulting coordinates are exact
/// multiples of 1/255.
pub(crate) fn parse(s: &str) -> Result<[Float; 3], ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase();
    let [r, g, b] = parse_hashed(lowercase.as_str())?;
    Ok(super::from_24bit(r, g, b))
}

// --------------------------------------------------------------------------------------------------------------------

/// Format 24-bit coordinates as `#RRGGBB` with uppercase digits.
pub(crate) fn format_hex(coordinates: [u8; 3]) -> String {
    let [r, g, b] = coordinates;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Format 24-bit coordinates as comma-separated decimals, e.g., `59, 130, 246`.
pub(crate) fn format_rgb(coordinates: [u8; 3]) -> String {
    let [r, g, b] = coordinates;
    format!("{}, {}, {}", r, g, b)
}

/// Format unit-range hue, saturation, and lightness as degrees and percent.
///
/// Like the 24-bit conversion, each quantity is truncated, not rounded.
pub(crate) fn format_hsl(hsl: &[Float; 3]) -> String {
    let [h, s, l] = *hsl;
    format!(
        "{}°, {}%, {}%",
        (h * 360.0) as u16,
        (s * 100.0) as u8,
        (l * 100.0) as u8
    )
}

// ====================================================================================================================
