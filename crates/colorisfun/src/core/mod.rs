mod conversion;
mod equality;
mod string;

// conversion
pub(crate) use conversion::{clamp_unit, distance_squared, from_24bit, is_unit, rgb_to_hsl, to_24bit};

// equality
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_coordinates;

// string
pub(crate) use string::{format_hex, format_hsl, format_rgb, parse};
