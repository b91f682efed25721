mod conversion;
mod equality;
mod math;
mod string;

// conversion
pub(crate) use conversion::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;

// math
pub(crate) use math::{
    clamp_byte, clamp_unit, normalize_angle, parse_channel_token, parse_hue_token,
    parse_number_token, parse_percent_token,
};

// string
pub(crate) use string::{
    format_alpha, format_hex, match_function, parse_hashed, parse_hex3, parse_hex6,
    parse_hex_digits, trim_whitespace, FunctionMatch,
};
