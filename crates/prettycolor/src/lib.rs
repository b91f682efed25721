//! # Pretty 🌸 Color
//!
//! Prettycolor turns the many textual notations for colors on the web into
//! 24-bit RGB colors with alpha.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Building with the `pyffi` feature enabled adds Python integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Prettycolor's main abstractions are:
//!
//!   * [`Color`] implements **sRGB colors with alpha** by combining three
//!     8-bit channels with a [`Float`] alpha. Its associated functions parse
//!     hashed hexadecimal and functional notation, convert from HSL and HSV,
//!     and format colors again.
//!   * [`CompatibilityLevel`] captures the **syntax of historical standards**,
//!     from the 16 basic keywords and `#RRGGBB` all the way to CSS3 with its
//!     extended keywords and `hsla()`.
//!   * The [`keyword`] module provides the **keyword tables**, i.e., the basic
//!     and extended color keywords as well as the system colors.
//!   * The [`opt`] module defines parsing [`Options`](opt::Options), which
//!     combine a compatibility level with an optional fallback on the
//!     **legacy color value algorithm** used by HTML for attributes such as
//!     `bgcolor`.
//!
//! All parsing entry points but one return an `Option<Color>`, with `None`
//! indicating that the text does not denote a color. The one exception is
//! [`Color as FromStr`](struct.Color.html#impl-FromStr-for-Color), which
//! parses with the syntax of [`CompatibilityLevel::Css3`] and reports why
//! parsing failed with a [`ColorFormatError`](error::ColorFormatError).
//!
//!
//! ## 2. Strict and Legacy Parsing
//!
//! Strict parsing accepts only well-formed notations:
//!
//! ```
//! # use prettycolor::Color;
//! assert_eq!(Color::parse_hex3("#f80"), Some(Color::new(255, 136, 0)));
//! assert_eq!(
//!     Color::parse_functional("hsl(120, 100%, 25%)"),
//!     Some(Color::new(0, 128, 0))
//! );
//! assert_eq!(Color::parse_functional("hsl(120 100% 25%)"), None);
//! ```
//!
//! Legacy parsing, in contrast, accepts nearly everything:
//!
//! ```
//! # use prettycolor::Color;
//! assert_eq!(Color::parse_legacy("chucknorris"), Some(Color::new(192, 0, 0)));
//! assert_eq!(Color::parse_legacy("hsl(120 100% 25%)"), Some(Color::new(0, 0x01, 0x25)));
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Prettycolor supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls prettycolor's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 4. Logging
//!
//! Prettycolor logs through the [`log`](https://docs.rs/log) facade. The
//! legacy algorithm traces its intermediate components, and the rejection of
//! system colors as well as the fallback on the legacy algorithm are logged
//! at debug level. Without a logger installed, logging has no effect.
//!
//!

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

mod core;
pub mod error;
pub mod keyword;
mod legacy;
mod level;
mod object;
pub mod opt;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use level::CompatibilityLevel;
pub use object::Color;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::PyDict;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let modcolor_name = m.name()?;
    let modcolor_name = modcolor_name.to_str()?;
    let modkeyword_name = format!("{}.keyword", modcolor_name);

    // -------------------------------------------------------------------------- color
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<CompatibilityLevel>()?;

    // ------------------------------------------------------------------ color.keyword
    let modkeyword = PyModule::new(m.py(), "keyword")?;
    modkeyword.add("__package__", modcolor_name)?;
    modkeyword.add_function(wrap_pyfunction!(keyword::basic, &modkeyword)?)?;
    modkeyword.add_function(wrap_pyfunction!(keyword::extended, &modkeyword)?)?;
    modkeyword.add_function(wrap_pyfunction!(keyword::is_system_color, &modkeyword)?)?;
    m.add_submodule(&modkeyword)?;

    // Only change __name__ attribute after submodule has been added.
    modkeyword.setattr("__name__", &modkeyword_name)?;

    // -------------------------------------------------------------------- sys.modules
    let py_modules: Bound<'_, PyDict> = PyModule::import(m.py(), "sys")?
        .getattr("modules")?
        .downcast_into()?;
    py_modules.set_item(&modkeyword_name, modkeyword)?;

    Ok(())
}
