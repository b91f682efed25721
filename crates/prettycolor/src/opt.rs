//! Helper module with the options for parsing colors.
//!
//! This module provides the options for turning text into colors and the
//! corresponding builder. The options combine a [`CompatibilityLevel`] with an
//! optional fallback to the legacy color value algorithm, which is how HTML
//! treats color attributes such as `bgcolor`.
//!
//!
//! # Example
//!
//! ```
//! # use prettycolor::{Color, CompatibilityLevel};
//! # use prettycolor::opt::Options;
//! let options = Options::builder()
//!     .level(CompatibilityLevel::Css1)
//!     .legacy_fallback(true)
//!     .build();
//!
//! assert_eq!(options.level(), CompatibilityLevel::Css1);
//! assert_eq!(options.parse("#abc"), Some(Color::new(0xaa, 0xbb, 0xcc)));
//! assert_eq!(options.parse("chucknorris"), Some(Color::new(0xc0, 0, 0)));
//! ```

use crate::error::ColorFormatError;
use crate::{legacy, level, Color, CompatibilityLevel};

#[derive(Clone, Debug)]
struct OptionData {
    level: CompatibilityLevel,
    legacy_fallback: bool,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            level: CompatibilityLevel::Css3,
            legacy_fallback: false,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the compatibility level.
    pub fn level(&mut self, level: CompatibilityLevel) -> &mut Self {
        self.0.level = level;
        self
    }

    /// Set whether to fall back on the legacy color value algorithm.
    ///
    /// With the fallback, text that does not parse at the compatibility level
    /// is munged into a color anyways, unless it is empty or `transparent`.
    pub fn legacy_fallback(&mut self, legacy_fallback: bool) -> &mut Self {
        self.0.legacy_fallback = legacy_fallback;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
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

    /// Instantiate the default options but with the legacy fallback enabled.
    pub fn with_legacy_fallback() -> Options {
        Self::builder().legacy_fallback(true).build()
    }

    /// Get the compatibility level.
    pub fn level(&self) -> CompatibilityLevel {
        self.0.level
    }

    /// Determine whether parsing falls back on the legacy algorithm.
    pub fn legacy_fallback(&self) -> bool {
        self.0.legacy_fallback
    }

    /// Parse the text as a color.
    ///
    /// This method first tries the syntax of the compatibility level. If that
    /// fails and the legacy fallback is enabled, it applies the legacy color
    /// value algorithm. A system color is rejected by both, since the legacy
    /// algorithm would otherwise munge its name.
    pub fn parse(&self, text: &str) -> Option<Color> {
        match level::parse(self.0.level, text) {
            Ok(color) => Some(color),
            Err(err) if self.0.legacy_fallback && err != ColorFormatError::NoColor => {
                log::debug!(
                    "falling back on legacy algorithm for {:?} at {}: {}",
                    text,
                    self.0.level,
                    err
                );
                legacy::parse(text)
            }
            Err(_) => None,
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Options;
    use crate::{Color, CompatibilityLevel};

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.level(), CompatibilityLevel::Css3);
        assert!(!options.legacy_fallback());
        assert_eq!(options.parse("cornflowerblue"), Some(Color::new(100, 149, 237)));
        assert_eq!(options.parse("chucknorris"), None);
        assert_eq!(options.parse("transparent"), Some(Color::new(0, 0, 0).with_alpha(0.0)));
    }

    #[test]
    fn test_builder() {
        let mut builder = Options::builder();
        builder.level(CompatibilityLevel::Basic);
        let strict = builder.build();
        let lenient = builder.legacy_fallback(true).build();

        assert_eq!(strict.level(), CompatibilityLevel::Basic);
        assert!(!strict.legacy_fallback());
        assert_eq!(lenient.level(), CompatibilityLevel::Basic);
        assert!(lenient.legacy_fallback());

        assert_eq!(strict.parse("#abc"), None);
        assert_eq!(lenient.parse("#abc"), Some(Color::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(strict.parse("silver"), lenient.parse("silver"));
    }

    #[test]
    fn test_legacy_fallback() {
        let options = Options::with_legacy_fallback();
        assert_eq!(options.parse("chucknorris"), Some(Color::new(0xc0, 0, 0)));
        assert_eq!(options.parse("rgb(255, 0, 0)"), Some(Color::new(255, 0, 0)));
        assert_eq!(options.parse("hsv(0, 100%, 100%)"), Some(Color::new(0, 0x10, 0x10)));
        assert_eq!(options.parse("buttonface"), None);
        assert_eq!(options.parse(""), None);
        assert_eq!(options.parse("   "), Some(Color::new(0, 0, 0)));
    }
}
