//! Configuration types for the formatter

use crate::error::ConfigError;

/// Default maximum content width in bytes
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Break prefix for dash list items
pub const DASH_BREAK: &str = "- ";

/// Break prefix for asterisk list items
pub const STAR_BREAK: &str = "* ";

/// How a candidate line's first byte decides whether it starts new text
///
/// A line that "starts with non-text" never merges into the paragraph above
/// it. Bytes outside ASCII always count as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NonTextRule {
    /// Any ASCII byte outside `A-Z` and `a-z` is non-text
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ascii"))]
    AsciiLetters,
    /// Byte-for-byte compatible with the historical xfmt check, where an
    /// uppercase `Z` is also non-text
    Legacy,
    /// Never break on the first byte
    Off,
}

impl NonTextRule {
    /// Whether `content` starts with a byte this rule treats as non-text
    ///
    /// Empty content is not "non-text"; emptiness is its own break condition.
    pub fn starts_with_non_text(self, content: &[u8]) -> bool {
        let Some(&c) = content.first() else {
            return false;
        };
        match self {
            NonTextRule::AsciiLetters => c.is_ascii() && !c.is_ascii_alphabetic(),
            NonTextRule::Legacy => {
                c < 0x80 && !(b'A'..b'Z').contains(&c) && !c.is_ascii_lowercase()
            }
            NonTextRule::Off => false,
        }
    }

    /// Short lowercase name, as used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            NonTextRule::AsciiLetters => "ascii",
            NonTextRule::Legacy => "legacy",
            NonTextRule::Off => "off",
        }
    }
}

/// Formatter configuration
///
/// Supplied once per run; the core keeps no other state between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Config {
    /// Maximum width of content in bytes, not counting the line prefix
    pub max_width: usize,
    /// Content prefixes that always start a new paragraph
    pub break_prefixes: Vec<String>,
    /// First-byte heuristic for lines that start new text
    pub non_text: NonTextRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            break_prefixes: vec![DASH_BREAK.to_string(), STAR_BREAK.to_string()],
            non_text: NonTextRule::default(),
        }
    }
}

impl Config {
    /// Create a builder starting from the defaults
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the configuration can drive a formatting run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if let Some(index) = self.break_prefixes.iter().position(String::is_empty) {
            return Err(ConfigError::EmptyBreakPrefix { index });
        }
        Ok(())
    }

    /// Whether `content` begins with any configured break prefix
    pub fn starts_with_break(&self, content: &[u8]) -> bool {
        self.break_prefixes
            .iter()
            .any(|prefix| content.starts_with(prefix.as_bytes()))
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum content width
    pub fn max_width(mut self, width: usize) -> Self {
        self.config.max_width = width;
        self
    }

    /// Replace the set of break prefixes
    pub fn break_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.break_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the `"- "` break
    pub fn dash_breaks(self, enabled: bool) -> Self {
        self.toggle_break(DASH_BREAK, enabled)
    }

    /// Enable or disable the `"* "` break
    pub fn star_breaks(self, enabled: bool) -> Self {
        self.toggle_break(STAR_BREAK, enabled)
    }

    /// Set the non-text rule
    pub fn non_text(mut self, rule: NonTextRule) -> Self {
        self.config.non_text = rule;
        self
    }

    fn toggle_break(mut self, prefix: &str, enabled: bool) -> Self {
        let present = self.config.break_prefixes.iter().any(|p| p == prefix);
        if enabled && !present {
            self.config.break_prefixes.push(prefix.to_string());
        } else if !enabled {
            self.config.break_prefixes.retain(|p| p != prefix);
        }
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_width, 80);
        assert_eq!(config.break_prefixes, vec!["- ", "* "]);
        assert_eq!(config.non_text, NonTextRule::AsciiLetters);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_rejects_zero_width() {
        let result = Config::builder().max_width(0).build();
        assert_eq!(result, Err(ConfigError::ZeroWidth));
    }

    #[test]
    fn test_builder_rejects_empty_break_prefix() {
        let result = Config::builder().break_prefixes(["- ", ""]).build();
        assert_eq!(result, Err(ConfigError::EmptyBreakPrefix { index: 1 }));
    }

    #[test]
    fn test_toggle_breaks() {
        let config = Config::builder().dash_breaks(false).build().unwrap();
        assert_eq!(config.break_prefixes, vec!["* "]);

        let config = Config::builder()
            .dash_breaks(false)
            .star_breaks(false)
            .build()
            .unwrap();
        assert!(config.break_prefixes.is_empty());

        // Enabling an already-present break does not duplicate it
        let config = Config::builder().dash_breaks(true).build().unwrap();
        assert_eq!(config.break_prefixes, vec!["- ", "* "]);

        let config = Config::builder()
            .break_prefixes(Vec::<String>::new())
            .star_breaks(true)
            .build()
            .unwrap();
        assert_eq!(config.break_prefixes, vec!["* "]);
    }

    #[test]
    fn test_starts_with_break() {
        let config = Config::default();
        assert!(config.starts_with_break(b"- item"));
        assert!(config.starts_with_break(b"* item"));
        assert!(!config.starts_with_break(b"-item"));
        assert!(!config.starts_with_break(b"item"));
        assert!(!config.starts_with_break(b""));
    }

    #[test]
    fn test_non_text_ascii_letters() {
        let rule = NonTextRule::AsciiLetters;
        assert!(!rule.starts_with_non_text(b"abc"));
        assert!(!rule.starts_with_non_text(b"Zebra"));
        assert!(!rule.starts_with_non_text(b"zebra"));
        assert!(rule.starts_with_non_text(b"1. item"));
        assert!(rule.starts_with_non_text(b"- item"));
        assert!(rule.starts_with_non_text(b"`code`"));
        assert!(!rule.starts_with_non_text(b""));
        // UTF-8 lead bytes are text
        assert!(!rule.starts_with_non_text("étude".as_bytes()));
    }

    #[test]
    fn test_non_text_legacy() {
        let rule = NonTextRule::Legacy;
        assert!(!rule.starts_with_non_text(b"Apple"));
        assert!(!rule.starts_with_non_text(b"Yes"));
        assert!(rule.starts_with_non_text(b"Zebra"));
        assert!(!rule.starts_with_non_text(b"zebra"));
        assert!(rule.starts_with_non_text(b"42"));
        assert!(!rule.starts_with_non_text("über".as_bytes()));
    }

    #[test]
    fn test_non_text_off() {
        let rule = NonTextRule::Off;
        assert!(!rule.starts_with_non_text(b"- item"));
        assert!(!rule.starts_with_non_text(b"42"));
    }

    #[test]
    fn test_non_text_names() {
        assert_eq!(NonTextRule::AsciiLetters.name(), "ascii");
        assert_eq!(NonTextRule::Legacy.name(), "legacy");
        assert_eq!(NonTextRule::Off.name(), "off");
    }
}
