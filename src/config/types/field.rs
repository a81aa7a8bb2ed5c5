//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors. Paths into arrays of tables (e.g. `socials[2].href`)
/// are built at runtime with [`FieldPath::indexed`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteConfig {
///     pub website: String,
/// }
///
/// // Generated:
/// impl SiteConfig {
///     pub const FIELDS: SiteConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteConfig::FIELDS.website, "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Insert an array index before the last path segment.
    ///
    /// `socials.href` with index `3` becomes `socials[3].href`.
    pub fn indexed(&self, index: usize) -> Self {
        let path = match self.0.rsplit_once('.') {
            Some((table, key)) => format!("{table}[{index}].{key}"),
            None => format!("{}[{index}]", self.0),
        };
        Self(Cow::Owned(path))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        let path = FieldPath::new("socials.href");
        assert_eq!(path.indexed(3).as_str(), "socials[3].href");
        assert_eq!(path.as_str(), "socials.href");
    }

    #[test]
    fn test_indexed_without_segment() {
        assert_eq!(FieldPath::new("socials").indexed(0), "socials[0]");
    }
}
