//! Configuration utility functions.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::{ConfigDiagnostics, FieldPath};

/// Check that `value` is an absolute `http`/`https` URL with a host.
///
/// Reports at most one error for `field`.
pub fn check_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{}': {}", value, e),
                "use format like https://example.com",
            );
        }
    }
}

/// Check that `value` is a `mailto:` URI with a recipient.
pub fn check_mailto(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) if parsed.scheme() == "mailto" && !parsed.path().is_empty() => {}
        Ok(parsed) if parsed.scheme() == "mailto" => {
            diag.error_with_hint(
                field,
                "mailto URI has no recipient",
                "use format like mailto:you@example.com",
            );
        }
        Ok(parsed) => {
            diag.error_with_hint(
                field,
                format!("scheme '{}' not supported, must be mailto", parsed.scheme()),
                "use format like mailto:you@example.com",
            );
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URI '{}': {}", value, e),
                "use format like mailto:you@example.com",
            );
        }
    }
}

/// BCP-47 shape: language, optional script, optional region.
///
/// `en`, `en-US`, `zh-Hans`, `zh-Hans-CN`, `es-419`.
static LANG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z]{4})?(-([A-Za-z]{2}|[0-9]{3}))?$").unwrap()
});

/// Check if `tag` has the shape of a BCP-47 language tag.
pub fn is_lang_tag(tag: &str) -> bool {
    LANG_TAG.is_match(tag)
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/src/content/  ← cwd
/// /home/user/site/blog.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FIELD: FieldPath = FieldPath::new("site.website");

    fn url_errors(value: &str) -> usize {
        let mut diag = ConfigDiagnostics::new();
        check_http_url(value, FIELD, &mut diag);
        diag.len()
    }

    #[test]
    fn test_http_url() {
        assert_eq!(url_errors("https://thejstutorials.com/"), 0);
        assert_eq!(url_errors("http://localhost:4321/blog"), 0);
        assert_eq!(url_errors("not a url"), 1);
        assert_eq!(url_errors("ftp://example.com"), 1);
        assert_eq!(url_errors("mailto:me@example.com"), 1);
        assert_eq!(url_errors(""), 1);
    }

    #[test]
    fn test_mailto() {
        let check = |value: &str| {
            let mut diag = ConfigDiagnostics::new();
            check_mailto(value, FieldPath::new("socials.href"), &mut diag);
            diag.len()
        };
        assert_eq!(check("mailto:yourmail@gmail.com"), 0);
        assert_eq!(check("mailto:"), 1);
        assert_eq!(check("https://x.com/DevGauravJatt"), 1);
        assert_eq!(check("yourmail@gmail.com"), 1);
    }

    #[test]
    fn test_lang_tag() {
        for tag in ["en", "en-EN", "en-US", "zh-Hans", "zh-Hans-CN", "es-419", "haw"] {
            assert!(is_lang_tag(tag), "{tag} should be accepted");
        }
        for tag in ["", "e", "english", "en_US", "en-", "en-USA1", "12-US"] {
            assert!(!is_lang_tag(tag), "{tag} should be rejected");
        }
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/content/blog");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("blog.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("blog.toml")).unwrap();
        assert_eq!(found, dir.path().join("blog.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file_from(dir.path(), Path::new("no-such-config.toml")).is_none());
    }
}
