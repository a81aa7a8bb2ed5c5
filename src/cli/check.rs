//! Configuration check command.

use std::path::Path;

use blogconf::config::ConfigStore;
use blogconf::{debug, log};

/// Summarize a config that passed validation.
///
/// `source` is the file it came from, `None` for the built-in values.
pub fn report(config: &ConfigStore, source: Option<&Path>) {
    match source {
        Some(path) => log!("check"; "{} is valid", path.display()),
        None => log!("check"; "built-in configuration is valid"),
    }

    log!(
        "check";
        "site '{}', {} social links ({} active)",
        config.site.title,
        config.socials.len(),
        config.active_social_links().count()
    );

    for link in config.active_social_links() {
        debug!("check"; "{} -> {}", link.name, link.href);
    }
}
