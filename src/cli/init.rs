//! Configuration file generation.
//!
//! Writes a commented `blog.toml` holding every built-in value.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::{fs, path::Path};

use blogconf::config::{LocaleConfig, LogoConfig, SiteConfig, SocialLink, default_socials};
use blogconf::log;

/// Wrapper so the catalogue serializes as `[[socials]]` tables.
#[derive(Serialize)]
struct SocialsTable {
    socials: Vec<SocialLink>,
}

/// Generate blog.toml content with comments
pub fn generate_config_template() -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# blogconf configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Every key is optional; omitted keys keep the values shown here.\n\n");

    // [site] and [site.edit_post] sections
    out.push_str(&SiteConfig::template_with_header());
    out.push('\n');

    // [locale] section
    out.push_str(&LocaleConfig::template_with_header());
    out.push('\n');

    // [logo] section
    out.push_str(&LogoConfig::template_with_header());
    out.push('\n');

    // [[socials]] list
    for line in SocialLink::TEMPLATE_DOC.lines() {
        out.push_str("# ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("# Listing any socials entry replaces the whole catalogue below.\n");
    out.push_str("# Omitted link_title values are generated from the site title.\n");
    let socials = toml::to_string(&SocialsTable {
        socials: default_socials(),
    })
    .context("Failed to render social links")?;
    out.push_str(&socials);

    Ok(out)
}

/// Write the template to `path`, or print it when `dry_run` is set.
pub fn write_config(path: &Path, force: bool, dry_run: bool) -> Result<()> {
    let content = generate_config_template()?;

    if dry_run {
        print!("{content}");
        return Ok(());
    }

    if path.exists() && !force {
        bail!(
            "Config file '{}' already exists.\n\
             Use `blogconf init --force` to overwrite it.",
            path.display()
        );
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogconf::config::ConfigStore;
    use tempfile::TempDir;

    #[test]
    fn test_template_loads_to_builtin_values() {
        let template = generate_config_template().unwrap();
        let parsed = ConfigStore::from_str(&template).unwrap();
        assert_eq!(parsed, ConfigStore::load().unwrap());
    }

    #[test]
    fn test_template_sections_in_order() {
        let template = generate_config_template().unwrap();
        let site = template.find("[site]\n").unwrap();
        let locale = template.find("[locale]\n").unwrap();
        let logo = template.find("[logo]\n").unwrap();
        let socials = template.find("[[socials]]").unwrap();
        assert!(site < locale && locale < logo && logo < socials);
        assert_eq!(template.matches("[[socials]]").count(), 21);
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blog.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(write_config(&path, false, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        write_config(&path, true, false).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# blogconf configuration file"));
    }

    #[test]
    fn test_write_config_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blog.toml");
        write_config(&path, false, false).unwrap();
        assert!(ConfigStore::from_path(&path).is_ok());
    }
}
