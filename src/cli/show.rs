//! Resolved configuration summary.

use owo_colors::OwoColorize;
use std::fmt::Write;

use blogconf::config::ConfigStore;

const fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Render the summary printed by `blogconf show`.
///
/// `all` lists inactive social links as well, marked with `-`.
pub fn render(config: &ConfigStore, all: bool) -> String {
    let mut out = String::new();
    let site = &config.site;
    let locale = &config.locale;
    let logo = &config.logo;

    // writeln! into a String cannot fail
    let _ = writeln!(out, "{}", "site".bold());
    let _ = writeln!(out, "  title       {}", site.title);
    let _ = writeln!(out, "  author      {}", site.author);
    let _ = writeln!(out, "  website     {}", site.website);
    let _ = writeln!(out, "  profile     {}", site.profile);
    let _ = writeln!(out, "  og image    {}", site.og_image);
    let _ = writeln!(out, "  dark mode   {}", on_off(site.light_and_dark_mode));
    let _ = writeln!(out, "  archives    {}", on_off(site.show_archives));
    let _ = writeln!(
        out,
        "  pagination  {} per index, {} per page",
        site.post_per_index, site.post_per_page
    );
    let _ = writeln!(out, "  scheduled   {} ms", site.scheduled_post_margin);
    match site.edit_link("") {
        Some(url) if site.edit_post.append_file_path => {
            let _ = writeln!(out, "  edit link   {url}/<post path>");
        }
        Some(url) => {
            let _ = writeln!(out, "  edit link   {url}");
        }
        None => {
            let _ = writeln!(out, "  edit link   off");
        }
    }

    let _ = writeln!(out, "{}", "locale".bold());
    let _ = writeln!(out, "  lang        {}", locale.html_lang());
    if locale.uses_environment_default() {
        let _ = writeln!(out, "  lang tags   {}", "(environment default)".dimmed());
    } else {
        let _ = writeln!(out, "  lang tags   {}", locale.lang_tag.join(", "));
    }

    let _ = writeln!(out, "{}", "logo".bold());
    let _ = writeln!(
        out,
        "  {} {} {}x{}",
        if logo.enable { "enabled " } else { "disabled" },
        logo.file_name(),
        logo.width,
        logo.height
    );

    let active = config.active_social_links().count();
    let _ = writeln!(
        out,
        "{} ({} active of {})",
        "socials".bold(),
        active,
        config.socials.len()
    );
    for link in &config.socials {
        if !link.active && !all {
            continue;
        }
        let marker = if link.active { "+" } else { "-" };
        let _ = writeln!(
            out,
            "  {} {:<10} {}  \"{}\"",
            marker,
            link.name.to_string(),
            link.href,
            link.label()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_active_only() {
        let config = ConfigStore::load().unwrap();
        let out = render(&config, false);
        assert!(out.contains("title       TheJsTutorials"));
        assert!(out.contains("4 active of 21"));
        assert!(out.contains("\"TheJsTutorials on Github\""));
        assert!(!out.contains("Facebook"));
        assert!(out.contains("edit link   off"));
        assert!(out.contains("lang tags   en-EN"));
    }

    #[test]
    fn test_render_all_keeps_order() {
        let config = ConfigStore::load().unwrap();
        let out = render(&config, true);
        let github = out.find("+ Github").unwrap();
        let facebook = out.find("- Facebook").unwrap();
        let bluesky = out.find("+ Bluesky").unwrap();
        assert!(github < facebook && facebook < bluesky);
    }

    #[test]
    fn test_render_edit_link() {
        let config = ConfigStore::from_str("[site]\nedit_post_is = true").unwrap();
        let out = render(&config, false);
        assert!(out.contains("/src/content/blog/<post path>"));
    }
}
