//! Validated, read-only site configuration for a content-driven blog.
//!
//! The whole configuration is built once, checked, and then only read:
//!
//! ```
//! use blogconf::config::{ConfigStore, Platform};
//!
//! let config = ConfigStore::load().unwrap();
//! assert_eq!(config.site.title, "TheJsTutorials");
//!
//! let active: Vec<_> = config.active_social_links().map(|s| s.name).collect();
//! assert!(active.contains(&Platform::Github));
//! assert!(!active.contains(&Platform::Facebook));
//! ```

pub mod config;
pub mod logger;
