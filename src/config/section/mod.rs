//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blog.toml`:
//!
//! | Module   | TOML Section   | Purpose                                   |
//! |----------|----------------|-------------------------------------------|
//! | `site`   | `[site]`       | Metadata, pagination, toggles, edit link  |
//! | `locale` | `[locale]`     | Page language and locale tags             |
//! | `logo`   | `[logo]`       | Header logo image                         |
//! | `social` | `[[socials]]`  | Ordered social profile links              |

mod locale;
mod logo;
pub mod site;
mod social;

pub use locale::{DEFAULT_LANG, LocaleConfig};
pub use logo::LogoConfig;
pub use site::{EditPostConfig, SiteConfig};
pub use social::{Platform, SocialLink, default_socials, label_for, validate_socials};
