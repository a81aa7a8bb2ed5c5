//! Proc macros for blogconf.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "logo")]
//! /// Header logo settings.
//! pub struct LogoConfig {
//!     /// Show the logo image instead of the site title.
//!     #[config(inline_doc)]
//!     pub enable: bool,
//!
//!     /// Logo width in pixels.
//!     #[config(default = "216")]
//!     pub width: u32,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - LogoConfig::FIELDS.width -> FieldPath("logo.width")
//! // - LogoConfig::template() -> TOML string with comments
//! // - LogoConfig::template_with_header() -> with [logo] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(sub)]` - Nested section, rendered with its own header
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc)]` / `#[config(inline_doc = "x")]` - Trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `LocaleConfig` → `locale`
//! - `EditPostConfig` → `edit_post`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
