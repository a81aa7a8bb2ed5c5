//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{ConfigAttrs, InlineDoc, extract_doc_comment};
use crate::config::types::type_to_string;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub inline_doc: Option<String>,
    pub default: Option<String>,
    pub skip: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = ConfigAttrs::parse(&field.attrs);
        let doc = extract_doc_comment(&field.attrs);

        // A bare `inline_doc` moves the first doc line to the end of the value.
        let inline_doc = match attrs.inline_doc {
            Some(InlineDoc::Text(text)) => Some(text),
            Some(InlineDoc::FromDoc) => doc
                .as_deref()
                .and_then(|d| d.lines().next())
                .map(|line| line.trim().to_string()),
            None => None,
        };
        let doc = if inline_doc.is_some() { None } else { doc };

        Some(Self {
            name: ident.clone(),
            toml_name: attrs.name.unwrap_or_else(|| ident.to_string()),
            doc,
            inline_doc,
            default: attrs.default,
            skip: attrs.skip,
            sub: attrs.sub,
            ty: field.ty.clone(),
        })
    }

    /// True if the template renders this field from `Self::default()`.
    pub fn uses_runtime_default(&self) -> bool {
        !self.sub
            && self.default.is_none()
            && !type_to_string(&self.ty).starts_with("Option<")
    }

    /// Full dotted path of this field inside `section`.
    pub fn full_path(&self, section: &str) -> String {
        if section.is_empty() {
            self.toml_name.clone()
        } else {
            format!("{}.{}", section, self.toml_name)
        }
    }
}
