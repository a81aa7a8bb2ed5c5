//! Attribute parsing helpers for Config derive macro.

use syn::{Attribute, Lit, Meta};

/// Everything that can appear inside `#[config(...)]`.
#[derive(Debug, Default)]
pub struct ConfigAttrs {
    pub section: Option<String>,
    pub name: Option<String>,
    pub default: Option<String>,
    pub inline_doc: Option<InlineDoc>,
    pub skip: bool,
    pub sub: bool,
}

/// `inline_doc` either reuses the doc comment or carries its own text.
#[derive(Debug)]
pub enum InlineDoc {
    FromDoc,
    Text(String),
}

impl ConfigAttrs {
    /// Parse all `#[config(...)]` attributes on an item.
    ///
    /// Unknown keys are consumed and ignored so that their position never
    /// hides a known key behind them.
    pub fn parse(attrs: &[Attribute]) -> Self {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("config") {
                continue;
            }
            let _ = attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .map(ToString::to_string)
                    .unwrap_or_default();

                let value = if meta.input.peek(syn::Token![=]) {
                    let lit: Lit = meta.value()?.parse()?;
                    match lit {
                        Lit::Str(s) => Some(s.value()),
                        Lit::Int(i) => Some(i.base10_digits().to_string()),
                        Lit::Bool(b) => Some(b.value.to_string()),
                        _ => None,
                    }
                } else {
                    None
                };

                match key.as_str() {
                    "section" => out.section = value,
                    "name" => out.name = value,
                    "default" => out.default = value,
                    "inline_doc" => {
                        out.inline_doc = Some(value.map_or(InlineDoc::FromDoc, InlineDoc::Text));
                    }
                    "skip" => out.skip = true,
                    "sub" => out.sub = true,
                    _ => {}
                }
                Ok(())
            });
        }

        out
    }
}

/// Extract doc comment from #[doc = "..."] attributes.
pub fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(s) = &expr_lit.lit
            {
                return Some(s.value());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}
