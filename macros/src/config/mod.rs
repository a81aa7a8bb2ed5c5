//! Config derive macro - generates FIELDS and template().
//!
//! Combines field path generation and TOML template generation.

mod attr;
mod field;
mod template;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{ConfigAttrs, extract_doc_comment};
use field::FieldInfo;
use template::generate_template_code;
use types::infer_section;

/// Generate Config implementation (FIELDS + template).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section = ConfigAttrs::parse(&input.attrs)
        .section
        .unwrap_or_else(|| infer_section(&name.to_string()));

    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields.iter().filter_map(FieldInfo::from_field).collect();
    let visible: Vec<&FieldInfo> = field_infos.iter().filter(|f| !f.skip).collect();

    let field_defs = visible.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = visible.iter().map(|f| {
        let name = &f.name;
        let full_path = f.full_path(&section);
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    let template_code = generate_template_code(&visible);

    // `default` is only read by fields rendered from their runtime value
    let needs_default = visible.iter().any(|f| f.uses_runtime_default());
    let default_def = if needs_default {
        quote! { let default = Self::default(); }
    } else {
        quote! {}
    };

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Section documentation.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// Generate TOML template for this config section.
            pub fn template() -> String {
                #default_def
                let mut out = String::new();
                #template_code
                out
            }

            /// Generate TOML template with section header.
            pub fn template_with_header() -> String {
                let mut out = String::new();
                for line in Self::TEMPLATE_DOC.lines() {
                    out.push_str("# ");
                    out.push_str(line.trim());
                    out.push('\n');
                }
                let section = Self::TEMPLATE_SECTION;
                if !section.is_empty() {
                    out.push('[');
                    out.push_str(section);
                    out.push_str("]\n");
                }
                out.push_str(&Self::template());
                out
            }
        }
    }
}
