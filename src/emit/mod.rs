//! TypeScript emitters, one per feature toggle.

pub mod bundle;
pub mod client;
pub mod composer;
pub mod hooks;
pub mod ident;
pub mod types;
pub mod writer;

use crate::schema::Field;

/// One generated TypeScript module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory
    pub filename: String,
    pub source: String,
}

/// Header stamped at the top of every generated module
pub const GENERATED_HEADER: &str = "/**\n\
* This file was automatically generated by cwgen.\n\
* DO NOT MODIFY IT BY HAND. Changes will be overwritten\n\
* on the next generation run.\n\
*/";

/// Destructuring pattern for a variant's arguments: `{ a, b }`
pub(crate) fn destructure(fields: &[Field]) -> String {
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    format!("{{ {} }}", names.join(", "))
}

/// Object type annotation for a variant's arguments: `{ a: T; b?: U }`
pub(crate) fn object_type(fields: &[Field]) -> String {
    let parts: Vec<String> = fields
        .iter()
        .map(|f| {
            let marker = if f.required { "" } else { "?" };
            format!("{}{}: {}", f.name, marker, f.ty)
        })
        .collect();
    format!("{{ {} }}", parts.join("; "))
}

/// Contract-call message literal for a variant, built from destructured
/// arguments in scope: `{ update_config: { params } }`
pub(crate) fn msg_literal(name: &str, fields: &[Field]) -> String {
    if fields.is_empty() {
        return format!("{{ {}: {{}} }}", name);
    }
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    format!("{{ {}: {{ {} }} }}", name, names.join(", "))
}
