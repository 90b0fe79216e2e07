//! Data model for the JSON-Schema subset emitted by `cosmwasm-schema`,
//! and its mapping into TypeScript type expressions.
//!
//! Only the shapes contract schemas actually produce are modelled: plain
//! scalars, objects with `properties`/`required`, arrays and fixed-length
//! tuples, string enums, `oneOf`/`anyOf` unions (the CosmWasm enum
//! encoding), `allOf` wrappers, and `$ref` into `#/definitions/…`.
//! Unknown keywords (`minimum`, `additionalProperties`, …) are ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

/// `type` keyword: a single type name or a list (e.g. `["string", "null"]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeField {
    One(String),
    Many(Vec<String>),
}

/// `items` keyword: homogeneous array or positional tuple
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Items {
    One(Box<Schema>),
    Tuple(Vec<Schema>),
}

/// One schema node. Root schemas carry `title` and `definitions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
    pub title: Option<String>,
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub ty: Option<TypeField>,
    pub format: Option<String>,

    #[serde(rename = "enum")]
    pub enum_values: Vec<serde_json::Value>,

    pub properties: BTreeMap<String, Schema>,
    pub required: Vec<String>,
    pub items: Option<Items>,

    pub one_of: Vec<Schema>,
    pub any_of: Vec<Schema>,
    pub all_of: Vec<Schema>,

    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    pub definitions: BTreeMap<String, Schema>,
}

/// A named field of an enum variant payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub required: bool,
}

/// One variant of a CosmWasm message enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Schema {
    /// Extract the bare type name from a `#/definitions/Name` reference.
    pub fn ref_name(reference: &str) -> &str {
        reference.rsplit('/').next().unwrap_or(reference)
    }

    /// Whether this schema is a CosmWasm enum (union of variants).
    pub fn is_message_enum(&self) -> bool {
        !self.one_of.is_empty() || !self.any_of.is_empty()
    }

    /// Union members, whichever of `oneOf`/`anyOf` the schema uses.
    pub fn union_members(&self) -> &[Schema] {
        if !self.one_of.is_empty() {
            &self.one_of
        } else {
            &self.any_of
        }
    }

    /// Decompose a message enum into named variants.
    ///
    /// Struct variants arrive as single-property objects; unit variants as
    /// string enums. Members in any other shape are skipped.
    pub fn variants(&self) -> Vec<Variant> {
        let mut variants = Vec::new();
        for member in self.union_members() {
            if !member.enum_values.is_empty() {
                for value in &member.enum_values {
                    if let serde_json::Value::String(name) = value {
                        variants.push(Variant {
                            name: name.clone(),
                            fields: Vec::new(),
                        });
                    }
                }
                continue;
            }

            if member.properties.len() == 1 {
                if let Some((name, payload)) = member.properties.iter().next() {
                    let fields = payload
                        .properties
                        .iter()
                        .map(|(fname, fschema)| Field {
                            name: fname.clone(),
                            ty: fschema.ts_type(),
                            required: payload.required.iter().any(|r| r == fname),
                        })
                        .collect();
                    variants.push(Variant {
                        name: name.clone(),
                        fields,
                    });
                }
            }
        }
        variants
    }

    /// Render this schema as a TypeScript type expression.
    pub fn ts_type(&self) -> String {
        if let Some(reference) = &self.reference {
            return Self::ref_name(reference).to_string();
        }

        if !self.all_of.is_empty() {
            if self.all_of.len() == 1 {
                return self.all_of[0].ts_type();
            }
            let parts: Vec<String> = self.all_of.iter().map(|s| s.ts_type()).collect();
            return parts.join(" & ");
        }

        let union = self.union_members();
        if !union.is_empty() {
            let mut parts: Vec<String> = union.iter().map(|s| s.ts_type()).collect();
            parts.dedup();
            return parts.join(" | ");
        }

        if !self.enum_values.is_empty() {
            let parts: Vec<String> = self
                .enum_values
                .iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => format!("\"{}\"", s),
                    other => other.to_string(),
                })
                .collect();
            return parts.join(" | ");
        }

        match &self.ty {
            Some(TypeField::One(t)) => self.scalar_ts(t),
            Some(TypeField::Many(ts)) => {
                let mut parts: Vec<String> = ts.iter().map(|t| self.scalar_ts(t)).collect();
                parts.dedup();
                parts.join(" | ")
            }
            None => "any".to_string(),
        }
    }

    fn scalar_ts(&self, ty: &str) -> String {
        match ty {
            "string" => "string".to_string(),
            "integer" | "number" => "number".to_string(),
            "boolean" => "boolean".to_string(),
            "null" => "null".to_string(),
            "array" => match &self.items {
                Some(Items::One(inner)) => {
                    let inner_ts = inner.ts_type();
                    if inner_ts.contains(" | ") {
                        format!("({})[]", inner_ts)
                    } else {
                        format!("{}[]", inner_ts)
                    }
                }
                Some(Items::Tuple(members)) => {
                    let parts: Vec<String> = members.iter().map(|m| m.ts_type()).collect();
                    format!("[{}]", parts.join(", "))
                }
                None => "any[]".to_string(),
            },
            "object" => self.object_ts(),
            _ => "any".to_string(),
        }
    }

    fn object_ts(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let fields: Vec<String> = self
            .properties
            .iter()
            .map(|(name, schema)| {
                let marker = if self.required.iter().any(|r| r == name) {
                    ""
                } else {
                    "?"
                };
                format!("{}{}: {}", name, marker, schema.ts_type())
            })
            .collect();
        format!("{{ {} }}", fields.join("; "))
    }
}
