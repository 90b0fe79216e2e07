//! Emits `<Name>.types.ts`: every message type, response type, and
//! referenced definition of a contract.

use crate::emit::writer::Writer;
use crate::emit::{Artifact, GENERATED_HEADER};
use crate::schema::{ContractSchemas, Schema, TypeField};

pub fn emit(contract: &ContractSchemas) -> Artifact {
    let mut w = Writer::new();
    w.raw(GENERATED_HEADER);
    w.blank();

    for (title, schema) in contract.message_roots() {
        emit_named(&mut w, title, schema);
        w.blank();
    }
    for (title, schema) in &contract.responses {
        emit_named(&mut w, title, schema);
        w.blank();
    }
    for (name, schema) in contract.definitions() {
        emit_named(&mut w, &name, &schema);
        w.blank();
    }

    Artifact {
        filename: format!("{}.types.ts", contract.name),
        source: w.finish(),
    }
}

/// Every type name the types module exports, sorted for stable imports.
pub fn exported_names(contract: &ContractSchemas) -> Vec<String> {
    let mut names: Vec<String> = contract
        .message_roots()
        .iter()
        .map(|(title, _)| title.to_string())
        .collect();
    names.extend(contract.responses.keys().cloned());
    names.extend(contract.definitions().keys().cloned());
    names.sort();
    names.dedup();
    names
}

fn emit_named(w: &mut Writer, name: &str, schema: &Schema) {
    if let Some(description) = &schema.description {
        w.line(format!("/** {} */", description.replace('\n', " ")));
    }

    if schema.is_message_enum() {
        w.open(format!("export type {} =", name));
        let members = schema.union_members();
        for (i, member) in members.iter().enumerate() {
            let terminator = if i + 1 == members.len() { ";" } else { "" };
            if let Some(description) = &member.description {
                w.line(format!("/** {} */", description.replace('\n', " ")));
            }
            w.line(format!("| {}{}", member.ts_type(), terminator));
        }
        w.dedent();
        return;
    }

    if is_plain_object(schema) {
        w.open(format!("export interface {} {{", name));
        for (pname, pschema) in &schema.properties {
            let marker = if schema.required.iter().any(|r| r == pname) {
                ""
            } else {
                "?"
            };
            w.line(format!("{}{}: {};", pname, marker, pschema.ts_type()));
        }
        w.close("}");
        return;
    }

    w.line(format!("export type {} = {};", name, schema.ts_type()));
}

fn is_plain_object(schema: &Schema) -> bool {
    let object_typed = matches!(&schema.ty, Some(TypeField::One(t)) if t == "object");
    object_typed && !schema.properties.is_empty() && schema.enum_values.is_empty()
}
