//! Emits the optional `index.ts` bundle re-exporting every generated module.

use crate::emit::writer::Writer;
use crate::emit::{Artifact, GENERATED_HEADER};

/// `modules` are generated file names without the `.ts` extension, in
/// emission order (e.g. `Wager.types`, `Wager.client`).
pub fn emit(modules: &[String]) -> Artifact {
    let mut w = Writer::new();
    w.raw(GENERATED_HEADER);
    w.blank();
    for module in modules {
        w.line(format!("export * from \"./{}\";", module));
    }

    Artifact {
        filename: "index.ts".to_string(),
        source: w.finish(),
    }
}
