//! Contract schema loading and the JSON-Schema subset model.

mod loader;
mod model;

pub use loader::ContractSchemas;
pub use model::{Field, Items, Schema, TypeField, Variant};
