//! Cwgen: TypeScript client bindings from CosmWasm contract schemas
//!
//! Reads the JSON-schema artifacts a contract exports and emits typed
//! TypeScript modules: type declarations, query/signing clients, message
//! composers, and optional data-fetching integrations, selected by
//! per-feature toggles on a [`request::GenerationRequest`].

pub mod emit;
pub mod error;
pub mod generate;
pub mod logging;
pub mod request;
pub mod schema;
