//! Loads a contract's schema directory and classifies each file by title.

use crate::emit::ident::pascal_case;
use crate::error::SchemaError;
use crate::schema::model::Schema;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Every schema artifact of one contract, classified by role
#[derive(Debug, Clone)]
pub struct ContractSchemas {
    /// Contract name, used as the basename of emitted modules
    pub name: String,
    pub instantiate: Option<Schema>,
    pub execute: Option<Schema>,
    pub query: Option<Schema>,
    pub migrate: Option<Schema>,
    /// Auxiliary schemas (query responses and standalone types) by title
    pub responses: BTreeMap<String, Schema>,
}

impl ContractSchemas {
    /// Load every `*.json` schema at the top level of `dir`.
    ///
    /// Files are visited in name order so downstream emission stays
    /// deterministic regardless of filesystem iteration order.
    pub fn load(name: &str, dir: &Path) -> Result<Self, SchemaError> {
        if !dir.is_dir() {
            return Err(SchemaError::DirNotFound(dir.to_path_buf()));
        }

        let mut contract = ContractSchemas {
            name: name.to_string(),
            instantiate: None,
            execute: None,
            query: None,
            migrate: None,
            responses: BTreeMap::new(),
        };
        let mut loaded = 0usize;

        for entry in WalkDir::new(dir).max_depth(1).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let raw = std::fs::read_to_string(path)?;
            let schema: Schema = serde_json::from_str(&raw).map_err(|source| {
                SchemaError::InvalidJson {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            let title = schema
                .title
                .clone()
                .ok_or_else(|| SchemaError::MissingTitle(path.to_path_buf()))?;
            debug!(file = %path.display(), title = %title, "Loaded schema");

            match title.as_str() {
                "InstantiateMsg" => contract.instantiate = Some(schema),
                "ExecuteMsg" => contract.execute = Some(schema),
                "QueryMsg" => contract.query = Some(schema),
                "MigrateMsg" => contract.migrate = Some(schema),
                _ => {
                    contract.responses.insert(title, schema);
                }
            }
            loaded += 1;
        }

        if loaded == 0 {
            return Err(SchemaError::NoSchemas(dir.to_path_buf()));
        }

        info!(
            contract = %contract.name,
            schema_count = loaded,
            "Loaded contract schemas"
        );
        Ok(contract)
    }

    /// Message roots in a fixed emission order, paired with their titles.
    pub fn message_roots(&self) -> Vec<(&'static str, &Schema)> {
        let mut roots = Vec::new();
        if let Some(s) = &self.instantiate {
            roots.push(("InstantiateMsg", s));
        }
        if let Some(s) = &self.execute {
            roots.push(("ExecuteMsg", s));
        }
        if let Some(s) = &self.query {
            roots.push(("QueryMsg", s));
        }
        if let Some(s) = &self.migrate {
            roots.push(("MigrateMsg", s));
        }
        roots
    }

    /// Definitions merged across every loaded schema, deduplicated by name.
    ///
    /// cosmwasm-schema repeats identical definitions in each file that
    /// references them, so first-wins is sufficient.
    pub fn definitions(&self) -> BTreeMap<String, Schema> {
        let mut defs = BTreeMap::new();
        for (_, root) in self.message_roots() {
            for (name, schema) in &root.definitions {
                defs.entry(name.clone()).or_insert_with(|| schema.clone());
            }
        }
        for root in self.responses.values() {
            for (name, schema) in &root.definitions {
                defs.entry(name.clone()).or_insert_with(|| schema.clone());
            }
        }
        defs
    }

    /// Resolve the response type for a query variant by the
    /// `QueryResponses` naming convention (`token_status` →
    /// `TokenStatusResponse`), falling back to `any`.
    pub fn response_title_for(&self, variant: &str) -> String {
        let candidate = format!("{}Response", pascal_case(variant));
        if self.responses.contains_key(&candidate) {
            candidate
        } else {
            "any".to_string()
        }
    }
}
