//! Generation request: the configuration surface of the generator.
//!
//! A request names the contracts to generate bindings for, the output
//! directory, and a per-feature toggle map. It is constructed once and
//! passed by shared reference to [`crate::generate::generate`]; nothing
//! mutates it afterwards. Requests can also be loaded from a TOML or JSON
//! file whose keys mirror the camelCase layout of ts-codegen configs.

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single contract to generate bindings for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSpec {
    /// Contract name, used as the basename of every emitted module
    pub name: String,

    /// Directory holding the contract's JSON-schema artifacts
    #[serde(alias = "dir")]
    pub schema_dir: PathBuf,
}

/// A single feature toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    #[serde(default)]
    pub enabled: bool,
}

impl Toggle {
    pub const ON: Toggle = Toggle { enabled: true };
    pub const OFF: Toggle = Toggle { enabled: false };
}

/// Per-feature toggle map selecting which artifact categories are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureOptions {
    /// Re-exporting `index.ts` bundle
    #[serde(default)]
    pub bundle: Toggle,

    /// Type declarations (`<Name>.types.ts`)
    #[serde(default)]
    pub types: Toggle,

    /// Query/signing client wrappers (`<Name>.client.ts`)
    #[serde(default)]
    pub client: Toggle,

    /// Data-fetching hooks (`<Name>.react-query.ts`)
    #[serde(default)]
    pub react_query: Toggle,

    /// State-management selectors (`<Name>.recoil.ts`)
    #[serde(default)]
    pub recoil: Toggle,

    /// Message-composer helpers (`<Name>.message-composer.ts`)
    #[serde(default)]
    pub message_composer: Toggle,
}

/// Everything the generator needs for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Contracts to generate bindings for; must be non-empty
    pub contracts: Vec<ContractSpec>,

    /// Directory the emitted modules are written to
    pub out_path: PathBuf,

    /// Feature toggle map
    #[serde(default)]
    pub options: FeatureOptions,
}

impl GenerationRequest {
    /// Check request invariants before generation runs.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.contracts.is_empty() {
            return Err(GenerateError::EmptyContracts);
        }
        Ok(())
    }

    /// Load a request from a TOML or JSON file, selected by extension.
    pub fn from_file(path: &Path) -> Result<Self, GenerateError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GenerateError::Config(format!("Failed to read {:?}: {}", path, e)))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&raw)
                .map_err(|e| GenerateError::Config(format!("Invalid TOML in {:?}: {}", path, e))),
            Some("json") => serde_json::from_str(&raw)
                .map_err(|e| GenerateError::Config(format!("Invalid JSON in {:?}: {}", path, e))),
            _ => Err(GenerateError::Config(format!(
                "Unsupported request file format: {:?}",
                path
            ))),
        }
    }
}
