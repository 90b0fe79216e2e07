//! The generation pipeline: validate the request, load every contract's
//! schemas, run the enabled emitters, and write the resulting modules.
//!
//! Execution is a single linear sequence; the first error aborts the run
//! and propagates to the caller. Schemas for every contract are loaded
//! before anything is written, so a failing contract leaves no partial
//! output behind.

use crate::emit::{bundle, client, composer, hooks, types, Artifact};
use crate::error::GenerateError;
use crate::request::{FeatureOptions, GenerationRequest};
use crate::schema::ContractSchemas;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Generate TypeScript bindings for every contract in the request.
///
/// Resolves with no payload once all modules have been written under
/// `request.out_path`.
#[instrument(skip(request), fields(contract_count = request.contracts.len()))]
pub async fn generate(request: &GenerationRequest) -> Result<(), GenerateError> {
    let start = Instant::now();
    request.validate()?;
    info!(out_path = %request.out_path.display(), "Starting generation");

    // Load everything up front; emission only starts once every schema
    // directory has parsed cleanly.
    let mut contracts = Vec::with_capacity(request.contracts.len());
    for spec in &request.contracts {
        contracts.push(ContractSchemas::load(&spec.name, &spec.schema_dir)?);
    }

    tokio::fs::create_dir_all(&request.out_path)
        .await
        .map_err(|source| GenerateError::Write {
            path: request.out_path.clone(),
            source,
        })?;

    let mut modules = Vec::new();
    for contract in &contracts {
        let artifacts = plan_artifacts(contract, &request.options);
        debug!(
            contract = %contract.name,
            artifact_count = artifacts.len(),
            "Planned artifacts"
        );
        for artifact in artifacts {
            write_artifact(request, &artifact).await?;
            if let Some(module) = artifact.filename.strip_suffix(".ts") {
                modules.push(module.to_string());
            }
        }
    }

    if request.options.bundle.enabled {
        write_artifact(request, &bundle::emit(&modules)).await?;
    }

    info!(
        module_count = modules.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Generation complete"
    );
    Ok(())
}

/// Run every enabled emitter for one contract, in a fixed order.
fn plan_artifacts(contract: &ContractSchemas, options: &FeatureOptions) -> Vec<Artifact> {
    let mut artifacts = Vec::new();
    if options.types.enabled {
        artifacts.push(types::emit(contract));
    }
    if options.client.enabled {
        artifacts.push(client::emit(contract));
    }
    if options.message_composer.enabled {
        artifacts.push(composer::emit(contract));
    }
    if options.react_query.enabled {
        artifacts.push(hooks::emit_react_query(contract));
    }
    if options.recoil.enabled {
        artifacts.push(hooks::emit_recoil(contract));
    }
    artifacts
}

async fn write_artifact(
    request: &GenerationRequest,
    artifact: &Artifact,
) -> Result<(), GenerateError> {
    let path = request.out_path.join(&artifact.filename);
    debug!(file = %path.display(), bytes = artifact.source.len(), "Writing module");
    tokio::fs::write(&path, artifact.source.as_bytes())
        .await
        .map_err(|source| GenerateError::Write { path, source })
}
