//! Cwgen binary
//!
//! Generates TypeScript bindings for the Wager contract from the schema
//! directory next to the invocation, mirroring the project's checked-in
//! generation config. Takes no flags; failures propagate out of `main`
//! and exit non-zero.

use anyhow::Result;
use cwgen::generate::generate;
use cwgen::logging::init_logging;
use cwgen::request::{ContractSpec, FeatureOptions, GenerationRequest, Toggle};

fn wager_request() -> GenerationRequest {
    GenerationRequest {
        contracts: vec![ContractSpec {
            name: "Wager".to_string(),
            schema_dir: "../schema".into(),
        }],
        out_path: "./types/".into(),
        options: FeatureOptions {
            bundle: Toggle::OFF,
            types: Toggle::ON,
            client: Toggle::ON,
            react_query: Toggle::OFF,
            recoil: Toggle::OFF,
            message_composer: Toggle::ON,
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(None)?;

    generate(&wager_request()).await?;
    println!("✨ all done!");
    Ok(())
}
