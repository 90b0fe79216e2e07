//! Emits `<Name>.client.ts`: a read-only query client over
//! `CosmWasmClient` and a signing client over `SigningCosmWasmClient`,
//! one camelCase method per message variant.

use crate::emit::ident::camel_case;
use crate::emit::writer::Writer;
use crate::emit::{destructure, msg_literal, object_type, types, Artifact, GENERATED_HEADER};
use crate::schema::{ContractSchemas, Variant};

pub fn emit(contract: &ContractSchemas) -> Artifact {
    let name = contract.name.as_str();
    let queries = contract
        .query
        .as_ref()
        .map(|s| s.variants())
        .unwrap_or_default();
    let executes = contract
        .execute
        .as_ref()
        .map(|s| s.variants())
        .unwrap_or_default();

    let mut w = Writer::new();
    w.raw(GENERATED_HEADER);
    w.blank();
    w.line("import { CosmWasmClient, ExecuteResult, SigningCosmWasmClient } from \"@cosmjs/cosmwasm-stargate\";");
    w.line("import { Coin, StdFee } from \"@cosmjs/amino\";");
    let imports = types::exported_names(contract);
    if !imports.is_empty() {
        w.line(format!(
            "import {{ {} }} from \"./{}.types\";",
            imports.join(", "),
            name
        ));
    }
    w.blank();

    emit_read_only(&mut w, contract, name, &queries);

    if !executes.is_empty() {
        w.blank();
        emit_signing(&mut w, name, &executes);
    }

    Artifact {
        filename: format!("{}.client.ts", name),
        source: w.finish(),
    }
}

fn emit_read_only(w: &mut Writer, contract: &ContractSchemas, name: &str, queries: &[Variant]) {
    w.open(format!("export interface {}ReadOnlyInterface {{", name));
    w.line("contractAddress: string;");
    for query in queries {
        let method = camel_case(&query.name);
        let response = contract.response_title_for(&query.name);
        if query.fields.is_empty() {
            w.line(format!("{}: () => Promise<{}>;", method, response));
        } else {
            w.line(format!(
                "{}: ({}: {}) => Promise<{}>;",
                method,
                destructure(&query.fields),
                object_type(&query.fields),
                response
            ));
        }
    }
    w.close("}");

    w.open(format!(
        "export class {}QueryClient implements {}ReadOnlyInterface {{",
        name, name
    ));
    w.line("client: CosmWasmClient;");
    w.line("contractAddress: string;");
    w.blank();
    w.open("constructor(client: CosmWasmClient, contractAddress: string) {");
    w.line("this.client = client;");
    w.line("this.contractAddress = contractAddress;");
    w.close("}");

    for query in queries {
        let method = camel_case(&query.name);
        let response = contract.response_title_for(&query.name);
        w.blank();
        if query.fields.is_empty() {
            w.open(format!("{} = async (): Promise<{}> => {{", method, response));
        } else {
            w.open(format!(
                "{} = async ({}: {}): Promise<{}> => {{",
                method,
                destructure(&query.fields),
                object_type(&query.fields),
                response
            ));
        }
        w.line(format!(
            "return this.client.queryContractSmart(this.contractAddress, {});",
            msg_literal(&query.name, &query.fields)
        ));
        w.close("};");
    }
    w.close("}");
}

fn emit_signing(w: &mut Writer, name: &str, executes: &[Variant]) {
    w.open(format!(
        "export interface {}Interface extends {}ReadOnlyInterface {{",
        name, name
    ));
    w.line("sender: string;");
    for execute in executes {
        let method = camel_case(&execute.name);
        let args = if execute.fields.is_empty() {
            String::new()
        } else {
            format!(
                "{}: {}, ",
                destructure(&execute.fields),
                object_type(&execute.fields)
            )
        };
        w.line(format!(
            "{}: ({}fee?: number | StdFee | \"auto\", memo?: string, funds?: Coin[]) => Promise<ExecuteResult>;",
            method, args
        ));
    }
    w.close("}");

    w.open(format!(
        "export class {}Client extends {}QueryClient implements {}Interface {{",
        name, name, name
    ));
    w.line("client: SigningCosmWasmClient;");
    w.line("sender: string;");
    w.blank();
    w.open("constructor(client: SigningCosmWasmClient, sender: string, contractAddress: string) {");
    w.line("super(client, contractAddress);");
    w.line("this.client = client;");
    w.line("this.sender = sender;");
    w.close("}");

    for execute in executes {
        let method = camel_case(&execute.name);
        let args = if execute.fields.is_empty() {
            String::new()
        } else {
            format!(
                "{}: {}, ",
                destructure(&execute.fields),
                object_type(&execute.fields)
            )
        };
        w.blank();
        w.open(format!(
            "{} = async ({}fee: number | StdFee | \"auto\" = \"auto\", memo?: string, funds?: Coin[]): Promise<ExecuteResult> => {{",
            method, args
        ));
        w.line(format!(
            "return await this.client.execute(this.sender, this.contractAddress, {}, fee, memo, funds);",
            msg_literal(&execute.name, &execute.fields)
        ));
        w.close("};");
    }
    w.close("}");
}
