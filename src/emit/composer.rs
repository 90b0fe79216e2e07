//! Emits `<Name>.message-composer.ts`: helpers that build
//! `MsgExecuteContractEncodeObject` payloads for each execute variant
//! without touching a client.

use crate::emit::ident::camel_case;
use crate::emit::writer::Writer;
use crate::emit::{destructure, msg_literal, object_type, types, Artifact, GENERATED_HEADER};
use crate::schema::{ContractSchemas, Variant};

pub fn emit(contract: &ContractSchemas) -> Artifact {
    let name = contract.name.as_str();
    let executes = contract
        .execute
        .as_ref()
        .map(|s| s.variants())
        .unwrap_or_default();

    let mut w = Writer::new();
    w.raw(GENERATED_HEADER);
    w.blank();
    w.line("import { MsgExecuteContractEncodeObject } from \"@cosmjs/cosmwasm-stargate\";");
    w.line("import { MsgExecuteContract } from \"cosmjs-types/cosmwasm/wasm/v1/tx\";");
    w.line("import { toUtf8 } from \"@cosmjs/encoding\";");
    w.line("import { Coin } from \"@cosmjs/amino\";");
    let imports = types::exported_names(contract);
    if !imports.is_empty() {
        w.line(format!(
            "import {{ {} }} from \"./{}.types\";",
            imports.join(", "),
            name
        ));
    }
    w.blank();

    w.open(format!("export interface {}Message {{", name));
    w.line("sender: string;");
    w.line("contractAddress: string;");
    for execute in &executes {
        let method = camel_case(&execute.name);
        let args = variant_args(execute);
        w.line(format!(
            "{}: ({}funds?: Coin[]) => MsgExecuteContractEncodeObject;",
            method, args
        ));
    }
    w.close("}");
    w.blank();

    w.open(format!(
        "export class {}MessageComposer implements {}Message {{",
        name, name
    ));
    w.line("sender: string;");
    w.line("contractAddress: string;");
    w.blank();
    w.open("constructor(sender: string, contractAddress: string) {");
    w.line("this.sender = sender;");
    w.line("this.contractAddress = contractAddress;");
    w.close("}");

    for execute in &executes {
        let method = camel_case(&execute.name);
        let args = variant_args(execute);
        w.blank();
        w.open(format!(
            "{} = ({}funds?: Coin[]): MsgExecuteContractEncodeObject => {{",
            method, args
        ));
        w.open("return {");
        w.line("typeUrl: \"/cosmwasm.wasm.v1.MsgExecuteContract\",");
        w.open("value: MsgExecuteContract.fromPartial({");
        w.line("sender: this.sender,");
        w.line("contract: this.contractAddress,");
        w.line(format!(
            "msg: toUtf8(JSON.stringify({})),",
            msg_literal(&execute.name, &execute.fields)
        ));
        w.line("funds: funds || []");
        w.close("})");
        w.close("};");
        w.close("};");
    }
    w.close("}");

    Artifact {
        filename: format!("{}.message-composer.ts", name),
        source: w.finish(),
    }
}

fn variant_args(variant: &Variant) -> String {
    if variant.fields.is_empty() {
        String::new()
    } else {
        format!(
            "{}: {}, ",
            destructure(&variant.fields),
            object_type(&variant.fields)
        )
    }
}
