//! Emits the optional data-fetching integrations: react-query hooks and
//! recoil selector families over the generated query client.

use crate::emit::ident::{camel_case, pascal_case};
use crate::emit::writer::Writer;
use crate::emit::{types, Artifact, GENERATED_HEADER};
use crate::schema::{ContractSchemas, Variant};

pub fn emit_react_query(contract: &ContractSchemas) -> Artifact {
    let name = contract.name.as_str();
    let queries = query_variants(contract);

    let mut w = Writer::new();
    w.raw(GENERATED_HEADER);
    w.blank();
    w.line("import { UseQueryOptions, useQuery } from \"@tanstack/react-query\";");
    let imports = types::exported_names(contract);
    if !imports.is_empty() {
        w.line(format!(
            "import {{ {} }} from \"./{}.types\";",
            imports.join(", "),
            name
        ));
    }
    w.line(format!(
        "import {{ {}QueryClient }} from \"./{}.client\";",
        name, name
    ));
    w.blank();

    w.open(format!(
        "export interface {}ReactQuery<TResponse, TData = TResponse> {{",
        name
    ));
    w.line(format!("client: {}QueryClient;", name));
    w.line("options?: Omit<UseQueryOptions<TResponse, Error, TData>, \"queryKey\" | \"queryFn\">;");
    w.close("}");

    for query in &queries {
        let variant = pascal_case(&query.name);
        let method = camel_case(&query.name);
        let response = contract.response_title_for(&query.name);
        let hook = format!("use{}{}Query", name, variant);
        let props = format!("{}{}Query", name, variant);
        let key = format!("\"{}{}\"", camel_case(name), variant);

        w.blank();
        if query.fields.is_empty() {
            w.line(format!(
                "export interface {}<TData> extends {}ReactQuery<{}, TData> {{}}",
                props, name, response
            ));
            w.open(format!(
                "export function {}<TData = {}>({{ client, options }}: {}<TData>) {{",
                hook, response, props
            ));
            w.line(format!(
                "return useQuery<{}, Error, TData>([{}, client.contractAddress], () => client.{}(), options);",
                response, key, method
            ));
            w.close("}");
        } else {
            let args_ty = crate::emit::object_type(&query.fields);
            w.open(format!(
                "export interface {}<TData> extends {}ReactQuery<{}, TData> {{",
                props, name, response
            ));
            w.line(format!("args: {};", args_ty));
            w.close("}");
            w.open(format!(
                "export function {}<TData = {}>({{ client, args, options }}: {}<TData>) {{",
                hook, response, props
            ));
            w.line(format!(
                "return useQuery<{}, Error, TData>([{}, client.contractAddress, JSON.stringify(args)], () => client.{}(args), options);",
                response, key, method
            ));
            w.close("}");
        }
    }

    Artifact {
        filename: format!("{}.react-query.ts", name),
        source: w.finish(),
    }
}

pub fn emit_recoil(contract: &ContractSchemas) -> Artifact {
    let name = contract.name.as_str();
    let queries = query_variants(contract);

    let mut w = Writer::new();
    w.raw(GENERATED_HEADER);
    w.blank();
    w.line("import { selectorFamily } from \"recoil\";");
    let imports = types::exported_names(contract);
    if !imports.is_empty() {
        w.line(format!(
            "import {{ {} }} from \"./{}.types\";",
            imports.join(", "),
            name
        ));
    }
    w.line(format!(
        "import {{ {}QueryClient }} from \"./{}.client\";",
        name, name
    ));
    w.blank();
    w.open("export type QueryClientParams = {");
    w.line(format!("client: {}QueryClient;", name));
    w.close("};");

    for query in &queries {
        let variant = pascal_case(&query.name);
        let method = camel_case(&query.name);
        let response = contract.response_title_for(&query.name);
        let selector = format!("{}{}Selector", camel_case(name), variant);
        let key = format!("\"{}{}\"", camel_case(name), variant);

        w.blank();
        if query.fields.is_empty() {
            w.open(format!(
                "export const {} = selectorFamily<{}, QueryClientParams>({{",
                selector, response
            ));
            w.line(format!("key: {},", key));
            w.line(format!(
                "get: ({{ client }}) => async () => client.{}(),",
                method
            ));
            w.close("});");
        } else {
            let args_ty = crate::emit::object_type(&query.fields);
            w.open(format!(
                "export const {} = selectorFamily<{}, QueryClientParams & {{ args: {} }}>({{",
                selector, response, args_ty
            ));
            w.line(format!("key: {},", key));
            w.line(format!(
                "get: ({{ client, args }}) => async () => client.{}(args),",
                method
            ));
            w.close("});");
        }
    }

    Artifact {
        filename: format!("{}.recoil.ts", name),
        source: w.finish(),
    }
}

fn query_variants(contract: &ContractSchemas) -> Vec<Variant> {
    contract
        .query
        .as_ref()
        .map(|s| s.variants())
        .unwrap_or_default()
}
