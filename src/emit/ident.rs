//! Identifier case conversion between schema snake_case and TypeScript.

/// Convert a snake_case or kebab-case identifier to PascalCase.
pub fn pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in input.split(|c| c == '_' || c == '-') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars);
        }
    }
    out
}

/// Convert a snake_case or kebab-case identifier to camelCase.
pub fn camel_case(input: &str) -> String {
    let pascal = pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}
