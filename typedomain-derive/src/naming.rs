//! Identifier helpers shared by the derives.

use proc_macro2::Span;
use syn::Ident;

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
pub fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

/// The snake-case identifier for a variant, as a raw identifier when the
/// name is a keyword (`Type` -> `r#type`).
pub fn snake_case_ident(variant: &Ident) -> Ident {
    let name = to_snake_case(&variant.to_string());
    if syn::parse_str::<Ident>(&name).is_ok() {
        Ident::new(&name, variant.span())
    } else if matches!(name.as_str(), "self" | "super" | "crate") {
        Ident::new(&format!("{name}_"), variant.span())
    } else {
        Ident::new_raw(&name, variant.span())
    }
}

/// A hygienic binding name for the field at `index`.
pub fn binding(index: usize) -> Ident {
    Ident::new(&format!("__field_{index}"), Span::call_site())
}
