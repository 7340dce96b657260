//! Naming conventions for generated code.

use quickbuilder_core::{to_pascal_case, to_snake_case};

/// Language-specific naming conventions.
///
/// Defines how contract and property names map to type, module and member
/// names, and how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Contract name to type name (e.g. "fruit_basket" -> "FruitBasket")
    pub to_type: fn(&str) -> String,
    /// Manifest module name to file name (e.g. "fruit-builders" -> "fruit_builders")
    pub to_file: fn(&str) -> String,
    /// Property name to field or method name
    pub to_member: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g. "type" -> "r#type")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// The name itself, or its escaped form if it is reserved.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_type)(name))
    }

    pub fn file_name(&self, name: &str) -> String {
        (self.to_file)(name)
    }

    pub fn field_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_member)(name))
    }

    /// A member name built from a prefix, e.g. `with_` + `weight`.
    /// Prefixed names never collide with keywords, so they are not escaped.
    pub fn prefixed(&self, prefix: &str, name: &str) -> String {
        format!("{}{}", prefix, (self.to_member)(name))
    }
}

fn escape_rust_reserved(name: &str) -> String {
    match name {
        // Raw identifiers cannot name these.
        "self" | "Self" | "super" | "crate" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_file: to_snake_case,
    to_member: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        assert_eq!(RUST_NAMING.type_name("fruit_basket"), "FruitBasket");
        assert_eq!(RUST_NAMING.type_name("Fruit"), "Fruit");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(RUST_NAMING.file_name("fruit-builders"), "fruit_builders");
        assert_eq!(RUST_NAMING.file_name("FruitBuilders"), "fruit_builders");
    }

    #[test]
    fn test_field_name() {
        assert_eq!(RUST_NAMING.field_name("seedCount"), "seed_count");
        assert_eq!(RUST_NAMING.field_name("weight"), "weight");
    }

    #[test]
    fn test_reserved_words() {
        assert!(RUST_NAMING.is_reserved("type"));
        assert!(RUST_NAMING.is_reserved("match"));
        assert!(!RUST_NAMING.is_reserved("weight"));
    }

    #[test]
    fn test_escape_reserved() {
        assert_eq!(RUST_NAMING.safe_name("type"), "r#type");
        assert_eq!(RUST_NAMING.safe_name("self"), "self_");
        assert_eq!(RUST_NAMING.safe_name("weight"), "weight");
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(RUST_NAMING.prefixed("with_", "type"), "with_type");
        assert_eq!(RUST_NAMING.prefixed("_", "seedCount"), "_seed_count");
    }
}
