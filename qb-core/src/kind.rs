//! Declared property types and the primitive kinds they can name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive kinds a property can declare.
///
/// Each kind has a fixed native Rust representation; values of these kinds
/// are boxed into [`Value`](crate::Value) while they sit in a builder slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Int,
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Long,
    Short,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Int,
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Double,
        PrimitiveKind::Float,
        PrimitiveKind::Long,
        PrimitiveKind::Short,
    ];

    /// Get the manifest name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Int => "int",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Short => "short",
        }
    }

    /// Get the native Rust type for this kind
    pub fn rust_type(&self) -> &'static str {
        match self {
            PrimitiveKind::Int => "i32",
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Byte => "i8",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Double => "f64",
            PrimitiveKind::Float => "f32",
            PrimitiveKind::Long => "i64",
            PrimitiveKind::Short => "i16",
        }
    }

    /// Parse either the manifest name or the Rust type name of a kind.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name || kind.rust_type() == name)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared type of a builder property.
///
/// Primitive kinds are coerced between their boxed and native forms;
/// everything else is a reference type that passes through unchanged and is
/// only type-checked when the value is retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    Primitive(PrimitiveKind),
    Reference(String),
}

impl DeclaredType {
    /// Parse a type name from a manifest or contract.
    ///
    /// Primitive names (`int`, `i32`, `boolean`, `bool`, ...) map to
    /// [`DeclaredType::Primitive`]; any other name is a reference type path.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        match PrimitiveKind::parse(name) {
            Some(kind) => DeclaredType::Primitive(kind),
            None => DeclaredType::Reference(name.to_string()),
        }
    }

    /// Create a reference type.
    pub fn reference(path: impl Into<String>) -> Self {
        DeclaredType::Reference(path.into())
    }

    /// Returns the primitive kind, if this is a primitive type.
    pub fn primitive(&self) -> Option<PrimitiveKind> {
        match self {
            DeclaredType::Primitive(kind) => Some(*kind),
            DeclaredType::Reference(_) => None,
        }
    }

    /// Returns true if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self, DeclaredType::Primitive(_))
    }

    /// The Rust type used for this declared type in generated code.
    pub fn rust_type(&self) -> &str {
        match self {
            DeclaredType::Primitive(kind) => kind.rust_type(),
            DeclaredType::Reference(path) => path,
        }
    }
}

impl From<PrimitiveKind> for DeclaredType {
    fn from(kind: PrimitiveKind) -> Self {
        DeclaredType::Primitive(kind)
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Primitive(kind) => write!(f, "{}", kind),
            DeclaredType::Reference(path) => f.write_str(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest_names() {
        assert_eq!(PrimitiveKind::parse("int"), Some(PrimitiveKind::Int));
        assert_eq!(PrimitiveKind::parse("boolean"), Some(PrimitiveKind::Boolean));
        assert_eq!(PrimitiveKind::parse("short"), Some(PrimitiveKind::Short));
        assert_eq!(PrimitiveKind::parse("Integer"), None);
    }

    #[test]
    fn test_parse_rust_names() {
        assert_eq!(PrimitiveKind::parse("i32"), Some(PrimitiveKind::Int));
        assert_eq!(PrimitiveKind::parse("bool"), Some(PrimitiveKind::Boolean));
        assert_eq!(PrimitiveKind::parse("i8"), Some(PrimitiveKind::Byte));
        assert_eq!(PrimitiveKind::parse("f32"), Some(PrimitiveKind::Float));
    }

    #[test]
    fn test_declared_type_parse() {
        assert_eq!(
            DeclaredType::parse(" long "),
            DeclaredType::Primitive(PrimitiveKind::Long)
        );
        assert_eq!(
            DeclaredType::parse("crate::fruit::Seed"),
            DeclaredType::reference("crate::fruit::Seed")
        );
    }

    #[test]
    fn test_rust_type() {
        assert_eq!(DeclaredType::parse("double").rust_type(), "f64");
        assert_eq!(DeclaredType::parse("Vec<u8>").rust_type(), "Vec<u8>");
    }

    #[test]
    fn test_display() {
        assert_eq!(DeclaredType::parse("i16").to_string(), "short");
        assert_eq!(DeclaredType::parse("String").to_string(), "String");
    }
}
