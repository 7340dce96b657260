//! Validation context and utilities for manifest parsing.

use std::{collections::HashMap, sync::Arc};

use miette::SourceSpan;
use quickbuilder_core::to_snake_case;
use toml::Spanned;

use super::{BuilderDecl, Manifest, PropertyDecl, SetterDecl};
use crate::{Result, error::SourceContext};

/// Validation context that carries source information.
///
/// Holds the manifest source and the path of the table being validated, so
/// errors can say where they happened.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "quickbuilder.toml");
/// ctx.validate_name("Fruit", "builder")?;
///
/// let nested = ctx.push("Fruit");
/// nested.validate_name("weight", "property")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// A context description for error messages, e.g. "property in 'Fruit'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate a name that becomes a Rust identifier.
    pub fn validate_name(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if is_rust_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name, false) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Validate the whole manifest.
    pub fn validate_manifest(&self, manifest: &'a Manifest) -> Result<()> {
        if let Some(reason) = validate_identifier(&manifest.module.name, true) {
            return Err(self.source.invalid_identifier_error(
                &manifest.module.name,
                "module",
                reason,
                None,
            ));
        }

        let mut seen: HashMap<&str, &BuilderDecl> = HashMap::new();
        for builder in &manifest.builders {
            if let Some(first) = seen.insert(builder.name(), builder) {
                return Err(self.source.duplicate_builder_error(
                    builder.name(),
                    first.name.span(),
                    builder.name.span(),
                ));
            }
            self.validate_builder(builder)?;
        }
        Ok(())
    }

    fn validate_builder(&self, builder: &'a BuilderDecl) -> Result<()> {
        self.validate_name(builder.name(), "builder", Some(span_of(&builder.name)))?;

        let ctx = self.push(builder.name());
        if let Some(target) = &builder.target {
            ctx.validate_name(target.get_ref(), "builder target", Some(span_of(target)))?;
        }
        if let Some(reason) = validate_type_path(builder.built()) {
            return Err(self.source.invalid_type_error(
                builder.built(),
                format!("{}.built", builder.name()),
                reason,
                Some(span_of(&builder.built)),
            ));
        }
        if let Some(generator) = &builder.generator {
            if validate_type_path(generator).is_some() || generator.contains('<') {
                return Err(self.source.validation_error(
                    format!("generator '{}' is not a function path", generator),
                    self.source.find_span(generator),
                ));
            }
        }

        // Keyed by generated field name: `seedCount` and `seed_count` share a slot.
        let mut seen: HashMap<String, &PropertyDecl> = HashMap::new();
        for property in &builder.properties {
            ctx.validate_property(property)?;
            let field = to_snake_case(property.name());
            match seen.get(&field) {
                Some(first) if first.name() != property.name() => {
                    return Err(self.source.colliding_property_error(
                        builder.name(),
                        first.name(),
                        property.name(),
                        field,
                        first.name.span(),
                        property.name.span(),
                    ));
                }
                Some(first) if !first.same_slot(property) => {
                    return Err(self.source.conflicting_property_error(
                        builder.name(),
                        property.name(),
                        first.name.span(),
                        property.name.span(),
                    ));
                }
                Some(_) => {}
                None => {
                    seen.insert(field, property);
                }
            }
        }
        Ok(())
    }

    fn validate_property(&self, property: &PropertyDecl) -> Result<()> {
        self.validate_name(property.name(), "property", Some(span_of(&property.name)))?;

        if let Some(reason) = validate_type_path(property.ty.get_ref()) {
            return Err(self.source.invalid_type_error(
                property.ty.get_ref(),
                property.name(),
                reason,
                Some(span_of(&property.ty)),
            ));
        }

        if let SetterDecl::Named(setter) = &property.setter {
            self.validate_name(setter, "setter", self.source.find_span(setter))?;
        }
        Ok(())
    }
}

impl SourceContext {
    /// Find the first quoted occurrence of `value` in the source.
    pub(crate) fn find_span(&self, value: &str) -> Option<SourceSpan> {
        ["\"", "'"].iter().find_map(|quote| {
            let pattern = format!("{quote}{value}{quote}");
            self.src()
                .find(&pattern)
                .map(|pos| SourceSpan::from((pos + 1, value.len())))
        })
    }
}

fn span_of<T>(spanned: &Spanned<T>) -> SourceSpan {
    spanned.span().into()
}

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub(crate) const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
    // Weak keywords
    "union",
];

pub(crate) fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Validate an identifier. Returns `Some(reason)` if it is invalid.
///
/// Dashes are allowed only when `allow_dashes` is set (module names).
pub(crate) fn validate_identifier(name: &str, allow_dashes: bool) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if is_rust_keyword(name) || is_rust_keyword(&name.replace('-', "_")) {
        return Some("name is a Rust reserved keyword");
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return Some("name must start with a letter or underscore"),
    }

    let mut prev_was_dash = false;
    for c in chars {
        if c == '-' && allow_dashes {
            if prev_was_dash {
                return Some("name cannot contain consecutive dashes");
            }
            prev_was_dash = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            prev_was_dash = false;
        } else if c == '-' {
            return Some("name cannot contain dashes");
        } else {
            return Some("name must contain only letters, numbers, and underscores");
        }
    }

    if prev_was_dash {
        return Some("name cannot end with a dash");
    }
    if name == "_" {
        return Some("name cannot be a lone underscore");
    }
    None
}

/// Validate a Rust type path such as `crate::fruit::Seed` or
/// `Vec<String>`. Returns `Some(reason)` if it is invalid.
pub(crate) fn validate_type_path(ty: &str) -> Option<&'static str> {
    let ty = ty.trim();
    if ty.is_empty() {
        return Some("type cannot be empty");
    }

    let allowed = |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '<' | '>' | ',' | ' ' | '&' | '\'' | '[' | ']' | ';' | '(' | ')')
    };
    if !ty.chars().all(allowed) {
        return Some("type contains characters that cannot appear in a Rust type");
    }

    let mut depth = 0i32;
    for c in ty.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Some("type has an unmatched '>'");
        }
    }
    if depth != 0 {
        return Some("type has an unmatched '<'");
    }

    if ty.ends_with("::") || ty.contains(":::") {
        return Some("type path has an empty segment");
    }
    None
}
