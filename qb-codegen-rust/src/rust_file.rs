//! RustFile abstraction for structured Rust file generation.

use quickbuilder_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Rust use statement.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.module),
            [one] => format!("use {}::{};", self.module, one),
            many => format!("use {}::{{{}}};", self.module, many.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// A structured Rust file: module docs, imports, then body items separated
/// by blank lines.
///
/// ```ignore
/// let code = RustFile::new()
///     .module_doc("Builders for the fruit domain")
///     .use_stmt(Use::new("std::sync").symbol("Arc"))
///     .add(builder_struct)
///     .add(builder_impl)
///     .render();
/// ```
#[derive(Default)]
pub struct RustFile {
    module_doc: Option<String>,
    uses: Vec<Vec<Use>>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `//!` documentation of the module.
    pub fn module_doc(mut self, doc: impl Into<String>) -> Self {
        self.module_doc = Some(doc.into());
        self
    }

    /// Add a group of use statements. Groups are separated by a blank line.
    pub fn use_group(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        let group: Vec<Use> = uses.into_iter().collect();
        if !group.is_empty() {
            self.uses.push(group);
        }
        self
    }

    /// Add a use statement in its own group.
    pub fn use_stmt(self, use_stmt: Use) -> Self {
        self.use_group([use_stmt])
    }

    /// Add a body element.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render with 4-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::RUST)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if let Some(doc) = &self.module_doc {
            for line in doc.lines() {
                builder.push_line(format!("//! {}", line).trim_end());
            }
            sections += 1;
        }

        for group in &self.uses {
            if sections > 0 {
                builder.push_blank();
            }
            for use_stmt in group {
                builder.emit(use_stmt);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.module_doc.is_none() && self.uses.is_empty() && self.body.is_empty()
    }
}

/// Raw code added to a RustFile body.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = RustFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_use_forms() {
        let mut builder = CodeBuilder::rust();
        builder
            .emit(&Use::new("std::sync::Arc"))
            .emit(&Use::new("std::sync").symbol("Arc"))
            .emit(&Use::new("quickbuilder_engine").symbols(["Provider", "Result"]));
        assert_eq!(
            builder.build(),
            "use std::sync::Arc;\nuse std::sync::Arc;\nuse quickbuilder_engine::{Provider, Result};\n"
        );
    }

    #[test]
    fn test_sections_separated_by_blank_lines() {
        let code = RustFile::new()
            .module_doc("Fruit builders.")
            .use_stmt(Use::new("std::sync").symbol("Arc"))
            .use_group([Use::new("quickbuilder_engine").symbol("Provider")])
            .add(RawCode::new("struct Foo;"))
            .add(RawCode::new("struct Bar;"))
            .render();
        insta::assert_snapshot!(code, @r"
        //! Fruit builders.

        use std::sync::Arc;

        use quickbuilder_engine::Provider;

        struct Foo;

        struct Bar;
        ");
    }

    #[test]
    fn test_empty_use_group_is_skipped() {
        let code = RustFile::new()
            .use_group(Vec::new())
            .add(RawCode::lines(["mod a;", "mod b;"]))
            .render();
        assert_eq!(code, "mod a;\nmod b;\n");
    }
}
