//! Rust function builder.

use quickbuilder_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Rust function.
///
/// An empty type renders the name alone, for receivers such as `&self`.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn receiver(receiver: impl Into<String>) -> Self {
        Self::new(receiver, "")
    }

    fn format(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a nested fragment (e.g. an `if` block) to the body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Add raw body content, one line per line.
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(CodeFragment::line(line));
        }
        self
    }

    fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!("{}fn {}({}) -> {} {{", vis, self.name, params, ret),
            None => format!("{}fn {}({}) {{", vis, self.name, params),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::line(format!("#[{}]", attr)));
        }
        fragments.push(CodeFragment::braced(self.signature(), self.body.clone()));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        assert_eq!(Fn::new("reset").build(), "pub fn reset() {\n}\n");
    }

    #[test]
    fn test_fn_with_params() {
        let f = Fn::new("with_weight")
            .param(Param::receiver("&self"))
            .param(Param::new("value", "impl Into<i32>"))
            .returns("Self")
            .body_line("todo!()")
            .build();
        assert!(f.contains("pub fn with_weight(&self, value: impl Into<i32>) -> Self {"));
        assert!(f.contains("    todo!()\n"));
    }

    #[test]
    fn test_private_fn_with_doc_and_attr() {
        let f = Fn::new("helper")
            .private()
            .doc("Does things.")
            .attr("must_use")
            .build();
        assert!(f.starts_with("/// Does things.\n#[must_use]\nfn helper() {"));
        assert!(!f.contains("pub"));
    }

    #[test]
    fn test_nested_body() {
        let f = Fn::new("build")
            .param(Param::receiver("&self"))
            .returns("Result<Fruit>")
            .body_fragment(CodeFragment::braced(
                "if let Some(generator) = &self.generator {",
                vec![CodeFragment::line("return generator(self);")],
            ))
            .body_line("Ok(Fruit::default())")
            .build();
        insta::assert_snapshot!(f, @r"
        pub fn build(&self) -> Result<Fruit> {
            if let Some(generator) = &self.generator {
                return generator(self);
            }
            Ok(Fruit::default())
        }
        ");
    }
}
