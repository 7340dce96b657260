//! Rust struct builder.

use quickbuilder_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.push(CodeFragment::line(format!("{}{}: {},", vis, self.name, self.ty)));
        fragments
    }
}

/// Builder for Rust structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    attrs: Vec<String>,
    fields: Vec<Field>,
    is_public: bool,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            attrs: Vec::new(),
            fields: Vec::new(),
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        if !self.derives.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::line(format!("#[{}]", attr)));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("{}struct {};", vis, self.name)));
        } else {
            fragments.push(CodeFragment::braced(
                format!("{}struct {} {{", vis, self.name),
                self.fields.iter().flat_map(Field::to_fragments).collect(),
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_struct() {
        assert_eq!(Struct::new("Empty").build(), "pub struct Empty;\n");
    }

    #[test]
    fn test_struct_with_derives_and_attrs() {
        let s = Struct::new("Foo")
            .derive("Clone")
            .derive("Default")
            .attr("must_use")
            .build();
        assert!(s.contains("#[derive(Clone, Default)]\n#[must_use]\npub struct Foo;"));
    }

    #[test]
    fn test_struct_with_fields() {
        let s = Struct::new("FruitBuilder")
            .doc("Builds fruit.")
            .field(Field::new("weight", "Option<SharedProvider<i32>>").private())
            .field(Field::new("name", "String").doc("Display name"))
            .build();
        insta::assert_snapshot!(s, @r"
        /// Builds fruit.
        pub struct FruitBuilder {
            weight: Option<SharedProvider<i32>>,
            /// Display name
            pub name: String,
        }
        ");
    }
}
