//! Builder module generation.
//!
//! For every contract the generated module contains:
//!
//! - a `<Target>` struct with an optional generation hook and one
//!   `Option<SharedProvider<T>>` slot per unique property,
//! - `new`, `from_parts`, `with_<name>`, `but`, `_<name>` and `build`,
//! - an `impl Provider<Built>` so builders nest into builder-typed slots.

use std::path::PathBuf;

use quickbuilder_codegen::{RUST_NAMING, builder::CodeFragment};
use quickbuilder_ir::{BuilderContract, ModuleIR, PropertyDescriptor};
use tracing::debug;

use crate::{Field, Fn, Impl, Param, RustFile, Struct, Use, files::BuildersRs};

/// Generates the Rust builders module for a [`ModuleIR`].
pub struct Generator<'a> {
    ir: &'a ModuleIR,
}

impl<'a> Generator<'a> {
    pub fn new(ir: &'a ModuleIR) -> Self {
        Self { ir }
    }

    pub fn ir(&self) -> &'a ModuleIR {
        self.ir
    }

    /// The generated module as a file at `path`, relative to the output
    /// directory.
    pub fn file(&self, path: impl Into<PathBuf>) -> BuildersRs<'a> {
        BuildersRs::new(self.ir, path)
    }

    /// Render the module body (without the generated-file header).
    pub fn render(&self) -> String {
        let ir = self.ir;
        let doc = match &ir.meta.description {
            Some(description) => description.clone(),
            None => format!("Builders for the `{}` module.", ir.meta.name),
        };
        let mut file = RustFile::new().module_doc(doc);

        if !ir.contracts.is_empty() {
            file = file
                .use_stmt(Use::new("std::sync").symbol("Arc"))
                .use_stmt(Use::new("quickbuilder_engine").symbols(self.engine_imports()));
        }

        for contract in &ir.contracts {
            let contract = ContractCodegen::new(contract);
            file = file
                .add(contract.builder_struct())
                .add(contract.builder_impl())
                .add(contract.provider_impl());
        }

        debug!(
            module = %ir.meta.name,
            contracts = ir.contracts.len(),
            "rendered builders module"
        );
        file.render()
    }

    fn engine_imports(&self) -> Vec<&'static str> {
        let contracts = &self.ir.contracts;
        let has_plain = contracts.iter().any(|c| c.plain_properties().next().is_some());
        let needs_error = has_plain || contracts.iter().any(|c| !c.default_constructor);

        let mut symbols = Vec::new();
        if needs_error {
            symbols.push("Error");
        }
        symbols.extend(["Hook", "Provider", "Result", "SharedProvider"]);
        if has_plain {
            symbols.push("constant");
        }
        symbols
    }
}

/// Code generation for a single contract.
struct ContractCodegen<'a> {
    contract: &'a BuilderContract,
    type_name: String,
    hook_field: String,
}

impl<'a> ContractCodegen<'a> {
    fn new(contract: &'a BuilderContract) -> Self {
        Self {
            contract,
            type_name: RUST_NAMING.type_name(&contract.target),
            hook_field: hook_field(contract),
        }
    }

    fn built(&self) -> &str {
        &self.contract.built
    }

    fn hook_type(&self, builder: &str) -> String {
        format!("Hook<{}, {}>", builder, self.built())
    }

    fn builder_struct(&self) -> Struct {
        let doc = match &self.contract.description {
            Some(description) => description.clone(),
            None => format!("Builds `{}` values.", self.built()),
        };

        let hook = Field::new(&self.hook_field, format!("Option<{}>", self.hook_type(&self.type_name)))
            .private();
        let slots = self.contract.properties.iter().map(|p| {
            let field = Field::new(field_name(p), slot_type(p)).private();
            match &p.description {
                Some(description) => field.doc(description),
                None => field,
            }
        });

        Struct::new(&self.type_name)
            .doc(doc)
            .derive("Clone")
            .derive("Default")
            .field(hook)
            .fields(slots)
    }

    fn builder_impl(&self) -> Impl {
        let properties = &self.contract.properties;

        Impl::new(&self.type_name)
            .method(self.new_fn())
            .method(self.from_parts_fn())
            .methods(properties.iter().map(|p| self.with_fn(p)))
            .method(
                Fn::new("but")
                    .doc("A copy of this builder sharing its hook and values.")
                    .param(Param::receiver("&self"))
                    .returns("Self")
                    .body_line("self.clone()"),
            )
            .methods(self.contract.plain_properties().map(accessor_fn))
            .method(self.build_fn())
    }

    fn new_fn(&self) -> Fn {
        let f = Fn::new("new").returns("Self");
        match &self.contract.generator {
            Some(generator) => f
                .doc(format!(
                    "A builder with no values set and the `{}` hook installed.",
                    generator
                ))
                .body_line(format!(
                    "let generator: {} = Arc::new({});",
                    self.hook_type("Self"),
                    generator
                ))
                .body_fragment(CodeFragment::block(
                    "Self {",
                    vec![
                        CodeFragment::line(format!("{}: Some(generator),", self.hook_field)),
                        CodeFragment::line("..Self::default()"),
                    ],
                    Some("}".to_string()),
                )),
            None => f
                .doc("A builder with no values set.")
                .body_line("Self::default()"),
        }
    }

    fn from_parts_fn(&self) -> Fn {
        let properties = &self.contract.properties;
        let mut f = Fn::new("from_parts")
            .doc("A builder from an optional hook and one optional provider per property, in declaration order.")
            .param(Param::new(
                &self.hook_field,
                format!("Option<{}>", self.hook_type("Self")),
            ))
            .params(properties.iter().map(|p| Param::new(field_name(p), slot_type(p))))
            .returns("Self");

        if properties.len() + 1 > 7 {
            f = f.attr("allow(clippy::too_many_arguments)");
        }

        let names: Vec<String> = std::iter::once(self.hook_field.clone())
            .chain(properties.iter().map(field_name))
            .collect();
        f.body_line(format!("Self {{ {} }}", names.join(", ")))
    }

    fn with_fn(&self, property: &PropertyDescriptor) -> Fn {
        let field = field_name(property);
        let ty = property.declared_type.rust_type();
        let f = Fn::new(RUST_NAMING.prefixed("with_", &property.name))
            .param(Param::receiver("&self"))
            .returns("Self")
            .body_line("let mut next = self.clone();");

        let f = if property.is_builder {
            f.doc(format!("Use `provider` for `{}`.", property.name))
                .param(Param::new("provider", format!("SharedProvider<{}>", ty)))
                .body_line(format!("next.{} = Some(provider);", field))
        } else {
            f.doc(format!("Set `{}`.", property.name))
                .param(Param::new("value", format!("impl Into<{}>", ty)))
                .body_line(format!("next.{} = Some(constant(value.into()));", field))
        };
        f.body_line("next")
    }

    fn build_fn(&self) -> Fn {
        let built = self.built();
        let f = Fn::new("build")
            .param(Param::receiver("&self"))
            .returns(format!("Result<{}>", built));

        if !self.contract.default_constructor {
            return f
                .doc("Build a value with the generation hook.")
                .body_fragment(CodeFragment::braced(
                    format!("match &self.{} {{", self.hook_field),
                    vec![
                        CodeFragment::line("Some(generator) => generator(self),"),
                        CodeFragment::line(format!(
                            "None => Err(Error::NoDefaultConstructor {{ built: \"{}\".to_string() }}),",
                            built
                        )),
                    ],
                ));
        }

        let setters: Vec<_> = self
            .contract
            .properties
            .iter()
            .filter_map(|p| p.setter.as_ref().map(|setter| (field_name(p), setter)))
            .collect();
        let binding = if setters.is_empty() { "let built" } else { "let mut built" };

        let mut f = f
            .doc("Build a fresh value.\n\nWith a hook installed the hook's result is returned as is. Otherwise the value starts from `Default` and every set property is applied through its setter.")
            .body_fragment(CodeFragment::braced(
                format!("if let Some(generator) = &self.{} {{", self.hook_field),
                vec![CodeFragment::line("return generator(self);")],
            ))
            .body_line(format!("{} = <{} as Default>::default();", binding, built));

        for (field, setter) in setters {
            f = f.body_fragment(CodeFragment::braced(
                format!("if let Some(provider) = &self.{} {{", field),
                vec![CodeFragment::line(format!("built.{}(provider.build()?);", setter))],
            ));
        }
        f.body_line("Ok(built)")
    }

    fn provider_impl(&self) -> Impl {
        let built = self.built();
        Impl::new(&self.type_name)
            .for_trait(format!("Provider<{}>", built))
            .method(
                Fn::new("build")
                    .private()
                    .param(Param::receiver("&self"))
                    .returns(format!("Result<{}>", built))
                    .body_line(format!("{}::build(self)", self.type_name)),
            )
            .method(
                Fn::new("next")
                    .private()
                    .param(Param::receiver("self: Arc<Self>"))
                    .returns(format!("Option<SharedProvider<{}>>", built))
                    .body_line(format!("Some(self as SharedProvider<{}>)", built)),
            )
    }
}

fn accessor_fn(property: &PropertyDescriptor) -> Fn {
    Fn::new(RUST_NAMING.prefixed("_", &property.name))
        .doc(format!(
            "Build the current value of `{}`, for use in generation hooks.",
            property.name
        ))
        .param(Param::receiver("&self"))
        .returns(format!("Result<{}>", property.declared_type.rust_type()))
        .body_fragment(CodeFragment::braced(
            format!("match &self.{} {{", field_name(property)),
            vec![
                CodeFragment::line("Some(provider) => provider.build(),"),
                CodeFragment::line(format!("None => Err(Error::unset(\"{}\")),", property.name)),
            ],
        ))
}

fn field_name(property: &PropertyDescriptor) -> String {
    RUST_NAMING.field_name(&property.name)
}

fn slot_type(property: &PropertyDescriptor) -> String {
    format!(
        "Option<SharedProvider<{}>>",
        property.declared_type.rust_type()
    )
}

/// The hook field is `generator` unless a property already uses that name.
fn hook_field(contract: &BuilderContract) -> String {
    let mut name = "generator".to_string();
    while contract.properties.iter().any(|p| field_name(p) == name) {
        name.push('_');
    }
    name
}
