use miette::Diagnostic;
use quickbuilder_core::CoercionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by providers and builders.
///
/// Every variant is a programmer error surfaced to the caller; nothing here
/// is retried or swallowed.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("_{name}() called, but no value has been set for property {name}")]
    #[diagnostic(
        code(quickbuilder::unset_property),
        help("call `with(\"{name}\", ...)` on the builder before building")
    )]
    UnsetProperty { name: String },

    #[error("property `{property}`: {source}")]
    #[diagnostic(code(quickbuilder::coercion))]
    Coercion {
        property: String,
        #[source]
        source: CoercionError,
    },

    #[error("{provider} has no more elements")]
    #[diagnostic(
        code(quickbuilder::exhausted),
        help("check `next()` before building past the end of a finite sequence")
    )]
    Exhausted { provider: &'static str },

    #[error("cannot build every element of an unbounded sequence")]
    #[diagnostic(
        code(quickbuilder::unbounded),
        help("use `build_n(n)` or `limit(n)` to bound the sequence")
    )]
    Unbounded,

    #[error("`{builder}` has no property named `{name}`")]
    #[diagnostic(code(quickbuilder::unknown_property))]
    UnknownProperty { builder: String, name: String },

    #[error("property `{name}` holds a nested builder, not a plain value")]
    #[diagnostic(
        code(quickbuilder::not_a_plain_property),
        help("use `with_builder` or `with_nested` for builder-typed properties")
    )]
    NotAPlainProperty { name: String },

    #[error("property `{name}` holds a plain value, not a nested builder")]
    #[diagnostic(code(quickbuilder::not_a_builder_property), help("use `with` instead"))]
    NotABuilderProperty { name: String },

    #[error("`{builder}` takes {expected} provider slots, got {found}")]
    #[diagnostic(code(quickbuilder::arity))]
    Arity {
        builder: String,
        expected: usize,
        found: usize,
    },

    #[error("`{built}` has no setter `{setter}` for property `{property}`")]
    #[diagnostic(code(quickbuilder::missing_setter))]
    MissingSetter {
        built: String,
        property: String,
        setter: String,
    },

    #[error("`{built}` cannot be default-initialized and no generator was supplied")]
    #[diagnostic(
        code(quickbuilder::no_default_constructor),
        help("register a default constructor on the built type or pass a generator")
    )]
    NoDefaultConstructor { built: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Ir(#[from] quickbuilder_ir::Error),

    #[error("generator failed")]
    #[diagnostic(code(quickbuilder::generator))]
    Generator(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// The error raised by an accessor on an absent slot.
    pub fn unset(name: impl Into<String>) -> Self {
        Error::UnsetProperty { name: name.into() }
    }

    /// Attach a property name to a coercion failure.
    pub fn coercion(property: impl Into<String>, source: CoercionError) -> Self {
        Error::Coercion {
            property: property.into(),
            source,
        }
    }

    /// Wrap a failure reported by a custom generation hook.
    pub fn generator(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Generator(source.into())
    }
}
