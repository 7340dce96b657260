use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling builder contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("property `{name}` is declared twice with different types ({first} and {second})")]
    #[diagnostic(
        code(quickbuilder::ir::conflicting_property),
        help("a property may be listed more than once only if every declaration is identical")
    )]
    ConflictingProperty {
        name: String,
        first: String,
        second: String,
    },

    #[error("builder contract `{0}` is declared more than once")]
    #[diagnostic(code(quickbuilder::ir::duplicate_contract))]
    DuplicateContract(String),

    #[error("`{built}` has no default constructor and contract `{contract}` has no generator")]
    #[diagnostic(
        code(quickbuilder::ir::missing_constructor),
        help("set `default_constructor = true` or name a `generator` function")
    )]
    MissingConstructor { contract: String, built: String },

    #[error("invalid type `{ty}` for property `{name}`")]
    #[diagnostic(code(quickbuilder::ir::invalid_type))]
    InvalidType { name: String, ty: String },
}
