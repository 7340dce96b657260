//! Built-in lints for manifest validation.

mod builder_naming;
mod duplicate_target;
mod empty_description;
mod missing_constructor;

pub use builder_naming::BuilderNamingLint;
pub use duplicate_target::DuplicateTargetLint;
pub use empty_description::EmptyDescriptionLint;
pub use missing_constructor::MissingConstructorLint;
