//! Files written by `qb`.

mod builders_rs;
mod quickbuilder_toml;

pub use builders_rs::BuildersRs;
pub use quickbuilder_toml::QuickbuilderTomlFile;

/// Header prepended to every generated Rust file.
pub const GENERATED_HEADER: &str = "// Generated by quickbuilder. Do not edit by hand.
// Regenerate with `qb generate`.";
