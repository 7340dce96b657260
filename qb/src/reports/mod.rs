//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, ContractSummary};
pub use generate::{GenerateReport, GenerationResult};
pub use list::{ContractEntry, ListReport, PropertyEntry};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::RecordingOutput;
