//! Command-line workflow, kept independent of argument parsing.

pub mod orchestration;

pub use orchestration::{run_release_workflow, ReleaseWorkflowArgs, WorkflowResult};
