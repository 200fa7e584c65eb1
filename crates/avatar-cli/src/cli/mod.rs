//! Command line layer: argument parsing (`args`) and orchestration
//! (`runner`) on top of `avatar_core`.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
