//! Library half of the `qcat` binary.
//!
//! Split out of `main.rs` so flags, configuration and the pipeline can be
//! tested without spawning a process.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;

pub use cli::Cli;
pub use config::{ConfigError, QcatConfig, RendererKind};
pub use pipeline::{PipelineOutput, compute, execute, make_renderer, run};
