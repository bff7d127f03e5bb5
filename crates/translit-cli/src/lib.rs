pub mod commands;
pub mod error;
pub mod input;
pub mod trace_init;

pub use error::CliError;
pub use input::Source;
