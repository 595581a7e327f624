pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{BatchArgs, ClassifyArgs, CliArgs, Commands, ConfigArgs, ProfilesArgs};
pub use output::{OutputFormat, OutputFormatter};
