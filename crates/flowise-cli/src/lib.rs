pub mod cli;

pub use cli::{Cli, Commands, handle_cli_command};
