//! Flowise API Client Binary

use clap::Parser;
use flowise::{FlowiseClient, Outcome, telemetry};
use flowise_cli::{Cli, handle_cli_command};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    telemetry::init();
    let cli = Cli::parse();
    let url = cli.url_or_exit().to_string();

    let outcome = match FlowiseClient::new(&url) {
        Ok(client) => handle_cli_command(&client, cli.api_key.as_deref(), cli.command).await,
        Err(e) => Outcome::from(e),
    };

    match outcome.render() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to render response: {e}");
            return ExitCode::FAILURE;
        }
    }

    if outcome.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
