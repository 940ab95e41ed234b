//! Command-line interface for the Flowise API client

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use flowise::{FlowiseClient, Outcome};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "flowise", version, about = "Flowise API Client")]
pub struct Cli {
    /// Flowise server URL (required)
    #[arg(short, long, global = true, value_name = "URL")]
    pub url: Option<String>,
    /// API key for authentication
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Send a prediction
    Predict(PredictArgs),
    /// List all chatflows
    List,
    /// Get chatflow details
    Get(GetArgs),
    /// Check server status
    Ping,
}

#[derive(Args, Debug, PartialEq)]
pub struct PredictArgs {
    /// Chatflow ID
    #[arg(short, long)]
    pub flow_id: String,
    /// Question to ask
    #[arg(short, long)]
    pub question: String,
    /// Session ID for conversation memory
    #[arg(short, long)]
    pub session_id: Option<String>,
    /// Enable streaming
    #[arg(long)]
    pub streaming: bool,
}

#[derive(Args, Debug, PartialEq)]
pub struct GetArgs {
    /// Chatflow ID
    #[arg(short, long)]
    pub flow_id: String,
}

impl Cli {
    /// The server URL, or a clap usage error (exit code 2) when it is missing.
    ///
    /// `--url` is global so it may follow the subcommand, and clap does not
    /// allow global arguments to be marked required.
    pub fn url_or_exit(&self) -> &str {
        match self.url.as_deref() {
            Some(url) => url,
            None => Cli::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "the following required arguments were not provided:\n  --url <URL>",
                )
                .exit(),
        }
    }
}

pub async fn handle_cli_command(
    client: &FlowiseClient,
    api_key: Option<&str>,
    command: Commands,
) -> Outcome {
    debug!(?command, base_url = client.base_url(), "Running command");
    match command {
        Commands::Predict(args) => {
            client
                .predict(
                    &args.flow_id,
                    &args.question,
                    api_key,
                    args.session_id.as_deref(),
                    args.streaming,
                )
                .await
        }
        Commands::List => client.list_flows(api_key).await,
        Commands::Get(args) => client.get_flow(&args.flow_id, api_key).await,
        Commands::Ping => client.ping().await,
    }
}
