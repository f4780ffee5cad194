use anyhow::Context;
use clap::{Parser, Subcommand};
use fabalos::core::config::Config;
use fabalos::server::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fabalos", about = "Incident ingest front end for the automation engine")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/fabalos/config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the ingest HTTP server (default).
    Serve {
        /// Listen address, overriding `server.bind`.
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Normalize one JSON payload from FILE or stdin and print the record.
    Normalize {
        file: Option<PathBuf>,
    },
    /// Print the signature of TEXT, or of stdin when TEXT is omitted.
    Signature {
        text: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            let config = Config::load(cli.config.as_deref())?;
            let state = AppState::from_config(&config.sink).context("invalid [sink] configuration")?;
            if state.sink.is_none() {
                tracing::error!("CRITICAL: MAKE_WEBHOOK_URL is not set; every ingest will fail");
            }
            fabalos::server::serve(bind.unwrap_or(config.server.bind), state).await
        }
        Command::Normalize { file } => {
            let body = fabalos::read_input(file.as_deref())?;
            let payload = fabalos::RawIncidentPayload::from_json(&body)?;
            let incident = fabalos::normalize(&payload);
            println!("{}", serde_json::to_string_pretty(&incident)?);
            Ok(())
        }
        Command::Signature { text } => {
            let text = match text {
                Some(text) => text,
                None => String::from_utf8_lossy(&fabalos::read_input(None)?).into_owned(),
            };
            println!("{}", fabalos::signature(text.trim_end_matches(['\r', '\n'])));
            Ok(())
        }
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}
