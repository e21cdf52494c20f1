use crate::infra::attorney_pages;
use crate::server;
use clap::{Args, Parser, Subcommand};
use lpa_caseworker::config::AppConfig;
use lpa_caseworker::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "LPA Caseworker Frontend",
    about = "Serve the caseworker pages for managing attorneys on digital LPAs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Load and validate configuration, then exit
    CheckConfig,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::CheckConfig => check_config(),
    }
}

fn check_config() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let addr = config.server.socket_addr()?;
    attorney_pages(&config)?;

    println!("environment: {:?}", config.environment);
    println!("listen: {addr}");
    println!(
        "prefix: {}",
        if config.server.prefix.is_empty() {
            "/"
        } else {
            config.server.prefix.as_str()
        }
    );
    println!("sirius: {}", config.sirius.base_url);
    println!("secure cookies: {}", config.cookies.secure);
    Ok(())
}
