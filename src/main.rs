use anyhow::Result;
use clap::{Parser, Subcommand};

use company_registration::config::Config;
use company_registration::logging;
use company_registration::web::{self, AppState};

#[derive(Parser)]
#[command(name = "company-registration")]
#[command(about = "Multi-step web form for registering a new company")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (the default)
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Config) => cmd_config(&config)?,
        Some(Commands::Serve { port }) => cmd_serve(config, port, cli.debug).await?,
        None => cmd_serve(config, None, cli.debug).await?,
    }

    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

async fn cmd_serve(mut config: Config, port: Option<u16>, debug: bool) -> Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }

    let logging_handle = logging::init_logging(&config, debug)?;
    if let Some(path) = &logging_handle.log_file_path {
        println!("Logging to {}", path.display());
    }

    println!("Starting registration form...");
    println!("  Address: http://{}", config.bind_addr()?);
    println!("  Company service: {}", config.remote.company_endpoint());
    println!();

    let state = AppState::new(config)?;
    web::serve(state).await?;

    Ok(())
}
