use clap::Parser;
use trip_scout::config::env::load_dotenv;
use trip_scout::server::run_server;
use trip_scout::utils::{logger, validation::Validate};
use trip_scout::{ApiKeys, AppConfig};

#[derive(Parser)]
#[command(name = "guide-server")]
#[command(about = "Travel guide and restaurant HTTP API")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override [server] bind_address
    #[arg(long)]
    bind: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    load_dotenv();

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // Every key is required up front; a missing one stops the server before it binds.
    let keys = match ApiKeys::from_env() {
        Ok(keys) => keys,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    run_server(&config, &keys).await?;
    Ok(())
}
