use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trip_scout::adapters::http::build_client;
use trip_scout::app::report;
use trip_scout::config::env::{load_dotenv, require_key, GOOGLE_MAPS_API_KEY};
use trip_scout::utils::error::ErrorSeverity;
use trip_scout::utils::{logger, validation::Validate};
use trip_scout::{AppConfig, CliConfig, GooglePlacesClient, NearbyEngine, Selection, TripError};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    load_dotenv();

    tracing::info!("Starting trip-scout nearby search");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli).await {
        Ok(selection) => match report::render(&selection, cli.format) {
            Ok(output) => print!("{}", output),
            Err(e) => exit_with(e),
        },
        Err(e) => exit_with(e),
    }
}

async fn run(cli: &CliConfig) -> Result<Selection, TripError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // 參數驗證在任何網路請求之前
    let query = cli.to_query()?;
    let api_key = require_key(GOOGLE_MAPS_API_KEY)?;

    let client = build_client(config.http.request_timeout_secs)?;
    let places = GooglePlacesClient::new(client, &config.endpoints.places, api_key);
    let engine = NearbyEngine::new(places).with_default_origin(config.search.default_origin());

    match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            engine.run_with_rng(&query, &mut rng).await
        }
        None => engine.run(&query).await,
    }
}

fn exit_with(e: TripError) -> ! {
    tracing::error!(
        "❌ Nearby search failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
