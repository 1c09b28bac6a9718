use anyhow::Context;
use clap::Parser;
use trip_scout::adapters::http::build_client;
use trip_scout::adapters::SerpApiImageSearch;
use trip_scout::config::env::{load_dotenv, require_key, SERPAPI_KEY};
use trip_scout::core::extract::extract_place_names;
use trip_scout::core::guide::lookup_images;
use trip_scout::domain::model::ImageLink;
use trip_scout::utils::{logger, validation::Validate};
use trip_scout::AppConfig;

#[derive(Parser)]
#[command(name = "image-lookup")]
#[command(about = "Find the first image for each place name")]
struct Args {
    /// Place names to look up
    places: Vec<String>,

    /// Read names from the `places_for_images = [...]` list in a text file
    #[arg(long)]
    from_file: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    load_dotenv();

    let config = AppConfig::load(args.config.as_deref())?;
    config.validate()?;

    let mut places = args.places.clone();
    if let Some(path) = &args.from_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?;
        places.extend(extract_place_names(&text));
    }
    if places.is_empty() {
        anyhow::bail!("No place names given. Pass names or --from-file with a places_for_images list.");
    }

    let api_key = require_key(SERPAPI_KEY)?;
    let client = build_client(config.http.request_timeout_secs)?;
    let images = SerpApiImageSearch::new(client, &config.endpoints.images, api_key);

    let links = lookup_images(&images, &places).await;

    for (place, link) in places.iter().zip(&links) {
        match link {
            ImageLink::Found(url) => println!("Image URL for {}: {}", place, url),
            other => println!("{} for {}", other, place),
        }
    }

    println!("\nAll fetched image URLs:");
    for (i, url) in links.iter().filter_map(ImageLink::url).enumerate() {
        println!("{}. {}", i + 1, url);
    }

    Ok(())
}
