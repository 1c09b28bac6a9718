use crate::core::request::RawNearbyQuery;
use crate::domain::model::NearbyQuery;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "trip-scout")]
#[command(about = "Search nearby restaurants and pick one at random")]
pub struct CliConfig {
    /// Origin latitude (defaults to [search] in the config file)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Origin longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<String>,

    /// What type of restaurant
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Maximum price tier, 0 to 4
    #[arg(long)]
    pub max_price: Option<String>,

    /// Does it have to be open now? (y or n)
    #[arg(long)]
    pub open_now: Option<String>,

    /// Maximum distance in miles
    #[arg(long)]
    pub radius: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Seed for a reproducible random pick
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Validates the raw arguments. Nothing here touches the network.
    pub fn to_query(&self) -> Result<NearbyQuery> {
        RawNearbyQuery {
            lat: self.lat.clone(),
            lng: self.lng.clone(),
            keyword: self.keyword.clone(),
            maxprice: self.max_price.clone(),
            opennow: self.open_now.clone(),
            radius: self.radius.clone(),
        }
        .parse()
    }
}
