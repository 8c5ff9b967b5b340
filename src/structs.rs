use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Configuration file to load.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enrich a JSON array of records and print the result with filter stats.
    Enrich {
        /// Input file, stdin when omitted.
        #[arg(long)]
        input: Option<String>,
        #[arg(long)]
        skip_metadata: bool,
        #[arg(long)]
        skip_trackers: bool,
        /// Name reported in the filter stats.
        #[arg(long)]
        scraper: Option<String>,
    },
    /// Scrape one UDP tracker for one info hash.
    Scrape {
        tracker: String,
        info_hash: String,
    },
    /// Print the dynamic tracker list.
    Trackers,
}
