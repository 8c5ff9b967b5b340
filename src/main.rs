use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::io::AsyncReadExt;
use tokio::runtime::Builder;
use torrent_enricher::common::common::setup_logging;
use torrent_enricher::common::structs::custom_error::CustomError;
use torrent_enricher::config::structs::configuration::Configuration;
use torrent_enricher::enrichment::structs::enrichment_context::EnrichmentContext;
use torrent_enricher::enrichment::structs::torrent_record::TorrentRecord;
use torrent_enricher::instrument_with_sentry;
use torrent_enricher::structs::{Cli, Command};
use torrent_enricher::tracker::structs::info_hash::InfoHash;
use torrent_enricher::udp::enums::probe_outcome::ProbeOutcome;
use torrent_enricher::udp::structs::udp_tracker_client::UdpTrackerClient;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }));
    }

    let Some(command) = args.command else {
        info!("[BOOT] No command given, see --help");
        return Ok(());
    };

    let result = Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            match command {
                Command::Enrich { input, skip_metadata, skip_trackers, scraper } => {
                    run_enrich(config.clone(), input, skip_metadata, skip_trackers, scraper).await
                }
                Command::Scrape { tracker, info_hash } => run_scrape(&config, &tracker, &info_hash).await,
                Command::Trackers => run_trackers(config.clone()).await,
            }
        });

    if let Err(error) = result {
        error!("[BOOT] {}", error);
        exit(1);
    }
    Ok(())
}

async fn read_input(input: Option<String>) -> Result<String, CustomError> {
    let mut data = String::new();
    match input {
        Some(path) => {
            data = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| CustomError::new(&format!("could not read {path}: {e}")))?;
        }
        None => {
            tokio::io::stdin()
                .read_to_string(&mut data)
                .await
                .map_err(|e| CustomError::new(&format!("could not read stdin: {e}")))?;
        }
    }
    Ok(data)
}

async fn run_enrich(
    config: Arc<Configuration>,
    input: Option<String>,
    skip_metadata: bool,
    skip_trackers: bool,
    scraper: Option<String>,
) -> Result<(), CustomError> {
    let records: Vec<TorrentRecord> = serde_json::from_str(&read_input(input).await?)
        .map_err(|e| CustomError::new(&format!("input is not a JSON array of records: {e}")))?;
    let context = EnrichmentContext::new(config).await?;
    let pipeline = context.pipeline();

    let (records, stats) = instrument_with_sentry!(name = "enrich", op = "pipeline", {
        pipeline.enrich(records, skip_metadata, skip_trackers, None, scraper.as_deref()).await
    });

    let output = serde_json::json!({
        "records": records,
        "filter_stats": stats,
    });
    let rendered = serde_json::to_string_pretty(&output)
        .map_err(|e| CustomError::new(&format!("could not encode output: {e}")))?;
    println!("{rendered}");
    Ok(())
}

async fn run_scrape(config: &Configuration, tracker: &str, info_hash: &str) -> Result<(), CustomError> {
    let info_hash = InfoHash::from_str(info_hash.trim())
        .map_err(|e| CustomError::new(&format!("invalid info hash: {e}")))?;
    let client = UdpTrackerClient::from_config(&config.tracker_scrape);
    match client.probe(tracker, &info_hash).await {
        ProbeOutcome::Success(peers) => {
            println!("{info_hash} seeders={} leechers={}", peers.seeders, peers.leechers);
            Ok(())
        }
        ProbeOutcome::Timeout => Err(CustomError::new(&format!("{tracker} did not answer"))),
        ProbeOutcome::ProtocolError(reason) => Err(CustomError::new(&format!("{tracker} sent an invalid reply: {reason}"))),
        ProbeOutcome::Unavailable(error) => Err(CustomError::new(&format!("{tracker} unavailable: {error}"))),
    }
}

async fn run_trackers(config: Arc<Configuration>) -> Result<(), CustomError> {
    let context = EnrichmentContext::new(config).await?;
    let scope = context.request_scope();
    let trackers = scope.trackers().list_provider().get_trackers().await;
    if trackers.is_empty() {
        return Err(CustomError::new("no tracker list could be loaded"));
    }
    for tracker in trackers {
        println!("{tracker}");
    }
    Ok(())
}
