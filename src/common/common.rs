use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use sha1::{Digest, Sha1};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()
    {
        return Err(CustomError::new(&format!("Failed to initialize logging: {err}")));
    }
    info!("logging initialized.");
    Ok(())
}

pub fn current_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Unix time in fractional seconds.
pub fn current_time_precise() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

/// SHA-1 hex digest used to shorten URLs and titles into cache keys.
pub fn hash_key(data: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize().as_slice())
}

/// Human readable size, `""` for anything that is not a positive byte count.
pub fn format_bytes(size: i64) -> String {
    if size <= 0 {
        return String::new();
    }
    let mut idx = 0;
    let mut value = size as f64;
    while value >= 1024.0 && idx < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        idx += 1;
    }
    if idx == 0 {
        return format!("{} {}", value as i64, BYTE_UNITS[idx]);
    }
    format!("{:.2} {}", value, BYTE_UNITS[idx])
}

/// Splits a query string into lowercase keys and percent-decoded values.
///
/// Repeated keys keep every value in input order; `+` is decoded as a space.
pub fn parse_query(query: &str) -> HashMap<String, Vec<String>> {
    let mut queries: HashMap<String, Vec<String>> = HashMap::new();
    for query_item in query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_raw, value_raw) = query_item.split_once('=').unwrap_or((query_item, ""));
        let key_name = percent_encoding::percent_decode_str(key_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let value_data = percent_encoding::percent_decode_str(&value_raw.replace('+', " "))
            .decode_utf8_lossy()
            .into_owned();
        queries.entry(key_name).or_default().push(value_data);
    }
    queries
}

/// Keeps the first occurrence of every item, preserving order.
pub fn unique_stable(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}
