use std::fs::File;
use std::io::Write;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::link_resolver_config::LinkResolverConfig;
use crate::config::structs::metadata_config::MetadataConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_scrape_config::TrackerScrapeConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            cache: CacheConfig::default(),
            cache_ttl: CacheTtlConfig::default(),
            tracker_scrape: TrackerScrapeConfig::default(),
            metadata: MetadataConfig::default(),
            link_resolver: LinkResolverConfig::default(),
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init().to_toml()
                    .map_err(|e| CustomError::new(&format!("could not serialize default configuration: {e}")))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        eprintln!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[ERROR] {}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::InvalidValue(format!("unknown log_level '{}'", self.log_level)));
        }
        if self.cache.enabled && self.cache.address.trim().is_empty() {
            return Err(ConfigurationError::InvalidValue("cache.address is empty while the cache is enabled".to_string()));
        }
        if self.tracker_scrape.workers == 0 {
            return Err(ConfigurationError::InvalidValue("tracker_scrape.workers must be at least 1".to_string()));
        }
        if self.tracker_scrape.timeout_ms == 0 {
            return Err(ConfigurationError::InvalidValue("tracker_scrape.timeout_ms must be positive".to_string()));
        }
        if self.metadata.workers == 0 {
            return Err(ConfigurationError::InvalidValue("metadata.workers must be at least 1".to_string()));
        }
        if self.metadata.bucket_capacity == 0 {
            return Err(ConfigurationError::InvalidValue("metadata.bucket_capacity must be at least 1".to_string()));
        }
        if !(self.metadata.refill_per_second.is_finite() && self.metadata.refill_per_second > 0.0) {
            return Err(ConfigurationError::InvalidValue("metadata.refill_per_second must be positive".to_string()));
        }
        if !self.metadata.endpoint.contains("{info_hash}") {
            return Err(ConfigurationError::InvalidValue("metadata.endpoint must contain '{info_hash}'".to_string()));
        }
        if self.link_resolver.max_concurrent == 0 {
            return Err(ConfigurationError::InvalidValue("link_resolver.max_concurrent must be at least 1".to_string()));
        }
        Ok(())
    }
}
