use std::time::Duration;
use log::{debug, error};
use reqwest::header::USER_AGENT;
use crate::cache::keys::CIRCUIT_TRACKER_KEY;
use crate::cache::structs::cache_store::CacheStore;
use crate::config::structs::tracker_scrape_config::TrackerScrapeConfig;
use crate::resilience::enums::failure_kind::FailureKind;
use crate::resilience::structs::circuit_breaker::CircuitBreaker;
use crate::resilience::structs::circuit_policy::CircuitPolicy;
use crate::tracker::structs::tracker_list_provider::TrackerListProvider;
use crate::tracker::tracker::parse_tracker_list;

impl TrackerListProvider {
    pub fn new(config: &TrackerScrapeConfig, client: reqwest::Client, store: CacheStore) -> TrackerListProvider {
        let policy = CircuitPolicy::tracker_list(config, store.ttl());
        TrackerListProvider {
            client,
            sources: config.list_sources.clone(),
            source_timeout: Duration::from_secs(config.list_source_timeout),
            user_agent: config.user_agent.clone(),
            breaker: CircuitBreaker::new(CIRCUIT_TRACKER_KEY, policy, store.clone()),
            store,
        }
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Possibly empty list of normalized tracker URLs.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn get_trackers(&self) -> Vec<String> {
        if let Some(trackers) = self.store.get_tracker_list().await {
            return trackers;
        }

        if self.breaker.is_open().await {
            debug!("[TRACKERS] circuit open, skipping remote tracker lists");
            return Vec::new();
        }

        for source in &self.sources {
            match self.fetch_source(source).await {
                Ok(trackers) if !trackers.is_empty() => {
                    debug!("[TRACKERS] loaded {} trackers from {}", trackers.len(), source);
                    self.store.set_tracker_list(&trackers).await;
                    self.breaker.record_success().await;
                    return trackers;
                }
                Ok(_) => {
                    debug!("[TRACKERS] {} returned no usable trackers", source);
                }
                Err(err) if err.is_timeout() => {
                    debug!("[TRACKERS] timeout: {}", source);
                    self.breaker.record_failure(FailureKind::Timeout).await;
                }
                Err(err) => {
                    match err.status() {
                        Some(status) => debug!("[TRACKERS] HTTP {}: {}", status.as_u16(), source),
                        None => debug!("[TRACKERS] connection error: {} - {}", source, err),
                    }
                    self.breaker.record_failure(FailureKind::Unavailable).await;
                }
            }
        }

        error!("[TRACKERS] failed to obtain a dynamic tracker list");
        Vec::new()
    }

    async fn fetch_source(&self, source: &str) -> Result<Vec<String>, reqwest::Error> {
        let body = self.client
            .get(source)
            .header(USER_AGENT, self.user_agent.as_str())
            .timeout(self.source_timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(parse_tracker_list(&body))
    }
}
