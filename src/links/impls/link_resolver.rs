use std::sync::Arc;
use std::time::Duration;
use log::{debug, warn};
use reqwest::header::{ACCEPT, LOCATION, REFERER, USER_AGENT};
use reqwest::{StatusCode, Url};
use crate::cache::structs::cache_store::CacheStore;
use crate::config::structs::link_resolver_config::LinkResolverConfig;
use crate::links::enums::page_scan::PageScan;
use crate::links::links::{decode_ad_link, is_magnet};
use crate::links::structs::link_resolver::LinkResolver;
use crate::links::structs::page_scanner::PageScanner;
use crate::resilience::structs::link_limiter::LinkLimiter;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

impl LinkResolver {
    /// `client` must be built with `redirect::Policy::none()`.
    pub fn new(
        config: &LinkResolverConfig,
        client: reqwest::Client,
        limiter: Arc<LinkLimiter>,
        scanner: PageScanner,
        store: CacheStore,
    ) -> LinkResolver {
        LinkResolver {
            client,
            limiter,
            store,
            scanner,
            timeout: Duration::from_secs(config.timeout),
            slow_timeout: Duration::from_secs(config.slow_timeout),
            slow_domains: config.slow_domains.iter().map(|domain| domain.to_lowercase()).collect(),
            max_redirects: config.max_redirects,
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn timeout_for(&self, domain: &str) -> Duration {
        let domain = domain.to_lowercase();
        let slow = self.slow_domains
            .iter()
            .any(|slow| domain == *slow || domain.ends_with(&format!(".{slow}")));
        if slow { self.slow_timeout } else { self.timeout }
    }

    /// Magnet behind `url`, or `None` when it cannot be resolved.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn resolve(&self, url: &str, referer: Option<&str>) -> Option<String> {
        let url = url.trim();
        if is_magnet(url) {
            return Some(url.to_string());
        }
        if let Some(magnet) = self.store.get_protected_link(url).await {
            debug!("[LINKS] cache hit for {}", url);
            return Some(magnet);
        }
        let magnet = match decode_ad_link(url) {
            Some(magnet) => magnet,
            None => self.follow(url, referer).await?,
        };
        self.store.set_protected_link(url, &magnet).await;
        Some(magnet)
    }

    async fn follow(&self, start: &str, referer: Option<&str>) -> Option<String> {
        let mut current = match Url::parse(start) {
            Ok(url) => url,
            Err(error) => {
                debug!("[LINKS] invalid url {}: {}", start, error);
                return None;
            }
        };
        let mut previous = referer.map(str::to_string);

        for hop in 0..=self.max_redirects {
            let domain = current.host_str().unwrap_or("unknown").to_string();
            let Ok(_permit) = self.limiter.acquire(&domain).await else {
                return None;
            };

            let mut request = self.client
                .get(current.clone())
                .timeout(self.timeout_for(&domain))
                .header(USER_AGENT, self.user_agent.as_str())
                .header(ACCEPT, ACCEPT_HTML);
            if let Some(referer) = &previous {
                request = request.header(REFERER, referer.as_str());
            }
            let response = match request.send().await {
                Ok(response) => response,
                Err(error) if error.is_timeout() => {
                    debug!("[LINKS] timeout on {} after {} hops", current, hop);
                    return None;
                }
                Err(error) => {
                    debug!("[LINKS] request to {} failed: {}", current, error);
                    return None;
                }
            };

            let status = response.status();
            let next = if is_redirect(status) {
                let location = response.headers()
                    .get(LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string();
                if location.is_empty() {
                    debug!("[LINKS] {} redirect without a location", current);
                    return None;
                }
                if is_magnet(&location) {
                    return Some(location);
                }
                location
            } else if status == StatusCode::OK {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(error) => {
                        debug!("[LINKS] unreadable body from {}: {}", current, error);
                        return None;
                    }
                };
                match self.scanner.scan(&body) {
                    PageScan::Magnet(magnet) => return Some(magnet),
                    PageScan::Next(next) => next,
                    PageScan::Nothing => {
                        warn!("[LINKS] no magnet found after {} hops ({})", hop, current);
                        return None;
                    }
                }
            } else {
                warn!("[LINKS] unexpected status {} from {}", status.as_u16(), current);
                return None;
            };

            let joined = match current.join(&next) {
                Ok(joined) => joined,
                Err(error) => {
                    debug!("[LINKS] bad next hop {} from {}: {}", next, current, error);
                    return None;
                }
            };
            previous = Some(current.to_string());
            current = joined;
        }

        debug!("[LINKS] gave up on {} after {} redirects", start, self.max_redirects);
        None
    }
}

fn is_redirect(status: StatusCode) -> bool {
    matches!(status.as_u16(), 301 | 302 | 303 | 307 | 308)
}
