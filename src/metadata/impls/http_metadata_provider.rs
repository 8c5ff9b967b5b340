use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use reqwest::header::{RANGE, USER_AGENT};
use crate::config::structs::metadata_config::MetadataConfig;
use crate::metadata::errors::MetadataError;
use crate::metadata::structs::http_metadata_provider::HttpMetadataProvider;
use crate::metadata::structs::torrent_header_parser::TorrentHeaderParser;
use crate::metadata::structs::torrent_metadata::TorrentMetadata;
use crate::metadata::traits::metadata_provider::MetadataProvider;
use crate::tracker::structs::info_hash::InfoHash;

const INITIAL_CHUNK: usize = 128 * 1024;
const MAX_CHUNK: usize = 256 * 1024;
const MAX_HEADER: usize = 512 * 1024;
const MAX_REQUESTS: usize = 8;
const PIECES_KEY: &[u8] = b"pieces";

impl HttpMetadataProvider {
    pub fn new(config: &MetadataConfig, client: reqwest::Client) -> Result<HttpMetadataProvider, regex::Error> {
        Ok(HttpMetadataProvider {
            client,
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout),
            user_agent: config.user_agent.clone(),
            parser: TorrentHeaderParser::new()?,
        })
    }

    pub fn url_for(&self, info_hash: &InfoHash, uppercase: bool) -> String {
        let hex = info_hash.to_string();
        let hex = if uppercase { hex.to_uppercase() } else { hex };
        self.endpoint.replace("{info_hash}", &hex)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn fetch_header(&self, url: &str) -> Result<Vec<u8>, MetadataError> {
        let mut data: Vec<u8> = Vec::new();
        let mut start = 0usize;
        let mut chunk_size = INITIAL_CHUNK;

        for _ in 0..MAX_REQUESTS {
            if start >= MAX_HEADER {
                break;
            }
            let end = (start + chunk_size).min(MAX_HEADER) - 1;
            let response = self.client
                .get(url)
                .header(USER_AGENT, self.user_agent.as_str())
                .header(RANGE, format!("bytes={start}-{end}"))
                .timeout(self.timeout)
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            match status {
                StatusCode::OK | StatusCode::PARTIAL_CONTENT => {}
                StatusCode::NOT_FOUND | StatusCode::RANGE_NOT_SATISFIABLE if !data.is_empty() => break,
                StatusCode::NOT_FOUND => return Err(MetadataError::NotFound),
                StatusCode::SERVICE_UNAVAILABLE => return Err(MetadataError::Unavailable),
                other => return Err(MetadataError::Http(other.as_u16())),
            }

            let chunk = response.bytes().await.map_err(transport_error)?;
            if chunk.is_empty() {
                break;
            }
            data.extend_from_slice(&chunk);

            if looks_like_html(&data) {
                return Err(MetadataError::NotFound);
            }
            if contains(&data, PIECES_KEY) {
                return Ok(data);
            }
            if status == StatusCode::OK || chunk.len() < end + 1 - start {
                break;
            }
            start += chunk.len();
            chunk_size = (chunk_size * 2).min(MAX_CHUNK);
        }

        if data.is_empty() {
            return Err(MetadataError::NotFound);
        }
        Ok(data)
    }
}

#[async_trait]
impl MetadataProvider for HttpMetadataProvider {
    /// Lowercase URL first; a plain miss is retried with the uppercase hash.
    async fn fetch(&self, info_hash: &InfoHash) -> Result<TorrentMetadata, MetadataError> {
        let data = match self.fetch_header(&self.url_for(info_hash, false)).await {
            Err(MetadataError::NotFound) => {
                debug!("[METADATA] {} not found lowercase, retrying uppercase", info_hash);
                self.fetch_header(&self.url_for(info_hash, true)).await?
            }
            other => other?,
        };
        self.parser.parse(&data)
    }
}

fn transport_error(error: reqwest::Error) -> MetadataError {
    if error.is_timeout() {
        MetadataError::Timeout
    } else {
        MetadataError::Transport(error.to_string())
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

fn looks_like_html(data: &[u8]) -> bool {
    contains(data, b"<!DOCTYPE html")
        || data.windows(5).any(|window| window.eq_ignore_ascii_case(b"<html"))
}
