use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LinkResolverConfig {
    pub max_concurrent: usize,
    pub min_domain_delay_ms: u64,
    pub timeout: u64,
    pub slow_timeout: u64,
    pub slow_domains: Vec<String>,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for LinkResolverConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 5,
            min_domain_delay_ms: 200,
            timeout: 5,
            slow_timeout: 10,
            slow_domains: vec!["t.co".to_string()],
            max_redirects: 20,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36".to_string(),
        }
    }
}
