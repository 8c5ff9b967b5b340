use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub total: usize,
    pub filtered: usize,
    pub approved: usize,
    pub scraper_name: Option<String>,
}
