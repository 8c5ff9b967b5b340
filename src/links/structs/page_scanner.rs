use regex::Regex;

#[derive(Debug, Clone)]
pub struct PageScanner {
    pub(crate) quoted_magnet: Regex,
    pub(crate) bare_magnet: Regex,
    pub(crate) data_attribute: Regex,
    pub(crate) redirect_anchor: Regex,
    pub(crate) meta_refresh: Regex,
    pub(crate) refresh_url: Regex,
    pub(crate) script_redirects: Vec<Regex>,
}
