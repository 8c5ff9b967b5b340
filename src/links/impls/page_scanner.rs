use regex::Regex;
use crate::links::enums::page_scan::PageScan;
use crate::links::links::{decode_magnet_layers, unescape_link};
use crate::links::structs::page_scanner::PageScanner;

impl PageScanner {
    pub fn new() -> Result<PageScanner, regex::Error> {
        Ok(PageScanner {
            quoted_magnet: Regex::new(r#"["'](magnet:\?[^"']+)["']"#)?,
            bare_magnet: Regex::new(r#"magnet:\?[^"'\s<>]+"#)?,
            data_attribute: Regex::new(r#"(?i)data-(?:download|link|magnet|url)\s*=\s*["']([^"']+)["']"#)?,
            redirect_anchor: Regex::new(r#"(?i)href\s*=\s*["']([^"']*(?:receber|recebi|link)\.php[^"']*)["']"#)?,
            meta_refresh: Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?refresh["']?[^>]*>"#)?,
            refresh_url: Regex::new(r#"(?i)url\s*=\s*([^"';>]+)"#)?,
            script_redirects: vec![
                Regex::new(r#"(?i)location\.replace\(\s*["']((?:[^"'\\]|\\.)+)["']\s*\)"#)?,
                Regex::new(r#"(?i)location\.href\s*=\s*["']((?:[^"'\\]|\\.)+)["']"#)?,
                Regex::new(r#"(?i)window\.location\s*=\s*["']((?:[^"'\\]|\\.)+)["']"#)?,
            ],
        })
    }

    /// Magnets win over next hops. Among quoted magnets the longest is taken,
    /// shorter ones are usually truncated copies.
    pub fn scan(&self, body: &str) -> PageScan {
        if let Some(magnet) = self.find_magnet(body) {
            return PageScan::Magnet(magnet);
        }
        match self.find_next_hop(body) {
            Some(next) => PageScan::Next(next),
            None => PageScan::Nothing,
        }
    }

    fn find_magnet(&self, body: &str) -> Option<String> {
        let quoted = self.quoted_magnet
            .captures_iter(body)
            .filter_map(|captures| captures.get(1))
            .map(|found| found.as_str())
            .max_by_key(|found| found.len());
        if let Some(magnet) = quoted {
            return Some(unescape_link(magnet));
        }
        if let Some(found) = self.bare_magnet.find(body) {
            return Some(unescape_link(found.as_str()));
        }
        self.data_attribute
            .captures_iter(body)
            .filter_map(|captures| captures.get(1))
            .find_map(|value| decode_magnet_layers(value.as_str().trim()))
    }

    fn find_next_hop(&self, body: &str) -> Option<String> {
        if let Some(captures) = self.redirect_anchor.captures(body) {
            return Some(unescape_link(&captures[1]));
        }
        for tag in self.meta_refresh.find_iter(body) {
            if let Some(captures) = self.refresh_url.captures(tag.as_str()) {
                return Some(unescape_link(&captures[1]));
            }
        }
        self.script_redirects
            .iter()
            .find_map(|pattern| pattern.captures(body))
            .map(|captures| unescape_link(&captures[1]))
    }
}
