#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageScan {
    Magnet(String),
    /// Next hop, possibly relative to the scanned page.
    Next(String),
    Nothing,
}
