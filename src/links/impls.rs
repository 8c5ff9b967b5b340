/// Resolution flow for `LinkResolver`.
pub mod link_resolver;

/// Page scanning for `PageScanner`.
pub mod page_scanner;
