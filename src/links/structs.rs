/// Redirect-following magnet resolver.
pub mod link_resolver;

/// Regex set used to look for magnets and next hops in a page.
pub mod page_scanner;
