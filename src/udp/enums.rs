/// Outgoing packets.
pub mod request;

/// Incoming packets.
pub mod response;

/// Why a scrape call failed.
pub mod scrape_error;

/// Tagged result of probing one tracker.
pub mod probe_outcome;
