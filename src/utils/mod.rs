/// Sentry transaction helpers used around cache startup and pipeline runs.
pub mod sentry_tracing;
