/// Shared store engine selection.
pub mod cache_engine;

/// Value held by the in-process cache.
pub mod memory_value;
