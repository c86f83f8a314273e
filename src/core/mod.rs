//! Core utilities for the dynasty league client
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: Query result caching (memory + disk)
//! - `config`: Store URL and API key resolution
//! - `http`: Store request headers

pub mod cache;
pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{default_cache_dir, CacheKey, DiskTier, QueryKey, UnifiedCache};
pub use config::StoreConfig;
pub use http::store_headers;
