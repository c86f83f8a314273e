//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be duplicated
//! across different command implementations.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::{
    cli::StoreArgs,
    core::{
        cache::{DEFAULT_DISK_MAX_AGE, DEFAULT_MEMORY_CAPACITY},
        default_cache_dir, DiskTier, StoreConfig, UnifiedCache,
    },
    league::LeagueData,
    store::StoreClient,
    Result,
};

/// Placeholder for a missing value in text output.
pub const EMPTY_CELL: &str = "-";

/// Context containing common resources needed by every command
pub struct CommandContext {
    pub league: LeagueData,
}

impl CommandContext {
    /// Resolve store settings and build the client and query cache. Disk
    /// entries older than [`DEFAULT_DISK_MAX_AGE`] are refetched.
    pub fn new(store: &StoreArgs) -> Result<Self> {
        let config = StoreConfig::resolve(store.store_url.clone(), store.api_key.clone())?;
        let client = StoreClient::new(&config)?;
        let disk = disk_tier_for(store, default_cache_dir());
        debug!(store_url = %config.base_url, disk = ?disk, "command context ready");

        Ok(Self {
            league: LeagueData::new(
                client,
                UnifiedCache::new(DEFAULT_MEMORY_CAPACITY, disk)
                    .with_disk_max_age(DEFAULT_DISK_MAX_AGE),
            ),
        })
    }
}

/// `--no-disk-cache` turns the disk tier off; `--refresh` keeps writing to
/// it but never reads.
pub fn disk_tier_for(store: &StoreArgs, cache_dir: PathBuf) -> DiskTier {
    if store.no_disk_cache {
        DiskTier::Off
    } else if store.refresh {
        DiskTier::WriteOnly(cache_dir)
    } else {
        DiskTier::ReadWrite(cache_dir)
    }
}

/// Pretty-print any serializable value to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}

pub fn format_points(points: f64) -> String {
    format!("{:.2}", points)
}

pub fn format_optional_points(points: Option<f64>) -> String {
    points
        .map(format_points)
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Salary cell: `$45`, or `-` when unset.
pub fn format_salary_cell(salary: Option<&str>) -> String {
    match salary {
        Some(s) if !s.is_empty() => format!("${}", s),
        _ => EMPTY_CELL.to_string(),
    }
}

/// `value`, or `-` for `None`.
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or(EMPTY_CELL)
}
