//! Query result cache: in-memory LRU backed by optional JSON files on disk
//!
//! This module provides a two-tier caching system:
//! - L1 Cache: In-memory LRU cache, one entry per query key
//! - L2 Cache: File system persistence so results survive between runs
//!
//! Disk hits are promoted to memory. Disk entries older than the cache's max
//! age count as misses. `--refresh` runs use a write-only disk tier so fresh
//! results still replace what is on disk.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
    time::Duration,
};
use tracing::{debug, warn};

use crate::cli::types::SeasonId;

#[cfg(test)]
mod tests;

/// Default number of query results kept in memory.
pub const DEFAULT_MEMORY_CAPACITY: usize = 64;

/// How long a disk entry written by one CLI run may serve later runs.
pub const DEFAULT_DISK_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// Path: ~/.cache/dynasty-ffl
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("dynasty-ffl")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Time since `path` was last written. A modification time in the future
/// counts as zero.
pub fn file_age(path: &Path) -> Option<Duration> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(modified.elapsed().unwrap_or_default())
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Cache key usable for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// String form used as the file name on disk
    fn to_file_key(&self) -> String;

    /// File path for this entry under `dir`
    fn to_file_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.to_file_key()))
    }
}

/// Stable key for every query the league hooks issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Teams,
    ActiveSeason,
    ActiveSeasonStandings,
    SeasonStandings(SeasonId),
    Seasons,
    ActivePlayoffOutcomes,
    PlayerSalaries,
    PracticeSquadPlayers,
    Rivalries,
}

impl QueryKey {
    /// Query name without parameters.
    pub fn name(&self) -> &'static str {
        match self {
            QueryKey::Teams => "teams",
            QueryKey::ActiveSeason => "active-season",
            QueryKey::ActiveSeasonStandings => "active-season-standings",
            QueryKey::SeasonStandings(_) => "season-standings",
            QueryKey::Seasons => "seasons",
            QueryKey::ActivePlayoffOutcomes => "active-playoff-outcomes",
            QueryKey::PlayerSalaries => "player-salaries",
            QueryKey::PracticeSquadPlayers => "practice-squad-players",
            QueryKey::Rivalries => "rivalries",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::SeasonStandings(id) => write!(f, "{}/{}", self.name(), id),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl CacheKey for QueryKey {
    fn to_file_key(&self) -> String {
        match self {
            QueryKey::SeasonStandings(id) => {
                let safe: String = id
                    .as_str()
                    .chars()
                    .map(|c| {
                        if c.is_ascii_alphanumeric() || c == '-' {
                            c
                        } else {
                            '_'
                        }
                    })
                    .collect();
                format!("{}_{}", self.name(), safe)
            }
            _ => self.name().to_string(),
        }
    }
}

/// How the cache uses its disk directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiskTier {
    /// Memory only.
    Off,
    /// Read hits from disk and write every put.
    ReadWrite(PathBuf),
    /// Never read from disk, but still write every put.
    WriteOnly(PathBuf),
}

impl DiskTier {
    fn dir(&self) -> Option<&Path> {
        match self {
            DiskTier::Off => None,
            DiskTier::ReadWrite(dir) | DiskTier::WriteOnly(dir) => Some(dir),
        }
    }
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Mutex<LruCache<K, V>>,
    memory_capacity: usize,
    disk: DiskTier,
    disk_max_age: Option<Duration>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a new cache with the given memory capacity and disk tier.
    ///
    /// A capacity of zero is treated as one. Disk entries never expire
    /// unless [`with_disk_max_age`](Self::with_disk_max_age) is set.
    pub fn new(memory_capacity: usize, disk: DiskTier) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            memory_capacity: capacity.get(),
            disk,
            disk_max_age: None,
        }
    }

    /// Treat disk entries at least `max_age` old as misses.
    pub fn with_disk_max_age(mut self, max_age: Duration) -> Self {
        self.disk_max_age = Some(max_age);
        self
    }

    /// Memory-only cache.
    pub fn in_memory(memory_capacity: usize) -> Self {
        Self::new(memory_capacity, DiskTier::Off)
    }

    fn memory(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(value) = self.memory().get(key) {
            return Some(value.clone());
        }

        if let Some(value) = self.get_from_disk(key) {
            self.memory().put(key.clone(), value.clone());
            return Some(value);
        }

        None
    }

    /// Put an item into cache (stores in memory and, if enabled, on disk)
    pub fn put(&self, key: K, value: V) {
        if let Err(e) = self.put_to_disk(&key, &value) {
            warn!(key = %key.to_file_key(), error = %e, "failed to write disk cache entry");
        }
        self.memory().put(key, value);
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let DiskTier::ReadWrite(dir) = &self.disk else {
            return None;
        };
        let path = key.to_file_path(dir);
        if let Some(max_age) = self.disk_max_age {
            let age = file_age(&path)?;
            if age >= max_age {
                debug!(key = %key.to_file_key(), age_secs = age.as_secs(), "disk cache entry expired");
                return None;
            }
        }
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let Some(dir) = self.disk.dir() else {
            return Ok(());
        };
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&key.to_file_path(dir), &content)
    }

    /// Get memory cache statistics: (entries, capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.memory().len(), self.memory_capacity)
    }

    pub fn disk_tier(&self) -> &DiskTier {
        &self.disk
    }

    pub fn disk_max_age(&self) -> Option<Duration> {
        self.disk_max_age
    }
}
