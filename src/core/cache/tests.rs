//! Unit tests for the query cache

use super::*;
use serde_json::{json, Value};
use tempfile::TempDir;

#[cfg(test)]
mod cache_tests {
    use super::*;

    #[test]
    fn test_default_cache_dir() {
        let path = default_cache_dir();
        assert!(path.to_string_lossy().ends_with("dynasty-ffl"));
    }

    #[test]
    fn test_try_read_to_string_existing_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("test.txt");
        fs::write(&file_path, "hello world").unwrap();

        assert_eq!(try_read_to_string(&file_path), Some("hello world".to_string()));
    }

    #[test]
    fn test_try_read_to_string_nonexistent_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(try_read_to_string(&dir.path().join("missing.txt")), None);
    }

    #[test]
    fn test_write_string_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("subdir").join("output.txt");

        write_string(&file_path, "test content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "test content");
    }

    #[test]
    fn test_query_key_names_and_display() {
        assert_eq!(QueryKey::Teams.to_string(), "teams");
        assert_eq!(QueryKey::ActiveSeason.to_string(), "active-season");
        assert_eq!(QueryKey::PlayerSalaries.to_string(), "player-salaries");
        assert_eq!(
            QueryKey::SeasonStandings(SeasonId::new("s1")).to_string(),
            "season-standings/s1"
        );
        assert_eq!(
            QueryKey::SeasonStandings(SeasonId::new("s1")).name(),
            "season-standings"
        );
    }

    #[test]
    fn test_query_key_file_key_is_path_safe() {
        let key = QueryKey::SeasonStandings(SeasonId::new("../etc/passwd"));
        let file_key = key.to_file_key();

        assert_eq!(file_key, "season-standings____etc_passwd");
        assert!(!file_key.contains('/'));
        assert_eq!(QueryKey::Rivalries.to_file_key(), "rivalries");
    }

    #[test]
    fn test_distinct_season_ids_are_distinct_keys() {
        let a = QueryKey::SeasonStandings(SeasonId::new("a"));
        let b = QueryKey::SeasonStandings(SeasonId::new("b"));
        assert_ne!(a, b);
        assert_ne!(a.to_file_key(), b.to_file_key());
    }

    #[test]
    fn test_memory_cache_put_get_and_eviction() {
        let cache: UnifiedCache<QueryKey, Value> = UnifiedCache::in_memory(2);

        cache.put(QueryKey::Teams, json!(["a"]));
        assert_eq!(cache.get(&QueryKey::Teams), Some(json!(["a"])));

        cache.put(QueryKey::Seasons, json!([]));
        cache.put(QueryKey::Rivalries, json!([]));

        let (used, capacity) = cache.memory_stats();
        assert_eq!(used, 2);
        assert_eq!(capacity, 2);
        assert_eq!(cache.get(&QueryKey::Teams), None);
        assert_eq!(cache.get(&QueryKey::Seasons), Some(json!([])));
    }

    #[test]
    fn test_zero_capacity_treated_as_one() {
        let cache: UnifiedCache<QueryKey, Value> = UnifiedCache::in_memory(0);
        assert_eq!(cache.memory_stats(), (0, 1));
    }

    #[test]
    fn test_disk_hit_is_promoted_to_memory() {
        let dir = TempDir::new().unwrap();
        let writer: UnifiedCache<QueryKey, Value> =
            UnifiedCache::new(4, DiskTier::ReadWrite(dir.path().to_path_buf()));
        writer.put(QueryKey::Seasons, json!([{"year": 2025}]));

        assert!(dir.path().join("seasons.json").exists());

        let reader: UnifiedCache<QueryKey, Value> =
            UnifiedCache::new(4, DiskTier::ReadWrite(dir.path().to_path_buf()));
        assert_eq!(reader.memory_stats().0, 0);
        assert_eq!(reader.get(&QueryKey::Seasons), Some(json!([{"year": 2025}])));
        assert_eq!(reader.memory_stats().0, 1);
    }

    #[test]
    fn test_write_only_tier_ignores_existing_disk_entries() {
        let dir = TempDir::new().unwrap();
        write_string(&dir.path().join("teams.json"), "[\"stale\"]").unwrap();

        let cache: UnifiedCache<QueryKey, Value> =
            UnifiedCache::new(4, DiskTier::WriteOnly(dir.path().to_path_buf()));
        assert_eq!(cache.get(&QueryKey::Teams), None);

        cache.put(QueryKey::Teams, json!(["fresh"]));
        let on_disk = fs::read_to_string(dir.path().join("teams.json")).unwrap();
        assert!(on_disk.contains("fresh"));
    }

    #[test]
    fn test_corrupt_disk_entry_is_a_miss() {
        let dir = TempDir::new().unwrap();
        write_string(&dir.path().join("rivalries.json"), "not json").unwrap();

        let cache: UnifiedCache<QueryKey, Value> =
            UnifiedCache::new(4, DiskTier::ReadWrite(dir.path().to_path_buf()));
        assert_eq!(cache.get(&QueryKey::Rivalries), None);
    }

    #[test]
    fn test_fresh_disk_entry_within_max_age_is_a_hit() {
        let dir = TempDir::new().unwrap();
        let writer: UnifiedCache<QueryKey, Value> =
            UnifiedCache::new(4, DiskTier::ReadWrite(dir.path().to_path_buf()));
        writer.put(QueryKey::ActiveSeason, json!({"id": "s24"}));

        let reader: UnifiedCache<QueryKey, Value> =
            UnifiedCache::new(4, DiskTier::ReadWrite(dir.path().to_path_buf()))
                .with_disk_max_age(Duration::from_secs(3600));
        assert_eq!(reader.disk_max_age(), Some(Duration::from_secs(3600)));
        assert_eq!(
            reader.get(&QueryKey::ActiveSeason),
            Some(json!({"id": "s24"}))
        );
    }

    #[test]
    fn test_expired_disk_entry_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let writer: UnifiedCache<QueryKey, Value> =
            UnifiedCache::new(4, DiskTier::ReadWrite(dir.path().to_path_buf()));
        writer.put(QueryKey::ActiveSeason, json!({"id": "s24"}));

        let reader: UnifiedCache<QueryKey, Value> =
            UnifiedCache::new(4, DiskTier::ReadWrite(dir.path().to_path_buf()))
                .with_disk_max_age(Duration::ZERO);
        assert_eq!(reader.get(&QueryKey::ActiveSeason), None);
        assert_eq!(reader.memory_stats().0, 0);

        // entries put in this session are still served from memory
        reader.put(QueryKey::ActiveSeason, json!({"id": "s25"}));
        assert_eq!(
            reader.get(&QueryKey::ActiveSeason),
            Some(json!({"id": "s25"}))
        );
    }

    #[test]
    fn test_file_age() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("teams.json");
        assert_eq!(file_age(&path), None);

        write_string(&path, "[]").unwrap();
        assert!(file_age(&path).unwrap() < Duration::from_secs(3600));
    }
}
