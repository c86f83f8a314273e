//! Governor short names and the owners they stand for.

use phf::phf_map;

/// Short governor name -> full owner name as stored on `teams.owner_name`.
static GOVERNOR_OWNERS: phf::Map<&'static str, &'static str> = phf_map! {
    "Ben" => "Ben Holcomb",
    "Dino" => "Dino Nicandros",
    "Jackson" => "Jackson Ferrell",
    "Hobart" => "Will Hobart",
    "Bill" => "Bill Holcomb",
    "Johnny" => "John Holcomb2",
    "Carlos" => "Carlos Evans",
    "Blake" => "Blake Blacklidge",
    "James" => "James Holcomb",
    "Aicklen" => "John Aicklen",
};

/// Full owner name for a governor, if the governor is in the table.
/// Lookup is case-sensitive.
pub fn owner_for_governor(governor: &str) -> Option<&'static str> {
    GOVERNOR_OWNERS.get(governor).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_governors() {
        assert_eq!(owner_for_governor("Ben"), Some("Ben Holcomb"));
        assert_eq!(owner_for_governor("Hobart"), Some("Will Hobart"));
        assert_eq!(owner_for_governor("Johnny"), Some("John Holcomb2"));
        assert_eq!(owner_for_governor("Aicklen"), Some("John Aicklen"));
    }

    #[test]
    fn test_unknown_or_miscased_governor() {
        assert_eq!(owner_for_governor("Zed"), None);
        assert_eq!(owner_for_governor("ben"), None);
        assert_eq!(owner_for_governor(""), None);
    }

    #[test]
    fn test_table_size() {
        assert_eq!(GOVERNOR_OWNERS.len(), 10);
    }
}
