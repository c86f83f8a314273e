//! Roster position types used by the salary pages.

use crate::error::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions as stored in the league database.
///
/// The store keeps positions as plain strings (`"QB"`, `"DEF"`, ...); this
/// enum is the parsed form used for filtering.
///
/// # Examples
///
/// ```rust
/// use dynasty_ffl::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(qb.to_string(), "QB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// Every position, in the order the salary legend lists them.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
    ];

    /// Stored string form of this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        }
    }

    /// Long name shown in the position legend.
    pub fn label(&self) -> &'static str {
        match self {
            Position::QB => "Quarterback",
            Position::RB => "Running Back",
            Position::WR => "Wide Receiver",
            Position::TE => "Tight End",
            Position::K => "Kicker",
            Position::DEF => "Defense",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(LeagueError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

/// Position filter for the salary table: everything, or a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionFilter {
    #[default]
    All,
    Only(Position),
}

impl PositionFilter {
    /// Whether a stored position string passes this filter.
    ///
    /// Matching is exact against the stored string, so a row whose position
    /// is `"qb"` does not pass `Only(QB)`.
    pub fn matches(&self, position: &str) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Only(p) => p.as_str() == position,
        }
    }
}

impl fmt::Display for PositionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFilter::All => write!(f, "ALL"),
            PositionFilter::Only(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for PositionFilter {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            Ok(PositionFilter::All)
        } else {
            s.parse().map(PositionFilter::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::QB.to_string(), "QB");
        assert_eq!(Position::RB.to_string(), "RB");
        assert_eq!(Position::WR.to_string(), "WR");
        assert_eq!(Position::TE.to_string(), "TE");
        assert_eq!(Position::K.to_string(), "K");
        assert_eq!(Position::DEF.to_string(), "DEF");
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!("wr".parse::<Position>().unwrap(), Position::WR);
        assert_eq!(" TE ".parse::<Position>().unwrap(), Position::TE);
        assert_eq!("D/ST".parse::<Position>().unwrap(), Position::DEF);
        assert_eq!("dst".parse::<Position>().unwrap(), Position::DEF);

        match "LB".parse::<Position>() {
            Err(LeagueError::InvalidPosition { position }) => assert_eq!(position, "LB"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_position_labels() {
        assert_eq!(Position::QB.label(), "Quarterback");
        assert_eq!(Position::TE.label(), "Tight End");
        assert_eq!(Position::ALL.len(), 6);
    }

    #[test]
    fn test_position_filter_parse() {
        assert_eq!("ALL".parse::<PositionFilter>().unwrap(), PositionFilter::All);
        assert_eq!("all".parse::<PositionFilter>().unwrap(), PositionFilter::All);
        assert_eq!(
            "rb".parse::<PositionFilter>().unwrap(),
            PositionFilter::Only(Position::RB)
        );
        assert!("FLEX".parse::<PositionFilter>().is_err());
    }

    #[test]
    fn test_position_filter_matches() {
        assert!(PositionFilter::All.matches("QB"));
        assert!(PositionFilter::All.matches(""));

        let qb_only = PositionFilter::Only(Position::QB);
        assert!(qb_only.matches("QB"));
        assert!(!qb_only.matches("RB"));
        assert!(!qb_only.matches("qb"));
    }

    #[test]
    fn test_position_filter_display() {
        assert_eq!(PositionFilter::All.to_string(), "ALL");
        assert_eq!(PositionFilter::Only(Position::DEF).to_string(), "DEF");
        assert_eq!(PositionFilter::default(), PositionFilter::All);
    }
}
