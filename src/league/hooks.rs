//! League queries: one async method per page dataset.
//!
//! Every method returns `Result<T, LeagueError>` and caches its result under
//! a [`QueryKey`]. A cache hit drops the fetch future without polling it, so
//! no request is made.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::compute::{
    assemble_rivalries, outcome_to_view, practice_squad_to_view, salary_to_view,
    standing_to_view,
};
use super::models::{
    PlayerSalaryWithDetails, PlayoffOutcome, PracticeSquadPlayer, Rivalry, TeamWithStandings,
};
use crate::{
    cli::types::SeasonId,
    core::{QueryKey, UnifiedCache},
    store::{
        types::{
            PlayerSalaryRow, PlayoffOutcomeRow, PracticeSquadRow, RivalryMatchupRow, RivalryRow,
            Season, StandingRow, Team,
        },
        Select, StoreClient,
    },
    LeagueError, Result,
};


const STANDINGS_COLUMNS: &str = "*, team:teams(*)";
const SALARY_COLUMNS: &str = "*, player:players(*), team:teams(*)";
const PRACTICE_SQUAD_COLUMNS: &str = "
    id,
    salary_2025,
    salary_2026,
    players!inner(id, full_name, position),
    teams(id, name)
";

/// Store client plus the query cache shared by every hook.
pub struct LeagueData {
    client: StoreClient,
    cache: UnifiedCache<QueryKey, Value>,
}

impl LeagueData {
    pub fn new(client: StoreClient, cache: UnifiedCache<QueryKey, Value>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &UnifiedCache<QueryKey, Value> {
        &self.cache
    }

    /// Return the cached value for `key`, or await `fetch` and cache it.
    ///
    /// A cached value that no longer decodes as `T` counts as a miss.
    async fn cached<T, F>(&self, key: QueryKey, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = Result<T>>,
    {
        if let Some(value) = self.cache.get(&key) {
            match serde_json::from_value(value) {
                Ok(data) => {
                    debug!(key = %key, "cache hit");
                    return Ok(data);
                }
                Err(e) => warn!(key = %key, error = %e, "discarding undecodable cache entry"),
            }
        }

        debug!(key = %key, "cache miss");
        let data = fetch.await?;
        let value = serde_json::to_value(&data).map_err(|e| LeagueError::Cache {
            message: format!("failed to encode {}: {}", key, e),
        })?;
        self.cache.put(key, value);
        Ok(data)
    }

    async fn load_active_season(&self) -> Result<Option<Season>> {
        self.client
            .fetch_maybe_single(&Select::from("seasons").eq("is_active", true).maybe_single())
            .await
    }

    async fn load_standings(&self, season_id: &str) -> Result<Vec<TeamWithStandings>> {
        let rows: Vec<StandingRow> = self
            .client
            .fetch_rows(
                &Select::from("regular_season_standings")
                    .columns(STANDINGS_COLUMNS)
                    .eq("season_id", season_id)
                    .order("rank", true),
            )
            .await?;
        Ok(rows.into_iter().map(standing_to_view).collect())
    }

    /// All teams, ordered by name.
    pub async fn teams(&self) -> Result<Vec<Team>> {
        self.cached(QueryKey::Teams, async {
            self.client
                .fetch_rows(&Select::from("teams").order("name", true))
                .await
        })
        .await
    }

    /// The single active season, if one is flagged.
    pub async fn active_season(&self) -> Result<Option<Season>> {
        self.cached(QueryKey::ActiveSeason, self.load_active_season())
            .await
    }

    /// Standings of the active season, by rank. Empty when no season is
    /// active; the standings read is then never issued.
    pub async fn active_season_standings(&self) -> Result<Vec<TeamWithStandings>> {
        self.cached(QueryKey::ActiveSeasonStandings, async {
            match self.load_active_season().await? {
                Some(season) => self.load_standings(&season.id).await,
                None => {
                    info!("no active season");
                    Ok(Vec::new())
                }
            }
        })
        .await
    }

    /// Standings of one season, by rank. `None` or a blank id yields an
    /// empty list without touching the store or the cache.
    pub async fn season_standings(
        &self,
        season_id: Option<&SeasonId>,
    ) -> Result<Vec<TeamWithStandings>> {
        let Some(season_id) = season_id.filter(|id| !id.as_str().trim().is_empty()) else {
            return Ok(Vec::new());
        };

        self.cached(
            QueryKey::SeasonStandings(season_id.clone()),
            self.load_standings(season_id.as_str()),
        )
        .await
    }

    /// All seasons, newest first.
    pub async fn seasons(&self) -> Result<Vec<Season>> {
        self.cached(QueryKey::Seasons, async {
            self.client
                .fetch_rows(&Select::from("seasons").order("year", false))
                .await
        })
        .await
    }

    /// Playoff results of the active season, by rank.
    pub async fn playoff_outcomes(&self) -> Result<Vec<PlayoffOutcome>> {
        self.cached(QueryKey::ActivePlayoffOutcomes, async {
            let Some(season) = self.load_active_season().await? else {
                info!("no active season");
                return Ok(Vec::new());
            };

            let rows: Vec<PlayoffOutcomeRow> = self
                .client
                .fetch_rows(
                    &Select::from("playoff_outcomes")
                        .columns(STANDINGS_COLUMNS)
                        .eq("season_id", &season.id)
                        .order("rank", true),
                )
                .await?;
            Ok(rows.into_iter().map(outcome_to_view).collect())
        })
        .await
    }

    /// Every contract, ordered by the player's last name.
    pub async fn player_salaries(&self) -> Result<Vec<PlayerSalaryWithDetails>> {
        self.cached(QueryKey::PlayerSalaries, async {
            let rows: Vec<PlayerSalaryRow> = self
                .client
                .fetch_rows(
                    &Select::from("player_salaries")
                        .columns(SALARY_COLUMNS)
                        .order("player(last_name)", true),
                )
                .await?;
            Ok(rows.into_iter().map(salary_to_view).collect())
        })
        .await
    }

    /// Practice squad contracts, ordered by team.
    pub async fn practice_squad(&self) -> Result<Vec<PracticeSquadPlayer>> {
        self.cached(QueryKey::PracticeSquadPlayers, async {
            let rows: Vec<PracticeSquadRow> = self
                .client
                .fetch_rows(
                    &Select::from("player_salaries")
                        .columns(PRACTICE_SQUAD_COLUMNS)
                        .eq("practice_squad", true)
                        .order("team_id", true),
                )
                .await?;
            Ok(rows.into_iter().map(practice_squad_to_view).collect())
        })
        .await
    }

    /// Rivalries with their matchups and governors' current teams.
    ///
    /// The three reads run concurrently; the first failure is returned.
    pub async fn rivalries(&self) -> Result<Vec<Rivalry>> {
        self.cached(QueryKey::Rivalries, async {
            let rivalries_select = Select::from("rivalries").order("game_name", true);
            let matchups_select = Select::from("rivalry_matchups").order("season", false);
            let teams_select = Select::from("teams").columns("name, owner_name");

            let (rivalries, matchups, teams): (Vec<RivalryRow>, Vec<RivalryMatchupRow>, Vec<Team>) =
                tokio::try_join!(
                    self.client.fetch_rows(&rivalries_select),
                    self.client.fetch_rows(&matchups_select),
                    self.client.fetch_rows(&teams_select),
                )?;

            Ok(assemble_rivalries(rivalries, matchups, &teams))
        })
        .await
    }
}
