use crate::espn::{LeagueHistory, ScheduleEntry};
use crate::Matchup;
use log::debug;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const ESPN_FFL_V3: &str = "https://fantasy.espn.com/apis/v3/games/ffl";

/// Fantasy football API client backed by ESPN's public v3 endpoints.
#[derive(Debug, Clone)]
pub struct FflApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for FflApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("ffl-luck/0.1 (terminal season plot)")
                .build()
                .unwrap_or_default(),
            base_url: ESPN_FFL_V3.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) | ApiError::Parsing(e, _) => Some(e),
            ApiError::NotFound(_) => None,
        }
    }
}

impl FflApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host, e.g. a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }

    pub fn league_history_url(&self, league_id: u32, season_id: u16) -> String {
        format!(
            "{}/leagueHistory/{league_id}?seasonId={season_id}&view=mMatchup",
            self.base_url
        )
    }

    /// Fetch one season of a league's matchup history.
    ///
    /// ESPN answers the `leagueHistory` endpoint with an array that, for any
    /// season other than the current one, holds exactly one league object.
    pub async fn fetch_league_history(
        &self,
        league_id: u32,
        season_id: u16,
    ) -> ApiResult<LeagueHistory> {
        let url = self.league_history_url(league_id, season_id);
        let raw: Vec<LeagueHistory> = self.get(&url).await?;
        debug!(
            "league history: {} season object(s) returned, first is season {:?}",
            raw.len(),
            raw.first().and_then(|h| h.season_id)
        );
        // A 200 with an empty array is how ESPN answers for a season the league never played.
        raw.into_iter().next().ok_or_else(|| {
            ApiError::NotFound(format!(
                "no league history for league {league_id} season {season_id}"
            ))
        })
    }

    /// Fetch and normalize a season schedule in one step.
    pub async fn fetch_schedule(&self, league_id: u32, season_id: u16) -> ApiResult<Vec<Matchup>> {
        let history = self.fetch_league_history(league_id, season_id).await?;
        Ok(normalize_schedule(&history))
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        // Any non-success status keeps its code: 401 is a private league, 404 an unknown one.
        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

/// One Matchup per schedule entry, in the order ESPN lists them.
pub fn normalize_schedule(history: &LeagueHistory) -> Vec<Matchup> {
    history.schedule.iter().map(map_schedule_entry).collect()
}

fn map_schedule_entry(entry: &ScheduleEntry) -> Matchup {
    Matchup::new(
        entry.matchup_period_id,
        (entry.home.team_id, entry.home.total_points),
        (entry.away.team_id, entry.away.total_points),
    )
}
