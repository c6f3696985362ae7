/// ESPN fantasy API raw wire types: serde shapes for deserializing responses.
/// These map to our clean domain types in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// League history  (v3 ffl API, `view=mMatchup`)
// ---------------------------------------------------------------------------

/// One season of a league. For past seasons ESPN wraps this in a one-element array.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueHistory {
    pub season_id: Option<u16>,
    /// Required: the whole point of the `mMatchup` view.
    pub schedule: Vec<ScheduleEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub matchup_period_id: u32,
    pub home: MatchupSide,
    pub away: MatchupSide,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchupSide {
    pub team_id: u32,
    pub total_points: f64,
}
