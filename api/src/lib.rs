pub mod client;
pub mod espn;

// ---------------------------------------------------------------------------
// Domain types, independent of the ESPN wire format
// ---------------------------------------------------------------------------

/// Last matchup period of the regular season. Everything after it is playoffs.
pub const REGULAR_SEASON_WEEKS: u32 = 14;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeasonType {
    #[default]
    Regular,
    Playoff,
}

impl SeasonType {
    /// Classify a matchup period. The threshold is a property of the league
    /// format, not something the API reports.
    pub fn from_week(week: u32) -> Self {
        if week <= REGULAR_SEASON_WEEKS {
            SeasonType::Regular
        } else {
            SeasonType::Playoff
        }
    }

    pub fn is_playoff(&self) -> bool {
        *self == SeasonType::Playoff
    }
}

/// One scheduled game, in the orientation ESPN lists it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Matchup {
    pub week: u32,
    pub home_team_id: u32,
    pub home_score: f64,
    pub away_team_id: u32,
    pub away_score: f64,
    pub season_type: SeasonType,
}

impl Matchup {
    pub fn new(week: u32, home: (u32, f64), away: (u32, f64)) -> Self {
        Self {
            week,
            home_team_id: home.0,
            home_score: home.1,
            away_team_id: away.0,
            away_score: away.1,
            season_type: SeasonType::from_week(week),
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Both sides of the game with `team_id` first: `((own_id, own_score), (opp_id, opp_score))`.
    /// Returns None when the team did not play in this game.
    pub fn oriented_for(&self, team_id: u32) -> Option<((u32, f64), (u32, f64))> {
        let home = (self.home_team_id, self.home_score);
        let away = (self.away_team_id, self.away_score);
        if self.home_team_id == team_id {
            Some((home, away))
        } else if self.away_team_id == team_id {
            Some((away, home))
        } else {
            None
        }
    }
}
