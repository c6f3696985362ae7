/// ESPN league whose history is plotted.
pub const DEFAULT_LEAGUE_ID: u32 = 13260;
/// Season (calendar year the season starts in).
pub const DEFAULT_SEASON: u16 = 2019;
/// Team whose games are plotted against the league averages.
pub const DEFAULT_TEAM_ID: u32 = 26;
/// Half-width of the plotted range; both axes span `[-scale, scale]` points.
pub const DEFAULT_SCALE: u16 = 60;

/// Everything the pipeline needs to know about which season to pull and how
/// to draw it. Passed explicitly into each stage that reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub league_id: u32,
    pub season: u16,
    pub team_id: u32,
    pub scale: u16,
    /// Chart title. `None` falls back to a title naming the team.
    pub title: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            league_id: DEFAULT_LEAGUE_ID,
            season: DEFAULT_SEASON,
            team_id: DEFAULT_TEAM_ID,
            scale: DEFAULT_SCALE,
            title: Some("Gerber Baby Food Championship Season Scores".to_string()),
        }
    }
}

impl PipelineConfig {
    pub fn chart_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            format!("Team #{} scores (centered at league average)", self.team_id)
        })
    }

    pub fn scale(&self) -> f64 {
        f64::from(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_plotted_season() {
        let config = PipelineConfig::default();
        assert_eq!(config.league_id, 13260);
        assert_eq!(config.season, 2019);
        assert_eq!(config.team_id, 26);
        assert_eq!(config.scale(), 60.0);
    }

    #[test]
    fn missing_title_names_the_team() {
        let config = PipelineConfig { title: None, team_id: 7, ..Default::default() };
        assert_eq!(config.chart_title(), "Team #7 scores (centered at league average)");
    }
}
