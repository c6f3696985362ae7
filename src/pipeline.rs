use crate::config::PipelineConfig;
use crate::luck::{SeasonSummary, TeamGame, WeeklyAverage, team_perspective, weekly_averages};
use anyhow::{Context, bail};
use espn_ffl_api::Matchup;
use espn_ffl_api::client::FflApi;
use log::{debug, info};

/// Everything the UI draws, computed once up front.
#[derive(Debug, Clone)]
pub struct SeasonReport {
    pub config: PipelineConfig,
    pub matchups: Vec<Matchup>,
    pub averages: Vec<WeeklyAverage>,
    pub games: Vec<TeamGame>,
    pub summary: SeasonSummary,
}

impl SeasonReport {
    pub fn average_for(&self, week: u32) -> Option<f64> {
        self.averages
            .iter()
            .find(|a| a.week == week)
            .map(|a| a.mean_score)
    }
}

/// Fetch the configured season and run every stage. Any failure is fatal.
pub async fn run(api: &FflApi, config: &PipelineConfig) -> anyhow::Result<SeasonReport> {
    info!(
        "fetching league {} season {}",
        config.league_id, config.season
    );
    let matchups = api
        .fetch_schedule(config.league_id, config.season)
        .await
        .with_context(|| {
            format!(
                "could not load league {} season {}",
                config.league_id, config.season
            )
        })?;
    build_report(config, matchups)
}

/// The offline half of the pipeline: aggregate, orient, summarize.
pub fn build_report(config: &PipelineConfig, matchups: Vec<Matchup>) -> anyhow::Result<SeasonReport> {
    if matchups.is_empty() {
        bail!(
            "league {} season {} has an empty schedule",
            config.league_id,
            config.season
        );
    }
    debug!("normalized {} matchups", matchups.len());

    let averages = weekly_averages(&matchups);
    debug!("computed averages for {} weeks", averages.len());

    let games = team_perspective(&matchups, config.team_id, &averages);
    if games.is_empty() {
        bail!(
            "team {} played no games in league {} season {}",
            config.team_id,
            config.league_id,
            config.season
        );
    }

    let summary = SeasonSummary::from_games(&games);
    info!(
        "team {}: {} games, record {}, {} lucky wins, {} unlucky losses",
        config.team_id,
        games.len(),
        summary.record(),
        summary.lucky_wins,
        summary.unlucky_losses
    );

    Ok(SeasonReport {
        config: config.clone(),
        matchups,
        averages,
        games,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> Vec<Matchup> {
        vec![
            Matchup::new(3, (26, 110.5), (7, 98.2)),
            Matchup::new(3, (1, 105.0), (2, 106.3)),
            Matchup::new(15, (2, 99.0), (26, 101.0)),
        ]
    }

    const SEASON: &str = r#"[{
        "seasonId": 2019,
        "schedule": [
            {"matchupPeriodId": 3,
             "home": {"teamId": 26, "totalPoints": 110.5},
             "away": {"teamId": 7, "totalPoints": 98.2}},
            {"matchupPeriodId": 3,
             "home": {"teamId": 1, "totalPoints": 105.0},
             "away": {"teamId": 2, "totalPoints": 106.3}}
        ]
    }]"#;

    #[tokio::test]
    async fn run_fetches_and_builds_the_report() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/leagueHistory/13260")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SEASON)
            .create_async()
            .await;

        let api = FflApi::with_base_url(server.url());
        let report = run(&api, &PipelineConfig::default()).await.expect("report");
        assert_eq!(report.matchups.len(), 2);
        assert_eq!(report.games.len(), 1);
        assert_eq!(report.summary.record(), "1-0");
    }

    #[tokio::test]
    async fn run_names_the_league_when_the_fetch_fails() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/leagueHistory/13260")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let api = FflApi::with_base_url(server.url());
        let err = run(&api, &PipelineConfig::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "could not load league 13260 season 2019");
        assert!(format!("{err:#}").contains("401"), "got {err:#}");
    }

    #[test]
    fn report_carries_every_stage() {
        let config = PipelineConfig::default();
        let report = build_report(&config, schedule()).expect("report");
        assert_eq!(report.matchups.len(), 3);
        assert_eq!(report.averages.len(), 2);
        assert_eq!(report.games.len(), 2);
        assert_eq!(report.summary.record(), "2-0");
        assert_eq!(report.average_for(15), Some(100.0));
        assert_eq!(report.average_for(4), None);
    }

    #[test]
    fn empty_schedule_is_fatal() {
        let err = build_report(&PipelineConfig::default(), vec![]).unwrap_err();
        assert!(err.to_string().contains("empty schedule"));
    }

    #[test]
    fn team_outside_league_is_fatal() {
        let config = PipelineConfig { team_id: 99, ..Default::default() };
        let err = build_report(&config, schedule()).unwrap_err();
        assert!(err.to_string().contains("team 99"));
    }
}
