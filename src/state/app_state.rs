use crate::app::MenuItem;
use crate::pipeline::SeasonReport;

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    /// Built before the terminal is taken over; never changes afterwards.
    pub report: SeasonReport,
}

impl AppState {
    pub fn new(report: SeasonReport) -> Self {
        Self {
            active_tab: MenuItem::default(),
            previous_tab: MenuItem::default(),
            show_logs: false,
            report,
        }
    }

    /// One-line header: league, season, team record and luck tally.
    pub fn headline(&self) -> String {
        let r = &self.report;
        format!(
            "League {} · {} · Team #{} · {} ({} lucky W, {} unlucky L) · avg Δ {:+.1} for / {:+.1} against · {} league games over {} weeks",
            r.config.league_id,
            r.config.season,
            r.config.team_id,
            r.summary.record(),
            r.summary.lucky_wins,
            r.summary.unlucky_losses,
            r.summary.mean_own_delta,
            r.summary.mean_opponent_delta,
            r.matchups.len(),
            r.averages.len(),
        )
    }
}
