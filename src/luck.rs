use espn_ffl_api::{Matchup, SeasonType};
use log::warn;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Weekly league averages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyAverage {
    pub week: u32,
    pub mean_score: f64,
}

/// Mean score per week across every team, home and away scores pooled.
/// One entry per distinct week, ascending.
pub fn weekly_averages(matchups: &[Matchup]) -> Vec<WeeklyAverage> {
    let mut totals: BTreeMap<u32, (f64, u32)> = BTreeMap::new();
    for m in matchups {
        let (sum, count) = totals.entry(m.week).or_default();
        *sum += m.home_score + m.away_score;
        *count += 2;
    }
    totals
        .into_iter()
        .map(|(week, (sum, count))| WeeklyAverage {
            week,
            mean_score: sum / f64::from(count),
        })
        .collect()
}

fn average_by_week(averages: &[WeeklyAverage]) -> BTreeMap<u32, f64> {
    averages.iter().map(|a| (a.week, a.mean_score)).collect()
}

// ---------------------------------------------------------------------------
// One team's season, relative to the league
// ---------------------------------------------------------------------------

/// A game seen from the selected team's side. `own_*` is always that team.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamGame {
    pub week: u32,
    pub opponent_id: u32,
    pub own_score: f64,
    pub opponent_score: f64,
    /// Own score minus the week's league average.
    pub own_delta: f64,
    /// Opponent score minus the week's league average.
    pub opponent_delta: f64,
    pub won: bool,
    pub season_type: SeasonType,
}

impl TeamGame {
    /// Won while scoring below the league average.
    ///
    /// This is the header tally only: a third-quadrant win. The chart's LUCKY WIN
    /// label marks the whole below-diagonal half-plane, which also holds
    /// above-average wins, and those are not counted here.
    pub fn is_lucky_win(&self) -> bool {
        self.won && self.own_delta < 0.0
    }

    /// Lost while scoring above the league average. Like `is_lucky_win`, this is
    /// narrower than the chart's UNLUCKY LOSS half-plane.
    pub fn is_unlucky_loss(&self) -> bool {
        !self.won && self.own_delta > 0.0
    }
}

/// Every game `team_id` played, oriented so the team sits in the `own` slot,
/// with deltas against that week's average.
///
/// Averages are joined by week number, so the matchups may arrive in any
/// order or already filtered. A team that never played yields an empty vec.
pub fn team_perspective(
    matchups: &[Matchup],
    team_id: u32,
    averages: &[WeeklyAverage],
) -> Vec<TeamGame> {
    let by_week = average_by_week(averages);

    matchups
        .iter()
        .filter_map(|m| {
            let ((_, own_score), (opponent_id, opponent_score)) = m.oriented_for(team_id)?;
            let Some(&mean) = by_week.get(&m.week) else {
                warn!("no league average for week {}, skipping team {team_id}'s game", m.week);
                return None;
            };
            Some(TeamGame {
                week: m.week,
                opponent_id,
                own_score,
                opponent_score,
                own_delta: own_score - mean,
                opponent_delta: opponent_score - mean,
                won: own_score > opponent_score,
                season_type: m.season_type,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeasonSummary {
    pub wins: u32,
    pub losses: u32,
    pub lucky_wins: u32,
    pub unlucky_losses: u32,
    pub mean_own_delta: f64,
    pub mean_opponent_delta: f64,
}

impl SeasonSummary {
    pub fn from_games(games: &[TeamGame]) -> Self {
        if games.is_empty() {
            return Self::default();
        }

        let mut summary = Self::default();
        for g in games {
            if g.won {
                summary.wins += 1;
            } else {
                summary.losses += 1;
            }
            if g.is_lucky_win() {
                summary.lucky_wins += 1;
            }
            if g.is_unlucky_loss() {
                summary.unlucky_losses += 1;
            }
            summary.mean_own_delta += g.own_delta;
            summary.mean_opponent_delta += g.opponent_delta;
        }
        let n = games.len() as f64;
        summary.mean_own_delta /= n;
        summary.mean_opponent_delta /= n;
        summary
    }

    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn league() -> Vec<Matchup> {
        vec![
            Matchup::new(1, (26, 120.0), (7, 100.0)),
            Matchup::new(1, (4, 90.0), (5, 110.0)),
            Matchup::new(2, (7, 130.0), (26, 95.0)),
            Matchup::new(2, (5, 105.0), (4, 70.0)),
            Matchup::new(15, (26, 80.0), (5, 81.0)),
        ]
    }

    #[test]
    fn averages_pool_home_and_away_scores() {
        let avgs = weekly_averages(&league());
        assert_eq!(avgs.len(), 3);
        assert_eq!(avgs[0].week, 1);
        assert!(close(avgs[0].mean_score, (120.0 + 100.0 + 90.0 + 110.0) / 4.0));
        assert!(close(avgs[1].mean_score, (130.0 + 95.0 + 105.0 + 70.0) / 4.0));
    }

    #[test]
    fn single_game_week_averages_both_scores() {
        let avgs = weekly_averages(&[Matchup::new(9, (1, 100.0), (2, 80.0))]);
        assert_eq!(avgs, vec![WeeklyAverage { week: 9, mean_score: 90.0 }]);
    }

    #[test]
    fn averages_come_out_sorted_by_week() {
        let mut games = league();
        games.reverse();
        let weeks: Vec<u32> = weekly_averages(&games).iter().map(|a| a.week).collect();
        assert_eq!(weeks, vec![1, 2, 15]);
    }

    #[test]
    fn home_listed_team_keeps_orientation() {
        let matchups = vec![Matchup::new(3, (26, 110.5), (7, 98.2))];
        let avgs = vec![WeeklyAverage { week: 3, mean_score: 105.0 }];
        let games = team_perspective(&matchups, 26, &avgs);

        assert_eq!(games.len(), 1);
        let g = games[0];
        assert_eq!(g.own_score, 110.5);
        assert_eq!(g.opponent_score, 98.2);
        assert_eq!(g.opponent_id, 7);
        assert!(close(g.own_delta, 5.5));
        assert!(close(g.opponent_delta, -6.8));
        assert!(g.won);
        assert_eq!(g.season_type, SeasonType::Regular);
    }

    #[test]
    fn away_listed_team_is_swapped_into_own_slot() {
        let games = league();
        let avgs = weekly_averages(&games);
        let week2 = team_perspective(&games, 26, &avgs)
            .into_iter()
            .find(|g| g.week == 2)
            .unwrap();
        assert_eq!(week2.own_score, 95.0);
        assert_eq!(week2.opponent_score, 130.0);
        assert_eq!(week2.opponent_id, 7);
        assert!(!week2.won);
    }

    #[test]
    fn tie_is_not_a_win() {
        let matchups = vec![Matchup::new(4, (1, 100.0), (2, 100.0))];
        let avgs = weekly_averages(&matchups);
        let games = team_perspective(&matchups, 1, &avgs);
        assert!(!games[0].won);
    }

    #[test]
    fn unknown_team_yields_no_games() {
        let games = league();
        let avgs = weekly_averages(&games);
        assert!(team_perspective(&games, 999, &avgs).is_empty());
    }

    #[test]
    fn deltas_use_week_not_position() {
        let games = league();
        let avgs = weekly_averages(&games);
        let in_order = team_perspective(&games, 26, &avgs);

        // Drop other teams' games and reverse: positional alignment would break here.
        let mut only_26: Vec<Matchup> = games.iter().copied().filter(|m| m.involves(26)).collect();
        only_26.reverse();
        let mut reordered = team_perspective(&only_26, 26, &avgs);
        reordered.reverse();

        assert_eq!(in_order, reordered);
    }

    #[test]
    fn week_without_average_is_skipped() {
        let games = league();
        let avgs = vec![WeeklyAverage { week: 1, mean_score: 105.0 }];
        let team_games = team_perspective(&games, 26, &avgs);
        assert_eq!(team_games.len(), 1);
        assert_eq!(team_games[0].week, 1);
    }

    #[test]
    fn playoff_games_keep_season_type() {
        let games = league();
        let avgs = weekly_averages(&games);
        let playoff = team_perspective(&games, 26, &avgs)
            .into_iter()
            .find(|g| g.week == 15)
            .unwrap();
        assert!(playoff.season_type.is_playoff());
    }

    #[test]
    fn summary_counts_record_and_luck() {
        let games = league();
        let avgs = weekly_averages(&games);
        let team_games = team_perspective(&games, 26, &avgs);
        let summary = SeasonSummary::from_games(&team_games);

        // Week 1 win (above avg), week 2 loss (below avg 100), week 15 loss (80 vs avg 80.5).
        assert_eq!(summary.record(), "1-2");
        assert_eq!(summary.lucky_wins, 0);
        assert_eq!(summary.unlucky_losses, 0);
    }

    #[test]
    fn lucky_win_and_unlucky_loss() {
        let matchups = vec![
            Matchup::new(1, (1, 90.0), (2, 80.0)),
            Matchup::new(1, (3, 130.0), (4, 120.0)),
            Matchup::new(2, (1, 115.0), (3, 125.0)),
            Matchup::new(2, (2, 70.0), (4, 90.0)),
        ];
        let avgs = weekly_averages(&matchups);
        let team_games = team_perspective(&matchups, 1, &avgs);
        assert!(team_games[0].is_lucky_win());
        assert!(team_games[1].is_unlucky_loss());

        let summary = SeasonSummary::from_games(&team_games);
        assert_eq!(summary.lucky_wins, 1);
        assert_eq!(summary.unlucky_losses, 1);
        assert!(close(summary.mean_own_delta, (-15.0 + 15.0) / 2.0));
    }

    #[test]
    fn above_average_results_are_not_luck() {
        let game = |own_delta: f64, opponent_delta: f64, won: bool| TeamGame {
            week: 1,
            opponent_id: 2,
            own_score: 100.0 + own_delta,
            opponent_score: 100.0 + opponent_delta,
            own_delta,
            opponent_delta,
            won,
            season_type: SeasonType::Regular,
        };
        // Under the diagonal in the first quadrant: a win, but not a lucky one.
        assert!(!game(20.0, 10.0, true).is_lucky_win());
        // Over the diagonal in the third quadrant: a loss, but not an unlucky one.
        assert!(!game(-10.0, -5.0, false).is_unlucky_loss());
        assert!(game(-10.0, -20.0, true).is_lucky_win());
        assert!(game(10.0, 20.0, false).is_unlucky_loss());
    }

    #[test]
    fn empty_summary_is_zeroed() {
        assert_eq!(SeasonSummary::from_games(&[]), SeasonSummary::default());
    }
}
