use crate::pipeline::SeasonReport;
use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Season,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings, report: SeasonReport) -> Self {
        Self {
            state: AppState::new(report),
            settings,
        }
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::pipeline::build_report;
    use espn_ffl_api::Matchup;

    fn app() -> App {
        let report = build_report(
            &PipelineConfig::default(),
            vec![Matchup::new(1, (26, 120.0), (7, 100.0))],
        )
        .expect("report");
        App::new(AppSettings::default(), report)
    }

    #[test]
    fn help_returns_to_previous_tab() {
        let mut app = app();
        app.update_tab(MenuItem::Help);
        assert_eq!(app.state.active_tab, MenuItem::Help);
        app.exit_help();
        assert_eq!(app.state.active_tab, MenuItem::Season);
    }

    #[test]
    fn toggles_flip_back_and_forth() {
        let mut app = app();
        app.toggle_full_screen();
        app.toggle_show_logs();
        assert!(app.settings.full_screen);
        assert!(app.state.show_logs);
        app.toggle_full_screen();
        app.toggle_show_logs();
        assert!(!app.settings.full_screen);
        assert!(!app.state.show_logs);
    }

    #[test]
    fn headline_reports_record() {
        let app = app();
        let headline = app.state.headline();
        assert!(headline.contains("Team #26"));
        assert!(headline.contains("1-0"));
        assert!(headline.contains("2019"));
    }
}
