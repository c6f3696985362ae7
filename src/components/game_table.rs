use crate::components::chart_theme::{ChartTheme, marker_for, resolve};
use crate::luck::TeamGame;
use crate::pipeline::SeasonReport;
use tui::buffer::Buffer;
use tui::layout::{Constraint, Rect};
use tui::style::{Color, Modifier, Style};
use tui::widgets::{Block, Row, Table, Widget};

const HEADER: [&str; 8] = ["Wk", "Opp", "Avg", "For", "Agst", "ΔFor", "ΔAgst", ""];

/// Week-by-week listing of the plotted games, in schedule order.
pub struct GameTable<'a> {
    pub report: &'a SeasonReport,
    pub theme: ChartTheme,
    pub block: Option<Block<'a>>,
}

impl<'a> GameTable<'a> {
    pub fn new(report: &'a SeasonReport) -> Self {
        Self {
            report,
            theme: ChartTheme::Dark,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for GameTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(HEADER).style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::UNDERLINED),
        );

        let rows: Vec<Row> = self
            .report
            .games
            .iter()
            .map(|g| {
                let (_, chart_color) = marker_for(g);
                Row::new(table_cells(g, self.report.average_for(g.week)))
                    .style(resolve(chart_color, self.theme).remove_modifier(Modifier::BOLD))
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(3),
        ];

        let mut table = Table::new(rows, widths).header(header).column_spacing(1);
        if let Some(block) = self.block {
            table = table.block(block);
        }
        Widget::render(table, area, buf);
    }
}

fn table_cells(game: &TeamGame, average: Option<f64>) -> [String; 8] {
    let result = match (game.won, game.season_type.is_playoff()) {
        (true, false) => "W",
        (false, false) => "L",
        (true, true) => "W*",
        (false, true) => "L*",
    };
    [
        game.week.to_string(),
        format!("#{}", game.opponent_id),
        average.map(|a| format!("{a:.1}")).unwrap_or_else(|| "--".to_string()),
        format!("{:.1}", game.own_score),
        format!("{:.1}", game.opponent_score),
        format!("{:+.1}", game.own_delta),
        format!("{:+.1}", game.opponent_delta),
        result.to_string(),
    ]
}
