use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Block, BorderType, Borders, Paragraph};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::chart_theme::ChartTheme;
use crate::components::game_table::GameTable;
use crate::components::luck_chart::{LuckChart, legend};
use crate::ui::layout::{LayoutAreas, square_area};

const HELP_TEXT: &str = "q / Esc = quit   f = chart only   \" = logs   ? = this help   (Esc to close)

x: points scored minus the league average that week
y: points allowed minus the league average that week
below the dashed line you outscored your opponent

● win   ✕ loss   blue = regular season   yellow = playoff win   red = playoff loss";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if app.state.active_tab == MenuItem::Help {
            draw_placeholder(f, f.area(), HELP_TEXT);
            return;
        }

        if !app.settings.full_screen {
            draw_header(f, layout.header, app);
            draw_legend(f, layout.legend);
        }
        draw_chart(f, layout.chart, app);
        if let Some(side) = layout.side {
            draw_game_table(f, side, app);
        }
        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }
    });

    if let Err(e) = result {
        error!("failed to draw frame: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_header(f: &mut Frame, header: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let headline = Paragraph::new(app.state.headline())
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(headline, header[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, header[1]);
}

fn draw_chart(f: &mut Frame, area: Rect, app: &App) {
    let report = &app.state.report;
    let block = default_border(Color::White)
        .title(format!(" {} ", report.config.chart_title()))
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    f.render_widget(block, area);

    f.render_widget(
        LuckChart::new(&report.games, report.config.scale()),
        square_area(inner),
    );
}

fn draw_legend(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    f.render_widget(
        Paragraph::new(legend(ChartTheme::Dark)).alignment(Alignment::Center),
        area,
    );
}

fn draw_game_table(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" Games ");
    f.render_widget(GameTable::new(&app.state.report).block(block), area);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray));
    f.render_widget(logs, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    let lines: Vec<Line> = msg.lines().map(Line::from).collect();
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        inner,
    );
}
