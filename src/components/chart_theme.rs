use crate::luck::TeamGame;
use tui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartColor {
    /// Half-planes where the team outscored its opponent relative to the week.
    Favorable,
    Unfavorable,
    Axis,
    Diagonal,
    RegularGame,
    PlayoffWin,
    PlayoffLoss,
    UnluckyLabel,
    LuckyLabel,
    AxisLabel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ChartTheme {
    #[default]
    Dark,
}

pub fn color(color: ChartColor, _theme: ChartTheme) -> Color {
    match color {
        ChartColor::Favorable => Color::Indexed(18),
        ChartColor::Unfavorable => Color::Indexed(52),
        ChartColor::Axis => Color::Gray,
        ChartColor::Diagonal => Color::White,
        ChartColor::RegularGame | ChartColor::LuckyLabel => Color::LightBlue,
        ChartColor::PlayoffWin => Color::Yellow,
        ChartColor::PlayoffLoss | ChartColor::UnluckyLabel => Color::LightRed,
        ChartColor::AxisLabel => Color::White,
    }
}

pub fn resolve(chart_color: ChartColor, theme: ChartTheme) -> Style {
    let style = Style::default().fg(color(chart_color, theme));
    match chart_color {
        ChartColor::UnluckyLabel | ChartColor::LuckyLabel | ChartColor::AxisLabel => {
            style.add_modifier(Modifier::ITALIC)
        }
        ChartColor::RegularGame | ChartColor::PlayoffWin | ChartColor::PlayoffLoss => {
            style.add_modifier(Modifier::BOLD)
        }
        _ => style,
    }
}

pub const WIN_MARKER: &str = "●";
pub const LOSS_MARKER: &str = "✕";

/// Shape encodes the result, colour encodes regular season vs playoff result.
pub fn marker_for(game: &TeamGame) -> (&'static str, ChartColor) {
    let shape = if game.won { WIN_MARKER } else { LOSS_MARKER };
    let color = match (game.season_type.is_playoff(), game.won) {
        (false, _) => ChartColor::RegularGame,
        (true, true) => ChartColor::PlayoffWin,
        (true, false) => ChartColor::PlayoffLoss,
    };
    (shape, color)
}
