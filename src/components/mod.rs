pub mod chart_theme;
pub mod game_table;
pub mod luck_chart;
