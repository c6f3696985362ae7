use crate::components::chart_theme::{
    ChartColor, ChartTheme, LOSS_MARKER, WIN_MARKER, color, marker_for, resolve,
};
use crate::luck::TeamGame;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::symbols::Marker;
use tui::text::{Line, Span};
use tui::widgets::canvas::{Canvas, Context, Line as Segment, Points};
use tui::widgets::Widget;

/// Distance between tick labels, in points.
pub const TICK_STEP: i32 = 10;
/// Identity diagonal is drawn as dashes of this length, one every two.
const DASH: f64 = 2.0;

/// Scatter of a team's games: points-for deviation on x, points-against
/// deviation on y, both over `[-scale, scale]` with the axes crossing at 0.
///
/// ```text
///              |   UNLUCKY /
///              |    LOSS  /
///              |         /  LUCKY
///              |       /     WIN
///  ------------+----------------- Points for
///            / |
///          /   |
/// ```
pub struct LuckChart<'a> {
    pub games: &'a [TeamGame],
    pub scale: f64,
    pub theme: ChartTheme,
}

impl<'a> LuckChart<'a> {
    pub fn new(games: &'a [TeamGame], scale: f64) -> Self {
        Self {
            games,
            scale,
            theme: ChartTheme::Dark,
        }
    }
}

impl Widget for LuckChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 5 || self.scale <= 0.0 {
            return;
        }

        let z = self.scale;
        // Canvas units covered by one terminal cell; used to offset labels by whole cells.
        let cell = CellSize {
            w: 2.0 * z / f64::from(area.width),
            h: 2.0 * z / f64::from(area.height),
        };
        let theme = self.theme;
        let games = self.games;
        let (favorable, unfavorable) = shading(z, cell.w.max(cell.h / 2.0));

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-z, z])
            .y_bounds([-z, z])
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &favorable,
                    color: color(ChartColor::Favorable, theme),
                });
                ctx.draw(&Points {
                    coords: &unfavorable,
                    color: color(ChartColor::Unfavorable, theme),
                });
                ctx.layer();

                draw_axes(ctx, z, theme);
                draw_diagonal(ctx, z, theme);
                ctx.layer();

                draw_tick_labels(ctx, z, cell, theme);
                draw_annotations(ctx, z, cell, theme);
                draw_games(ctx, games, z, theme);
            })
            .render(area, buf);
    }
}

#[derive(Debug, Clone, Copy)]
struct CellSize {
    w: f64,
    h: f64,
}

/// Tick positions from `-scale` to `scale`, every [`TICK_STEP`], origin left out.
pub fn tick_values(scale: i32) -> Vec<i32> {
    (-scale..=scale)
        .step_by(TICK_STEP as usize)
        .filter(|&t| t != 0)
        .collect()
}

/// Dot grids filling the two shaded triangles of quadrants I and III on each
/// side of the diagonal. Returns (below diagonal, above diagonal).
fn shading(z: f64, step: f64) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let mut below = Vec::new();
    let mut above = Vec::new();
    if step <= 0.0 {
        return (below, above);
    }

    let n = (2.0 * z / step).floor() as i64;
    for i in 0..=n {
        let x = -z + i as f64 * step;
        for j in 0..=n {
            let y = -z + j as f64 * step;
            let same_sign = (x >= 0.0 && y >= 0.0) || (x <= 0.0 && y <= 0.0);
            if !same_sign || x == y {
                continue;
            }
            if y < x {
                below.push((x, y));
            } else {
                above.push((x, y));
            }
        }
    }
    (below, above)
}

fn draw_axes(ctx: &mut Context, z: f64, theme: ChartTheme) {
    let axis = color(ChartColor::Axis, theme);
    ctx.draw(&Segment::new(-z, 0.0, z, 0.0, axis));
    ctx.draw(&Segment::new(0.0, -z, 0.0, z, axis));
}

fn draw_diagonal(ctx: &mut Context, z: f64, theme: ChartTheme) {
    let diagonal = color(ChartColor::Diagonal, theme);
    let mut t = -z;
    while t < z {
        let end = (t + DASH).min(z);
        ctx.draw(&Segment::new(t, t, end, end, diagonal));
        t += 2.0 * DASH;
    }
}

fn draw_tick_labels(ctx: &mut Context, z: f64, cell: CellSize, theme: ChartTheme) {
    let style = resolve(ChartColor::Axis, theme);
    for t in tick_values(z as i32) {
        let label = t.to_string();
        let len = label.chars().count() as f64;
        let v = f64::from(t);
        // x ticks sit one row under the axis, y ticks just left of it.
        ctx.print((v - len * cell.w / 2.0).max(-z), -cell.h, Span::styled(label.clone(), style));
        ctx.print(-(len + 1.0) * cell.w, v, Span::styled(label, style));
    }
}

fn draw_annotations(ctx: &mut Context, z: f64, cell: CellSize, theme: ChartTheme) {
    let axis = resolve(ChartColor::AxisLabel, theme);
    let unlucky = resolve(ChartColor::UnluckyLabel, theme);
    let lucky = resolve(ChartColor::LuckyLabel, theme);

    let labels: [(f64, f64, [&str; 2], _); 4] = [
        (z - 10.0, -12.0, ["Points", "  for"], axis),
        (-18.0, z - 10.0, [" Points", "against"], axis),
        (z / 2.0 - 5.0, z - 8.0, ["UNLUCKY", "   LOSS"], unlucky),
        (z - 12.0, z / 2.0 - 5.0, ["LUCKY", " WIN"], lucky),
    ];
    for (x, y, rows, style) in labels {
        for (i, row) in rows.iter().enumerate() {
            ctx.print(x, y - i as f64 * cell.h, Span::styled(*row, style));
        }
    }
}

fn draw_games(ctx: &mut Context, games: &[TeamGame], z: f64, theme: ChartTheme) {
    for game in games {
        let (shape, chart_color) = marker_for(game);
        // Outliers are pinned to the border instead of vanishing off-canvas.
        let x = game.own_delta.clamp(-z, z);
        let y = game.opponent_delta.clamp(-z, z);
        ctx.print(x, y, Span::styled(shape, resolve(chart_color, theme)));
    }
}

/// Key for the marker encoding, rendered under the chart.
pub fn legend(theme: ChartTheme) -> Line<'static> {
    let regular = resolve(ChartColor::RegularGame, theme);
    let playoff_win = resolve(ChartColor::PlayoffWin, theme);
    let playoff_loss = resolve(ChartColor::PlayoffLoss, theme);
    Line::from(vec![
        Span::styled(WIN_MARKER, regular),
        Span::raw(" win  "),
        Span::styled(LOSS_MARKER, regular),
        Span::raw(" loss  "),
        Span::styled("■", regular),
        Span::raw(" regular season  "),
        Span::styled("■", playoff_win),
        Span::raw(" playoff win  "),
        Span::styled("■", playoff_loss),
        Span::raw(" playoff loss"),
    ])
}
