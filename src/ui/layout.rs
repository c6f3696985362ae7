use tui::layout::{Constraint, Layout, Rect, Size};
pub const HEADER_HEIGHT: u16 = 3;
pub const LEGEND_HEIGHT: u16 = 1;
pub const LOG_HEIGHT: u16 = 8;
/// Below this width the game table is dropped and the chart gets everything.
pub const SIDE_PANEL_MIN_WIDTH: u16 = 110;
pub const SIDE_PANEL_WIDTH: u16 = 54;

/// Pre-computed layout areas for the main draw loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutAreas {
    pub header: [Rect; 2],
    pub chart: Rect,
    pub legend: Rect,
    pub side: Option<Rect>,
    pub logs: Option<Rect>,
}

impl LayoutAreas {
    pub fn new(size: Size) -> Self {
        let rect = Rect::new(0, 0, size.width, size.height);
        Self::from_rect(rect, false, false)
    }

    pub fn update(&mut self, area: Rect, full_screen: bool, show_logs: bool) {
        *self = Self::from_rect(area, full_screen, show_logs);
    }

    fn from_rect(area: Rect, full_screen: bool, show_logs: bool) -> Self {
        if full_screen {
            let [main] = Layout::vertical([Constraint::Fill(1)]).areas(area);
            return LayoutAreas {
                header: [Rect::ZERO, Rect::ZERO],
                chart: main,
                legend: Rect::ZERO,
                side: None,
                logs: None,
            };
        }

        let [header, body, legend, logs] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(LEGEND_HEIGHT),
            Constraint::Length(if show_logs { LOG_HEIGHT } else { 0 }),
        ])
        .areas(area);

        let (chart, side) = if body.width >= SIDE_PANEL_MIN_WIDTH {
            let [chart, side] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(SIDE_PANEL_WIDTH)])
                    .areas(body);
            (chart, Some(side))
        } else {
            (body, None)
        };

        LayoutAreas {
            header: Self::split_header(header),
            chart,
            legend,
            side,
            logs: show_logs.then_some(logs),
        }
    }

    fn split_header(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(85), Constraint::Percentage(15)]).areas(area)
    }
}

/// Largest centred area that looks square on screen. Terminal cells are
/// about twice as tall as they are wide, so square means width = 2 * height.
pub fn square_area(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
