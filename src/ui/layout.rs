use ratatui::layout::{Constraint, Direction, Layout, Rect};

const BUTTON_WIDTH: u16 = 12;
const CONTROL_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Areas of the lookup screen inside the body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    pub input: Rect,
    pub submit: Rect,
    pub random: Rect,
    pub content: Rect,
}

pub fn screen_regions(body: Rect) -> ScreenRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CONTROL_HEIGHT),
            Constraint::Length(CONTROL_HEIGHT),
            Constraint::Min(0),
        ])
        .split(body);

    let search_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)])
        .split(rows[0]);

    let random_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BUTTON_WIDTH + 9), Constraint::Min(0)])
        .split(rows[1]);

    ScreenRegions {
        input: search_row[0],
        submit: search_row[1],
        random: random_row[0],
        content: rows[2],
    }
}
