use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, screen_regions};
use crate::ui::lookup::ViewState;
use crate::ui::theme::{
    ACCENT, DISABLED_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub const INPUT_PLACEHOLDER: &str = "Search Here";
pub const SUBMIT_LABEL: &str = "Submit";
pub const RANDOM_LABEL: &str = "Random Asteroid";
pub const LOADING_TEXT: &str = "Loading...";

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.catalog_label()), header);
    frame.render_widget(Clear, body);

    let regions = screen_regions(body);
    draw_input(frame, app, regions.input);
    frame.render_widget(
        button(SUBMIT_LABEL, app.can_submit(), app.focus() == Focus::Submit),
        regions.submit,
    );
    frame.render_widget(
        button(RANDOM_LABEL, true, app.focus() == Focus::Random),
        regions.random,
    );

    let content = Paragraph::new(content_lines(app.view(), app.animation_tick()))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(content, regions.content);

    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);
}

/// Lines of the content area for `view`. Idle shows nothing.
pub fn content_lines(view: &ViewState, animation_tick: u8) -> Vec<Line<'static>> {
    match view {
        ViewState::Idle => Vec::new(),
        ViewState::Loading => {
            let spinner = SPINNER[animation_tick as usize % SPINNER.len()];
            vec![Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(ACCENT)),
                Span::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)),
            ])]
        }
        ViewState::Failed(failure) => vec![
            Line::styled(failure.message(), Style::default().fg(STATUS_ERROR)),
            Line::styled(
                failure.detail(),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::DIM),
            ),
        ],
        ViewState::Loaded(record) => {
            let [name, url, hazard] = record.display_lines();
            let hazard_color = if record.hazardous {
                STATUS_ERROR
            } else {
                STATUS_OK
            };
            vec![
                Line::styled(
                    name,
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
                Line::styled(url, Style::default().fg(HEADER_TEXT)),
                Line::styled(hazard, Style::default().fg(hazard_color)),
            ]
        }
    }
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Input;
    let text = if app.query().is_empty() {
        Span::styled(INPUT_PLACEHOLDER, Style::default().fg(DISABLED_TEXT))
    } else {
        Span::styled(app.query().to_string(), Style::default().fg(HEADER_TEXT))
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(" Asteroid ID ")
            .borders(Borders::ALL)
            .border_style(border_style(focused)),
    );
    frame.render_widget(input, area);

    if focused && area.width > 2 && area.height > 2 {
        let offset = app.query().chars().count() as u16;
        let x = area.x + 1 + offset.min(area.width - 3);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn button(label: &'static str, enabled: bool, focused: bool) -> Paragraph<'static> {
    let text_style = match (enabled, focused) {
        (false, _) => Style::default().fg(DISABLED_TEXT),
        (true, true) => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(HEADER_TEXT),
    };

    Paragraph::new(Span::styled(label, text_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        )
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}
