use crate::ui::app::Focus;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the bottom bar. The Enter hint follows the focused control.
pub struct Footer {
    focus: Focus,
}

impl Footer {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    pub fn hints(&self) -> [(&'static str, &'static str); 5] {
        let enter = match self.focus {
            Focus::Input | Focus::Submit => "Submit",
            Focus::Random => "Random",
        };
        [
            ("Enter", enter),
            ("Tab", "Focus"),
            ("Ctrl+R", "Random"),
            ("Ctrl+U", "Clear"),
            ("Esc", "Quit"),
        ]
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(ACCENT);

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (index, (key, action)) in self.hints().into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", text_style));
                used += 3;
            }
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(": {}", action), text_style));
            used += key.chars().count() + action.chars().count() + 2;
        }

        let version = format!("v{} ", VERSION);
        let inner_width = area.width.saturating_sub(2) as usize;
        let padding = inner_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
