use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::logic::ui::spinner_frame;
use crate::traits::DisplayTarget;

/// Fixed "in-progress" fragment written by the loading indicator
pub const LOADING_FRAGMENT: &str = r#"<div class="loading-spinner"></div>"#;

/// A titled content area acting as a display target
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pane {
    pub title: String,
    content: String,
}

impl Pane {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the pane currently shows the loading fragment
    pub fn is_loading(&self) -> bool {
        self.content == LOADING_FRAGMENT
    }
}

impl DisplayTarget for Pane {
    fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }
}

/// Render a pane; the loading fragment is drawn as an animated spinner
pub fn render_pane(f: &mut Frame, area: Rect, pane: &Pane, tick: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(pane.title.as_str())
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = if pane.is_loading() {
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(tick)),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Loading..."),
        ]);
        Paragraph::new(vec![line]).alignment(Alignment::Center)
    } else {
        Paragraph::new(pane.content.as_str()).wrap(Wrap { trim: false })
    };

    f.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_set_content_replaces_previous() {
        let mut pane = Pane::new("Products");
        pane.set_content("old rows");
        pane.set_content("new rows");
        assert_eq!(pane.content(), "new rows");
        assert!(!pane.is_loading());
    }

    #[test]
    fn test_render_loading_draws_spinner_not_markup() {
        let mut pane = Pane::new("Products");
        pane.set_content(LOADING_FRAGMENT);

        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|f| render_pane(f, f.area(), &pane, 1))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Loading..."));
        assert!(text.contains('⠙'));
        assert!(!text.contains("loading-spinner"));
    }

    #[test]
    fn test_render_plain_content() {
        let mut pane = Pane::new("Sales");
        pane.set_content("Ksh 5,800");

        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|f| render_pane(f, f.area(), &pane, 0))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Sales"));
        assert!(text.contains("Ksh 5,800"));
    }
}
