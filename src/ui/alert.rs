use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

use crate::logic::ui::{alert_dimensions, ALERT_HINT};
use crate::traits::Notifier;
use crate::utils::log_debug;

/// Render a centered modal alert with `text` and an acknowledgement hint
pub fn render_alert(f: &mut Frame, area: Rect, text: &str) {
    let (width, height) = alert_dimensions(text, area.width);
    let alert_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    };

    let lines = vec![
        Line::from(Span::raw(text)),
        Line::from(""),
        Line::from(Span::styled(
            ALERT_HINT,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ];

    let alert = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Alert")
                .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, alert_area);
    f.render_widget(alert, alert_area);
}

/// Whether a key press dismisses the alert
pub fn is_acknowledgement(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q')
    )
}

/// Draw the alert and block on key events until it is acknowledged
pub fn wait_for_acknowledgement<B: Backend>(terminal: &mut Terminal<B>, text: &str) -> Result<()> {
    loop {
        terminal.draw(|f| render_alert(f, f.area(), text))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && is_acknowledgement(key.code) {
                log_debug(&format!("Alert acknowledged with {:?}", key.code));
                return Ok(());
            }
        }
    }
}

/// Modal alert on the controlling terminal
///
/// Takes over the screen (raw mode, alternate screen) for the duration of
/// the alert and restores it before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalAlert;

impl Notifier for TerminalAlert {
    fn present_and_wait(&mut self, text: &str) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = wait_for_acknowledgement(&mut terminal, text);

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_alert_shows_text_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| render_alert(f, f.area(), "Save failed: Network down"))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Alert"));
        assert!(text.contains("Save failed: Network down"));
        assert!(text.contains(ALERT_HINT));
    }

    #[test]
    fn test_render_alert_is_centered() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| render_alert(f, f.area(), "Save failed: Network down"))
            .unwrap();

        // Alert is 29x5: x = (60 - 29) / 2 = 15, y = (12 - 5) / 2 = 3
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(15, 3)].symbol(), "┌");
        assert_eq!(buffer[(14, 3)].symbol(), " ");
    }

    #[test]
    fn test_render_alert_in_tiny_area_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        terminal
            .draw(|f| render_alert(f, f.area(), "Save failed: Network down"))
            .unwrap();
    }

    #[test]
    fn test_acknowledgement_keys() {
        assert!(is_acknowledgement(KeyCode::Enter));
        assert!(is_acknowledgement(KeyCode::Esc));
        assert!(is_acknowledgement(KeyCode::Char(' ')));
        assert!(!is_acknowledgement(KeyCode::Char('x')));
        assert!(!is_acknowledgement(KeyCode::Tab));
    }
}
