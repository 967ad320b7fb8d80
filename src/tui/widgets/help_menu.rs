//! Help menu overlay.

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, StatefulWidget, Widget},
};

use super::{theme::ThemeTokens, InteractiveStatefulWidget, KeyEvent};

const KEYBINDINGS: &[(&str, &str)] = &[
    // Sections
    ("1-5", "jump to section"),
    ("Tab/]", "next section"),
    ("S-Tab/[", "previous section"),
    ("m", "open menu"),
    ("j/k", "scroll, or move in menu"),
    ("Enter", "menu select"),
    // Appearance
    ("t", "toggle theme"),
    // Links
    ("o", "open GitHub"),
    ("e", "compose mail"),
    // Other
    ("Esc", "close overlay"),
    ("?", "toggle help"),
    ("q", "quit"),
];

/// State for the help menu widget.
#[derive(Debug, Default)]
pub struct HelpMenu {
    visible: bool,
}

impl HelpMenu {
    pub const fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Widget for rendering the help menu overlay.
pub struct HelpMenuWidget<'a> {
    tokens: &'a ThemeTokens,
}

impl<'a> HelpMenuWidget<'a> {
    pub const fn new(tokens: &'a ThemeTokens) -> Self {
        Self { tokens }
    }
}

impl StatefulWidget for HelpMenuWidget<'_> {
    type State = HelpMenu;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !state.visible {
            return;
        }

        let width = 34u16.min(area.width);
        let height = (KEYBINDINGS.len() as u16 + 2).min(area.height);
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + area.height.saturating_sub(height + 2);
        let popup_area = Rect::new(x, y, width, height);

        Clear.render(popup_area, buf);

        let block = Block::bordered()
            .title(" Help ")
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(self.tokens.accent_border))
            .style(self.tokens.card());

        let key_style = self.tokens.accent();
        let help_lines: Vec<Line> = KEYBINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>8}"), key_style),
                    Span::styled(format!("  {desc}"), self.tokens.secondary()),
                ])
            })
            .collect();

        Paragraph::new(help_lines)
            .block(block)
            .render(popup_area, buf);
    }
}

impl InteractiveStatefulWidget for HelpMenuWidget<'_> {
    type Input = ();
    type Event = KeyEvent;

    fn update_state(_state: &mut Self::State, _input: Self::Input) {}

    fn handle_event(state: &mut Self::State, event: Self::Event) -> bool {
        if !state.visible {
            return false;
        }

        match event.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                state.visible = false;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::tui::{state::ThemeMode, widgets::theme::resolve_theme};

    #[test]
    fn escape_closes_only_when_visible() {
        let mut help = HelpMenu::default();
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!HelpMenuWidget::handle_event(&mut help, esc));

        help.toggle();
        assert!(help.is_visible());
        assert!(!HelpMenuWidget::handle_event(
            &mut help,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)
        ));
        assert!(HelpMenuWidget::handle_event(&mut help, esc));
        assert!(!help.is_visible());
    }

    #[test]
    fn lists_theme_binding() {
        let mut help = HelpMenu::default();
        help.toggle();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        HelpMenuWidget::new(resolve_theme(ThemeMode::Dark)).render(area, &mut buf, &mut help);
        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("toggle theme"));
        assert!(text.contains("Help"));
    }
}
