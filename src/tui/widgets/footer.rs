//! Page footer line.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::theme::ThemeTokens;

pub fn footer_text(year: i32, name: &str) -> String {
    format!("© {year} {name} Portfolio. Built with Rust, ratatui and crossterm.")
}

pub struct Footer<'a> {
    text: &'a str,
    tokens: &'a ThemeTokens,
}

impl<'a> Footer<'a> {
    pub const fn new(text: &'a str, tokens: &'a ThemeTokens) -> Self {
        Self { text, tokens }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text)
            .alignment(Alignment::Center)
            .style(self.tokens.secondary().bg(self.tokens.app_bg))
            .block(
                Block::new()
                    .borders(Borders::TOP)
                    .border_style(self.tokens.secondary().fg(self.tokens.divider)),
            )
            .render(area, buf);
    }
}
