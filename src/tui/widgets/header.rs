//! Top navigation bar: brand, section tabs and the theme toggle.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::{
    selection::{ClickRegions, ClickTarget},
    theme::ThemeTokens,
};
use crate::{
    icons::Icon,
    tui::{
        pages::PAGES,
        state::{ThemeMode, UiState},
    },
};

pub const HEADER_HEIGHT: u16 = 3;
/// Below this width the tabs collapse into the menu button.
pub const COMPACT_WIDTH: u16 = 100;

pub const fn is_compact(width: u16) -> bool {
    width < COMPACT_WIDTH
}

/// Brand mark: the handle with its first letter capitalised and accented.
pub fn brand<'a>(handle: &str, tokens: &ThemeTokens) -> Line<'a> {
    let mut chars = handle.chars();
    let first = chars
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();
    let rest = chars.collect::<String>();
    Line::from(vec![
        Span::styled(first, tokens.accent()),
        Span::styled(rest, tokens.heading()),
    ])
}

struct Button {
    text: String,
    style: Style,
    target: ClickTarget,
}

pub struct Header<'a> {
    state: &'a UiState,
    tokens: &'a ThemeTokens,
    handle: &'a str,
    mouse: Option<Position>,
}

impl<'a> Header<'a> {
    pub const fn new(state: &'a UiState, tokens: &'a ThemeTokens, handle: &'a str) -> Self {
        Self {
            state,
            tokens,
            handle,
            mouse: None,
        }
    }

    #[must_use]
    pub const fn mouse(mut self, mouse: Option<Position>) -> Self {
        self.mouse = mouse;
        self
    }

    fn buttons(&self, compact: bool) -> Vec<Button> {
        let tabs = PAGES.iter().filter(|_| !compact).map(|entry| Button {
            text: format!(" {} {} ", entry.icon.glyph(), entry.label),
            style: if entry.id == self.state.page() {
                self.tokens.active_tab()
            } else {
                self.tokens.secondary()
            },
            target: ClickTarget::Page(entry.id),
        });
        let toggle_icon = match self.state.theme() {
            ThemeMode::Dark => Icon::Sun,
            ThemeMode::Light => Icon::Moon,
        };
        let toggle = Button {
            text: format!(" {} ", toggle_icon.glyph()),
            style: Style::new()
                .fg(self.tokens.toggle)
                .add_modifier(Modifier::BOLD),
            target: ClickTarget::ToggleTheme,
        };
        let menu = compact.then(|| Button {
            text: format!(" {} menu ", Icon::Menu.glyph()),
            style: self.tokens.secondary(),
            target: ClickTarget::OpenMenu,
        });
        tabs.chain([toggle]).chain(menu).collect()
    }
}

impl StatefulWidget for Header<'_> {
    type State = ClickRegions;

    fn render(self, area: Rect, buf: &mut Buffer, regions: &mut Self::State) {
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(Style::new().fg(self.tokens.accent_border))
            .style(self.tokens.card())
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        brand(self.handle, self.tokens).render(inner, buf);

        let buttons = self.buttons(is_compact(area.width));
        let total: u16 = buttons
            .iter()
            .map(|button| button.text.width() as u16 + 1)
            .sum();
        let mut x = inner.right().saturating_sub(total).max(inner.x);
        for button in buttons {
            let width = (button.text.width() as u16).min(inner.right().saturating_sub(x));
            let hit = Rect::new(x, area.y, width, area.height);
            let hovered = self.mouse.is_some_and(|mouse| hit.contains(mouse));
            let style = if hovered && button.style != self.tokens.active_tab() {
                self.tokens.hovered_tab()
            } else {
                button.style
            };
            buf.set_stringn(x, inner.y, &button.text, usize::from(width), style);
            regions.add(hit, button.target);
            x += width + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::tui::{state::PageId, widgets::theme::resolve_theme};

    fn draw(width: u16, state: &UiState) -> (Terminal<TestBackend>, ClickRegions) {
        let mut terminal = Terminal::new(TestBackend::new(width, HEADER_HEIGHT)).expect("terminal");
        let mut regions = ClickRegions::default();
        terminal
            .draw(|frame| {
                let tokens = resolve_theme(state.theme());
                frame.render_stateful_widget(
                    Header::new(state, tokens, "kdoshi13"),
                    frame.area(),
                    &mut regions,
                );
            })
            .expect("draw");
        (terminal, regions)
    }

    fn text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn brand_capitalises_first_letter() {
        let tokens = resolve_theme(ThemeMode::Dark);
        let line = brand("kdoshi13", tokens);
        assert_eq!(line.spans[0].content, "K");
        assert_eq!(line.spans[1].content, "doshi13");
        assert_eq!(line.spans[0].style.fg, Some(tokens.accent));
    }

    #[test]
    fn wide_header_shows_every_tab() {
        let state = UiState::new(PageId::Skills, ThemeMode::Dark);
        let (terminal, regions) = draw(140, &state);
        let text = text(&terminal);
        for entry in &PAGES {
            assert!(text.contains(entry.label), "missing {}", entry.label);
        }
        let targets: Vec<&ClickTarget> = regions.iter().map(|region| &region.target).collect();
        assert!(targets.contains(&&ClickTarget::Page(PageId::Interests)));
        assert!(targets.contains(&&ClickTarget::ToggleTheme));
        assert!(!targets.contains(&&ClickTarget::OpenMenu));
    }

    #[test]
    fn narrow_header_collapses_into_menu_button() {
        let state = UiState::default();
        let (terminal, regions) = draw(60, &state);
        let text = text(&terminal);
        assert!(text.contains("menu"));
        assert!(!text.contains("Projects"));
        let targets: Vec<&ClickTarget> = regions.iter().map(|region| &region.target).collect();
        assert_eq!(targets, [&ClickTarget::ToggleTheme, &ClickTarget::OpenMenu]);
    }
}
