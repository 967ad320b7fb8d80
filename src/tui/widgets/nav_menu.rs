//! Slide-out section menu used on narrow terminals.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, StatefulWidget, Widget},
};

use super::{
    selection::{ClickRegions, ClickTarget, SelectionState},
    theme::ThemeTokens,
    transition::fade,
    InteractiveStatefulWidget,
};
use crate::{
    icons::Icon,
    tui::{pages::PAGES, state::PageId},
};

const PANEL_WIDTH: u16 = 28;
const BACKDROP: Color = Color::Rgb(0, 0, 0);

/// What the menu asks the app to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Select(PageId),
    Close,
}

/// Input for syncing the menu with the navigation state.
pub struct NavMenuInput {
    pub open: bool,
    pub current: PageId,
}

/// State for the navigation menu widget.
#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
    cursor: SelectionState,
    action: Option<MenuAction>,
    regions: ClickRegions,
}

impl NavMenu {
    pub fn cursor(&self) -> Option<PageId> {
        self.cursor
            .selected()
            .and_then(|idx| PAGES.get(idx))
            .map(|entry| entry.id)
    }

    /// Pending action from the last handled key, if any.
    pub fn take_action(&mut self) -> Option<MenuAction> {
        self.action.take()
    }

    /// Click regions from the last render.
    pub fn take_regions(&mut self) -> ClickRegions {
        std::mem::take(&mut self.regions)
    }
}

/// Widget for rendering the slide-out menu over the page.
pub struct NavMenuWidget<'a> {
    tokens: &'a ThemeTokens,
    current: PageId,
    mouse: Option<Position>,
}

impl<'a> NavMenuWidget<'a> {
    pub const fn new(tokens: &'a ThemeTokens, current: PageId, mouse: Option<Position>) -> Self {
        Self {
            tokens,
            current,
            mouse,
        }
    }
}

impl StatefulWidget for NavMenuWidget<'_> {
    type State = NavMenu;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.regions.clear();
        if !state.open {
            return;
        }

        fade(buf, area, BACKDROP, 0.5);
        state.regions.add(area, ClickTarget::CloseMenu);

        let width = PANEL_WIDTH.min(area.width);
        let panel = Rect::new(area.right() - width, area.y, width, area.height);
        Clear.render(panel, buf);
        let block = Block::new()
            .borders(Borders::LEFT)
            .border_type(BorderType::Thick)
            .border_style(Style::new().fg(self.tokens.accent_border))
            .style(self.tokens.card())
            .padding(Padding::uniform(1));
        let inner = block.inner(panel);
        block.render(panel, buf);
        if inner.is_empty() {
            return;
        }

        Line::styled(
            "Sections",
            self.tokens.accent().add_modifier(Modifier::BOLD),
        )
        .render(inner, buf);
        let close = Rect::new(inner.right().saturating_sub(3), inner.y, 3.min(inner.width), 1);
        buf.set_string(close.x, close.y, Icon::X.glyph(), self.tokens.secondary());
        state.regions.add(close, ClickTarget::CloseMenu);

        let cursor = state.cursor();
        for (row, entry) in (0u16..).zip(PAGES.iter()) {
            let y = inner.y + 2 + row * 2;
            if y >= inner.bottom() {
                break;
            }
            let item = Rect::new(inner.x, y, inner.width, 1);
            let hovered = self.mouse.is_some_and(|mouse| item.contains(mouse));
            let (style, icon_style) = if entry.id == self.current {
                (self.tokens.active_tab(), self.tokens.active_tab())
            } else if hovered || cursor == Some(entry.id) {
                (self.tokens.hovered_tab(), self.tokens.hovered_tab())
            } else {
                (self.tokens.primary(), self.tokens.accent())
            };
            buf.set_style(item, style);
            Line::from(vec![
                Span::styled(format!(" {} ", entry.icon.glyph()), icon_style),
                Span::styled(entry.label, style),
            ])
            .render(item, buf);
            state.regions.add(item, ClickTarget::Page(entry.id));
        }
    }
}

impl InteractiveStatefulWidget for NavMenuWidget<'_> {
    type Input = NavMenuInput;
    type Event = KeyEvent;

    fn update_state(state: &mut Self::State, input: Self::Input) {
        if input.open && !state.open {
            state.cursor.select(input.current.index());
        }
        state.open = input.open;
    }

    fn handle_event(state: &mut Self::State, event: Self::Event) -> bool {
        if !state.open {
            return false;
        }
        match event.code {
            KeyCode::Char('j') | KeyCode::Down => state.cursor.select_next(PAGES.len()),
            KeyCode::Char('k') | KeyCode::Up => state.cursor.select_previous(PAGES.len()),
            KeyCode::Enter => {
                if let Some(page) = state.cursor() {
                    state.action = Some(MenuAction::Select(page));
                }
            }
            KeyCode::Esc | KeyCode::Char('m') => state.action = Some(MenuAction::Close),
            _ => return false,
        }
        true
    }
}
