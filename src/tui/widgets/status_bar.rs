//! Status bar with keybindings and view status.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::{theme::ThemeTokens, InteractiveStatefulWidget};
use crate::tui::{
    pages,
    state::{PageId, ThemeMode},
};

/// Input for updating status bar state.
pub struct StatusBarInput {
    pub page: PageId,
    pub theme: ThemeMode,
    /// Animation engine status ("loading", "on" or "off").
    pub animations: &'static str,
}

/// State for the status bar widget.
#[derive(Debug, Default)]
pub struct StatusBar {
    page: PageId,
    theme: ThemeMode,
    animations: &'static str,
}

/// Widget for rendering the status bar.
pub struct StatusBarWidget<'a> {
    tokens: &'a ThemeTokens,
}

impl<'a> StatusBarWidget<'a> {
    pub const fn new(tokens: &'a ThemeTokens) -> Self {
        Self { tokens }
    }
}

impl StatefulWidget for StatusBarWidget<'_> {
    type State = StatusBar;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        const GLOBAL_KEYBINDINGS: &[(&str, &str)] = &[
            ("?", "help"),
            ("1-5", "section"),
            ("t", "theme"),
            ("m", "menu"),
            ("q", "quit"),
        ];

        let separator = Span::styled(" │ ", self.tokens.secondary());

        let key_spans = GLOBAL_KEYBINDINGS
            .iter()
            .enumerate()
            .flat_map(|(i, (key, desc))| {
                let prefix = (i > 0).then(|| separator.clone());
                prefix.into_iter().chain([
                    Span::styled(*key, self.tokens.accent()),
                    Span::styled(format!(": {desc}"), self.tokens.secondary()),
                ])
            });

        let status = Span::styled(
            format!(
                " [{} · {} · anim {}]",
                pages::entry(state.page).label,
                state.theme.name(),
                state.animations
            ),
            self.tokens.primary(),
        );

        let spans: Vec<Span> = key_spans.chain([status]).collect();
        Paragraph::new(Line::from(spans))
            .style(self.tokens.base())
            .render(area, buf);
    }
}

impl InteractiveStatefulWidget for StatusBarWidget<'_> {
    type Input = StatusBarInput;
    type Event = ();

    fn update_state(state: &mut Self::State, input: Self::Input) {
        state.page = input.page;
        state.theme = input.theme;
        state.animations = input.animations;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::theme::resolve_theme;

    #[test]
    fn shows_page_theme_and_animation_status() {
        let mut state = StatusBar::default();
        StatusBarWidget::update_state(
            &mut state,
            StatusBarInput {
                page: PageId::EduExp,
                theme: ThemeMode::Light,
                animations: "off",
            },
        );
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(resolve_theme(ThemeMode::Light)).render(area, &mut buf, &mut state);
        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("[Timeline · light · anim off]"), "{text}");
    }
}
