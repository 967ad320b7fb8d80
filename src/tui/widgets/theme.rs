//! Theme tokens and the theme resolver.

use ratatui::style::{Color, Modifier, Style};

use crate::tui::state::ThemeMode;

/// Resolved colour bundle for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub app_bg: Color,
    pub card_bg: Color,
    pub primary_text: Color,
    pub secondary_text: Color,
    pub accent: Color,
    pub accent_bg: Color,
    pub accent_bg_active: Color,
    pub accent_border: Color,
    pub hover_text: Color,
    pub hover_bg: Color,
    /// Border colour of a hovered card (the "glow").
    pub card_shadow_hover: Color,
    pub divider: Color,
    pub on_accent: Color,
    pub link: Color,
    pub toggle: Color,
}

// Tailwind palette values. Translucent tokens are pre-blended over their surface.
static DARK: ThemeTokens = ThemeTokens {
    app_bg: Color::Rgb(0, 0, 0),
    card_bg: Color::Rgb(17, 24, 39),
    primary_text: Color::Rgb(255, 255, 255),
    secondary_text: Color::Rgb(156, 163, 175),
    accent: Color::Rgb(45, 212, 191),
    accent_bg: Color::Rgb(13, 148, 136),
    accent_bg_active: Color::Rgb(16, 61, 68),
    accent_border: Color::Rgb(20, 184, 166),
    hover_text: Color::Rgb(94, 234, 212),
    hover_bg: Color::Rgb(31, 41, 55),
    card_shadow_hover: Color::Rgb(10, 92, 83),
    divider: Color::Rgb(55, 65, 81),
    on_accent: Color::Rgb(255, 255, 255),
    link: Color::Rgb(94, 234, 212),
    toggle: Color::Rgb(45, 212, 191),
};

static LIGHT: ThemeTokens = ThemeTokens {
    app_bg: Color::Rgb(255, 255, 255),
    card_bg: Color::Rgb(249, 250, 251),
    primary_text: Color::Rgb(17, 24, 39),
    secondary_text: Color::Rgb(75, 85, 99),
    accent: Color::Rgb(79, 70, 229),
    accent_bg: Color::Rgb(79, 70, 229),
    accent_bg_active: Color::Rgb(198, 196, 244),
    accent_border: Color::Rgb(99, 102, 241),
    hover_text: Color::Rgb(67, 56, 202),
    hover_bg: Color::Rgb(243, 244, 246),
    card_shadow_hover: Color::Rgb(165, 180, 252),
    divider: Color::Rgb(229, 231, 235),
    on_accent: Color::Rgb(255, 255, 255),
    link: Color::Rgb(67, 56, 202),
    toggle: Color::Rgb(79, 70, 229),
};

/// Resolve the tokens for a theme mode.
///
/// Each mode maps to one static bundle, so repeated calls return the same
/// reference.
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> &'static ThemeTokens {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

impl ThemeTokens {
    /// Every token with its name.
    #[cfg(test)]
    pub const fn entries(&self) -> [(&'static str, Color); 15] {
        [
            ("app_bg", self.app_bg),
            ("card_bg", self.card_bg),
            ("primary_text", self.primary_text),
            ("secondary_text", self.secondary_text),
            ("accent", self.accent),
            ("accent_bg", self.accent_bg),
            ("accent_bg_active", self.accent_bg_active),
            ("accent_border", self.accent_border),
            ("hover_text", self.hover_text),
            ("hover_bg", self.hover_bg),
            ("card_shadow_hover", self.card_shadow_hover),
            ("divider", self.divider),
            ("on_accent", self.on_accent),
            ("link", self.link),
            ("toggle", self.toggle),
        ]
    }

    pub const fn base(&self) -> Style {
        Style::new().fg(self.primary_text).bg(self.app_bg)
    }

    pub const fn card(&self) -> Style {
        Style::new().fg(self.primary_text).bg(self.card_bg)
    }

    pub const fn primary(&self) -> Style {
        Style::new().fg(self.primary_text)
    }

    pub const fn secondary(&self) -> Style {
        Style::new().fg(self.secondary_text)
    }

    pub const fn accent(&self) -> Style {
        Style::new().fg(self.accent)
    }

    pub const fn heading(&self) -> Style {
        Style::new()
            .fg(self.primary_text)
            .add_modifier(Modifier::BOLD)
    }

    pub const fn link(&self) -> Style {
        Style::new()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Tab or menu entry for the current page.
    pub const fn active_tab(&self) -> Style {
        Style::new()
            .fg(self.on_accent)
            .bg(self.accent_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub const fn hovered_tab(&self) -> Style {
        Style::new().fg(self.hover_text).bg(self.hover_bg)
    }
}
