//! Navigation and theme state, owned by [`super::app::App`].

use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

/// Navigable sections, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    #[default]
    Home,
    Skills,
    Projects,
    #[value(name = "edu_exp")]
    EduExp,
    Interests,
}

impl PageId {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Skills,
        Self::Projects,
        Self::EduExp,
        Self::Interests,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Skills => 1,
            Self::Projects => 2,
            Self::EduExp => 3,
            Self::Interests => 4,
        }
    }

    /// Cycle to the next page (wraps around).
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Skills,
            Self::Skills => Self::Projects,
            Self::Projects => Self::EduExp,
            Self::EduExp => Self::Interests,
            Self::Interests => Self::Home,
        }
    }

    /// Cycle to the previous page (reverse of next).
    pub const fn prev(self) -> Self {
        match self {
            Self::Home => Self::Interests,
            Self::Skills => Self::Home,
            Self::Projects => Self::Skills,
            Self::EduExp => Self::Projects,
            Self::Interests => Self::EduExp,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The only mutable UI state: current page, current theme and the menu
/// overlay flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    page: PageId,
    theme: ThemeMode,
    menu_open: bool,
}

impl UiState {
    pub const fn new(page: PageId, theme: ThemeMode) -> Self {
        Self {
            page,
            theme,
            menu_open: false,
        }
    }

    pub const fn page(&self) -> PageId {
        self.page
    }

    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Select a page. Always closes the menu overlay.
    pub fn select_page(&mut self, page: PageId) {
        if self.page != page {
            debug!(from = ?self.page, to = ?page, "page selected");
        }
        self.page = page;
        self.menu_open = false;
    }

    pub fn next_page(&mut self) {
        self.select_page(self.page.next());
    }

    pub fn prev_page(&mut self) {
        self.select_page(self.page.prev());
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.name(), "theme toggled");
    }

    pub const fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
