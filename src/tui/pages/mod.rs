//! Page registry and the view model every page renders to.
//!
//! Renderers are pure: they read a slice of the content store and the theme
//! tokens and return a [`PageView`]. Drawing happens in
//! [`crate::tui::widgets::page_canvas`].

mod home;
mod interests;
mod projects;
mod skills;
mod timeline;

use ratatui::{layout::Alignment, text::Line};

use crate::{
    animation::Entrance,
    content::ContentStore,
    icons::Icon,
    tui::{state::PageId, widgets::theme::ThemeTokens},
};

/// An outbound link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Web(String),
    Mail(String),
}

impl Link {
    /// URL handed to the system opener.
    pub fn target(&self) -> String {
        match self {
            Self::Web(url) => url.clone(),
            Self::Mail(address) => format!("mailto:{address}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTitle {
    pub icon: Icon,
    pub text: &'static str,
}

impl SectionTitle {
    pub const fn new(icon: Icon, text: &'static str) -> Self {
        Self { icon, text }
    }
}

#[derive(Debug, Clone)]
pub enum CardLine {
    Text(Line<'static>),
    Link(Line<'static>, Link),
    /// Horizontal divider.
    Rule,
}

/// A single card: the unit of layout and of entrance animation.
#[derive(Debug, Clone)]
pub struct Card {
    pub title: Option<SectionTitle>,
    pub heading: Option<Line<'static>>,
    /// Draw a divider under the heading.
    pub heading_rule: bool,
    pub lines: Vec<CardLine>,
    /// Clicking anywhere on the card follows this link.
    pub link: Option<Link>,
    /// Thick accent stripe on the left edge.
    pub accent_edge: bool,
    pub alignment: Alignment,
    pub entrance: Entrance,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            title: None,
            heading: None,
            heading_rule: false,
            lines: Vec::new(),
            link: None,
            accent_edge: false,
            alignment: Alignment::Left,
            entrance: Entrance::Animated,
        }
    }
}

impl Card {
    #[must_use]
    pub fn with_title(mut self, title: SectionTitle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<Line<'static>>, rule: bool) -> Self {
        self.heading = Some(heading.into());
        self.heading_rule = rule;
        self
    }

    #[must_use]
    pub fn text(mut self, line: impl Into<Line<'static>>) -> Self {
        self.lines.push(CardLine::Text(line.into()));
        self
    }

    #[must_use]
    pub fn link_line(mut self, line: impl Into<Line<'static>>, link: Link) -> Self {
        self.lines.push(CardLine::Link(line.into(), link));
        self
    }

    #[must_use]
    pub fn rule(mut self) -> Self {
        self.lines.push(CardLine::Rule);
        self
    }

    #[must_use]
    pub fn linked(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    #[must_use]
    pub const fn accent_edge(mut self) -> Self {
        self.accent_edge = true;
        self
    }

    #[must_use]
    pub const fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    /// Opt out of the entrance animation.
    #[must_use]
    pub const fn chrome(mut self) -> Self {
        self.entrance = Entrance::Static;
        self
    }

    /// Number of text lines, ignoring dividers.
    #[cfg(test)]
    pub fn text_line_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| !matches!(line, CardLine::Rule))
            .count()
    }
}

/// How cards in a column are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub max_columns: u16,
    pub min_card_width: u16,
}

impl Grid {
    pub const STACK: Self = Self {
        max_columns: 1,
        min_card_width: 1,
    };

    pub const fn new(max_columns: u16, min_card_width: u16) -> Self {
        Self {
            max_columns,
            min_card_width,
        }
    }

    /// Cards per row at the given width.
    pub fn columns_for(self, width: u16) -> u16 {
        (width / self.min_card_width.max(1)).clamp(1, self.max_columns.max(1))
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub title: Option<SectionTitle>,
    pub grid: Grid,
    pub cards: Vec<Card>,
}

/// The rendered form of a page.
#[derive(Debug, Clone)]
pub struct PageView {
    pub page: PageId,
    pub columns: Vec<Column>,
}

impl PageView {
    /// All cards, in block order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|column| column.cards.iter())
    }
}

#[cfg(test)]
impl PageView {
    /// Column and in-card section titles, in order.
    pub fn titles(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .flat_map(|column| {
                column
                    .title
                    .iter()
                    .chain(column.cards.iter().filter_map(|card| card.title.as_ref()))
                    .map(|title| title.text)
            })
            .collect()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.cards().flat_map(|card| {
            card.link.iter().chain(card.lines.iter().filter_map(|line| match line {
                CardLine::Link(_, link) => Some(link),
                CardLine::Text(_) | CardLine::Rule => None,
            }))
        })
    }
}

/// One entry of the page registry.
#[derive(Debug, Clone, Copy)]
pub struct PageEntry {
    pub id: PageId,
    pub label: &'static str,
    pub icon: Icon,
}

pub static PAGES: [PageEntry; 5] = [
    PageEntry {
        id: PageId::Home,
        label: "Summary",
        icon: Icon::User,
    },
    PageEntry {
        id: PageId::Skills,
        label: "Skills",
        icon: Icon::Code,
    },
    PageEntry {
        id: PageId::Projects,
        label: "Projects",
        icon: Icon::Layers,
    },
    PageEntry {
        id: PageId::EduExp,
        label: "Timeline",
        icon: Icon::GraduationCap,
    },
    PageEntry {
        id: PageId::Interests,
        label: "Personal",
        icon: Icon::Heart,
    },
];

pub fn entry(page: PageId) -> &'static PageEntry {
    &PAGES[page.index()]
}

/// Render `page` from the content store with the given tokens.
pub fn render_page(page: PageId, content: &ContentStore, tokens: &ThemeTokens) -> PageView {
    let columns = match page {
        PageId::Home => home::render(&content.profile, tokens),
        PageId::Skills => skills::render(&content.skills, tokens),
        PageId::Projects => projects::render(content.projects, tokens),
        PageId::EduExp => timeline::render(content.education, content.experience, tokens),
        PageId::Interests => interests::render(content.interests, tokens),
    };
    PageView { page, columns }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::{
        content::{ProjectItem, CONTENT},
        tui::{state::ThemeMode, widgets::theme::resolve_theme},
    };

    fn view(page: PageId) -> PageView {
        render_page(page, &CONTENT, resolve_theme(ThemeMode::Dark))
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn registry_is_in_tab_order() {
        let ids: Vec<PageId> = PAGES.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, PageId::ALL);
        for page in PageId::ALL {
            assert_eq!(entry(page).id, page);
        }
    }

    #[test]
    fn every_page_has_its_title_and_card_count() {
        let cases: [(PageId, &str, usize); 5] = [
            (PageId::Home, "Professional Summary", 3),
            (PageId::Skills, "Technical Skills", 4),
            (PageId::Projects, "Key Projects", CONTENT.projects.len()),
            (
                PageId::EduExp,
                "Academic Qualification",
                CONTENT.education.len() + CONTENT.experience.len(),
            ),
            (PageId::Interests, "Interests & Personal Details", 1),
        ];
        for (page, title, cards) in cases {
            let view = view(page);
            assert_eq!(view.page, page);
            assert!(view.titles().contains(&title), "{page:?} lacks {title}");
            assert_eq!(view.cards().count(), cards, "{page:?}");
        }
    }

    #[test]
    fn projects_page_has_one_card_per_project_in_order() {
        let view = view(PageId::Projects);
        let names: Vec<String> = view
            .cards()
            .filter_map(|card| card.heading.as_ref().map(line_text))
            .collect();
        assert_eq!(names.len(), 3);
        for (name, project) in names.iter().zip(CONTENT.projects) {
            assert!(name.ends_with(project.name));
        }
    }

    #[test]
    fn timeline_has_two_columns_matching_content() {
        let view = view(PageId::EduExp);
        assert_eq!(view.columns.len(), 2);
        assert_eq!(view.columns[0].cards.len(), CONTENT.education.len());
        assert_eq!(view.columns[1].cards.len(), CONTENT.experience.len());
        assert!(view.titles().contains(&"Professional Experience"));
    }

    #[test]
    fn interests_render_as_checklist() {
        let view = view(PageId::Interests);
        let card = view.cards().next().expect("interests card");
        assert_eq!(card.text_line_count(), CONTENT.interests.len());
        for (line, interest) in card.lines.iter().zip(CONTENT.interests) {
            let CardLine::Text(line) = line else {
                panic!("unexpected line kind");
            };
            let text = line_text(line);
            assert!(text.starts_with(Icon::CheckCircle.glyph()));
            assert!(text.ends_with(interest));
        }
    }

    #[test]
    fn home_links_to_mail_and_github() {
        let view = view(PageId::Home);
        let links: Vec<&Link> = view.links().collect();
        assert!(links.contains(&&Link::Mail(CONTENT.profile.contact.email.to_string())));
        assert!(links.contains(&&Link::Web(CONTENT.profile.contact.github.to_string())));
        assert_eq!(
            Link::Mail("a@b.c".to_string()).target(),
            "mailto:a@b.c"
        );
    }

    #[test]
    fn hero_card_is_chrome() {
        let view = view(PageId::Home);
        let entrances: Vec<Entrance> = view.cards().map(|card| card.entrance).collect();
        assert_eq!(
            entrances,
            [Entrance::Static, Entrance::Animated, Entrance::Animated]
        );
    }

    #[test]
    fn unknown_project_icon_still_renders_a_card_with_default_glyph() {
        static ODD: [ProjectItem; 1] = [ProjectItem {
            name: "Mystery",
            tech: "Unknown",
            description: "Icon key that is not in the lookup.",
            icon_key: "Rocket",
        }];
        let columns = projects::render(&ODD, resolve_theme(ThemeMode::Dark));
        let card = &columns[0].cards[0];
        let heading = line_text(card.heading.as_ref().expect("heading"));
        assert!(heading.starts_with(Icon::default().glyph()));
        assert!(heading.ends_with("Mystery"));
    }

    #[test]
    fn grid_columns_follow_width() {
        let grid = Grid::new(4, 24);
        assert_eq!(grid.columns_for(10), 1);
        assert_eq!(grid.columns_for(50), 2);
        assert_eq!(grid.columns_for(200), 4);
        assert_eq!(Grid::STACK.columns_for(200), 1);
    }

    #[test]
    fn theme_changes_styles_not_content() {
        let dark = render_page(PageId::Skills, &CONTENT, resolve_theme(ThemeMode::Dark));
        let light = render_page(PageId::Skills, &CONTENT, resolve_theme(ThemeMode::Light));

        let texts = |view: &PageView| -> Vec<String> {
            view.cards()
                .flat_map(|card| card.lines.iter())
                .filter_map(|line| match line {
                    CardLine::Text(line) => Some(line_text(line)),
                    CardLine::Link(..) | CardLine::Rule => None,
                })
                .collect()
        };
        assert_eq!(texts(&dark), texts(&light));

        let bg = |view: &PageView| match view.cards().next().map(|card| &card.lines[0]) {
            Some(CardLine::Text(line)) => line.style.bg,
            _ => None,
        };
        assert_eq!(bg(&dark), Some(Color::Rgb(16, 61, 68)));
        assert_eq!(bg(&light), Some(Color::Rgb(198, 196, 244)));
    }
}
