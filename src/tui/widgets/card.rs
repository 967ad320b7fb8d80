//! A single card rendered as a bordered panel (`CardWidget`).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::{
    selection::{ClickRegions, ClickTarget},
    theme::ThemeTokens,
};
use crate::tui::pages::{Card, CardLine, SectionTitle};

/// Border plus horizontal padding on each side.
const HORIZONTAL_CHROME: u16 = 4;
const VERTICAL_CHROME: u16 = 2;

fn wrapped(line: Line<'_>) -> Paragraph<'_> {
    Paragraph::new(line).wrap(Wrap { trim: true })
}

/// Rows `line` occupies when word-wrapped to `width` columns.
///
/// Measured with the same wrapper that draws the line, so a card is never
/// shorter than its text.
pub fn wrapped_rows(line: &Line<'_>, width: u16) -> u16 {
    let rows = wrapped(line.clone()).line_count(width.max(1)).max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn title_line(title: SectionTitle, icon: Style, text: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(title.icon.glyph(), icon),
        Span::raw("  "),
        Span::styled(title.text, text),
    ])
}

/// Rows a section title takes at `width`: the wrapped text plus its rule.
pub fn title_rows(title: SectionTitle, width: u16) -> u16 {
    wrapped_rows(&title_line(title, Style::new(), Style::new()), width) + 1
}

/// Draw `title` with a heavy rule on the last row of `area`.
pub fn render_section_title(
    title: SectionTitle,
    tokens: &ThemeTokens,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.is_empty() {
        return;
    }
    let text_area = Rect {
        height: area.height.saturating_sub(1).max(1),
        ..area
    };
    wrapped(title_line(title, tokens.accent(), tokens.heading())).render(text_area, buf);
    if area.height > 1 {
        buf.set_string(
            area.x,
            area.bottom() - 1,
            "━".repeat(usize::from(area.width)),
            Style::new().fg(tokens.accent_border),
        );
    }
}

fn line_rows(line: &CardLine, width: u16) -> u16 {
    match line {
        CardLine::Text(line) | CardLine::Link(line, _) => wrapped_rows(line, width),
        CardLine::Rule => 1,
    }
}

/// Total height of `card` when laid out `width` columns wide.
pub fn card_height(card: &Card, width: u16) -> u16 {
    let inner = width.saturating_sub(HORIZONTAL_CHROME).max(1);
    let title = card.title.map_or(0, |title| title_rows(title, inner));
    let heading = card
        .heading
        .as_ref()
        .map_or(0, |heading| wrapped_rows(heading, inner) + u16::from(card.heading_rule));
    let body: u16 = card.lines.iter().map(|line| line_rows(line, inner)).sum();
    VERTICAL_CHROME + title + heading + body
}

/// Widget for rendering one card. Click regions for its links are pushed
/// into the state.
pub struct CardWidget<'a> {
    card: &'a Card,
    tokens: &'a ThemeTokens,
    hovered: bool,
}

impl<'a> CardWidget<'a> {
    pub const fn new(card: &'a Card, tokens: &'a ThemeTokens, hovered: bool) -> Self {
        Self {
            card,
            tokens,
            hovered,
        }
    }

    fn block(&self) -> Block<'static> {
        let (border_type, border_color) = if self.hovered {
            (BorderType::Thick, self.tokens.card_shadow_hover)
        } else {
            (BorderType::Rounded, self.tokens.divider)
        };
        Block::bordered()
            .border_type(border_type)
            .border_style(Style::new().fg(border_color))
            .style(self.tokens.card())
            .padding(Padding::horizontal(1))
    }

    fn render_rule(&self, area: Rect, buf: &mut Buffer) {
        let rule = "─".repeat(usize::from(area.width));
        buf.set_string(area.x, area.y, rule, Style::new().fg(self.tokens.divider));
    }

    fn render_line(&self, line: &Line<'static>, area: Rect, buf: &mut Buffer) {
        wrapped(line.clone())
            .alignment(self.card.alignment)
            .render(area, buf);
    }

    fn render_accent_edge(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::new().fg(self.tokens.accent_border);
        for y in area.top()..area.bottom() {
            buf.set_string(area.x, y, "┃", style);
        }
    }
}

impl StatefulWidget for CardWidget<'_> {
    type State = ClickRegions;

    fn render(self, area: Rect, buf: &mut Buffer, regions: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);
        if self.card.accent_edge {
            self.render_accent_edge(area, buf);
        }
        if let Some(link) = &self.card.link {
            regions.add(area, ClickTarget::Link(link.clone()));
        }

        let bottom = inner.bottom();
        let mut y = inner.y;
        let mut take = |rows: u16| {
            let rows = rows.min(bottom.saturating_sub(y));
            let slot = Rect::new(inner.x, y, inner.width, rows);
            y += rows;
            slot
        };

        if let Some(title) = self.card.title {
            render_section_title(title, self.tokens, take(title_rows(title, inner.width)), buf);
        }
        if let Some(heading) = &self.card.heading {
            self.render_line(heading, take(wrapped_rows(heading, inner.width)), buf);
            if self.card.heading_rule {
                self.render_rule(take(1), buf);
            }
        }
        for line in &self.card.lines {
            let slot = take(line_rows(line, inner.width));
            if slot.is_empty() {
                break;
            }
            match line {
                CardLine::Text(line) => self.render_line(line, slot, buf),
                CardLine::Link(line, link) => {
                    self.render_line(line, slot, buf);
                    regions.add(slot, ClickTarget::Link(link.clone()));
                }
                CardLine::Rule => self.render_rule(slot, buf),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::{
        icons::{skill_glyph, Icon},
        tui::{
            pages::Link,
            state::ThemeMode,
            widgets::theme::resolve_theme,
        },
    };

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn wrapped_rows_counts_word_wrap() {
        assert_eq!(wrapped_rows(&Line::from(""), 10), 1);
        assert_eq!(wrapped_rows(&Line::from("short"), 10), 1);
        assert_eq!(wrapped_rows(&Line::from("aaaa bbbb cccc"), 9), 2);
        assert_eq!(wrapped_rows(&Line::from("aaaa bbbb cccc"), 4), 3);
        assert_eq!(wrapped_rows(&Line::from("abcdefghij"), 4), 3);
    }

    fn pill(label: &'static str) -> Line<'static> {
        Line::from(vec![Span::raw(skill_glyph(label)), Span::raw("  "), Span::raw(label)])
    }

    fn is_blank(buf: &Buffer, y: u16, xs: std::ops::Range<u16>) -> bool {
        xs.map(|x| buf[(x, y)].symbol()).all(|symbol| symbol.trim().is_empty())
    }

    #[test]
    fn measured_rows_match_drawn_rows_for_pills() {
        for label in ["Cybersecurity Concepts", "Github", "Networking Fundamentals"] {
            let line = pill(label);
            for width in 4..=40 {
                let area = Rect::new(0, 0, width, 12);
                let mut buf = Buffer::empty(area);
                wrapped(line.clone()).render(area, &mut buf);
                let drawn = (0..area.height)
                    .rev()
                    .find(|&y| !is_blank(&buf, y, 0..width))
                    .map_or(0, |y| y + 1);
                assert_eq!(wrapped_rows(&line, width), drawn, "{label} at {width}");
            }
        }
    }

    #[test]
    fn card_height_leaves_room_for_every_pill_word() {
        let tokens = resolve_theme(ThemeMode::Dark);
        let card = Card::default()
            .with_heading("Security", true)
            .text(pill("Cybersecurity Concepts"));
        for width in 17..=60 {
            let height = card_height(&card, width);
            let area = Rect::new(0, 0, width, height + 4);
            let mut buf = Buffer::empty(area);
            CardWidget::new(&card, tokens, false).render(
                area,
                &mut buf,
                &mut ClickRegions::default(),
            );
            let text: String = (0..area.height).map(|y| row_text(&buf, y)).collect();
            assert!(text.contains("Cybersecurity"), "width {width}");
            assert!(text.contains("Concepts"), "width {width}");

            let last_filled = (1..area.height - 1)
                .rev()
                .find(|&y| !is_blank(&buf, y, 2..width - 2))
                .unwrap_or(0);
            assert_eq!(last_filled + 2, height, "width {width}");
        }
    }

    #[test]
    fn long_section_titles_wrap_above_their_rule() {
        let title = SectionTitle::new(Icon::Heart, "Interests & Personal Details");
        assert_eq!(title_rows(title, 80), 2);
        let rows = title_rows(title, 12);
        assert!(rows > 2);

        let tokens = resolve_theme(ThemeMode::Light);
        let area = Rect::new(0, 0, 12, rows);
        let mut buf = Buffer::empty(area);
        render_section_title(title, tokens, area, &mut buf);
        let text: String = (0..rows - 1).map(|y| row_text(&buf, y)).collect();
        assert!(text.contains("Personal"));
        assert!(text.contains("Details"));
        assert!(row_text(&buf, rows - 1).starts_with('━'));
    }

    #[test]
    fn card_height_adds_chrome_title_and_rules() {
        let card = Card::default()
            .with_title(SectionTitle::new(Icon::User, "Title"))
            .with_heading("Heading", true)
            .text("one")
            .rule()
            .text("two");
        // 2 border + 2 title + 1 heading + 1 rule + 3 body rows
        assert_eq!(card_height(&card, 40), 9);
    }

    #[test]
    fn renders_text_and_collects_link_regions() {
        let tokens = resolve_theme(ThemeMode::Dark);
        let card = Card::default()
            .with_heading("Contact", false)
            .link_line("mail me", Link::Mail("a@b.c".to_string()));
        let area = Rect::new(0, 0, 30, card_height(&card, 30));
        let mut buf = Buffer::empty(area);
        let mut regions = ClickRegions::default();

        CardWidget::new(&card, tokens, false).render(area, &mut buf, &mut regions);

        assert!(row_text(&buf, 1).contains("Contact"));
        assert!(row_text(&buf, 2).contains("mail me"));
        assert_eq!(
            regions.hit(4, 2),
            Some(&ClickTarget::Link(Link::Mail("a@b.c".to_string())))
        );
        assert_eq!(buf[(5, 1)].bg, tokens.card_bg);
    }

    #[test]
    fn hovered_card_uses_glow_border() {
        let tokens = resolve_theme(ThemeMode::Light);
        let card = Card::default().text("x");
        let area = Rect::new(0, 0, 10, card_height(&card, 10));
        let mut buf = Buffer::empty(area);
        CardWidget::new(&card, tokens, true).render(area, &mut buf, &mut ClickRegions::default());
        assert_eq!(buf[(0, 0)].fg, tokens.card_shadow_hover);
        assert_ne!(buf[(0, 0)].fg, Color::Reset);
    }
}
