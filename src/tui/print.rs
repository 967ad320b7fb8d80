//! Headless rendering of a page as plain text.

use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
use unicode_width::UnicodeWidthStr;

use super::{
    pages::render_page,
    state::{PageId, ThemeMode},
    widgets::{
        page_canvas::{layout_page, PageCanvas},
        selection::ClickRegions,
        theme::resolve_theme,
    },
};
use crate::{animation::Transform, content::CONTENT};

/// Render `page` at `width` columns, fully settled, and return its text.
pub fn page_text(page: PageId, width: u16) -> String {
    let tokens = resolve_theme(ThemeMode::default());
    let view = render_page(page, &CONTENT, tokens);
    let layout = layout_page(&view, width);
    let area = Rect::new(0, 0, width, layout.height);
    let mut buf = Buffer::empty(area);
    let settled = vec![Transform::IDENTITY; layout.cards.len()];
    PageCanvas::new(&view, &layout, tokens, &settled).render(
        area,
        &mut buf,
        &mut ClickRegions::default(),
    );
    buffer_text(&buf)
}

/// Buffer contents as lines with trailing blanks removed.
pub fn buffer_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        let mut line = String::new();
        let mut x = buf.area.left();
        while x < buf.area.right() {
            let symbol = buf[(x, y)].symbol();
            line.push_str(symbol);
            // Wide glyphs own the cells after them.
            x += (symbol.width() as u16).max(1);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use ratatui::text::Line;

    use super::*;
    use crate::{icons::Icon, tui::pages::CardLine};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    /// Every ASCII word `page` shows, short enough to fit a narrow card.
    fn short_words(page: PageId) -> Vec<String> {
        let view = render_page(page, &CONTENT, resolve_theme(ThemeMode::default()));
        let mut text: Vec<String> = view
            .columns
            .iter()
            .filter_map(|column| column.title)
            .map(|title| title.text.to_string())
            .collect();
        for card in view.cards() {
            text.extend(card.title.map(|title| title.text.to_string()));
            text.extend(card.heading.as_ref().map(line_text));
            text.extend(card.lines.iter().filter_map(|line| match line {
                CardLine::Text(line) | CardLine::Link(line, _) => Some(line_text(line)),
                CardLine::Rule => None,
            }));
        }
        text.iter()
            .flat_map(|line| line.split_whitespace())
            .filter(|word| word.is_ascii() && word.len() < 12)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn skills_page_lists_every_skill() {
        let text = page_text(PageId::Skills, 160);
        assert!(text.contains("Technical Skills"));
        for (title, items) in CONTENT.skills.groups() {
            assert!(text.contains(title), "missing {title}");
            for item in items {
                assert!(text.contains(item), "missing {item}");
            }
        }
    }

    #[test]
    fn interests_page_is_a_checklist() {
        let text = page_text(PageId::Interests, 100);
        let checked = text
            .lines()
            .filter(|line| line.contains(Icon::CheckCircle.glyph()))
            .count();
        assert_eq!(checked, CONTENT.interests.len());
    }

    #[test]
    fn wide_glyphs_are_not_followed_by_padding() {
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "✅ ok", ratatui::style::Style::new());
        assert_eq!(buffer_text(&buf), "✅ ok\n");
    }

    #[test]
    fn no_word_is_cut_off_at_any_width() {
        for page in PageId::ALL {
            let words = short_words(page);
            assert!(!words.is_empty(), "{page:?}");
            for width in 20..=200 {
                let text = page_text(page, width);
                for word in &words {
                    assert!(text.contains(word.as_str()), "{page:?} at {width} lost {word}");
                }
            }
        }
    }
}
