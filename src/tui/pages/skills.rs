//! Skills page: four skill groups side by side.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::{Card, Column, Grid, SectionTitle};
use crate::{
    content::SkillSet,
    icons::{skill_glyph, Icon},
    tui::widgets::theme::ThemeTokens,
};

pub fn render(skills: &SkillSet, tokens: &ThemeTokens) -> Vec<Column> {
    let pill = Style::new().bg(tokens.accent_bg_active);
    let cards = skills
        .groups()
        .into_iter()
        .map(|(title, items)| {
            items.iter().fold(
                Card::default().with_heading(Line::styled(title, tokens.heading()), true),
                |card, &item| {
                    card.text(
                        Line::from(vec![
                            Span::raw(skill_glyph(item)),
                            Span::raw("  "),
                            Span::styled(item, tokens.primary()),
                        ])
                        .style(pill),
                    )
                },
            )
        })
        .collect();

    vec![Column {
        title: Some(SectionTitle::new(Icon::Code, "Technical Skills")),
        grid: Grid::new(4, 26),
        cards,
    }]
}
