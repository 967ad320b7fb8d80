//! Interests page: a single checklist card.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::{Card, Column, Grid, SectionTitle};
use crate::{icons::Icon, tui::widgets::theme::ThemeTokens};

pub fn render(interests: &[&'static str], tokens: &ThemeTokens) -> Vec<Column> {
    let checklist = interests.iter().fold(
        Card::default().with_heading(
            Line::styled(
                "Extra-Curricular Activities",
                tokens.accent().add_modifier(Modifier::BOLD),
            ),
            false,
        ),
        |card, &interest| {
            card.text(Line::from(vec![
                Span::styled(Icon::CheckCircle.glyph(), tokens.accent()),
                Span::raw(" "),
                Span::styled(interest, tokens.secondary()),
            ]))
        },
    );

    vec![Column {
        title: Some(SectionTitle::new(Icon::Heart, "Interests & Personal Details")),
        grid: Grid::new(2, 48),
        cards: vec![checklist],
    }]
}
