//! Projects page: one card per project.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::{Card, Column, Grid, SectionTitle};
use crate::{content::ProjectItem, icons::Icon, tui::widgets::theme::ThemeTokens};

pub fn render(projects: &[ProjectItem], tokens: &ThemeTokens) -> Vec<Column> {
    let cards = projects
        .iter()
        .map(|project| {
            Card::default()
                .with_heading(
                    Line::from(vec![
                        Span::styled(project.icon().glyph(), tokens.accent()),
                        Span::raw(" "),
                        Span::styled(project.name, tokens.heading()),
                    ]),
                    true,
                )
                .text(Line::styled(
                    project.tech,
                    tokens.secondary().add_modifier(Modifier::ITALIC),
                ))
                .text("")
                .text(Line::styled(project.description, tokens.secondary()))
        })
        .collect();

    vec![Column {
        title: Some(SectionTitle::new(Icon::Layers, "Key Projects")),
        grid: Grid::new(2, 40),
        cards,
    }]
}
