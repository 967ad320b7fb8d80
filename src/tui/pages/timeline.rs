//! Education and experience, as two parallel columns.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::{Card, Column, Grid, SectionTitle};
use crate::{
    content::{EducationItem, ExperienceItem},
    icons::Icon,
    tui::widgets::theme::ThemeTokens,
};

pub fn render(
    education: &[EducationItem],
    experience: &[ExperienceItem],
    tokens: &ThemeTokens,
) -> Vec<Column> {
    let education_cards = education
        .iter()
        .map(|item| {
            Card::default()
                .accent_edge()
                .with_heading(Line::styled(item.qualification, tokens.heading()), false)
                .text(Line::styled(
                    item.institution,
                    tokens.accent().add_modifier(Modifier::BOLD),
                ))
                .text(Line::styled(format!("Year: {}", item.year), tokens.secondary()))
        })
        .collect();

    let experience_cards = experience
        .iter()
        .map(|item| {
            Card::default()
                .accent_edge()
                .with_heading(
                    Line::from(vec![
                        Span::styled(item.icon().glyph(), tokens.accent()),
                        Span::raw(" "),
                        Span::styled(item.title, tokens.heading()),
                    ]),
                    false,
                )
                .text(Line::styled(
                    item.company,
                    tokens.secondary().add_modifier(Modifier::BOLD),
                ))
                .text(Line::styled(
                    item.duration,
                    tokens.secondary().add_modifier(Modifier::ITALIC),
                ))
                .rule()
                .text(Line::styled(item.details, tokens.secondary()))
        })
        .collect();

    vec![
        Column {
            title: Some(SectionTitle::new(
                Icon::GraduationCap,
                "Academic Qualification",
            )),
            grid: Grid::STACK,
            cards: education_cards,
        },
        Column {
            title: Some(SectionTitle::new(Icon::Briefcase, "Professional Experience")),
            grid: Grid::STACK,
            cards: experience_cards,
        },
    ]
}
