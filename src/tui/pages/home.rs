//! Home page: hero, professional summary and contact details.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::{Card, Column, Grid, Link, SectionTitle};
use crate::{content::Profile, icons::Icon, tui::widgets::theme::ThemeTokens};

pub fn render(profile: &Profile, tokens: &ThemeTokens) -> Vec<Column> {
    let contact = &profile.contact;
    let github = Link::Web(contact.github.to_string());

    let hero = Card::default()
        .chrome()
        .centered()
        .linked(github.clone())
        .text(Line::styled(
            profile.name,
            tokens.heading().add_modifier(Modifier::UNDERLINED),
        ))
        .text(Line::styled(profile.title, tokens.accent()));

    let summary = Card::default()
        .with_title(SectionTitle::new(Icon::User, "Professional Summary"))
        .text(Line::from(vec![
            Span::styled("▌ ", tokens.accent()),
            Span::styled(
                format!("\"{}\"", profile.objective),
                tokens.secondary().add_modifier(Modifier::ITALIC),
            ),
        ]));

    let label = |icon: Icon, text: &'static str| {
        Line::from(vec![
            Span::styled(icon.glyph(), tokens.accent()),
            Span::styled(format!(" {text}"), tokens.secondary()),
        ])
    };
    let value = |text: String| Line::styled(text, tokens.primary().add_modifier(Modifier::BOLD));

    let details = Card::default()
        .with_title(SectionTitle::new(Icon::Mail, "Contact Details"))
        .text(label(Icon::Mail, "Email"))
        .link_line(
            Line::styled(contact.email, tokens.link()),
            Link::Mail(contact.email.to_string()),
        )
        .text("")
        .text(label(Icon::Github, "GitHub"))
        .link_line(
            Line::styled(format!("@{}", contact.github_handle()), tokens.link()),
            github,
        )
        .text("")
        .text(label(Icon::Phone, "Phone"))
        .text(value(contact.phone.to_string()))
        .text("")
        .text(label(Icon::MapPin, "Location"))
        .text(value(contact.location.to_string()));

    vec![Column {
        title: None,
        grid: Grid::STACK,
        cards: vec![hero, summary, details],
    }]
}
