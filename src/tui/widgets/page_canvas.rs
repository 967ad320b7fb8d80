//! Page layout and drawing.
//!
//! A page is laid out once per (view, width) into a [`PageLayout`] whose
//! coordinates start at the origin. The canvas is drawn into an off-screen
//! buffer of the layout's full height and the app blits the visible window.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::StatefulWidget,
};

use super::{
    card::{card_height, render_section_title, title_rows, CardWidget},
    selection::ClickRegions,
    theme::ThemeTokens,
    transition::{fade, transformed_area},
};
use crate::{
    animation::{BlockId, Transform},
    tui::pages::{Column, PageView, SectionTitle},
};

const MARGIN: u16 = 2;
const GAP: u16 = 1;
const COLUMN_GAP: u16 = 2;
/// Narrowest content width at which two columns sit side by side.
const SIDE_BY_SIDE_MIN: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub block: BlockId,
    pub area: Rect,
}

#[derive(Debug, Clone, Copy)]
pub struct TitlePlacement {
    pub title: SectionTitle,
    pub area: Rect,
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub titles: Vec<TitlePlacement>,
    /// One placement per card, in block order.
    pub cards: Vec<Placement>,
}

impl PageLayout {
    /// Block under `(x, y)` in layout coordinates.
    pub fn block_at(&self, x: u16, y: u16) -> Option<BlockId> {
        self.cards
            .iter()
            .find(|placement| placement.area.contains(Position::new(x, y)))
            .map(|placement| placement.block)
    }
}

/// Lay a column out at `(x, y)`; returns the row below its last card.
fn layout_column(
    column: &Column,
    x: u16,
    mut y: u16,
    width: u16,
    next_block: &mut usize,
    layout: &mut PageLayout,
) -> u16 {
    if let Some(title) = column.title {
        let rows = title_rows(title, width);
        layout.titles.push(TitlePlacement {
            title,
            area: Rect::new(x, y, width, rows),
        });
        y += rows + GAP;
    }

    let per_row = column.grid.columns_for(width);
    let card_width = width.saturating_sub(GAP * (per_row - 1)) / per_row;
    for row in column.cards.chunks(usize::from(per_row)) {
        let height = row
            .iter()
            .map(|card| card_height(card, card_width))
            .max()
            .unwrap_or(0);
        let mut card_x = x;
        for _ in row {
            layout.cards.push(Placement {
                block: BlockId(*next_block),
                area: Rect::new(card_x, y, card_width, height),
            });
            *next_block += 1;
            card_x += card_width + GAP;
        }
        y += height + GAP;
    }
    y
}

/// Lay out `view` for a viewport `width` columns wide.
pub fn layout_page(view: &PageView, width: u16) -> PageLayout {
    let mut layout = PageLayout {
        width,
        ..PageLayout::default()
    };
    let content_width = width.saturating_sub(MARGIN * 2).max(1);
    let mut next_block = 0;
    let top = GAP;

    let bottom = if view.columns.len() == 2 && content_width >= SIDE_BY_SIDE_MIN {
        let column_width = (content_width - COLUMN_GAP) / 2;
        let right_x = MARGIN + column_width + COLUMN_GAP;
        let left = layout_column(
            &view.columns[0],
            MARGIN,
            top,
            column_width,
            &mut next_block,
            &mut layout,
        );
        let right = layout_column(
            &view.columns[1],
            right_x,
            top,
            column_width,
            &mut next_block,
            &mut layout,
        );
        left.max(right)
    } else {
        view.columns.iter().fold(top, |y, column| {
            layout_column(column, MARGIN, y, content_width, &mut next_block, &mut layout)
        })
    };
    layout.height = bottom;
    layout
}

/// Draws a laid-out page, applying each block's current transform.
pub struct PageCanvas<'a> {
    view: &'a PageView,
    layout: &'a PageLayout,
    tokens: &'a ThemeTokens,
    transforms: &'a [Transform],
    hovered: Option<BlockId>,
}

impl<'a> PageCanvas<'a> {
    pub const fn new(
        view: &'a PageView,
        layout: &'a PageLayout,
        tokens: &'a ThemeTokens,
        transforms: &'a [Transform],
    ) -> Self {
        Self {
            view,
            layout,
            tokens,
            transforms,
            hovered: None,
        }
    }

    #[must_use]
    pub const fn hovered(mut self, block: Option<BlockId>) -> Self {
        self.hovered = block;
        self
    }
}

impl StatefulWidget for PageCanvas<'_> {
    type State = ClickRegions;

    fn render(self, area: Rect, buf: &mut Buffer, regions: &mut Self::State) {
        buf.set_style(area, self.tokens.base());
        for placement in &self.layout.titles {
            let target = Rect {
                x: area.x + placement.area.x,
                y: area.y + placement.area.y,
                ..placement.area
            }
            .intersection(area);
            render_section_title(placement.title, self.tokens, target, buf);
        }

        for (card, placement) in self.view.cards().zip(&self.layout.cards) {
            let transform = self
                .transforms
                .get(placement.block.0)
                .copied()
                .unwrap_or(Transform::IDENTITY);
            if transform.opacity <= 0.0 {
                continue;
            }
            let slot = Rect {
                x: area.x + placement.area.x,
                y: area.y + placement.area.y,
                ..placement.area
            }
            .intersection(area);
            let hovered = self.hovered == Some(placement.block);
            if transform.is_identity() {
                CardWidget::new(card, self.tokens, hovered).render(slot, buf, regions);
                continue;
            }
            let target = transformed_area(slot, transform);
            CardWidget::new(card, self.tokens, hovered).render(target, buf, regions);
            fade(buf, target, self.tokens.app_bg, transform.opacity);
        }
    }
}
