//! Reusable selection state and click region handling.

use ratatui::layout::{Position, Rect};

use crate::tui::{pages::Link, state::PageId};

/// What a click on a region does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Page(PageId),
    ToggleTheme,
    OpenMenu,
    CloseMenu,
    Link(Link),
}

/// A clickable region mapped to a target.
#[derive(Debug, Clone)]
pub struct ClickRegion {
    pub area: Rect,
    pub target: ClickTarget,
}

/// Click regions collected during one render, in paint order.
#[derive(Debug, Default)]
pub struct ClickRegions {
    regions: Vec<ClickRegion>,
}

impl ClickRegions {
    /// Clear click regions (call at start of render).
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn add(&mut self, area: Rect, target: ClickTarget) {
        if area.is_empty() {
            return;
        }
        self.regions.push(ClickRegion { area, target });
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = ClickRegion>) {
        self.regions.extend(other);
    }

    pub fn take(&mut self) -> Vec<ClickRegion> {
        std::mem::take(&mut self.regions)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &ClickRegion> {
        self.regions.iter()
    }

    /// Topmost region containing `(x, y)`; later regions paint over earlier
    /// ones.
    pub fn hit(&self, x: u16, y: u16) -> Option<&ClickTarget> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.area.contains(Position::new(x, y)))
            .map(|region| &region.target)
    }
}

/// Cursor over a fixed list of navigable items.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub const fn select(&mut self, index: usize) {
        self.selected_index = Some(index);
    }

    /// Move selection to previous item.
    pub fn select_previous(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Move selection to next item.
    pub const fn select_next(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) if i < item_count - 1 => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub const fn selected(&self) -> Option<usize> {
        self.selected_index
    }
}
